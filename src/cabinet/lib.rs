//! # Cabinet Architecture
//!
//! Cabinet is a **UI-agnostic record-keeping library**. The CLI binary is one
//! client of the library; nothing inside the library assumes a terminal.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, renders tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic for each domain program                   │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store/, codec.rs)                             │
//! │  - Generic bounded Store<R> with linear-scan semantics      │
//! │  - Fixed-width snapshot persistence, one file per domain    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Store Model
//!
//! Every domain (contacts, accounts, patients, books, ...) is the same
//! pattern with a different record shape: a bounded ordered collection,
//! linear search, append, in-place update, and an order-preserving shifting
//! delete. `Store<R>` implements that pattern once; `model/` supplies the
//! record shapes that parameterize it.
//!
//! Persistence is deliberately primitive: a snapshot file is a back-to-back
//! sequence of fixed-width records with no header, no checksum and no
//! version tag. A store is loaded whole at the start of an invocation and
//! written whole at the end. There is no durability in between, no file
//! locking, and no support for concurrent processes sharing a data
//! directory. This matches the single-user sessions the format comes from.
//!
//! ## Module Overview
//!
//! - [`store`]: the generic bounded store and snapshot persistence
//! - [`codec`]: fixed-width field encoding/decoding
//! - [`model`]: domain record types and their schemas
//! - [`commands`]: business logic for each domain program
//! - [`config`]: capacity configuration
//! - [`error`]: error types
//! - `args`/`main`: argument parsing and rendering for the binary (not part
//!   of the lib API)

pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
