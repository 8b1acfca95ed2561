//! Domain record schemas.
//!
//! Each module declares one domain's record shape: field list with fixed
//! widths, the snapshot file name, the identifier base where ids are
//! auto-assigned, and any closed status vocabulary. These are data, not
//! behavior; the behavior lives in [`crate::store`] and
//! [`crate::commands`].

pub mod account;
pub mod appointment;
pub mod book;
pub mod borrower;
pub mod contact;
pub mod doctor;
pub mod medicine;
pub mod patient;
pub mod student;
pub mod user;
