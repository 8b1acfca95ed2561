//! # Store Layer
//!
//! The one reusable abstraction behind every domain program: a bounded,
//! ordered collection of fixed-shape records with linear-scan semantics.
//!
//! Every domain here is the same shape with different fields: append a
//! record, scan for it later, patch it in place, delete it by shifting the
//! tail down one slot. [`Store`] implements that once, generically, and the
//! record types in [`crate::model`] parameterize it through three traits:
//!
//! - [`Record`]: fixed-width encode/decode plus the schema constants
//!   (encoded length, snapshot file name)
//! - [`Keyed`]: records addressed by a numeric identifier
//! - [`Searchable`]: records findable by substring over their text fields
//!
//! The capacity is a construction-time value, not a compile-time constant;
//! [`crate::config`] supplies per-domain defaults.
//!
//! ## Semantics worth stating
//!
//! - Deletion shifts subsequent records left, preserving insertion order.
//!   O(n), and identifiers stay attached to their record rather than their
//!   slot.
//! - Identifiers minted as `base + count` can collide with a live record
//!   after a deletion in an earlier session. That is inherited behavior,
//!   kept for parity; see DESIGN.md.
//! - No duplicate-key check at this level. The two domains that enforce
//!   uniqueness do so in their command modules.

use crate::codec::{FieldReader, FieldWriter};
use crate::error::{CabinetError, Result};

pub mod snapshot;

/// A fixed-shape record that can round-trip through a snapshot file.
pub trait Record: Clone {
    /// Encoded size in bytes; every record of a type occupies exactly this.
    const ENCODED_LEN: usize;

    /// File name of this domain's snapshot within the data directory.
    const SNAPSHOT_FILE: &'static str;

    fn encode(&self, w: &mut FieldWriter<'_>);
    fn decode(r: &mut FieldReader<'_>) -> Result<Self>;
}

/// Records addressed by a numeric identifier.
pub trait Keyed {
    fn key(&self) -> i32;
}

/// Records findable by substring search over their text fields.
pub trait Searchable {
    /// Text fields the search term is matched against, OR-combined.
    fn haystacks(&self) -> Vec<&str>;

    /// Numeric identifier compared against a leading-digit search term.
    fn numeric_key(&self) -> Option<i32> {
        None
    }
}

/// Bounded, ordered collection of one domain's records.
#[derive(Debug, Clone)]
pub struct Store<R> {
    capacity: usize,
    records: Vec<R>,
}

impl<R: Record> Store<R> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            records: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Append a record, returning the index it landed at.
    pub fn create(&mut self, record: R) -> Result<usize> {
        if self.is_full() {
            return Err(CabinetError::CapacityExceeded(self.capacity));
        }
        self.records.push(record);
        Ok(self.records.len() - 1)
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut R> {
        self.records.get_mut(index)
    }

    /// Remove the record at `index`, shifting everything after it down one
    /// slot. Surviving records keep their relative order.
    pub fn delete_at(&mut self, index: usize) -> Result<R> {
        if index >= self.records.len() {
            return Err(CabinetError::NotFound(format!(
                "no record at index {}",
                index
            )));
        }
        Ok(self.records.remove(index))
    }

    /// Live records in store order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Point-in-time copy of the live records; restartable, unlike the lazy
    /// search iterator.
    pub fn all(&self) -> Vec<R> {
        self.records.clone()
    }
}

impl<R: Record + Keyed> Store<R> {
    /// Linear scan from index 0; first match wins.
    pub fn find_by_key(&self, key: i32) -> Option<usize> {
        self.records.iter().position(|r| r.key() == key)
    }

    /// Identifier minted for the next insertion: `base + count`.
    pub fn next_key(&self, base: i32) -> i32 {
        base + self.records.len() as i32
    }
}

impl<R: Record + Searchable> Store<R> {
    /// Lazy index sequence of records matching `term`: case-sensitive
    /// substring containment over the text fields, plus a numeric identifier
    /// comparison when the term starts with an ASCII digit. Re-scans on
    /// every call.
    pub fn search<'a>(&'a self, term: &'a str) -> impl Iterator<Item = usize> + 'a {
        let wanted_key = leading_int(term);
        self.records.iter().enumerate().filter_map(move |(i, r)| {
            let text_hit = r.haystacks().iter().any(|h| h.contains(term));
            let key_hit = match (wanted_key, r.numeric_key()) {
                (Some(k), Some(key)) => key == k,
                _ => false,
            };
            (text_hit || key_hit).then_some(i)
        })
    }
}

/// `atoi` semantics: parse the leading run of ASCII digits, if any.
fn leading_int(term: &str) -> Option<i32> {
    let digits: &str = term
        .find(|c: char| !c.is_ascii_digit())
        .map(|end| &term[..end])
        .unwrap_or(term);
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}
