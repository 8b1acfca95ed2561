use super::account::decode_timestamp;
use crate::codec::{FieldReader, FieldWriter};
use crate::error::Result;
use crate::store::{Keyed, Record};
use chrono::{DateTime, Utc};

pub const NAME_LEN: usize = 100;

pub const DEFAULT_CAPACITY: usize = 50;

/// Loan record keyed by the borrowed book's id; one live record per
/// borrowed book. The borrower id is caller-supplied, not minted.
#[derive(Debug, Clone, PartialEq)]
pub struct Borrower {
    pub book_id: i32,
    pub borrower_id: i32,
    pub borrower_name: String,
    pub due_date: DateTime<Utc>,
}

impl Record for Borrower {
    const ENCODED_LEN: usize = 4 + 4 + NAME_LEN + 8;
    const SNAPSHOT_FILE: &'static str = "borrowers.dat";

    fn encode(&self, w: &mut FieldWriter<'_>) {
        w.put_i32(self.book_id);
        w.put_i32(self.borrower_id);
        w.put_text(&self.borrower_name, NAME_LEN);
        w.put_i64(self.due_date.timestamp());
    }

    fn decode(r: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            book_id: r.take_i32()?,
            borrower_id: r.take_i32()?,
            borrower_name: r.take_text(NAME_LEN)?,
            due_date: decode_timestamp(r.take_i64()?)?,
        })
    }
}

impl Keyed for Borrower {
    fn key(&self) -> i32 {
        self.book_id
    }
}
