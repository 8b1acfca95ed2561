use crate::codec::{FieldReader, FieldWriter};
use crate::error::Result;
use crate::store::{Keyed, Record, Searchable};

pub const TITLE_LEN: usize = 100;
pub const AUTHOR_LEN: usize = 100;

pub const DEFAULT_CAPACITY: usize = 100;

/// Book ids are 1-based: `count + 1` at insertion.
pub const ID_BASE: i32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: i32,
    /// Stored as a 0/1 integer flag, as in the original files.
    pub available: bool,
}

impl Record for Book {
    const ENCODED_LEN: usize = 4 + TITLE_LEN + AUTHOR_LEN + 4 + 4;
    const SNAPSHOT_FILE: &'static str = "books.dat";

    fn encode(&self, w: &mut FieldWriter<'_>) {
        w.put_i32(self.id);
        w.put_text(&self.title, TITLE_LEN);
        w.put_text(&self.author, AUTHOR_LEN);
        w.put_i32(self.year);
        w.put_bool(self.available);
    }

    fn decode(r: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            id: r.take_i32()?,
            title: r.take_text(TITLE_LEN)?,
            author: r.take_text(AUTHOR_LEN)?,
            year: r.take_i32()?,
            available: r.take_bool()?,
        })
    }
}

impl Keyed for Book {
    fn key(&self) -> i32 {
        self.id
    }
}

impl Searchable for Book {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.author]
    }

    fn numeric_key(&self) -> Option<i32> {
        Some(self.id)
    }
}
