use crate::codec::{FieldReader, FieldWriter};
use crate::error::Result;
use crate::store::{Record, Searchable};

pub const NAME_LEN: usize = 50;
pub const PHONE_LEN: usize = 15;
pub const EMAIL_LEN: usize = 50;
pub const ADDRESS_LEN: usize = 100;

pub const DEFAULT_CAPACITY: usize = 100;

/// Address-book entry. No identifier; contacts are addressed by searching
/// name or phone.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Record for Contact {
    const ENCODED_LEN: usize = NAME_LEN + PHONE_LEN + EMAIL_LEN + ADDRESS_LEN;
    const SNAPSHOT_FILE: &'static str = "address_book.dat";

    fn encode(&self, w: &mut FieldWriter<'_>) {
        w.put_text(&self.name, NAME_LEN);
        w.put_text(&self.phone, PHONE_LEN);
        w.put_text(&self.email, EMAIL_LEN);
        w.put_text(&self.address, ADDRESS_LEN);
    }

    fn decode(r: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            name: r.take_text(NAME_LEN)?,
            phone: r.take_text(PHONE_LEN)?,
            email: r.take_text(EMAIL_LEN)?,
            address: r.take_text(ADDRESS_LEN)?,
        })
    }
}

impl Searchable for Contact {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.phone]
    }
}
