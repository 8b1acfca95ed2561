use crate::codec::{FieldReader, FieldWriter};
use crate::error::Result;
use crate::store::{Keyed, Record, Searchable};

pub const NAME_LEN: usize = 50;
pub const MANUFACTURER_LEN: usize = 50;
pub const EXPIRY_LEN: usize = 20;

pub const DEFAULT_CAPACITY: usize = 50;
pub const ID_BASE: i32 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct Medicine {
    pub id: i32,
    pub name: String,
    pub manufacturer: String,
    pub price: f32,
    pub quantity: i32,
    /// DD/MM/YYYY, free text.
    pub expiry_date: String,
}

impl Record for Medicine {
    const ENCODED_LEN: usize = 4 + NAME_LEN + MANUFACTURER_LEN + 4 + 4 + EXPIRY_LEN;
    const SNAPSHOT_FILE: &'static str = "medicines.dat";

    fn encode(&self, w: &mut FieldWriter<'_>) {
        w.put_i32(self.id);
        w.put_text(&self.name, NAME_LEN);
        w.put_text(&self.manufacturer, MANUFACTURER_LEN);
        w.put_f32(self.price);
        w.put_i32(self.quantity);
        w.put_text(&self.expiry_date, EXPIRY_LEN);
    }

    fn decode(r: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            id: r.take_i32()?,
            name: r.take_text(NAME_LEN)?,
            manufacturer: r.take_text(MANUFACTURER_LEN)?,
            price: r.take_f32()?,
            quantity: r.take_i32()?,
            expiry_date: r.take_text(EXPIRY_LEN)?,
        })
    }
}

impl Keyed for Medicine {
    fn key(&self) -> i32 {
        self.id
    }
}

impl Searchable for Medicine {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn numeric_key(&self) -> Option<i32> {
        Some(self.id)
    }
}
