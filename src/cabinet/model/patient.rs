use crate::codec::{FieldReader, FieldWriter};
use crate::error::Result;
use crate::store::{Keyed, Record, Searchable};

pub const NAME_LEN: usize = 50;
pub const ADDRESS_LEN: usize = 100;
pub const PHONE_LEN: usize = 15;
pub const BLOOD_GROUP_LEN: usize = 5;
pub const ALLERGIES_LEN: usize = 200;
pub const HISTORY_LEN: usize = 500;

pub const DEFAULT_CAPACITY: usize = 100;
pub const ID_BASE: i32 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub age: i32,
    /// 'M' or 'F' in the source data; kept as a plain character.
    pub gender: char,
    pub blood_group: String,
    pub allergies: String,
    pub medical_history: String,
}

impl Record for Patient {
    const ENCODED_LEN: usize =
        4 + NAME_LEN + ADDRESS_LEN + PHONE_LEN + 4 + 1 + BLOOD_GROUP_LEN + ALLERGIES_LEN + HISTORY_LEN;
    const SNAPSHOT_FILE: &'static str = "patients.dat";

    fn encode(&self, w: &mut FieldWriter<'_>) {
        w.put_i32(self.id);
        w.put_text(&self.name, NAME_LEN);
        w.put_text(&self.address, ADDRESS_LEN);
        w.put_text(&self.phone, PHONE_LEN);
        w.put_i32(self.age);
        w.put_char(self.gender);
        w.put_text(&self.blood_group, BLOOD_GROUP_LEN);
        w.put_text(&self.allergies, ALLERGIES_LEN);
        w.put_text(&self.medical_history, HISTORY_LEN);
    }

    fn decode(r: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            id: r.take_i32()?,
            name: r.take_text(NAME_LEN)?,
            address: r.take_text(ADDRESS_LEN)?,
            phone: r.take_text(PHONE_LEN)?,
            age: r.take_i32()?,
            gender: r.take_char()?,
            blood_group: r.take_text(BLOOD_GROUP_LEN)?,
            allergies: r.take_text(ALLERGIES_LEN)?,
            medical_history: r.take_text(HISTORY_LEN)?,
        })
    }
}

impl Keyed for Patient {
    fn key(&self) -> i32 {
        self.id
    }
}

impl Searchable for Patient {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn numeric_key(&self) -> Option<i32> {
        Some(self.id)
    }
}
