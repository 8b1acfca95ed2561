use crate::codec::{FieldReader, FieldWriter};
use crate::error::Result;
use crate::store::{Keyed, Record, Searchable};

pub const NAME_LEN: usize = 50;
pub const SPECIALIZATION_LEN: usize = 50;
pub const PHONE_LEN: usize = 15;
pub const SCHEDULE_LEN: usize = 100;

pub const DEFAULT_CAPACITY: usize = 20;
pub const ID_BASE: i32 = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
    pub id: i32,
    pub name: String,
    pub specialization: String,
    pub phone: String,
    /// Free-text availability, e.g. "Mon-Fri 9:00-13:00".
    pub schedule: String,
    pub consultation_fee: i32,
}

impl Record for Doctor {
    const ENCODED_LEN: usize = 4 + NAME_LEN + SPECIALIZATION_LEN + PHONE_LEN + SCHEDULE_LEN + 4;
    const SNAPSHOT_FILE: &'static str = "doctors.dat";

    fn encode(&self, w: &mut FieldWriter<'_>) {
        w.put_i32(self.id);
        w.put_text(&self.name, NAME_LEN);
        w.put_text(&self.specialization, SPECIALIZATION_LEN);
        w.put_text(&self.phone, PHONE_LEN);
        w.put_text(&self.schedule, SCHEDULE_LEN);
        w.put_i32(self.consultation_fee);
    }

    fn decode(r: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            id: r.take_i32()?,
            name: r.take_text(NAME_LEN)?,
            specialization: r.take_text(SPECIALIZATION_LEN)?,
            phone: r.take_text(PHONE_LEN)?,
            schedule: r.take_text(SCHEDULE_LEN)?,
            consultation_fee: r.take_i32()?,
        })
    }
}

impl Keyed for Doctor {
    fn key(&self) -> i32 {
        self.id
    }
}

impl Searchable for Doctor {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.specialization]
    }

    fn numeric_key(&self) -> Option<i32> {
        Some(self.id)
    }
}
