use crate::codec::{FieldReader, FieldWriter};
use crate::error::{CabinetError, Result};
use crate::store::{Keyed, Record};

pub const DATE_LEN: usize = 20;
pub const TIME_LEN: usize = 10;
pub const DIAGNOSIS_LEN: usize = 200;
pub const PRESCRIPTION_LEN: usize = 500;
pub const STATUS_LEN: usize = 20;

pub const DEFAULT_CAPACITY: usize = 200;
pub const ID_BASE: i32 = 4000;

/// Placeholder used until an appointment is completed.
pub const UNSET: &str = "N/A";

/// Closed status vocabulary, serialized as its exact original text and
/// compared byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Scheduled,
    Completed,
    Cancelled,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Scheduled => "Scheduled",
            Status::Completed => "Completed",
            Status::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "Scheduled" => Ok(Status::Scheduled),
            "Completed" => Ok(Status::Completed),
            "Cancelled" => Ok(Status::Cancelled),
            other => Err(CabinetError::Snapshot(format!(
                "unrecognized appointment status \"{}\"",
                other
            ))),
        }
    }
}

/// An appointment references its patient and doctor by identifier only;
/// the references are resolved by a later linear search and may dangle if
/// the referenced record was deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i32,
    pub patient_id: i32,
    pub doctor_id: i32,
    /// DD/MM/YYYY, free text.
    pub date: String,
    /// HH:MM, free text.
    pub time: String,
    pub diagnosis: String,
    pub prescription: String,
    pub fee: f32,
    pub status: Status,
}

impl Record for Appointment {
    const ENCODED_LEN: usize =
        4 + 4 + 4 + DATE_LEN + TIME_LEN + DIAGNOSIS_LEN + PRESCRIPTION_LEN + 4 + STATUS_LEN;
    const SNAPSHOT_FILE: &'static str = "appointments.dat";

    fn encode(&self, w: &mut FieldWriter<'_>) {
        w.put_i32(self.id);
        w.put_i32(self.patient_id);
        w.put_i32(self.doctor_id);
        w.put_text(&self.date, DATE_LEN);
        w.put_text(&self.time, TIME_LEN);
        w.put_text(&self.diagnosis, DIAGNOSIS_LEN);
        w.put_text(&self.prescription, PRESCRIPTION_LEN);
        w.put_f32(self.fee);
        w.put_text(self.status.as_str(), STATUS_LEN);
    }

    fn decode(r: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            id: r.take_i32()?,
            patient_id: r.take_i32()?,
            doctor_id: r.take_i32()?,
            date: r.take_text(DATE_LEN)?,
            time: r.take_text(TIME_LEN)?,
            diagnosis: r.take_text(DIAGNOSIS_LEN)?,
            prescription: r.take_text(PRESCRIPTION_LEN)?,
            fee: r.take_f32()?,
            status: Status::parse(&r.take_text(STATUS_LEN)?)?,
        })
    }
}

impl Keyed for Appointment {
    fn key(&self) -> i32 {
        self.id
    }
}
