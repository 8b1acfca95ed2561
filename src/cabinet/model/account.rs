use crate::codec::{FieldReader, FieldWriter};
use crate::error::{CabinetError, Result};
use crate::store::{Keyed, Record};
use chrono::{DateTime, TimeZone, Utc};

pub const NAME_LEN: usize = 100;
pub const ADDRESS_LEN: usize = 100;
pub const PHONE_LEN: usize = 15;
pub const TYPE_LEN: usize = 20;

pub const DEFAULT_CAPACITY: usize = 100;

/// Account numbers start at 1000 and advance with the live count.
pub const NUMBER_BASE: i32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Savings,
    Current,
}

impl AccountType {
    /// Exact serialized text, matched byte for byte.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Savings => "savings",
            AccountType::Current => "current",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "savings" => Ok(AccountType::Savings),
            "current" => Ok(AccountType::Current),
            other => Err(CabinetError::InvalidInput(format!(
                "account type must be \"savings\" or \"current\", got \"{}\"",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub number: i32,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub balance: f64,
    pub account_type: AccountType,
    pub last_transaction: DateTime<Utc>,
}

impl Record for Account {
    const ENCODED_LEN: usize = 4 + NAME_LEN + ADDRESS_LEN + PHONE_LEN + 8 + TYPE_LEN + 8;
    const SNAPSHOT_FILE: &'static str = "bank_data.dat";

    fn encode(&self, w: &mut FieldWriter<'_>) {
        w.put_i32(self.number);
        w.put_text(&self.name, NAME_LEN);
        w.put_text(&self.address, ADDRESS_LEN);
        w.put_text(&self.phone, PHONE_LEN);
        w.put_f64(self.balance);
        w.put_text(self.account_type.as_str(), TYPE_LEN);
        w.put_i64(self.last_transaction.timestamp());
    }

    fn decode(r: &mut FieldReader<'_>) -> Result<Self> {
        let number = r.take_i32()?;
        let name = r.take_text(NAME_LEN)?;
        let address = r.take_text(ADDRESS_LEN)?;
        let phone = r.take_text(PHONE_LEN)?;
        let balance = r.take_f64()?;
        let type_text = r.take_text(TYPE_LEN)?;
        let account_type = AccountType::parse(&type_text)
            .map_err(|_| CabinetError::Snapshot(format!("unrecognized account type \"{}\"", type_text)))?;
        let last_transaction = decode_timestamp(r.take_i64()?)?;
        Ok(Self {
            number,
            name,
            address,
            phone,
            balance,
            account_type,
            last_transaction,
        })
    }
}

impl Keyed for Account {
    fn key(&self) -> i32 {
        self.number
    }
}

pub(crate) fn decode_timestamp(secs: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| CabinetError::Snapshot(format!("timestamp {} out of range", secs)))
}
