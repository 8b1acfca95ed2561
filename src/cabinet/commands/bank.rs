use crate::commands::{index_by_key, patch_text, CmdMessage, CmdOutcome};
use crate::error::{CabinetError, Result};
use crate::model::account::{Account, AccountType, NUMBER_BASE};
use crate::store::Store;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub account_type: Option<AccountType>,
}

/// Open an account with a minted number (1000 + live count).
pub fn open_account(
    store: &mut Store<Account>,
    name: String,
    address: String,
    phone: String,
    account_type: AccountType,
    initial_deposit: f64,
    now: DateTime<Utc>,
) -> Result<CmdOutcome<Account>> {
    let account = Account {
        number: store.next_key(NUMBER_BASE),
        name,
        address,
        phone,
        balance: initial_deposit,
        account_type,
        last_transaction: now,
    };
    let opened = account.clone();
    store.create(account)?;
    Ok(CmdOutcome::new(opened.clone()).with_message(CmdMessage::success(format!(
        "Account created. Account number: {}",
        opened.number
    ))))
}

pub fn deposit(
    store: &mut Store<Account>,
    number: i32,
    amount: f64,
    now: DateTime<Utc>,
) -> Result<CmdOutcome<Account>> {
    require_positive(amount)?;
    let index = index_by_key(store, number, "account")?;
    let account = record_mut(store, index)?;
    account.balance += amount;
    account.last_transaction = now;
    let updated = account.clone();
    Ok(CmdOutcome::new(updated.clone()).with_message(CmdMessage::success(format!(
        "Deposit successful. New balance: ${:.2}",
        updated.balance
    ))))
}

pub fn withdraw(
    store: &mut Store<Account>,
    number: i32,
    amount: f64,
    now: DateTime<Utc>,
) -> Result<CmdOutcome<Account>> {
    require_positive(amount)?;
    let index = index_by_key(store, number, "account")?;
    let account = record_mut(store, index)?;
    if amount > account.balance {
        return Err(CabinetError::InvalidInput("Insufficient balance".into()));
    }
    account.balance -= amount;
    account.last_transaction = now;
    let updated = account.clone();
    Ok(CmdOutcome::new(updated.clone()).with_message(CmdMessage::success(format!(
        "Withdrawal successful. New balance: ${:.2}",
        updated.balance
    ))))
}

/// Move `amount` between two accounts. Both `last_transaction` stamps are
/// set to the same instant; on any rejection neither balance changes.
pub fn transfer(
    store: &mut Store<Account>,
    from: i32,
    to: i32,
    amount: f64,
    now: DateTime<Utc>,
) -> Result<CmdOutcome<Account>> {
    let from_index = index_by_key(store, from, "account")?;
    let to_index = store
        .find_by_key(to)
        .ok_or_else(|| CabinetError::NotFound(format!("recipient account {} not found", to)))?;
    if from_index == to_index {
        return Err(CabinetError::InvalidInput(
            "cannot transfer to the same account".into(),
        ));
    }
    require_positive(amount)?;
    if amount > record(store, from_index)?.balance {
        return Err(CabinetError::InvalidInput("Insufficient balance".into()));
    }

    {
        let sender = record_mut(store, from_index)?;
        sender.balance -= amount;
        sender.last_transaction = now;
    }
    {
        let recipient = record_mut(store, to_index)?;
        recipient.balance += amount;
        recipient.last_transaction = now;
    }

    let updated = record(store, from_index)?.clone();
    Ok(CmdOutcome::new(updated.clone()).with_message(CmdMessage::success(format!(
        "Transfer successful. Your new balance: ${:.2}",
        updated.balance
    ))))
}

pub fn find(store: &Store<Account>, number: i32) -> Result<CmdOutcome<Account>> {
    let index = index_by_key(store, number, "account")?;
    Ok(CmdOutcome::new(record(store, index)?.clone()))
}

/// Patch account details; blank keeps current, and any modification counts
/// as a transaction.
pub fn modify(
    store: &mut Store<Account>,
    number: i32,
    patch: &AccountPatch,
    now: DateTime<Utc>,
) -> Result<CmdOutcome<Account>> {
    let index = index_by_key(store, number, "account")?;
    let account = record_mut(store, index)?;

    patch_text(&mut account.name, &patch.name);
    patch_text(&mut account.address, &patch.address);
    patch_text(&mut account.phone, &patch.phone);
    if let Some(account_type) = patch.account_type {
        account.account_type = account_type;
    }
    account.last_transaction = now;

    let updated = account.clone();
    Ok(CmdOutcome::new(updated.clone()).with_message(CmdMessage::success(format!(
        "Account {} updated",
        updated.number
    ))))
}

pub fn close(store: &mut Store<Account>, number: i32) -> Result<CmdOutcome<Account>> {
    let index = index_by_key(store, number, "account")?;
    let removed = store.delete_at(index)?;
    Ok(CmdOutcome::new(removed.clone()).with_message(CmdMessage::success(format!(
        "Account {} deleted",
        removed.number
    ))))
}

fn record(store: &Store<Account>, index: usize) -> Result<&Account> {
    store
        .get(index)
        .ok_or_else(|| CabinetError::NotFound(format!("no account at index {}", index)))
}

fn record_mut(store: &mut Store<Account>, index: usize) -> Result<&mut Account> {
    store
        .get_mut(index)
        .ok_or_else(|| CabinetError::NotFound(format!("no account at index {}", index)))
}

fn require_positive(amount: f64) -> Result<()> {
    if amount <= 0.0 {
        return Err(CabinetError::InvalidInput("amount must be positive".into()));
    }
    Ok(())
}
