use crate::commands::{patch_text, CmdMessage, CmdOutcome};
use crate::error::{CabinetError, Result};
use crate::model::contact::Contact;
use crate::store::Store;

#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

pub fn add(store: &mut Store<Contact>, contact: Contact) -> Result<CmdOutcome<Contact>> {
    let stored = contact.clone();
    store.create(contact)?;
    Ok(CmdOutcome::new(stored.clone())
        .with_message(CmdMessage::success(format!("Contact added: {}", stored.name))))
}

/// Substring search over name and phone, in store order.
pub fn search(store: &Store<Contact>, term: &str) -> Result<CmdOutcome<Vec<Contact>>> {
    let matches: Vec<Contact> = store
        .search(term)
        .filter_map(|i| store.get(i).cloned())
        .collect();
    Ok(CmdOutcome::new(matches))
}

/// Edit the first contact matching `term`; blank fields keep their current
/// value.
pub fn edit(
    store: &mut Store<Contact>,
    term: &str,
    patch: &ContactPatch,
) -> Result<CmdOutcome<Contact>> {
    let index = first_match(store, term)?;
    let contact = store
        .get_mut(index)
        .ok_or_else(|| CabinetError::NotFound(format!("no contact matching \"{}\"", term)))?;

    patch_text(&mut contact.name, &patch.name);
    patch_text(&mut contact.phone, &patch.phone);
    patch_text(&mut contact.email, &patch.email);
    patch_text(&mut contact.address, &patch.address);

    let updated = contact.clone();
    Ok(CmdOutcome::new(updated.clone())
        .with_message(CmdMessage::success(format!("Contact updated: {}", updated.name))))
}

/// Delete the first contact matching `term`, closing the gap.
pub fn delete(store: &mut Store<Contact>, term: &str) -> Result<CmdOutcome<Contact>> {
    let index = first_match(store, term)?;
    let removed = store.delete_at(index)?;
    Ok(CmdOutcome::new(removed.clone())
        .with_message(CmdMessage::success(format!("Contact deleted: {}", removed.name))))
}

fn first_match(store: &Store<Contact>, term: &str) -> Result<usize> {
    store
        .search(term)
        .next()
        .ok_or_else(|| CabinetError::NotFound(format!("no contact matching \"{}\"", term)))
}
