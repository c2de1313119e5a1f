//! Handlers for the contact manager session.

use tracing::{debug, warn};

use crate::core::contact_book::ContactBook;
use crate::core::types::Reply;

pub const ADDED: &str = "Contact added!";
pub const EMPTY_NAME_REJECTED: &str = "Contact name cannot be empty.";
pub const NO_CONTACTS: &str = "No contacts available.";
pub const NOT_FOUND: &str = "Contact not found.";
pub const DELETED: &str = "Contact deleted.";

/// Store `phone` under `name` (both trimmed), overwriting silently.
pub fn add_contact(
    book: &mut ContactBook,
    name: &str,
    phone: &str,
    allow_empty_name: bool,
) -> Reply {
    let name = name.trim();
    if name.is_empty() && !allow_empty_name {
        warn!("rejected empty contact name");
        return Reply::line(EMPTY_NAME_REJECTED);
    }
    if book.set(name, phone.trim()).is_some() {
        debug!(name, "contact overwritten");
    }
    Reply::line(ADDED)
}

pub fn list_contacts(book: &ContactBook) -> Reply {
    if book.is_empty() {
        return Reply::line(NO_CONTACTS);
    }
    std::iter::once("Contacts:".to_string())
        .chain(
            book.iter()
                .map(|contact| format!("{}: {}", contact.name, contact.phone)),
        )
        .collect()
}

pub fn search_contact(book: &ContactBook, name: &str) -> Reply {
    let name = name.trim();
    match book.get(name) {
        Ok(phone) => Reply::line(format!("{name}: {phone}")),
        Err(err) => {
            debug!(%err, "search missed");
            Reply::line(NOT_FOUND)
        }
    }
}

pub fn delete_contact(book: &mut ContactBook, name: &str) -> Reply {
    match book.delete(name.trim()) {
        Ok(_) => Reply::line(DELETED),
        Err(err) => {
            debug!(%err, "delete missed");
            Reply::line(NOT_FOUND)
        }
    }
}
