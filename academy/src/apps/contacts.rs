//! Contact manager session: a name-keyed contact book behind a five-entry menu.

use crate::core::contact_book::ContactBook;
use crate::core::contacts;
use crate::io::config::ContactsConfig;
use crate::io::console::Console;
use crate::session::{Menu, Session};

pub fn menu(config: &ContactsConfig) -> Menu<ContactBook> {
    let allow_empty_name = config.allow_empty_name;
    Menu::new("=== Contact Manager ===")
        .action(
            "Add a contact",
            move |book: &mut ContactBook, console: &mut dyn Console| {
                let name = console.read_line("Enter contact name: ")?;
                let phone = console.read_line("Enter contact phone number: ")?;
                Ok(contacts::add_contact(book, &name, &phone, allow_empty_name))
            },
        )
        .action(
            "View contacts",
            |book: &mut ContactBook, _: &mut dyn Console| Ok(contacts::list_contacts(book)),
        )
        .action(
            "Search contact",
            |book: &mut ContactBook, console: &mut dyn Console| {
                let name = console.read_line("Enter the name to search: ")?;
                Ok(contacts::search_contact(book, &name))
            },
        )
        .action(
            "Delete a contact",
            |book: &mut ContactBook, console: &mut dyn Console| {
                let name = console.read_line("Enter the name of the contact to delete: ")?;
                Ok(contacts::delete_contact(book, &name))
            },
        )
        .exit("Return to main menu")
}

/// Fresh session with an empty contact book.
pub fn session(config: &ContactsConfig) -> Session<ContactBook> {
    Session::new(menu(config), ContactBook::new())
}
