//! Library buttons
//!
//! One button per saved entry; pressing one reports its name upward.

use serde::Serialize;

use crate::models::Library;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryButton {
    pub name: String,
}

impl LibraryButton {
    pub fn press<F>(&self, on_item_click: F)
    where
        F: FnOnce(&str),
    {
        on_item_click(&self.name);
    }
}

/// Buttons for every entry, in the library's enumeration order
pub fn library_buttons(library: &Library) -> Vec<LibraryButton> {
    library
        .names()
        .map(|name| LibraryButton {
            name: name.to_string(),
        })
        .collect()
}
