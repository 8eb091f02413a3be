//! Library tools

use serde::Serialize;

use crate::app::App;
use crate::models::Macros;
use crate::ui::library_buttons;

#[derive(Debug, Serialize)]
pub struct LibraryEntry {
    pub name: String,
    pub macros: Macros,
}

/// Response for list_library
#[derive(Debug, Serialize)]
pub struct ListLibraryResponse {
    pub entries: Vec<LibraryEntry>,
    pub total: usize,
}

/// Response for log_library_item
#[derive(Debug, Serialize)]
pub struct LogLibraryItemResponse {
    pub name: String,
    pub found: bool,
    pub logged: Option<Macros>,
    pub totals: Macros,
}

pub fn list_library(app: &App) -> ListLibraryResponse {
    let entries: Vec<LibraryEntry> = app
        .library()
        .iter()
        .map(|(name, macros)| LibraryEntry {
            name: name.to_string(),
            macros: *macros,
        })
        .collect();

    ListLibraryResponse {
        total: entries.len(),
        entries,
    }
}

pub fn get_library_entry(app: &App, name: &str) -> Option<LibraryEntry> {
    app.library().get(name).map(|macros| LibraryEntry {
        name: name.to_string(),
        macros: *macros,
    })
}

/// Click a library button: log the saved entry, or nothing if it is gone
pub fn log_library_item(app: &mut App, name: &str) -> LogLibraryItemResponse {
    let button = library_buttons(app.library())
        .into_iter()
        .find(|button| button.name == name);

    let mut logged = None;
    if let Some(button) = button {
        button.press(|clicked| logged = app.click_library_item(clicked));
    }

    LogLibraryItemResponse {
        name: name.to_string(),
        found: logged.is_some(),
        logged,
        totals: app.totals(),
    }
}
