//! Day, draft and submission tools

use serde::Serialize;
use serde_json::{Map, Value};

use crate::app::{App, AppView};
use crate::models::{omit, Macros};
use crate::ui::{DraftField, Submission};

/// Response for get_day
#[derive(Debug, Serialize)]
pub struct DayTotalsResponse {
    pub day: String,
    pub totals: Macros,
    pub library_entries: usize,
}

/// Response for get_draft, set_draft_field and reset_entry
#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub draft: Submission,
}

/// Response for submit_entry and log_entry
#[derive(Debug, Serialize)]
pub struct SubmitEntryResponse {
    /// Macros added to the day, the submission without its name
    pub logged: Map<String, Value>,
    /// Library name the entry was saved under, if any
    pub saved_as: Option<String>,
    pub totals: Macros,
    /// Draft after submission, kept when nameless
    pub draft: Submission,
}

/// Raw field text for log_entry; missing fields keep their draft value
#[derive(Debug, Default)]
pub struct EntryInput {
    pub name: Option<String>,
    pub calories: Option<String>,
    pub protein: Option<String>,
    pub fat: Option<String>,
    pub carbs: Option<String>,
}

pub fn get_day(app: &App) -> DayTotalsResponse {
    DayTotalsResponse {
        day: app.day_key().to_string(),
        totals: app.totals(),
        library_entries: app.library().len(),
    }
}

pub fn render_view(app: &App) -> AppView {
    app.view()
}

pub fn get_draft(app: &App) -> DraftResponse {
    DraftResponse {
        draft: app.form().draft(),
    }
}

/// Type raw text into one draft field
pub fn set_draft_field(app: &mut App, field: &str, value: &str) -> Result<DraftResponse, String> {
    let field: DraftField = field.parse()?;
    app.input(field, value);
    Ok(get_draft(app))
}

pub fn reset_entry(app: &mut App) -> DraftResponse {
    app.reset_form();
    get_draft(app)
}

/// Submit the current draft
pub fn submit_entry(app: &mut App) -> Result<SubmitEntryResponse, String> {
    let submission = app.submit_form();

    let record = match serde_json::to_value(&submission)
        .map_err(|e| format!("Failed to serialize submission: {}", e))?
    {
        Value::Object(map) => map,
        other => return Err(format!("Unexpected submission shape: {}", other)),
    };

    Ok(SubmitEntryResponse {
        logged: omit(&record, &["name"]),
        saved_as: submission.has_name().then_some(submission.name),
        totals: app.totals(),
        draft: app.form().draft(),
    })
}

/// Fill any provided fields, then submit
pub fn log_entry(app: &mut App, input: EntryInput) -> Result<SubmitEntryResponse, String> {
    let fields = [
        (DraftField::Name, input.name),
        (DraftField::Calories, input.calories),
        (DraftField::Protein, input.protein),
        (DraftField::Fat, input.fat),
        (DraftField::Carbs, input.carbs),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            app.input(field, &value);
        }
    }
    submit_entry(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::store::MemoryStore;

    fn app() -> App {
        App::for_date(
            Arc::new(MemoryStore::new()),
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        )
    }

    fn egg() -> EntryInput {
        EntryInput {
            name: Some("egg".to_string()),
            calories: Some("70".to_string()),
            protein: Some("6".to_string()),
            fat: Some("5".to_string()),
            carbs: Some("1".to_string()),
        }
    }

    #[test]
    fn test_set_draft_field_rejects_unknown_field() {
        let mut app = app();
        assert!(set_draft_field(&mut app, "sugar", "1").is_err());
    }

    #[test]
    fn test_set_draft_field() {
        let mut app = app();
        let resp = set_draft_field(&mut app, "protein", "12").unwrap();
        assert_eq!(resp.draft.macros.protein, 12.0);
    }

    #[test]
    fn test_log_entry_named() {
        let mut app = app();
        let resp = log_entry(&mut app, egg()).unwrap();

        assert_eq!(resp.saved_as.as_deref(), Some("egg"));
        assert!(!resp.logged.contains_key("name"));
        assert_eq!(resp.logged["calories"], 70.0);
        assert_eq!(resp.totals, Macros::new(70.0, 6.0, 5.0, 1.0));
        assert_eq!(resp.draft.macros, Macros::zero());
        assert_eq!(get_day(&app).library_entries, 1);
    }

    #[test]
    fn test_log_entry_nameless_keeps_draft() {
        let mut app = app();
        let resp = log_entry(&mut app, EntryInput { name: None, ..egg() }).unwrap();

        assert_eq!(resp.saved_as, None);
        assert_eq!(resp.draft.macros, Macros::new(70.0, 6.0, 5.0, 1.0));
        assert_eq!(get_day(&app).library_entries, 0);
    }

    #[test]
    fn test_reset_entry() {
        let mut app = app();
        set_draft_field(&mut app, "name", "egg").unwrap();
        let resp = reset_entry(&mut app);
        assert_eq!(resp.draft.name, "");
    }
}
