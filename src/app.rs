//! Root state
//!
//! Owns the day's running totals and the library, and routes form
//! submissions and library clicks into them. Nothing else mutates either.

use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use crate::models::{Library, Macros};
use crate::signal::PersistentSignal;
use crate::store::KeyValueStore;
use crate::ui::{library_buttons, DraftField, FieldView, LibraryButton, NewEntryForm, Submission};

/// Store key of the library
pub const LIBRARY_KEY: &str = "library";

/// Store key of a day's totals: `year-month-day`, month counted from 0, no padding
pub fn day_key(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month0(), date.day())
}

/// One labelled total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalView {
    pub label: &'static str,
    pub field: &'static str,
    pub value: f64,
}

/// Everything the page shows
#[derive(Debug, Clone, Serialize)]
pub struct AppView {
    pub day: String,
    pub totals: Vec<TotalView>,
    pub form: Vec<FieldView>,
    pub library: Vec<LibraryButton>,
}

pub struct App {
    totals: PersistentSignal<Macros>,
    library: PersistentSignal<Library>,
    form: NewEntryForm,
}

impl App {
    /// Open today's totals and the library from `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::for_date(store, Local::now().date_naive())
    }

    /// Open the totals of `date`; the key is fixed for the life of the app
    pub fn for_date(store: Arc<dyn KeyValueStore>, date: NaiveDate) -> Self {
        let totals = PersistentSignal::new(Arc::clone(&store), day_key(date), Macros::zero());
        let library = PersistentSignal::new(store, LIBRARY_KEY, Library::new());

        tracing::info!(
            day = totals.key(),
            library_entries = library.get().len(),
            "opened daily log"
        );

        Self {
            totals,
            library,
            form: NewEntryForm::new(),
        }
    }

    pub fn day_key(&self) -> &str {
        self.totals.key()
    }

    pub fn totals(&self) -> Macros {
        *self.totals.get()
    }

    pub fn library(&self) -> &Library {
        self.library.get()
    }

    pub fn form(&self) -> &NewEntryForm {
        &self.form
    }

    /// Add `macros` to the day's totals
    pub fn add_macros(&mut self, macros: Macros) {
        add_to_totals(&mut self.totals, macros);
    }

    pub fn input(&mut self, field: DraftField, raw: &str) {
        self.form.input(field, raw);
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    /// Submit the draft: log its macros, and save it to the library if named
    pub fn submit_form(&mut self) -> Submission {
        let Self {
            totals,
            library,
            form,
        } = self;

        form.submit(|submission| {
            add_to_totals(totals, submission.macros());
            if submission.has_name() {
                library.update(|current| current.with_entry(&submission.name, submission.macros()));
                tracing::info!(name = %submission.name, "saved library entry");
            }
            submission
        })
    }

    /// Log a saved entry again. Unknown names are ignored.
    pub fn click_library_item(&mut self, name: &str) -> Option<Macros> {
        let macros = match self.library.get().get(name) {
            Some(macros) => *macros,
            None => {
                tracing::debug!(name, "library item not found");
                return None;
            }
        };
        self.add_macros(macros);
        Some(macros)
    }

    pub fn view(&self) -> AppView {
        let totals = self.totals();
        AppView {
            day: self.day_key().to_string(),
            totals: vec![
                TotalView { label: "⚡️", field: "calories", value: totals.calories },
                TotalView { label: "🥩", field: "protein", value: totals.protein },
                TotalView { label: "🐷", field: "fat", value: totals.fat },
                TotalView { label: "🥖", field: "carbs", value: totals.carbs },
            ],
            form: self.form.view(),
            library: library_buttons(self.library()),
        }
    }
}

fn add_to_totals(totals: &mut PersistentSignal<Macros>, macros: Macros) {
    totals.update(|current| *current + macros);
    tracing::info!(
        calories = macros.calories,
        protein = macros.protein,
        fat = macros.fat,
        carbs = macros.carbs,
        "logged macros"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn app_with_store() -> (App, Arc<dyn KeyValueStore>) {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        (App::for_date(Arc::clone(&store), date()), store)
    }

    fn fill(app: &mut App, name: &str, values: [&str; 4]) {
        app.input(DraftField::Name, name);
        app.input(DraftField::Calories, values[0]);
        app.input(DraftField::Protein, values[1]);
        app.input(DraftField::Fat, values[2]);
        app.input(DraftField::Carbs, values[3]);
    }

    #[test]
    fn test_day_key_month_is_zero_based() {
        assert_eq!(day_key(date()), "2026-9-18");
        assert_eq!(day_key(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()), "2026-0-5");
    }

    #[test]
    fn test_add_macros_accumulates() {
        let (mut app, _) = app_with_store();
        app.add_macros(Macros::new(70.0, 6.0, 5.0, 1.0));
        app.add_macros(Macros::new(30.0, 0.0, 0.0, 8.0));
        assert_eq!(app.totals(), Macros::new(100.0, 6.0, 5.0, 9.0));
    }

    #[test]
    fn test_named_submission_logs_and_saves() {
        let (mut app, _) = app_with_store();
        app.add_macros(Macros::new(10.0, 0.0, 0.0, 0.0));
        fill(&mut app, "egg", ["70", "6", "5", "1"]);

        let submission = app.submit_form();

        assert_eq!(submission.name, "egg");
        assert_eq!(app.totals(), Macros::new(80.0, 6.0, 5.0, 1.0));
        assert_eq!(app.library().get("egg"), Some(&Macros::new(70.0, 6.0, 5.0, 1.0)));
        assert_eq!(app.form().draft().macros, Macros::zero());
    }

    #[test]
    fn test_nameless_submission_logs_only() {
        let (mut app, _) = app_with_store();
        fill(&mut app, "", ["70", "6", "5", "1"]);

        app.submit_form();

        assert_eq!(app.totals(), Macros::new(70.0, 6.0, 5.0, 1.0));
        assert!(app.library().is_empty());
        assert_eq!(app.form().draft().macros, Macros::new(70.0, 6.0, 5.0, 1.0));
    }

    #[test]
    fn test_resubmitting_a_name_overwrites_entry() {
        let (mut app, _) = app_with_store();
        fill(&mut app, "egg", ["70", "6", "5", "1"]);
        app.submit_form();
        fill(&mut app, "egg", ["80", "7", "5", "1"]);
        app.submit_form();

        assert_eq!(app.library().len(), 1);
        assert_eq!(app.library().get("egg"), Some(&Macros::new(80.0, 7.0, 5.0, 1.0)));
        assert_eq!(app.totals(), Macros::new(150.0, 13.0, 10.0, 2.0));
    }

    #[test]
    fn test_library_click() {
        let (mut app, _) = app_with_store();
        fill(&mut app, "egg", ["70", "6", "5", "1"]);
        app.submit_form();

        assert_eq!(app.click_library_item("egg"), Some(Macros::new(70.0, 6.0, 5.0, 1.0)));
        assert_eq!(app.totals(), Macros::new(140.0, 12.0, 10.0, 2.0));
    }

    #[test]
    fn test_stale_library_click_is_ignored() {
        let (mut app, _) = app_with_store();
        app.add_macros(Macros::new(1.0, 1.0, 1.0, 1.0));

        assert_eq!(app.click_library_item("ghost"), None);
        assert_eq!(app.totals(), Macros::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_state_survives_reload() {
        let (mut app, store) = app_with_store();
        fill(&mut app, "egg", ["70", "6", "5", "1"]);
        app.submit_form();
        drop(app);

        let reloaded = App::for_date(Arc::clone(&store), date());
        assert_eq!(reloaded.totals(), Macros::new(70.0, 6.0, 5.0, 1.0));
        assert!(reloaded.library().contains("egg"));

        // Another day starts from zero but shares the library
        let tomorrow = App::for_date(store, date().succ_opt().unwrap());
        assert_eq!(tomorrow.totals(), Macros::zero());
        assert!(tomorrow.library().contains("egg"));
    }

    #[test]
    fn test_persisted_layout() {
        let (mut app, store) = app_with_store();
        fill(&mut app, "egg", ["70", "6", "5", "1"]);
        app.submit_form();

        let totals: serde_json::Value =
            serde_json::from_str(&store.get("2026-9-18").unwrap().unwrap()).unwrap();
        assert_eq!(
            totals,
            serde_json::json!({"calories": 70.0, "protein": 6.0, "fat": 5.0, "carbs": 1.0})
        );

        let library: serde_json::Value =
            serde_json::from_str(&store.get(LIBRARY_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(library["egg"]["calories"], 70.0);
    }

    #[test]
    fn test_nan_input_propagates_into_totals() {
        let (mut app, _) = app_with_store();
        fill(&mut app, "", ["abc", "1", "1", "1"]);
        app.submit_form();

        let totals = app.totals();
        assert!(totals.calories.is_nan());
        assert_eq!(totals.protein, 1.0);
    }

    #[test]
    fn test_infinity_reloads_as_nan() {
        let (mut app, store) = app_with_store();
        fill(&mut app, "big", ["Infinity", "1", "1", "1"]);
        app.submit_form();
        assert_eq!(app.totals().calories, f64::INFINITY);
        drop(app);

        // JSON has no infinity; it is stored as null, which reads back as NaN
        let mut reloaded = App::for_date(store, date());
        assert!(reloaded.totals().calories.is_nan());
        assert_eq!(reloaded.totals().protein, 1.0);
        assert!(reloaded.library().get("big").map_or(false, |m| m.calories.is_nan()));

        reloaded.click_library_item("big");
        assert!(reloaded.totals().calories.is_nan());
        assert_eq!(reloaded.totals().protein, 2.0);
    }

    #[test]
    fn test_view() {
        let (mut app, _) = app_with_store();
        fill(&mut app, "egg", ["70", "6", "5", "1"]);
        app.submit_form();

        let view = app.view();
        assert_eq!(view.day, "2026-9-18");
        assert_eq!(view.totals[0], TotalView { label: "⚡️", field: "calories", value: 70.0 });
        assert_eq!(view.form.len(), 5);
        assert_eq!(view.library, vec![LibraryButton { name: "egg".to_string() }]);
    }
}
