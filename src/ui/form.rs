//! New entry form
//!
//! Holds the draft entry and hands a [`Submission`] to its caller.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::fields::{FieldView, NumberField, TextField};
use crate::models::Macros;

/// One of the five draft inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Calories,
    Protein,
    Fat,
    Carbs,
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(DraftField::Name),
            "calories" => Ok(DraftField::Calories),
            "protein" => Ok(DraftField::Protein),
            "fat" => Ok(DraftField::Fat),
            "carbs" => Ok(DraftField::Carbs),
            other => Err(format!(
                "Unknown field '{}', expected one of: name, calories, protein, fat, carbs",
                other
            )),
        }
    }
}

/// A submitted entry: a name plus its macros
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    #[serde(flatten)]
    pub macros: Macros,
}

impl Submission {
    /// The entry without its name
    pub fn macros(&self) -> Macros {
        self.macros
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

#[derive(Debug)]
pub struct NewEntryForm {
    name: TextField,
    calories: NumberField,
    protein: NumberField,
    fat: NumberField,
    carbs: NumberField,
}

impl Default for NewEntryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl NewEntryForm {
    pub fn new() -> Self {
        Self {
            name: TextField::new("Name"),
            calories: NumberField::new("⚡️"),
            protein: NumberField::new("🥩"),
            fat: NumberField::new("🐷"),
            carbs: NumberField::new("🥖"),
        }
    }

    /// Type `raw` into one field
    pub fn input(&mut self, field: DraftField, raw: &str) {
        match field {
            DraftField::Name => {
                self.name.input(raw);
                return;
            }
            DraftField::Calories => self.calories.input(raw),
            DraftField::Protein => self.protein.input(raw),
            DraftField::Fat => self.fat.input(raw),
            DraftField::Carbs => self.carbs.input(raw),
        }

        tracing::debug!(
            calories = self.calories.value(),
            protein = self.protein.value(),
            fat = self.fat.value(),
            carbs = self.carbs.value(),
            "draft changed"
        );
    }

    /// Current draft as it would be submitted
    pub fn draft(&self) -> Submission {
        Submission {
            name: self.name.value().to_string(),
            macros: Macros::new(
                self.calories.value(),
                self.protein.value(),
                self.fat.value(),
                self.carbs.value(),
            ),
        }
    }

    /// Hand the draft to `on_submit`, then reset if it carried a name.
    ///
    /// A nameless submission is still delivered but the draft is kept.
    pub fn submit<F, R>(&mut self, on_submit: F) -> R
    where
        F: FnOnce(Submission) -> R,
    {
        let submission = self.draft();
        let named = submission.has_name();
        let result = on_submit(submission);
        if named {
            self.reset();
        }
        result
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.calories.clear();
        self.protein.clear();
        self.fat.clear();
        self.carbs.clear();
    }

    /// Fields in display order
    pub fn view(&self) -> Vec<FieldView> {
        vec![
            self.name.view(),
            self.calories.view(),
            self.protein.view(),
            self.fat.view(),
            self.carbs.view(),
        ]
    }
}
