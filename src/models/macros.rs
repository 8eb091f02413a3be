//! Macro nutrient values
//!
//! Used for daily totals, library entries and form submissions.

use serde::{Deserialize, Deserializer, Serialize};

/// Calories, protein, fat and carbs.
///
/// No bounds are enforced: negative, fractional and NaN values are all kept.
/// Non-finite values serialize as JSON `null` and read back as NaN, so an
/// infinity does not survive a reload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    #[serde(deserialize_with = "nullable_f64")]
    pub calories: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub protein: f64,  // grams
    #[serde(deserialize_with = "nullable_f64")]
    pub fat: f64,      // grams
    #[serde(deserialize_with = "nullable_f64")]
    pub carbs: f64,    // grams
}

fn nullable_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl Macros {
    pub fn new(calories: f64, protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            calories,
            protein,
            fat,
            carbs,
        }
    }

    /// All zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Field-wise sum
    pub fn add(&self, other: &Macros) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            carbs: self.carbs + other.carbs,
        }
    }
}

impl std::ops::Add for Macros {
    type Output = Macros;

    fn add(self, other: Macros) -> Macros {
        Macros::add(&self, &other)
    }
}

impl std::iter::Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Macros::zero(), |acc, m| acc + m)
    }
}
