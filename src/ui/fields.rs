//! Labelled input fields bound to a signal

use serde::Serialize;

use crate::signal::Signal;

/// What a field shows: its label and current text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
}

/// Free-text input, stores exactly what was typed
#[derive(Debug)]
pub struct TextField {
    label: &'static str,
    value: Signal<String>,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: Signal::new(String::new()),
        }
    }

    pub fn value(&self) -> &str {
        self.value.get()
    }

    pub fn input(&mut self, raw: &str) {
        self.value.set(raw.to_string());
    }

    pub fn clear(&mut self) {
        self.value.set(String::new());
    }

    pub fn view(&self) -> FieldView {
        FieldView {
            label: self.label,
            value: self.value.get().clone(),
        }
    }
}

/// Numeric input, coerces typed text with [`coerce_number`]
#[derive(Debug)]
pub struct NumberField {
    label: &'static str,
    value: Signal<f64>,
}

impl NumberField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: Signal::new(0.0),
        }
    }

    pub fn value(&self) -> f64 {
        *self.value.get()
    }

    pub fn input(&mut self, raw: &str) {
        self.value.set(coerce_number(raw));
    }

    pub fn clear(&mut self) {
        self.value.set(0.0);
    }

    pub fn view(&self) -> FieldView {
        FieldView {
            label: self.label,
            value: self.value.get().to_string(),
        }
    }
}

/// Convert input text to a number the way a browser's `Number(text)` does.
///
/// Whitespace and byte-order marks around the text are ignored. Blank text
/// is `0`. Anything that is not a decimal literal, a `0x`/`0o`/`0b` integer
/// or a signed `Infinity` is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let text = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(radix) = radix_prefix(text) {
        return parse_radix(&text[2..], radix);
    }

    // Rust accepts spellings like "inf" and "NaN" that a browser rejects
    let valid = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !valid {
        return f64::NAN;
    }

    text.parse().unwrap_or(f64::NAN)
}

fn radix_prefix(text: &str) -> Option<u32> {
    let prefix = text.get(..2)?;
    match prefix {
        "0x" | "0X" => Some(16),
        "0o" | "0O" => Some(8),
        "0b" | "0B" => Some(2),
        _ => None,
    }
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    })
    .unwrap_or(f64::NAN)
}
