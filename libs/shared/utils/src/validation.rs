// =====================================================================================
// FORM VALIDATION - FIELD-KEYED INPUT CHECKS
// =====================================================================================
//
// Each check records its failures under the field name and returns `None`
// exactly when it recorded something, so callers can destructure the results
// once every field has been checked. Inputs arrive as raw JSON values so a
// wrongly typed field is reported against that field.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde_json::Value;

use shared_models::FieldErrors;

pub const REQUIRED_MESSAGE: &str = "Required";

/// Messages for a coerced integer field.
#[derive(Debug, Clone, Copy)]
pub struct IntegerRule<'a> {
    pub not_a_number: &'a str,
    pub not_integer: &'a str,
    pub not_positive: &'a str,
    pub max: Option<(i64, &'a str)>,
}

#[derive(Debug, Default)]
pub struct FormValidator {
    errors: FieldErrors,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_text(&mut self, field: &str, value: Option<&Value>) -> Option<Option<String>> {
        match coerce_text(value) {
            Ok(text) => Some(text),
            Err(kind) => {
                self.errors.add(field, format!("Expected string, received {}", kind));
                None
            }
        }
    }

    /// Required text of at least `min_chars` characters.
    pub fn text(&mut self, field: &str, value: Option<&Value>, min_chars: usize, message: &str) -> Option<String> {
        let Some(value) = self.read_text(field, value)? else {
            self.errors.add(field, REQUIRED_MESSAGE);
            return None;
        };

        if value.chars().count() < min_chars {
            self.errors.add(field, message);
            return None;
        }

        Some(value)
    }

    /// Optional text; when present it must have at least `min_chars` characters.
    pub fn optional_text(
        &mut self,
        field: &str,
        value: Option<&Value>,
        min_chars: usize,
        message: &str,
    ) -> Option<Option<String>> {
        match self.read_text(field, value)? {
            None => Some(None),
            Some(v) if v.chars().count() < min_chars => {
                self.errors.add(field, message);
                None
            }
            Some(v) => Some(Some(v)),
        }
    }

    /// Required text matching `pattern`.
    pub fn pattern(&mut self, field: &str, value: Option<&Value>, pattern: &Regex, message: &str) -> Option<String> {
        let Some(value) = self.read_text(field, value)? else {
            self.errors.add(field, REQUIRED_MESSAGE);
            return None;
        };

        if !pattern.is_match(&value) {
            self.errors.add(field, message);
            return None;
        }

        Some(value)
    }

    /// Required member of an enumeration parsed with `FromStr`.
    pub fn choice<T: FromStr>(
        &mut self,
        field: &str,
        value: Option<&Value>,
        required_message: &str,
        invalid_message: &str,
    ) -> Option<T> {
        let Some(value) = self.read_text(field, value)? else {
            self.errors.add(field, required_message);
            return None;
        };

        match value.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.errors.add(field, invalid_message);
                None
            }
        }
    }

    /// Numeric field coerced from a JSON number or numeric string. Every
    /// violated rule is reported, not only the first.
    pub fn integer(&mut self, field: &str, value: Option<&Value>, rule: &IntegerRule<'_>) -> Option<i64> {
        let Some(number) = coerce_number(value).filter(|n| n.is_finite()) else {
            self.errors.add(field, rule.not_a_number);
            return None;
        };

        let before = self.errors.get(field).map_or(0, |e| e.len());

        if number.fract() != 0.0 {
            self.errors.add(field, rule.not_integer);
        }
        if number <= 0.0 {
            self.errors.add(field, rule.not_positive);
        }
        if let Some((max, message)) = rule.max {
            if number > max as f64 {
                self.errors.add(field, message);
            }
        }

        if self.errors.get(field).map_or(0, |e| e.len()) > before {
            return None;
        }

        Some(number as i64)
    }

    /// Calendar date given as `YYYY-MM-DD` or as an RFC 3339 timestamp. A
    /// timestamp is taken as its UTC day.
    pub fn date(
        &mut self,
        field: &str,
        value: Option<&Value>,
        required_message: &str,
        invalid_message: &str,
    ) -> Option<NaiveDate> {
        let text = self.read_text(field, value)?;
        let Some(value) = text.as_deref().map(str::trim).filter(|v| !v.is_empty()) else {
            self.errors.add(field, required_message);
            return None;
        };

        let parsed = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        });

        if parsed.is_none() {
            self.errors.add(field, invalid_message);
        }

        parsed
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    pub fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Reads a form value as text. Numbers and booleans keep their literal form,
/// `null` counts as missing; arrays and objects are rejected with their kind.
pub fn coerce_text(value: Option<&Value>) -> Result<Option<String>, &'static str> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(Value::Array(_)) => Err("array"),
        Some(Value::Object(_)) => Err("object"),
    }
}

/// Loose numeric coercion for form inputs: empty strings and `null` count as
/// zero, a missing value or non-numeric text yields `None`.
pub fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Array(_) | Value::Object(_) => None,
    }
}
