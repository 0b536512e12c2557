//! Birth records as supplied by callers.

use serde::{Deserialize, Serialize};

use crate::calendar::max_days_in_month;
use crate::element::{classify_element, Element};

/// Minimal birth tuple.
///
/// Numeric fields default to 0 when missing from a payload; a zero
/// year/month/day is reported by the `required_fields` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BirthRecord {
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub month: i32,
    #[serde(default)]
    pub day: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<i32>,
}

impl BirthRecord {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day, hour: None, minute: None }
    }

    pub fn with_hour(self, hour: i32) -> Self {
        Self { hour: Some(hour), ..self }
    }

    pub fn with_time(self, hour: i32, minute: i32) -> Self {
        Self { hour: Some(hour), minute: Some(minute), ..self }
    }

    /// Unknown birth hour scores as midnight.
    pub fn hour_or_zero(&self) -> i32 {
        self.hour.unwrap_or(0)
    }

    pub fn minute_or_zero(&self) -> i32 {
        self.minute.unwrap_or(0)
    }

    pub fn has_time(&self) -> bool {
        self.hour.is_some()
    }

    pub fn element(&self) -> Element {
        classify_element(self.year, self.month, self.day, self.hour_or_zero())
    }

    /// Pull an over-long day back to the last day of the month.
    ///
    /// Leaves the record untouched when the month is invalid.
    pub fn clamp_day_to_month(self) -> Self {
        match max_days_in_month(self.month, self.year) {
            Some(max) if self.day > max as i32 => Self { day: max as i32, ..self },
            _ => self,
        }
    }
}

/// A named person in an analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub birth: BirthRecord,
}

impl PersonInput {
    pub fn anonymous(birth: BirthRecord) -> Self {
        Self { name: None, birth }
    }

    pub fn named(name: impl Into<String>, birth: BirthRecord) -> Self {
        Self { name: Some(name.into()), birth }
    }
}
