//! Validation System - Rule/Policy Separation
//!
//! Rules produce structured violations.
//! Policy maps violations to actions.
//!
//! Scoring itself never validates; this is the gate callers put in front of it.

use serde::{Deserialize, Serialize};

use crate::calendar::max_days_in_month;
use crate::config::{FailureMode, InputBounds};
use crate::record::BirthRecord;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationViolation {
    pub rule: String,
    pub severity: ViolationSeverity,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
    pub remediation: Vec<String>,
}

impl ValidationViolation {
    fn error(rule: &str, message: &str, expected: String, actual: String, remediation: &str) -> Self {
        Self {
            rule: rule.to_string(),
            severity: ViolationSeverity::Error,
            message: message.to_string(),
            expected: Some(expected),
            actual: Some(actual),
            remediation: vec![remediation.to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<ValidationViolation>,
    /// Which record was checked, e.g. "person_a".
    pub subject: String,
}

impl ValidationResult {
    pub fn success(subject: &str) -> Self {
        Self {
            valid: true,
            violations: vec![],
            subject: subject.to_string(),
        }
    }

    pub fn failure(subject: &str, violations: Vec<ValidationViolation>) -> Self {
        Self {
            valid: false,
            violations,
            subject: subject.to_string(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.severity == ViolationSeverity::Error)
    }
}

/// Validation rule trait - produces violations
pub trait ValidationRule {
    fn name(&self) -> &'static str;
    fn validate(&self, record: &BirthRecord, bounds: &InputBounds) -> Vec<ValidationViolation>;
}

// --- Concrete Rules ---

/// Zero year/month/day means the field was never filled in.
pub struct RequiredFieldsRule;

impl ValidationRule for RequiredFieldsRule {
    fn name(&self) -> &'static str { "required_fields" }

    fn validate(&self, record: &BirthRecord, _bounds: &InputBounds) -> Vec<ValidationViolation> {
        let missing: Vec<&str> = [("year", record.year), ("month", record.month), ("day", record.day)]
            .into_iter()
            .filter(|(_, value)| *value == 0)
            .map(|(field, _)| field)
            .collect();

        if missing.is_empty() {
            return vec![];
        }

        vec![ValidationViolation::error(
            self.name(),
            "필수 정보(년, 월, 일)를 모두 입력해주세요.",
            "year, month, day".to_string(),
            format!("missing: {}", missing.join(", ")),
            "Provide year, month and day of birth",
        )]
    }
}

pub struct YearRangeRule;

impl ValidationRule for YearRangeRule {
    fn name(&self) -> &'static str { "year_range" }

    fn validate(&self, record: &BirthRecord, bounds: &InputBounds) -> Vec<ValidationViolation> {
        // A missing year is already reported by required_fields.
        if record.year == 0 || (bounds.min_year..=bounds.max_year).contains(&record.year) {
            return vec![];
        }
        vec![ValidationViolation::error(
            self.name(),
            "Birth year out of range",
            format!("{}-{}", bounds.min_year, bounds.max_year),
            record.year.to_string(),
            "Enter a four-digit birth year within the supported range",
        )]
    }
}

pub struct MonthRangeRule;

impl ValidationRule for MonthRangeRule {
    fn name(&self) -> &'static str { "month_range" }

    fn validate(&self, record: &BirthRecord, _bounds: &InputBounds) -> Vec<ValidationViolation> {
        if record.month == 0 || (1..=12).contains(&record.month) {
            return vec![];
        }
        vec![ValidationViolation::error(
            self.name(),
            "Birth month out of range",
            "1-12".to_string(),
            record.month.to_string(),
            "Enter a month between 1 and 12",
        )]
    }
}

/// Leap-year aware upper bound on the day.
pub struct DayOfMonthRule;

impl ValidationRule for DayOfMonthRule {
    fn name(&self) -> &'static str { "day_of_month" }

    fn validate(&self, record: &BirthRecord, _bounds: &InputBounds) -> Vec<ValidationViolation> {
        if record.day == 0 {
            return vec![];
        }
        // Invalid months are month_range's problem.
        let Some(max) = max_days_in_month(record.month, record.year) else {
            return vec![];
        };

        if record.day < 1 || record.day > max as i32 {
            vec![ValidationViolation::error(
                self.name(),
                "Day does not exist in that month",
                format!("1-{}", max),
                record.day.to_string(),
                "Check the day against the month length (February has 29 days in leap years)",
            )]
        } else {
            vec![]
        }
    }
}

pub struct HourRangeRule;

impl ValidationRule for HourRangeRule {
    fn name(&self) -> &'static str { "hour_range" }

    fn validate(&self, record: &BirthRecord, _bounds: &InputBounds) -> Vec<ValidationViolation> {
        match record.hour {
            Some(hour) if !(0..=23).contains(&hour) => vec![ValidationViolation::error(
                self.name(),
                "Birth hour out of range",
                "0-23".to_string(),
                hour.to_string(),
                "Use a 24-hour clock value",
            )],
            _ => vec![],
        }
    }
}

pub struct MinuteRangeRule;

impl ValidationRule for MinuteRangeRule {
    fn name(&self) -> &'static str { "minute_range" }

    fn validate(&self, record: &BirthRecord, _bounds: &InputBounds) -> Vec<ValidationViolation> {
        match record.minute {
            Some(minute) if !(0..=59).contains(&minute) => vec![ValidationViolation::error(
                self.name(),
                "Birth minute out of range",
                "0-59".to_string(),
                minute.to_string(),
                "Enter minutes between 0 and 59",
            )],
            _ => vec![],
        }
    }
}

pub struct BirthTimeKnownRule;

impl ValidationRule for BirthTimeKnownRule {
    fn name(&self) -> &'static str { "birth_time_known" }

    fn validate(&self, record: &BirthRecord, _bounds: &InputBounds) -> Vec<ValidationViolation> {
        if record.has_time() {
            return vec![];
        }
        vec![ValidationViolation {
            rule: self.name().to_string(),
            severity: ViolationSeverity::Info,
            message: "Birth hour unknown, scored as 0".to_string(),
            expected: None,
            actual: None,
            remediation: vec!["Provide the birth hour for a time-sensitive reading".to_string()],
        }]
    }
}

/// Validator orchestrates rules and applies policy
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(RequiredFieldsRule),
                Box::new(YearRangeRule),
                Box::new(MonthRangeRule),
                Box::new(DayOfMonthRule),
                Box::new(HourRangeRule),
                Box::new(MinuteRangeRule),
                Box::new(BirthTimeKnownRule),
            ],
        }
    }

    pub fn validate(
        &self,
        subject: &str,
        record: &BirthRecord,
        bounds: &InputBounds,
        failure_mode: FailureMode,
    ) -> ValidationResult {
        let mut all_violations = vec![];

        for rule in &self.rules {
            let violations = rule.validate(record, bounds);
            all_violations.extend(violations);
        }

        // Apply failure mode policy
        let has_errors = all_violations.iter()
            .any(|v| v.severity == ViolationSeverity::Error);

        match failure_mode {
            FailureMode::Block if has_errors => {
                // Only errors explain a rejection
                let errors: Vec<_> = all_violations.into_iter()
                    .filter(|v| v.severity == ViolationSeverity::Error)
                    .collect();
                ValidationResult::failure(subject, errors)
            }
            FailureMode::Block | FailureMode::Warn | FailureMode::Log => {
                // Warnings don't block; warn/log never block, just record
                ValidationResult {
                    valid: true,
                    violations: all_violations,
                    subject: subject.to_string(),
                }
            }
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
