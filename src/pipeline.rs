//! Compatibility Engine - Single Entry Point
//!
//! `compute` is pure and total. `analyze` MUST validate first; there is no
//! path from a request to a report that skips validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{EngineConfig, FailureMode};
use crate::element::Element;
use crate::hashing::{compute_request_hash, compute_result_hash};
use crate::narrative::{detail_message, personality_text, summary_message};
use crate::record::{BirthRecord, PersonInput};
use crate::score::{score_breakdown, ScoreBreakdown};
use crate::sexagenary::{element_profile, profile_affinity};
use crate::validation::{ValidationResult, Validator};
use crate::ENGINE_VERSION;

#[cfg(feature = "test-hooks")]
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "test-hooks")]
static VALIDATION_CALL_COUNT: AtomicU32 = AtomicU32::new(0);

#[cfg(feature = "test-hooks")]
pub fn get_validation_call_count() -> u32 {
    VALIDATION_CALL_COUNT.load(Ordering::SeqCst)
}

#[cfg(feature = "test-hooks")]
pub fn reset_validation_call_count() {
    VALIDATION_CALL_COUNT.store(0, Ordering::SeqCst);
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub person_a: PersonInput,
    pub person_b: PersonInput,
}

/// Everything shown for a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub score: u8,
    pub element_a: Element,
    pub element_b: Element,
    pub personality_a: String,
    pub personality_b: String,
    pub summary_message: String,
    /// Contains `<strong>`/`<br>` markup.
    pub detail_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairValidation {
    pub person_a: ValidationResult,
    pub person_b: ValidationResult,
}

impl PairValidation {
    pub fn valid(&self) -> bool {
        self.person_a.valid && self.person_b.valid
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub id: String,
    pub engine_version: String,
    pub created_at: DateTime<Utc>,
    pub request_hash: String,
    pub result_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    pub validation: PairValidation,
    pub breakdown: ScoreBreakdown,
    pub profile_a: Vec<Element>,
    pub profile_b: Vec<Element>,
    pub profile_affinity: u8,
    pub result: CompatibilityResult,
}

/// The compatibility engine - single entry point for all pair operations
pub struct CompatibilityEngine {
    config: EngineConfig,
    validator: Validator,
}

impl CompatibilityEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            validator: Validator::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate one record under the configured bounds and policy
    ///
    /// This is the ONLY validation entry point.
    pub fn validate_record(&self, subject: &str, record: &BirthRecord) -> ValidationResult {
        #[cfg(feature = "test-hooks")]
        VALIDATION_CALL_COUNT.fetch_add(1, Ordering::SeqCst);

        let result = self.validator.validate(
            subject,
            record,
            &self.config.bounds,
            self.config.failure_mode,
        );

        if !result.violations.is_empty() {
            let rules: Vec<_> = result.violations.iter().map(|v| v.rule.as_str()).collect();
            match self.config.failure_mode {
                FailureMode::Log => debug!(subject, ?rules, "validation violations recorded"),
                FailureMode::Block | FailureMode::Warn => {
                    if result.has_errors() {
                        warn!(subject, ?rules, valid = result.valid, "validation violations");
                    } else {
                        debug!(subject, ?rules, "validation notes");
                    }
                }
            }
        }

        result
    }

    pub fn validate_pair(&self, a: &BirthRecord, b: &BirthRecord) -> PairValidation {
        PairValidation {
            person_a: self.validate_record("person_a", a),
            person_b: self.validate_record("person_b", b),
        }
    }

    /// Score and narrate a pair. Never fails; does not validate.
    pub fn compute(&self, a: &BirthRecord, b: &BirthRecord) -> CompatibilityResult {
        result_from_breakdown(&scored_pair(a, b))
    }

    /// Full analysis
    ///
    /// CRITICAL: This ALWAYS validates both records first. No bypass possible.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<CompatibilityReport, EngineError> {
        let (a, b) = if self.config.clamp_day_to_month {
            (
                request.person_a.birth.clamp_day_to_month(),
                request.person_b.birth.clamp_day_to_month(),
            )
        } else {
            (request.person_a.birth, request.person_b.birth)
        };

        // MANDATORY: Validation is always called.
        let validation = self.validate_pair(&a, &b);

        if !validation.valid() {
            let messages: Vec<_> = [&validation.person_a, &validation.person_b]
                .into_iter()
                .flat_map(|r| {
                    r.violations.iter()
                        .map(move |v| format!("{}.{}: {}", r.subject, v.rule, v.message))
                })
                .collect();
            return Err(EngineError::ValidationFailed(messages.join("; ")));
        }

        let breakdown = scored_pair(&a, &b);
        let result = result_from_breakdown(&breakdown);

        let include_time = self.config.include_time_in_profile;
        let profile_a = element_profile(&a, include_time);
        let profile_b = element_profile(&b, include_time);
        let affinity = profile_affinity(&profile_a, &profile_b);

        let request_hash = compute_request_hash(request, ENGINE_VERSION)?;
        let result_hash = compute_result_hash(&result)?;

        info!(
            score = result.score,
            element_a = %result.element_a,
            element_b = %result.element_b,
            request_hash = %request_hash,
            "analysis complete"
        );

        Ok(CompatibilityReport {
            id: Uuid::new_v4().to_string(),
            engine_version: ENGINE_VERSION.to_string(),
            created_at: Utc::now(),
            request_hash,
            result_hash,
            headline: headline(request),
            validation,
            breakdown,
            profile_a,
            profile_b,
            profile_affinity: affinity,
            result,
        })
    }
}

impl Default for CompatibilityEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Score a pair and log every term.
fn scored_pair(a: &BirthRecord, b: &BirthRecord) -> ScoreBreakdown {
    let breakdown = score_breakdown(a, b);
    debug!(
        element_a = %breakdown.element_a,
        element_b = %breakdown.element_b,
        base = breakdown.base,
        year = breakdown.year_adjustment,
        season = breakdown.season_adjustment,
        day = breakdown.day_adjustment,
        hour = breakdown.hour_adjustment,
        raw_total = breakdown.raw_total,
        "scored pair"
    );
    breakdown
}

fn result_from_breakdown(breakdown: &ScoreBreakdown) -> CompatibilityResult {
    let score = breakdown.score;
    let (a, b) = (breakdown.element_a, breakdown.element_b);

    CompatibilityResult {
        score,
        element_a: a,
        element_b: b,
        personality_a: personality_text(a).to_string(),
        personality_b: personality_text(b).to_string(),
        summary_message: summary_message(score).to_string(),
        detail_message: detail_message(score, a, b),
    }
}

fn headline(request: &AnalysisRequest) -> Option<String> {
    let name_a = request.person_a.name.as_deref()?.trim();
    let name_b = request.person_b.name.as_deref()?.trim();
    if name_a.is_empty() || name_b.is_empty() {
        return None;
    }
    Some(format!("{}님과 {}님의 궁합 결과", name_a, name_b))
}
