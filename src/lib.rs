//! Gunghap Core - Five-Element Compatibility Engine
//!
//! # Guarantees
//! 1. Scoring Is Pure (same records, same result, no hidden state)
//! 2. Scores Stay In [0, 100]
//! 3. Table Direction Matters (person A's element indexes the row)
//! 4. Validation Is The Caller's Gate (`analyze` always runs it, `compute` never does)

pub mod calendar;
pub mod config;
pub mod element;
pub mod hashing;
pub mod narrative;
pub mod pipeline;
pub mod record;
pub mod score;
pub mod sexagenary;
pub mod telemetry;
pub mod validation;

pub use calendar::{is_leap_year, max_days_in_month, season_of, Season};
pub use config::{ConfigError, EngineConfig, FailureMode, InputBounds};
pub use element::{classify_element, Element, ALL_ELEMENTS};
pub use hashing::{canonical_json, compute_request_hash, compute_result_hash};
pub use narrative::{detail_message, personality_text, summary_message};
pub use pipeline::{
    AnalysisRequest, CompatibilityEngine, CompatibilityReport, CompatibilityResult, EngineError,
    PairValidation,
};
pub use record::{BirthRecord, PersonInput};
pub use score::{base_score, score, score_breakdown, ScoreBreakdown};
pub use validation::{ValidationResult, ValidationRule, ValidationViolation, ViolationSeverity};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
