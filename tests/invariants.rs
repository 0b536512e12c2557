//! Contract Invariant Tests
//!
//! These tests verify the non-negotiable guarantees.

use std::io::Write;

use gunghap_core::{
    CompatibilityEngine, AnalysisRequest,
    calendar::max_days_in_month,
    config::{EngineConfig, FailureMode},
    element::{classify_element, Element},
    narrative::{relation_text, score_addendum, summary_message, DETAIL_SEPARATOR},
    record::{BirthRecord, PersonInput},
    score::{base_score, score, score_breakdown, table_entry},
    hashing::canonical_json,
};

fn scenario_a() -> BirthRecord {
    BirthRecord::new(1990, 5, 10).with_hour(12)
}

fn scenario_b() -> BirthRecord {
    BirthRecord::new(1992, 8, 15).with_hour(14)
}

fn create_request(a: BirthRecord, b: BirthRecord) -> AnalysisRequest {
    AnalysisRequest {
        person_a: PersonInput::named("지훈", a),
        person_b: PersonInput::named("서연", b),
    }
}

#[test]
fn invariant_reference_classification() {
    assert_eq!(classify_element(2000, 1, 1, 0), Element::Metal);
}

#[test]
fn invariant_leap_year_day_bounds() {
    assert_eq!(max_days_in_month(2, 2000), Some(29));
    assert_eq!(max_days_in_month(2, 1900), Some(28));
    assert_eq!(max_days_in_month(2, 2024), Some(29));
    assert_eq!(max_days_in_month(2, 2023), Some(28));
}

#[test]
fn invariant_end_to_end_scenario() {
    let (a, b) = (scenario_a(), scenario_b());

    // 1990/5/10 12h: (0 + 0 + 0 + 2) % 5 = 2; 1992/8/15 14h: (2 + 1 + 0 + 2) % 5 = 0
    let breakdown = score_breakdown(&a, &b);
    assert_eq!(breakdown.element_a, Element::Earth);
    assert_eq!(breakdown.element_b, Element::Wood);
    assert_eq!(breakdown.base, 55);
    assert_eq!(breakdown.year_adjustment, 5);
    assert_eq!(breakdown.season_adjustment, 0);  // spring vs summer
    assert_eq!(breakdown.day_adjustment, 0);     // |130 - 225| = 95
    assert_eq!(breakdown.hour_adjustment, 5);
    assert_eq!(breakdown.score, 65);

    let result = CompatibilityEngine::default().compute(&a, &b);
    assert_eq!(result.score, 65);
    assert_eq!(result.summary_message, summary_message(65));
    assert!(result.summary_message.starts_with("무난한 궁합입니다."));
    assert_eq!(
        result.detail_message,
        format!(
            "{}{}{}",
            relation_text(Element::Earth, Element::Wood),
            DETAIL_SEPARATOR,
            score_addendum(65)
        )
    );
}

#[test]
fn invariant_order_selects_table_direction() {
    // Every ordered pair is its own entry; the authored values for the
    // reversed pair are looked up, not derived.
    for (x, y) in [(Element::Wood, Element::Fire), (Element::Earth, Element::Water)] {
        assert_eq!(table_entry(x, y), Some(base_score(x, y)));
        assert_eq!(table_entry(y, x), Some(base_score(y, x)));
    }
    assert_eq!(base_score(Element::Wood, Element::Fire), 85);
    assert_eq!(base_score(Element::Fire, Element::Wood), 85);

    // With the literal table the swapped score coincides...
    let (a, b) = (scenario_a(), scenario_b());
    assert_eq!(score(&a, &b), score(&b, &a));

    // ...but the directed narrative does not.
    let engine = CompatibilityEngine::default();
    let forward = engine.compute(&a, &b);
    let reverse = engine.compute(&b, &a);
    assert_eq!(forward.element_a, reverse.element_b);
    assert_ne!(forward.detail_message, reverse.detail_message);
}

#[test]
fn invariant_clamp_on_extremes() {
    let young = BirthRecord::new(2025, 12, 31).with_hour(23);
    let old = BirthRecord::new(1920, 1, 1).with_hour(0);
    let s = score(&young, &old);
    assert!(s <= 100);

    let far_out = BirthRecord::new(-40000, 99, -12).with_hour(9999);
    assert!(score(&far_out, &old) <= 100);
}

#[test]
fn invariant_compute_is_idempotent() {
    let engine = CompatibilityEngine::default();
    let (a, b) = (scenario_a(), scenario_b());
    let first = engine.compute(&a, &b);
    for _ in 0..10 {
        assert_eq!(engine.compute(&a, &b), first);
    }
}

#[test]
fn invariant_analyze_rejects_invalid_records() {
    let engine = CompatibilityEngine::default();

    // February 29th in a common year
    let request = create_request(BirthRecord::new(2023, 2, 29).with_hour(1), scenario_b());
    let err = engine.analyze(&request).unwrap_err();
    assert!(err.to_string().contains("Validation failed"));
    assert!(err.to_string().contains("person_a.day_of_month"));
}

#[test]
fn invariant_analyze_rejects_missing_fields() {
    let engine = CompatibilityEngine::default();
    let request: AnalysisRequest = serde_json::from_str(
        r#"{"person_a": {"year": 1990, "month": 5}, "person_b": {"year": 1992, "month": 8, "day": 15}}"#,
    )
    .unwrap();

    let err = engine.analyze(&request).unwrap_err();
    assert!(err.to_string().contains("person_a.required_fields"));
}

#[test]
fn invariant_valid_pair_produces_report() {
    let engine = CompatibilityEngine::default();
    let request = create_request(scenario_a(), scenario_b());

    let report = engine.analyze(&request).unwrap();
    assert!(report.validation.valid());
    assert_eq!(report.result.score, 65);
    assert_eq!(report.breakdown.raw_total, 65);
    assert_eq!(report.headline.as_deref(), Some("지훈님과 서연님의 궁합 결과"));
    assert_eq!(report.request_hash.len(), 64);
    assert!(!report.id.is_empty());
    // Time known for both: stem, branch and hour branch
    assert_eq!(report.profile_a.len(), 3);
    assert_eq!(report.profile_b.len(), 3);
}

#[test]
fn invariant_report_hashes_stable() {
    let engine = CompatibilityEngine::default();
    let request = create_request(scenario_a(), scenario_b());

    let r1 = engine.analyze(&request).unwrap();
    let r2 = engine.analyze(&request).unwrap();

    assert_eq!(r1.request_hash, r2.request_hash);
    assert_eq!(r1.result_hash, r2.result_hash);
    assert_ne!(r1.id, r2.id);
}

#[test]
fn invariant_warn_mode_scores_out_of_range_input() {
    let config = EngineConfig {
        failure_mode: FailureMode::Warn,
        ..EngineConfig::default()
    };
    let engine = CompatibilityEngine::new(config);
    let request = create_request(BirthRecord::new(1850, 2, 30), scenario_b());

    let report = engine.analyze(&request).unwrap();
    assert!(report.validation.person_a.has_errors());
    assert_eq!(report.result, engine.compute(&request.person_a.birth, &request.person_b.birth));
}

#[test]
fn invariant_clamp_day_config_repairs_input() {
    let config = EngineConfig {
        clamp_day_to_month: true,
        ..EngineConfig::default()
    };
    let engine = CompatibilityEngine::new(config);
    let request = create_request(BirthRecord::new(2023, 2, 31).with_hour(8), scenario_b());

    let report = engine.analyze(&request).unwrap();
    let repaired = BirthRecord::new(2023, 2, 28).with_hour(8);
    assert_eq!(report.result, engine.compute(&repaired, &scenario_b()));
}

#[test]
fn invariant_config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"bounds": {{"minYear": 1900}}, "includeTimeInProfile": false}}"#).unwrap();

    let config = EngineConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.bounds.min_year, 1900);
    assert_eq!(config.bounds.max_year, 2025);

    let engine = CompatibilityEngine::new(config);
    let report = engine
        .analyze(&create_request(BirthRecord::new(1905, 3, 3).with_hour(4), scenario_b()))
        .unwrap();
    assert_eq!(report.profile_a.len(), 2);
}

#[test]
fn invariant_missing_config_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::load_from_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config"));
}

#[test]
fn invariant_canonical_json_deterministic() {
    let r1 = create_request(scenario_a(), scenario_b());
    let r2: AnalysisRequest = serde_json::from_str(
        r#"{"person_b": {"hour": 14, "day": 15, "month": 8, "year": 1992, "name": "서연"},
            "person_a": {"day": 10, "name": "지훈", "hour": 12, "year": 1990, "month": 5}}"#,
    )
    .unwrap();

    assert_eq!(canonical_json(&r1).unwrap(), canonical_json(&r2).unwrap());
}
