//! Gunghap CLI - JSON bridge to the compatibility engine
//!
//! Commands: element, max-days, validate, score, analyze, pillar
//! Outputs JSON to stdout, logs to stderr
//! Returns 2 on validation failure, 1 on any other error

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use gunghap_core::{
    calendar::{is_leap_year, max_days_in_month},
    config::EngineConfig,
    element::classify_element,
    narrative::personality_text,
    pipeline::{AnalysisRequest, CompatibilityEngine, EngineError},
    record::BirthRecord,
    sexagenary::{hour_branch, year_pillar},
    telemetry::init_tracing,
};

#[derive(Parser)]
#[command(name = "gunghap-cli")]
#[command(about = "Gunghap CLI - Five-Element Compatibility Engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to an engine config JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a birth moment into an element
    Element {
        #[arg(long, allow_hyphen_values = true)]
        year: i32,
        #[arg(long, allow_hyphen_values = true)]
        month: i32,
        #[arg(long, allow_hyphen_values = true)]
        day: i32,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        hour: i32,
    },

    /// Days in a month, leap-year aware
    MaxDays {
        #[arg(long)]
        month: i32,
        #[arg(long)]
        year: i32,
    },

    /// Validate a birth record
    Validate {
        /// JSON payload (BirthRecord)
        #[arg(short, long)]
        payload: String,
    },

    /// Score a pair without validation
    Score {
        /// JSON payload (AnalysisRequest)
        #[arg(short, long)]
        payload: String,
    },

    /// Validate, score and report on a pair
    Analyze {
        /// JSON payload (AnalysisRequest)
        #[arg(short, long)]
        payload: String,
    },

    /// Year pillar and optional hour branch
    Pillar {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        hour: Option<i32>,
        #[arg(long, default_value_t = 0)]
        minute: i32,
    },
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => println!(r#"{{"error": "Failed to encode output: {}"}}"#, e),
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match EngineConfig::load_from_file(path) {
            Ok(c) => c,
            Err(e) => {
                print_json(&serde_json::json!({ "error": e.to_string() }));
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };

    let engine = CompatibilityEngine::new(config);

    match cli.command {
        Commands::Element { year, month, day, hour } => {
            let element = classify_element(year, month, day, hour);
            print_json(&serde_json::json!({
                "element": element,
                "label": element.korean_name(),
                "personality": personality_text(element),
            }));
            ExitCode::SUCCESS
        }

        Commands::MaxDays { month, year } => match max_days_in_month(month, year) {
            Some(days) => {
                print_json(&serde_json::json!({
                    "month": month,
                    "year": year,
                    "days": days,
                    "leap_year": is_leap_year(year),
                }));
                ExitCode::SUCCESS
            }
            None => {
                print_json(&serde_json::json!({ "error": format!("Invalid month: {}", month) }));
                ExitCode::FAILURE
            }
        },

        Commands::Validate { payload } => {
            let record: BirthRecord = match serde_json::from_str(&payload) {
                Ok(r) => r,
                Err(e) => {
                    print_json(&serde_json::json!({
                        "valid": false,
                        "error": format!("Invalid payload: {}", e),
                    }));
                    return ExitCode::FAILURE;
                }
            };

            let result = engine.validate_record("record", &record);
            print_json(&serde_json::json!(result));
            if result.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)  // Validation failure
            }
        }

        Commands::Score { payload } => {
            let request: AnalysisRequest = match serde_json::from_str(&payload) {
                Ok(r) => r,
                Err(e) => {
                    print_json(&serde_json::json!({ "error": format!("Invalid payload: {}", e) }));
                    return ExitCode::FAILURE;
                }
            };

            let result = engine.compute(&request.person_a.birth, &request.person_b.birth);
            print_json(&serde_json::json!(result));
            ExitCode::SUCCESS
        }

        Commands::Analyze { payload } => {
            let request: AnalysisRequest = match serde_json::from_str(&payload) {
                Ok(r) => r,
                Err(e) => {
                    print_json(&serde_json::json!({
                        "success": false,
                        "error": format!("Invalid payload: {}", e),
                    }));
                    return ExitCode::FAILURE;
                }
            };

            match engine.analyze(&request) {
                Ok(report) => {
                    print_json(&serde_json::json!({
                        "success": true,
                        "report": report,
                    }));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    print_json(&serde_json::json!({
                        "success": false,
                        "error": e.to_string(),
                    }));
                    match e {
                        EngineError::ValidationFailed(_) => ExitCode::from(2),
                        EngineError::Serialization(_) => ExitCode::FAILURE,
                    }
                }
            }
        }

        Commands::Pillar { year, hour, minute } => {
            let pillar = year_pillar(year);
            let hour_info = hour.map(|h| {
                let branch = hour_branch(h, minute);
                serde_json::json!({
                    "branch": branch,
                    "label": branch.korean_name(),
                    "element": branch.element(),
                })
            });
            print_json(&serde_json::json!({
                "year": year,
                "label": pillar.korean_name(),
                "stem": pillar.stem,
                "branch": pillar.branch,
                "stem_element": pillar.stem.element(),
                "branch_element": pillar.branch.element(),
                "hour": hour_info,
            }));
            ExitCode::SUCCESS
        }
    }
}
