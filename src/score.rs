//! Compatibility Scoring
//!
//! Base value from a directed element table, then four additive
//! adjustments, clamped once at the end.

use serde::{Deserialize, Serialize};

use crate::calendar::{approx_day_of_year, season_of};
use crate::element::Element;
use crate::record::BirthRecord;

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Used when an ordered pair has no table entry.
pub const DEFAULT_BASE_SCORE: i32 = 50;

/// Directed (from, to) base scores. Every ordered pair is listed on its own.
pub const BASE_TABLE: [(Element, Element, i32); 25] = {
    use Element::*;
    [
        (Wood, Wood, 70), (Wood, Fire, 85), (Wood, Earth, 55), (Wood, Metal, 40), (Wood, Water, 65),
        (Fire, Wood, 85), (Fire, Fire, 70), (Fire, Earth, 65), (Fire, Metal, 50), (Fire, Water, 40),
        (Earth, Wood, 55), (Earth, Fire, 65), (Earth, Earth, 70), (Earth, Metal, 80), (Earth, Water, 60),
        (Metal, Wood, 40), (Metal, Fire, 50), (Metal, Earth, 80), (Metal, Metal, 70), (Metal, Water, 85),
        (Water, Wood, 65), (Water, Fire, 40), (Water, Earth, 60), (Water, Metal, 85), (Water, Water, 70),
    ]
};

/// Table value for the ordered pair, `None` if not authored.
pub fn table_entry(a: Element, b: Element) -> Option<i32> {
    BASE_TABLE
        .iter()
        .find(|(from, to, _)| *from == a && *to == b)
        .map(|(_, _, value)| *value)
}

pub fn base_score(a: Element, b: Element) -> i32 {
    table_entry(a, b).unwrap_or(DEFAULT_BASE_SCORE)
}

/// +5 under 5 years apart, -5 over 15.
pub fn year_adjustment(year_a: i32, year_b: i32) -> i32 {
    let diff = (i64::from(year_a) - i64::from(year_b)).abs();
    if diff < 5 {
        5
    } else if diff > 15 {
        -5
    } else {
        0
    }
}

/// +5 same season, -5 opposite season.
pub fn season_adjustment(month_a: i32, month_b: i32) -> i32 {
    let (a, b) = (season_of(month_a), season_of(month_b));
    if a == b {
        5
    } else if a.is_opposite(b) {
        -5
    } else {
        0
    }
}

/// +5 under 30 approximate days apart, -3 over 180.
pub fn day_adjustment(a: &BirthRecord, b: &BirthRecord) -> i32 {
    let diff = (approx_day_of_year(a.month, a.day) - approx_day_of_year(b.month, b.day)).abs();
    if diff < 30 {
        5
    } else if diff > 180 {
        -3
    } else {
        0
    }
}

/// +5 under 6 hours apart, -2 over 12.
pub fn hour_adjustment(hour_a: i32, hour_b: i32) -> i32 {
    let diff = (i64::from(hour_a) - i64::from(hour_b)).abs();
    if diff < 6 {
        5
    } else if diff > 12 {
        -2
    } else {
        0
    }
}

/// Every term that went into a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub element_a: Element,
    pub element_b: Element,
    pub base: i32,
    pub year_adjustment: i32,
    pub season_adjustment: i32,
    pub day_adjustment: i32,
    pub hour_adjustment: i32,
    /// Sum before clamping; may leave [0, 100].
    pub raw_total: i32,
    pub score: u8,
}

pub fn score_breakdown(a: &BirthRecord, b: &BirthRecord) -> ScoreBreakdown {
    let element_a = a.element();
    let element_b = b.element();

    let base = base_score(element_a, element_b);
    let year = year_adjustment(a.year, b.year);
    let season = season_adjustment(a.month, b.month);
    let day = day_adjustment(a, b);
    let hour = hour_adjustment(a.hour_or_zero(), b.hour_or_zero());

    let raw_total = base + year + season + day + hour;

    ScoreBreakdown {
        element_a,
        element_b,
        base,
        year_adjustment: year,
        season_adjustment: season,
        day_adjustment: day,
        hour_adjustment: hour,
        raw_total,
        score: raw_total.clamp(MIN_SCORE, MAX_SCORE) as u8,
    }
}

/// Compatibility score in [0, 100]. Person order selects the table direction.
pub fn score(a: &BirthRecord, b: &BirthRecord) -> u8 {
    score_breakdown(a, b).score
}
