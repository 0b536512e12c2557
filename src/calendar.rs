//! Calendar Helpers
//!
//! Leap years and month lengths are Gregorian. Day-of-year is the flat
//! 30-day approximation the scoring formula was tuned against; do not
//! replace it with a real ordinal date.

use serde::{Deserialize, Serialize};

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` if month is not 1..=12.
pub fn max_days_in_month(month: i32, year: i32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    if month == 2 && is_leap_year(year) {
        return Some(29);
    }
    Some(DAYS_IN_MONTH[(month - 1) as usize])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn opposite(self) -> Season {
        match self {
            Season::Spring => Season::Fall,
            Season::Fall => Season::Spring,
            Season::Summer => Season::Winter,
            Season::Winter => Season::Summer,
        }
    }

    pub fn is_opposite(self, other: Season) -> bool {
        self.opposite() == other
    }
}

/// 3-5 spring, 6-8 summer, 9-11 fall, anything else winter.
pub fn season_of(month: i32) -> Season {
    match month {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Fall,
        _ => Season::Winter,
    }
}

/// `(month - 1) * 30 + day`
pub fn approx_day_of_year(month: i32, day: i32) -> i64 {
    (i64::from(month) - 1) * 30 + i64::from(day)
}
