//! Element Classification - Birth Numbers to One of Five Categories
//!
//! Deliberately simplified arithmetic, not an authentic saju derivation.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// Fixed classification order. Index 0 = Wood.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Element at `index mod 5` in classification order.
    pub fn from_index(index: i32) -> Self {
        ALL_ELEMENTS[index.rem_euclid(5) as usize]
    }

    pub fn index(self) -> usize {
        match self {
            Element::Wood => 0,
            Element::Fire => 1,
            Element::Earth => 2,
            Element::Metal => 3,
            Element::Water => 4,
        }
    }

    /// Single-syllable Korean label, e.g. "목".
    pub fn korean_name(self) -> &'static str {
        match self {
            Element::Wood => "목",
            Element::Fire => "화",
            Element::Earth => "토",
            Element::Metal => "금",
            Element::Water => "수",
        }
    }

    pub fn hanja(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    /// Accepts the English name (any case) or the Korean label.
    pub fn parse(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        ALL_ELEMENTS.into_iter().find(|e| {
            e.korean_name() == trimmed
                || e.hanja() == trimmed
                || e.to_string().eq_ignore_ascii_case(trimmed)
        })
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        };
        f.write_str(name)
    }
}

/// Classify a birth moment into an element.
///
/// `index = (year mod 10 + (month*2) mod 5 + day mod 5 + (hour/5) mod 5) mod 5`
///
/// Total over all integers: out-of-range input is not an error here, range
/// checks belong to [`crate::validation`].
pub fn classify_element(year: i32, month: i32, day: i32, hour: i32) -> Element {
    let year_base = year.rem_euclid(10);
    let month_mod = (i64::from(month) * 2).rem_euclid(5) as i32;
    let day_mod = day.rem_euclid(5);
    let hour_mod = hour.div_euclid(5).rem_euclid(5);

    Element::from_index(year_base + month_mod + day_mod + hour_mod)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_reference_date() {
        // (0 + 2 + 1 + 0) % 5 = 3
        assert_eq!(classify_element(2000, 1, 1, 0), Element::Metal);
    }

    #[test]
    fn test_classify_uses_hour_buckets_of_five() {
        assert_eq!(classify_element(2000, 1, 1, 4), Element::Metal);
        assert_eq!(classify_element(2000, 1, 1, 5), Element::Water);
        assert_eq!(classify_element(2000, 1, 1, 10), Element::Wood);
    }

    #[test]
    fn test_classify_out_of_range_still_maps() {
        assert_eq!(classify_element(-7, -3, 0, -1), classify_element(-7, -3, 0, -1));
        let e = classify_element(99999, 40, 77, 300);
        assert!(ALL_ELEMENTS.contains(&e));
    }

    #[test]
    fn test_index_round_trips_order() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index(), i);
            assert_eq!(Element::from_index(i as i32), *e);
        }
        assert_eq!(Element::from_index(-1), Element::Water);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(Element::parse("목"), Some(Element::Wood));
        assert_eq!(Element::parse("METAL"), Some(Element::Metal));
        assert_eq!(Element::parse("水"), Some(Element::Water));
        assert_eq!(Element::parse("aether"), None);
    }
}
