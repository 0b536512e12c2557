//! Stems, Branches and Element Profiles
//!
//! A second, independent reading of a birth record: the year pillar plus
//! an optional hour branch, each mapped to an element. Never feeds
//! [`crate::score::score`].

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::record::BirthRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeavenlyStem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Gap,
    HeavenlyStem::Eul,
    HeavenlyStem::Byeong,
    HeavenlyStem::Jeong,
    HeavenlyStem::Mu,
    HeavenlyStem::Gi,
    HeavenlyStem::Gyeong,
    HeavenlyStem::Sin,
    HeavenlyStem::Im,
    HeavenlyStem::Gye,
];

impl HeavenlyStem {
    pub fn korean_name(self) -> &'static str {
        match self {
            HeavenlyStem::Gap => "갑",
            HeavenlyStem::Eul => "을",
            HeavenlyStem::Byeong => "병",
            HeavenlyStem::Jeong => "정",
            HeavenlyStem::Mu => "무",
            HeavenlyStem::Gi => "기",
            HeavenlyStem::Gyeong => "경",
            HeavenlyStem::Sin => "신",
            HeavenlyStem::Im => "임",
            HeavenlyStem::Gye => "계",
        }
    }

    /// Stems pair up per element: Gap/Eul wood, Byeong/Jeong fire, ...
    pub fn element(self) -> Element {
        match self {
            HeavenlyStem::Gap | HeavenlyStem::Eul => Element::Wood,
            HeavenlyStem::Byeong | HeavenlyStem::Jeong => Element::Fire,
            HeavenlyStem::Mu | HeavenlyStem::Gi => Element::Earth,
            HeavenlyStem::Gyeong | HeavenlyStem::Sin => Element::Metal,
            HeavenlyStem::Im | HeavenlyStem::Gye => Element::Water,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EarthlyBranch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Ja,
    EarthlyBranch::Chuk,
    EarthlyBranch::In,
    EarthlyBranch::Myo,
    EarthlyBranch::Jin,
    EarthlyBranch::Sa,
    EarthlyBranch::O,
    EarthlyBranch::Mi,
    EarthlyBranch::Sin,
    EarthlyBranch::Yu,
    EarthlyBranch::Sul,
    EarthlyBranch::Hae,
];

impl EarthlyBranch {
    pub fn korean_name(self) -> &'static str {
        match self {
            EarthlyBranch::Ja => "자",
            EarthlyBranch::Chuk => "축",
            EarthlyBranch::In => "인",
            EarthlyBranch::Myo => "묘",
            EarthlyBranch::Jin => "진",
            EarthlyBranch::Sa => "사",
            EarthlyBranch::O => "오",
            EarthlyBranch::Mi => "미",
            EarthlyBranch::Sin => "신",
            EarthlyBranch::Yu => "유",
            EarthlyBranch::Sul => "술",
            EarthlyBranch::Hae => "해",
        }
    }

    pub fn element(self) -> Element {
        match self {
            EarthlyBranch::Ja | EarthlyBranch::Hae => Element::Water,
            EarthlyBranch::In | EarthlyBranch::Myo => Element::Wood,
            EarthlyBranch::Sa | EarthlyBranch::O => Element::Fire,
            EarthlyBranch::Sin | EarthlyBranch::Yu => Element::Metal,
            EarthlyBranch::Chuk | EarthlyBranch::Jin | EarthlyBranch::Mi | EarthlyBranch::Sul => {
                Element::Earth
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearPillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl YearPillar {
    /// Two-syllable label, e.g. "갑자".
    pub fn korean_name(&self) -> String {
        format!("{}{}", self.stem.korean_name(), self.branch.korean_name())
    }
}

/// Year 4 CE is Gap-Ja.
pub fn year_pillar(year: i32) -> YearPillar {
    let offset = i64::from(year) - 4;
    YearPillar {
        stem: ALL_STEMS[offset.rem_euclid(10) as usize],
        branch: ALL_BRANCHES[offset.rem_euclid(12) as usize],
    }
}

/// Two-hour blocks counted from midnight.
pub fn hour_branch(hour: i32, minute: i32) -> EarthlyBranch {
    let total = i64::from(hour) * 60 + i64::from(minute);
    ALL_BRANCHES[total.div_euclid(120).rem_euclid(12) as usize]
}

/// Year stem and branch elements, plus the hour branch element when the
/// birth time is known and `include_time` is set.
pub fn element_profile(record: &BirthRecord, include_time: bool) -> Vec<Element> {
    let pillar = year_pillar(record.year);
    let mut profile = vec![pillar.stem.element(), pillar.branch.element()];
    if include_time && record.has_time() {
        profile.push(hour_branch(record.hour_or_zero(), record.minute_or_zero()).element());
    }
    profile
}

/// Directed weights: +10 generates, -10 is controlled by, +5 is generated by.
const RELATION_WEIGHTS: [(Element, Element, i32); 15] = {
    use Element::*;
    [
        (Wood, Fire, 10), (Wood, Metal, -10), (Wood, Water, 5),
        (Fire, Earth, 10), (Fire, Water, -10), (Fire, Wood, 5),
        (Earth, Metal, 10), (Earth, Wood, -10), (Earth, Fire, 5),
        (Metal, Water, 10), (Metal, Fire, -10), (Metal, Earth, 5),
        (Water, Wood, 10), (Water, Earth, -10), (Water, Metal, 5),
    ]
};

pub fn relation_weight(from: Element, to: Element) -> i32 {
    RELATION_WEIGHTS
        .iter()
        .find(|(a, b, _)| *a == from && *b == to)
        .map(|(_, _, w)| *w)
        .unwrap_or(0)
}

/// `round(50 + mean(weight) * 10)` over every cross pair, clamped to [0, 100].
///
/// Rounds half up. Either profile empty gives 50.
pub fn profile_affinity(a: &[Element], b: &[Element]) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 50;
    }
    let total: i32 = a
        .iter()
        .flat_map(|x| b.iter().map(move |y| relation_weight(*x, *y)))
        .sum();
    let mean = f64::from(total) / (a.len() * b.len()) as f64;
    let value = (50.0 + mean * 10.0 + 0.5).floor();
    value.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_pillar_cycle() {
        let p = year_pillar(1984);
        assert_eq!((p.stem, p.branch), (HeavenlyStem::Gap, EarthlyBranch::Ja));
        assert_eq!(p.korean_name(), "갑자");

        let p = year_pillar(1990);
        assert_eq!((p.stem, p.branch), (HeavenlyStem::Gyeong, EarthlyBranch::O));

        assert_eq!(year_pillar(1984 + 60), year_pillar(1984));
        assert_eq!(year_pillar(0).stem, HeavenlyStem::Gyeong);
    }

    #[test]
    fn test_hour_branch_blocks() {
        assert_eq!(hour_branch(0, 0), EarthlyBranch::Ja);
        assert_eq!(hour_branch(1, 59), EarthlyBranch::Ja);
        assert_eq!(hour_branch(2, 0), EarthlyBranch::Chuk);
        assert_eq!(hour_branch(13, 30), EarthlyBranch::O);
        assert_eq!(hour_branch(23, 59), EarthlyBranch::Hae);
    }

    #[test]
    fn test_profile_respects_time_flag() {
        let record = BirthRecord::new(1984, 6, 1).with_time(13, 30);
        assert_eq!(
            element_profile(&record, true),
            vec![Element::Wood, Element::Water, Element::Fire]
        );
        assert_eq!(element_profile(&record, false), vec![Element::Wood, Element::Water]);
        assert_eq!(element_profile(&BirthRecord::new(1984, 6, 1), true).len(), 2);
    }

    #[test]
    fn test_relation_weights_are_directed() {
        assert_eq!(relation_weight(Element::Wood, Element::Fire), 10);
        assert_eq!(relation_weight(Element::Fire, Element::Wood), 5);
        assert_eq!(relation_weight(Element::Wood, Element::Metal), -10);
        assert_eq!(relation_weight(Element::Metal, Element::Wood), 0);
        assert_eq!(relation_weight(Element::Earth, Element::Earth), 0);
    }

    #[test]
    fn test_profile_affinity_rounds_half_up() {
        // -10 + 10 + 5 + 0 = 5 over 4 pairs -> 62.5
        let a = [Element::Wood, Element::Water];
        let b = [Element::Metal, Element::Fire];
        assert_eq!(profile_affinity(&a, &b), 63);

        // -10 + 0 + 5 - 10 = -15 over 4 pairs -> 12.5
        let b = [Element::Metal, Element::Earth];
        assert_eq!(profile_affinity(&a, &b), 13);
    }

    #[test]
    fn test_unlisted_pairs_weigh_zero() {
        assert_eq!(relation_weight(Element::Water, Element::Fire), 0);
        assert_eq!(relation_weight(Element::Wood, Element::Earth), 0);
    }

    #[test]
    fn test_profile_affinity_bounds() {
        assert_eq!(profile_affinity(&[Element::Wood], &[Element::Fire]), 100);
        assert_eq!(profile_affinity(&[Element::Wood], &[Element::Metal]), 0);
        assert_eq!(profile_affinity(&[], &[Element::Metal]), 50);
    }
}
