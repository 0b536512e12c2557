//! Narrative Text
//!
//! Static copy shown beside a score. Strings carry `<strong>` emphasis and
//! `<br>` breaks; rendering them is the presentation layer's job.

use crate::element::Element;

/// Shown for a personality label that names no element.
pub const UNKNOWN_PERSONALITY: &str = "분석 불가";

/// Relationship text for an ordered pair with no authored entry.
pub const FALLBACK_RELATION: &str = "두 분의 오행 관계는 복합적입니다.";

/// Joins the relation text and the score addendum.
pub const DETAIL_SEPARATOR: &str = "<br><br>";

pub fn personality_text(element: Element) -> &'static str {
    match element {
        Element::Wood => "창의적이고 적응력이 뛰어납니다. 새로운 아이디어를 내고 성장하는 것을 좋아하며, 공동체를 중요시합니다. 다만 때로는 우유부단하고 변덕스러울 수 있습니다.",
        Element::Fire => "열정적이고 활력이 넘칩니다. 카리스마가 있고 리더십이 강하며, 사람들에게 영감을 주는 능력이 있습니다. 다만 때로는 성급하고 충동적일 수 있습니다.",
        Element::Earth => "안정적이고 현실적입니다. 신뢰할 수 있고 책임감이 강하며, 인내심이 있습니다. 전통과 가족을 중요시하지만, 때로는 고집이 세고 변화를 두려워할 수 있습니다.",
        Element::Metal => "세련되고 정확합니다. 공정함과 정의를 중요시하며, 예술적 감각이 뛰어납니다. 목표 지향적이지만, 때로는 완벽주의와 비판적인 성향을 보일 수 있습니다.",
        Element::Water => "지혜롭고 적응력이 뛰어납니다. 직관력이 강하고 깊은 통찰력을 가지고 있으며, 의사소통 능력이 뛰어납니다. 다만 때로는 우울하거나 과민반응을 보일 수 있습니다.",
    }
}

/// Personality text for a free-form label such as "목" or "wood".
pub fn personality_text_for_label(label: &str) -> &'static str {
    Element::parse(label)
        .map(personality_text)
        .unwrap_or(UNKNOWN_PERSONALITY)
}

/// (lower bound, sentence), highest bracket first.
const SUMMARY_BRACKETS: [(u8, &str); 8] = [
    (90, "최상의 궁합입니다! 서로에 대한 이해도가 매우 높고, 깊은 유대감을 형성할 수 있는 관계입니다. 서로의 강점을 북돋우며 함께 성장할 수 있습니다."),
    (80, "매우 좋은 궁합입니다. 서로 잘 맞는 에너지를 가지고 있어 조화로운 관계를 유지할 수 있습니다. 서로를 이해하고 지원하는 힘이 강합니다."),
    (70, "좋은 궁합입니다. 기본적으로 서로 잘 맞으며, 작은 차이점들은 오히려 관계를 더 흥미롭게 만들어줍니다. 서로에게서 배울 점이 많습니다."),
    (60, "무난한 궁합입니다. 서로 다른 특성이 있지만, 노력을 통해 좋은 관계를 유지할 수 있습니다. 서로의 차이점을 존중하는 것이 중요합니다."),
    (50, "보통의 궁합입니다. 서로 다른 성향이 때로는 조화를 이루기도, 때로는 갈등을 일으키기도 합니다. 소통과 이해를 통해 관계를 발전시킬 수 있습니다."),
    (40, "약간 주의가 필요한 궁합입니다. 서로 다른 에너지와 성향이 때로는 어려움을 줄 수 있습니다. 상대방의 관점을 이해하려는 노력이 필요합니다."),
    (30, "도전적인 궁합입니다. 서로 많이 다른 성향을 가지고 있어 관계 유지에 어려움이 있을 수 있습니다. 많은 대화와 타협이 필요합니다."),
    (0, "상당히 어려운 궁합입니다. 매우 다른 에너지와 성향을 가지고 있어 서로를 이해하기 위해 많은 노력이 필요합니다. 그러나 이러한 차이점이 오히려 서로에게 중요한 교훈을 줄 수 있습니다."),
];

pub fn summary_message(score: u8) -> &'static str {
    SUMMARY_BRACKETS
        .iter()
        .find(|(floor, _)| score >= *floor)
        .map(|(_, text)| *text)
        .unwrap_or(SUMMARY_BRACKETS[SUMMARY_BRACKETS.len() - 1].1)
}

/// Directed pair narratives. Each direction is written separately.
const RELATIONS: [(Element, Element, &str); 25] = {
    use Element::*;
    [
        (Wood, Wood, "두 분 모두 <strong>목(木)</strong> 기운을 가진 분들로, 서로의 성장을 도울 수 있는 관계입니다. 두 분 다 창의적이고 활기찬 에너지를 가지고 있어서 함께 새로운 아이디어를 발전시키는 데 탁월합니다."),
        (Wood, Fire, "<strong>목(木)</strong>과 <strong>화(火)</strong>는 상생(相生) 관계로, 매우 좋은 조합입니다. 목이 불을 북돋워주는 것처럼, 서로에게 긍정적인 에너지를 제공할 수 있습니다."),
        (Wood, Earth, "<strong>목(木)</strong>과 <strong>토(土)</strong>는 상극(相剋) 관계입니다. 목이 토의 영양분을 흡수하는 관계로, 때로는 에너지의 불균형이 생길 수 있습니다. 상호 존중이 특히 중요합니다."),
        (Wood, Metal, "<strong>목(木)</strong>과 <strong>금(金)</strong>은 상극(相剋) 관계로, 금이 목을 자르는 관계입니다. 서로 다른 가치관과 접근 방식을 가질 수 있으므로 타협이 필요합니다."),
        (Wood, Water, "<strong>목(木)</strong>과 <strong>수(水)</strong>는 상생(相生) 관계로, 수가 목을 키우는 관계입니다. 서로에게 영감과 지원을 제공할 수 있는 좋은 조합입니다."),

        (Fire, Wood, "<strong>화(火)</strong>와 <strong>목(木)</strong>은 상생(相生) 관계로, 목이 불을 키우는 관계입니다. 서로에게 에너지와 영감을 주는 긍정적인 조합입니다."),
        (Fire, Fire, "두 분 모두 <strong>화(火)</strong> 기운을 가진 분들로, 열정과 에너지가 넘치는 관계입니다. 함께 있으면 매우 활기차지만, 때로는 서로의 불꽃이 너무 강해질 수 있습니다."),
        (Fire, Earth, "<strong>화(火)</strong>와 <strong>토(土)</strong>는 상생(相生) 관계로, 화가 토를 만드는 관계입니다. 서로에게 긍정적인 영향을 미치는 조화로운 조합입니다."),
        (Fire, Metal, "<strong>화(火)</strong>와 <strong>금(金)</strong>은 상극(相剋) 관계로, 화가 금을 녹이는 관계입니다. 갈등이 생길 수 있지만, 이를 통해 서로 성장할 수 있습니다."),
        (Fire, Water, "<strong>화(火)</strong>와 <strong>수(水)</strong>는 상극(相剋) 관계로, 수가 화를 끄는 관계입니다. 서로 다른 접근 방식을 가질 수 있어 존중과 이해가 필요합니다."),

        (Earth, Wood, "<strong>토(土)</strong>와 <strong>목(木)</strong>은 상극(相剋) 관계로, 목이 토의 영양분을 흡수하는 관계입니다. 균형을 유지하려면 서로의 니즈를 존중해야 합니다."),
        (Earth, Fire, "<strong>토(土)</strong>와 <strong>화(火)</strong>는 상생(相生) 관계로, 화가 토를 만드는 관계입니다. 서로에게 안정과 열정을 주는 좋은 조합입니다."),
        (Earth, Earth, "두 분 모두 <strong>토(土)</strong> 기운을 가진 분들로, 안정적이고 신뢰할 수 있는 관계를 형성할 수 있습니다. 함께 견고한 기반을 만들어나갈 수 있습니다."),
        (Earth, Metal, "<strong>토(土)</strong>와 <strong>금(金)</strong>은 상생(相生) 관계로, 토가 금을 품고 있는 관계입니다. 서로에게 안정과 지원을 제공할 수 있는 좋은 조합입니다."),
        (Earth, Water, "<strong>토(土)</strong>와 <strong>수(水)</strong>는 상극(相剋) 관계로, 토가 수를 막는 관계입니다. 서로 다른 접근 방식이 갈등을 일으킬 수 있어 소통이 중요합니다."),

        (Metal, Wood, "<strong>금(金)</strong>과 <strong>목(木)</strong>은 상극(相剋) 관계로, 금이 목을 자르는 관계입니다. 서로 다른 가치관을 가질 수 있어 타협이 필요합니다."),
        (Metal, Fire, "<strong>금(金)</strong>과 <strong>화(火)</strong>는 상극(相剋) 관계로, 화가 금을 녹이는 관계입니다. 갈등이 있을 수 있지만, 이를 통해 서로 배울 점이 많습니다."),
        (Metal, Earth, "<strong>금(金)</strong>과 <strong>토(土)</strong>는 상생(相生) 관계로, 토가 금을 품고 있는 관계입니다. 안정적이고 생산적인 관계를 형성할 수 있습니다."),
        (Metal, Metal, "두 분 모두 <strong>금(金)</strong> 기운을 가진 분들로, 정의롭고 원칙적인 관계를 형성할 수 있습니다. 공통된 가치관을 바탕으로 견고한 관계를 만들어갈 수 있습니다."),
        (Metal, Water, "<strong>금(金)</strong>과 <strong>수(水)</strong>는 상생(相生) 관계로, 금이 수를 만드는 관계입니다. 서로에게 영감과 지혜를 주는 좋은 조합입니다."),

        (Water, Wood, "<strong>수(水)</strong>와 <strong>목(木)</strong>은 상생(相生) 관계로, 수가 목을 키우는 관계입니다. 서로에게 지원과 성장을 제공하는 조화로운 조합입니다."),
        (Water, Fire, "<strong>수(水)</strong>와 <strong>화(火)</strong>는 상극(相剋) 관계로, 수가 화를 끄는 관계입니다. 서로 다른 접근 방식을 가질 수 있어 타협이 필요합니다."),
        (Water, Earth, "<strong>수(水)</strong>와 <strong>토(土)</strong>는 상극(相剋) 관계로, 토가 수를 막는 관계입니다. 서로 다른 관점을 가질 수 있어 소통이 중요합니다."),
        (Water, Metal, "<strong>수(水)</strong>와 <strong>금(金)</strong>은 상생(相生) 관계로, 금이 수를 만드는 관계입니다. 서로에게 영감과 지혜를 주는 좋은 조합입니다."),
        (Water, Water, "두 분 모두 <strong>수(水)</strong> 기운을 가진 분들로, 지혜롭고 직관적인 관계를 형성할 수 있습니다. 깊은 이해와 공감을 바탕으로 정서적 유대감을 쌓을 수 있습니다."),
    ]
};

pub fn relation_text(a: Element, b: Element) -> &'static str {
    RELATIONS
        .iter()
        .find(|(from, to, _)| *from == a && *to == b)
        .map(|(_, _, text)| *text)
        .unwrap_or(FALLBACK_RELATION)
}

pub fn score_addendum(score: u8) -> &'static str {
    if score >= 80 {
        "두 분은 서로에게 매우 긍정적인 영향을 주는 관계입니다. 서로의 장점을 극대화하고 단점을 보완해 줄 수 있어 함께 발전할 수 있는 잠재력이 큽니다."
    } else if score >= 60 {
        "두 분은 서로 어느 정도 조화를 이룰 수 있는 관계입니다. 서로의 차이점을 이해하고 존중한다면 더욱 풍요로운 관계를 만들어갈 수 있습니다."
    } else {
        "두 분의 관계는 일부 도전적인 측면이 있을 수 있습니다. 그러나 이러한 차이점이 오히려 서로에게 중요한 배움의 기회가 될 수 있습니다. 열린 마음으로 소통하는 것이 중요합니다."
    }
}

/// Relation narrative for (a, b) followed by the score addendum.
pub fn detail_message(score: u8, a: Element, b: Element) -> String {
    format!("{}{}{}", relation_text(a, b), DETAIL_SEPARATOR, score_addendum(score))
}
