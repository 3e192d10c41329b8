//! Reception and rejection tags for a transiting body over a natal sign.

use natal_facts::Relation;

use crate::dignity::{Dignity, classify};
use crate::language::Language;

/// Dignity of a transiting body in a natal point's sign, with its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceptionMeta {
    /// Relation returned by the store, including unrecognized tags.
    pub relation: Option<Relation>,
    pub tag: String,
}

impl ReceptionMeta {
    pub fn new(relation: Option<Relation>, language: Language) -> Self {
        let tag = reception_tag(&classify(relation.as_ref()), language).to_string();
        Self { relation, tag }
    }
}

/// Bracketed verdict tag. Unrecognized relations read as peregrine.
pub fn reception_tag(dignity: &Dignity, language: Language) -> &'static str {
    match (dignity, language) {
        (Dignity::Rulership, Language::English) => {
            "[Dignity verdict: reception (rulership). A period that strengthens initiative \
             and stability in this area]"
        }
        (Dignity::Exaltation, Language::English) => {
            "[Dignity verdict: reception (exaltation). A favorable period for taking on \
             responsibility and building solid foundations]"
        }
        (Dignity::Detriment, Language::English) => {
            "[Dignity verdict: rejection (detriment). Beware of overreach and meddling \
             that drain emotion and energy]"
        }
        (Dignity::Fall, Language::English) => {
            "[Dignity verdict: rejection (fall). Strength in this area may scatter or stall, \
             so do not push too hard]"
        }
        (Dignity::Peregrine | Dignity::Unrecognized(_), Language::English) => {
            "[Dignity verdict: peregrine (neutral). No dignity in this sign, \
             so the influence acts neutrally]"
        }
        (Dignity::Rulership, Language::Korean) => {
            "[위계 판단: 리셉션(룰러쉽) 상태. 해당 영역에서 주도권과 안정감이 강화되는 시기로 작용함]"
        }
        (Dignity::Exaltation, Language::Korean) => {
            "[위계 판단: 리셉션(항진) 상태. 책임을 맡거나 뼈대를 단단히 세우는 긍정적 시기로 작용함]"
        }
        (Dignity::Detriment, Language::Korean) => {
            "[위계 판단: 리젝션(손상) 상태. 과유불급, 오지랖으로 인한 감정·에너지 소모 주의]"
        }
        (Dignity::Fall, Language::Korean) => {
            "[위계 판단: 리젝션(추락) 상태. 해당 영역에서 힘이 분산되거나 지연될 수 있으니 무리하지 마세요]"
        }
        (Dignity::Peregrine | Dignity::Unrecognized(_), Language::Korean) => {
            "[위계 판단: 방랑자(중립). 해당 별자리에서 위계가 없어 영향이 중립적으로 작용함]"
        }
    }
}
