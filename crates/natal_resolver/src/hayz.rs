//! Hayz: a body whose sect, chart orientation and sign gender agree.

use natal_facts::{Sect, SignGender};

use crate::language::Language;

/// True for a diurnal body in a masculine sign by day, or a nocturnal body
/// in a feminine sign by night.
///
/// Missing attributes and the neutral sect never qualify. Angularity and
/// horizon position are not considered.
pub fn evaluate_hayz(
    sect: Option<Sect>,
    sign_gender: Option<SignGender>,
    is_day_chart: bool,
) -> bool {
    matches!(
        (is_day_chart, sect, sign_gender),
        (true, Some(Sect::Diurnal), Some(SignGender::Masculine))
            | (false, Some(Sect::Nocturnal), Some(SignGender::Feminine))
    )
}

/// Advisory sentence for the interpretation template.
pub const fn hayz_advisory(is_hayz: bool, language: Language) -> &'static str {
    match (is_hayz, language) {
        (true, Language::English) => {
            "This body is in Hayz. Its placement suits its sect, \
             favoring positive expression in this area."
        }
        (false, Language::English) => {
            "Not in Hayz; adjust the interpretation according to dignity and house context."
        }
        (true, Language::Korean) => {
            "이 행성은 Hayz(헤이즈) 상태입니다. 섹트에 잘 맞는 위치로, \
             해당 영역에서 긍정적으로 발현되기 유리합니다."
        }
        (false, Language::Korean) => "Hayz는 아니나, 위계와 하우스 맥락에 따라 해석을 조정하세요.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTS: [Option<Sect>; 4] = [
        Some(Sect::Diurnal),
        Some(Sect::Nocturnal),
        Some(Sect::Neutral),
        None,
    ];
    const GENDERS: [Option<SignGender>; 3] =
        [Some(SignGender::Masculine), Some(SignGender::Feminine), None];

    #[test]
    fn exactly_two_combinations_qualify() {
        let mut hits = Vec::new();
        for is_day in [true, false] {
            for sect in SECTS {
                for gender in GENDERS {
                    if evaluate_hayz(sect, gender, is_day) {
                        hits.push((is_day, sect, gender));
                    }
                }
            }
        }
        assert_eq!(
            hits,
            [
                (true, Some(Sect::Diurnal), Some(SignGender::Masculine)),
                (false, Some(Sect::Nocturnal), Some(SignGender::Feminine)),
            ]
        );
    }

    #[test]
    fn orientation_matters() {
        assert!(!evaluate_hayz(Some(Sect::Diurnal), Some(SignGender::Masculine), false));
        assert!(!evaluate_hayz(Some(Sect::Nocturnal), Some(SignGender::Feminine), true));
    }

    #[test]
    fn neutral_sect_never_qualifies() {
        for is_day in [true, false] {
            for gender in GENDERS {
                assert!(!evaluate_hayz(Some(Sect::Neutral), gender, is_day));
            }
        }
    }

    #[test]
    fn advisories_differ() {
        for lang in [Language::English, Language::Korean] {
            assert_ne!(hayz_advisory(true, lang), hayz_advisory(false, lang));
        }
    }
}
