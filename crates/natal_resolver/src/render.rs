//! Fixed-template rendering of interpretations.
//!
//! Every renderer here is a pure function of its inputs. Missing or blank
//! fact fields are replaced by the language placeholder, never left empty.

use natal_facts::{FactRow, House};

use crate::dignity::classify;
use crate::hayz::{evaluate_hayz, hayz_advisory};
use crate::language::Language;
use crate::placement::ChartPlacement;

/// Field value, or the placeholder when absent or blank.
fn or_placeholder(field: Option<&str>, language: Language) -> &str {
    match field {
        Some(text) if !text.trim().is_empty() => text,
        _ => language.placeholder(),
    }
}

/// Text fields of a fact row with placeholders applied.
struct Fields<'a> {
    positive: &'a str,
    negative: &'a str,
    sign_keywords: &'a str,
    house_meaning: &'a str,
}

impl<'a> Fields<'a> {
    fn of(row: &'a FactRow, language: Language) -> Self {
        Self {
            positive: or_placeholder(row.body_keywords_positive.as_deref(), language),
            negative: or_placeholder(row.body_keywords_negative.as_deref(), language),
            sign_keywords: or_placeholder(row.sign_keywords.as_deref(), language),
            house_meaning: or_placeholder(row.house_meaning.as_deref(), language),
        }
    }
}

const fn header(language: Language) -> &'static str {
    match language {
        Language::English => "[Astrological Analysis Data]",
        Language::Korean => "[점성술 분석 데이터]",
    }
}

/// Render a placement, or the not-found message when the store had no row.
pub fn render(placement: &ChartPlacement, row: Option<&FactRow>, language: Language) -> String {
    match row {
        None => render_not_found(placement, language),
        Some(row) => render_found(placement, row, language),
    }
}

/// Message for a combination the store does not know.
pub fn render_not_found(placement: &ChartPlacement, language: Language) -> String {
    let (body, sign, house) = (&placement.body, &placement.sign, placement.house);
    match language {
        Language::English => format!(
            "{}\nCombination not found: body={body}, sign={sign}, house={house}",
            header(language)
        ),
        Language::Korean => format!(
            "{}\n입력한 조합을 찾을 수 없습니다: 행성={body}, 별자리={sign}, 하우스={house}",
            header(language)
        ),
    }
}

fn render_found(placement: &ChartPlacement, row: &FactRow, language: Language) -> String {
    let f = Fields::of(row, language);
    let dignity = classify(row.dignity_relation.as_ref());
    let hayz = evaluate_hayz(row.body_sect, row.sign_gender, placement.is_day_chart);
    let advisory = hayz_advisory(hayz, language);
    let orientation = placement.orientation_label(language);
    let (body, sign, house) = (&placement.body, &placement.sign, placement.house);

    match language {
        Language::English => format!(
            "{header}\n\
             1. Placement: {body} in {sign}, house {house}. ({orientation})\n\
             2. Core Traits:\n   \
             - Body keywords: {pos} (caution: {neg})\n   \
             - Sign atmosphere: {sk}\n   \
             - House domain: {hm}\n\
             3. Body Strength (Dignity): {label}\n\
             4. Special Advice (Sect): {advisory}",
            header = header(language),
            pos = f.positive,
            neg = f.negative,
            sk = f.sign_keywords,
            hm = f.house_meaning,
            label = dignity.label(language),
        ),
        Language::Korean => format!(
            "{header}\n\
             1. 배치: {body}이(가) {sign}의 {house}하우스에 위치함. ({orientation})\n\
             2. 기본 성향:\n   \
             - 행성 키워드: {pos} (주의: {neg})\n   \
             - 별자리 분위기: {sk}\n   \
             - 하우스 영역: {hm}\n\
             3. 행성의 힘(Dignity): {label}\n\
             4. 특별 조언(Sect): {advisory}",
            header = header(language),
            pos = f.positive,
            neg = f.negative,
            sk = f.sign_keywords,
            hm = f.house_meaning,
            label = dignity.label(language),
        ),
    }
}

/// One prose paragraph per placement, for whole-chart context.
///
/// The Hayz note is appended only when Hayz holds.
pub fn render_paragraph(placement: &ChartPlacement, row: &FactRow, language: Language) -> String {
    let f = Fields::of(row, language);
    let dignity = classify(row.dignity_relation.as_ref());
    let hayz = evaluate_hayz(row.body_sect, row.sign_gender, placement.is_day_chart);
    let (body, sign, house) = (&placement.body, &placement.sign, placement.house);
    let label = dignity.label(language);

    match language {
        Language::English => {
            let note = if hayz {
                " This placement is in Hayz, suited to its sect and favoring positive expression."
            } else {
                ""
            };
            format!(
                "{body} is in {sign}, house {house}. It stands for {pos}; on the negative side, \
                 watch for {neg}. The sign's mood is {sk}, and the house covers {hm}. \
                 Its dignity is {label}.{note}",
                pos = f.positive,
                neg = f.negative,
                sk = f.sign_keywords,
                hm = f.house_meaning,
            )
        }
        Language::Korean => {
            let note = if hayz {
                " 이 위치는 Hayz(헤이즈) 상태로, 섹트에 잘 맞아 긍정적으로 발현되기 유리합니다."
            } else {
                ""
            };
            format!(
                "{body}은(는) {sign}의 {house}하우스에 위치합니다. {pos}를 상징하며, \
                 부정적으로는 {neg}에 주의할 필요가 있습니다. 별자리 분위기는 {sk}이고, \
                 하우스 영역은 {hm}입니다. 위계는 {label}입니다.{note}",
                pos = f.positive,
                neg = f.negative,
                sk = f.sign_keywords,
                hm = f.house_meaning,
            )
        }
    }
}

/// Compact single-line form used by topic consultations.
pub fn render_consultation_line(
    placement: &ChartPlacement,
    house: House,
    row: &FactRow,
    language: Language,
) -> String {
    let f = Fields::of(row, language);
    let dignity = classify(row.dignity_relation.as_ref());
    let (body, sign) = (&placement.body, &placement.sign);
    let ordinal = house.ordinal();
    let label = dignity.label(language);

    match language {
        Language::English => format!(
            "{body} in {sign}: {pos}; when negative {neg}. Sign: {sk}. Dignity: {label} \
             / {ordinal} House Keywords: {hm}",
            pos = f.positive,
            neg = f.negative,
            sk = f.sign_keywords,
            hm = f.house_meaning,
        ),
        Language::Korean => format!(
            "{body} in {sign}: {pos}; 부정 시 {neg}. 별자리: {sk}. 위계: {label} \
             / {ordinal} House Keywords: {hm}",
            pos = f.positive,
            neg = f.negative,
            sk = f.sign_keywords,
            hm = f.house_meaning,
        ),
    }
}
