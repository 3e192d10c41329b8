//! Chart-level operations: prose context, reception tags, consultations.

use natal_facts::*;
use natal_resolver::*;

fn placement(body: CelestialBody, sign: ZodiacSign, house: u8) -> BodyPlacement {
    BodyPlacement {
        body,
        sign,
        house: House::new(house).unwrap(),
    }
}

/// Libra rising, Sun in the 11th (day chart).
fn sample_chart() -> NatalChart {
    NatalChart {
        placements: vec![
            placement(CelestialBody::Sun, ZodiacSign::Leo, 11),
            placement(CelestialBody::Moon, ZodiacSign::Taurus, 8),
            placement(CelestialBody::Venus, ZodiacSign::Virgo, 12),
            placement(CelestialBody::Mars, ZodiacSign::Aries, 7),
        ],
        ascendant_deg: 195.0,
    }
}

#[test]
fn chart_context_one_paragraph_per_placement() {
    let resolver = Resolver::new(InMemoryFactStore::canonical());
    let chart = sample_chart();
    let text = resolver.chart_context(&chart, chart.is_day_chart()).unwrap();
    let paragraphs: Vec<&str> = text.split("\n\n").collect();
    assert_eq!(paragraphs.len(), 4);
    assert!(paragraphs[0].starts_with("Sun is in Leo, house 11."));
    assert!(paragraphs[0].contains("Rulership (very strong)"));
    assert!(paragraphs[0].contains("in Hayz"));
    assert!(paragraphs[2].contains("Fall (weak)"));
    // Moon is nocturnal; no Hayz by day
    assert!(!paragraphs[1].contains("Hayz"));
}

#[test]
fn chart_context_skips_unknown_combinations() {
    let mut sheet = FactSheet::canonical();
    sheet.bodies.retain(|b| b.name != "Moon");
    let resolver = Resolver::new(InMemoryFactStore::from_sheet(sheet));
    let text = resolver.chart_context(&sample_chart(), true).unwrap();
    assert_eq!(text.split("\n\n").count(), 3);
    assert!(!text.contains("Moon is in"));
}

#[test]
fn chart_context_empty_when_nothing_found() {
    let resolver = Resolver::new(InMemoryFactStore::from_sheet(FactSheet::default()));
    assert_eq!(resolver.chart_context(&sample_chart(), true).unwrap(), "");
    assert_eq!(
        Resolver::new(InMemoryFactStore::canonical())
            .chart_context(&NatalChart::default(), true)
            .unwrap(),
        ""
    );
}

#[test]
fn reception_over_natal_sign() {
    let resolver = Resolver::new(InMemoryFactStore::canonical());
    let saturn_on_libra = resolver
        .reception(CelestialBody::Saturn, ZodiacSign::Libra)
        .unwrap();
    assert_eq!(saturn_on_libra.relation, Some(Relation::ExaltedIn));
    assert!(saturn_on_libra.tag.contains("reception (exaltation)"));

    let mars_on_cancer = resolver
        .reception(CelestialBody::Mars, ZodiacSign::Cancer)
        .unwrap();
    assert!(mars_on_cancer.tag.contains("rejection (fall)"));

    let venus_on_gemini = resolver
        .reception(CelestialBody::Venus, ZodiacSign::Gemini)
        .unwrap();
    assert_eq!(venus_on_gemini.relation, None);
    assert!(venus_on_gemini.tag.contains("peregrine"));
}

#[test]
fn love_consultation_adds_seventh_ruler() {
    let resolver = Resolver::new(InMemoryFactStore::canonical());
    let text = resolver
        .consultation_context(Topic::parse("love"), &sample_chart())
        .unwrap();
    // Venus, Moon, then Mars as ruler of the 7th (Aries)
    let venus = text.find("Venus in Virgo:").unwrap();
    let moon = text.find("Moon in Taurus:").unwrap();
    let mars = text.find("Mars in Aries:").unwrap();
    assert!(venus < moon && moon < mars);
    assert!(text.contains("Dignity: Fall (weak) / 12th House Keywords:"));
    assert!(text.contains("Dignity: Exaltation (strong) / 8th House Keywords:"));
    assert!(text.contains("Dignity: Rulership (very strong) / 7th House Keywords:"));
}

#[test]
fn consultation_skips_bodies_not_in_chart() {
    let resolver = Resolver::new(InMemoryFactStore::canonical());
    // Exam: Mercury, plus rulers of 3rd (Sagittarius, Jupiter) and 9th (Gemini, Mercury)
    let text = resolver
        .consultation_context(Topic::Exam, &sample_chart())
        .unwrap();
    assert_eq!(text, "");
}

#[test]
fn korean_chart_context() {
    let resolver = Resolver::new(InMemoryFactStore::canonical()).with_language(Language::Korean);
    let text = resolver.chart_context(&sample_chart(), true).unwrap();
    assert!(text.starts_with("Sun은(는) Leo의 11하우스에 위치합니다."));
    assert!(text.contains("위계는 룰러쉽 (매우 강력함)입니다."));
}
