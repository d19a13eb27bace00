use super::*;

#[test]
fn default_schedule_is_valid_and_ordered() {
    let s = SectionSchedule::default();
    s.validate().unwrap();
    let ids: Vec<SectionId> = s.sections().iter().map(|c| c.section).collect();
    assert_eq!(ids, SectionId::ALL.to_vec());
}

#[test]
fn hero_and_contact_are_half_schedules() {
    let s = SectionSchedule::default();
    assert_eq!(s.get(SectionId::Hero).unwrap().shape(), SectionShape::FadeOutOnly);
    assert_eq!(s.get(SectionId::Contact).unwrap().shape(), SectionShape::FadeInOnly);
    assert_eq!(s.get(SectionId::Skills).unwrap().shape(), SectionShape::Full);
}

#[test]
fn anchors_sit_on_visible_plateaus() {
    let s = SectionSchedule::default();
    assert_eq!(s.get(SectionId::Hero).unwrap().anchor(), 0.0);
    assert_eq!(s.get(SectionId::Contact).unwrap().anchor(), 1.0);
    let p = s.get(SectionId::Projects).unwrap().anchor();
    assert!((p - 0.225).abs() < 1e-12);
}

#[test]
fn non_increasing_thresholds_are_rejected() {
    let mut cfg = SectionSchedule::default()
        .get(SectionId::Skills)
        .unwrap()
        .clone();
    cfg.fade_out = Some(0.30);
    let err = SectionSchedule::new(vec![cfg]).unwrap_err();
    assert!(err.to_string().contains("strictly increasing"));
}

#[test]
fn out_of_range_and_shapeless_sections_are_rejected() {
    let base = SectionSchedule::default()
        .get(SectionId::Projects)
        .unwrap()
        .clone();

    let mut cfg = base.clone();
    cfg.end = 1.5;
    assert!(cfg.validate().is_err());

    let mut cfg = base.clone();
    cfg.fade_in = None;
    cfg.fade_out = None;
    assert!(cfg.validate().is_err());

    let mut cfg = base;
    cfg.distance = f64::INFINITY;
    assert!(cfg.validate().is_err());
}

#[test]
fn duplicate_sections_are_rejected() {
    let hero = SectionSchedule::default()
        .get(SectionId::Hero)
        .unwrap()
        .clone();
    assert!(SectionSchedule::new(vec![hero.clone(), hero]).is_err());
}

#[test]
fn schedule_round_trips_through_json_config() {
    let json = r#"[
        {"section": "hero", "start": 0.0, "fade_out": 0.5, "end": 0.6, "axis": "y", "distance": -20.0},
        {"section": "contact", "start": 0.5, "fade_in": 0.7, "end": 1.0, "axis": "x", "distance": 10.0, "ease": "OutQuad"}
    ]"#;
    let s: SectionSchedule = serde_json::from_str(json).unwrap();
    s.validate().unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s.get(SectionId::Contact).unwrap().ease, Ease::OutQuad);
    assert_eq!(s.get(SectionId::Hero).unwrap().ease, Ease::Linear);
}

#[test]
fn only_hero_is_not_a_module() {
    for id in SectionId::ALL {
        assert_eq!(id.is_module(), id != SectionId::Hero);
    }
}
