use super::*;

fn projects(total: usize) -> CarouselController {
    CarouselController::initialize(total, CarouselConfig::projects_defaults()).unwrap()
}

fn certificates(total: usize) -> CarouselController {
    CarouselController::initialize(total, CarouselConfig::certificates_defaults()).unwrap()
}

#[test]
fn initialize_builds_one_indicator_per_page() {
    let c = projects(7);
    assert_eq!(c.total_pages(), 3);
    assert_eq!(c.indicators(), vec![true, false, false]);
    let dots = c.render_indicators();
    assert_eq!(dots.matches("carousel-dot").count(), 3);
    assert_eq!(dots.matches("active").count(), 1);
    assert!(dots.starts_with(r#"<span class="carousel-dot active" data-slide="0">"#));
}

#[test]
fn exactly_one_indicator_after_every_navigation() {
    let mut c = projects(10);
    for step in 0..12 {
        if step % 3 == 0 {
            c.prev();
        } else {
            c.next();
        }
        let active: Vec<usize> = c
            .indicators()
            .iter()
            .enumerate()
            .filter(|(_, a)| **a)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, vec![c.current_page()]);
    }
}

#[test]
fn fixed_layout_offset_moves_by_whole_pages() {
    let mut c = projects(7);
    assert_eq!(c.offset_px(None), 0.0);
    c.next();
    assert_eq!(c.offset_px(None), -1050.0);
    c.next();
    assert_eq!(c.offset_px(Some(999.0)), -2100.0);
    assert_eq!(c.view(None).track_transform(), "translateX(-2100px)");
}

#[test]
fn measured_layout_uses_live_width_or_fallback() {
    let mut c = certificates(4);
    assert!(c.needs_measurement());
    c.go_to(2);
    assert_eq!(c.offset_px(Some(600.0)), -1260.0);
    assert_eq!(c.offset_px(None), -1660.0);
    assert_eq!(c.offset_px(Some(0.0)), -1660.0);
}

#[test]
fn project_carousel_never_disables_buttons() {
    let mut c = projects(7);
    assert_eq!(c.prev_control(), None);
    c.go_to(2);
    assert_eq!(c.next_control(), None);
    assert_eq!(c.next(), 0);
}

#[test]
fn certificate_buttons_disable_at_edges() {
    let mut c = certificates(4);
    assert_eq!(c.total_pages(), 4);
    assert_eq!(c.prev_control(), Some(ControlState::Disabled));
    assert_eq!(c.next_control(), Some(ControlState::Enabled));

    c.go_to(3);
    assert_eq!(c.prev_control(), Some(ControlState::Enabled));
    assert_eq!(c.next_control(), Some(ControlState::Disabled));

    c.go_to(1);
    assert_eq!(c.prev_control(), Some(ControlState::Enabled));
    assert_eq!(c.next_control(), Some(ControlState::Enabled));
}

#[test]
fn certificate_navigation_still_wraps() {
    let mut c = certificates(4);
    assert_eq!(c.prev(), 3);
    assert_eq!(c.next(), 0);
}

#[test]
fn control_styles() {
    assert_eq!(ControlState::Disabled.opacity(), "0.5");
    assert_eq!(ControlState::Disabled.pointer_events(), "none");
    assert_eq!(ControlState::Enabled.opacity(), "1");
    assert_eq!(ControlState::Enabled.pointer_events(), "auto");
}

#[test]
fn empty_carousel_is_inert() {
    let mut c = projects(0);
    assert_eq!(c.next(), 0);
    assert_eq!(c.prev(), 0);
    let v = c.view(None);
    assert!(v.indicators.is_empty());
    assert_eq!(v.offset_px, 0.0);
    assert_eq!(c.render_indicators(), "");

    let c = certificates(0);
    assert_eq!(c.prev_control(), Some(ControlState::Disabled));
    assert_eq!(c.next_control(), Some(ControlState::Disabled));
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = CarouselConfig::projects_defaults();
    cfg.items_per_page = 0;
    assert!(CarouselController::initialize(3, cfg).is_err());

    let mut cfg = CarouselConfig::certificates_defaults();
    cfg.item_width = ItemWidth::Measured { fallback: -1.0 };
    assert!(cfg.validate().is_err());

    let mut cfg = CarouselConfig::projects_defaults();
    cfg.gap = f64::NAN;
    assert!(cfg.validate().is_err());
}
