use super::*;

fn metrics() -> ScrollMetrics {
    ScrollMetrics {
        offset_y: 0.0,
        scroll_height: 2000.0,
        viewport_height: 1000.0,
    }
}

#[test]
fn writes_to_missing_slots_are_ignored() {
    let mut host = HeadlessHost::new(metrics());
    host.set_inner_html(Slot::NavLinks, "<li></li>");
    host.set_style(Slot::MainTitle, "opacity", "1");
    assert!(!host.exists(Slot::NavLinks));
    assert!(host.element(Slot::MainTitle).is_none());
}

#[test]
fn styles_and_classes_accumulate() {
    let mut host = HeadlessHost::with_page_skeleton(metrics());
    host.set_style(Slot::Hamburger, "opacity", "0.5");
    host.set_style(Slot::Hamburger, "pointer-events", "none");
    host.set_class(Slot::Hamburger, "active", true);

    let el = host.element(Slot::Hamburger).unwrap();
    assert_eq!(el.style_attr(), "opacity: 0.5; pointer-events: none;");
    assert!(el.classes.contains("active"));

    host.set_class(Slot::Hamburger, "active", false);
    assert!(host.element(Slot::Hamburger).unwrap().classes.is_empty());
}

#[test]
fn cancelled_frames_never_fire() {
    let mut host = HeadlessHost::new(metrics());
    let a = host.request_animation_frame();
    let b = host.request_animation_frame();
    host.cancel_animation_frame(a);
    assert_eq!(host.take_frames(), vec![b]);
    assert!(host.take_frames().is_empty());
}

#[test]
fn scroll_offset_is_clamped_to_document() {
    let mut host = HeadlessHost::new(metrics());
    host.scroll_to(5000.0);
    assert_eq!(host.metrics().offset_y, 1000.0);
    assert_eq!(host.scroll_requests(), &[5000.0]);
    host.set_offset_y(-10.0);
    assert_eq!(host.metrics().offset_y, 0.0);
}

#[test]
fn width_is_only_measurable_with_a_rendered_card() {
    let track = Slot::Track(CarouselKind::Certificates);
    let mut host = HeadlessHost::with_page_skeleton(metrics());
    host.set_first_item_width(track, 640.0);
    assert_eq!(host.first_item_width(track), None);
    host.set_inner_html(track, "<div class=\"cert-card-glass\"></div>");
    assert_eq!(host.first_item_width(track), Some(640.0));
}

#[test]
fn script_steps_parse_from_json() {
    let steps: Vec<ScriptStep> = serde_json::from_str(
        r#"[
            {"kind": "scroll", "y": 120},
            {"kind": "frame"},
            {"kind": "click", "control": {"action": "next", "carousel": "projects"}},
            {"kind": "click", "control": {"action": "dot", "carousel": "certificates", "index": 2}},
            {"kind": "click", "control": {"action": "hamburger"}},
            {"kind": "resize"},
            {"kind": "resize", "certificate_width": 600}
        ]"#,
    )
    .unwrap();
    assert_eq!(steps.len(), 7);
    assert_eq!(steps[0], ScriptStep::Scroll { y: 120.0 });
    assert_eq!(
        steps[3],
        ScriptStep::Click {
            control: Control::Dot {
                carousel: CarouselKind::Certificates,
                index: 2
            }
        }
    );
    assert_eq!(
        steps[5],
        ScriptStep::Resize {
            certificate_width: None
        }
    );
}
