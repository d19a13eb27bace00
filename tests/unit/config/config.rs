use super::*;
use crate::carousel::controller::{EdgeMode, ItemWidth};

#[test]
fn empty_document_gives_defaults() {
    let cfg = SiteConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, SiteConfig::default());
    cfg.validate().unwrap();
    assert_eq!(cfg.projects.items_per_page, 3);
    assert_eq!(cfg.certificates.edge, EdgeMode::Disable);
    assert_eq!(cfg.lens.ring_count, 25);
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let cfg = SiteConfig::from_reader(
        r#"{
            "data_source": "https://example.com/data.json",
            "projects": {"items_per_page": 2, "item_width": {"mode": "fixed", "width": 280.0}, "gap": 20.0, "edge": "disable"},
            "lens": {"seed": 9}
        }"#
        .as_bytes(),
    )
    .unwrap();
    cfg.validate().unwrap();
    assert_eq!(cfg.projects.items_per_page, 2);
    assert_eq!(cfg.projects.item_width, ItemWidth::Fixed { width: 280.0 });
    assert_eq!(cfg.lens.seed, 9);
    assert_eq!(cfg.lens.ring_count, 25);
    assert_eq!(cfg.certificates, CarouselConfig::certificates_defaults());
}

#[test]
fn nav_defaults_to_schedule_anchors() {
    let cfg = SiteConfig::default();
    let links = cfg.nav_links();
    assert_eq!(links.len(), 6);

    let cfg = SiteConfig {
        nav: vec![NavLink {
            label: "Work".to_string(),
            target: 0.2,
        }],
        ..SiteConfig::default()
    };
    assert_eq!(cfg.nav_links().len(), 1);
}

#[test]
fn invalid_values_are_rejected() {
    let cfg = SiteConfig {
        interactivity_threshold: 2.0,
        ..SiteConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = SiteConfig {
        nav: vec![NavLink {
            label: "Bad".to_string(),
            target: -0.1,
        }],
        ..SiteConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = SiteConfig {
        data_source: "  ".to_string(),
        ..SiteConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_config_is_a_serde_error() {
    let err = SiteConfig::from_reader("[1, 2]".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn missing_file_reports_path() {
    let err = SiteConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}
