use super::*;

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(icon_slug("Next.js"), Some("nextdotjs"));
    assert_eq!(icon_slug("AWS"), Some("amazonaws"));
    assert_eq!(icon_slug("html/css"), Some("html5"));
}

#[test]
fn known_tech_gets_cdn_icon() {
    assert_eq!(
        tech_badge("Docker"),
        TechBadge::Icon {
            url: "https://cdn.simpleicons.org/docker".to_string()
        }
    );
}

#[test]
fn unknown_tech_falls_back_to_first_character() {
    assert_eq!(
        tech_badge("Zig"),
        TechBadge::Placeholder {
            glyph: "Z".to_string()
        }
    );
    assert_eq!(
        tech_badge("Élixir"),
        TechBadge::Placeholder {
            glyph: "É".to_string()
        }
    );
    assert_eq!(
        tech_badge(""),
        TechBadge::Placeholder {
            glyph: String::new()
        }
    );
}

#[test]
fn gradients_fall_back_for_unknown_ids() {
    assert_eq!(project_gradient("nexa-ai"), "#6A1B9A, #AB47BC");
    assert_eq!(project_gradient("something-else"), "#FF7D36, #00FFAA");
}
