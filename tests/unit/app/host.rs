use std::collections::HashSet;

use super::*;

#[test]
fn slot_keys_are_unique() {
    let slots = Slot::skeleton();
    let keys: HashSet<&str> = slots.iter().map(|s| s.key()).collect();
    assert_eq!(keys.len(), slots.len());
}

#[test]
fn skeleton_covers_every_section() {
    let slots = Slot::skeleton();
    for id in SectionId::ALL {
        assert!(slots.contains(&Slot::Section(id)), "{id:?}");
    }
    assert_eq!(Slot::Section(SectionId::Hero).key(), "hero-section");
}

#[test]
fn certificate_controls_use_cert_prefix() {
    assert_eq!(Slot::Prev(CarouselKind::Certificates).key(), "cert-prev");
    assert_eq!(Slot::Dots(CarouselKind::Certificates).key(), "cert-dots");
    assert_eq!(Slot::Dots(CarouselKind::Projects).key(), "carousel-dots");
}
