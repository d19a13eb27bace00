use crate::{
    foundation::core::ScrollMetrics,
    scroll::{schedule::SectionId, throttle::FrameScheduler},
};

/// Which of the two carousels an attachment point belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselKind {
    Projects,
    Certificates,
}

impl CarouselKind {
    pub const ALL: [Self; 2] = [Self::Projects, Self::Certificates];
}

/// A named attachment point on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Section(SectionId),
    SkillsContainer,
    ExperienceContainer,
    /// The card track, also the container the cards are rendered into.
    Track(CarouselKind),
    Prev(CarouselKind),
    Next(CarouselKind),
    Dots(CarouselKind),
    Hamburger,
    NavLinks,
    LensContainer,
    MainTitle,
}

impl Slot {
    /// Element id, or the section class for [`Slot::Section`].
    pub fn key(self) -> &'static str {
        match self {
            Self::Section(id) => id.class(),
            Self::SkillsContainer => "skills-container",
            Self::ExperienceContainer => "experience-container",
            Self::Track(CarouselKind::Projects) => "projects-container",
            Self::Track(CarouselKind::Certificates) => "certificates-container",
            Self::Prev(CarouselKind::Projects) => "projects-prev",
            Self::Prev(CarouselKind::Certificates) => "cert-prev",
            Self::Next(CarouselKind::Projects) => "projects-next",
            Self::Next(CarouselKind::Certificates) => "cert-next",
            Self::Dots(CarouselKind::Projects) => "carousel-dots",
            Self::Dots(CarouselKind::Certificates) => "cert-dots",
            Self::Hamburger => "hamburger",
            Self::NavLinks => "nav-links",
            Self::LensContainer => "lens-container",
            Self::MainTitle => "main-title",
        }
    }

    /// Every attachment point a complete page carries.
    pub fn skeleton() -> Vec<Self> {
        let mut slots: Vec<Self> = SectionId::ALL.into_iter().map(Self::Section).collect();
        for kind in CarouselKind::ALL {
            slots.extend([
                Self::Track(kind),
                Self::Prev(kind),
                Self::Next(kind),
                Self::Dots(kind),
            ]);
        }
        slots.extend([
            Self::SkillsContainer,
            Self::ExperienceContainer,
            Self::Hamburger,
            Self::NavLinks,
            Self::LensContainer,
            Self::MainTitle,
        ]);
        slots
    }
}

/// The page as seen from the session.
///
/// Writes to a slot that does not exist are ignored by implementations; callers check
/// [`Host::exists`] first when a missing slot should change what they do.
pub trait Host: FrameScheduler {
    fn exists(&self, slot: Slot) -> bool;
    fn set_inner_html(&mut self, slot: Slot, html: &str);
    fn set_style(&mut self, slot: Slot, property: &str, value: &str);
    fn set_class(&mut self, slot: Slot, class: &str, on: bool);
    /// Live rendered width of the first card inside `slot`, if there is one.
    fn first_item_width(&self, slot: Slot) -> Option<f64>;
    fn scroll_metrics(&self) -> ScrollMetrics;
    /// Request a smooth scroll to an absolute offset.
    fn scroll_to(&mut self, offset_y: f64);
}

#[cfg(test)]
#[path = "../../tests/unit/app/host.rs"]
mod tests;
