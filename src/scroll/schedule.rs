use crate::{
    animation::ease::Ease,
    foundation::{
        core::Axis,
        error::{FolioError, FolioResult},
    },
};

/// The six page sections, in scroll order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Hero,
    Projects,
    Skills,
    Experience,
    Certificates,
    Contact,
}

impl SectionId {
    pub const ALL: [Self; 6] = [
        Self::Hero,
        Self::Projects,
        Self::Skills,
        Self::Experience,
        Self::Certificates,
        Self::Contact,
    ];

    /// CSS class of the section element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Hero => "hero-section",
            Self::Projects => "projects-module",
            Self::Skills => "skills-module",
            Self::Experience => "experience-module",
            Self::Certificates => "certificates-module",
            Self::Contact => "contact-module",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Certificates => "Certificates",
            Self::Contact => "Contact",
        }
    }

    /// Modules get their pointer interactivity gated on opacity; the hero does not.
    pub fn is_module(self) -> bool {
        !matches!(self, Self::Hero)
    }
}

/// Which phases a section goes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionShape {
    /// Visible from the top, fades out, never comes back.
    FadeOutOnly,
    /// Fades in and then stays.
    FadeInOnly,
    /// Invisible, fade in, visible, fade out, invisible.
    Full,
}

/// Scroll thresholds for one section, as fractions of total scroll progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionConfig {
    pub section: SectionId,
    pub start: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_in: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_out: Option<f64>,
    pub end: f64,
    pub axis: Axis,
    /// Entry offset in pixels; the exit moves the same distance the other way.
    pub distance: f64,
    #[serde(default)]
    pub ease: Ease,
}

impl SectionConfig {
    pub fn shape(&self) -> SectionShape {
        match (self.fade_in, self.fade_out) {
            (None, Some(_)) => SectionShape::FadeOutOnly,
            (Some(_), None) => SectionShape::FadeInOnly,
            _ => SectionShape::Full,
        }
    }

    /// Where the section is most visible: the middle of its fully-visible plateau.
    pub fn anchor(&self) -> f64 {
        match self.shape() {
            SectionShape::FadeOutOnly => self.start,
            SectionShape::FadeInOnly => self.end,
            SectionShape::Full => {
                let from = self.fade_in.unwrap_or(self.start);
                let to = self.fade_out.unwrap_or(self.end);
                (from + to) / 2.0
            }
        }
    }

    pub fn validate(&self) -> FolioResult<()> {
        let name = self.section.class();
        if self.fade_in.is_none() && self.fade_out.is_none() {
            return Err(FolioError::validation(format!(
                "section '{name}' needs fade_in, fade_out, or both"
            )));
        }
        if !self.distance.is_finite() {
            return Err(FolioError::validation(format!(
                "section '{name}' distance must be finite"
            )));
        }

        let thresholds: Vec<f64> = [Some(self.start), self.fade_in, self.fade_out, Some(self.end)]
            .into_iter()
            .flatten()
            .collect();
        if thresholds
            .iter()
            .any(|t| !t.is_finite() || !(0.0..=1.0).contains(t))
        {
            return Err(FolioError::validation(format!(
                "section '{name}' thresholds must lie in [0, 1]"
            )));
        }
        if !thresholds.windows(2).all(|w| w[0] < w[1]) {
            return Err(FolioError::validation(format!(
                "section '{name}' thresholds must be strictly increasing"
            )));
        }
        Ok(())
    }
}

/// Ordered section thresholds. Adjacent sections may overlap to crossfade.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SectionSchedule {
    sections: Vec<SectionConfig>,
}

impl SectionSchedule {
    pub fn new(sections: Vec<SectionConfig>) -> FolioResult<Self> {
        let schedule = Self { sections };
        schedule.validate()?;
        Ok(schedule)
    }

    pub fn validate(&self) -> FolioResult<()> {
        for (i, s) in self.sections.iter().enumerate() {
            s.validate()?;
            if self.sections[..i].iter().any(|o| o.section == s.section) {
                return Err(FolioError::validation(format!(
                    "section '{}' is scheduled twice",
                    s.section.class()
                )));
            }
        }
        Ok(())
    }

    pub fn sections(&self) -> &[SectionConfig] {
        &self.sections
    }

    pub fn get(&self, section: SectionId) -> Option<&SectionConfig> {
        self.sections.iter().find(|s| s.section == section)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for SectionSchedule {
    fn default() -> Self {
        fn section(
            section: SectionId,
            start: f64,
            fade_in: Option<f64>,
            fade_out: Option<f64>,
            end: f64,
            axis: Axis,
            distance: f64,
        ) -> SectionConfig {
            SectionConfig {
                section,
                start,
                fade_in,
                fade_out,
                end,
                axis,
                distance,
                ease: Ease::Linear,
            }
        }

        use SectionId::*;
        Self {
            sections: vec![
                section(Hero, 0.0, None, Some(0.08), 0.12, Axis::Y, -50.0),
                section(Projects, 0.12, Some(0.17), Some(0.28), 0.33, Axis::X, 100.0),
                section(Skills, 0.33, Some(0.38), Some(0.48), 0.53, Axis::X, -100.0),
                section(Experience, 0.53, Some(0.58), Some(0.65), 0.70, Axis::Y, 50.0),
                section(Certificates, 0.70, Some(0.75), Some(0.82), 0.87, Axis::Y, 50.0),
                section(Contact, 0.87, Some(0.92), None, 1.0, Axis::Y, 50.0),
            ],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/schedule.rs"]
mod tests;
