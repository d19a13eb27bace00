use std::{fs::File, io::BufReader, path::Path};

use crate::{
    carousel::controller::CarouselConfig,
    foundation::error::{FolioError, FolioResult},
    nav::{NavLink, links_for_schedule},
    scroll::{engine::DEFAULT_INTERACTIVITY_THRESHOLD, schedule::SectionSchedule},
};

/// Site-wide settings. Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Path or `http(s)` URL of the content document.
    pub data_source: String,
    pub page: PageConfig,
    pub projects: CarouselConfig,
    pub certificates: CarouselConfig,
    pub schedule: SectionSchedule,
    pub interactivity_threshold: f64,
    pub lens: LensConfig,
    /// Empty means one link per scheduled section.
    pub nav: Vec<NavLink>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub tagline: String,
    pub stylesheet: Option<String>,
    pub contact_email: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LensConfig {
    pub ring_count: usize,
    pub seed: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_source: "data.json".to_string(),
            page: PageConfig::default(),
            projects: CarouselConfig::projects_defaults(),
            certificates: CarouselConfig::certificates_defaults(),
            schedule: SectionSchedule::default(),
            interactivity_threshold: DEFAULT_INTERACTIVITY_THRESHOLD,
            lens: LensConfig::default(),
            nav: Vec::new(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            tagline: String::new(),
            stylesheet: Some("style.css".to_string()),
            contact_email: None,
        }
    }
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            ring_count: 25,
            seed: 0,
        }
    }
}

impl SiteConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FolioError::serde(format!("parse site config JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::validation(format!("open site config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> FolioResult<()> {
        if self.data_source.trim().is_empty() {
            return Err(FolioError::validation("data_source must be non-empty"));
        }
        self.projects.validate()?;
        self.certificates.validate()?;
        self.schedule.validate()?;
        if !self.interactivity_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.interactivity_threshold)
        {
            return Err(FolioError::validation(
                "interactivity_threshold must lie in [0, 1]",
            ));
        }
        for link in &self.nav {
            if !link.target.is_finite() || !(0.0..=1.0).contains(&link.target) {
                return Err(FolioError::validation(format!(
                    "nav link '{}' target must lie in [0, 1]",
                    link.label
                )));
            }
        }
        Ok(())
    }

    pub fn nav_links(&self) -> Vec<NavLink> {
        if self.nav.is_empty() {
            links_for_schedule(&self.schedule)
        } else {
            self.nav.clone()
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
