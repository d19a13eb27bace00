use crate::{
    foundation::{
        core::{Affine, Axis, ScrollProgress, Vec2, fmt_num, fmt_px},
        error::{FolioError, FolioResult},
    },
    scroll::schedule::{SectionConfig, SectionId, SectionSchedule, SectionShape},
};

/// Scale of a section before it has faded in.
pub const ENTER_SCALE: f64 = 0.95;
/// Scale a section grows to while fading out.
pub const EXIT_SCALE: f64 = 1.02;
/// Modules at or below this opacity stop receiving pointer events.
pub const DEFAULT_INTERACTIVITY_THRESHOLD: f64 = 0.1;

/// Visual state of one section at one scroll position.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SectionVisibility {
    pub opacity: f64,
    /// Offset along the section's axis, in pixels.
    pub translate: f64,
    pub scale: f64,
}

impl SectionVisibility {
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        translate: 0.0,
        scale: 1.0,
    };

    pub fn hidden(distance: f64) -> Self {
        Self {
            opacity: 0.0,
            translate: distance,
            scale: ENTER_SCALE,
        }
    }

    /// `translate<Axis>(..px) scale(..)`
    pub fn css_transform(&self, axis: Axis) -> String {
        format!(
            "translate{}({}) scale({})",
            axis.css_suffix(),
            fmt_px(self.translate),
            fmt_num(self.scale)
        )
    }

    pub fn affine(&self, axis: Axis) -> Affine {
        Affine::translate(axis.vector(self.translate)) * Affine::scale(self.scale)
    }

    pub fn is_interactive(&self, threshold: f64) -> bool {
        self.opacity > threshold
    }
}

/// Opacity, translation and scale of `config`'s section at `progress`.
///
/// Pure: the same inputs always give the same output.
pub fn compute_visibility(config: &SectionConfig, progress: ScrollProgress) -> SectionVisibility {
    let p = progress.get();
    let hidden = SectionVisibility::hidden(config.distance);
    let fade_in = config.fade_in.unwrap_or(config.start);
    let fade_out = config.fade_out.unwrap_or(config.end);

    match config.shape() {
        SectionShape::FadeOutOnly => {
            if p < fade_out {
                SectionVisibility::VISIBLE
            } else if p < config.end {
                fading_out(config, p, fade_out)
            } else {
                hidden
            }
        }
        SectionShape::FadeInOnly => {
            if p < config.start {
                hidden
            } else if p < fade_in {
                fading_in(config, p, fade_in)
            } else {
                SectionVisibility::VISIBLE
            }
        }
        SectionShape::Full => {
            if p < config.start {
                hidden
            } else if p < fade_in {
                fading_in(config, p, fade_in)
            } else if p < fade_out {
                SectionVisibility::VISIBLE
            } else if p < config.end {
                fading_out(config, p, fade_out)
            } else {
                hidden
            }
        }
    }
}

fn fading_in(config: &SectionConfig, p: f64, fade_in: f64) -> SectionVisibility {
    let t = config.ease.progress(p, config.start, fade_in);
    SectionVisibility {
        opacity: t,
        translate: config.distance * (1.0 - t),
        scale: ENTER_SCALE + (1.0 - ENTER_SCALE) * t,
    }
}

fn fading_out(config: &SectionConfig, p: f64, fade_out: f64) -> SectionVisibility {
    let t = config.ease.progress(p, fade_out, config.end);
    SectionVisibility {
        opacity: 1.0 - t,
        translate: -config.distance * t,
        scale: 1.0 + (EXIT_SCALE - 1.0) * t,
    }
}

/// Serializable view of one evaluated section.
#[derive(Clone, Debug, serde::Serialize)]
pub struct VisibilityNode {
    pub section: SectionId,
    pub axis: Axis,
    pub opacity: f64,
    pub translate: Vec2,
    pub scale: f64,
    pub transform: Affine,
    pub interactive: bool,
}

/// Holds the schedule and the last evaluated state of every section.
#[derive(Clone, Debug)]
pub struct ScrollEngine {
    schedule: SectionSchedule,
    threshold: f64,
    progress: ScrollProgress,
    current: Vec<SectionVisibility>,
}

impl ScrollEngine {
    /// Validates `schedule` and evaluates it at the top of the page.
    pub fn new(schedule: SectionSchedule, threshold: f64) -> FolioResult<Self> {
        schedule.validate()?;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(FolioError::validation(
                "interactivity threshold must lie in [0, 1]",
            ));
        }
        let mut engine = Self {
            schedule,
            threshold,
            progress: ScrollProgress::START,
            current: Vec::new(),
        };
        engine.update(ScrollProgress::START);
        Ok(engine)
    }

    pub fn schedule(&self) -> &SectionSchedule {
        &self.schedule
    }

    pub fn progress(&self) -> ScrollProgress {
        self.progress
    }

    /// Visibility pass: re-evaluate every section at `progress`.
    pub fn update(&mut self, progress: ScrollProgress) -> &[SectionVisibility] {
        self.progress = progress;
        self.current = self
            .schedule
            .sections()
            .iter()
            .map(|cfg| compute_visibility(cfg, progress))
            .collect();
        &self.current
    }

    /// Section configs paired with their last evaluated state.
    pub fn sections(&self) -> impl Iterator<Item = (&SectionConfig, SectionVisibility)> + '_ {
        self.schedule
            .sections()
            .iter()
            .zip(self.current.iter().copied())
    }

    pub fn visibility(&self, section: SectionId) -> Option<SectionVisibility> {
        self.sections()
            .find(|(cfg, _)| cfg.section == section)
            .map(|(_, v)| v)
    }

    /// Interactivity pass: reads only the last computed opacities.
    pub fn interactivity(&self) -> Vec<(SectionId, bool)> {
        self.sections()
            .filter(|(cfg, _)| cfg.section.is_module())
            .map(|(cfg, v)| (cfg.section, v.is_interactive(self.threshold)))
            .collect()
    }

    pub fn snapshot(&self) -> Vec<VisibilityNode> {
        self.sections()
            .map(|(cfg, v)| VisibilityNode {
                section: cfg.section,
                axis: cfg.axis,
                opacity: v.opacity,
                translate: cfg.axis.vector(v.translate),
                scale: v.scale,
                transform: v.affine(cfg.axis),
                interactive: !cfg.section.is_module() || v.is_interactive(self.threshold),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/engine.rs"]
mod tests;
