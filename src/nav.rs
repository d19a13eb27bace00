use crate::{
    foundation::core::{ScrollMetrics, fmt_num},
    render::markup::{html_escape, join_map},
    scroll::schedule::SectionSchedule,
};

/// A top-nav entry scrolling to a fraction of the page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NavLink {
    pub label: String,
    /// Fraction of total scroll progress, in `[0, 1]`.
    pub target: f64,
}

/// One link per scheduled section, aimed at the middle of its visible plateau.
pub fn links_for_schedule(schedule: &SectionSchedule) -> Vec<NavLink> {
    schedule
        .sections()
        .iter()
        .map(|s| NavLink {
            label: s.section.label().to_string(),
            target: s.anchor(),
        })
        .collect()
}

/// Absolute scroll offset for a link target.
pub fn scroll_target(metrics: ScrollMetrics, target: f64) -> f64 {
    let target = if target.is_finite() {
        target.clamp(0.0, 1.0)
    } else {
        0.0
    };
    metrics.max_scroll() * target
}

pub fn render_nav_links(links: &[NavLink]) -> String {
    join_map(links, |link| {
        format!(
            r##"<li><a href="#" data-target="{}">{}</a></li>"##,
            fmt_num(link.target),
            html_escape(&link.label)
        )
    })
}

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
#[path = "../tests/unit/nav/nav.rs"]
mod tests;
