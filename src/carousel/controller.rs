use crate::{
    carousel::state::CarouselState,
    foundation::{
        core::fmt_px,
        error::{FolioError, FolioResult},
    },
};

/// What a carousel does with its buttons at the first and last page.
///
/// Navigation itself always wraps; this only controls the affordance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeMode {
    /// Buttons stay live everywhere.
    Wrap,
    /// Prev is disabled on the first page, next on the last.
    Disable,
}

/// Where the width of one card comes from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ItemWidth {
    /// Known at build time.
    Fixed { width: f64 },
    /// Read from the first rendered card; `fallback` when it cannot be measured.
    Measured { fallback: f64 },
}

/// Static configuration of one carousel instance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CarouselConfig {
    pub items_per_page: usize,
    pub item_width: ItemWidth,
    pub gap: f64,
    pub edge: EdgeMode,
}

impl CarouselConfig {
    /// Project cards: three per page at `minmax(320px, 1fr)`.
    pub const fn projects_defaults() -> Self {
        Self {
            items_per_page: 3,
            item_width: ItemWidth::Fixed { width: 320.0 },
            gap: 30.0,
            edge: EdgeMode::Wrap,
        }
    }

    /// Certificate cards: one per page, responsive width.
    pub const fn certificates_defaults() -> Self {
        Self {
            items_per_page: 1,
            item_width: ItemWidth::Measured { fallback: 800.0 },
            gap: 30.0,
            edge: EdgeMode::Disable,
        }
    }

    pub fn validate(&self) -> FolioResult<()> {
        if self.items_per_page == 0 {
            return Err(FolioError::validation("carousel items_per_page must be > 0"));
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(FolioError::validation("carousel gap must be finite and >= 0"));
        }
        let width = match self.item_width {
            ItemWidth::Fixed { width } => width,
            ItemWidth::Measured { fallback } => fallback,
        };
        if !width.is_finite() || width <= 0.0 {
            return Err(FolioError::validation("carousel item width must be finite and > 0"));
        }
        Ok(())
    }
}

/// Interactive state of a prev/next button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlState {
    Enabled,
    Disabled,
}

impl ControlState {
    fn from_enabled(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }

    pub fn opacity(self) -> &'static str {
        match self {
            Self::Enabled => "1",
            Self::Disabled => "0.5",
        }
    }

    pub fn pointer_events(self) -> &'static str {
        match self {
            Self::Enabled => "auto",
            Self::Disabled => "none",
        }
    }
}

/// Everything a host needs to draw a carousel after a navigation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CarouselView {
    pub page: usize,
    pub total_pages: usize,
    pub offset_px: f64,
    /// One entry per page, exactly one `true` unless the carousel is empty.
    pub indicators: Vec<bool>,
    /// `None` when the carousel never restyles its buttons.
    pub prev: Option<ControlState>,
    pub next: Option<ControlState>,
}

impl CarouselView {
    /// CSS transform for the card track.
    pub fn track_transform(&self) -> String {
        format!("translateX({})", fmt_px(self.offset_px))
    }
}

/// Owns the paging state of one carousel and derives its view.
#[derive(Clone, Debug)]
pub struct CarouselController {
    state: CarouselState,
    config: CarouselConfig,
}

impl CarouselController {
    pub fn initialize(total_items: usize, config: CarouselConfig) -> FolioResult<Self> {
        config.validate()?;
        let state = CarouselState::new(total_items, config.items_per_page)?;
        tracing::debug!(
            total_items,
            items_per_page = config.items_per_page,
            total_pages = state.total_pages(),
            "carousel initialized"
        );
        Ok(Self { state, config })
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }

    pub fn go_to(&mut self, page: i64) -> usize {
        let p = self.state.go_to(page);
        tracing::debug!(requested = page, page = p, "carousel go_to");
        p
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.state.current_page() as i64 + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.state.current_page() as i64 - 1)
    }

    /// Whether the host must measure a live card before applying the offset.
    pub fn needs_measurement(&self) -> bool {
        matches!(self.config.item_width, ItemWidth::Measured { .. })
    }

    /// Track offset in pixels. `measured` is the live width of the first card, if any.
    pub fn offset_px(&self, measured: Option<f64>) -> f64 {
        let width = match self.config.item_width {
            ItemWidth::Fixed { width } => width,
            ItemWidth::Measured { fallback } => measured
                .filter(|w| w.is_finite() && *w > 0.0)
                .unwrap_or(fallback),
        };
        let first_item = self.state.current_page() * self.state.items_per_page();
        -(first_item as f64) * (width + self.config.gap)
    }

    pub fn indicators(&self) -> Vec<bool> {
        let current = self.state.current_page();
        (0..self.state.total_pages()).map(|i| i == current).collect()
    }

    pub fn prev_control(&self) -> Option<ControlState> {
        match self.config.edge {
            EdgeMode::Wrap => None,
            EdgeMode::Disable => Some(ControlState::from_enabled(!self.state.is_first())),
        }
    }

    pub fn next_control(&self) -> Option<ControlState> {
        match self.config.edge {
            EdgeMode::Wrap => None,
            EdgeMode::Disable => Some(ControlState::from_enabled(!self.state.is_last())),
        }
    }

    pub fn view(&self, measured: Option<f64>) -> CarouselView {
        CarouselView {
            page: self.state.current_page(),
            total_pages: self.state.total_pages(),
            offset_px: self.offset_px(measured),
            indicators: self.indicators(),
            prev: self.prev_control(),
            next: self.next_control(),
        }
    }

    /// Indicator dots, one per page, the current one marked `active`.
    pub fn render_indicators(&self) -> String {
        self.indicators()
            .into_iter()
            .enumerate()
            .map(|(i, active)| {
                let class = if active {
                    "carousel-dot active"
                } else {
                    "carousel-dot"
                };
                format!(r#"<span class="{class}" data-slide="{i}"></span>"#)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/controller.rs"]
mod tests;
