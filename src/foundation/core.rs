pub use kurbo::{Affine, Vec2};

/// Normalized scroll position through the whole document, always in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    /// Clamp `value` into `[0, 1]`. Non-finite input maps to the start of the page.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// `offset / (scroll_height - viewport_height)`, clamped.
    ///
    /// A document that cannot scroll reports [`ScrollProgress::START`].
    pub fn from_metrics(metrics: ScrollMetrics) -> Self {
        let max = metrics.max_scroll();
        if max <= 0.0 {
            return Self::START;
        }
        Self::new(metrics.offset_y / max)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Live scroll geometry as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset (`pageYOffset`).
    pub offset_y: f64,
    /// Full document height.
    pub scroll_height: f64,
    /// Visible viewport height.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Largest reachable scroll offset, never negative.
    pub fn max_scroll(self) -> f64 {
        (self.scroll_height - self.viewport_height).max(0.0)
    }
}

/// Translation axis of a section animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Suffix used by the CSS `translateX` / `translateY` functions.
    pub fn css_suffix(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
        }
    }

    /// Offset vector of `amount` pixels along this axis.
    pub fn vector(self, amount: f64) -> Vec2 {
        match self {
            Self::X => Vec2::new(amount, 0.0),
            Self::Y => Vec2::new(0.0, amount),
        }
    }
}

/// Number of pages needed to show `total` items `per_page` at a time.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Euclidean wrap of a possibly negative index into `[0, len)`.
///
/// Returns `None` for an empty range.
pub fn wrap_index(index: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as i64;
    Some((((index % len) + len) % len) as usize)
}

/// Format a number for CSS output, folding `-0` into `0`.
pub fn fmt_num(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// `fmt_num` with a `px` unit.
pub fn fmt_px(v: f64) -> String {
    format!("{}px", fmt_num(v))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
