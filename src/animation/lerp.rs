use crate::{animation::ease::Ease, foundation::core::Vec2};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// A value animated between two endpoints over a window of scroll progress.
///
/// Before `window.0` the tween holds `from`, after `window.1` it holds `to`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub window: (f64, f64),
    #[serde(default)]
    pub ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// Tween over the whole scroll range.
    pub fn full(from: T, to: T) -> Self {
        Self::over(from, to, 0.0, 1.0)
    }

    pub fn over(from: T, to: T, start: f64, end: f64) -> Self {
        Self {
            from,
            to,
            window: (start, end),
            ease: Ease::Linear,
        }
    }

    pub fn sample(&self, progress: f64) -> T {
        let (start, end) = self.window;
        if progress <= start {
            return self.from.clone();
        }
        if progress >= end {
            return self.to.clone();
        }
        let t = self.ease.progress(progress, start, end);
        T::lerp(&self.from, &self.to, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
