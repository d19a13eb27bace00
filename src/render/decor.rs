//! Decorative lens rings behind the hero, and the scroll motion attached to them.

use crate::{
    animation::lerp::Tween,
    foundation::core::{fmt_num, fmt_px},
    render::markup::join_map,
};

/// Rings finish expanding at this fraction of total scroll progress.
pub const EXPANSION_END: f64 = 0.3;
/// The main title is fully faded at this fraction.
const TITLE_FADE_END: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RingClass {
    ImpulseRing,
    StaticRing,
    OuterShell,
    NeuralPath,
}

impl RingClass {
    pub fn css(self) -> &'static str {
        match self {
            Self::ImpulseRing => "impulse-ring",
            Self::StaticRing => "static-ring",
            Self::OuterShell => "outer-shell",
            Self::NeuralPath => "neural-path",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LensRing {
    pub index: usize,
    pub radius: f64,
    pub class: RingClass,
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    /// Idle spin period in seconds, in `[10, 30)`.
    pub spin_secs: f64,
    /// +360 for even rings, -360 for odd ones.
    pub spin_deg: f64,
}

/// Scroll-driven pose of one ring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RingPose {
    pub translate_z: f64,
    pub scale: f64,
    pub opacity: f64,
}

/// Pose of everything decorative at one scroll position.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AmbientPose {
    pub title_opacity: f64,
    pub lens_rotate_x_deg: f64,
    pub lens_rotate_y_deg: f64,
    pub rings: Vec<RingPose>,
}

/// Build `count` rings. Orientation and spin speed come from `seed`, so the same seed
/// always yields the same lens.
pub fn generate_rings(count: usize, seed: u64) -> Vec<LensRing> {
    let mut rng = SplitMix64::new(seed);
    (0..count)
        .map(|i| {
            let class = if i % 4 == 0 {
                RingClass::ImpulseRing
            } else if i % 3 == 0 {
                RingClass::StaticRing
            } else if i + 1 == count {
                RingClass::OuterShell
            } else {
                RingClass::NeuralPath
            };
            LensRing {
                index: i,
                radius: 35.0 + ((i % 5) as f64) * 3.0,
                class,
                rotate_x_deg: rng.next_unit() * 360.0,
                rotate_y_deg: rng.next_unit() * 360.0,
                spin_secs: 10.0 + rng.next_unit() * 20.0,
                spin_deg: if i % 2 == 0 { 360.0 } else { -360.0 },
            }
        })
        .collect()
}

impl LensRing {
    pub fn pose_at(&self, progress: f64) -> RingPose {
        let i = self.index as f64;
        let z = Tween::over(0.0, (i + 1.0) * 20.0, 0.0, EXPANSION_END);
        let scale = Tween::over(0.1, 1.0 + i * 0.04, 0.0, EXPANSION_END);
        let opacity = Tween::over(0.0, (i / 5.0 + 0.2).min(1.0), 0.0, EXPANSION_END);
        RingPose {
            translate_z: z.sample(progress),
            scale: scale.sample(progress),
            opacity: opacity.sample(progress),
        }
    }

    /// Inline CSS for this ring at `pose`.
    pub fn style(&self, pose: RingPose) -> String {
        format!(
            "transform: rotateX({}deg) rotateY({}deg) translateZ({}) scale({}); opacity: {}; --spin-duration: {}s; --spin-turn: {}deg;",
            fmt_num(self.rotate_x_deg),
            fmt_num(self.rotate_y_deg),
            fmt_px(pose.translate_z),
            fmt_num(pose.scale),
            fmt_num(pose.opacity),
            fmt_num(self.spin_secs),
            fmt_num(self.spin_deg),
        )
    }
}

pub fn ambient_pose(rings: &[LensRing], progress: f64) -> AmbientPose {
    AmbientPose {
        title_opacity: Tween::over(1.0, 0.0, 0.0, TITLE_FADE_END).sample(progress),
        lens_rotate_x_deg: Tween::full(0.0, 90.0).sample(progress),
        lens_rotate_y_deg: Tween::full(0.0, 360.0).sample(progress),
        rings: rings.iter().map(|r| r.pose_at(progress)).collect(),
    }
}

impl AmbientPose {
    pub fn lens_transform(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg)",
            fmt_num(self.lens_rotate_x_deg),
            fmt_num(self.lens_rotate_y_deg)
        )
    }

    pub fn lens_style(&self) -> String {
        format!("transform: {};", self.lens_transform())
    }
}

/// SVG markup for the rings, posed at `progress`.
pub fn render_rings(rings: &[LensRing], progress: f64) -> String {
    join_map(rings, |ring| {
        format!(
            r#"<svg class="lens-ring {}" viewBox="0 0 100 100" style="{}"><circle cx="50" cy="50" r="{}"></circle></svg>"#,
            ring.class.css(),
            ring.style(ring.pose_at(progress)),
            fmt_num(ring.radius),
        )
    })
}

/// SplitMix64, enough for decorative jitter.
struct SplitMix64(u64);

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn next_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/decor.rs"]
mod tests;
