//! Scroll-driven section visibility.
//!
//! [`schedule`] holds the static per-section thresholds, [`engine`] turns a scroll
//! position into opacity/translation/scale, and [`throttle`] bounds the interactivity
//! pass to one pending animation frame.

pub mod engine;
pub mod schedule;
pub mod throttle;
