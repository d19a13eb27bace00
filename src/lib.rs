//! Folio renders a personal portfolio site.
//!
//! Content (projects, skills, experience, certificates) is loaded from one JSON document and
//! mapped to markup by pure renderers. Two card carousels page through the rendered cards,
//! and a scroll engine derives per-section opacity, translation and scale from a
//! normalized scroll position.
//!
//! - Load a [`ContentBundle`] with a [`ContentLoader`]
//! - Build a [`Session`] from a [`SiteConfig`] and drive it through a [`Host`]
//! - Or render a whole static page with [`render_static_page`]
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod app;
pub mod carousel;
pub mod config;
pub mod content;
pub mod nav;
pub mod render;
pub mod scroll;
pub mod telemetry;

pub use crate::foundation::core::{
    Affine, Axis, ScrollMetrics, ScrollProgress, Vec2, page_count, wrap_index,
};
pub use crate::foundation::error::{FolioError, FolioResult};

pub use crate::animation::ease::Ease;
pub use crate::app::document::{render_document, render_static_page};
pub use crate::app::headless::{HeadlessHost, ScriptStep, run_script};
pub use crate::app::host::{CarouselKind, Host, Slot};
pub use crate::app::session::{Control, Event, Session};
pub use crate::carousel::controller::{CarouselConfig, CarouselController, EdgeMode, ItemWidth};
pub use crate::config::SiteConfig;
pub use crate::content::loader::{ContentLoader, ContentSource};
pub use crate::content::model::{Certificate, ContentBundle, ExperienceEntry, Project};
pub use crate::scroll::engine::{ScrollEngine, SectionVisibility, compute_visibility};
pub use crate::scroll::schedule::{SectionConfig, SectionId, SectionSchedule};
