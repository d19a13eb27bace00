use std::collections::{BTreeMap, BTreeSet};

use crate::{
    app::{
        host::{CarouselKind, Host, Slot},
        session::{Control, Event, Session},
    },
    foundation::core::ScrollMetrics,
    scroll::throttle::{FrameHandle, FrameScheduler},
};

/// What the headless host remembers about one element.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ElementState {
    pub html: String,
    pub style: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    /// Rendered width of the first child card, used when `html` is non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_item_width: Option<f64>,
}

impl ElementState {
    /// `prop: value; ...` in property order.
    pub fn style_attr(&self) -> String {
        self.style
            .iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// In-memory page: elements keyed by [`Slot::key`], a scroll position, and a frame queue.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct HeadlessHost {
    elements: BTreeMap<String, ElementState>,
    metrics: ScrollMetrics,
    #[serde(skip)]
    next_frame: u64,
    #[serde(skip)]
    frames: Vec<FrameHandle>,
    scroll_requests: Vec<f64>,
}

impl HeadlessHost {
    pub fn new(metrics: ScrollMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    /// A host carrying every attachment point of a full page.
    pub fn with_page_skeleton(metrics: ScrollMetrics) -> Self {
        let mut host = Self::new(metrics);
        for slot in Slot::skeleton() {
            host.insert(slot);
        }
        host
    }

    pub fn insert(&mut self, slot: Slot) {
        self.elements.entry(slot.key().to_string()).or_default();
    }

    pub fn remove(&mut self, slot: Slot) -> Option<ElementState> {
        self.elements.remove(slot.key())
    }

    pub fn element(&self, slot: Slot) -> Option<&ElementState> {
        self.elements.get(slot.key())
    }

    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    pub fn set_offset_y(&mut self, offset_y: f64) {
        self.metrics.offset_y = offset_y.clamp(0.0, self.metrics.max_scroll());
    }

    pub fn set_first_item_width(&mut self, slot: Slot, width: f64) {
        if let Some(el) = self.elements.get_mut(slot.key()) {
            el.first_item_width = Some(width);
        }
    }

    /// Frames requested and not cancelled since the last call, oldest first.
    pub fn take_frames(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.frames)
    }

    pub fn scroll_requests(&self) -> &[f64] {
        &self.scroll_requests
    }
}

impl FrameScheduler for HeadlessHost {
    fn request_animation_frame(&mut self) -> FrameHandle {
        self.next_frame += 1;
        let handle = FrameHandle(self.next_frame);
        self.frames.push(handle);
        handle
    }

    fn cancel_animation_frame(&mut self, handle: FrameHandle) {
        self.frames.retain(|h| *h != handle);
    }
}

impl Host for HeadlessHost {
    fn exists(&self, slot: Slot) -> bool {
        self.elements.contains_key(slot.key())
    }

    fn set_inner_html(&mut self, slot: Slot, html: &str) {
        if let Some(el) = self.elements.get_mut(slot.key()) {
            el.html = html.to_string();
        }
    }

    fn set_style(&mut self, slot: Slot, property: &str, value: &str) {
        if let Some(el) = self.elements.get_mut(slot.key()) {
            el.style.insert(property.to_string(), value.to_string());
        }
    }

    fn set_class(&mut self, slot: Slot, class: &str, on: bool) {
        if let Some(el) = self.elements.get_mut(slot.key()) {
            if on {
                el.classes.insert(class.to_string());
            } else {
                el.classes.remove(class);
            }
        }
    }

    fn first_item_width(&self, slot: Slot) -> Option<f64> {
        self.elements
            .get(slot.key())
            .filter(|el| !el.html.is_empty())
            .and_then(|el| el.first_item_width)
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    fn scroll_to(&mut self, offset_y: f64) {
        self.scroll_requests.push(offset_y);
        self.set_offset_y(offset_y);
    }
}

/// One entry of a replayable event script.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Move the viewport and dispatch a scroll event.
    Scroll { y: f64 },
    /// Fire every pending animation frame.
    Frame,
    Click { control: Control },
    /// Dispatch a resize, optionally changing the live certificate card width first.
    Resize {
        #[serde(default)]
        certificate_width: Option<f64>,
    },
}

/// Replay `steps` against `session`. Smooth scrolls requested by a click land at once
/// and dispatch their scroll event.
pub fn run_script(session: &mut Session, host: &mut HeadlessHost, steps: &[ScriptStep]) {
    for step in steps {
        tracing::debug!(?step, "script step");
        match step {
            ScriptStep::Scroll { y } => {
                host.set_offset_y(*y);
                session.handle(host, Event::Scroll);
            }
            ScriptStep::Frame => {
                for handle in host.take_frames() {
                    session.handle(host, Event::AnimationFrame(handle));
                }
            }
            ScriptStep::Click { control } => {
                let before = host.scroll_requests.len();
                session.handle(host, Event::Click(control.clone()));
                if host.scroll_requests.len() > before {
                    session.handle(host, Event::Scroll);
                }
            }
            ScriptStep::Resize { certificate_width } => {
                if let Some(w) = certificate_width {
                    host.set_first_item_width(Slot::Track(CarouselKind::Certificates), *w);
                }
                session.handle(host, Event::Resize);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/headless.rs"]
mod tests;
