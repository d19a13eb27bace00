/// Opaque id of a requested animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameHandle(pub u64);

/// Host-side animation frame queue (`requestAnimationFrame` / `cancelAnimationFrame`).
pub trait FrameScheduler {
    fn request_animation_frame(&mut self) -> FrameHandle;
    fn cancel_animation_frame(&mut self, handle: FrameHandle);
}

/// Keeps at most one frame request in flight.
///
/// Every `schedule` cancels the previous still-pending request before asking for a new
/// one, so work runs at most once per displayed frame however fast events arrive.
#[derive(Clone, Debug, Default)]
pub struct FrameThrottle {
    pending: Option<FrameHandle>,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn schedule<S>(&mut self, scheduler: &mut S) -> FrameHandle
    where
        S: FrameScheduler + ?Sized,
    {
        if let Some(prev) = self.pending.take() {
            scheduler.cancel_animation_frame(prev);
            tracing::trace!(handle = prev.0, "cancelled pending frame");
        }
        let handle = scheduler.request_animation_frame();
        self.pending = Some(handle);
        handle
    }

    /// Claim a fired frame. Returns `false` for stale or unknown handles.
    pub fn fire(&mut self, handle: FrameHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/throttle.rs"]
mod tests;
