//! Frame scheduling against a host repaint signal.
//!
//! The scheduler never runs a timer of its own. It asks the [`FrameHost`] for
//! exactly one frame at a time, tagging each request with a fresh
//! [`FrameToken`]; a frame is accepted only if its token matches the one
//! outstanding request and the scheduler is still live. Anything else, such
//! as a callback the host failed to cancel, is dropped.

use crate::constants::{MAX_FRAME_STEP_TICKS, TICKS_PER_SEC};
use crate::surface::Viewport;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// Source of repaint callbacks, e.g. `requestAnimationFrame`.
pub trait FrameHost {
    type Handle: Copy + fmt::Debug;

    /// Arrange for the host to deliver one frame carrying `token`. Returns
    /// `None` if the host could not schedule it.
    fn request_frame(&mut self, token: FrameToken) -> Option<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Per-frame values handed to the tick body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInfo {
    pub viewport: Viewport,
    /// Elapsed time in 60 Hz ticks.
    pub dt: f32,
    /// A buffered resize was applied at the start of this frame.
    pub resized: bool,
    pub index: u64,
}

pub struct FrameScheduler<H: FrameHost> {
    host: H,
    live: bool,
    pending: Option<(FrameToken, H::Handle)>,
    next_token: u64,
    viewport: Viewport,
    queued_resize: Option<Viewport>,
    last_timestamp_ms: Option<f64>,
    frames: u64,
}

impl<H: FrameHost> FrameScheduler<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            live: false,
            pending: None,
            next_token: 0,
            viewport: Viewport::default(),
            queued_resize: None,
            last_timestamp_ms: None,
            frames: 0,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.live
    }

    pub fn pending_token(&self) -> Option<FrameToken> {
        self.pending.map(|(t, _)| t)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// No-op when already running.
    pub fn start(&mut self) {
        if self.live {
            return;
        }
        self.live = true;
        self.last_timestamp_ms = None;
        self.request_next();
    }

    /// Cancels the outstanding request, if any. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.live = false;
        if let Some((_, handle)) = self.pending.take() {
            self.host.cancel_frame(handle);
        }
    }

    /// Buffer a new size; it takes effect at the start of the next frame.
    pub fn resize(&mut self, viewport: Viewport) {
        self.queued_resize = Some(viewport);
    }

    /// Replace the size immediately, discarding any buffered resize. Only
    /// meant for use between frames, e.g. when (re)mounting.
    pub fn reset_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.queued_resize = None;
    }

    /// Accept a delivered frame. Returns `None` for stale tokens or when
    /// stopped, in which case the tick body must not run.
    pub fn begin_frame(&mut self, token: FrameToken, timestamp_ms: f64) -> Option<FrameInfo> {
        if self.pending_token() != Some(token) {
            log::trace!("[frame] dropping stale frame {:?}", token);
            return None;
        }
        self.pending = None;
        if !self.live {
            return None;
        }

        let resized = match self.queued_resize.take() {
            Some(vp) => {
                self.viewport = vp;
                true
            }
            None => false,
        };
        let dt = match self.last_timestamp_ms {
            Some(prev) => (((timestamp_ms - prev) * TICKS_PER_SEC / 1000.0) as f32)
                .clamp(0.0, MAX_FRAME_STEP_TICKS),
            None => 1.0,
        };
        self.last_timestamp_ms = Some(timestamp_ms);
        self.frames += 1;
        Some(FrameInfo {
            viewport: self.viewport,
            dt,
            resized,
            index: self.frames,
        })
    }

    /// Request the following frame once the current body has completed.
    pub fn end_frame(&mut self) {
        if self.live && self.pending.is_none() {
            self.request_next();
        }
    }

    fn request_next(&mut self) {
        let token = FrameToken(self.next_token);
        self.next_token += 1;
        match self.host.request_frame(token) {
            Some(handle) => self.pending = Some((token, handle)),
            None => log::warn!("[frame] host refused frame request; loop idle until restarted"),
        }
    }
}

/// Host for callers that pump frames themselves (headless rendering, tests).
/// Keeps at most the most recent request and counts cancellations.
#[derive(Clone, Debug, Default)]
pub struct ManualHost {
    pub outstanding: Option<FrameToken>,
    pub requests: u64,
    pub cancels: u64,
    /// Simulates a host that cannot schedule frames.
    pub refuse: bool,
}

impl FrameHost for ManualHost {
    type Handle = FrameToken;

    fn request_frame(&mut self, token: FrameToken) -> Option<FrameToken> {
        if self.refuse {
            return None;
        }
        self.requests += 1;
        self.outstanding = Some(token);
        Some(token)
    }

    fn cancel_frame(&mut self, handle: FrameToken) {
        self.cancels += 1;
        if self.outstanding == Some(handle) {
            self.outstanding = None;
        }
    }
}
