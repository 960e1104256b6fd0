//! Drawing-surface abstraction.
//!
//! The simulation only ever needs a handful of primitives, so the trait is
//! kept small enough to implement over a 2D canvas, an offscreen buffer or the
//! in-memory [`Recorder`] used by tests.

use crate::constants::{FADE_ALPHA, FADE_RGB};
use glam::Vec2;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Attach an alpha, clamped to \[0, 1\].
    #[inline]
    pub fn alpha(self, a: f32) -> Rgba {
        Rgba {
            rgb: self,
            a: if a.is_finite() { a.clamp(0.0, 1.0) } else { 0.0 },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f32,
}

/// Formats as a CSS color, e.g. `rgba(75, 85, 99, 0.8)`.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb(r, g, b) = self.rgb;
        write!(f, "rgba({}, {}, {}, {})", r, g, b, self.a)
    }
}

/// Current drawable area in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width < 1.0 || self.height < 1.0
    }
}

/// Soft drop shadow applied to subsequent fills.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Rgba,
    pub blur: f32,
    pub offset: Vec2,
}

pub trait Surface {
    /// Snapshot of the drawable size; changes only through [`Surface::resize`].
    fn viewport(&self) -> Viewport;

    fn resize(&mut self, viewport: Viewport);

    /// Whether a drawing context is currently usable. Implementations may
    /// try to (re)acquire one here.
    fn is_available(&mut self) -> bool {
        true
    }

    /// Composite `fade` over the whole frame. This is a partial clear: the
    /// previous frame must stay visible underneath.
    fn clear(&mut self, fade: Rgba);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);

    fn set_shadow(&mut self, _shadow: Option<Shadow>) {}

    /// White radial highlight offset towards the top-left of a circle.
    fn fill_highlight(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.fill_circle(center, radius, Rgb::WHITE.alpha(alpha * 0.5));
    }
}

/// The fill used for the ghost-trail partial clear.
#[inline]
pub fn fade_color() -> Rgba {
    let [r, g, b] = FADE_RGB;
    Rgb(r, g, b).alpha(FADE_ALPHA)
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Rgba),
    Circle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, width: f32, color: Rgba },
    Shadow(Option<Shadow>),
    Highlight { center: Vec2, radius: f32, alpha: f32 },
}

/// Headless surface that records every call it receives.
#[derive(Clone, Debug)]
pub struct Recorder {
    viewport: Viewport,
    pub available: bool,
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            available: true,
            calls: Vec::new(),
        }
    }

    pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|&c| pred(c)).count()
    }

    pub fn lines(&self) -> usize {
        self.count(|c| matches!(c, DrawCall::Line { .. }))
    }

    pub fn circles(&self) -> usize {
        self.count(|c| matches!(c, DrawCall::Circle { .. }))
    }
}

impl Surface for Recorder {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn is_available(&mut self) -> bool {
        self.available
    }

    fn clear(&mut self, fade: Rgba) {
        self.calls.push(DrawCall::Clear(fade));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.calls.push(DrawCall::Shadow(shadow));
    }

    fn fill_highlight(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.calls.push(DrawCall::Highlight {
            center,
            radius,
            alpha,
        });
    }
}
