//! Trail-based wandering entities ("snakes").
//!
//! Each snake keeps a fixed-length trail of segments behind its head. The head
//! moves along one of eight headings, picks a new one at random every one to
//! three seconds and wraps toroidally once it is well past the viewport edge.

use crate::constants::*;
use crate::surface::{Rgb, Shadow, Surface, Viewport};
use crate::theme::Theme;
use glam::Vec2;
use rand::Rng;
use std::collections::VecDeque;
use std::f32::consts::FRAC_1_SQRT_2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    UpLeft,
    UpRight,
    DownLeft,
}

impl Heading {
    pub const ALL: [Heading; 8] = [
        Heading::Right,
        Heading::Left,
        Heading::Down,
        Heading::Up,
        Heading::DownRight,
        Heading::UpLeft,
        Heading::UpRight,
        Heading::DownLeft,
    ];

    /// Unit direction in surface coordinates (y grows downwards).
    pub fn vector(self) -> Vec2 {
        const D: f32 = FRAC_1_SQRT_2;
        match self {
            Heading::Right => Vec2::new(1.0, 0.0),
            Heading::Left => Vec2::new(-1.0, 0.0),
            Heading::Down => Vec2::new(0.0, 1.0),
            Heading::Up => Vec2::new(0.0, -1.0),
            Heading::DownRight => Vec2::new(D, D),
            Heading::UpLeft => Vec2::new(-D, -D),
            Heading::UpRight => Vec2::new(D, -D),
            Heading::DownLeft => Vec2::new(-D, D),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Heading::ALL[rng.gen_range(0..Heading::ALL.len())]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub pos: Vec2,
    pub opacity: f32,
    pub radius: f32,
}

#[inline]
fn trail_fraction(index: usize, trail_length: usize) -> f32 {
    index as f32 / trail_length.max(1) as f32
}

/// Opacity of the segment at `index`; non-increasing in `index`, within \[0, 1\].
#[inline]
pub fn segment_opacity(index: usize, trail_length: usize) -> f32 {
    (HEAD_OPACITY - TRAIL_OPACITY_FALLOFF * trail_fraction(index, trail_length)).clamp(0.0, 1.0)
}

#[inline]
pub fn segment_radius(base_radius: f32, index: usize, trail_length: usize) -> f32 {
    (base_radius * (1.0 - TRAIL_RADIUS_FALLOFF * trail_fraction(index, trail_length))).max(0.0)
}

/// Wrap a head that has drifted more than [`WRAP_MARGIN`] past an edge to the
/// opposite margin. Each axis is handled independently.
pub fn wrap_head(pos: Vec2, viewport: Viewport) -> Vec2 {
    let wrap = |v: f32, extent: f32| {
        if v > extent + WRAP_MARGIN {
            -WRAP_MARGIN
        } else if v < -WRAP_MARGIN {
            extent + WRAP_MARGIN
        } else {
            v
        }
    };
    Vec2::new(wrap(pos.x, viewport.width), wrap(pos.y, viewport.height))
}

fn random_countdown<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(HEADING_COUNTDOWN_MIN..=HEADING_COUNTDOWN_MAX)
}

#[derive(Clone, Debug)]
pub struct Snake {
    segments: VecDeque<Segment>,
    heading: Heading,
    countdown: f32,
    speed: f32,
    base_radius: f32,
    trail_length: usize,
}

impl Snake {
    /// Random start inside the viewport, heading right, trail fully seeded.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        viewport: Viewport,
        trail_length: usize,
        speed: f32,
    ) -> Self {
        let start = Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        );
        let base_radius = SEGMENT_RADIUS_MIN + rng.gen::<f32>() * SEGMENT_RADIUS_SPAN;
        let countdown = random_countdown(rng);
        Self::with_start(start, Heading::Right, countdown, speed, base_radius, trail_length)
    }

    /// Deterministic construction. The trail is laid out to the left of
    /// `start`, one base radius apart, so nothing grows out of a single point.
    /// A trail length of zero still keeps the head.
    pub fn with_start(
        start: Vec2,
        heading: Heading,
        countdown: f32,
        speed: f32,
        base_radius: f32,
        trail_length: usize,
    ) -> Self {
        let trail_length = trail_length.max(1);
        let segments = (0..trail_length)
            .map(|i| Segment {
                pos: Vec2::new(start.x - i as f32 * base_radius, start.y),
                opacity: segment_opacity(i, trail_length),
                radius: segment_radius(base_radius, i, trail_length),
            })
            .collect();
        Self {
            segments,
            heading,
            countdown,
            speed,
            base_radius,
            trail_length,
        }
    }

    #[inline]
    pub fn head(&self) -> Vec2 {
        self.segments.front().map(|s| s.pos).unwrap_or_default()
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Segment> + '_ {
        self.segments.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Ticks left until the next random heading change.
    pub fn countdown(&self) -> f32 {
        self.countdown
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    pub fn trail_length(&self) -> usize {
        self.trail_length
    }

    /// Advance by `dt` ticks.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport, dt: f32) {
        self.countdown -= dt;
        if self.countdown <= 0.0 {
            self.heading = Heading::random(rng);
            self.countdown = random_countdown(rng);
        }

        let head = self.head() + self.heading.vector() * self.speed * dt;
        self.segments.push_front(Segment {
            pos: wrap_head(head, viewport),
            opacity: HEAD_OPACITY,
            radius: self.base_radius,
        });
        self.segments.truncate(self.trail_length);

        let (len, base) = (self.trail_length, self.base_radius);
        for (i, seg) in self.segments.iter_mut().enumerate() {
            seg.opacity = segment_opacity(i, len);
            seg.radius = segment_radius(base, i, len);
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, theme: &Theme) {
        let modern = theme.is_modern();
        for (i, seg) in self.segments.iter().enumerate() {
            let rgb = segment_color(theme, i);
            if modern {
                surface.set_shadow(Some(Shadow {
                    color: rgb.alpha(SHADOW_ALPHA),
                    blur: SHADOW_BLUR,
                    offset: Vec2::splat(SHADOW_OFFSET),
                }));
            }
            surface.fill_circle(seg.pos, seg.radius, rgb.alpha(seg.opacity));
            if modern && i < HIGHLIGHT_SEGMENTS {
                surface.fill_highlight(seg.pos, seg.radius, seg.opacity * HIGHLIGHT_ALPHA);
            }
        }
        if modern {
            surface.set_shadow(None);
        }
    }
}

/// Head in primary, the next few segments in secondary, the rest in accent.
#[inline]
pub fn segment_color(theme: &Theme, index: usize) -> Rgb {
    match index {
        0 => theme.primary,
        i if i < SECONDARY_SEGMENTS => theme.secondary,
        _ => theme.accent,
    }
}

/// All snakes of one engine instance.
#[derive(Clone, Debug, Default)]
pub struct SnakePool {
    snakes: Vec<Snake>,
}

impl SnakePool {
    pub fn seed<R: Rng + ?Sized>(rng: &mut R, theme: &Theme, viewport: Viewport) -> Self {
        let snakes = (0..theme.entity_count)
            .map(|_| Snake::new(rng, viewport, theme.trail_length, theme.base_speed))
            .collect();
        Self { snakes }
    }

    pub fn from_snakes(snakes: Vec<Snake>) -> Self {
        Self { snakes }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport, dt: f32) {
        for snake in &mut self.snakes {
            snake.update(rng, viewport, dt);
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, theme: &Theme) {
        for snake in &self.snakes {
            snake.draw(surface, theme);
        }
    }

    pub fn heads(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.snakes.iter().map(Snake::head)
    }

    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    pub fn snakes_mut(&mut self) -> &mut [Snake] {
        &mut self.snakes
    }

    pub fn len(&self) -> usize {
        self.snakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snakes.is_empty()
    }
}
