//! Proximity links: faint lines between snake heads that come close.

use crate::constants::{LINK_DISTANCE, LINK_MAX_ALPHA, LINK_WIDTH};
use crate::surface::Surface;
use crate::theme::Theme;
use glam::Vec2;
use smallvec::SmallVec;

/// Enough inline room for every pair of the largest snake count (8 choose 2).
pub type LinkSet = SmallVec<[ProximityLink; 28]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityLink {
    /// Indices into the head list, `a < b`.
    pub a: usize,
    pub b: usize,
    pub from: Vec2,
    pub to: Vec2,
    pub distance: f32,
}

impl ProximityLink {
    /// Linear falloff from [`LINK_MAX_ALPHA`] at distance 0 to 0 at the threshold.
    #[inline]
    pub fn alpha(&self) -> f32 {
        ((1.0 - self.distance / LINK_DISTANCE) * LINK_MAX_ALPHA).clamp(0.0, LINK_MAX_ALPHA)
    }
}

/// Every unordered pair of heads closer than [`LINK_DISTANCE`], each once.
pub fn proximity_links(heads: &[Vec2]) -> LinkSet {
    let mut out = LinkSet::new();
    for (a, &from) in heads.iter().enumerate() {
        for (b, &to) in heads.iter().enumerate().skip(a + 1) {
            let distance = from.distance(to);
            if distance < LINK_DISTANCE {
                out.push(ProximityLink {
                    a,
                    b,
                    from,
                    to,
                    distance,
                });
            }
        }
    }
    out
}

/// Draws the links for this frame. Only the modern style has them.
pub fn draw_links<S: Surface + ?Sized>(surface: &mut S, theme: &Theme, heads: &[Vec2]) {
    if !theme.is_modern() {
        return;
    }
    for link in proximity_links(heads) {
        surface.stroke_line(link.from, link.to, LINK_WIDTH, theme.secondary.alpha(link.alpha()));
    }
}
