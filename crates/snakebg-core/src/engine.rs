//! The background engine: one theme, one surface, one scheduler and the
//! simulated scene, tied together by the per-frame tick.
//!
//! Tick order is fixed: snakes update, particles update, the surface is
//! faded, then snakes, particles and proximity links are drawn. Updates
//! always run while mounted and live; drawing is skipped when the surface is
//! missing, unavailable or has no area.

use crate::links::draw_links;
use crate::particles::ParticleField;
use crate::scheduler::{FrameHost, FrameInfo, FrameScheduler, FrameToken, ManualHost};
use crate::snake::SnakePool;
use crate::surface::{fade_color, Surface, Viewport};
use crate::theme::{BackgroundConfig, Theme};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use smallvec::SmallVec;

/// Simulation state that lives between `mount` and `unmount`.
#[derive(Clone, Debug)]
pub struct Scene {
    pub snakes: SnakePool,
    pub particles: ParticleField,
}

impl Scene {
    pub fn seed<R: Rng + ?Sized>(rng: &mut R, theme: &Theme, viewport: Viewport) -> Self {
        Self {
            snakes: SnakePool::seed(rng, theme, viewport),
            particles: ParticleField::seed(rng, theme.particle_count, viewport),
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport, dt: f32) {
        self.snakes.update(rng, viewport, dt);
        self.particles.update(rng, viewport, dt);
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, theme: &Theme) {
        surface.clear(fade_color());
        self.snakes.draw(surface, theme);
        self.particles.draw(surface, theme);
        let heads: SmallVec<[Vec2; 8]> = self.snakes.heads().collect();
        draw_links(surface, theme, &heads);
    }
}

pub struct Engine<S: Surface, H: FrameHost, R: Rng = StdRng> {
    theme: Theme,
    scheduler: FrameScheduler<H>,
    surface: Option<S>,
    scene: Option<Scene>,
    rng: R,
}

impl<S: Surface, H: FrameHost, R: Rng> Engine<S, H, R> {
    pub fn new(config: BackgroundConfig, host: H, rng: R) -> Self {
        let theme = Theme::resolve(&config);
        log::info!(
            "[engine] intensity={} theme={} style={} snakes={} trail={} particles={}",
            config.intensity,
            config.color_theme,
            config.style,
            theme.entity_count,
            theme.trail_length,
            theme.particle_count
        );
        Self {
            theme,
            scheduler: FrameScheduler::new(host),
            surface: None,
            scene: None,
            rng,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn scheduler(&self) -> &FrameScheduler<H> {
        &self.scheduler
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.scheduler.host_mut()
    }

    pub fn is_mounted(&self) -> bool {
        self.scene.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn pending_token(&self) -> Option<FrameToken> {
        self.scheduler.pending_token()
    }

    /// Attach `surface`, seed a fresh scene at its current size and start
    /// ticking. Mounting again replaces the previous surface and scene.
    pub fn mount(&mut self, surface: S) {
        if self.is_mounted() {
            log::warn!("[engine] mount while mounted; replacing previous surface");
            self.unmount();
        }
        let viewport = surface.viewport();
        self.scheduler.reset_viewport(viewport);
        self.scene = Some(Scene::seed(&mut self.rng, &self.theme, viewport));
        self.surface = Some(surface);
        log::info!(
            "[engine] mounted {}x{}",
            viewport.width as u32,
            viewport.height as u32
        );
        self.scheduler.start();
    }

    /// Stop ticking, drop all simulation state and hand the surface back.
    pub fn unmount(&mut self) -> Option<S> {
        self.scheduler.stop();
        if self.scene.take().is_some() {
            log::info!("[engine] unmounted");
        }
        self.surface.take()
    }

    /// Restart after [`Engine::stop`]. Ignored unless mounted.
    pub fn start(&mut self) {
        if !self.is_mounted() {
            log::warn!("[engine] start ignored; nothing mounted");
            return;
        }
        self.scheduler.start();
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Buffered; applied atomically when the next frame begins.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        log::debug!("[engine] resize queued {}x{}", width, height);
        self.scheduler.resize(Viewport::new(width, height));
    }

    /// Host callback for a delivered frame. Returns whether the tick ran.
    pub fn frame(&mut self, token: FrameToken, timestamp_ms: f64) -> bool {
        let Some(info) = self.scheduler.begin_frame(token, timestamp_ms) else {
            return false;
        };
        self.tick(info);
        self.scheduler.end_frame();
        true
    }

    fn tick(&mut self, info: FrameInfo) {
        if info.resized {
            if let Some(surface) = self.surface.as_mut() {
                surface.resize(info.viewport);
            }
        }
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        scene.update(&mut self.rng, info.viewport, info.dt);

        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if info.viewport.is_empty() || !surface.is_available() {
            return;
        }
        scene.draw(surface, &self.theme);
    }
}

impl<S: Surface, R: Rng> Engine<S, ManualHost, R> {
    /// Deliver the outstanding frame, if any, at `timestamp_ms`.
    pub fn pump(&mut self, timestamp_ms: f64) -> bool {
        match self.pending_token() {
            Some(token) => self.frame(token, timestamp_ms),
            None => false,
        }
    }
}
