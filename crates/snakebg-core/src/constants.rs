// Simulation and drawing tuning constants shared by the core and the web frontend.

// Timing
pub const TICKS_PER_SEC: f64 = 60.0; // simulation is expressed in 60 Hz ticks
pub const MAX_FRAME_STEP_TICKS: f32 = 3.0; // cap after a stalled or hidden tab

// Snakes
pub const WRAP_MARGIN: f32 = 50.0; // heads may leave the viewport by this much before wrapping
pub const HEADING_COUNTDOWN_MIN: f32 = 60.0; // ticks
pub const HEADING_COUNTDOWN_MAX: f32 = 180.0; // ticks
pub const SEGMENT_RADIUS_MIN: f32 = 3.0;
pub const SEGMENT_RADIUS_SPAN: f32 = 6.0;
pub const HEAD_OPACITY: f32 = 0.8;
pub const TRAIL_OPACITY_FALLOFF: f32 = 0.6; // opacity lost from head to tail
pub const TRAIL_RADIUS_FALLOFF: f32 = 0.5; // fraction of radius lost from head to tail
pub const SECONDARY_SEGMENTS: usize = 5; // segments 1..5 use the secondary color
pub const HIGHLIGHT_SEGMENTS: usize = 3; // modern style highlights the first few segments
pub const HIGHLIGHT_ALPHA: f32 = 0.4;
pub const SHADOW_ALPHA: f32 = 0.3;
pub const SHADOW_BLUR: f32 = 8.0;
pub const SHADOW_OFFSET: f32 = 1.0;

// Particles
pub const PARTICLE_SPEED_SPAN: f32 = 1.0; // each velocity axis in [-span/2, span/2)
pub const PARTICLE_LIFE_MIN: f32 = 50.0; // ticks
pub const PARTICLE_LIFE_SPAN: f32 = 100.0;
pub const PARTICLE_RADIUS_MIN: f32 = 0.5;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;
pub const PARTICLE_MAX_ALPHA: f32 = 0.3;

// Proximity links
pub const LINK_DISTANCE: f32 = 150.0;
pub const LINK_MAX_ALPHA: f32 = 0.1;
pub const LINK_WIDTH: f32 = 1.0;

// Frame clear
pub const FADE_ALPHA: f32 = 0.15; // partial clear that leaves ghost trails
pub const FADE_RGB: [u8; 3] = [255, 255, 255];
