//! Platform-agnostic core of the snake background: theming, simulation,
//! drawing-surface abstraction and frame scheduling.
//!
//! Nothing in here touches browser APIs, so the whole crate builds and tests
//! on the host. The web front end supplies a [`Surface`] backed by a 2D canvas
//! and a [`FrameHost`] backed by `requestAnimationFrame`.

pub mod constants;
pub mod engine;
pub mod links;
pub mod particles;
pub mod scheduler;
pub mod snake;
pub mod surface;
pub mod theme;

pub use engine::*;
pub use links::*;
pub use particles::*;
pub use scheduler::*;
pub use snake::*;
pub use surface::*;
pub use theme::*;
