//! Ambient particle field for the portfolio hero canvas.
//!
//! Fifty slow particles drift inside the canvas, bounce off its edges and
//! link up with faint lines when they come within reach of each other.
//! The simulation and drawing are host independent ([`ParticleField`],
//! [`Animator`]); the `web` module binds them to a browser canvas.

mod utils;

pub mod animator;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod particle;
pub mod surface;
#[cfg(target_arch = "wasm32")]
pub mod web;

use wasm_bindgen::prelude::*;

pub use animator::{Animator, FrameScheduler, LoopState, SharedAnimator};
pub use color::Color;
pub use config::FieldConfig;
pub use error::{ConfigError, SurfaceError};
pub use field::{link_alpha, FrameStats, ParticleField};
pub use particle::Particle;
pub use surface::DrawSurface;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logging();
}
