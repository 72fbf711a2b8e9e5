//! Platform-free core of the ambient backdrop: a handful of radial-gradient
//! orbs drifting across the viewport, wrapped at the edges, repainted every
//! frame in the current light/dark theme.

pub mod animator;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod frame_loop;
pub mod orb;
pub mod overlay;
pub mod palette;
pub mod stats;
pub mod surface;
pub mod theme;

pub use animator::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use frame_loop::*;
pub use orb::*;
pub use overlay::*;
pub use palette::*;
pub use stats::*;
pub use surface::*;
pub use theme::*;
