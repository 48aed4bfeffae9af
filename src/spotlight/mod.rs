//! Módulo de spotlight - estado, estilos y controlador del efecto

mod controller;
mod state;
mod style;

#[cfg(test)]
mod testing;

// Re-exports públicos
pub use controller::{Lifecycle, Spotlight};
pub use state::{FrameState, MotionState, Step};
pub use style::{css_number, css_px};
