//! SpotCss - Spotlight CSS que sigue al cursor
//!
//! Aplica a un elemento un gradiente radial que persigue al ratón con
//! retardo suavizado, usando custom properties (`--spotlight-*`).
//!
//! El núcleo ([`Spotlight`]) no depende del navegador: recibe el entorno,
//! el destino de estilos y el programador de frames como traits (ver
//! [`hooks`]). En `wasm32`, el módulo `web` lo conecta al DOM y exporta
//! `showcase(target?, options?)` a JavaScript.

pub mod args;
pub mod config;
pub mod constants;
pub mod error;
pub mod hooks;
pub mod spotlight;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ConfigDefaults, SpotlightOptions, StyleOverrides};
pub use error::SpotlightError;
pub use hooks::{Environment, FrameId, FrameScheduler, StaticEnvironment, StyleSink};
pub use spotlight::{Lifecycle, Spotlight};
pub use types::{ElementRect, Position};
