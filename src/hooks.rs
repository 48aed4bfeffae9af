//! Capacidades del entorno que el controlador necesita
//!
//! El controlador no toca el DOM directamente: habla con estos traits.
//! En el navegador los implementa el módulo `web`; en los tests, fakes.

use crate::error::Result;

/// Consultas sobre el entorno de ejecución
pub trait Environment {
    /// Hay documento y ventana donde pintar
    fn has_renderable_surface(&self) -> bool;

    /// El dispositivo principal tiene puntero con hover (no solo táctil)
    fn has_hover_pointer(&self) -> bool;
}

/// Destino de los estilos inline y del atributo marcador del elemento
pub trait StyleSink {
    fn set_property(&mut self, name: &str, value: &str) -> Result<()>;

    fn remove_property(&mut self, name: &str) -> Result<()>;

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()>;

    fn remove_attribute(&mut self, name: &str) -> Result<()>;
}

/// Programador de frames (equivalente a `requestAnimationFrame`)
///
/// La implementación sabe a quién llamar cuando llegue el frame; el
/// controlador solo pide y cancela.
pub trait FrameScheduler {
    /// Pide un frame y devuelve su identificador
    fn request_frame(&mut self) -> Result<FrameId>;

    /// Cancela un frame pendiente
    fn cancel_frame(&mut self, id: FrameId);
}

/// Identificador de un frame pedido al programador
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameId(pub i32);

/// Entorno fijo, útil fuera del navegador
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticEnvironment {
    pub renderable_surface: bool,
    pub hover_pointer: bool,
}

impl StaticEnvironment {
    /// Escritorio con ratón
    pub const fn desktop() -> Self {
        Self {
            renderable_surface: true,
            hover_pointer: true,
        }
    }

    /// Sin superficie (SSR, headless)
    pub const fn headless() -> Self {
        Self {
            renderable_surface: false,
            hover_pointer: false,
        }
    }

    /// Dispositivo solo táctil
    pub const fn touch() -> Self {
        Self {
            renderable_surface: true,
            hover_pointer: false,
        }
    }
}

impl Environment for StaticEnvironment {
    fn has_renderable_surface(&self) -> bool {
        self.renderable_surface
    }

    fn has_hover_pointer(&self) -> bool {
        self.hover_pointer
    }
}
