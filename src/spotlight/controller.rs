//! Controlador del spotlight: ciclo de vida, puntero y bucle de animación

use crate::config::{ConfigDefaults, SpotlightOptions, StyleOverrides};
use crate::hooks::{Environment, FrameScheduler, StyleSink};
use crate::types::{ElementRect, Position};

use super::state::{MotionState, Step};
use super::style::{apply_initial_style, apply_overrides, apply_position, remove_style};

/// Fase del ciclo de vida del controlador
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// El entorno no admite el efecto; todas las operaciones son no-op
    Inert,
    /// Efecto aplicado al elemento
    Active,
    /// Tras `destroy`; estado terminal
    Destroyed,
}

/// Efecto spotlight sobre un elemento.
///
/// `S` recibe los estilos del elemento y `F` programa los frames. El host
/// debe llamar a [`Spotlight::pointer_move`] con cada movimiento del ratón
/// y a [`Spotlight::frame`] cada vez que llegue un frame pedido a `F`.
#[derive(Debug)]
pub struct Spotlight<S: StyleSink, F: FrameScheduler> {
    lifecycle: Lifecycle,
    sink: S,
    scheduler: F,
    smoothing: f64,
    motion: MotionState,
}

impl<S: StyleSink, F: FrameScheduler> Spotlight<S, F> {
    /// Aplica el efecto al elemento detrás de `sink`.
    ///
    /// Sin superficie donde pintar o sin puntero con hover devuelve un
    /// controlador inerte sin haber tocado el elemento.
    pub fn create<E: Environment + ?Sized>(
        env: &E,
        mut sink: S,
        scheduler: F,
        options: &SpotlightOptions,
    ) -> Self {
        if !env.has_renderable_surface() {
            log::debug!("Sin superficie renderizable: spotlight inerte");
            return Self::inert(sink, scheduler);
        }

        // El efecto es de hover; en dispositivos táctiles solo estorba al scroll
        if !env.has_hover_pointer() {
            log::debug!("Sin puntero con hover: spotlight inerte");
            return Self::inert(sink, scheduler);
        }

        apply_initial_style(&mut sink, &options.overrides());

        let smoothing = options.effective_smoothing();
        log::debug!("Spotlight activo (smoothing {})", smoothing);

        Self {
            lifecycle: Lifecycle::Active,
            sink,
            scheduler,
            smoothing,
            motion: MotionState::new(),
        }
    }

    fn inert(sink: S, scheduler: F) -> Self {
        Self {
            lifecycle: Lifecycle::Inert,
            sink,
            scheduler,
            smoothing: ConfigDefaults::SMOOTHING,
            motion: MotionState::new(),
        }
    }

    #[inline]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    #[inline]
    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    #[inline]
    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    /// Registra la posición del puntero (coordenadas de viewport) respecto a
    /// la caja del elemento y arranca el bucle si estaba parado.
    pub fn pointer_move(&mut self, pointer: Position, bounds: ElementRect) {
        if !self.is_active() {
            return;
        }

        self.motion.set_target(pointer.relative_to(bounds));

        if !self.motion.is_animating() {
            self.schedule_frame();
        }
    }

    /// Un paso del bucle de animación.
    ///
    /// Acerca la posición renderizada al objetivo, la escribe en el elemento
    /// y pide otro frame hasta que la distancia baja de medio píxel.
    pub fn frame(&mut self) {
        if !self.is_active() {
            return;
        }

        let step = self.motion.step(self.smoothing);
        apply_position(&mut self.sink, step.position());

        match step {
            Step::Moved(pos) => {
                log::trace!("Spotlight en ({}, {})", pos.x, pos.y);
                self.schedule_frame();
            }
            Step::Settled(pos) => {
                log::trace!("Spotlight asentado en ({}, {})", pos.x, pos.y);
            }
        }
    }

    /// Cambia color, radio, intensidad o fondo sin tocar nada más
    pub fn set_options(&mut self, overrides: &StyleOverrides) {
        if !self.is_active() {
            return;
        }
        apply_overrides(&mut self.sink, overrides);
    }

    /// Deshace todo lo aplicado al elemento. Llamarlo más veces no hace nada.
    pub fn destroy(&mut self) {
        if !self.is_active() {
            return;
        }

        // Un frame ya pedido volvería a escribir la posición tras la limpieza
        if let Some(id) = self.motion.mark_idle() {
            self.scheduler.cancel_frame(id);
        }

        remove_style(&mut self.sink);
        self.lifecycle = Lifecycle::Destroyed;
        log::debug!("Spotlight destruido");
    }

    fn schedule_frame(&mut self) {
        match self.scheduler.request_frame() {
            Ok(id) => self.motion.mark_scheduled(id),
            Err(e) => {
                // Queda en Idle: el próximo movimiento lo reintenta
                self.motion.mark_idle();
                log::warn!("{}", e);
            }
        }
    }
}

impl<S: StyleSink, F: FrameScheduler> Drop for Spotlight<S, F> {
    fn drop(&mut self) {
        self.destroy();
    }
}
