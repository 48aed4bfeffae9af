//! Estado de movimiento del spotlight

use crate::constants::SNAP_THRESHOLD_PX;
use crate::hooks::FrameId;
use crate::types::Position;

/// Estado del bucle de animación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameState {
    /// Sin frame pendiente
    #[default]
    Idle,
    /// Hay exactamente un frame pedido
    Scheduled(FrameId),
}

/// Resultado de avanzar un frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// La posición se movió; hace falta otro frame
    Moved(Position),
    /// Llegó al objetivo; el bucle termina
    Settled(Position),
}

impl Step {
    pub fn position(self) -> Position {
        match self {
            Step::Moved(pos) | Step::Settled(pos) => pos,
        }
    }
}

/// Posición renderizada, posición objetivo y estado del bucle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotionState {
    current: Position,
    target: Position,
    frame: FrameState,
}

impl MotionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Última posición escrita en el elemento
    #[inline]
    pub fn current(&self) -> Position {
        self.current
    }

    /// Última posición del puntero
    #[inline]
    pub fn target(&self) -> Position {
        self.target
    }

    #[inline]
    pub fn frame(&self) -> FrameState {
        self.frame
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.frame, FrameState::Scheduled(_))
    }

    /// Actualiza el objetivo; solo lo llaman los eventos de puntero
    pub fn set_target(&mut self, target: Position) {
        self.target = target;
    }

    pub fn mark_scheduled(&mut self, id: FrameId) {
        self.frame = FrameState::Scheduled(id);
    }

    /// Vuelve a Idle y devuelve el frame que estaba pendiente, si lo había
    pub fn mark_idle(&mut self) -> Option<FrameId> {
        match std::mem::take(&mut self.frame) {
            FrameState::Scheduled(id) => Some(id),
            FrameState::Idle => None,
        }
    }

    /// Avanza la posición actual hacia el objetivo.
    ///
    /// Si la distancia en ambos ejes es menor que medio píxel, salta al
    /// objetivo y el bucle queda en `Idle`. Si no, avanza `smoothing` veces
    /// la distancia restante. El estado del frame solo cambia al asentarse.
    pub fn step(&mut self, smoothing: f64) -> Step {
        let delta = self.target - self.current;

        if delta.x.abs() < SNAP_THRESHOLD_PX && delta.y.abs() < SNAP_THRESHOLD_PX {
            self.current = self.target;
            self.frame = FrameState::Idle;
            return Step::Settled(self.current);
        }

        self.current = self.current + delta * smoothing;
        Step::Moved(self.current)
    }
}
