//! Nombres de propiedades CSS, atributo marcador y composiciones de estilo

/// Atributo booleano que marca el elemento con el efecto activo
pub const MARKER_ATTRIBUTE: &str = "data-spotlight";

/// Centro horizontal del spotlight
pub const PROP_X: &str = "--spotlight-x";

/// Centro vertical del spotlight
pub const PROP_Y: &str = "--spotlight-y";

/// Color del spotlight
pub const PROP_COLOR: &str = "--spotlight-color";

/// Radio del spotlight
pub const PROP_RADIUS: &str = "--spotlight-radius";

/// Multiplicador de intensidad (se usa como opacidad)
pub const PROP_INTENSITY: &str = "--spotlight-intensity";

/// Color de fondo base
pub const PROP_BG: &str = "--spotlight-bg";

/// Propiedad `background` del elemento
pub const PROP_BACKGROUND: &str = "background";

/// Propiedad `opacity` del elemento
pub const PROP_OPACITY: &str = "opacity";

/// Fondo compuesto: gradiente radial sobre el color base.
/// Todo referencia a las custom properties, así que cambiarlas basta.
pub const GRADIENT_BG: &str = "radial-gradient(circle var(--spotlight-radius) at var(--spotlight-x) var(--spotlight-y), var(--spotlight-color), transparent), var(--spotlight-bg)";

/// Opacidad ligada a la intensidad
pub const OPACITY_VALUE: &str = "var(--spotlight-intensity)";

/// Media query que indica un dispositivo sin puntero con hover (solo táctil)
pub const NO_HOVER_QUERY: &str = "(hover: none)";

/// Evento de ratón al que se suscribe el efecto
pub const MOUSEMOVE_EVENT: &str = "mousemove";

/// Umbral (px) por debajo del cual la animación se da por terminada
pub const SNAP_THRESHOLD_PX: f64 = 0.5;
