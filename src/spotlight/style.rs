//! Escritura y limpieza de los estilos inline del spotlight

use crate::config::{ConfigDefaults, StyleOverrides};
use crate::constants::*;
use crate::hooks::StyleSink;
use crate::types::Position;

/// Formatea un número como lo haría CSS/JS (`1`, `0.5`, nunca `-0`)
pub fn css_number(value: f64) -> String {
    if value == 0.0 {
        // Cubre también -0.0
        return "0".to_string();
    }
    value.to_string()
}

/// Longitud en píxeles (`12.5px`)
pub fn css_px(value: f64) -> String {
    format!("{}px", css_number(value))
}

/// Escribe una propiedad; si el host falla, se registra y se sigue
fn write<S: StyleSink + ?Sized>(sink: &mut S, name: &str, value: &str) {
    if let Err(e) = sink.set_property(name, value) {
        log::warn!("{}", e);
    }
}

fn clear<S: StyleSink + ?Sized>(sink: &mut S, name: &str) {
    if let Err(e) = sink.remove_property(name) {
        log::warn!("{}", e);
    }
}

/// Marca el elemento y escribe defaults, overrides y fondo compuesto
pub fn apply_initial_style<S: StyleSink + ?Sized>(sink: &mut S, overrides: &StyleOverrides) {
    if let Err(e) = sink.set_attribute(MARKER_ATTRIBUTE, "") {
        log::warn!("{}", e);
    }

    // Primero defaults, luego las opciones del usuario
    for (name, value) in ConfigDefaults::PROPERTIES {
        write(sink, name, value);
    }
    apply_overrides(sink, overrides);

    write(sink, PROP_BACKGROUND, GRADIENT_BG);
    write(sink, PROP_OPACITY, OPACITY_VALUE);
}

/// Aplica las opciones presentes sobre el estilo vivo.
///
/// Las cadenas vacías se ignoran; la intensidad se aplica siempre que venga,
/// también con `0`.
pub fn apply_overrides<S: StyleSink + ?Sized>(sink: &mut S, overrides: &StyleOverrides) {
    fn non_empty(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.is_empty())
    }

    if let Some(color) = non_empty(&overrides.color) {
        write(sink, PROP_COLOR, color);
    }
    if let Some(radius) = non_empty(&overrides.radius) {
        write(sink, PROP_RADIUS, radius);
    }
    if let Some(intensity) = overrides.intensity {
        write(sink, PROP_INTENSITY, &css_number(intensity));
    }
    if let Some(bg) = non_empty(&overrides.background_color) {
        write(sink, PROP_BG, bg);
    }
}

/// Escribe el centro del spotlight en píxeles
pub fn apply_position<S: StyleSink + ?Sized>(sink: &mut S, pos: Position) {
    write(sink, PROP_X, &css_px(pos.x));
    write(sink, PROP_Y, &css_px(pos.y));
}

/// Quita el atributo marcador y todo lo que se escribió
pub fn remove_style<S: StyleSink + ?Sized>(sink: &mut S) {
    if let Err(e) = sink.remove_attribute(MARKER_ATTRIBUTE) {
        log::warn!("{}", e);
    }
    for (name, _) in ConfigDefaults::PROPERTIES {
        clear(sink, name);
    }
    clear(sink, PROP_BACKGROUND);
    clear(sink, PROP_OPACITY);
}
