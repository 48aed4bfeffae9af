//! Opciones del efecto y valores por defecto

use serde::{Deserialize, Serialize};

use crate::constants::{PROP_BG, PROP_COLOR, PROP_INTENSITY, PROP_RADIUS, PROP_X, PROP_Y};
use crate::error::Result;

/// Valores por defecto de la configuración
pub struct ConfigDefaults;

impl ConfigDefaults {
    pub const POSITION_X: &'static str = "50%";
    pub const POSITION_Y: &'static str = "50%";
    pub const COLOR: &'static str = "rgba(255, 255, 255, 0.15)";
    pub const RADIUS: &'static str = "300px";
    pub const INTENSITY: &'static str = "1";
    pub const BACKGROUND_COLOR: &'static str = "#1a1a2e";

    // Fracción de la distancia recorrida en cada frame
    pub const SMOOTHING: f64 = 0.15;

    /// Custom properties en el orden en que se escriben al activar el efecto
    pub const PROPERTIES: [(&'static str, &'static str); 6] = [
        (PROP_X, Self::POSITION_X),
        (PROP_Y, Self::POSITION_Y),
        (PROP_COLOR, Self::COLOR),
        (PROP_RADIUS, Self::RADIUS),
        (PROP_INTENSITY, Self::INTENSITY),
        (PROP_BG, Self::BACKGROUND_COLOR),
    ];
}

/// Lectura tolerante campo a campo.
///
/// Un valor de tipo inesperado se descarta solo, sin arrastrar al resto de
/// opciones. Los números en texto (`"0.5"`) se aceptan como números y los
/// números se aceptan como cadenas CSS.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn css_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => None,
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            other => {
                log::warn!("Ignorando valor de estilo no válido: {}", other);
                None
            }
        })
    }

    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => None,
            Value::Number(n) => n.as_f64(),
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    log::warn!("Ignorando número no válido: {:?}", s);
                    None
                }
            },
            other => {
                log::warn!("Ignorando número no válido: {}", other);
                None
            }
        })
    }
}

/// Opciones que pueden cambiarse en caliente con `set_options`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleOverrides {
    #[serde(
        deserialize_with = "lenient::css_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<String>,
    #[serde(
        deserialize_with = "lenient::css_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub radius: Option<String>,
    #[serde(
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub intensity: Option<f64>,
    #[serde(
        alias = "bg",
        deserialize_with = "lenient::css_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
}

impl StyleOverrides {
    /// Parsea un objeto de opciones en JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_radius(mut self, radius: impl Into<String>) -> Self {
        self.radius = Some(radius.into());
        self
    }

    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}

/// Opciones de construcción.
///
/// Todas son opcionales. `smoothing` queda fijado al crear el efecto; el resto
/// se puede cambiar después mediante [`StyleOverrides`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpotlightOptions {
    #[serde(
        deserialize_with = "lenient::css_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<String>,
    #[serde(
        deserialize_with = "lenient::css_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub radius: Option<String>,
    #[serde(
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub intensity: Option<f64>,
    #[serde(
        alias = "bg",
        deserialize_with = "lenient::css_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
    #[serde(
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub smoothing: Option<f64>,
}

impl SpotlightOptions {
    /// Parsea un objeto de opciones en JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parsea opciones y, si el JSON no es un objeto, usa los valores por defecto
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(options) => options,
            Err(e) => {
                log::warn!("Ignorando opciones del spotlight: {}", e);
                Self::default()
            }
        }
    }

    /// Subconjunto de opciones aplicable como estilo
    pub fn overrides(&self) -> StyleOverrides {
        StyleOverrides {
            color: self.color.clone(),
            radius: self.radius.clone(),
            intensity: self.intensity,
            background_color: self.background_color.clone(),
        }
    }

    /// Factor de suavizado efectivo
    pub fn effective_smoothing(&self) -> f64 {
        let smoothing = self.smoothing.unwrap_or(ConfigDefaults::SMOOTHING);
        if !(smoothing > 0.0 && smoothing <= 1.0) {
            log::warn!(
                "Smoothing {} fuera de (0, 1]: la animación puede no converger",
                smoothing
            );
        }
        smoothing
    }

    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = Some(smoothing);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_radius(mut self, radius: impl Into<String>) -> Self {
        self.radius = Some(radius.into());
        self
    }

    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}
