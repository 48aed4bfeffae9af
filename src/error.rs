//! Errores internos del efecto
//!
//! Ninguno llega al llamante: el controlador los registra en el log y sigue.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpotlightError {
    #[error("No se pudo escribir la propiedad '{property}': {reason}")]
    Style { property: String, reason: String },
    #[error("No se pudo modificar el atributo '{attribute}': {reason}")]
    Attribute { attribute: String, reason: String },
    #[error("No se pudo programar el siguiente frame: {0}")]
    Frame(String),
    #[error("Opciones inválidas: {0}")]
    Options(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpotlightError>;
