//! Resolución de los argumentos de `showcase(target?, options?)`

/// Qué llegó en cada posición de la llamada
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// `undefined`, `null` u otro valor falsy
    Falsy,
    /// Un `HTMLElement`
    Element,
    /// Cualquier otro valor (normalmente un objeto de opciones)
    Other,
}

/// De dónde sale el elemento
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSource {
    FirstArgument,
    DocumentBody,
}

/// De dónde salen las opciones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsSource {
    FirstArgument,
    SecondArgument,
    /// Sin opciones: todo por defecto
    Defaults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallShape {
    pub target: TargetSource,
    pub options: OptionsSource,
}

/// Decide qué argumento es el elemento y cuál las opciones.
///
/// Si el primero no es un elemento pero tiene valor, se toma como opciones
/// (`showcase({ color })`) y el segundo se ignora. Sin elemento se usa
/// `document.body`.
pub fn resolve_args(target: ArgKind, options: ArgKind) -> CallShape {
    match target {
        ArgKind::Other => CallShape {
            target: TargetSource::DocumentBody,
            options: OptionsSource::FirstArgument,
        },
        ArgKind::Element | ArgKind::Falsy => CallShape {
            target: if target == ArgKind::Element {
                TargetSource::FirstArgument
            } else {
                TargetSource::DocumentBody
            },
            options: match options {
                ArgKind::Falsy => OptionsSource::Defaults,
                ArgKind::Element | ArgKind::Other => OptionsSource::SecondArgument,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_args() {
        let cases = vec![
            // showcase()
            (
                ArgKind::Falsy,
                ArgKind::Falsy,
                TargetSource::DocumentBody,
                OptionsSource::Defaults,
            ),
            // showcase(el)
            (
                ArgKind::Element,
                ArgKind::Falsy,
                TargetSource::FirstArgument,
                OptionsSource::Defaults,
            ),
            // showcase(el, { color })
            (
                ArgKind::Element,
                ArgKind::Other,
                TargetSource::FirstArgument,
                OptionsSource::SecondArgument,
            ),
            // showcase({ color })
            (
                ArgKind::Other,
                ArgKind::Falsy,
                TargetSource::DocumentBody,
                OptionsSource::FirstArgument,
            ),
            // showcase({ color }, { radius }): el segundo se ignora
            (
                ArgKind::Other,
                ArgKind::Other,
                TargetSource::DocumentBody,
                OptionsSource::FirstArgument,
            ),
            // showcase(null, { color })
            (
                ArgKind::Falsy,
                ArgKind::Other,
                TargetSource::DocumentBody,
                OptionsSource::SecondArgument,
            ),
        ];

        for (target, options, expected_target, expected_options) in cases {
            let shape = resolve_args(target, options);
            assert_eq!(shape.target, expected_target, "{target:?}, {options:?}");
            assert_eq!(shape.options, expected_options, "{target:?}, {options:?}");
        }
    }
}
