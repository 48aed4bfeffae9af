//! Integración con el navegador (solo `wasm32`)
//!
//! Conecta el [`Spotlight`] al DOM: estilos inline del elemento,
//! `requestAnimationFrame`, `matchMedia` y el evento `mousemove`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, Window};

use crate::args::{resolve_args, ArgKind, OptionsSource, TargetSource};
use crate::config::{SpotlightOptions, StyleOverrides};
use crate::constants::{MOUSEMOVE_EVENT, NO_HOVER_QUERY};
use crate::error::{Result, SpotlightError};
use crate::hooks::{Environment, FrameId, FrameScheduler, StyleSink};
use crate::spotlight::Spotlight;
use crate::types::{ElementRect, Position};

type WebSpotlight = Spotlight<ElementStyle, AnimationFrameScheduler>;

/// Entorno real del navegador
pub struct BrowserEnvironment {
    window: Option<Window>,
}

impl BrowserEnvironment {
    pub fn new() -> Self {
        Self {
            window: web_sys::window(),
        }
    }
}

impl Default for BrowserEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for BrowserEnvironment {
    fn has_renderable_surface(&self) -> bool {
        self.window
            .as_ref()
            .and_then(|window| window.document())
            .is_some()
    }

    fn has_hover_pointer(&self) -> bool {
        let Some(window) = self.window.as_ref() else {
            return false;
        };
        match window.match_media(NO_HOVER_QUERY) {
            Ok(Some(query)) => !query.matches(),
            // Navegador sin matchMedia: se asume ratón
            _ => true,
        }
    }
}

/// Estilos inline y atributos de un `HtmlElement`
pub struct ElementStyle {
    element: HtmlElement,
}

impl ElementStyle {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

fn reason(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

impl StyleSink for ElementStyle {
    fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        self.element
            .style()
            .set_property(name, value)
            .map_err(|e| SpotlightError::Style {
                property: name.to_string(),
                reason: reason(e),
            })
    }

    fn remove_property(&mut self, name: &str) -> Result<()> {
        self.element
            .style()
            .remove_property(name)
            .map(|_| ())
            .map_err(|e| SpotlightError::Style {
                property: name.to_string(),
                reason: reason(e),
            })
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        self.element
            .set_attribute(name, value)
            .map_err(|e| SpotlightError::Attribute {
                attribute: name.to_string(),
                reason: reason(e),
            })
    }

    fn remove_attribute(&mut self, name: &str) -> Result<()> {
        self.element
            .remove_attribute(name)
            .map_err(|e| SpotlightError::Attribute {
                attribute: name.to_string(),
                reason: reason(e),
            })
    }
}

/// `requestAnimationFrame` que avisa al spotlight dueño del programador
pub struct AnimationFrameScheduler {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
}

impl AnimationFrameScheduler {
    fn new(window: Window, spotlight: Weak<RefCell<WebSpotlight>>) -> Self {
        let callback = Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
            if let Some(spotlight) = spotlight.upgrade() {
                if let Ok(mut spotlight) = spotlight.try_borrow_mut() {
                    spotlight.frame();
                }
            }
        });
        Self { window, callback }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) -> Result<FrameId> {
        self.window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .map(FrameId)
            .map_err(|e| SpotlightError::Frame(reason(e)))
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if let Err(e) = self.window.cancel_animation_frame(id.0) {
            log::warn!("No se pudo cancelar el frame {}: {}", id.0, reason(e));
        }
    }
}

/// Lo que mantiene vivo un efecto activo
struct Attached {
    element: HtmlElement,
    spotlight: Rc<RefCell<WebSpotlight>>,
    on_move: Closure<dyn FnMut(MouseEvent)>,
}

// También cuando JS libera el handle sin llamar a `destroy()`
impl Drop for Attached {
    fn drop(&mut self) {
        if let Err(e) = self.element.remove_event_listener_with_callback(
            MOUSEMOVE_EVENT,
            self.on_move.as_ref().unchecked_ref(),
        ) {
            log::warn!("No se pudo quitar el listener: {}", reason(e));
        }
        if let Ok(mut spotlight) = self.spotlight.try_borrow_mut() {
            spotlight.destroy();
        }
    }
}

/// Controlador devuelto a JavaScript
#[wasm_bindgen]
pub struct SpotlightHandle {
    attached: Option<Attached>,
}

impl SpotlightHandle {
    fn inert() -> Self {
        Self { attached: None }
    }
}

#[wasm_bindgen]
impl SpotlightHandle {
    /// Quita el efecto y deja el elemento como estaba
    pub fn destroy(&mut self) {
        drop(self.attached.take());
    }

    /// Cambia color, radio, intensidad o fondo en caliente
    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&mut self, options: JsValue) {
        let Some(attached) = self.attached.as_ref() else {
            return;
        };
        let overrides = match options_json(&options) {
            Some(json) => StyleOverrides::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignorando opciones del spotlight: {}", e);
                StyleOverrides::default()
            }),
            None => StyleOverrides::default(),
        };
        if let Ok(mut spotlight) = attached.spotlight.try_borrow_mut() {
            spotlight.set_options(&overrides);
        }
    }
}

fn arg_kind(value: &JsValue) -> ArgKind {
    if !value.is_truthy() {
        ArgKind::Falsy
    } else if value.is_instance_of::<HtmlElement>() {
        ArgKind::Element
    } else {
        ArgKind::Other
    }
}

/// Serializa un objeto JS de opciones; `undefined`/`null` no cuentan
fn options_json(value: &JsValue) -> Option<String> {
    if value.is_undefined() || value.is_null() {
        return None;
    }
    js_sys::JSON::stringify(value).ok().map(String::from)
}

/// Aplica el spotlight a `target` (o a `document.body`).
///
/// Acepta `showcase(options)`: si el primer argumento no es un elemento se
/// toma como opciones. En SSR o dispositivos táctiles devuelve un
/// controlador cuyos métodos no hacen nada.
#[wasm_bindgen]
pub fn showcase(target: JsValue, options: JsValue) -> SpotlightHandle {
    let env = BrowserEnvironment::new();
    // SSR: sin ventana ni documento no hay nada que tocar
    let Some(window) = env.window.clone() else {
        return SpotlightHandle::inert();
    };
    let Some(document) = window.document() else {
        return SpotlightHandle::inert();
    };

    let shape = resolve_args(arg_kind(&target), arg_kind(&options));

    let element = match shape.target {
        TargetSource::FirstArgument => target.clone().dyn_into::<HtmlElement>().ok(),
        TargetSource::DocumentBody => document.body(),
    };
    let Some(element) = element else {
        return SpotlightHandle::inert();
    };

    let options = match shape.options {
        OptionsSource::FirstArgument => options_json(&target),
        OptionsSource::SecondArgument => options_json(&options),
        OptionsSource::Defaults => None,
    }
    .map(|json| SpotlightOptions::from_json_or_default(&json))
    .unwrap_or_default();

    let spotlight = Rc::new_cyclic(|weak: &Weak<RefCell<WebSpotlight>>| {
        let scheduler = AnimationFrameScheduler::new(window.clone(), weak.clone());
        RefCell::new(Spotlight::create(
            &env,
            ElementStyle::new(element.clone()),
            scheduler,
            &options,
        ))
    });

    if !spotlight.borrow().is_active() {
        return SpotlightHandle::inert();
    }

    let on_move = {
        let spotlight = Rc::downgrade(&spotlight);
        let element = element.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let Some(spotlight) = spotlight.upgrade() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let bounds = ElementRect::new(rect.left(), rect.top(), rect.width(), rect.height());
            let pointer = Position::new(f64::from(event.client_x()), f64::from(event.client_y()));
            if let Ok(mut spotlight) = spotlight.try_borrow_mut() {
                spotlight.pointer_move(pointer, bounds);
            }
        })
    };

    if let Err(e) = element
        .add_event_listener_with_callback(MOUSEMOVE_EVENT, on_move.as_ref().unchecked_ref())
    {
        log::warn!("No se pudo escuchar {}: {}", MOUSEMOVE_EVENT, reason(e));
        if let Ok(mut spotlight) = spotlight.try_borrow_mut() {
            spotlight.destroy();
        }
        return SpotlightHandle::inert();
    }

    SpotlightHandle {
        attached: Some(Attached {
            element,
            spotlight,
            on_move,
        }),
    }
}
