//! Fakes para los tests del spotlight

use std::cell::{Ref, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::{Result, SpotlightError};
use crate::hooks::{FrameId, FrameScheduler, StyleSink};

/// Sink que guarda en memoria lo que se escribe
#[derive(Debug, Default)]
pub struct RecordingSink {
    properties: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    /// Todas las escrituras de propiedades, en orden
    pub writes: Vec<(String, String)>,
    fail_on: Option<String>,
}

impl RecordingSink {
    /// Sink que rechaza cualquier escritura de `property`
    pub fn failing_on(property: &str) -> Self {
        Self {
            fail_on: Some(property.to_string()),
            ..Self::default()
        }
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.attributes.is_empty()
    }

    /// Número de escrituras hechas a `name`
    pub fn writes_to(&self, name: &str) -> usize {
        self.writes.iter().filter(|(n, _)| n == name).count()
    }
}

impl StyleSink for RecordingSink {
    fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        if self.fail_on.as_deref() == Some(name) {
            return Err(SpotlightError::Style {
                property: name.to_string(),
                reason: "rechazada por el test".to_string(),
            });
        }
        self.writes.push((name.to_string(), value.to_string()));
        self.properties.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_property(&mut self, name: &str) -> Result<()> {
        self.properties.remove(name);
        Ok(())
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        self.attributes.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_attribute(&mut self, name: &str) -> Result<()> {
        self.attributes.remove(name);
        Ok(())
    }
}

/// Sink compartido: el test lo sigue viendo después de soltar el spotlight
#[derive(Debug, Default, Clone)]
pub struct SharedSink(Rc<RefCell<RecordingSink>>);

impl SharedSink {
    pub fn borrow(&self) -> Ref<'_, RecordingSink> {
        self.0.borrow()
    }
}

impl StyleSink for SharedSink {
    fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        self.0.borrow_mut().set_property(name, value)
    }

    fn remove_property(&mut self, name: &str) -> Result<()> {
        self.0.borrow_mut().remove_property(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        self.0.borrow_mut().set_attribute(name, value)
    }

    fn remove_attribute(&mut self, name: &str) -> Result<()> {
        self.0.borrow_mut().remove_attribute(name)
    }
}

/// Programador manual: el test decide cuándo "llega" el frame
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    pub pending: Vec<FrameId>,
    pub cancelled: Vec<FrameId>,
    pub requested: usize,
    pub fail: bool,
}

impl ManualScheduler {
    /// Programador que rechaza todas las peticiones hasta que se ponga `fail = false`
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Saca el frame pendiente más antiguo, como haría el navegador al pintar
    pub fn fire(&mut self) -> Option<FrameId> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Result<FrameId> {
        if self.fail {
            return Err(SpotlightError::Frame("sin display".to_string()));
        }
        self.next_id += 1;
        self.requested += 1;
        let id = FrameId(self.next_id);
        self.pending.push(id);
        Ok(id)
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.pending.retain(|p| *p != id);
        self.cancelled.push(id);
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
