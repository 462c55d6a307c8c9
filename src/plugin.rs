// Capabilities a host looks for, and the ordered chain it runs every cycle.

use crate::types::Events;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Something that looks at (and may draw into) each processed frame.
pub trait FrameConsumer {
    fn name(&self) -> String;

    /// Position in the chain; lower runs first. Overlays that should land on top
    /// of other annotations pick a value close to 1.
    fn order(&self) -> f32 {
        0.5
    }

    fn process(&mut self, events: &mut Events<'_>, min_data_confidence: f32);
}

// Lets the host keep a handle (for menus, saving settings) to a plugin the chain also runs.
impl<T: FrameConsumer> FrameConsumer for Rc<RefCell<T>> {
    fn name(&self) -> String {
        self.borrow().name()
    }

    fn order(&self) -> f32 {
        self.borrow().order()
    }

    fn process(&mut self, events: &mut Events<'_>, min_data_confidence: f32) {
        self.borrow_mut().process(events, min_data_confidence);
    }
}

/// Something whose state can be saved and later handed back to its constructor.
pub trait Configurable {
    type Settings;

    fn get_settings(&self) -> Self::Settings;
}

/// The host's plugin list, kept sorted by `order()`.
#[derive(Default)]
pub struct PluginChain {
    plugins: Vec<Box<dyn FrameConsumer>>,
}

impl PluginChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert after every plugin with an order <= this one (ties keep insertion order).
    pub fn add(&mut self, plugin: Box<dyn FrameConsumer>) {
        let order = plugin.order();
        let at = self.plugins.partition_point(|p| p.order() <= order);
        debug!("adding plugin '{}' (order {order}) at slot {at}", plugin.name());
        self.plugins.insert(at, plugin);
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    pub fn process_all(&mut self, events: &mut Events<'_>, min_data_confidence: f32) {
        for plugin in &mut self.plugins {
            plugin.process(events, min_data_confidence);
        }
    }
}
