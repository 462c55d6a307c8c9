// Menu description for the host's UI toolkit.
// Nothing here draws; a host walks the `Menu` and renders the controls however it likes.

/// A numeric slider bound to one setting.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub id: &'static str,
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Slider {
    pub const fn new(id: &'static str, label: &'static str, min: f32, max: f32, step: f32) -> Self {
        Self { id, label, min, max, step }
    }

    /// Clamp into [min, max] and land on the nearest step counted from `min`.
    pub fn snap(&self, value: f32) -> f32 {
        let v = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return v;
        }
        let steps = ((v - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Slider(Slider),
    Info(&'static str),
    Group { label: &'static str, collapsed: bool, items: Vec<Element> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub label: &'static str,
    pub items: Vec<Element>,
}

impl Menu {
    /// Find a slider anywhere in the menu, groups included.
    pub fn slider(&self, id: &str) -> Option<&Slider> {
        fn find<'m>(items: &'m [Element], id: &str) -> Option<&'m Slider> {
            items.iter().find_map(|e| match e {
                Element::Slider(s) if s.id == id => Some(s),
                Element::Group { items, .. } => find(items, id),
                _ => None,
            })
        }
        find(&self.items, id)
    }
}
