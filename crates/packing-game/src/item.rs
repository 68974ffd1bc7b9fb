//! Packable Items

use serde::{Deserialize, Serialize};

/// Static description of an item, as read from configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub id: u32,
    pub label: String,
    #[serde(default)]
    pub emoji: String,
    /// Whether the item belongs in the suitcase
    pub should_pack: bool,
}

/// An item inside a running session
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u32,
    pub label: String,
    pub emoji: String,
    should_pack: bool,
    packed: bool,
}

impl Item {
    pub fn new(spec: &ItemSpec) -> Self {
        Self {
            id: spec.id,
            label: spec.label.clone(),
            emoji: spec.emoji.clone(),
            should_pack: spec.should_pack,
            packed: false,
        }
    }

    pub fn should_pack(&self) -> bool {
        self.should_pack
    }

    pub fn is_packed(&self) -> bool {
        self.packed
    }

    /// Packed but not on the packing list
    pub fn is_wrongly_packed(&self) -> bool {
        self.packed && !self.should_pack
    }

    pub(crate) fn set_packed(&mut self, packed: bool) {
        self.packed = packed;
    }
}
