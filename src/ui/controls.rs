use crate::ui::elements::Position;
use serde::{Deserialize, Serialize};

/// One named entry in the layer control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlEntry {
    /// Label shown to the user
    pub name: String,
    /// Id of the layer it toggles
    pub layer_id: String,
}

impl ControlEntry {
    pub fn new(name: impl Into<String>, layer_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layer_id: layer_id.into(),
        }
    }
}

/// Registration handed to the map's layer switcher.
///
/// Base layers are mutually exclusive, overlays toggle independently. The
/// switcher itself enforces this; the control only lists the entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerControl {
    base_layers: Vec<ControlEntry>,
    overlays: Vec<ControlEntry>,
}

impl LayerControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_layer(mut self, name: impl Into<String>, layer_id: impl Into<String>) -> Self {
        self.base_layers.push(ControlEntry::new(name, layer_id));
        self
    }

    pub fn with_overlay(mut self, name: impl Into<String>, layer_id: impl Into<String>) -> Self {
        self.overlays.push(ControlEntry::new(name, layer_id));
        self
    }

    pub fn base_layers(&self) -> &[ControlEntry] {
        &self.base_layers
    }

    pub fn overlays(&self) -> &[ControlEntry] {
        &self.overlays
    }

    /// Whether a layer id is reachable from the control
    pub fn contains(&self, layer_id: &str) -> bool {
        self.base_layers
            .iter()
            .chain(&self.overlays)
            .any(|entry| entry.layer_id == layer_id)
    }
}

/// Free-form control pinned to a corner of the map, such as the legend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedControl {
    pub id: String,
    pub position: Position,
    /// HTML body of the control
    pub html: String,
}

impl PositionedControl {
    pub fn new(id: impl Into<String>, position: Position, html: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position,
            html: html.into(),
        }
    }
}
