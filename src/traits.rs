//! Seams to the collaborators this crate does not implement itself
//!
//! The interactive map widget and the network both live outside the
//! styling and composition core and are reached only through these traits.

use crate::{
    layers::base::LayerTrait,
    ui::controls::{LayerControl, PositionedControl},
    Result,
};
use async_trait::async_trait;

/// The map widget: layer stacking, the layer switcher and corner controls
pub trait MapSurface {
    /// Puts a layer on the live map.
    ///
    /// Adding a layer that is already present is a no-op; returns whether
    /// the layer was newly added.
    fn add_layer(&mut self, layer: &dyn LayerTrait) -> bool;

    fn has_layer(&self, layer_id: &str) -> bool;

    /// Installs the base-layer / overlay switcher
    fn register_layer_control(&mut self, control: LayerControl);

    /// Pins a control to a corner. Returns false if a control with the same
    /// id is already there.
    fn add_control(&mut self, control: PositionedControl) -> bool;

    /// Shows a message the user can see, e.g. when the map cannot be built
    fn show_error(&mut self, message: String);
}

/// Fetches a feed body
#[async_trait]
pub trait Transport: Send + Sync {
    /// Retrieve the document at `url`. Network and HTTP status failures map
    /// to `MapError::Transport`.
    async fn fetch(&self, url: &str) -> Result<String>;
}
