use crate::{core::geo::LatLng, style::MarkerStyle, ui::popup::Popup};
use serde::{Deserialize, Serialize};

/// A circle drawn at an event's epicenter, sized and colored by magnitude
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleMarker {
    pub id: Option<String>,
    position: LatLng,
    style: MarkerStyle,
    popup: Option<Popup>,
}

impl CircleMarker {
    pub fn new(position: LatLng, style: MarkerStyle) -> Self {
        Self {
            id: None,
            position,
            style,
            popup: None,
        }
    }

    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }

    /// Binds a popup shown when the marker is clicked
    pub fn with_popup(mut self, popup: Popup) -> Self {
        self.popup = Some(popup);
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    pub fn radius(&self) -> f64 {
        self.style.radius
    }

    pub fn fill_color(&self) -> &str {
        &self.style.fill_color
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_accessors() {
        let marker = CircleMarker::new(LatLng::new(1.0, 2.0), MarkerStyle::for_magnitude(Some(4.2)))
            .with_id(Some("ak0001".to_string()))
            .with_popup(Popup::new("hello".to_string()));

        assert_eq!(marker.position(), LatLng::new(1.0, 2.0));
        assert_eq!(marker.fill_color(), "#9932CC");
        assert_eq!(marker.radius(), 4.2 * 4.0);
        assert_eq!(marker.popup().map(|p| p.content()), Some("hello"));
        assert_eq!(marker.id.as_deref(), Some("ak0001"));
    }
}
