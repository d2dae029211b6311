//! Magnitude-driven styling rules.
//!
//! Markers grow linearly with magnitude and darken through a fixed six-step
//! palette. The legend is generated from [`color_for`], so the thresholds
//! below are the only place the buckets are defined.

use crate::core::constants::{
    BLUE_VIOLET, BOUNDARY_WEIGHT, DARK_ORCHID, INDIGO, MAGENTA, MARKER_FILL_OPACITY,
    MARKER_STROKE_COLOR, MARKER_STROKE_OPACITY, MARKER_STROKE_WEIGHT, MIN_MARKER_RADIUS, OLIVE,
    RADIUS_PER_MAGNITUDE, THISTLE, VIOLET,
};
use serde::{Deserialize, Serialize};

/// Buckets evaluated top-down; a magnitude must be strictly greater than the
/// threshold to land in a bucket.
const PALETTE: [(f64, &str); 5] = [
    (5.0, INDIGO),
    (4.0, DARK_ORCHID),
    (3.0, BLUE_VIOLET),
    (2.0, MAGENTA),
    (1.0, VIOLET),
];

/// Color for events at or below the lowest threshold, and for unknown magnitudes.
const BASE_COLOR: &str = THISTLE;

fn usable(magnitude: Option<f64>) -> Option<f64> {
    magnitude.filter(|m| m.is_finite())
}

/// Marker radius for a magnitude.
///
/// Zero and missing (or non-finite) magnitudes get a radius of 1 so the
/// event stays visible. There is no upper clamp.
pub fn radius_for(magnitude: Option<f64>) -> f64 {
    match usable(magnitude) {
        Some(m) if m != 0.0 => m * RADIUS_PER_MAGNITUDE,
        _ => MIN_MARKER_RADIUS,
    }
}

/// Fill color for a magnitude, as a `#RRGGBB` hex string.
///
/// A magnitude of exactly 5 falls into the `> 4` bucket.
pub fn color_for(magnitude: Option<f64>) -> &'static str {
    let Some(m) = usable(magnitude) else {
        return BASE_COLOR;
    };
    PALETTE
        .iter()
        .find(|(threshold, _)| m > *threshold)
        .map(|(_, color)| *color)
        .unwrap_or(BASE_COLOR)
}

/// Style for circle markers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_color: String,
    pub stroke: bool,
    pub stroke_color: String,
    pub stroke_weight: f64,
    pub fill_opacity: f64,
    pub stroke_opacity: f64,
}

impl MarkerStyle {
    /// Derives the full marker style from a magnitude. Only the radius and
    /// fill color depend on it.
    pub fn for_magnitude(magnitude: Option<f64>) -> Self {
        Self {
            radius: radius_for(magnitude),
            fill_color: color_for(magnitude).to_string(),
            stroke: true,
            stroke_color: MARKER_STROKE_COLOR.to_string(),
            stroke_weight: MARKER_STROKE_WEIGHT,
            fill_opacity: MARKER_FILL_OPACITY,
            stroke_opacity: MARKER_STROKE_OPACITY,
        }
    }
}

/// Style for line and polygon outlines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
    pub weight: f64,
}

impl LineStyle {
    /// The single style used for every plate boundary.
    pub fn boundary() -> Self {
        Self {
            color: OLIVE.to_string(),
            weight: BOUNDARY_WEIGHT,
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::boundary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_rule() {
        assert_eq!(radius_for(Some(0.0)), 1.0);
        assert_eq!(radius_for(None), 1.0);
        assert_eq!(radius_for(Some(f64::NAN)), 1.0);
        assert_eq!(radius_for(Some(2.5)), 10.0);
        assert_eq!(radius_for(Some(6.2)), 24.8);
        assert_eq!(radius_for(Some(12.0)), 48.0);
    }

    #[test]
    fn test_radius_keeps_negative_magnitudes_linear() {
        assert_eq!(radius_for(Some(-0.5)), -2.0);
    }

    #[test]
    fn test_color_buckets() {
        assert_eq!(color_for(Some(7.1)), "#4B0082");
        assert_eq!(color_for(Some(4.5)), "#9932CC");
        assert_eq!(color_for(Some(3.5)), "#8A2BE2");
        assert_eq!(color_for(Some(2.5)), "#FF00FF");
        assert_eq!(color_for(Some(1.5)), "#EE82EE");
        assert_eq!(color_for(Some(0.5)), "#D8BFD8");
        assert_eq!(color_for(Some(-1.0)), "#D8BFD8");
        assert_eq!(color_for(None), "#D8BFD8");
        assert_eq!(color_for(Some(f64::INFINITY)), "#D8BFD8");
    }

    #[test]
    fn test_color_bucket_boundaries_are_exclusive() {
        assert_eq!(color_for(Some(5.0)), "#9932CC");
        assert_eq!(color_for(Some(5.01)), "#4B0082");
        assert_eq!(color_for(Some(1.0)), "#D8BFD8");
        assert_eq!(color_for(Some(2.0)), "#EE82EE");
    }

    #[test]
    fn test_radius_non_decreasing_across_buckets() {
        let magnitudes = [0.5, 1.5, 2.5, 3.5, 4.5, 5.5];
        for pair in magnitudes.windows(2) {
            assert!(radius_for(Some(pair[0])) <= radius_for(Some(pair[1])));
        }
    }

    #[test]
    fn test_marker_style_fixed_fields() {
        let style = MarkerStyle::for_magnitude(Some(3.2));
        assert_eq!(style.fill_color, "#8A2BE2");
        assert_eq!(style.stroke_color, "#000000");
        assert!(style.stroke);
        assert_eq!(style.stroke_weight, 0.5);
        assert_eq!(style.fill_opacity, 0.6);
        assert_eq!(style.stroke_opacity, 0.5);
    }

    #[test]
    fn test_boundary_line_style() {
        let style = LineStyle::boundary();
        assert_eq!(style.color, "#808000");
        assert_eq!(style.weight, 2.0);
    }
}
