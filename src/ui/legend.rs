//! Magnitude legend
//!
//! Swatches are sampled from [`color_for`] one unit above each bin's lower
//! bound, so the key always matches the marker coloring.

use crate::{
    core::constants::{LEGEND_BINS, LEGEND_CONTROL_ID, LEGEND_TITLE},
    style::color_for,
    ui::{controls::PositionedControl, elements::Position},
};
use serde::{Deserialize, Serialize};

/// One row of the legend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub lower_bound: f64,
    /// `None` for the open-ended last bin
    pub upper_bound: Option<f64>,
    pub color: String,
}

impl LegendEntry {
    /// `"lo–hi"`, or `"lo+"` for the last bin
    pub fn label(&self) -> String {
        match self.upper_bound {
            Some(upper) => format!("{}\u{2013}{}", self.lower_bound, upper),
            None => format!("{}+", self.lower_bound),
        }
    }
}

/// Static visual key, built once and never mutated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    title: String,
    position: Position,
    entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn build() -> Self {
        Self::from_bins(&LEGEND_BINS)
    }

    fn from_bins(bins: &[f64]) -> Self {
        let entries = bins
            .iter()
            .enumerate()
            .map(|(i, &lower)| LegendEntry {
                lower_bound: lower,
                upper_bound: bins.get(i + 1).copied(),
                color: color_for(Some(lower + 1.0)).to_string(),
            })
            .collect();

        Self {
            title: LEGEND_TITLE.to_string(),
            position: Position::BottomRight,
            entries,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    pub fn to_html(&self) -> String {
        let rows: Vec<String> = self
            .entries
            .iter()
            .map(|entry| format!("<i style=\"background: {}\"></i> {}", entry.color, entry.label()))
            .collect();
        format!(
            "<div class=\"info legend\"><h3>{}</h3>{}</div>",
            self.title,
            rows.join("<br>")
        )
    }

    /// The legend as a control pinned to its corner of the map
    pub fn to_control(&self) -> PositionedControl {
        PositionedControl::new(LEGEND_CONTROL_ID, self.position, self.to_html())
    }
}
