use crate::{
    core::constants::{BOUNDARIES_OVERLAY_ID, EVENTS_OVERLAY_ID},
    data::geojson::GeoJsonFeature,
    MapError, Result,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two feeds the map is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetKind {
    /// Earthquake points
    Events,
    /// Plate boundary lines
    Boundaries,
}

impl DatasetKind {
    /// Id of the overlay this dataset populates
    pub fn overlay_id(&self) -> &'static str {
        match self {
            DatasetKind::Events => EVENTS_OVERLAY_ID,
            DatasetKind::Boundaries => BOUNDARIES_OVERLAY_ID,
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetKind::Events => write!(f, "events"),
            DatasetKind::Boundaries => write!(f, "boundaries"),
        }
    }
}

/// `Unloaded -> Loading -> {Loaded, Failed}`; one attempt, no retries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LoadState {
    Unloaded,
    Loading,
    Loaded,
    Failed(String),
}

/// Features fetched from one source, together with where they came from and
/// how far loading got
#[derive(Debug, Clone)]
pub struct Dataset {
    kind: DatasetKind,
    source: String,
    state: LoadState,
    features: Vec<GeoJsonFeature>,
}

impl Dataset {
    pub fn new(kind: DatasetKind, source: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
            state: LoadState::Unloaded,
            features: Vec::new(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    /// Features in feed order; empty until loaded
    pub fn features(&self) -> &[GeoJsonFeature] {
        &self.features
    }

    pub fn begin_loading(&mut self) -> Result<()> {
        if self.state != LoadState::Unloaded {
            return Err(MapError::InvalidState(format!(
                "{} dataset cannot start loading from {:?}",
                self.kind, self.state
            )));
        }
        self.state = LoadState::Loading;
        Ok(())
    }

    /// Stores the fetched features. They are never modified afterwards.
    pub fn finish_loading(&mut self, features: Vec<GeoJsonFeature>) -> Result<()> {
        self.expect_loading("finish")?;
        self.features = features;
        self.state = LoadState::Loaded;
        Ok(())
    }

    pub fn fail(&mut self, error: &MapError) -> Result<()> {
        self.expect_loading("fail")?;
        self.state = LoadState::Failed(error.to_string());
        Ok(())
    }

    fn expect_loading(&self, action: &str) -> Result<()> {
        if self.state == LoadState::Loading {
            Ok(())
        } else {
            Err(MapError::InvalidState(format!(
                "{} dataset cannot {} while {:?}",
                self.kind, action, self.state
            )))
        }
    }
}
