//! Two-stage data loading
//!
//! The events feed is fetched, rendered and attached first. Only after that
//! has completed is the boundaries feed requested. A failed events stage
//! ends the pipeline and is shown to the user; a failed boundaries stage is
//! reported but leaves the events overlay untouched.

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::HttpTransport;

use crate::{
    core::config::VisualizationConfig,
    data::{
        dataset::{Dataset, DatasetKind},
        geojson::GeoJson,
    },
    layers::composer::LayerComposer,
    render::FeatureRenderer,
    traits::{MapSurface, Transport},
    MapError, Result,
};

/// What one stage put on the map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageReport {
    pub rendered: usize,
    pub skipped: usize,
}

/// Summary of a full load
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub events: StageReport,
    /// The boundaries stage never fails the load; its error is kept here
    pub boundaries: Result<StageReport>,
}

/// Fetches both datasets, in order, and hands the rendered features to the
/// layer composer
pub struct DataLoader {
    events: Dataset,
    boundaries: Dataset,
    renderer: FeatureRenderer,
}

impl DataLoader {
    pub fn new(events_url: impl Into<String>, boundaries_url: impl Into<String>) -> Self {
        Self {
            events: Dataset::new(DatasetKind::Events, events_url),
            boundaries: Dataset::new(DatasetKind::Boundaries, boundaries_url),
            renderer: FeatureRenderer::new(),
        }
    }

    pub fn from_config(config: &VisualizationConfig) -> Self {
        Self::new(config.events_url.clone(), config.boundaries_url.clone())
    }

    pub fn dataset(&self, kind: DatasetKind) -> &Dataset {
        match kind {
            DatasetKind::Events => &self.events,
            DatasetKind::Boundaries => &self.boundaries,
        }
    }

    fn dataset_mut(&mut self, kind: DatasetKind) -> &mut Dataset {
        match kind {
            DatasetKind::Events => &mut self.events,
            DatasetKind::Boundaries => &mut self.boundaries,
        }
    }

    /// Runs both stages.
    ///
    /// Returns an error only when the events stage fails.
    pub async fn run<T>(
        &mut self,
        transport: &T,
        composer: &mut LayerComposer,
        surface: &mut dyn MapSurface,
    ) -> Result<LoadReport>
    where
        T: Transport + ?Sized,
    {
        let events = self.load_events(transport, composer, surface).await?;
        let boundaries = self.load_boundaries(transport, composer, surface).await;
        Ok(LoadReport { events, boundaries })
    }

    /// Stage 1: fetch, render and show the earthquake markers.
    ///
    /// On a transport or parse failure nothing is added to the overlay and
    /// the error is shown on the map. A rejected repeat load is returned
    /// without touching the map.
    pub async fn load_events<T>(
        &mut self,
        transport: &T,
        composer: &mut LayerComposer,
        surface: &mut dyn MapSurface,
    ) -> Result<StageReport>
    where
        T: Transport + ?Sized,
    {
        match self.load_stage(DatasetKind::Events, transport, composer, surface).await {
            Ok(report) => Ok(report),
            Err(e) => {
                if matches!(e, MapError::Transport(_) | MapError::Parse(_)) {
                    surface.show_error(format!("Unable to load earthquake data: {}", e));
                }
                Err(e)
            }
        }
    }

    /// Stage 2: fetch, render and show the plate boundaries.
    ///
    /// Refuses to start until the events dataset has loaded.
    pub async fn load_boundaries<T>(
        &mut self,
        transport: &T,
        composer: &mut LayerComposer,
        surface: &mut dyn MapSurface,
    ) -> Result<StageReport>
    where
        T: Transport + ?Sized,
    {
        if !self.events.is_loaded() {
            return Err(MapError::InvalidState(
                "boundaries cannot load before the events dataset".to_string(),
            ));
        }

        let result = self
            .load_stage(DatasetKind::Boundaries, transport, composer, surface)
            .await;
        if let Err(e) = &result {
            log::warn!("plate boundaries unavailable, continuing without them: {}", e);
        }
        result
    }

    async fn load_stage<T>(
        &mut self,
        kind: DatasetKind,
        transport: &T,
        composer: &mut LayerComposer,
        surface: &mut dyn MapSurface,
    ) -> Result<StageReport>
    where
        T: Transport + ?Sized,
    {
        self.fetch(kind, transport).await?;

        let outcome = self.renderer.render_features(self.dataset(kind).features());
        let report = StageReport {
            rendered: outcome.rendered.len(),
            skipped: outcome.skipped,
        };
        composer.populate(kind, outcome);
        composer.attach(kind, surface);

        log::info!(
            "{} stage complete: {} rendered, {} skipped",
            kind,
            report.rendered,
            report.skipped
        );
        Ok(report)
    }

    async fn fetch<T>(&mut self, kind: DatasetKind, transport: &T) -> Result<()>
    where
        T: Transport + ?Sized,
    {
        let dataset = self.dataset_mut(kind);
        dataset.begin_loading()?;
        let url = dataset.source().to_string();

        log::info!("fetching {} from {}", kind, url);
        let result = match transport.fetch(&url).await {
            Ok(body) => GeoJson::parse(&body).map(GeoJson::into_features),
            Err(e) => Err(e),
        };

        let dataset = self.dataset_mut(kind);
        match result {
            Ok(features) => {
                log::debug!("{} feed returned {} features", kind, features.len());
                dataset.finish_loading(features)
            }
            Err(e) => {
                log::error!("{} feed failed: {}", kind, e);
                dataset.fail(&e)?;
                Err(e)
            }
        }
    }
}
