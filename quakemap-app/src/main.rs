use anyhow::Context;
use quakemap::{loader::HttpTransport, Visualization, VisualizationConfig};

/// Loads both feeds and prints the composed map as JSON
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = VisualizationConfig::from_env().context("invalid configuration")?;
    let transport = HttpTransport::new().context("failed to build HTTP client")?;

    let mut viz = Visualization::new(config);
    let report = viz
        .load(&transport)
        .await
        .context("earthquake feed could not be loaded")?;

    log::info!(
        "earthquakes: {} rendered, {} skipped, {} markers visible",
        report.events.rendered,
        report.events.skipped,
        viz.visible_markers().len()
    );
    match &report.boundaries {
        Ok(stage) => log::info!(
            "plate boundaries: {} shown, {} skipped",
            stage.rendered,
            stage.skipped
        ),
        Err(e) => log::warn!("plate boundaries unavailable: {}", e),
    }

    println!("{}", serde_json::to_string_pretty(&viz.scene())?);
    Ok(())
}
