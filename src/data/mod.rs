pub mod dataset;
pub mod geojson;
