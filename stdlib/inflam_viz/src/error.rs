use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("failed to write {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
    #[error("chart rendering failed: {0}")]
    Chart(#[from] DrawingAreaErrorKind<std::io::Error>),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
