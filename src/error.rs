use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown chart type `{0}`")]
    UnknownChartType(String),

    #[error("chart type `{chart_type}` needs unregistered {kind} `{id}`")]
    UnregisteredComponent {
        chart_type: String,
        kind: &'static str,
        id: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fetch failed for `{url}`: {message}")]
    Fetch { url: String, message: String },

    #[error("unsupported data source `{0}`")]
    UnsupportedSource(String),
}
