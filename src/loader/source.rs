use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// Where a data file is read from: a local path or an HTTP(S) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Path(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` and `https://` locations are URLs, `file://` and anything
    /// else is a path.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_owned())
        } else {
            let path = location.strip_prefix("file://").unwrap_or(location);
            Self::Path(PathBuf::from(path))
        }
    }

    /// Reads the whole source as text. URLs are fetched with one blocking
    /// request and need the `remote-fetch` feature.
    pub fn read_to_string(&self) -> ChartResult<String> {
        match self {
            Self::Path(path) => {
                let text = std::fs::read_to_string(path)?;
                debug!(path = %path.display(), bytes = text.len(), "read data file");
                Ok(text)
            }
            Self::Url(url) => fetch(url),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

#[cfg(feature = "remote-fetch")]
fn fetch(url: &str) -> ChartResult<String> {
    let fetch_error = |error: reqwest::Error| ChartError::Fetch {
        url: url.to_owned(),
        message: error.to_string(),
    };
    let response = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(fetch_error)?;
    let text = response.text().map_err(fetch_error)?;
    debug!(url, bytes = text.len(), "fetch data file");
    Ok(text)
}

#[cfg(not(feature = "remote-fetch"))]
fn fetch(url: &str) -> ChartResult<String> {
    Err(ChartError::UnsupportedSource(url.to_owned()))
}
