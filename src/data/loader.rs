use std::path::{Path, PathBuf};

use log::debug;

use crate::config::LoaderConfig;
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Loader selection
// ---------------------------------------------------------------------------

/// Where raw roster text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLoader {
    /// Read a local file in full.
    File { path: PathBuf },
    /// Blocking HTTP GET, body returned as text.
    Network { url: String, config: LoaderConfig },
}

impl DataLoader {
    /// Pick a loader for `source`: anything starting with `http`
    /// (case-insensitive) is fetched over the network, everything else is a
    /// file path.
    pub fn for_source(source: &str, config: &LoaderConfig) -> Self {
        if is_network_source(source) {
            DataLoader::Network {
                url: source.to_string(),
                config: config.clone(),
            }
        } else {
            DataLoader::File {
                path: PathBuf::from(source),
            }
        }
    }

    /// Retrieve the full raw text.
    pub fn load(&self) -> Result<String> {
        match self {
            DataLoader::File { path } => load_file(path),
            DataLoader::Network { url, config } => load_url(url, config),
        }
    }
}

fn is_network_source(source: &str) -> bool {
    source
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("http"))
}

// ---------------------------------------------------------------------------
// File loader
// ---------------------------------------------------------------------------

fn load_file(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

// ---------------------------------------------------------------------------
// Network loader
// ---------------------------------------------------------------------------

fn load_url(url: &str, config: &LoaderConfig) -> Result<String> {
    let network = |source: reqwest::Error| Error::Network {
        url: url.to_string(),
        source,
    };

    let mut builder = reqwest::blocking::Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str());
    if !config.use_env_proxy {
        builder = builder.no_proxy();
    }
    let client = builder.build().map_err(network)?;

    debug!("GET {url} (timeout {:?})", config.timeout);
    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(network)?;
    debug!("{url} answered {}", response.status());

    let text = response.text().map_err(network)?;
    debug!("read {} bytes from {url}", text.len());
    Ok(text)
}
