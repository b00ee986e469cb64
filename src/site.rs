use crate::error::ScrapeError;
use config::{Config, File, FileFormat};
use log::debug;
use serde::Deserialize;
use std::path::Path;
use url::Url;

/// Extraction rules for one site
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Template for the print view, `{url}` is replaced by the recipe URL
    pub print_url_format: Option<String>,
    pub selectors: Selectors,
}

/// CSS selectors locating each recipe field
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Selectors {
    pub title: String,
    /// Container whose direct `<li>` children are the ingredients
    pub ingredients: String,
    /// Container whose direct `<li>` children are the instructions
    pub instructions: String,
}

/// Derive the site key from a URL's host.
///
/// Takes the second-to-last dot-separated label, so `www.example.com` gives
/// `example`. Multi-part public suffixes are not recognised: `bbc.co.uk`
/// gives `co`. A single-label host is returned as is.
pub fn site_key_from_url(url: &str) -> Result<String, ScrapeError> {
    let parsed = Url::parse(url)?;
    let host = parsed
        .host_str()
        .ok_or_else(|| ScrapeError::MissingHost(url.to_string()))?;

    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    match labels.len() {
        0 => Err(ScrapeError::MissingHost(url.to_string())),
        1 => Ok(labels[0].to_string()),
        n => Ok(labels[n - 2].to_string()),
    }
}

/// Pick the explicit key when one is given, otherwise derive it from the URL
pub fn resolve_site_key(url: &str, site_key: Option<&str>) -> Result<String, ScrapeError> {
    match site_key.map(str::trim).filter(|k| !k.is_empty()) {
        Some(key) => Ok(key.to_string()),
        None => site_key_from_url(url),
    }
}

/// Load `<config_dir>/<site_key>.toml`
pub fn load_site_config(config_dir: &Path, site_key: &str) -> Result<SiteConfig, ScrapeError> {
    let path = config_dir.join(format!("{site_key}.toml"));
    if !path.is_file() {
        return Err(ScrapeError::ConfigNotFound {
            site_key: site_key.to_string(),
            path,
        });
    }

    debug!("Loading site config from {}", path.display());
    let config = Config::builder()
        .add_source(File::from(path.as_path()).format(FileFormat::Toml))
        .build()?
        .try_deserialize()?;

    Ok(config)
}
