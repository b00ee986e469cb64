use crate::error::ScrapeError;
use log::debug;
use reqwest::blocking::Client;

/// Source of raw page HTML
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Plain GET with the transport's default redirect and timeout behaviour.
///
/// The status code is not inspected; whatever body comes back is handed on
/// to extraction.
#[derive(Debug, Default)]
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl PageFetcher for RequestFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.client.get(url).send()?;
        debug!("GET {} -> {}", url, response.status());
        let html = response.text()?;
        Ok(html)
    }
}
