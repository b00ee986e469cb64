pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod model;
pub mod output;
pub mod print_url;
pub mod settings;
pub mod site;

use log::debug;

pub use error::ScrapeError;
pub use fetcher::{PageFetcher, RequestFetcher};
pub use model::Recipe;
pub use output::{print_recipe, save_recipe};
pub use settings::Settings;

/// Scrape a recipe from its print view.
///
/// The site key is derived from `url` unless `site_key` is given. The site
/// configuration is loaded before any request is made.
pub fn scrape_recipe(
    url: &str,
    site_key: Option<&str>,
    settings: &Settings,
) -> Result<Recipe, ScrapeError> {
    scrape_recipe_with_fetcher(url, site_key, settings, &RequestFetcher::new())
}

/// Same as [`scrape_recipe`] with a caller supplied fetcher
pub fn scrape_recipe_with_fetcher(
    url: &str,
    site_key: Option<&str>,
    settings: &Settings,
    fetcher: &dyn PageFetcher,
) -> Result<Recipe, ScrapeError> {
    let key = site::resolve_site_key(url, site_key)?;
    debug!("Using site key '{}'", key);
    let config = site::load_site_config(&settings.config_dir, &key)?;

    let print_url = print_url::print_view_url(url, &config);
    debug!("Fetching print view {}", print_url);
    let html = fetcher.fetch(&print_url)?;
    debug!("Fetched {} bytes", html.len());

    extractor::extract_recipe_from_html(&html, &config.selectors)
}
