use crate::site::SiteConfig;

/// Placeholder replaced by the recipe URL in `print_url_format`
pub const URL_PLACEHOLDER: &str = "{url}";

/// Build the print view URL for a recipe.
///
/// The result is not validated; a malformed URL fails at fetch time.
pub fn print_view_url(url: &str, config: &SiteConfig) -> String {
    match &config.print_url_format {
        Some(format) => format.replace(URL_PLACEHOLDER, url),
        None => url.to_string(),
    }
}
