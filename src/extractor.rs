use crate::error::ScrapeError;
use crate::model::{Recipe, UNKNOWN_TITLE};
use crate::site::Selectors;
use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};

/// Pull a recipe out of a parsed page using a site's selectors.
///
/// Fields whose selector matches nothing fall back to defaults: the
/// `Unknown Recipe` title or an empty list. Only a selector that fails to
/// parse is an error.
pub fn extract_recipe(document: &Html, selectors: &Selectors) -> Result<Recipe, ScrapeError> {
    let title = extract_title(document, &selectors.title)?;
    let ingredients = extract_list_items(document, &selectors.ingredients)?;
    let instructions = extract_list_items(document, &selectors.instructions)?;

    debug!("Recipe name: {}", title);
    debug!("Ingredients count: {}", ingredients.len());
    debug!("Instructions count: {}", instructions.len());

    Ok(Recipe {
        title,
        ingredients,
        instructions,
    })
}

/// Parse raw HTML and extract from it
pub fn extract_recipe_from_html(html: &str, selectors: &Selectors) -> Result<Recipe, ScrapeError> {
    let document = Html::parse_document(html);
    extract_recipe(&document, selectors)
}

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn extract_title(document: &Html, selector: &str) -> Result<String, ScrapeError> {
    let parsed = parse_selector(selector)?;
    match document.select(&parsed).next() {
        Some(element) => Ok(element_text(element)),
        None => {
            warn!("Title selector '{}' matched nothing", selector);
            Ok(UNKNOWN_TITLE.to_string())
        }
    }
}

/// Text of each direct `<li>` child of the first element matching `selector`
fn extract_list_items(document: &Html, selector: &str) -> Result<Vec<String>, ScrapeError> {
    let parsed = parse_selector(selector)?;
    let Some(container) = document.select(&parsed).next() else {
        warn!("Container selector '{}' matched nothing", selector);
        return Ok(Vec::new());
    };

    let items: Vec<String> = container
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "li")
        .map(element_text)
        .collect();

    debug!("Found {} items using selector: {}", items.len(), selector);
    Ok(items)
}
