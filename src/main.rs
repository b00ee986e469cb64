use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use log::debug;
use std::env;

use recipe_print_scraper::{print_recipe, save_recipe, scrape_recipe, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let settings = Settings::load()?;
    debug!("{:?}", settings);

    let theme = ColorfulTheme::default();

    // Use the URL from command-line arguments, otherwise ask for it
    let url = match env::args().nth(1) {
        Some(url) => url,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Enter the URL of the recipe")
            .interact_text()?,
    };

    let site_key: String = Input::with_theme(&theme)
        .with_prompt("Site key (leave empty to derive from URL)")
        .allow_empty(true)
        .interact_text()?;

    let recipe = scrape_recipe(url.trim(), Some(site_key.as_str()), &settings)?;

    println!();
    print_recipe(&recipe)?;

    let save = Confirm::with_theme(&theme)
        .with_prompt(format!("Save to {}?", settings.output_dir.display()))
        .default(true)
        .interact()?;

    if save {
        let path = save_recipe(&recipe, &settings.output_dir)?;
        println!("Saved to {}", path.display());
    }

    Ok(())
}
