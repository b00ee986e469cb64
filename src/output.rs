use crate::error::ScrapeError;
use crate::model::{Recipe, UNKNOWN_TITLE};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Write the recipe layout to any stream
pub fn render_to<W: Write>(recipe: &Recipe, mut writer: W) -> io::Result<()> {
    writer.write_all(recipe.to_text().as_bytes())?;
    writer.flush()
}

/// Print the recipe to stdout
pub fn print_recipe(recipe: &Recipe) -> io::Result<()> {
    render_to(recipe, io::stdout().lock())
}

/// `<title>.txt` with spaces and path separators replaced by underscores.
///
/// A blank title is saved as `Unknown_Recipe.txt` rather than a bare `.txt`.
pub fn recipe_file_name(title: &str) -> String {
    let title = match title.trim() {
        "" => UNKNOWN_TITLE,
        _ => title,
    };
    let stem: String = title
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    format!("{stem}.txt")
}

/// Save the recipe under `output_dir`, overwriting any earlier save of the same title
pub fn save_recipe(recipe: &Recipe, output_dir: &Path) -> Result<PathBuf, ScrapeError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(recipe_file_name(&recipe.title));
    fs::write(&path, recipe.to_text())?;
    info!("Saved recipe to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str, ingredient: &str) -> Recipe {
        Recipe {
            title: title.to_string(),
            ingredients: vec![ingredient.to_string()],
            instructions: vec!["Serve".to_string()],
        }
    }

    #[test]
    fn test_render_to_buffer() {
        let mut buffer = Vec::new();
        render_to(&recipe("Tea", "1 bag"), &mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Recipe: Tea\n\nIngredients:\n- 1 bag\n\nInstructions:\n1. Serve\n"
        );
    }

    #[test]
    fn test_recipe_file_name() {
        assert_eq!(recipe_file_name("Lemon Drizzle Cake"), "Lemon_Drizzle_Cake.txt");
        assert_eq!(recipe_file_name("Salt/Pepper"), "Salt_Pepper.txt");
    }

    #[test]
    fn test_blank_title_file_name() {
        assert_eq!(recipe_file_name(""), "Unknown_Recipe.txt");
        assert_eq!(recipe_file_name("   "), "Unknown_Recipe.txt");
    }

    #[test]
    fn test_save_blank_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_recipe(&recipe("  ", "rice"), dir.path()).unwrap();
        assert_eq!(path, dir.path().join("Unknown_Recipe.txt"));
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("nested").join("recipes");

        let path = save_recipe(&recipe("Green Soup", "peas"), &output_dir).unwrap();

        assert_eq!(path, output_dir.join("Green_Soup.txt"));
        assert!(fs::read_to_string(&path).unwrap().contains("- peas"));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let first = recipe("Green Soup", "peas");
        let second = recipe("Green Soup", "spinach");

        save_recipe(&first, dir.path()).unwrap();
        let path = save_recipe(&second, dir.path()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), second.to_text());
    }
}
