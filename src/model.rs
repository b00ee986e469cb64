/// Title used when the title selector matches nothing
pub const UNKNOWN_TITLE: &str = "Unknown Recipe";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Render the recipe in the plain text layout shared by the console and saved files
    pub fn to_text(&self) -> String {
        let mut text = format!("Recipe: {}\n\nIngredients:\n", self.title);
        for ingredient in &self.ingredients {
            text.push_str(&format!("- {ingredient}\n"));
        }
        text.push_str("\nInstructions:\n");
        for (i, instruction) in self.instructions.iter().enumerate() {
            text.push_str(&format!("{}. {}\n", i + 1, instruction));
        }
        text
    }
}
