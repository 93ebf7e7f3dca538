use crate::db::household::{clear_recipes, insert_recipe, load_recipes};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::genai::TextGenerator;
use crate::models::household::Recipe;

/// Build the recipe request for the given ingredients.
pub fn build_recipe_prompt(ingredients: &[String]) -> String {
    format!(
        "Génère une recette simple en français avec ces ingrédients : {}.\n\
         Format souhaité :\n\
         Nom de la recette\n\
         Temps de préparation\n\
         Ingrédients nécessaires\n\
         Instructions étape par étape",
        ingredients.join(", ")
    )
}

/// Trimmed, non-blank ingredients in input order.
pub fn clean_ingredients<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct RecipeLogic;

impl RecipeLogic {
    /// Newest first.
    pub fn list(pool: &DbPool) -> AppResult<Vec<Recipe>> {
        load_recipes(&pool.conn)
    }

    /// Ask the service for a recipe and keep it. Nothing is stored on failure.
    pub fn generate<G: TextGenerator + ?Sized, S: AsRef<str>>(
        pool: &DbPool,
        generator: &G,
        ingredients: &[S],
    ) -> AppResult<Recipe> {
        let ingredients = clean_ingredients(ingredients);
        if ingredients.is_empty() {
            return Err(AppError::Validation("add at least one ingredient first".into()));
        }

        let suggestion = generator
            .generate(&build_recipe_prompt(&ingredients))?
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(AppError::NoResponse)?;

        let id = insert_recipe(&pool.conn, &ingredients, &suggestion)?;
        audit(
            &pool.conn,
            "generate",
            &format!("recipes #{id}"),
            &ingredients.join(", "),
        );

        Self::list(pool)?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(AppError::NotFound {
                table: "recipes",
                id,
            })
    }

    /// Forget every stored recipe.
    pub fn reset(pool: &DbPool) -> AppResult<usize> {
        let n = clear_recipes(&pool.conn)?;
        audit(&pool.conn, "reset", "recipes", &format!("{n} recipe(s) removed"));
        Ok(n)
    }
}
