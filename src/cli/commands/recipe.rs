use crate::cli::parser::RecipeAction;
use crate::config::Config;
use crate::core::recipe::RecipeLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::genai::TextGenerator;
use crate::models::household::Recipe;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{GREY, RESET};
use crate::utils::date::format_created_at;

pub fn handle(action: &RecipeAction, cfg: &Config, generator: &dyn TextGenerator) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database)?;

    match action {
        RecipeAction::List => {
            let recipes = RecipeLogic::list(&pool)?;
            header("Recipes");
            if recipes.is_empty() {
                println!("No recipe yet.");
            }
            for r in &recipes {
                print_recipe(r);
            }
        }
        RecipeAction::Generate { ingredients } => {
            info("Generating…");
            let recipe = RecipeLogic::generate(&pool, generator, ingredients.as_slice())?;
            success("Recipe generated and saved!");
            print_recipe(&recipe);
        }
        RecipeAction::Reset => {
            let n = RecipeLogic::reset(&pool)?;
            success(format!("Recipe history reset ({} removed)", n));
        }
    }

    Ok(())
}

fn print_recipe(r: &Recipe) {
    println!(
        "{GREY}#{} · {} · {}{RESET}",
        r.id,
        format_created_at(&r.created_at),
        r.ingredients.join(", ")
    );
    for line in r.suggestion.lines() {
        println!("  {}", line);
    }
    println!();
}
