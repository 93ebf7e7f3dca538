use household::core::inventory::{InventoryLogic, QuantityChange, filter_items};
use household::core::notebook::NotebookLogic;
use household::core::recipe::{RecipeLogic, build_recipe_prompt, clean_ingredients};
use household::core::shopping::ShoppingLogic;
use household::core::todo::TodoLogic;
use household::db::pool::DbPool;
use household::errors::AppError;
use household::models::notebook::{EnglishItemDraft, NotebookFilter};

mod common;
use common::ScriptedGenerator;

fn pool() -> DbPool {
    DbPool::in_memory().expect("in-memory db")
}

// ---------------------------------------------------------------------------
// shopping
// ---------------------------------------------------------------------------

#[test]
fn test_shopping_add_trims_and_keeps_order() {
    let pool = pool();
    ShoppingLogic::add(&pool, "  lait ").expect("add");
    let items = ShoppingLogic::add(&pool, "pain").expect("add");

    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["lait", "pain"]);

    assert!(ShoppingLogic::add(&pool, "   ").expect_err("blank").is_validation());
    assert_eq!(ShoppingLogic::list(&pool).expect("list").len(), 2);
}

#[test]
fn test_shopping_delete_and_reset() {
    let pool = pool();
    let items = ShoppingLogic::add(&pool, "oeufs").expect("add");
    ShoppingLogic::add(&pool, "beurre").expect("add");

    let left = ShoppingLogic::delete(&pool, items[0].id).expect("delete");
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].name, "beurre");

    assert!(matches!(
        ShoppingLogic::delete(&pool, 9999),
        Err(AppError::NotFound { .. })
    ));

    assert_eq!(ShoppingLogic::reset(&pool).expect("reset"), 1);
    assert!(ShoppingLogic::list(&pool).expect("list").is_empty());
}

// ---------------------------------------------------------------------------
// inventory
// ---------------------------------------------------------------------------

#[test]
fn test_inventory_quantity_lifecycle() {
    let pool = pool();
    let rice = InventoryLogic::add(&pool, "riz").expect("add");
    assert_eq!(rice.quantity, 1);

    match InventoryLogic::increment(&pool, rice.id).expect("inc") {
        QuantityChange::Updated(item) => assert_eq!(item.quantity, 2),
        other => panic!("unexpected {:?}", other),
    }

    InventoryLogic::decrement(&pool, rice.id).expect("dec");
    match InventoryLogic::decrement(&pool, rice.id).expect("dec") {
        QuantityChange::Removed(item) => assert_eq!(item.name, "riz"),
        other => panic!("unexpected {:?}", other),
    }

    assert!(InventoryLogic::list(&pool, None).expect("list").is_empty());
    assert!(matches!(
        InventoryLogic::increment(&pool, rice.id),
        Err(AppError::NotFound { .. })
    ));
}

#[test]
fn test_inventory_search_is_case_insensitive() {
    let pool = pool();
    for name in ["Pâtes", "Riz basmati", "riz rond", "Sel"] {
        InventoryLogic::add(&pool, name).expect("add");
    }

    let found = InventoryLogic::list(&pool, Some("RIZ")).expect("list");
    assert_eq!(found.len(), 2);

    let all = InventoryLogic::list(&pool, Some("  ")).expect("list");
    assert_eq!(all.len(), 4);

    assert!(filter_items(all, Some("chocolat")).is_empty());
}

#[test]
fn test_inventory_set_quantity_zero_removes() {
    let pool = pool();
    let salt = InventoryLogic::add(&pool, "sel").expect("add");

    let change = InventoryLogic::set_quantity(&pool, salt.id, 5).expect("set");
    assert!(matches!(change, QuantityChange::Updated(ref i) if i.quantity == 5));

    let change = InventoryLogic::set_quantity(&pool, salt.id, -2).expect("set");
    assert!(matches!(change, QuantityChange::Removed(_)));
}

// ---------------------------------------------------------------------------
// todos
// ---------------------------------------------------------------------------

#[test]
fn test_todo_toggle_and_delete() {
    let pool = pool();
    let todo = TodoLogic::add(&pool, "appeler le proprio").expect("add");
    assert!(!todo.completed);

    assert!(TodoLogic::toggle(&pool, todo.id).expect("toggle").completed);
    assert!(!TodoLogic::toggle(&pool, todo.id).expect("toggle").completed);

    TodoLogic::delete(&pool, todo.id).expect("delete");
    assert!(TodoLogic::list(&pool).expect("list").is_empty());
    assert!(TodoLogic::add(&pool, "").expect_err("blank").is_validation());
}

// ---------------------------------------------------------------------------
// recipes
// ---------------------------------------------------------------------------

#[test]
fn test_recipe_prompt_lists_ingredients() {
    let ingredients = clean_ingredients(&[" tomates ", "", "basilic"]);
    assert_eq!(ingredients, ["tomates", "basilic"]);

    let prompt = build_recipe_prompt(&ingredients);
    assert!(prompt.contains("tomates, basilic"));
}

#[test]
fn test_recipe_generate_stores_suggestion() {
    let pool = pool();
    let generator = ScriptedGenerator::replying(&["Salade tomate basilic\n10 min"]);

    let recipe =
        RecipeLogic::generate(&pool, &generator, &["tomates", "basilic"]).expect("generate");
    assert_eq!(recipe.ingredients, ["tomates", "basilic"]);
    assert!(recipe.suggestion.starts_with("Salade"));

    let stored = RecipeLogic::list(&pool).expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, recipe.id);
}

#[test]
fn test_recipe_without_ingredients_skips_service() {
    let pool = pool();
    let generator = ScriptedGenerator::default();

    let err = RecipeLogic::generate(&pool, &generator, &["  "]).expect_err("no ingredients");
    assert!(err.is_validation());
    assert_eq!(generator.calls(), 0);
}

#[test]
fn test_recipe_empty_reply_stores_nothing() {
    let pool = pool();
    let generator = ScriptedGenerator::replying(&["  "]);

    let err = RecipeLogic::generate(&pool, &generator, &["riz"]).expect_err("empty reply");
    assert!(matches!(err, AppError::NoResponse));
    assert!(RecipeLogic::list(&pool).expect("list").is_empty());
}

// ---------------------------------------------------------------------------
// English notebook
// ---------------------------------------------------------------------------

fn draft(fr: &str, en: &str, category_id: Option<i64>) -> EnglishItemDraft {
    EnglishItemDraft {
        french_text: fr.into(),
        english_text: en.into(),
        category_id,
        notes: None,
    }
}

#[test]
fn test_notebook_has_seeded_categories() {
    let pool = pool();
    let names: Vec<String> = NotebookLogic::categories(&pool)
        .expect("categories")
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, ["Expressions", "Grammaire", "Vocabulaire"]);
}

#[test]
fn test_notebook_requires_fields_and_known_category() {
    let pool = pool();
    let cat = NotebookLogic::categories(&pool).expect("categories")[0].id;

    assert!(NotebookLogic::add(&pool, &draft("", "hello", Some(cat))).is_err());
    assert!(NotebookLogic::add(&pool, &draft("bonjour", "hello", None)).is_err());
    assert!(
        NotebookLogic::add(&pool, &draft("bonjour", "hello", Some(9999)))
            .expect_err("unknown category")
            .is_validation()
    );
    assert!(NotebookLogic::list(&pool, &NotebookFilter::default()).expect("list").is_empty());
}

#[test]
fn test_notebook_search_and_filter() {
    let pool = pool();
    let cats = NotebookLogic::categories(&pool).expect("categories");
    let expressions = cats[0].id;
    let vocabulaire = cats[2].id;

    NotebookLogic::add(&pool, &draft("la pomme", "the apple", Some(vocabulaire))).expect("add");
    let rain = draft(
        "il pleut des cordes",
        "it's raining cats and dogs",
        Some(expressions),
    );
    NotebookLogic::add(&pool, &rain).expect("add");
    NotebookLogic::add(&pool, &draft("100% sûr", "100% sure", Some(expressions))).expect("add");

    let search = |term: &str| {
        NotebookLogic::list(
            &pool,
            &NotebookFilter {
                category_id: None,
                search: Some(term.into()),
            },
        )
        .expect("list")
    };

    assert_eq!(search("APPLE").len(), 1);
    assert_eq!(search("pleut").len(), 1);
    assert_eq!(search("%").len(), 1, "wildcards are literal");
    assert_eq!(search("zzz").len(), 0);

    let by_cat = NotebookLogic::list(
        &pool,
        &NotebookFilter {
            category_id: Some(expressions),
            search: None,
        },
    )
    .expect("list");
    assert_eq!(by_cat.len(), 2);
}

#[test]
fn test_notebook_search_folds_accented_capitals() {
    let pool = pool();
    let cat = NotebookLogic::categories(&pool).expect("categories")[0].id;
    NotebookLogic::add(&pool, &draft("École", "School", Some(cat))).expect("add");
    NotebookLogic::add(&pool, &draft("le pain", "the bread", Some(cat))).expect("add");

    for term in ["école", "ÉCOLE", "School"] {
        let found = NotebookLogic::list(
            &pool,
            &NotebookFilter {
                category_id: Some(cat),
                search: Some(term.into()),
            },
        )
        .expect("list");
        assert_eq!(found.len(), 1, "search {term:?}");
        assert_eq!(found[0].french_text, "École");
    }
}

#[test]
fn test_notebook_edit_and_delete() {
    let pool = pool();
    let cat = NotebookLogic::categories(&pool).expect("categories")[0].id;
    let id = NotebookLogic::add(&pool, &draft("chat", "cat", Some(cat))).expect("add");

    let mut changed = draft("chien", "dog", Some(cat));
    changed.notes = Some("  animal ".into());
    NotebookLogic::edit(&pool, id, &changed).expect("edit");

    let items = NotebookLogic::list(&pool, &NotebookFilter::default()).expect("list");
    assert_eq!(items[0].english_text, "dog");
    assert_eq!(items[0].notes.as_deref(), Some("animal"));

    NotebookLogic::delete(&pool, id).expect("delete");
    assert!(matches!(
        NotebookLogic::delete(&pool, id),
        Err(AppError::NotFound { .. })
    ));
}

#[test]
fn test_notebook_category_add() {
    let pool = pool();
    let c = NotebookLogic::add_category(&pool, " Travail ").expect("add category");
    assert_eq!(c.name, "Travail");
    assert!(NotebookLogic::add_category(&pool, "Travail").is_err(), "names are unique");
    assert!(NotebookLogic::add_category(&pool, " ").expect_err("blank").is_validation());
}
