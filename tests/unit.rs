//! Unit tests for core kondate types.
mod common;
use common::*;
use kondate::filter::IngredientTerm;
use kondate::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_choice_from_str() {
    assert_eq!(Choice::from("Any"), Choice::Any);
    assert_eq!(
        Choice::from("Italian"),
        Choice::Exactly("Italian".to_string())
    );
    // Only the exact sentinel is the wildcard.
    assert_eq!(Choice::from("any"), Choice::Exactly("any".to_string()));
    assert_eq!("Any".parse::<Choice>().unwrap(), Choice::Any);
    assert_eq!(Choice::Any.to_string(), "Any");
}

#[test]
fn test_choice_accepts() {
    assert!(Choice::Any.accepts("anything"));
    let italian = Choice::from("Italian");
    assert!(italian.accepts("Italian"));
    assert!(!italian.accepts("italian"));
    assert!(!italian.is_any());
}

#[test]
fn test_time_range() {
    let range = TimeRange::new(10, 20);
    assert!(range.contains(10));
    assert!(range.contains(20));
    assert!(!range.contains(9));
    assert!(!range.contains(21));
    assert_eq!(range.to_string(), "[10, 20]");

    let inverted = TimeRange::new(20, 10);
    assert!(inverted.is_inverted());
    assert!(!inverted.contains(15));

    assert!(TimeRange::default().contains(u32::MAX));
    assert_eq!(TimeRange::up_to(45), TimeRange::new(0, 45));
}

#[test]
fn test_ingredient_query_parse() {
    let query = IngredientQuery::parse(" Chicken, GARLIC ,, olive oil ");
    assert_eq!(query.terms(), &["chicken", "garlic", "olive oil"]);

    assert!(IngredientQuery::parse("").is_empty());
    assert!(IngredientQuery::parse(" ,  , ").is_empty());
}

#[test]
fn test_ingredient_term_matching() {
    let matcher = IngredientQuery::parse("egg").compile();
    let term = &matcher.terms()[0];
    assert_eq!(term.term(), "egg");
    assert!(term.matches("egg"));
    assert!(term.matches("egg yolk"));
    assert!(term.matches("large egg, beaten"));
    assert!(term.matches("EGG"));
    assert!(!term.matches("eggplant"));
    assert!(!term.matches("nutmeg"));
    assert!(!term.matches("egg2"));
}

#[test]
fn test_oversized_term_is_matched_literally() {
    let long = "é".repeat(100_000);
    let term = IngredientTerm::new(&long);
    assert_eq!(term.term(), long);
    assert!(term.matches(&format!("fresh {}", long.to_uppercase())));
    assert!(term.matches(&format!("({})", long)));
    assert!(!term.matches(&format!("{}_x", long)));
    assert!(!term.matches(&format!("a{}", long)));
    assert!(!term.matches("é"));
}

#[test]
fn test_pick_random_empty() {
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(pick_random(&[], &mut rng), Err(PickError::Empty));
    assert_eq!(PickError::Empty.to_string(), "No recipes to pick from");
}

#[test]
fn test_pick_random_returns_a_member() {
    let recipes = create_mixed_recipes();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let picked = pick_random(&recipes, &mut rng).unwrap();
        assert!(recipes.iter().any(|r| std::ptr::eq(r, picked)));
    }
}

#[test]
fn test_pick_random_reaches_every_recipe() {
    let recipes = create_scenario_recipes();
    let mut rng = StdRng::seed_from_u64(1);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(pick_random(&recipes, &mut rng).unwrap().name.clone());
    }
    assert_eq!(seen.len(), recipes.len());
}

#[test]
fn test_store_pick_random() {
    let store = RecipeStore::from_recipes(create_scenario_recipes());
    let picked = store.pick_random().unwrap();
    assert!(store.recipes().contains(picked));
}

#[test]
fn test_recipe_total_time() {
    let r = recipe("Slow", "X", "X", "X", 30, 240, &[]);
    assert_eq!(r.total_time_minutes(), 270);
}

#[test]
fn test_error_display() {
    let err = LoadError::NotFound {
        path: "missing/recipes.json".into(),
    };
    assert!(err.to_string().contains("missing/recipes.json"));
    assert!(err.to_string().contains("not found"));

    let cfg_err = ConfigError::Invalid {
        key: "page_size".to_string(),
        message: "must be at least 1".to_string(),
    };
    assert!(cfg_err.to_string().contains("page_size"));
}

// --- Browse sessions ---

#[test]
fn test_session_starts_with_one_page() {
    let recipes = create_mixed_recipes(); // 6 recipes
    let results = filter(&recipes, &FilterCriteria::default());
    let session = BrowseSession::from_results(results, DEFAULT_PAGE_SIZE);

    assert_eq!(session.total(), 6);
    assert_eq!(session.display_count(), 5);
    assert_eq!(session.visible().len(), 5);
    assert!(session.has_more());
}

#[test]
fn test_session_show_more() {
    let recipes = create_mixed_recipes();
    let results = filter(&recipes, &FilterCriteria::default());
    let mut session = BrowseSession::from_results(results, 5);

    let more = session.show_more();
    assert_eq!(names(more), vec!["Baba Ganoush"]);
    assert_eq!(session.display_count(), 10);
    assert_eq!(session.visible().len(), 6);
    assert!(!session.has_more());

    // Nothing left to reveal.
    assert!(session.show_more().is_empty());
}

#[test]
fn test_session_small_pages() {
    let recipes = create_mixed_recipes();
    let results = filter(&recipes, &FilterCriteria::default());
    let mut session = BrowseSession::from_results(results, 2);

    assert_eq!(names(session.visible()), vec!["Carbonara", "Garlic Chicken"]);
    assert_eq!(
        names(session.show_more()),
        vec!["Chicken Soup", "Stuffed Peppers"]
    );
    assert_eq!(names(session.show_more()), vec!["Omelette", "Baba Ganoush"]);
    assert!(!session.has_more());
}

#[test]
fn test_session_empty_results() {
    let session = BrowseSession::from_results(Vec::new(), 5);
    assert!(session.is_empty());
    assert!(session.visible().is_empty());
    assert!(!session.has_more());
}

#[test]
fn test_session_from_pick_shows_one() {
    let recipes = create_mixed_recipes();
    let session = BrowseSession::from_pick(&recipes[2], 5);
    assert_eq!(session.total(), 1);
    assert_eq!(session.display_count(), 1);
    assert_eq!(names(session.visible()), vec!["Chicken Soup"]);
    assert!(!session.has_more());
}
