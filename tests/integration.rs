//! Integration tests for kondate
//!
//! End-to-end tests over the bundled catalog: load, offer choices, filter,
//! explain and browse.
//!
mod common;
use common::*;
use kondate::prelude::*;

fn bundled_store() -> RecipeStore {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/recipes.json");
    RecipeStore::load(path).expect("Failed to load bundled catalog")
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_choices_from_bundled_catalog() {
        let store = bundled_store();
        let index = AttributeIndex::build(&store);

        assert_eq!(
            index.values(CategoricalField::Cuisine),
            &["Any", "American", "Indian", "Italian", "Japanese", "Mexican"]
        );
        assert_eq!(
            index.values(CategoricalField::MealType),
            &["Any", "Breakfast", "Dinner", "Lunch"]
        );
        assert_eq!(
            index.values(CategoricalField::Difficulty),
            &["Any", "Easy", "Hard", "Medium"]
        );
        assert_eq!(
            store.time_bounds(),
            Some(TimeBounds {
                max_prep_minutes: 30,
                max_cook_minutes: 45,
            })
        );
    }

    #[test]
    fn test_egg_search_skips_eggplant() {
        let store = bundled_store();
        let criteria = FilterCriteria::builder()
            .cuisine("Italian")
            .ingredients("egg")
            .build();

        let results = filter(store.recipes(), &criteria);
        assert_eq!(names(&results), vec!["Spaghetti Carbonara"]);
    }

    #[test]
    fn test_full_workflow_with_paging() {
        let store = bundled_store();
        let bounds = store.time_bounds().unwrap();

        // A fresh form matches the whole catalog.
        let everything = filter(store.recipes(), &FilterCriteria::spanning(bounds));
        assert_eq!(everything.len(), store.len());

        // Garlic dinners, browsed one page of 2 at a time.
        let criteria = FilterCriteria::builder()
            .meal_type("Dinner")
            .prep_time(0, i64::from(bounds.max_prep_minutes))
            .cook_time(0, i64::from(bounds.max_cook_minutes))
            .ingredients("garlic")
            .build();
        let plan = FilterPlan::compile(&criteria);
        let mut session = BrowseSession::from_results(plan.apply(store.recipes()), 2);

        assert_eq!(
            names(session.results()),
            vec!["Chicken Katsu Curry", "Chana Masala", "Garlic Butter Shrimp"]
        );
        assert_eq!(session.visible().len(), 2);
        assert!(session.has_more());
        assert_eq!(names(session.show_more()), vec!["Garlic Butter Shrimp"]);
        assert!(!session.has_more());

        for recipe in session.visible() {
            let reason = plan.explain(recipe).expect("Every result has a reason");
            assert!(reason.to_string().contains("\"garlic\" ~ \"garlic\""));
        }
    }

    #[test]
    fn test_multi_term_search() {
        let store = bundled_store();
        let criteria = FilterCriteria::builder()
            .ingredients("egg, soy sauce")
            .build();

        let results = filter(store.recipes(), &criteria);
        assert_eq!(names(&results), vec!["Tamagoyaki"]);
    }

    #[test]
    fn test_time_limited_breakfast() {
        let store = bundled_store();
        let criteria = FilterCriteria::builder()
            .meal_type("Breakfast")
            .prep_time(0, 5)
            .cook_time(0, 10)
            .build();

        let results = filter(store.recipes(), &criteria);
        assert_eq!(names(&results), vec!["Tamagoyaki"]);
    }

    #[test]
    fn test_surprise_me_from_bundled_catalog() {
        let store = bundled_store();
        let picked = store.pick_random().expect("Catalog is not empty");
        let session = BrowseSession::from_pick(picked, DEFAULT_PAGE_SIZE);
        assert_eq!(session.visible().len(), 1);
        assert!(store.recipes().iter().any(|r| std::ptr::eq(r, picked)));
    }
}
