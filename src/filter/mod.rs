//! The filter engine: criteria are compiled into an ordered list of narrowing
//! passes, which are then applied to a recipe collection.
//!
//! Passes run in a fixed order (categorical, time range, ingredients). Each
//! pass only removes candidates, so the result always preserves the order of
//! the source collection.

use crate::attributes::CategoricalField;
use crate::data::Recipe;
use log::debug;

mod criteria;
mod ingredient;
mod pass;
mod reason;

pub use criteria::{Choice, FilterCriteria, FilterCriteriaBuilder, TimeRange};
pub use ingredient::{IngredientMatcher, IngredientQuery, IngredientTerm};
pub use pass::NarrowingPass;
pub use reason::MatchReason;

use pass::{CategoricalPass, IngredientPass, TimeRangePass};

/// The recipes that survived filtering, borrowed from the source collection
/// in their original order.
pub type ResultSet<'a> = Vec<&'a Recipe>;

/// Filters `recipes` by `criteria`.
///
/// Deterministic and side-effect free: calling it twice with the same
/// arguments yields the same recipes in the same order.
pub fn filter<'a>(recipes: &'a [Recipe], criteria: &FilterCriteria) -> ResultSet<'a> {
    FilterPlan::compile(criteria).apply(recipes)
}

/// Compiled filter criteria, ready to be applied to any number of collections.
pub struct FilterPlan {
    passes: Vec<Box<dyn NarrowingPass>>,
}

impl FilterPlan {
    /// Compiles `criteria` into its narrowing passes.
    ///
    /// Wildcard choices produce no pass. The time-range pass is always present.
    /// The ingredient pass is only added when the query yields at least one term.
    pub fn compile(criteria: &FilterCriteria) -> Self {
        let mut passes: Vec<Box<dyn NarrowingPass>> = Vec::new();

        // --- Categorical ---
        for field in CategoricalField::ALL {
            if let Choice::Exactly(value) = criteria.choice(field) {
                passes.push(Box::new(CategoricalPass::new(field, value.clone())));
            }
        }

        // --- Time ranges ---
        for (label, range) in [("prep", criteria.prep_time), ("cook", criteria.cook_time)] {
            if range.is_inverted() {
                debug!("{} time range {} is inverted; it will match nothing", label, range);
            }
        }
        passes.push(Box::new(TimeRangePass::new(
            criteria.prep_time,
            criteria.cook_time,
        )));

        // --- Ingredients ---
        let query = IngredientQuery::parse(&criteria.ingredient_query);
        if query.is_empty() {
            if !criteria.ingredient_query.is_empty() {
                debug!(
                    "Ingredient query '{}' has no search terms; skipping ingredient pass",
                    criteria.ingredient_query
                );
            }
        } else {
            passes.push(Box::new(IngredientPass::new(query.compile())));
        }

        Self { passes }
    }

    /// Applies every pass in order, narrowing the candidate set each time.
    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> ResultSet<'a> {
        let mut candidates: ResultSet<'a> = recipes.iter().collect();
        for pass in &self.passes {
            let before = candidates.len();
            candidates.retain(|recipe| pass.keep(recipe));
            debug!(
                "Pass '{}' kept {} of {} candidate(s)",
                pass.name(),
                candidates.len(),
                before
            );
            if candidates.is_empty() {
                break;
            }
        }
        candidates
    }

    /// Whether a single recipe satisfies every pass.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.passes.iter().all(|pass| pass.keep(recipe))
    }

    /// Explains why `recipe` matches, or returns `None` if any pass rejects it.
    pub fn explain(&self, recipe: &Recipe) -> Option<MatchReason> {
        self.passes
            .iter()
            .map(|pass| pass.reason(recipe))
            .collect::<Option<Vec<_>>>()
            .map(MatchReason::new)
    }

    /// The names of the passes in the order they run.
    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|pass| pass.name()).collect()
    }
}

impl std::fmt::Debug for FilterPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterPlan")
            .field("passes", &self.pass_names())
            .finish()
    }
}
