use super::criteria::TimeRange;
use super::ingredient::IngredientMatcher;
use crate::attributes::CategoricalField;
use crate::data::Recipe;
use itertools::Itertools;

/// One narrowing step of a filter plan.
///
/// A pass only ever decides whether a candidate survives; it never adds or
/// reorders candidates.
pub trait NarrowingPass: Send + Sync {
    fn name(&self) -> &str;

    fn keep(&self, recipe: &Recipe) -> bool;

    /// A short account of why `recipe` survives this pass, or `None` if it does not.
    fn reason(&self, recipe: &Recipe) -> Option<String>;
}

/// Keeps recipes whose categorical field equals a value exactly.
pub(super) struct CategoricalPass {
    field: CategoricalField,
    value: String,
}

impl CategoricalPass {
    pub(super) fn new(field: CategoricalField, value: String) -> Self {
        Self { field, value }
    }
}

impl NarrowingPass for CategoricalPass {
    fn name(&self) -> &str {
        self.field.key()
    }

    fn keep(&self, recipe: &Recipe) -> bool {
        self.field.value_of(recipe) == self.value
    }

    fn reason(&self, recipe: &Recipe) -> Option<String> {
        self.keep(recipe)
            .then(|| format!("{} == {}", self.field, self.value))
    }
}

/// Keeps recipes whose prep and cook times both fall in their inclusive ranges.
pub(super) struct TimeRangePass {
    prep: TimeRange,
    cook: TimeRange,
}

impl TimeRangePass {
    pub(super) fn new(prep: TimeRange, cook: TimeRange) -> Self {
        Self { prep, cook }
    }
}

impl NarrowingPass for TimeRangePass {
    fn name(&self) -> &str {
        "time"
    }

    fn keep(&self, recipe: &Recipe) -> bool {
        self.prep.contains(recipe.prep_time_minutes) && self.cook.contains(recipe.cook_time_minutes)
    }

    fn reason(&self, recipe: &Recipe) -> Option<String> {
        self.keep(recipe).then(|| {
            format!(
                "prep {} in {} AND cook {} in {}",
                recipe.prep_time_minutes, self.prep, recipe.cook_time_minutes, self.cook
            )
        })
    }
}

/// Keeps recipes where every search term matches at least one ingredient.
pub(super) struct IngredientPass {
    matcher: IngredientMatcher,
}

impl IngredientPass {
    pub(super) fn new(matcher: IngredientMatcher) -> Self {
        Self { matcher }
    }
}

impl NarrowingPass for IngredientPass {
    fn name(&self) -> &str {
        "ingredients"
    }

    fn keep(&self, recipe: &Recipe) -> bool {
        self.matcher.matches(recipe)
    }

    fn reason(&self, recipe: &Recipe) -> Option<String> {
        self.matcher
            .terms()
            .iter()
            .map(|term| {
                term.find_in(recipe)
                    .map(|ingredient| format!("\"{}\" ~ \"{}\"", term.term(), ingredient))
            })
            .collect::<Option<Vec<_>>>()
            .map(|clauses| clauses.into_iter().join(" AND "))
    }
}
