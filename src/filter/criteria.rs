use crate::attributes::{ANY, CategoricalField};
use crate::data::TimeBounds;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A categorical filter value: the wildcard, or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Choice {
    #[default]
    Any,
    Exactly(String),
}

impl Choice {
    pub fn is_any(&self) -> bool {
        matches!(self, Choice::Any)
    }

    /// Case-sensitive exact comparison; the wildcard accepts everything.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Choice::Any => true,
            Choice::Exactly(expected) => expected == value,
        }
    }
}

impl From<&str> for Choice {
    fn from(s: &str) -> Self {
        if s == ANY {
            Choice::Any
        } else {
            Choice::Exactly(s.to_string())
        }
    }
}

impl From<String> for Choice {
    fn from(s: String) -> Self {
        if s == ANY { Choice::Any } else { Choice::Exactly(s) }
    }
}

impl FromStr for Choice {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Choice::from(s))
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Any => write!(f, "{}", ANY),
            Choice::Exactly(value) => write!(f, "{}", value),
        }
    }
}

/// An inclusive range of minutes.
///
/// Bounds are signed so that nonsensical input (negative or inverted bounds)
/// can be represented; such a range simply matches nothing it cannot contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub min: i64,
    pub max: i64,
}

impl TimeRange {
    pub const UNBOUNDED: TimeRange = TimeRange {
        min: 0,
        max: i64::MAX,
    };

    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// From zero up to and including `max`.
    pub fn up_to(max: u32) -> Self {
        Self {
            min: 0,
            max: i64::from(max),
        }
    }

    pub fn contains(&self, minutes: u32) -> bool {
        let minutes = i64::from(minutes);
        self.min <= minutes && minutes <= self.max
    }

    /// An inverted range can never match anything.
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        TimeRange::UNBOUNDED
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max == i64::MAX {
            write!(f, "[{}, ∞]", self.min)
        } else {
            write!(f, "[{}, {}]", self.min, self.max)
        }
    }
}

/// A single filter request. Built fresh for every search and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub cuisine: Choice,
    pub meal_type: Choice,
    pub difficulty: Choice,
    pub prep_time: TimeRange,
    pub cook_time: TimeRange,
    /// Comma-separated ingredient terms, possibly empty.
    pub ingredient_query: String,
}

impl FilterCriteria {
    pub fn builder() -> FilterCriteriaBuilder {
        FilterCriteriaBuilder::default()
    }

    /// Criteria with every choice set to `Any` and time ranges spanning the
    /// whole catalog, the starting state of a fresh search form.
    pub fn spanning(bounds: TimeBounds) -> Self {
        Self {
            prep_time: TimeRange::up_to(bounds.max_prep_minutes),
            cook_time: TimeRange::up_to(bounds.max_cook_minutes),
            ..Self::default()
        }
    }

    pub fn choice(&self, field: CategoricalField) -> &Choice {
        match field {
            CategoricalField::Cuisine => &self.cuisine,
            CategoricalField::MealType => &self.meal_type,
            CategoricalField::Difficulty => &self.difficulty,
        }
    }
}

/// Fluent construction of [`FilterCriteria`].
#[derive(Debug, Clone, Default)]
pub struct FilterCriteriaBuilder {
    criteria: FilterCriteria,
}

impl FilterCriteriaBuilder {
    pub fn cuisine(mut self, choice: impl Into<Choice>) -> Self {
        self.criteria.cuisine = choice.into();
        self
    }

    pub fn meal_type(mut self, choice: impl Into<Choice>) -> Self {
        self.criteria.meal_type = choice.into();
        self
    }

    pub fn difficulty(mut self, choice: impl Into<Choice>) -> Self {
        self.criteria.difficulty = choice.into();
        self
    }

    pub fn choice(mut self, field: CategoricalField, choice: impl Into<Choice>) -> Self {
        let choice = choice.into();
        match field {
            CategoricalField::Cuisine => self.criteria.cuisine = choice,
            CategoricalField::MealType => self.criteria.meal_type = choice,
            CategoricalField::Difficulty => self.criteria.difficulty = choice,
        }
        self
    }

    pub fn prep_time(mut self, min: i64, max: i64) -> Self {
        self.criteria.prep_time = TimeRange::new(min, max);
        self
    }

    pub fn cook_time(mut self, min: i64, max: i64) -> Self {
        self.criteria.cook_time = TimeRange::new(min, max);
        self
    }

    pub fn ingredients(mut self, query: impl Into<String>) -> Self {
        self.criteria.ingredient_query = query.into();
        self
    }

    pub fn build(self) -> FilterCriteria {
        self.criteria
    }
}
