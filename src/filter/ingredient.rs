use crate::data::Recipe;
use log::debug;
use regex::{Regex, RegexBuilder};

/// The search terms extracted from a comma-separated ingredient query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientQuery {
    terms: Vec<String>,
}

impl IngredientQuery {
    /// Splits `raw` on commas, trims and lower-cases every term and discards
    /// the empty ones. A blank query, or one made only of commas and
    /// whitespace, yields no terms.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        let terms = raw
            .split(',')
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compiles every term into a word-boundary matcher.
    pub fn compile(&self) -> IngredientMatcher {
        let terms = self
            .terms
            .iter()
            .map(|term| IngredientTerm::new(term))
            .collect();
        IngredientMatcher { terms }
    }
}

/// One search term, matched literally as a whole word.
#[derive(Debug, Clone)]
pub struct IngredientTerm {
    term: String,
    pattern: TermPattern,
}

#[derive(Debug, Clone)]
enum TermPattern {
    Regex(Regex),
    /// Lower-cased needle for terms too large for the regex engine.
    Literal(String),
}

impl IngredientTerm {
    pub fn new(term: &str) -> Self {
        // Half boundaries only look outward: the term may itself start or end
        // with punctuation and still match when its neighbours are not word
        // characters.
        let source = format!(r"\b{{start-half}}{}\b{{end-half}}", regex::escape(term));
        let pattern = match RegexBuilder::new(&source).case_insensitive(true).build() {
            Ok(regex) => TermPattern::Regex(regex),
            Err(e) => {
                debug!(
                    "Ingredient term of {} bytes scanned without a regex: {}",
                    term.len(),
                    e
                );
                TermPattern::Literal(term.to_lowercase())
            }
        };
        Self {
            term: term.to_string(),
            pattern,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn matches(&self, ingredient: &str) -> bool {
        match &self.pattern {
            TermPattern::Regex(regex) => regex.is_match(ingredient),
            TermPattern::Literal(needle) => matches_whole_word(needle, ingredient),
        }
    }

    /// The first of the recipe's normalized ingredients this term matches.
    pub fn find_in<'r>(&self, recipe: &'r Recipe) -> Option<&'r str> {
        recipe
            .ingredients_normalized()
            .iter()
            .map(String::as_str)
            .find(|ingredient| self.matches(ingredient))
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Finds `needle` in the lower-cased `ingredient` with no word character on
/// either side of the occurrence.
fn matches_whole_word(needle: &str, ingredient: &str) -> bool {
    let haystack = ingredient.to_lowercase();
    haystack.match_indices(needle).any(|(start, found)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + found.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

/// Matches recipes against all terms of a query: every term must match at
/// least one of the recipe's ingredients.
#[derive(Debug, Clone, Default)]
pub struct IngredientMatcher {
    terms: Vec<IngredientTerm>,
}

impl IngredientMatcher {
    pub fn terms(&self) -> &[IngredientTerm] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.terms.iter().all(|term| term.find_in(recipe).is_some())
    }
}
