use crate::data::Recipe;
use crate::error::PickError;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Picks one recipe uniformly at random from the full, unfiltered collection.
///
/// Takes the generator explicitly so callers (and tests) can seed it.
pub fn pick_random<'a, R>(recipes: &'a [Recipe], rng: &mut R) -> Result<&'a Recipe, PickError>
where
    R: Rng + ?Sized,
{
    recipes.choose(rng).ok_or(PickError::Empty)
}
