use clap::Parser;
use kondate::data::Recipe;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use std::fs;

/// A CLI tool to generate a random recipe catalog for kondate
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_recipes.json")]
    output: String,

    /// The number of recipes to generate
    #[arg(short, long, default_value_t = 50)]
    count: usize,

    /// The minimum number of ingredients per recipe
    #[arg(long, default_value_t = 3)]
    min_ingredients: usize,

    /// The maximum number of ingredients per recipe
    #[arg(long, default_value_t = 8)]
    max_ingredients: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

const CUISINES: &[&str] = &[
    "Italian", "Mexican", "Japanese", "Indian", "French", "Thai", "American",
];
const MEAL_TYPES: &[&str] = &["Breakfast", "Lunch", "Dinner", "Snack", "Dessert"];
const DIFFICULTIES: &[&str] = &["Easy", "Medium", "Hard"];

const DISHES: &[&str] = &[
    "Stew", "Bake", "Salad", "Curry", "Soup", "Skillet", "Bowl", "Tart", "Stir-Fry",
];

// Deliberately includes look-alikes ("egg" / "eggplant", "pepper" / "bell pepper")
// so word-boundary search can be exercised by hand.
const INGREDIENTS: &[&str] = &[
    "Egg",
    "Egg yolk",
    "Eggplant",
    "Flour",
    "Chicken breast",
    "Garlic",
    "Onion",
    "Olive oil",
    "Tomato",
    "Basil",
    "Rice",
    "Soy sauce",
    "Ginger",
    "Coconut milk",
    "Pepper",
    "Bell pepper",
    "Butter",
    "Milk",
    "Sugar",
    "Cheddar cheese",
    "Black beans",
    "Tortilla",
    "Lime",
    "Cilantro",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Add validation to ensure min is not greater than max
    if cli.min_ingredients > cli.max_ingredients {
        eprintln!(
            "Error: --min-ingredients ({}) cannot be greater than --max-ingredients ({})",
            cli.min_ingredients, cli.max_ingredients
        );
        std::process::exit(1);
    }
    if cli.max_ingredients > INGREDIENTS.len() {
        eprintln!(
            "Error: --max-ingredients cannot exceed the {} known ingredients",
            INGREDIENTS.len()
        );
        std::process::exit(1);
    }

    println!(
        "Generating {} recipe(s) ({} to {} ingredients each)...",
        cli.count, cli.min_ingredients, cli.max_ingredients
    );

    let recipes: Vec<Recipe> = (0..cli.count)
        .map(|i| generate_recipe(&mut rng, i, cli.min_ingredients, cli.max_ingredients))
        .collect();

    let json_output = serde_json::to_string_pretty(&recipes)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved {} recipe(s) to '{}'",
        recipes.len(),
        cli.output
    );

    Ok(())
}

/// Generates one recipe with random attributes and a random ingredient subset.
fn generate_recipe(
    rng: &mut StdRng,
    index: usize,
    min_ingredients: usize,
    max_ingredients: usize,
) -> Recipe {
    let cuisine = pick(rng, CUISINES);
    let dish = pick(rng, DISHES);

    let count = rng.random_range(min_ingredients..=max_ingredients);
    let mut ingredients: Vec<String> = INGREDIENTS.iter().map(|s| s.to_string()).collect();
    ingredients.shuffle(rng);
    ingredients.truncate(count);

    let image_url = rng
        .random_bool(0.5)
        .then(|| format!("https://example.com/images/recipe-{}.jpg", index + 1));

    Recipe::new(
        format!("{} {} #{}", cuisine, dish, index + 1),
        cuisine,
        pick(rng, MEAL_TYPES),
        pick(rng, DIFFICULTIES),
        rng.random_range(0..=60),
        rng.random_range(0..=90),
        ingredients,
        image_url,
        format!("Prepare the ingredients, then cook the {} until done.", dish.to_lowercase()),
    )
}

fn pick(rng: &mut StdRng, values: &[&'static str]) -> &'static str {
    values.choose(rng).copied().unwrap_or_default()
}
