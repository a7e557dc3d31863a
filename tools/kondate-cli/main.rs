use clap::{ArgAction, Parser};
use kondate::prelude::*;
use std::io::{self, Write};
use std::path::PathBuf;

/// Filter a recipe catalog and browse the matches
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the recipe catalog JSON file (overrides the configured data_file)
    recipe_path: Option<PathBuf>,

    /// Path to a TOML configuration file (defaults to ./kondate.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cuisine to keep, or "Any"
    #[arg(long, default_value = ANY)]
    cuisine: String,

    /// Meal type to keep, or "Any"
    #[arg(long, default_value = ANY)]
    meal_type: String,

    /// Difficulty to keep, or "Any"
    #[arg(long, default_value = ANY)]
    difficulty: String,

    /// Minimum preparation time in minutes
    #[arg(long, allow_negative_numbers = true)]
    prep_min: Option<i64>,

    /// Maximum preparation time in minutes (defaults to the catalog maximum)
    #[arg(long, allow_negative_numbers = true)]
    prep_max: Option<i64>,

    /// Minimum cooking time in minutes
    #[arg(long, allow_negative_numbers = true)]
    cook_min: Option<i64>,

    /// Maximum cooking time in minutes (defaults to the catalog maximum)
    #[arg(long, allow_negative_numbers = true)]
    cook_max: Option<i64>,

    /// Ingredients you have, comma-separated (e.g. "chicken, onion, garlic")
    #[arg(long, default_value = "")]
    ingredients: String,

    /// Show one random recipe from the whole catalog instead of filtering
    #[arg(long)]
    surprise: bool,

    /// List the available cuisines, meal types and difficulties, then exit
    #[arg(long)]
    options: bool,

    /// Print every match instead of the first page
    #[arg(long)]
    all: bool,

    /// Print matches as JSON
    #[arg(long)]
    json: bool,

    /// Show why each recipe matched
    #[arg(long)]
    explain: bool,

    /// Recipes per page (overrides the configured page_size)
    #[arg(long)]
    page_size: Option<usize>,

    /// Run in interactive mode to be prompted for filters
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_file(path.clone()),
        None => AppConfig::load(),
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to load configuration: {}", e)));

    if let Some(path) = &cli.recipe_path {
        config.data_file = path.clone();
    }
    if let Some(page_size) = cli.page_size {
        if page_size == 0 {
            exit_with_error("--page-size must be at least 1");
        }
        config.page_size = page_size;
    }

    let (store, load_error) = RecipeStore::load_or_empty(&config.data_file);
    if let Some(e) = load_error {
        eprintln!("Warning: {}", e);
        eprintln!(
            "No recipes loaded. Please ensure '{}' exists and is correctly formatted.",
            config.data_file.display()
        );
    }

    if cli.human {
        run_interactive(&store, &config);
    } else {
        run_non_interactive(cli, &store, &config);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// The initial time ranges: zero up to the catalog maximum, or the configured
/// fallback when the catalog is empty.
fn default_bounds(store: &RecipeStore, config: &AppConfig) -> TimeBounds {
    store.time_bounds().unwrap_or(TimeBounds {
        max_prep_minutes: config.fallback_prep_max,
        max_cook_minutes: config.fallback_cook_max,
    })
}

/// Runs the CLI in non-interactive mode, taking all filters from the command line.
fn run_non_interactive(cli: Cli, store: &RecipeStore, config: &AppConfig) {
    if cli.options {
        print_options(store);
        return;
    }

    if cli.surprise {
        match store.pick_random() {
            Ok(recipe) => {
                let session = BrowseSession::from_pick(recipe, config.page_size);
                print_session(&session, None, cli.json, true);
            }
            Err(e) => eprintln!("Warning: {}", e),
        }
        return;
    }

    let bounds = default_bounds(store, config);
    let criteria = FilterCriteria::builder()
        .cuisine(cli.cuisine)
        .meal_type(cli.meal_type)
        .difficulty(cli.difficulty)
        .prep_time(
            cli.prep_min.unwrap_or(0),
            cli.prep_max.unwrap_or(i64::from(bounds.max_prep_minutes)),
        )
        .cook_time(
            cli.cook_min.unwrap_or(0),
            cli.cook_max.unwrap_or(i64::from(bounds.max_cook_minutes)),
        )
        .ingredients(cli.ingredients)
        .build();

    let plan = FilterPlan::compile(&criteria);
    let session = BrowseSession::from_results(plan.apply(store.recipes()), config.page_size);

    let explain = cli.explain.then_some(&plan);
    print_session(&session, explain, cli.json, cli.all);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(store: &RecipeStore, config: &AppConfig) {
    println!("--- Kondate Interactive Mode ---");

    if store.is_empty() {
        println!("The recipe catalog is empty; every search will come back empty.");
    }

    let index = AttributeIndex::build(store);
    let bounds = default_bounds(store, config);
    let mut criteria = FilterCriteria::spanning(bounds);
    let mut session: Option<BrowseSession> = None;

    loop {
        println!("\nWhat would you like to do?");
        println!("  f: Set filters");
        println!("  r: Recommend recipes");
        println!("  s: Surprise me!");
        if session.as_ref().is_some_and(|s| s.has_more()) {
            println!("  m: Show more recipes");
        }
        println!("  q: Quit");

        let choice = prompt_or_exit("Enter choice", Some("r"));
        match choice.trim() {
            "f" => criteria = prompt_for_criteria(&index, bounds),
            "r" => {
                let results = filter(store.recipes(), &criteria);
                let fresh = BrowseSession::from_results(results, config.page_size);
                if fresh.is_empty() {
                    println!("No recipes found matching your criteria. Try adjusting your filters!");
                } else {
                    println!("Found {} matching recipes.", fresh.total());
                    print_recipes(fresh.visible());
                }
                session = Some(fresh);
            }
            "s" => match store.pick_random() {
                Ok(recipe) => {
                    let picked = BrowseSession::from_pick(recipe, config.page_size);
                    print_recipes(picked.visible());
                    session = Some(picked);
                }
                Err(_) => println!("No recipes to surprise you with!"),
            },
            "m" => match session.as_mut() {
                Some(current) if current.has_more() => {
                    let more = current.show_more().to_vec();
                    print_recipes(&more);
                    println!(
                        "Showing {} of {} recipes.",
                        current.display_count().min(current.total()),
                        current.total()
                    );
                }
                _ => println!("Nothing more to show."),
            },
            "q" => break,
            other => println!("Invalid choice '{}'.", other),
        }
    }
}

/// Prompts for every filter, offering the catalog's values as choices.
fn prompt_for_criteria(index: &AttributeIndex, bounds: TimeBounds) -> FilterCriteria {
    let mut builder = FilterCriteria::builder();

    for field in CategoricalField::ALL {
        let values = index.values(field);
        println!("\n{}: {}", field.label(), values.join(", "));
        let value = loop {
            let input = prompt_or_exit(&format!("Select {}", field.label()), Some(ANY));
            if index.contains(field, &input) {
                break input;
            }
            println!("'{}' is not one of the listed values.", input);
        };
        builder = builder.choice(field, value);
    }

    println!("\nTime Constraints (minutes)");
    let prep_min = prompt_for_number("Minimum preparation time", 0);
    let prep_max = prompt_for_number(
        "Maximum preparation time",
        i64::from(bounds.max_prep_minutes),
    );
    let cook_min = prompt_for_number("Minimum cooking time", 0);
    let cook_max = prompt_for_number("Maximum cooking time", i64::from(bounds.max_cook_minutes));

    println!("\nIngredient Search");
    let ingredients = prompt_or_exit("Ingredients I have (comma-separated)", Some(""));

    builder
        .prep_time(prep_min, prep_max)
        .cook_time(cook_min, cook_max)
        .ingredients(ingredients)
        .build()
}

fn print_options(store: &RecipeStore) {
    let index = AttributeIndex::build(store);
    for field in CategoricalField::ALL {
        println!("{}: {}", field.label(), index.values(field).join(", "));
    }
    match store.time_bounds() {
        Some(bounds) => {
            println!("Preparation Time: 0 - {} minutes", bounds.max_prep_minutes);
            println!("Cooking Time: 0 - {} minutes", bounds.max_cook_minutes);
        }
        None => println!("No recipes loaded."),
    }
}

fn print_session(session: &BrowseSession, explain: Option<&FilterPlan>, json: bool, all: bool) {
    let recipes = if all {
        session.results()
    } else {
        session.visible()
    };

    if json {
        match serde_json::to_string_pretty(recipes) {
            Ok(output) => println!("{}", output),
            Err(e) => exit_with_error(&format!("Failed to serialize results: {}", e)),
        }
        return;
    }

    if session.is_empty() {
        println!("No recipes found matching your criteria. Try adjusting your filters!");
        return;
    }

    println!("Found {} matching recipes.\n", session.total());
    for recipe in recipes {
        print_recipe(recipe);
        if let Some(reason) = explain.and_then(|plan| plan.explain(recipe)) {
            println!("Matched: {}", reason);
        }
        println!("---");
    }

    let hidden = session.total() - recipes.len();
    if hidden > 0 {
        println!("... and {} more. Use --all to show every match.", hidden);
    }
}

fn print_recipes(recipes: &[&Recipe]) {
    for recipe in recipes {
        println!();
        print_recipe(recipe);
        println!("---");
    }
}

fn print_recipe(recipe: &Recipe) {
    println!("## {}", recipe.name);
    if let Some(url) = &recipe.image_url {
        println!("Image: {}", url);
    }
    println!("Cuisine: {}", recipe.cuisine);
    println!("Meal Type: {}", recipe.meal_type);
    println!("Difficulty: {}", recipe.difficulty);
    println!("Prep Time: {} minutes", recipe.prep_time_minutes);
    println!("Cook Time: {} minutes", recipe.cook_time_minutes);
    println!("Ingredients: {}", recipe.ingredients.join(", "));
    println!("Instructions:\n{}", recipe.instructions);
}

fn prompt_for_number(prompt_text: &str, default: i64) -> i64 {
    loop {
        let input = prompt_or_exit(prompt_text, Some(&default.to_string()));
        match input.parse() {
            Ok(value) => return value,
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

fn prompt_or_exit(prompt_text: &str, default: Option<&str>) -> String {
    prompt_for_input(prompt_text, default)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read input: {}", e)))
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> io::Result<String> {
    let mut line = String::new();
    let default_prompt = default
        .filter(|d| !d.is_empty())
        .map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush()?;

    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        Ok(default.unwrap_or("").to_string())
    } else {
        Ok(trimmed)
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
