use anyhow::Result;
use clap::{Parser, Subcommand};
use dinnerwheel::config::Config;
use dinnerwheel::storage::JsonFileStore;
use dinnerwheel_collection::{Collection, ListKind, migrate_items, resolve_index};
use dinnerwheel_mealplan::Planner;
use dinnerwheel_shared::{Item, MealType, PersistentStore, PlanDay, keys};
use rand::Rng;

/// Largest batch a single draw may request.
const MAX_DRAW_COUNT: usize = 20;

/// dinnerwheel - randomized dinner picking and meal planning
#[derive(Parser)]
#[command(name = "dinnerwheel")]
#[command(about = "Keep a dinner pool and draw from it", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a dinner to the pool
    Add { name: String },
    /// List the pool (or the generated history)
    List {
        #[arg(long)]
        generated: bool,
    },
    /// Remove an item by id
    Remove {
        id: String,
        #[arg(long)]
        generated: bool,
    },
    /// Toggle the pin flag on an item
    Pin {
        id: String,
        #[arg(long)]
        generated: bool,
    },
    /// Empty a whole list
    Clear {
        #[arg(long)]
        generated: bool,
    },
    /// Search the pool by name
    Search { query: String },
    /// Draw random dinners and record them in the history
    Draw {
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Allow names already in the history to be drawn again
        #[arg(long)]
        allow_duplicates: bool,
    },
    /// Spin the wheel once and record the selection
    Spin,
    /// Show collection totals, top picks and recent generation history
    Stats,
    /// Meal plan operations
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
}

#[derive(Subcommand)]
enum PlanCommands {
    /// Generate a fresh meal plan
    Generate {
        #[arg(long, default_value_t = 3)]
        days: usize,
    },
    /// Redraw a single slot of the current plan (day is 1-based)
    Regenerate { day: usize, meal: String },
    /// Print the current plan
    Show,
    /// Save the current plan under a name
    Save { name: String },
    /// List saved plans
    List,
    /// Load a saved plan by id
    Load { id: String },
    /// Delete a saved plan by id
    Delete { id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    dinnerwheel::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Add { name } => add_command(&config, &name),
        Commands::List { generated } => list_command(&config, generated),
        Commands::Remove { id, generated } => remove_command(&config, &id, generated),
        Commands::Pin { id, generated } => pin_command(&config, &id, generated),
        Commands::Clear { generated } => clear_command(&config, generated),
        Commands::Search { query } => search_command(&config, &query),
        Commands::Draw {
            count,
            allow_duplicates,
        } => draw_command(&config, count, allow_duplicates),
        Commands::Spin => spin_command(&config),
        Commands::Stats => stats_command(&config),
        Commands::Plan { command } => plan_command(&config, command),
    }
}

fn open_collection(config: &Config) -> Result<Collection<JsonFileStore>> {
    let store = JsonFileStore::open(&config.storage.path)?;
    Ok(Collection::load(store)?)
}

fn list_kind(generated: bool) -> ListKind {
    if generated {
        ListKind::Generated
    } else {
        ListKind::Pool
    }
}

fn print_items(items: &[Item]) {
    if items.is_empty() {
        println!("(empty)");
        return;
    }
    for item in items {
        let pin = if item.pinned { "*" } else { " " };
        println!("{pin} {}  {}", item.id, item.name);
    }
}

fn add_command(config: &Config, name: &str) -> Result<()> {
    let mut collection = open_collection(config)?;
    let item = collection.add(name)?;
    println!("Added {}", item.name);
    Ok(())
}

fn list_command(config: &Config, generated: bool) -> Result<()> {
    let collection = open_collection(config)?;
    let items = match list_kind(generated) {
        ListKind::Pool => collection.pool(),
        ListKind::Generated => collection.generated(),
    };
    print_items(items);
    Ok(())
}

fn remove_command(config: &Config, id: &str, generated: bool) -> Result<()> {
    let mut collection = open_collection(config)?;
    collection.remove(id, list_kind(generated))?;
    Ok(())
}

fn pin_command(config: &Config, id: &str, generated: bool) -> Result<()> {
    let mut collection = open_collection(config)?;
    collection.toggle_pin(id, list_kind(generated))?;
    Ok(())
}

fn clear_command(config: &Config, generated: bool) -> Result<()> {
    let mut collection = open_collection(config)?;
    collection.clear(list_kind(generated))?;
    Ok(())
}

fn search_command(config: &Config, query: &str) -> Result<()> {
    let collection = open_collection(config)?;
    let hits: Vec<Item> = collection.search(query).into_iter().cloned().collect();
    print_items(&hits);
    Ok(())
}

#[tracing::instrument(skip(config))]
fn draw_command(config: &Config, count: usize, allow_duplicates: bool) -> Result<()> {
    let mut collection = open_collection(config)?;
    let count = count.clamp(1, MAX_DRAW_COUNT);

    let drawn = collection.generate(count, allow_duplicates, &mut rand::rng())?;
    for item in &drawn {
        println!("{}", item.name);
    }

    Ok(())
}

/// Spin policy: 2 to 5 full turns plus a random offset. The resolver only
/// ever sees the final angle.
#[tracing::instrument(skip(config))]
fn spin_command(config: &Config) -> Result<()> {
    let mut collection = open_collection(config)?;

    let mut rng = rand::rng();
    let turns: f64 = rng.random_range(2.0..5.0);
    let final_angle = turns * std::f64::consts::TAU;

    let index = resolve_index(final_angle, collection.pool().len())?;
    let name = collection.pool()[index].name.clone();
    collection.record_generated(&name)?;

    println!("Tonight's dinner: {name}");
    Ok(())
}

fn stats_command(config: &Config) -> Result<()> {
    let collection = open_collection(config)?;
    let stats = collection.stats();

    println!("Dinners in pool:  {}", stats.total_dinners);
    println!("Dinners generated: {}", stats.total_generated);

    if !stats.top_generated.is_empty() {
        println!("Most generated:");
        for entry in &stats.top_generated {
            println!("  {:>3}x {}", entry.count, entry.name);
        }
    }
    if !stats.generation_history.is_empty() {
        println!("Recent activity:");
        for entry in &stats.generation_history {
            println!("  {}  {}", entry.date, entry.count);
        }
    }

    Ok(())
}

fn plan_command(config: &Config, command: PlanCommands) -> Result<()> {
    let store = JsonFileStore::open(&config.storage.path)?;
    let dinners: Vec<String> = migrate_items(store.get(keys::DINNERS)?.as_deref())
        .into_iter()
        .map(|item| item.name)
        .collect();
    let mut planner = Planner::load(store, config.first_day())?;

    match command {
        PlanCommands::Generate { days } => {
            let outcome = planner.generate(days, &dinners, &mut rand::rng())?;
            if outcome.dinner_pool_was_empty {
                println!("(no dinners of your own yet; using the built-in options)");
            }
            print_plan(planner.plan());
        }
        PlanCommands::Regenerate { day, meal } => {
            let meal: MealType = meal
                .parse()
                .map_err(|_| anyhow::anyhow!("meal must be breakfast, lunch or dinner"))?;
            let index = day
                .checked_sub(1)
                .ok_or_else(|| anyhow::anyhow!("day is 1-based"))?;
            let changed = planner.regenerate_slot(index, meal, &dinners, &mut rand::rng())?;
            println!(
                "{}: {} / {} / {}",
                changed.day, changed.breakfast, changed.lunch, changed.dinner
            );
        }
        PlanCommands::Show => print_plan(planner.plan()),
        PlanCommands::Save { name } => {
            let reference = planner.save_plan(&name)?;
            println!("Saved {} ({})", reference.name, reference.id);
        }
        PlanCommands::List => {
            if planner.saved_plans().is_empty() {
                println!("(no saved plans)");
            }
            for reference in planner.saved_plans() {
                println!("{}  {}", reference.id, reference.name);
            }
        }
        PlanCommands::Load { id } => {
            planner.load_plan(&id)?;
            print_plan(planner.plan());
        }
        PlanCommands::Delete { id } => {
            planner.delete_plan(&id)?;
        }
    }

    Ok(())
}

fn print_plan(plan: &[PlanDay]) {
    if plan.is_empty() {
        println!("(no plan yet; run `dinnerwheel plan generate`)");
        return;
    }
    for day in plan {
        println!("{}", day.day);
        println!("  breakfast: {}", day.breakfast);
        println!("  lunch:     {}", day.lunch);
        println!("  dinner:    {}", day.dinner);
    }
}
