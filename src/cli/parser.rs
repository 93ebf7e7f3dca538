use crate::export::ExportFormat;
use crate::models::ContractType;
use clap::{Parser, Subcommand};

/// Command-line interface definition for household
/// Household notebook backed by SQLite, with an 88-days visa counter
#[derive(Parser)]
#[command(
    name = "household",
    version = env!("CARGO_PKG_VERSION"),
    about = "Household notebook: lists, recipes, English notebook and 88-days counter",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration (API key masked)")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Count working-holiday days toward the 88-day target
    Days {
        #[command(subcommand)]
        action: DaysAction,
    },

    /// Shopping list
    Shop {
        #[command(subcommand)]
        action: ShopAction,
    },

    /// Home inventory
    Inventory {
        #[command(subcommand)]
        action: InventoryAction,
    },

    /// Todo list
    Todo {
        #[command(subcommand)]
        action: TodoAction,
    },

    /// Recipe suggestions from ingredients
    Recipe {
        #[command(subcommand)]
        action: RecipeAction,
    },

    /// French / English vocabulary notebook
    Notebook {
        #[command(subcommand)]
        action: NotebookAction,
    },
}

#[derive(Subcommand)]
pub enum DaysAction {
    /// Submit a work period and store the number of days it counts for
    Add {
        /// Person the period belongs to (e.g. theo, carla)
        person: String,

        #[arg(long = "hours", help = "Hours worked in the period")]
        hours: Option<String>,

        #[arg(long = "days", help = "Days worked in the period")]
        days: Option<String>,

        #[arg(long = "contract", value_enum, default_value = "casual")]
        contract: ContractType,

        #[arg(long = "from", help = "First day of the period (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", help = "Last day of the period (YYYY-MM-DD)")]
        to: Option<String>,
    },

    /// Show a person's records, total and progress
    List { person: String },

    /// Show every person with a running total
    People,

    /// Delete one record and recompute the total
    Del { person: String, id: i64 },

    /// Export a person's records
    Export {
        person: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ShopAction {
    /// Show the shopping list
    List,
    /// Add an item
    Add { name: Vec<String> },
    /// Remove an item by id
    Del { id: i64 },
    /// Empty the list
    Reset,
}

#[derive(Subcommand)]
pub enum InventoryAction {
    /// Show the inventory
    List {
        #[arg(long, short, help = "Case-insensitive filter on the item name")]
        search: Option<String>,
    },
    /// Add an item with quantity 1
    Add { name: Vec<String> },
    /// Increase an item's quantity by one
    Inc { id: i64 },
    /// Decrease an item's quantity by one (removed at zero)
    Dec { id: i64 },
}

#[derive(Subcommand)]
pub enum TodoAction {
    /// Show the tasks
    List,
    /// Add a task
    Add { text: Vec<String> },
    /// Mark a task done / not done
    Toggle { id: i64 },
    /// Remove a task
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum RecipeAction {
    /// Show stored recipes, newest first
    List,
    /// Generate a recipe from ingredients and store it
    Generate {
        #[arg(required = true)]
        ingredients: Vec<String>,
    },
    /// Forget every stored recipe
    Reset,
}

#[derive(Subcommand)]
pub enum NotebookAction {
    /// List categories
    Categories,
    /// Create a category
    CategoryAdd { name: String },
    /// List entries
    List {
        #[arg(long, short)]
        category: Option<i64>,

        #[arg(long, short, help = "Search French and English text")]
        search: Option<String>,
    },
    /// Add an entry
    Add {
        #[arg(long = "fr")]
        french: String,

        #[arg(long = "en")]
        english: String,

        #[arg(long, short)]
        category: Option<i64>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Replace an entry's fields
    Edit {
        id: i64,

        #[arg(long = "fr")]
        french: String,

        #[arg(long = "en")]
        english: String,

        #[arg(long, short)]
        category: Option<i64>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove an entry
    Del { id: i64 },
}
