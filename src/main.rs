use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs;

use campusmarket::app::{App, SubmitOutcome};
use campusmarket::config::Config;
use campusmarket::logic::filters::PriceBucket;
use campusmarket::logic::validation::{FieldError, ListingForm};
use campusmarket::model::{Category, Condition, Listing, ListingStatus, Tab};
use campusmarket::utils::{log_debug, set_debug_mode};
use campusmarket::SortDirective;

/// Campus Marketplace CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp-dir log file
    #[arg(short, long)]
    debug: bool,

    /// Browse the bundled sample catalog instead of the backend
    #[arg(long)]
    sample: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse marketplace listings with search, filters, and sort
    Browse {
        /// Free-text query matched against name, seller, and location
        #[arg(short, long)]
        query: Option<String>,

        /// Category filter; repeat for multiple categories
        #[arg(long = "category", value_parser = parse_category)]
        categories: Vec<Category>,

        /// Condition filter; repeat for multiple conditions
        #[arg(long = "condition", value_parser = parse_condition)]
        conditions: Vec<Condition>,

        /// Price bucket (under-25, 25-50, 50-100, over-100); repeatable
        #[arg(long = "bucket", value_parser = parse_bucket)]
        buckets: Vec<PriceBucket>,

        /// Minimum price (inclusive, used with --max)
        #[arg(long)]
        min: Option<f64>,

        /// Maximum price (inclusive, used with --min)
        #[arg(long)]
        max: Option<f64>,

        /// Sort: date-asc, date-desc, low-to-high, high-to-low
        #[arg(short, long, value_parser = parse_sort)]
        sort: Option<SortDirective>,
    },

    /// Show your own listings (previous items)
    Listings {
        /// Status filter (active, sold); repeatable
        #[arg(long = "status", value_parser = parse_status)]
        statuses: Vec<ListingStatus>,

        /// Sort: date-asc, date-desc, low-to-high, high-to-low
        #[arg(short, long, value_parser = parse_sort)]
        sort: Option<SortDirective>,
    },

    /// Post a new listing
    Post {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,

        #[arg(long, value_parser = parse_condition)]
        condition: Option<Condition>,

        /// Asking price; sanitized to digits and one decimal point
        #[arg(long)]
        price: String,

        #[arg(long)]
        negotiable: bool,
    },

    /// Create an account
    Signup {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        confirm_password: String,
    },

    /// Log in with existing credentials
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Show the wishlist tab
    Wishlist,

    /// Show the chats tab
    Chats,
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse()
}

fn parse_condition(s: &str) -> Result<Condition, String> {
    s.parse()
}

fn parse_bucket(s: &str) -> Result<PriceBucket, String> {
    s.parse()
}

fn parse_status(s: &str) -> Result<ListingStatus, String> {
    s.parse()
}

fn parse_sort(s: &str) -> Result<SortDirective, String> {
    s.parse()
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<std::path::PathBuf> {
    use std::path::PathBuf;

    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(p);
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/campusmarket/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("campusmarket").join("config.yaml");
        if config_path.exists() {
            return Ok(config_path);
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(local_config);
    }

    // No config found, provide helpful error
    let expected_path = if let Some(config_dir) = dirs::config_dir() {
        config_dir
            .join("campusmarket")
            .join("config.yaml")
            .display()
            .to_string()
    } else {
        "~/.config/campusmarket/config.yaml".to_string()
    };

    anyhow::bail!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Use --config <path> to specify a custom location.",
        expected_path
    )
}

fn print_listings(items: &[Listing], show_status: bool) {
    for item in items {
        let condition = item
            .condition
            .map(|c| c.as_str().to_string())
            .or_else(|| item.description.clone())
            .unwrap_or_default();
        let category = item.category.as_ref().map(|c| c.as_str()).unwrap_or("-");

        let mut line = format!(
            "[{}] {} {} ({}, {})",
            item.id, item.name, item.price, condition, category
        );
        if !item.seller.is_empty() {
            line.push_str(&format!("  {} @ {}", item.seller, item.location));
        }
        if !item.date_posted.is_empty() {
            line.push_str(&format!("  posted {}", item.date_posted));
        }
        if show_status {
            if let Some(status) = item.status {
                line.push_str(&format!("  [{}]", status.as_str()));
            }
        }
        println!("{}", line);
    }
}

fn print_no_results(app: &App) {
    println!("No items found");
    println!("Try adjusting your search terms or filter criteria to find what you're looking for.");
    if app.model.ui.is_narrowed() {
        println!("(run again without filters to see everything)");
    }
}

fn print_field_errors(errors: &[FieldError]) {
    for error in errors {
        eprintln!("  {}: {}", error.field, error.message);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    set_debug_mode(args.debug);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Determine config file path
    let config_path = get_config_path(args.config)?;

    if args.debug {
        log_debug(&format!("Loading config from: {:?}", config_path));
    }

    // Load configuration
    let config_str = fs::read_to_string(&config_path)?;
    let mut config: Config = serde_yaml::from_str(&config_str)?;

    // Override config with CLI flags
    if args.sample {
        config.use_sample_data = true;
    }

    let mut app = App::new(config).await?;

    if let Some(message) = &app.model.ui.load_error {
        eprintln!("{} (showing sample listings)", message);
    }

    match args.command {
        Command::Browse {
            query,
            categories,
            conditions,
            buckets,
            min,
            max,
            sort,
        } => {
            app.switch_tab(Tab::Buy);

            if let Some(query) = query {
                app.set_search_input(&query);
                app.commit_search();
            }

            // Drive the filter panel: open, edit the draft, apply
            app.open_filter_panel();
            for category in categories {
                app.toggle_draft_category(category);
            }
            for condition in conditions {
                app.toggle_draft_condition(condition);
            }
            for bucket in buckets {
                app.toggle_draft_bucket(bucket);
            }
            if let (Some(min), Some(max)) = (min, max) {
                app.set_draft_price_bounds(min, max);
            }
            app.set_draft_sort(sort);
            app.apply_filters();

            let view = app.derived_view();
            if view.is_empty() {
                print_no_results(&app);
            } else {
                print_listings(&view, false);
            }
        }

        Command::Listings { statuses, sort } => {
            app.switch_tab(Tab::Sell);

            app.open_filter_panel();
            for status in statuses {
                app.toggle_draft_status(status);
            }
            app.set_draft_sort(sort);
            app.apply_filters();

            let view = app.derived_view();
            if view.is_empty() {
                print_no_results(&app);
            } else {
                print_listings(&view, true);
            }
        }

        Command::Post {
            title,
            description,
            category,
            condition,
            price,
            negotiable,
        } => {
            let form = ListingForm {
                title,
                description,
                category,
                condition,
                price,
                negotiable,
            };

            match app.submit_listing(&form).await? {
                SubmitOutcome::Accepted => println!("Listing posted"),
                SubmitOutcome::Rejected(errors) => {
                    eprintln!("Listing not posted:");
                    print_field_errors(&errors);
                    std::process::exit(1);
                }
            }
        }

        Command::Signup {
            name,
            email,
            password,
            confirm_password,
        } => match app
            .submit_signup(&name, &email, &password, &confirm_password)
            .await?
        {
            SubmitOutcome::Accepted => println!("Account created"),
            SubmitOutcome::Rejected(errors) => {
                eprintln!("Signup blocked:");
                print_field_errors(&errors);
                std::process::exit(1);
            }
        },

        Command::Login { email, password } => match app.submit_login(&email, &password).await? {
            SubmitOutcome::Accepted => println!("Logged in"),
            SubmitOutcome::Rejected(errors) => {
                eprintln!("Login blocked:");
                print_field_errors(&errors);
                std::process::exit(1);
            }
        },

        Command::Wishlist => {
            app.switch_tab(Tab::Wishlist);
            if let Some((title, subtitle)) = App::placeholder_copy(Tab::Wishlist) {
                println!("{}", title);
                println!("{}", subtitle);
            }
        }

        Command::Chats => {
            app.switch_tab(Tab::Chats);
            if let Some((title, subtitle)) = App::placeholder_copy(Tab::Chats) {
                println!("{}", title);
                println!("{}", subtitle);
            }
        }
    }

    Ok(())
}
