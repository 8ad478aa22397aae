mod config;
mod family_cmd;
mod leftovers_cmd;
mod menu_cmd;
mod metrics_cmd;
mod products_cmd;
mod receipt_cmd;
mod recommendations_cmd;

use clap::{Parser, Subcommand};

use larder_core::genai::OpenAiGenerator;
use larder_db::pool;

use config::LarderConfig;

#[derive(Parser)]
#[command(name = "larder", about = "Household meal-planning assistant")]
struct Cli {
    /// Database URL (overrides LARDER_DATABASE_URL env var)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a larder config file (no database required)
    Init {
        /// PostgreSQL connection URL
        #[arg(long, default_value = "postgresql://localhost:5432/larder")]
        db_url: String,
        /// API key for the generation model (can also come from env vars)
        #[arg(long)]
        openai_api_key: Option<String>,
        /// Model name for the generation gateway
        #[arg(long)]
        openai_model: Option<String>,
        /// Base URL of an OpenAI-compatible endpoint
        #[arg(long)]
        openai_base_url: Option<String>,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Initialize the larder database (create if absent, run migrations)
    DbInit,
    /// Family profile management
    Family {
        #[command(subcommand)]
        command: FamilyCommands,
    },
    /// Receipt ingestion
    Receipt {
        #[command(subcommand)]
        command: ReceiptCommands,
    },
    /// Purchase log management
    Products {
        #[command(subcommand)]
        command: ProductCommands,
    },
    /// Leftover log management
    Leftovers {
        #[command(subcommand)]
        command: LeftoverCommands,
    },
    /// Weekly menu
    Menu {
        #[command(subcommand)]
        command: MenuCommands,
    },
    /// Waste/savings metrics
    Metrics {
        #[command(subcommand)]
        command: MetricsCommands,
    },
    /// Stored recommendations
    Recommendations {
        #[command(subcommand)]
        command: RecommendationCommands,
    },
}

#[derive(Subcommand)]
pub enum FamilyCommands {
    /// Submit the family profile (members, restrictions, prohibited dishes)
    Submit {
        /// Path to a JSON file with the onboarding payload
        #[arg(long)]
        file: String,
    },
}

#[derive(Subcommand)]
pub enum ReceiptCommands {
    /// Extract products from a receipt image and append them to the log
    Process {
        /// Path to the receipt image (jpeg/png/webp)
        image: String,
    },
}

#[derive(Subcommand)]
pub enum ProductCommands {
    /// Append user-validated products
    Submit {
        /// Path to a JSON array of products
        #[arg(long)]
        file: String,
    },
    /// Append products with their assigned categories
    Categorize {
        /// Path to a JSON array of categorized products
        #[arg(long)]
        file: String,
    },
}

#[derive(Subcommand)]
pub enum LeftoverCommands {
    /// Log leftovers and refresh recommendations
    Submit {
        /// Path to a JSON array of leftovers
        #[arg(long)]
        file: String,
    },
}

#[derive(Subcommand)]
pub enum MenuCommands {
    /// Generate a weekly menu from the stored family profile and products
    Generate,
    /// Print the stored weekly menu
    Show,
}

#[derive(Subcommand)]
pub enum MetricsCommands {
    /// Generate waste/savings metrics and recommendations
    Generate,
    /// Print the most recent metric rows
    Show,
}

#[derive(Subcommand)]
pub enum RecommendationCommands {
    /// Print the stored recommendations
    Show,
}

/// Execute the `larder init` command: write config file.
fn cmd_init(
    db_url: &str,
    openai_api_key: Option<String>,
    openai_model: Option<String>,
    openai_base_url: Option<String>,
    force: bool,
) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let openai = if openai_api_key.is_some() || openai_model.is_some() || openai_base_url.is_some()
    {
        Some(config::OpenAiSection {
            api_key: openai_api_key,
            model: openai_model,
            base_url: openai_base_url,
        })
    } else {
        None
    };

    let cfg = config::ConfigFile {
        database: config::DatabaseSection {
            url: db_url.to_string(),
        },
        openai,
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  database.url = {db_url}");
    println!();
    println!("Next: run `larder db-init` to create and migrate the database.");

    Ok(())
}

/// Execute the `larder db-init` command: create database and run migrations.
async fn cmd_db_init(cli_db_url: Option<&str>) -> anyhow::Result<()> {
    let resolved = LarderConfig::resolve(cli_db_url)?;

    println!("Initializing larder database...");

    // 1. Create the database if it does not exist.
    pool::ensure_database_exists(&resolved.db_config).await?;

    // 2. Connect to the target database.
    let db_pool = pool::create_pool(&resolved.db_config).await?;

    // 3. Run migrations.
    pool::run_migrations(&db_pool).await?;

    // 4. Print success with table counts.
    let counts = pool::table_counts(&db_pool).await?;
    println!("Database ready. Tables:");
    for (table, count) in &counts {
        println!("  {table}: {count} rows");
    }

    // 5. Clean shutdown.
    db_pool.close().await;

    println!("larder db-init complete.");
    Ok(())
}

/// Build the generation adapter from resolved configuration.
fn build_generator() -> anyhow::Result<OpenAiGenerator> {
    let openai_config = config::resolve_openai()?;
    Ok(OpenAiGenerator::new(openai_config))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            db_url,
            openai_api_key,
            openai_model,
            openai_base_url,
            force,
        } => {
            cmd_init(&db_url, openai_api_key, openai_model, openai_base_url, force)?;
        }
        Commands::DbInit => {
            cmd_db_init(cli.database_url.as_deref()).await?;
        }
        Commands::Family { command } => {
            let resolved = LarderConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let generator = build_generator()?;
            let result = match command {
                FamilyCommands::Submit { file } => {
                    family_cmd::run_family_submit(&db_pool, &generator, &file).await
                }
            };
            db_pool.close().await;
            result?;
        }
        Commands::Receipt { command } => {
            let resolved = LarderConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let generator = build_generator()?;
            let result = match command {
                ReceiptCommands::Process { image } => {
                    receipt_cmd::run_receipt_process(&db_pool, &generator, &image).await
                }
            };
            db_pool.close().await;
            result?;
        }
        Commands::Products { command } => {
            let resolved = LarderConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = match command {
                ProductCommands::Submit { file } => {
                    products_cmd::run_products_submit(&db_pool, &file).await
                }
                ProductCommands::Categorize { file } => {
                    products_cmd::run_products_categorize(&db_pool, &file).await
                }
            };
            db_pool.close().await;
            result?;
        }
        Commands::Leftovers { command } => {
            let resolved = LarderConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let generator = build_generator()?;
            let result = match command {
                LeftoverCommands::Submit { file } => {
                    leftovers_cmd::run_leftovers_submit(&db_pool, &generator, &file).await
                }
            };
            db_pool.close().await;
            result?;
        }
        Commands::Menu { command } => {
            let resolved = LarderConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = match command {
                MenuCommands::Generate => {
                    let generator = build_generator()?;
                    menu_cmd::run_menu_generate(&db_pool, &generator).await
                }
                MenuCommands::Show => menu_cmd::run_menu_show(&db_pool).await,
            };
            db_pool.close().await;
            result?;
        }
        Commands::Metrics { command } => {
            let resolved = LarderConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = match command {
                MetricsCommands::Generate => {
                    let generator = build_generator()?;
                    metrics_cmd::run_metrics_generate(&db_pool, &generator).await
                }
                MetricsCommands::Show => metrics_cmd::run_metrics_show(&db_pool).await,
            };
            db_pool.close().await;
            result?;
        }
        Commands::Recommendations { command } => {
            let resolved = LarderConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = match command {
                RecommendationCommands::Show => {
                    recommendations_cmd::run_recommendations_show(&db_pool).await
                }
            };
            db_pool.close().await;
            result?;
        }
    }

    Ok(())
}
