use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, error, trace};

use portfolio::catalog::{category_options, Catalog, CategoryFilter, ProjectRecord, ProjectSummary};
use portfolio::config::SiteConfig;
use portfolio::contact::{validate, SubmissionPayload};
use portfolio::server::PortfolioServer;

/// Portfolio site backend
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "portfolio - Project catalog and contact API for the portfolio site", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (defaults to ./portfolio.toml when present)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to listen on (overrides configuration)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides configuration)
        #[arg(short = 'p', long)]
        port: Option<u16>,

        /// Catalog file to serve instead of the builtin projects
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// List projects, optionally filtered
    Projects {
        /// Category to restrict to (`all` or a category value)
        #[arg(long, default_value = "all")]
        category: String,

        /// Free-text search over titles, descriptions and tags
        #[arg(short = 's', long, default_value = "")]
        search: String,

        /// Reject unknown categories instead of ignoring them
        #[arg(long)]
        strict: bool,

        /// Print matching records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one project and the project that follows it
    Show {
        /// Project slug
        slug: String,
    },
    /// List the project categories
    Categories,
    /// Validate a contact form submission stored as JSON
    CheckContact {
        /// JSON file with name, email, subject, message and optional budget/timeline
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match SiteConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let log_level = match cli.verbose {
        0 => config.log_level.as_str(),
        1 => "debug",
        2 => "trace",
        _ => "trace,hyper=debug,tower=debug", // -vvv shows everything including dependencies
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(cli.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("portfolio started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            catalog,
        } => run_serve(config, host, port, catalog).await,
        Commands::Projects {
            category,
            search,
            strict,
            json,
        } => run_projects(&config, &category, &search, strict, json),
        Commands::Show { slug } => run_show(&config, &slug),
        Commands::Categories => {
            run_categories();
            Ok(())
        }
        Commands::CheckContact { file } => run_check_contact(&file),
    };

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run_serve(
    mut config: SiteConfig,
    host: Option<String>,
    port: Option<u16>,
    catalog: Option<PathBuf>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(catalog) = catalog {
        config.catalog.path = Some(catalog);
    }
    config.validate()?;

    let server = PortfolioServer::from_config(&config)?;
    server.start().await?;
    Ok(())
}

fn load_catalog(config: &SiteConfig) -> anyhow::Result<Catalog> {
    Catalog::load(config.catalog.path.as_deref()).context("Failed to load project catalog")
}

fn run_projects(
    config: &SiteConfig,
    category: &str,
    search: &str,
    strict: bool,
    json: bool,
) -> anyhow::Result<()> {
    let filter = if strict {
        CategoryFilter::parse_strict(category).map_err(|e| anyhow!(e))?
    } else {
        CategoryFilter::parse_lenient(category)
    };

    let catalog = load_catalog(config)?;
    let projects = catalog.filter(filter, search);

    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("No projects match the current filters.");
        return Ok(());
    }

    for project in projects {
        print_project_line(project);
    }
    Ok(())
}

fn print_project_line(project: &ProjectRecord) {
    println!(
        "{:<36} {:<22} {}",
        project.slug,
        project.category.as_str(),
        project.title
    );
}

fn run_show(config: &SiteConfig, slug: &str) -> anyhow::Result<()> {
    let catalog = load_catalog(config)?;
    let (project, next) = catalog.detail(slug)?;

    println!("{}", project.title);
    println!("  slug:     {}", project.slug);
    println!("  category: {}", project.category.label());
    println!("  client:   {}", project.client);
    println!("  duration: {}", project.duration);
    println!("  date:     {}", project.date);
    println!("  tags:     {}", project.tags.join(", "));
    for result in &project.results {
        println!("  {:<20} {}", result.metric, result.value);
    }

    let next = ProjectSummary::from(next);
    println!("Next project: {} ({})", next.title, next.slug);
    Ok(())
}

fn run_categories() {
    for option in category_options() {
        println!("{:<22} {}", option.value, option.label);
    }
}

fn run_check_contact(file: &Path) -> anyhow::Result<()> {
    let content =
        std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let payload = SubmissionPayload::from_slice(&content)
        .with_context(|| format!("{} is not a valid submission", file.display()))?;

    match validate(&payload) {
        Ok(normalized) => {
            println!("{}", serde_json::to_string_pretty(&normalized)?);
            Ok(())
        }
        Err(errors) => {
            for (field, message) in errors.messages() {
                println!("{field}: {message}");
            }
            Err(anyhow!("submission has {} invalid field(s)", errors.len()))
        }
    }
}
