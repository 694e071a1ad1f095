//! Command-line interface for folio.
//!
//! Provides commands for listing catalogs, resolving identifiers,
//! mapping request paths, and inspecting the accent animator and
//! theme preferences.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::registry::{get_entry, list_entries, resolve_slug, Catalog, EntryRef};
use crate::site::{route, Page, RouteOutcome};
use crate::theme::{
    hue_for_bucket, minute_bucket, motion_preference, AccentAnimator, PreferenceStore, ThemeStore,
};

/// folio - Portfolio content registry and ambient accent engine
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the entries of a catalog
    List {
        /// Catalog to list
        #[arg(value_enum)]
        catalog: CatalogArg,
    },

    /// Show one entry, resolving aliases
    Show {
        /// Catalog to search
        #[arg(value_enum)]
        catalog: CatalogArg,

        /// Slug or alias
        identifier: String,

        /// Print the full record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Canonicalize an identifier (prints it unchanged when unresolved)
    Resolve {
        /// Catalog to search
        #[arg(value_enum)]
        catalog: CatalogArg,

        /// Slug or alias
        identifier: String,
    },

    /// Map a request path to render / redirect / not-found
    Route {
        /// Request path, e.g. /education/education
        path: String,
    },

    /// Compute the ambient accent hue
    Accent {
        /// Timestamp to compute for (RFC 3339); defaults to now
        #[arg(long)]
        at: Option<String>,

        /// Run the animator and print published hues until interrupted
        #[arg(long)]
        watch: bool,
    },

    /// Inspect or change theme preferences
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },

    /// Show resolved configuration (debug)
    Config,
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Show the current mode and accent
    Show,

    /// Cycle the theme mode (auto -> dark -> light)
    Toggle,

    /// Cycle the accent through the fixed palette
    CycleAccent,
}

/// Catalog for CLI (maps to Catalog)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CatalogArg {
    Projects,
    Education,
    Work,
    Volunteer,
}

impl From<CatalogArg> for Catalog {
    fn from(c: CatalogArg) -> Self {
        match c {
            CatalogArg::Projects => Catalog::Projects,
            CatalogArg::Education => Catalog::Education,
            CatalogArg::Work => Catalog::Work,
            CatalogArg::Volunteer => Catalog::Volunteer,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::List { catalog } => list_catalog(catalog.into()),
            Commands::Show {
                catalog,
                identifier,
                json,
            } => show_entry(catalog.into(), &identifier, json),
            Commands::Resolve {
                catalog,
                identifier,
            } => {
                println!("{}", resolve_slug(catalog.into(), &identifier));
                Ok(())
            }
            Commands::Route { path } => route_path(&path),
            Commands::Accent { at, watch } => {
                if watch {
                    watch_accent().await
                } else {
                    print_accent(at)
                }
            }
            Commands::Theme { command } => execute_theme(command).await,
            Commands::Config => show_config(),
        }
    }
}

/// List a catalog's entries in declaration order
fn list_catalog(catalog: Catalog) -> Result<()> {
    let entries = list_entries(catalog);
    println!("{} ({} entries)", catalog, entries.len());

    for entry in entries {
        println!("  {}  {}", entry.slug(), entry.headline());
    }

    Ok(())
}

/// Show one entry, resolving aliases first
fn show_entry(catalog: Catalog, identifier: &str, json: bool) -> Result<()> {
    let canonical = resolve_slug(catalog, identifier);

    let Some(entry) = get_entry(catalog, identifier) else {
        eprintln!("No {} entry matches '{}'", catalog, identifier);
        std::process::exit(1);
    };

    if canonical != identifier {
        eprintln!("[resolved '{}' -> '{}']", identifier, canonical);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
        return Ok(());
    }

    print_entry(&entry);
    Ok(())
}

fn print_entry(entry: &EntryRef) {
    println!("{}", entry.headline());
    println!("Path: {}", entry.path());

    match entry {
        EntryRef::Project(p) => {
            if let Some(year) = p.year {
                println!("Year: {}", year);
            }
            if let Some(role) = p.role {
                println!("Role: {}", role);
            }
            println!("Stack: {}", p.stack.join(", "));
            println!("\n{}", p.tagline);
            println!("\nOverview:\n  {}", p.overview);
            println!("\nProblem:\n  {}", p.problem);
            println!("\nSolution:");
            for line in p.solution {
                println!("  - {}", line);
            }
            println!("\nImpact:");
            for line in p.impact {
                println!("  - {}", line);
            }
            if let Some(architecture) = p.architecture {
                println!("\nArchitecture:");
                for line in architecture {
                    println!("  - {}", line);
                }
            }
        }
        EntryRef::Education(e) => {
            println!("Program: {}", e.program);
            if let Some(location) = e.location {
                println!("Location: {}", location);
            }
            print_range(e.start, e.end);
            println!("\n{}", e.summary);
            if let Some(grade) = e.grade {
                println!("\nGrade:");
                for line in grade {
                    println!("  - {}", line);
                }
            }
            if let Some(coursework) = e.coursework {
                println!("\nCoursework: {}", coursework.join(", "));
            }
        }
        EntryRef::Work(w) => {
            if let Some(location) = w.location {
                println!("Location: {}", location);
            }
            print_range(w.start, w.end);
            println!("\n{}", w.summary);
            println!("\nResponsibilities:");
            for line in w.responsibilities {
                println!("  - {}", line);
            }
            if let Some(impact) = w.impact {
                println!("\nImpact:");
                for line in impact {
                    println!("  - {}", line);
                }
            }
            if let Some(tech) = w.tech {
                println!("\nTech: {}", tech.join(", "));
            }
        }
        EntryRef::Volunteer(v) => {
            if let Some(location) = v.location {
                println!("Location: {}", location);
            }
            print_range(v.start, v.end);
            println!("\n{}", v.summary);
            println!("\nContributions:");
            for line in v.contributions {
                println!("  - {}", line);
            }
            if let Some(impact) = v.impact {
                println!("\nImpact:");
                for line in impact {
                    println!("  - {}", line);
                }
            }
            if let Some(skills) = v.skills {
                println!("\nSkills: {}", skills.join(", "));
            }
        }
    }
}

fn print_range(start: Option<&str>, end: Option<&str>) {
    match (start, end) {
        (Some(start), Some(end)) => println!("When: {} - {}", start, end),
        (Some(start), None) => println!("When: since {}", start),
        _ => {}
    }
}

/// Map a request path and report the outcome
fn route_path(path: &str) -> Result<()> {
    match route(path) {
        RouteOutcome::Render(page) => match page {
            Page::Home => println!("render: home"),
            Page::Resume => println!("render: resume"),
            Page::Index(catalog) => println!("render: {} index", catalog),
            Page::Entry { catalog, slug } => println!("render: /{}/{}", catalog.segment(), slug),
        },
        RouteOutcome::Redirect { location } => println!("redirect -> {}", location),
        RouteOutcome::NotFound => {
            println!("not found");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Print the drift hue for a timestamp
fn print_accent(at: Option<String>) -> Result<()> {
    let minutes = match at {
        Some(ref ts) => {
            let parsed = chrono::DateTime::parse_from_rfc3339(ts)
                .with_context(|| format!("Invalid RFC 3339 timestamp: {}", ts))?;
            parsed.timestamp_millis() as f64 / 60_000.0
        }
        None => chrono::Utc::now().timestamp_millis() as f64 / 60_000.0,
    };

    let bucket = minute_bucket(minutes);
    println!("bucket: {}", bucket);
    println!("hue: {:.2}", hue_for_bucket(bucket));

    Ok(())
}

/// Run the animator against the wall clock, printing published hues
async fn watch_accent() -> Result<()> {
    let store = Arc::new(open_store().await?);
    let mut accents = store.subscribe_accent();

    let tick = Duration::from_millis(crate::config::config()?.animator.tick_ms);
    let handle = AccentAnimator::system(tick).spawn(store.clone(), motion_preference());

    println!("hue: {:.2}", accents.borrow().hue);
    eprintln!("[watching accent drift, ctrl-c to stop]");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = accents.changed() => {
                if changed.is_err() {
                    break;
                }
                println!("hue: {:.2}", accents.borrow().hue);
            }
        }
    }

    handle.stop().await
}

/// Execute theme subcommands
async fn execute_theme(command: ThemeCommands) -> Result<()> {
    let store = open_store().await?;

    match command {
        ThemeCommands::Show => {
            let accent = store.accent();
            println!("mode: {}", store.mode());
            println!("accent: {:.0}", accent.hue);
            if accent.overridden {
                println!("accent source: user override");
            } else {
                println!("accent source: automatic drift");
            }
        }
        ThemeCommands::Toggle => {
            let next = store.toggle_mode().await;
            println!("mode: {}", next);
        }
        ThemeCommands::CycleAccent => {
            let next = store.cycle_accent().await;
            println!("accent: {:.0}", next);
        }
    }

    Ok(())
}

async fn open_store() -> Result<ThemeStore> {
    let prefs = PreferenceStore::open_default()?;
    let default_mode = crate::config::config()?.theme.default_mode;

    Ok(ThemeStore::open(prefs, default_mode).await)
}

/// Show the resolved configuration
fn show_config() -> Result<()> {
    let config = crate::config::config()?;

    println!("Home: {}", config.home.display());
    println!(
        "Preferences: {}",
        config.home.join("preferences.json").display()
    );

    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none found)"),
    }

    println!("Default mode: {}", config.theme.default_mode);
    println!("Animator tick: {}ms", config.animator.tick_ms);
    match config.animator.reduced_motion {
        Some(reduced) => println!("Reduced motion: {}", reduced),
        None => println!("Reduced motion: (not configured)"),
    }

    Ok(())
}
