//! lectio: command-line front end for the scripture reader engine

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use lectio::config::{path_resolver, AppConfig};
use lectio::persist::{Bookmark, KNOWN_THEMES};
use lectio::search::SearchResult;
use lectio::Reader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ============================================================================
// CLI Definition
// ============================================================================

/// lectio: read and search scripture translations
#[derive(Parser)]
#[command(name = "lectio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Data folder with translation, bookmark and settings files
    #[arg(short, long, global = true)]
    data_dir: Option<String>,

    /// Switch to this translation first (remembered in settings)
    #[arg(short, long, global = true)]
    translation: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
    /// List available translations
    Translations,
    /// List books grouped by testament
    Books {
        /// Only books whose name contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// List the chapters of a book
    Chapters {
        /// Book name
        book: String,
    },
    /// Print a chapter
    Read {
        /// Book name
        book: String,
        /// Chapter number
        chapter: String,
        /// Start at this verse
        #[arg(short, long)]
        from: Option<String>,
    },
    /// Search the current translation
    Search {
        /// Words, a book name, or a reference like "John 3:16"
        query: String,

        /// Maximum number of results
        #[arg(short, long)]
        max_results: Option<usize>,
    },
    /// Manage bookmarks
    Bookmark {
        #[command(subcommand)]
        action: BookmarkAction,
    },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
}

#[derive(Subcommand)]
enum BookmarkAction {
    /// Bookmark a verse
    Add {
        book: String,
        chapter: String,
        verse: String,
    },
    /// List bookmarks
    List,
    /// Remove a bookmark
    Remove {
        book: String,
        chapter: String,
        verse: String,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the current settings
    Show,
    /// Change the font size by a delta (clamped to 10..=40)
    Font {
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// Set the theme
    Theme { name: String },
    /// Set the active translation
    Translation { id: String },
}

// ============================================================================
// Helpers
// ============================================================================

/// Resolve configuration: CLI > ENV > config file > defaults
fn load_config(cli: &Cli, max_results: Option<usize>) -> Result<AppConfig> {
    let file_config = AppConfig::load_or_default(&path_resolver::get_default_config_path());
    let mut config = file_config.merge_with(&AppConfig::from_env());
    if let Some(dir) = &cli.data_dir {
        config = config.with_data_dir(dir);
    }
    if let Some(n) = max_results {
        config = config.with_max_results(n);
    }
    config.validate()?;
    Ok(config)
}

/// Look up a typed book name or fail with a readable message
fn resolve_book(reader: &Reader, name: &str) -> Result<String> {
    reader
        .resolve_book(name)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Book '{}' not found in the current translation", name))
}

/// Render a result snippet with highlighted runs wrapped in `**`
fn render_snippet(result: &SearchResult) -> String {
    result
        .runs()
        .iter()
        .map(|run| {
            if run.highlighted {
                format!("**{}**", run.text)
            } else {
                run.text.to_string()
            }
        })
        .collect()
}

fn print_no_content(reader: &Reader) {
    match reader.session().translation() {
        Some(id) => println!("No Bible content available in '{}'.", id),
        None => println!("No Bible data available."),
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Commands::Init { force } = &cli.command {
        return init(*force);
    }

    let max_results = match &cli.command {
        Commands::Search { max_results, .. } => *max_results,
        _ => None,
    };
    let config = load_config(&cli, max_results)?;
    let data_dir = path_resolver::resolve_data_dir(config.data_dir())?;
    let mut reader = Reader::open(&data_dir, &config);

    if let Some(id) = &cli.translation {
        if !reader.select_translation(id)? {
            return Err(anyhow!(
                "Unknown translation '{}'. Available: {}",
                id,
                reader.translations().join(", ")
            ));
        }
    }

    match cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Translations => {
            let current = reader.session().translation().map(str::to_string);
            let ids = reader.translations();
            if ids.is_empty() {
                println!("No translations found in {}", data_dir.display());
            }
            for id in ids {
                let marker = if current.as_deref() == Some(id) { "*" } else { " " };
                println!("{} {}", marker, id);
            }
            Ok(())
        }
        Commands::Books { filter } => {
            let groups = reader.library(filter.as_deref());
            if groups.is_empty() {
                if reader.session().has_content() {
                    println!("No books found.");
                } else {
                    print_no_content(&reader);
                }
            }
            for group in groups {
                println!("{}", group.heading);
                for entry in group.books {
                    println!("  {} ({} chapters)", entry.book, entry.chapter_count);
                }
            }
            Ok(())
        }
        Commands::Chapters { book } => {
            let book = resolve_book(&reader, &book)?;
            let chapters = reader.list_chapters(&book);
            println!("{}", book);
            println!("  {}", chapters.join(" "));
            Ok(())
        }
        Commands::Read {
            book,
            chapter,
            from,
        } => {
            let book = resolve_book(&reader, &book)?;
            if !reader.navigate_to(&book, &chapter) {
                return Err(anyhow!("{} {} not found", book, chapter));
            }
            let Some(position) = reader.session().position().cloned() else {
                print_no_content(&reader);
                return Ok(());
            };
            println!("{} {}\n", position.book, position.chapter);
            for (number, text) in
                reader.list_verses_from(&position.book, &position.chapter, from.as_deref())
            {
                println!("{:>4}  {}", number, text);
            }
            Ok(())
        }
        Commands::Search { query, .. } => {
            if query.trim().is_empty() {
                println!("Type a search term.");
                return Ok(());
            }
            let results = reader.search(&query);
            if results.is_empty() {
                println!("No results found.");
            } else {
                println!("{} result(s)\n", results.len());
                for result in &results {
                    println!("{}", result.reference());
                    println!("   {}\n", render_snippet(result));
                }
            }
            Ok(())
        }
        Commands::Bookmark { action } => match action {
            BookmarkAction::Add {
                book,
                chapter,
                verse,
            } => {
                let book = resolve_book(&reader, &book).unwrap_or(book);
                let bookmark = Bookmark::new(book, chapter, verse);
                if reader.add_bookmark(bookmark.clone())? {
                    println!("Added {} to bookmarks", bookmark.label());
                } else {
                    println!("{} is already bookmarked", bookmark.label());
                }
                Ok(())
            }
            BookmarkAction::List => {
                let bookmarks = reader.list_bookmarks();
                if bookmarks.is_empty() {
                    println!("No bookmarks yet.");
                }
                for bookmark in bookmarks {
                    println!("{}", bookmark.label());
                }
                Ok(())
            }
            BookmarkAction::Remove {
                book,
                chapter,
                verse,
            } => {
                let bookmark = Bookmark::new(book, chapter, verse);
                if reader.remove_bookmark(&bookmark)? {
                    println!("Removed {}", bookmark.label());
                } else {
                    println!("{} was not bookmarked", bookmark.label());
                }
                Ok(())
            }
        },
        Commands::Settings { action } => {
            match action.unwrap_or(SettingsAction::Show) {
                SettingsAction::Show => {}
                SettingsAction::Font { delta } => {
                    reader.adjust_font(delta)?;
                }
                SettingsAction::Theme { name } => {
                    if !reader.set_theme(&name)? {
                        return Err(anyhow!(
                            "Unknown theme '{}'. Available: {}",
                            name,
                            KNOWN_THEMES.join(", ")
                        ));
                    }
                }
                SettingsAction::Translation { id } => {
                    if !reader.select_translation(&id)? {
                        return Err(anyhow!("Unknown translation '{}'", id));
                    }
                }
            }
            let settings = reader.settings();
            println!("Font size:   {}", settings.font_size);
            println!("Theme:       {}", settings.effective_theme());
            println!(
                "Translation: {}",
                settings.translation.as_deref().unwrap_or("None")
            );
            Ok(())
        }
    }
}

/// Write a default config file
fn init(force: bool) -> Result<()> {
    let config_dir = path_resolver::get_config_dir();
    let config_path = config_dir.join("config.toml");

    eprintln!("Initializing lectio configuration...");
    eprintln!("Config directory: {}", config_dir.display());

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        eprintln!("Created config directory");
    }

    if config_path.exists() && !force {
        eprintln!("Configuration file already exists: {}", config_path.display());
        eprintln!("Use --force to overwrite");
        return Ok(());
    }

    let default_config = AppConfig::default();
    std::fs::write(&config_path, default_config.to_toml()?)?;

    eprintln!("Created configuration file: {}", config_path.display());
    eprintln!("Edit {} to customize settings.", config_path.display());
    Ok(())
}
