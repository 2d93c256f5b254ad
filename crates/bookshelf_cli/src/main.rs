//! Command-line catalog session.
//!
//! # Responsibility
//! - Stand in for the presentation layer: build books, call the catalog,
//!   print what a UI would render.
//! - Keep output deterministic apart from feed content and age snapshots.

use anyhow::{anyhow, Context, Result};
use bookshelf_core::{
    discounted_price, import_external, init_logging, Book, BookForm, BookManager, CatalogConfig,
    HttpPostFeed,
};
use clap::{Parser, Subcommand};
use log::info;

#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about = "In-memory book catalog session")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the core version.
    Ping,
    /// Seed a few books, run an edit and a delete, then list the catalog.
    Demo {
        /// Only list books whose title or author contains this text.
        #[arg(long, default_value = "")]
        search: String,
        /// Only list books of this genre.
        #[arg(long, default_value = "")]
        genre: String,
    },
    /// Import one page from the remote feed and list the result.
    Import {
        /// Feed endpoint; overrides BOOKSHELF_FEED_URL.
        #[arg(long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CatalogConfig::from_env().context("invalid BOOKSHELF_* configuration")?;
    init_logging(&config.log_level, config.log_dir.as_deref()).map_err(|err| anyhow!(err))?;

    match cli.command {
        Command::Ping => {
            println!("bookshelf_core version={}", bookshelf_core::core_version());
        }
        Command::Demo { search, genre } => {
            let manager = seeded_catalog()?;
            print_listing(&manager, &search, &genre);
        }
        Command::Import { url } => {
            let endpoint = url.unwrap_or_else(|| config.feed_url.clone());
            let feed = HttpPostFeed::new(endpoint.as_str())?;
            let books = import_external(&feed, &config.import_defaults())
                .await
                .with_context(|| format!("import from {endpoint} failed"))?;

            let mut manager = BookManager::new();
            let appended = manager.extend(books);
            info!("event=cli_import module=cli status=ok appended={appended}");
            print_listing(&manager, "", "");
        }
    }

    Ok(())
}

fn seeded_catalog() -> Result<BookManager> {
    let mut manager = BookManager::new();
    for form in seed_forms() {
        manager.add(Book::new(form.into_request()?));
    }

    // Retitle the second entry through the edit cursor.
    let mut form = BookForm::from_book(manager.begin_edit(1)?);
    form.title = format!("{} (Revised)", form.title);
    manager.add(Book::new(form.into_request()?));

    manager.delete(2)?;
    Ok(manager)
}

fn seed_forms() -> Vec<BookForm> {
    let form = |title: &str, author: &str, isbn: &str, date: &str, genre: &str| BookForm {
        title: title.to_string(),
        author: author.to_string(),
        isbn: isbn.to_string(),
        publication_date: date.to_string(),
        genre: genre.to_string(),
        ..BookForm::default()
    };

    vec![
        BookForm {
            page_count: "412".to_string(),
            ..form("Dune", "Frank Herbert", "9780441013593", "1965-08-01", "Fiction")
        },
        BookForm {
            file_size_mb: "3.2".to_string(),
            ..form(
                "A Brief History of Time",
                "Stephen Hawking",
                "9780553380163",
                "1988-04-01",
                "Science",
            )
        },
        form("Placeholder", "Nobody", "0000000000", "2000-01-01", "misc"),
        form(
            "Steve Jobs",
            "Walter Isaacson",
            "9781451648539",
            "2011-10-24",
            "Biography",
        ),
    ]
}

fn print_listing(manager: &BookManager, search: &str, genre: &str) {
    let hits = manager.search(search, genre);
    println!("{} of {} book(s)", hits.len(), manager.len());
    for book in hits {
        println!(
            "- {} by {} [{}] isbn={} {} | {} | age: {}",
            book.title(),
            book.author(),
            book.format().label(),
            book.isbn(),
            book.genre(),
            book.category(),
            book.age()
        );
        if let Some(detail) = book.render_detail() {
            println!("    {detail}");
        }
    }
    println!("sample price 25.00 -> {}", discounted_price(25.0));
}
