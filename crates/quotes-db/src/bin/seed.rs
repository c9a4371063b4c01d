//! # Seed Data Generator
//!
//! Populates the database with well-known quotations for development.
//!
//! ## Usage
//! ```bash
//! # Insert every sample quote (default)
//! cargo run -p quotes-db --bin seed
//!
//! # Insert only the first few
//! cargo run -p quotes-db --bin seed -- --count 5
//!
//! # Specify database
//! cargo run -p quotes-db --bin seed -- --db sqlite://./data/quotes.db
//! ```
//!
//! Seeding is skipped when the database already holds quotes.

use std::env;
use std::time::Duration;

use quotes_db::{Database, DbConfig, QuoteStore};

/// (quote, author) pairs used as development data.
const SAMPLE_QUOTES: &[(&str, &str)] = &[
    ("Carpe diem.", "Horace"),
    ("Veni, vidi, vici.", "Julius Caesar"),
    ("Memento mori.", "Seneca"),
    ("The unexamined life is not worth living.", "Socrates"),
    ("I think, therefore I am.", "René Descartes"),
    ("Whereof one cannot speak, thereof one must be silent.", "Ludwig Wittgenstein"),
    ("The only thing we have to fear is fear itself.", "Franklin D. Roosevelt"),
    ("Simplicity is prerequisite for reliability.", "Edsger W. Dijkstra"),
    ("Premature optimization is the root of all evil.", "Donald Knuth"),
    ("Talk is cheap. Show me the code.", "Linus Torvalds"),
    ("Stay hungry, stay foolish.", "Stewart Brand"),
    ("Well done is better than well said.", "Benjamin Franklin"),
];

const DEFAULT_DB_URL: &str = "sqlite://quotes_dev.db";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count = SAMPLE_QUOTES.len();
    let mut db_url = DEFAULT_DB_URL.to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(count);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_url = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Quote Keeper Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  -c, --count <N>    Number of quotes to insert (default: {})",
                    SAMPLE_QUOTES.len()
                );
                println!("  -d, --db <URL>     Database URL (default: {})", DEFAULT_DB_URL);
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let count = count.min(SAMPLE_QUOTES.len());

    println!("🌱 Quote Keeper Seed Data Generator");
    println!("===================================");
    println!("Database: {}", db_url);
    println!("Quotes:   {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_url)).await?;
    let store = db.quotes();

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = store.count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} quotes", existing);
        println!("  Skipping seed to avoid duplicates.");
        db.close().await;
        return Ok(());
    }

    println!();
    println!("Inserting quotes...");

    let mut inserted = 0;
    // Oldest first, so the list endpoint shows the last sample on top
    for (quote, author) in SAMPLE_QUOTES.iter().take(count) {
        match store.create(quote, author).await {
            Ok(saved) => {
                inserted += 1;
                println!("  + {} - {}", saved.quote, saved.author);
            }
            Err(e) => eprintln!("Failed to insert {:?}: {}", quote, e),
        }
        // Distinct timestamps keep the listing order deterministic
        tokio::time::sleep(Duration::from_millis(2)).await;
    }

    println!();
    println!("✓ Inserted {} quotes", inserted);
    println!("  Total in store: {}", store.list().await?.len());

    db.close().await;
    Ok(())
}
