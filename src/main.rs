//! Gradebook CLI - fixed walkthrough of an in-memory SQLite session

use clap::Parser;
use gradebook::report;
use gradebook::seed;
use gradebook::storage::GradebookStore;
use gradebook::storage::schema;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(version = "0.1.0")]
#[command(about = "In-memory SQLite gradebook walkthrough - schema, seed data, and grade reports")]
#[command(long_about = r#"
Gradebook opens a fresh in-memory SQLite session and walks it end to end:
  • Creates three related tables (students, registrations, grades)
  • Enforces composite and cascading foreign keys
  • Seeds a fixed sample dataset, one transaction per table
  • Dumps every table and prints two grade reports

The run takes no input and always performs the same sequence; the session
is discarded on exit.
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let mut store = GradebookStore::open_in_memory()?;
    seed::seed_sample(store.conn_mut())?;

    for table in schema::all_table_names() {
        print!("{}", report::fetch_table(store.conn(), table)?);
    }

    println!("\nResult of: Max grade per student (with course)");
    for row in report::max_grade_per_student(store.conn())? {
        println!("{}", row);
    }

    println!("\nResult of: Average grade per student");
    for row in report::average_grade_per_student(store.conn())? {
        println!("{}", row);
    }

    store.close()?;
    Ok(())
}
