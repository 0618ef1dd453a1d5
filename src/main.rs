use clap::{Parser, Subcommand};

mod data;
mod diagnostics;
mod filter;
mod stats;
mod store;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "personnel-engine")]
#[command(about = "Personnel dataset engine: validation, statistics, filtering", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print aggregate statistics for a personnel file.
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Print records matching a (column, operator, value) predicate.
    Filter {
        #[arg(long)]
        input: String,

        #[arg(long)]
        column: String,

        #[arg(long)]
        op: String,

        #[arg(long)]
        value: String,
    },
    /// Print the columnar table view of a personnel file.
    Table {
        #[arg(long)]
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Stats { input } => {
            let store = load_store(&input)?;
            match stats::statistics(store.current()) {
                Some(summary) => println!("{}", serde_json::to_string_pretty(&summary)?),
                // "No data" is a displayable state, not an error.
                None => println!("{{}}"),
            }
        }
        Commands::Filter {
            input,
            column,
            op,
            value,
        } => {
            // Reject bad predicates before touching the engine.
            let column: filter::Column = column.parse()?;
            let op: filter::CmpOp = op.parse()?;
            let value = column.parse_value(&value)?;

            let store = load_store(&input)?;
            let matches = filter::filter(store.current(), column, op, &value)?;
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        Commands::Table { input } => {
            let store = load_store(&input)?;
            println!("{}", serde_json::to_string_pretty(&store.as_table())?);
        }
    }

    Ok(())
}

fn load_store(path: &str) -> Result<store::RecordStore> {
    let mut store = store::RecordStore::new();
    if !store.load(path) {
        anyhow::bail!("could not load {}", path);
    }
    Ok(store)
}
