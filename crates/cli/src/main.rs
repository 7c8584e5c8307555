use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use query_builder::dialect;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;
mod query;

#[derive(Parser)]
#[command(
    name = "filterql",
    version = "0.1.0",
    about = "Compiles filter expressions into parameterized SQL predicates"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Logs go to stderr so JSON on stdout stays machine readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ast { filter } => {
            let tree = filter_syntax::parse(&filter).inspect_err(|err| {
                eprintln!("{}", err.format_error());
            })?;
            output::print_json(&tree)?;
        }
        Commands::Compile {
            filter,
            dialect,
            table,
            json,
        } => {
            let dialect = dialect::from_name(&dialect)?;
            info!("Compiling filter for {}", dialect.name());

            let query = query::render_filter(&filter, dialect.as_ref(), table.as_deref())
                .inspect_err(|err| {
                    if let CliError::FilterParse(parse_err) = err {
                        eprintln!("{}", parse_err.format_error());
                    }
                })?;

            if json {
                output::print_json(&query)?;
            } else {
                output::print_query(&query);
            }
        }
    }

    Ok(())
}
