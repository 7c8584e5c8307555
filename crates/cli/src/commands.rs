use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the parsed filter tree as JSON
    Ast {
        #[arg(long, help = "Filter expression, e.g. \"name eq 'John'\"")]
        filter: String,
    },
    /// Compile a filter into a parameterized SQL predicate
    Compile {
        #[arg(long, help = "Filter expression, e.g. \"name eq 'John'\"")]
        filter: String,

        #[arg(long, default_value = "sqlite", help = "SQL dialect: postgres, mysql or sqlite")]
        dialect: String,

        #[arg(
            long,
            help = "If specified, renders a full SELECT over this table instead of the bare WHERE clause"
        )]
        table: Option<String>,

        #[arg(long, help = "If set, prints the SQL and parameters as JSON")]
        json: bool,
    },
}
