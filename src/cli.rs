#[derive(clap::Parser, Debug)]
#[clap(about, version, long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print the syntax tree before the result
    #[arg(long, global = true)]
    pub show_tree: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log pipeline internals at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Read expressions from stdin, one per line
    Repl,

    /// Evaluate a single expression
    Eval { expr: String },
}
