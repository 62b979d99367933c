use clap::Parser;

/// Scratchcard analyzer CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON card file
    pub card_path: String,

    /// Emit the report as a JSON document instead of a tab-separated line
    #[arg(long)]
    pub json: bool,

    /// Also compute the constrained bad-letter distribution
    #[arg(long)]
    pub constrained: bool,

    /// Log extra detail while analyzing
    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}
