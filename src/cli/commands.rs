use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "benefit-reports", version, about = "Employee, premium and claim reports for benefits administration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP report API
    Serve(ServeArgs),
    /// Print the dashboard summaries
    Dashboard(DashboardArgs),
    /// Write the employee-count report to a file
    Export(ExportArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port (overrides config)
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// SQLite database path (overrides config)
    #[arg(long)]
    pub db: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct DashboardArgs {
    /// Restrict employee and premium summaries to one organization id
    #[arg(long)]
    pub organization: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// SQLite database path (overrides config)
    #[arg(long)]
    pub db: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ExportArgs {
    /// Output format: xlsx or pdf
    #[arg(short, long, default_value = "xlsx")]
    pub format: String,

    /// Output directory or file path
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// SQLite database path (overrides config)
    #[arg(long)]
    pub db: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
