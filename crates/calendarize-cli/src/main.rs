use clap::{Parser, Subcommand};
use calendarize_core::LayoutScope;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "calendarize", version, about = "Calendar layout engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out the events of one day
    Daily(commands::layout::LayoutArgs),
    /// Lay out the events of the week containing a day
    Weekly(commands::layout::LayoutArgs),
    /// Lay out the events of the month containing a day
    Monthly(commands::layout::LayoutArgs),
    /// Previous/next pages and the query range of a calendar page
    Nav(commands::nav::NavArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Daily(args) => commands::layout::run(LayoutScope::Daily, args),
        Commands::Weekly(args) => commands::layout::run(LayoutScope::Weekly, args),
        Commands::Monthly(args) => commands::layout::run(LayoutScope::Monthly, args),
        Commands::Nav(args) => commands::nav::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
