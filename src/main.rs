use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use festival_tally::menu::{run_menu, Console, Session};

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive numbered menu (default if no subcommand)
    Menu,
    /// Print the ranked summary and exit
    Results {
        /// How many performances to show (overrides config)
        #[arg(short, long)]
        top: Option<usize>,
    },
    /// List participants, then every performance with its score count and average
    List,
}

#[derive(Parser, Debug)]
#[command(name = "festival-tally")]
#[command(about = "Festival performance scoring and ranking", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/festival-tally/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to the data file (defaults to ./festival_data.json)
    #[arg(short, long, global = true)]
    data: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set up logging: {}", e);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let command = cli.command.unwrap_or(Commands::Menu);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match festival_tally::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = festival_tally::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let data_path = festival_tally::config::resolve_data_path(cli.data.map(PathBuf::from), &config);
    debug!("Using data file {}", data_path.display());

    let data = match festival_tally::store::load_festival_data(&data_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Data file error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let mut session = Session::new(data, data_path);
    session.top_count = config.effective_top_count();
    session.use_colors =
        !cli.no_color && config.colors_enabled() && festival_tally::output::should_use_colors();

    match command {
        Commands::Menu => {
            info!("Starting menu with {} participants", session.data.participants.len());
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout());
            if let Err(e) = run_menu(&mut session, &mut console) {
                eprintln!("Error: {:#}", e);
                std::process::exit(EXIT_IO);
            }
        }
        Commands::Results { top } => {
            if top == Some(0) {
                eprintln!("--top must be at least 1");
                std::process::exit(EXIT_CONFIG);
            }
            if let Some(top) = top {
                session.top_count = top;
            }
            let results = session.results();
            println!(
                "{}",
                festival_tally::output::format_results(
                    &results,
                    session.top_count,
                    session.use_colors
                )
            );
        }
        Commands::List => {
            println!(
                "{}",
                festival_tally::output::format_overview(&session.data, session.use_colors)
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
