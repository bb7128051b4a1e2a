use chrono::Local;
use clap::Parser;
use letters::application::run_timer::TICK;
use letters::application::{run_timer, ConfigService, ExportOptions, ExportService};
use letters::cli::{format_config, format_export_summary, format_guide, Cli, Commands};
use letters::domain::{session_guide, Countdown};
use letters::error::LettersError;
use letters::infrastructure::input::{check_sources, read_entry};
use letters::infrastructure::Config;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr; LETTERS_LOG (or RUST_LOG) overrides the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("LETTERS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("letters={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<(), LettersError> {
    match cli.command {
        Some(Commands::Guide) => {
            print!("{}", format_guide(&session_guide()));
            Ok(())
        }
        Some(Commands::Timer { duration }) => {
            let countdown = Countdown::parse(&duration)?;
            let stdout = std::io::stdout();
            run_timer(countdown, TICK, &mut stdout.lock())
        }
        Some(Commands::Export {
            prompt_a,
            prompt_b,
            output,
            open,
        }) => {
            // Read both entries first so stdin is consumed before rendering
            check_sources(prompt_a.as_deref(), prompt_b.as_deref())?;
            let imprint = read_entry(prompt_a.as_deref())?;
            let letter = read_entry(prompt_b.as_deref())?;

            let root = Config::root()?;
            let config = Config::load_from_dir(&root)?;
            let service = ExportService::new(config, root);

            let options = ExportOptions {
                imprint,
                letter,
                output,
                open,
            };
            let path = service.execute(options, Local::now().naive_local())?;
            println!("{}", format_export_summary(&path));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(Config::root()?);

            if list {
                print!("{}", format_config(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: letters config [--list | <key> [<value>]]");
                println!("Valid keys: output_dir, viewer");
                Ok(())
            }
        }
        None => {
            println!("letters - Letters to the Living");
            println!("Start with 'letters guide', then 'letters export' when you are done writing.");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
