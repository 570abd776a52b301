use simtime_clock::{Advancer, ControllableClock, SystemClock};
use simtime_runner::{Interpreter, MULTIPLIER_ENV, RunnerConfig, Session};
use std::sync::Arc;

fn print_help() {
    eprintln!(
        r#"SimTime - accelerated simulated clock console

USAGE:
    simtime [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    {MULTIPLIER_ENV}  Simulated seconds per real second (1-1000, default: 20)
    RUST_LOG            Log level filter

EXAMPLES:
    # Run with defaults
    simtime

    # Run with config file
    simtime --config simtime.json

    # Run at 60x
    {MULTIPLIER_ENV}=60 simtime
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they stay out of the console output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("simtime=warn"))
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            RunnerConfig::from_file(&path)?
        }
        None => RunnerConfig::default(),
    }
    .with_env_overrides()?;

    let clock = config.build_clock()?;
    log::info!(
        "Clock ready (x{}, running: {})",
        clock.scale().multiplier(),
        clock.is_running()
    );

    // Runs until the process exits; never joined
    Advancer::spawn(clock.clone());

    let interpreter = Interpreter::new(clock, Arc::new(SystemClock::new()));
    let session = Session::with_prompt(interpreter, config.prompt.clone());

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let end = session.run(stdin, &mut stdout).await?;
    log::info!("Session finished: {:?}", end);

    Ok(())
}
