use clap::Parser;
use std::io;
use std::process;

use macim::{cli, Config};

#[derive(Parser, Debug)]
#[command(
    name = "macim",
    version,
    about = "Query or switch the active macOS input source",
    long_about = None
)]
struct Args {
    /// Input source identifier to switch to (e.g. com.apple.keylayout.US)
    /// If not provided, the current input source will be displayed
    input_source: Option<String>,

    #[arg(short, long, help = "Enable verbose output for debugging")]
    verbose: bool,

    #[arg(
        long,
        default_value_t = 5u32,
        help = "Verification reads after switching (0 disables verification)"
    )]
    verify_attempts: u32,

    #[arg(
        long,
        default_value_t = 50u64,
        help = "Delay in ms between verification reads"
    )]
    verify_interval_ms: u64,
}

fn main() {
    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading configuration: {}", e);
            process::exit(1);
        }
    };
    macim::logging::init(config.log_filter.as_deref(), args.verbose);

    let verify = cli::verify_policy(args.verify_attempts, args.verify_interval_ms);
    let bridge = macim::system_bridge(verify);

    let code = cli::run(
        &bridge,
        args.input_source.as_deref(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
    .unwrap_or(1);
    process::exit(code);
}
