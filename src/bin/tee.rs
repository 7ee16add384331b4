use std::io;
use std::process;

use clap::Parser;
use tracing::Level;
use teeio::TeeArgs;

fn init_tracing(level: Level) {
    // stdout carries the data stream, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = TeeArgs::parse();
    init_tracing(args.log_level());

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = teeio::run_with_args(&args, &mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("tee: {e}");
        process::exit(e.exit_code());
    }
}
