use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use depviz::{GraphOptions, InputOptions, run_main, write_output};
use depviz_error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "depviz",
    about = "depviz: draw the dependency graph of a set of extensions",
    version
)]
pub struct Cli {
    #[command(flatten)]
    input: InputOptions,

    #[command(flatten)]
    graph: GraphOptions,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let result = run_main(&args.input, &args.graph)
        .and_then(|dot| write_output(&dot, args.output.as_deref()));

    if let Err(e) = &result {
        tracing::error!(error = %e, "execution failed");
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    result
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
