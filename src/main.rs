use anyhow::Result;
use clap::Parser;
use perfdiff::cli::{Cli, OutputFormat};
use perfdiff::{compare, csv_output, json_output};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let comparison = compare::compare_runs(&args.component, &args.baseline, &args.new)?;

    match args.format {
        OutputFormat::Text => {
            for entry in comparison.ranking.iter().take(args.top) {
                println!("{}", entry.summary_line());
            }
        }
        OutputFormat::Json => println!("{}", json_output::to_json(&comparison, args.top)?),
        OutputFormat::Csv => print!("{}", csv_output::to_csv(&comparison, args.top)),
    }

    Ok(())
}
