//! nexus-walker - Nexus2 Repository Inventory
//!
//! Entry point for the CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use nexus_walker::config::{CliArgs, WalkConfig};
use nexus_walker::nexus::NexusClient;
use nexus_walker::output::{create_output, RecordSink};
use nexus_walker::progress::{print_header, print_summary, ProgressReporter};
use nexus_walker::walker::TreeWalker;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("exited with error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = CliArgs::parse();

    // Setup logging
    setup_logging(args.verbose);

    // Validate and create config
    let config = WalkConfig::from_args(args).context("Invalid configuration")?;

    debug!(
        concurrency = config.concurrency,
        "Concurrency accepted; listings are fetched sequentially"
    );

    if config.show_progress {
        print_header(
            config.repository_url.content_url().as_str(),
            &config.prefix,
            &config.output_path.display().to_string(),
        );
    }

    let client = NexusClient::from_config(&config);

    let mut writer = create_output(&config.output_path).with_context(|| {
        format!(
            "Failed to create output file '{}'",
            config.output_path.display()
        )
    })?;

    let progress = config.show_progress.then(ProgressReporter::new);

    let mut walker = TreeWalker::new(&client, &mut writer);
    if let Some(ref p) = progress {
        walker = walker.with_observer(move |snapshot| p.update(snapshot));
    }
    let result = walker.walk(&config.prefix);

    // Keep whatever was written before a failure
    let flushed = writer.flush();

    let stats = match result {
        Ok(stats) => stats,
        Err(e) => {
            if let Some(ref p) = progress {
                p.finish_and_clear();
            }
            if let Err(flush_err) = flushed {
                warn!("Failed to flush output after error: {}", flush_err);
            }
            return Err(e).context("Walk failed");
        }
    };

    flushed.context("Failed to flush output")?;

    if let Some(ref p) = progress {
        p.finish_and_clear();
    }

    info!(
        records = writer.records_written(),
        output = %config.output_path.display(),
        "Inventory written"
    );

    if config.show_progress {
        print_summary(&stats, &config.output_path.display().to_string());
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("nexus_walker=debug,warn")
    } else {
        EnvFilter::new("nexus_walker=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
