mod cli;
mod compare;
mod error;
mod output;
mod source;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use compare::{pair_indices, report, BlockSizes, Window};
use output::{BlockRow, CompareEvent};
use source::Source;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().as_str()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    // Validate everything before any comparison runs
    let sizes = BlockSizes::new(cli.bsizes.iter().copied())?;
    let window = Window::new(cli.offset, cli.size)?;
    cli.validate()?;

    // Open every input up front; a bad path aborts the whole run
    let mut sources = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let source = Source::open(path)?;
        tracing::debug!("opened {} ({} bytes)", source.path().display(), source.len());
        sources.push(source);
    }

    for (n, (i, j)) in pair_indices(sources.len(), cli.all).into_iter().enumerate() {
        if n > 0 && !cli.json {
            println!();
        }
        compare_pair(&cli, &sources[i], &sources[j], &sizes, &window);
    }

    Ok(())
}

/// Run one comparison and render it in the selected output mode.
fn compare_pair(cli: &Cli, left: &Source, right: &Source, sizes: &BlockSizes, window: &Window) {
    if left.len() != right.len() {
        warn(
            cli,
            format!(
                "files are different sizes ({} vs. {} bytes); bytes past the shorter end count as mismatched",
                left.len(),
                right.len()
            ),
        );
    }

    tracing::debug!(
        "comparing {} vs. {}",
        left.path().display(),
        right.path().display()
    );
    let reports = compare::compare(left.bytes(), right.bytes(), sizes, window);

    // A size with no blocks would divide by zero; skip its row instead
    for size in sizes.iter() {
        if !reports.contains_key(&size) {
            warn(
                cli,
                format!("block size {} produced no blocks in the compared range", size),
            );
        }
    }

    if cli.json {
        CompareEvent::Report {
            file1: left.path().to_path_buf(),
            file2: right.path().to_path_buf(),
            offset: window.offset(),
            size: window.size(),
            blocks: reports
                .iter()
                .map(|(size, block)| BlockRow {
                    block_size: *size,
                    mismatched: block.mismatched,
                    matched: block.matched,
                    total: block.total(),
                    percent_matched: block.percent_matched(),
                })
                .collect(),
        }
        .emit();
    } else {
        println!(
            "{}",
            report::pair_header(
                &left.path().display().to_string(),
                &right.path().display().to_string(),
                window
            )
        );
        print!("{}", report::render_table(&reports));
    }
}

/// Non-fatal diagnostics: stderr for humans, a `warning` event in JSON mode.
fn warn(cli: &Cli, message: String) {
    if cli.json {
        CompareEvent::Warning { message }.emit();
    } else if !cli.quiet {
        eprintln!("{} {}", "warning:".yellow().bold(), message);
    }
}
