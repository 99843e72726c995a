//! # chatstat CLI
//!
//! Command-line interface for the chatstat library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatstat::ChatstatError;
use chatstat::cli::Args;
use chatstat::config::ReportConfig;
use chatstat::core::{RankedAnalysis, Subject, analyze_corpus_with_stats, chart_title};
use chatstat::corpus::Corpus;
use chatstat::format::{OutputFormat, to_format_string, write_to_format};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatError> {
    let total_start = Instant::now();
    let analysis_config = args.analysis_config();
    let report_config = args.report_config();

    let corpus = if args.input == "-" {
        Corpus::from_reader(std::io::stdin().lock())?
    } else {
        Corpus::from_path(&args.input)?
    };
    let (ranked, stats) = analyze_corpus_with_stats(corpus, &analysis_config);

    // Validate the subject before writing anything
    let subject = args.subject.as_deref().map(Subject::from_name);
    if let Some(subject) = &subject {
        ranked.counters(subject)?;
        let format = args.format.map(OutputFormat::from);
        if args.output.is_none() && format.is_some_and(|f| f != OutputFormat::Text) {
            return Err(ChatstatError::invalid_format(
                "output",
                "--subject prints a text report; use -o to write JSON or CSV",
            ));
        }
    }

    match &args.output {
        Some(output_path) => {
            let format = match args.format {
                Some(format) => format.into(),
                None => OutputFormat::from_path(output_path)?,
            };
            write_to_format(&ranked, output_path, format, &report_config)?;

            println!("chatstat v{}", env!("CARGO_PKG_VERSION"));
            println!("Input:        {}", args.input);
            println!("Output:       {} ({})", output_path, format);
            println!("Participants: {}", stats.participant_count);
            println!("Messages:     {}", stats.message_count);
            if stats.skipped_events > 0 {
                println!("Skipped:      {} event(s)", stats.skipped_events);
            }
            println!(
                "Time:         {:.2}s ({:.0} messages/sec)",
                total_start.elapsed().as_secs_f64(),
                stats.throughput()
            );
            if let Some(subject) = &subject {
                println!();
                print!("{}", subject_report(&ranked, subject, &report_config)?);
            }
        }
        None => {
            let report = match &subject {
                Some(subject) => subject_report(&ranked, subject, &report_config)?,
                None => {
                    let format: OutputFormat = args.format.map(Into::into).unwrap_or_default();
                    to_format_string(&ranked, format, &report_config)?
                }
            };
            print!("{}", report);
            if !report.ends_with('\n') {
                println!();
            }
        }
    }

    tracing::debug!(
        elapsed_ms = total_start.elapsed().as_millis() as u64,
        "done"
    );
    Ok(())
}

/// Renders one subject's tables under chart captions.
fn subject_report(
    ranked: &RankedAnalysis,
    subject: &Subject,
    config: &ReportConfig,
) -> Result<String, ChatstatError> {
    let counters = ranked.counters(subject)?;
    let mut out = format!("{}: {} message(s)\n", subject, counters.message_count);

    for &category in &config.categories {
        let entries = config.limit(counters.table(category));
        out.push('\n');
        out.push_str(&chart_title(subject, category, entries.len()));
        out.push('\n');
        if entries.is_empty() {
            out.push_str("  (none)\n");
        }
        for (i, entry) in entries.iter().enumerate() {
            out.push_str(&format!("  {:>2}. {} ({})\n", i + 1, entry.key, entry.count));
        }
    }

    if let Some(url) = ranked.top_sticker_url(subject)? {
        out.push_str(&format!("\nFavourite sticker: {}\n", url));
    }
    Ok(out)
}
