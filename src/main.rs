use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{debug, info};

use gnh_index::input::{
    InputError, fill_defaults, load_ratings_file, parse_rating_pair, run_questionnaire,
};
use gnh_index::logging;
use gnh_index::pipeline::stage3_report::{OutputFormat, render_result, write_reports};
use gnh_index::report::text::render_domain_list;
use gnh_index::{RawRatings, ScoreError, ScoreResult, score};

#[derive(Debug, Parser)]
#[command(
    name = "gnh-index",
    version,
    about = "Personal Gross National Happiness index across the nine GNH domains"
)]
struct Cli {
    /// Enable debug diagnostics on stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Answer the nine questions interactively, then submit for a score.
    Run(OutputArgs),
    /// Score ratings given as a JSON file and/or DOMAIN=VALUE pairs.
    Score(ScoreArgs),
    /// List the nine domains and their questions.
    Domains,
}

#[derive(Debug, Clone, Args)]
struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write report.txt, summary.json and ratings.tsv into this directory.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct ScoreArgs {
    /// JSON object mapping domain to rating.
    #[arg(long, value_name = "FILE")]
    ratings: Option<PathBuf>,

    #[arg(long = "rating", value_name = "DOMAIN=VALUE")]
    rating: Vec<String>,

    /// Rate every domain not given explicitly with the default of 3.
    #[arg(long)]
    fill_defaults: bool,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("invalid ratings: {0}")]
    Score(#[from] ScoreError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Domains => {
            io::stdout().lock().write_all(render_domain_list().as_bytes())?;
            Ok(())
        }
        Command::Run(output) => {
            let stdin = io::stdin();
            run_session(
                &mut stdin.lock(),
                &mut io::stderr().lock(),
                &mut io::stdout().lock(),
                &output,
            )
        }
        Command::Score(args) => {
            let raw = collect_raw(&args)?;
            let result = score(&raw)?;
            emit(&result, &args.output, &mut io::stdout().lock())
        }
    }
}

/// Questionnaire prompts go to `prompts`; `out` only ever receives the rendered result.
fn run_session<R: BufRead, P: Write, O: Write>(
    reader: &mut R,
    prompts: &mut P,
    out: &mut O,
    output: &OutputArgs,
) -> Result<(), AppError> {
    let Some(raw) = run_questionnaire(reader, prompts)? else {
        info!("questionnaire was not submitted");
        writeln!(prompts, "Not submitted; nothing was calculated.")?;
        return Ok(());
    };
    let result = score(&raw)?;
    emit(&result, output, out)
}

fn collect_raw(args: &ScoreArgs) -> Result<RawRatings, InputError> {
    let mut raw = match &args.ratings {
        Some(path) => load_ratings_file(path)?,
        None => Vec::new(),
    };
    for pair in &args.rating {
        raw.push(parse_rating_pair(pair)?);
    }
    if args.fill_defaults {
        fill_defaults(&mut raw);
    }
    debug!(
        file = args.ratings.is_some(),
        cli_pairs = args.rating.len(),
        pairs = raw.len(),
        "collected ratings"
    );
    Ok(raw)
}

fn emit<O: Write>(result: &ScoreResult, output: &OutputArgs, out: &mut O) -> Result<(), AppError> {
    let rendered = render_result(result, output.format)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    if let Some(dir) = &output.out {
        write_reports(result, dir)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
