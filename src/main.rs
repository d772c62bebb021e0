mod input;
mod logging;
mod model;
mod pipeline;
mod policy;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::input::InputError;
use crate::model::{EvalError, Threshold};
use crate::pipeline::stage1_load::plan_inputs;
use crate::pipeline::stage3_report::{ReportError, ReportFormat, write_batch_tsv, write_reports};
use crate::pipeline::{VideoOutcome, run_batch};
use crate::policy::defs::builtin_taxonomy;
use crate::policy::{DisallowPolicy, PolicyError, load_policy};

const EXIT_INPUT_FAILED: u8 = 1;
const EXIT_REJECTED: u8 = 3;

#[derive(Debug, Parser)]
#[command(name = "kira-contentmod", version)]
#[command(about = "Allow/reject decisions over saved video content-moderation responses.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate one or more GetContentModeration responses.
    Run(RunArgs),
    /// Print the builtin moderation taxonomy.
    Taxonomy {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, clap::Args)]
struct RunArgs {
    /// Saved service response (.json or .json.gz); `-` reads stdin. Repeatable.
    #[arg(long = "input", short = 'i', required = true, num_args = 1..)]
    inputs: Vec<PathBuf>,

    #[arg(long, short = 'o')]
    out: PathBuf,

    /// Minimum confidence (0-100) for a detection to count.
    #[arg(long, default_value_t = Threshold::DEPLOYMENT_DEFAULT)]
    min_confidence: f64,

    /// JSON policy with `disallowed_labels` and/or `disallowed_categories`.
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Disallowed label, matched exactly. Repeatable.
    #[arg(long = "disallow")]
    disallow: Vec<String>,

    /// Disallowed category: the category label and all labels under it. Repeatable.
    #[arg(long = "disallow-category")]
    disallow_category: Vec<String>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Both)]
    format: ReportFormat,

    /// Exit with status 3 when any video is rejected.
    #[arg(long)]
    fail_on_reject: bool,

    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("failed to render taxonomy: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = matches!(&cli.command, Command::Run(args) if args.verbose);
    logging::init_logging(verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, AppError> {
    match cli.command {
        Command::Run(args) => run_moderation(&args),
        Command::Taxonomy { json } => {
            print!("{}", render_taxonomy(json)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_moderation(args: &RunArgs) -> Result<ExitCode, AppError> {
    let threshold = Threshold::new(args.min_confidence)?;
    let policy = resolve_policy(args)?;
    if policy.is_empty() {
        tracing::warn!("disallow policy is empty; every video will be allowed");
    }
    if threshold < Threshold::service_default() {
        tracing::warn!(
            threshold = %threshold,
            "threshold is below the service default of {}; responses only carry labels the job was started with",
            Threshold::SERVICE_DEFAULT
        );
    }
    tracing::debug!(labels = ?policy.iter().collect::<Vec<_>>(), "disallow policy");
    tracing::info!(
        threshold = %threshold,
        policy_labels = policy.len(),
        inputs = args.inputs.len(),
        "starting content moderation"
    );

    let outcomes = run_batch(plan_inputs(&args.inputs)?, threshold, &policy);

    for outcome in &outcomes {
        for path in write_reports(outcome, &args.out, args.format)? {
            tracing::info!(path = %path.display(), "wrote report");
        }
    }
    if outcomes.len() > 1 {
        let path = write_batch_tsv(&outcomes, &args.out)?;
        tracing::info!(path = %path.display(), "wrote batch summary");
    }

    for outcome in &outcomes {
        println!("{}", verdict_line(outcome));
    }
    Ok(exit_code(&outcomes, args.fail_on_reject))
}

/// `--policy`, `--disallow` and `--disallow-category` merge; none of them
/// gives the builtin policy.
fn resolve_policy(args: &RunArgs) -> Result<DisallowPolicy, AppError> {
    if args.policy.is_none() && args.disallow.is_empty() && args.disallow_category.is_empty() {
        return Ok(DisallowPolicy::builtin());
    }
    let mut policy = match &args.policy {
        Some(path) => load_policy(path)?,
        None => DisallowPolicy::empty(),
    };
    policy.merge(DisallowPolicy::from_labels(&args.disallow));
    for name in &args.disallow_category {
        policy.insert_category(name)?;
    }
    Ok(policy)
}

fn verdict_line(outcome: &VideoOutcome) -> String {
    let verdict = match &outcome.result {
        Ok((_, eval)) => eval.verdict.as_str(),
        Err(_) => "error",
    };
    format!("{}\t{}", outcome.input.path.display(), verdict)
}

fn exit_code(outcomes: &[VideoOutcome], fail_on_reject: bool) -> ExitCode {
    if outcomes.iter().any(|o| o.result.is_err()) {
        return ExitCode::from(EXIT_INPUT_FAILED);
    }
    let rejected = outcomes
        .iter()
        .any(|o| matches!(&o.result, Ok((_, eval)) if eval.verdict.is_rejected()));
    if fail_on_reject && rejected {
        return ExitCode::from(EXIT_REJECTED);
    }
    ExitCode::SUCCESS
}

fn render_taxonomy(json: bool) -> Result<String, serde_json::Error> {
    if json {
        let value: Vec<serde_json::Value> = builtin_taxonomy()
            .iter()
            .map(|cat| {
                serde_json::json!({
                    "id": cat.id,
                    "name": cat.name,
                    "labels": cat
                        .labels
                        .iter()
                        .map(|l| serde_json::json!({ "id": l.id, "name": l.name }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        let mut out = serde_json::to_string_pretty(&value)?;
        out.push('\n');
        return Ok(out);
    }
    let mut out = String::new();
    for cat in builtin_taxonomy() {
        out.push_str(cat.name);
        out.push('\n');
        for l in cat.labels {
            out.push_str(&format!("  {}\t{}\n", l.name, l.id));
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
