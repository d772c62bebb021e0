pub mod stage1_load;
pub mod stage2_evaluate;
pub mod stage3_report;

use rayon::prelude::*;
use thiserror::Error;

use crate::input::{DetectionSet, InputError};
use crate::model::{EvalError, Evaluation, Threshold};
use crate::policy::DisallowPolicy;
use stage1_load::{InputSpec, run_stage1};
use stage2_evaluate::run_stage2;

#[derive(Debug, Error)]
pub enum VideoError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

#[derive(Debug)]
pub struct VideoOutcome {
    pub input: InputSpec,
    pub result: Result<(DetectionSet, Evaluation), VideoError>,
}

pub fn run_video(
    input: &InputSpec,
    threshold: Threshold,
    policy: &DisallowPolicy,
) -> Result<(DetectionSet, Evaluation), VideoError> {
    let set = run_stage1(&input.path)?;
    let eval = run_stage2(&set.detections, threshold, policy)?;
    tracing::info!(
        input = %input.path.display(),
        verdict = %eval.verdict,
        retained = eval.n_retained,
        "evaluated video"
    );
    Ok((set, eval))
}

/// Evaluates every input independently; outcomes keep input order.
pub fn run_batch(
    inputs: Vec<InputSpec>,
    threshold: Threshold,
    policy: &DisallowPolicy,
) -> Vec<VideoOutcome> {
    inputs
        .into_par_iter()
        .map(|input| {
            let result = run_video(&input, threshold, policy);
            if let Err(err) = &result {
                tracing::error!(input = %input.path.display(), "{err}");
            }
            VideoOutcome { input, result }
        })
        .collect()
}
