use crate::models::{RiskLabel, FEATURE_COUNT};
use std::path::Path;
use tract_onnx::prelude::*;

type RunnableOnnxModel = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Scoring capability exposed by the loaded model artifact.
///
/// The artifact is loaded once at startup and shared read-only for the life of
/// the process; implementations must be safe to call from concurrent handlers.
/// Tests substitute a stub implementation so no artifact is needed.
pub trait Classifier: Send + Sync {
    /// Scores one feature vector and returns the binary label.
    ///
    /// The call is total for well-formed vectors; an error here means the
    /// artifact violated its output contract.
    fn predict_label(&self, features: [f32; FEATURE_COUNT]) -> anyhow::Result<RiskLabel>;
}

/// Pre-trained binary classifier deserialized from an ONNX file.
pub struct OnnxRiskModel {
    plan: RunnableOnnxModel,
}

impl OnnxRiskModel {
    /// Deserializes the classifier from `path` and prepares a runnable plan
    /// expecting a single row of [`FEATURE_COUNT`] f32 columns.
    ///
    /// The artifact is a required build-time dependency; a missing or corrupt
    /// file is a fatal startup error for the caller, with no retry.
    pub fn load<P: AsRef<Path>>(path: P) -> TractResult<Self> {
        let plan = tract_onnx::onnx()
            .model_for_path(path)?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), tvec!(1, FEATURE_COUNT)),
            )?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self { plan })
    }
}

impl Classifier for OnnxRiskModel {
    fn predict_label(&self, features: [f32; FEATURE_COUNT]) -> anyhow::Result<RiskLabel> {
        let input = Tensor::from_shape(&[1, FEATURE_COUNT], &features)?;
        let outputs = self.plan.run(tvec!(input.into()))?;
        let output = outputs
            .first()
            .ok_or_else(|| anyhow::anyhow!("model produced no outputs"))?;

        // Classifiers exported from sklearn-style pipelines emit an i64 label
        // tensor; raw logit/probability outputs are mapped onto the same
        // binary label space.
        let raw = if let Ok(labels) = output.to_array_view::<i64>() {
            *labels
                .iter()
                .next()
                .ok_or_else(|| anyhow::anyhow!("model returned an empty label tensor"))?
        } else {
            let scores = output.to_array_view::<f32>()?;
            let scores: Vec<f32> = scores.iter().copied().collect();
            match scores.as_slice() {
                [] => anyhow::bail!("model returned an empty output tensor"),
                [score] => i64::from(*score >= 0.5),
                [p_repay, p_default, ..] => i64::from(p_default > p_repay),
            }
        };

        Ok(RiskLabel::from_raw(raw))
    }
}
