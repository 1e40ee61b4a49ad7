use kurve_core::{AgentId, KurveError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),

    /// No candidate sequence received a finite score.  Unreachable while the
    /// all-straight sequence is enumerated; indicates a logic defect.
    #[error("planner found no plan for agent {agent}")]
    NoPlan { agent: AgentId },

    /// A policy-specific failure with no dedicated variant.
    #[error("{policy} policy failed: {source}")]
    Failed {
        policy: &'static str,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(transparent)]
    Core(#[from] KurveError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
