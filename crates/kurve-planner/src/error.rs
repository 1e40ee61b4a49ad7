//! Planner error type.

use kurve_behavior::BehaviorError;
use kurve_core::AgentId;
use kurve_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("planner configuration error: {0}")]
    Config(String),

    #[error("no candidate sequence scored for agent {agent}")]
    NoPlan { agent: AgentId },

    #[error("conflict query failed: {0}")]
    Spatial(#[from] SpatialError),
}

pub type PlannerResult<T> = Result<T, PlannerError>;

impl From<PlannerError> for BehaviorError {
    fn from(e: PlannerError) -> Self {
        match e {
            PlannerError::Config(msg) => BehaviorError::Config(msg),
            PlannerError::NoPlan { agent } => BehaviorError::NoPlan { agent },
            other => BehaviorError::Failed { policy: "lookahead", source: Box::new(other) },
        }
    }
}
