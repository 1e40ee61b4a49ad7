use kurve_core::{AgentId, KurveError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent {0} has no spawn position")]
    Unplaced(AgentId),

    #[error("agent {0} has no initial heading")]
    NoHeading(AgentId),

    #[error(transparent)]
    Core(#[from] KurveError),
}

pub type AgentResult<T> = Result<T, AgentError>;
