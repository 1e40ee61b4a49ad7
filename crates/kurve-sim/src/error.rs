use kurve_agent::AgentError;
use kurve_behavior::BehaviorError;
use kurve_core::{AgentId, KurveError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("arena configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] KurveError),

    #[error("agent setup failed: {0}")]
    Agent(#[from] AgentError),

    #[error("policy of agent {agent} failed: {source}")]
    Policy {
        agent: AgentId,
        #[source]
        source: BehaviorError,
    },

    #[cfg(feature = "parallel")]
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type SimResult<T> = Result<T, SimError>;
