//! Fluent builder for constructing an [`Arena`].

use kurve_agent::{Agent, AgentSpec};
use kurve_behavior::{BehaviorError, Policy};
use kurve_core::{AgentId, AgentRng, ArenaConfig, Kinematics, KurveError, SimRng, Vec2, rng::POLICY_STREAM};
use tracing::debug;

use crate::{Arena, SimError, SimResult};

type PolicyFactory = Box<dyn FnOnce(&Kinematics, AgentRng) -> Result<Box<dyn Policy>, BehaviorError>>;

/// Fluent builder for [`Arena`].
///
/// Agents are numbered in the order they are added.  Any spec without a
/// position or heading gets one rolled from the arena seed:
///
/// - positions uniformly inside the bounds shrunk by `spawn_margin`, at least
///   `spawn_separation` away from every agent placed before it;
/// - headings uniformly in `[0, 2π)`.
///
/// # Example
///
/// ```rust,ignore
/// let mut arena = ArenaBuilder::new(config)
///     .agent(AgentSpec::new(kin).name("evader"), WallEvader::default())
///     .agent_with(AgentSpec::new(kin).name("planner"), |kin, rng| {
///         LookaheadPlanner::new(PlannerConfig::default(), kin, rng)
///     })
///     .build()?;
/// arena.run(&mut NoopObserver)?;
/// ```
pub struct ArenaBuilder {
    config:  ArenaConfig,
    entries: Vec<(AgentSpec, PolicyFactory)>,
}

impl ArenaBuilder {
    pub fn new(config: ArenaConfig) -> Self {
        Self { config, entries: Vec::new() }
    }

    /// Add an agent driven by a ready-made policy.
    pub fn agent<P: Policy + 'static>(mut self, spec: AgentSpec, policy: P) -> Self {
        let factory: PolicyFactory =
            Box::new(move |_: &Kinematics, _: AgentRng| Ok(Box::new(policy) as Box<dyn Policy>));
        self.entries.push((spec, factory));
        self
    }

    /// Add an agent whose policy is built from its kinematics and a policy
    /// RNG seeded from the arena seed and the agent's ID.
    pub fn agent_with<P, E, F>(mut self, spec: AgentSpec, make: F) -> Self
    where
        P: Policy + 'static,
        E: Into<BehaviorError>,
        F: FnOnce(&Kinematics, AgentRng) -> Result<P, E> + 'static,
    {
        let factory: PolicyFactory = Box::new(move |kin: &Kinematics, rng: AgentRng| match make(kin, rng) {
            Ok(policy) => Ok(Box::new(policy) as Box<dyn Policy>),
            Err(e) => Err(e.into()),
        });
        self.entries.push((spec, factory));
        self
    }

    /// Number of agents added so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate, roll spawns, and construct the [`Arena`].
    ///
    /// # Errors
    ///
    /// - [`SimError::Core`] if the config is invalid or a spawn point cannot
    ///   be found within `spawn_attempts` rolls.
    /// - [`SimError::Config`] if no agents were added.
    /// - [`SimError::Agent`] if an agent spec is invalid.
    /// - [`SimError::Policy`] if a policy factory fails.
    pub fn build(self) -> SimResult<Arena> {
        self.config.validate()?;
        if self.entries.is_empty() {
            return Err(SimError::Config("arena needs at least one agent".into()));
        }

        let mut rng = SimRng::new(self.config.seed);
        let mut placed: Vec<Vec2> = self.entries.iter().filter_map(|(spec, _)| spec.position).collect();

        let mut agents: Vec<Agent> = Vec::with_capacity(self.entries.len());
        let mut policies: Vec<Box<dyn Policy>> = Vec::with_capacity(self.entries.len());

        for (i, (mut spec, make)) in self.entries.into_iter().enumerate() {
            let id = AgentId::try_from(i).map_err(|_| SimError::Config(format!("too many agents ({i})")))?;
            if spec.position.is_none() {
                let pos = roll_position(&self.config, &placed, &mut rng)?;
                placed.push(pos);
                spec.position = Some(pos);
            }
            if spec.heading.is_none() {
                spec.heading = Some(rng.heading());
            }

            let kin = spec.kinematics;
            let agent = spec.build(id, self.config.seed)?;
            let policy = make(&kin, AgentRng::new(self.config.seed, id, POLICY_STREAM))
                .map_err(|source| SimError::Policy { agent: id, source })?;
            debug!(agent = %id, name = %agent.name, policy = policy.name(), pos = %agent.pos, "spawned");

            agents.push(agent);
            policies.push(policy);
        }

        #[allow(unused_mut)]
        let mut arena = Arena::new(self.config, agents, policies);

        #[cfg(feature = "parallel")]
        if let Some(n) = arena.config.num_threads {
            arena.pool = Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?);
        }

        Ok(arena)
    }
}

/// Roll a spawn point at least `spawn_separation` away from every point in
/// `placed`.
fn roll_position(config: &ArenaConfig, placed: &[Vec2], rng: &mut SimRng) -> SimResult<Vec2> {
    let region = config.bounds.shrink(config.spawn_margin);
    let min_sq = config.spawn_separation * config.spawn_separation;
    for _ in 0..config.spawn_attempts {
        let p = Vec2::new(
            rng.uniform(region.xmin, region.xmax),
            rng.uniform(region.ymin, region.ymax),
        );
        if placed.iter().all(|q| q.distance_sq(p) >= min_sq) {
            return Ok(p);
        }
    }
    Err(KurveError::SpawnExhausted { attempts: config.spawn_attempts }.into())
}
