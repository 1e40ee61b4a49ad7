//! duel: a seeded three-way match in the classic 800×600 arena.
//!
//! A wall evader, a lookahead planner, and a random steerer play with trail
//! gaps enabled until one is left or the tick budget runs out.  Logging is
//! controlled through `RUST_LOG`, e.g. `RUST_LOG=kurve_sim=info,kurve_planner=debug`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kurve_agent::{AgentSpec, Collision};
use kurve_behavior::{RandomSteering, RandomSteeringConfig, WallEvader};
use kurve_core::{AgentId, ArenaConfig, GapConfig, Tick};
use kurve_planner::{LookaheadPlanner, PlannerConfig};
use kurve_sim::{ArenaBuilder, ArenaObserver, Outcome};

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH:        f64 = 800.0;
const HEIGHT:       f64 = 600.0;
const FPS:          f64 = 30.0;
const SPEED_FACTOR: f64 = 1.0;
const RADIUS:       f64 = 2.0;
const SEED:         u64 = 42;
const TOTAL_TICKS:  u64 = 20_000;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints each elimination as it happens and counts ticks.
#[derive(Default)]
struct Commentator {
    ticks: u64,
}

impl ArenaObserver for Commentator {
    fn on_agent_disabled(&mut self, tick: Tick, agent: AgentId, cause: Collision) {
        println!("  {tick:>7}  {agent} out: {cause}");
    }

    fn on_tick_end(&mut self, _tick: Tick, _active: usize) {
        self.ticks += 1;
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== duel: kurve arena ===");
    println!("Arena: {WIDTH}×{HEIGHT}  |  Seed: {SEED}  |  Max ticks: {TOTAL_TICKS}");
    println!();

    // 1. Arena config and shared kinematics.
    let config = ArenaConfig {
        total_ticks: TOTAL_TICKS,
        seed: SEED,
        stop_at_last_survivor: true,
        ..ArenaConfig::classic(WIDTH, HEIGHT)
    };
    let kin = config.classic_kinematics(FPS, SPEED_FACTOR, RADIUS)?;
    let gaps = GapConfig::classic(RADIUS);
    println!(
        "Kinematics: speed {:.3}/tick, turn radius {:.1}, collision radius {RADIUS}",
        kin.speed,
        kin.turn_radius()
    );

    // 2. Build the arena; spawns are rolled from the seed.
    let mut arena = ArenaBuilder::new(config)
        .agent(AgentSpec::new(kin).name("evader").gaps(gaps), WallEvader::default())
        .agent_with(AgentSpec::new(kin).name("planner").gaps(gaps), |kin, rng| {
            LookaheadPlanner::new(PlannerConfig::default(), kin, rng)
        })
        .agent_with(AgentSpec::new(kin).name("wanderer").gaps(gaps), |_, rng| {
            RandomSteering::new(RandomSteeringConfig::default(), rng)
        })
        .build()?;

    for agent in arena.agents() {
        println!(
            "  {:<10} spawn ({:6.1}, {:6.1})  heading {:6.1}°",
            agent.name,
            agent.pos.x,
            agent.pos.y,
            agent.heading.to_degrees()
        );
    }
    println!();

    // 3. Run.
    let mut obs = Commentator::default();
    let t0 = Instant::now();
    let outcome = arena.run(&mut obs)?;
    let elapsed = t0.elapsed();
    info!(ticks = obs.ticks, secs = elapsed.as_secs_f64(), "match finished");

    // 4. Summary.
    println!();
    println!("Match complete in {:.3} s ({} ticks)", elapsed.as_secs_f64(), obs.ticks);
    println!("{:<10} {:<8} {:>8} {:>10}", "Agent", "Alive", "Ticks", "Distance");
    println!("{}", "-".repeat(40));
    for agent in arena.agents() {
        println!(
            "{:<10} {:<8} {:>8} {:>10.1}",
            agent.name,
            if arena.is_active(agent.id) { "yes" } else { "no" },
            agent.ticks_survived(),
            agent.distance,
        );
    }

    // 5. JSON summary.
    let summary = summary_json(&arena, &outcome);
    std::fs::create_dir_all("output/duel")?;
    let path = Path::new("output/duel/summary.json");
    std::fs::write(path, serde_json::to_string_pretty(&summary)?)?;
    println!();
    println!("Summary written to {}", path.display());

    Ok(())
}

fn summary_json(arena: &kurve_sim::Arena, outcome: &Outcome) -> serde_json::Value {
    let agents: Vec<_> = arena
        .agents()
        .iter()
        .map(|a| {
            json!({
                "id": a.id.0,
                "name": a.name,
                "alive": arena.is_active(a.id),
                "ticks_survived": a.ticks_survived(),
                "distance": a.distance,
                "final_position": a.pos.to_array(),
                "trail_gaps": a.trail.gap_count(),
            })
        })
        .collect();
    let eliminations: Vec<_> = outcome
        .eliminations
        .iter()
        .map(|e| json!({ "agent": e.agent.0, "tick": e.tick.0, "cause": e.cause.to_string() }))
        .collect();
    json!({
        "seed": arena.config.seed,
        "ticks": outcome.ticks.0,
        "winner": outcome.winner().map(|id| id.0),
        "agents": agents,
        "eliminations": eliminations,
    })
}
