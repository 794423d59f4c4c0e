//! Tick sampler
//!
//! ```text
//! Unarmed ──(hero adopted)──▶ Armed ──(window exceeded)──▶ Closed
//! ```
//!
//! The first tick seen while armed fixes the time origin. Closed only stops
//! sampling; the run keeps consuming events.

use crate::config::SamplerConfig;
use crate::coords;
use crate::entity::EntityStore;
use crate::registry::EntityRegistry;
use crate::sample::{Sample, SampleBuffer};
use crate::team_stats::EconomySnapshot;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerPhase {
    Unarmed,
    Armed,
    Closed,
}

/// What happened to one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No hero tracked yet
    Unarmed,
    Accepted,
    /// Inside the spacing of the last accepted tick
    TooSoon,
    /// Hero position not resolvable this tick
    NoPosition,
    /// Window exceeded, now or earlier
    Closed,
}

#[derive(Debug, Clone)]
pub struct TickSampler {
    config: SamplerConfig,
    phase: SamplerPhase,
    /// Absolute time of the first armed tick
    origin: Option<f32>,
    last_accepted_tick: Option<i32>,
}

impl TickSampler {
    pub fn new(config: SamplerConfig) -> Self {
        Self { config, phase: SamplerPhase::Unarmed, origin: None, last_accepted_tick: None }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn phase(&self) -> SamplerPhase {
        self.phase
    }

    pub fn last_accepted_tick(&self) -> Option<i32> {
        self.last_accepted_tick
    }

    /// Handle one tick start
    pub fn on_tick_start(
        &mut self,
        tick: i32,
        store: &dyn EntityStore,
        registry: &EntityRegistry,
        buffer: &mut SampleBuffer,
    ) -> TickOutcome {
        let tracked = match (self.phase, registry.tracked()) {
            (SamplerPhase::Closed, _) => return TickOutcome::Closed,
            (_, None) => return TickOutcome::Unarmed,
            (_, Some(tracked)) => *tracked,
        };
        self.phase = SamplerPhase::Armed;

        let current_time = tick as f32 / self.config.tickrate;
        let origin = *self.origin.get_or_insert(current_time);
        let relative_time = current_time - origin;

        if relative_time > self.config.max_duration_secs {
            self.phase = SamplerPhase::Closed;
            info!(tick, relative_time, "sampling window closed");
            return TickOutcome::Closed;
        }

        if let Some(last) = self.last_accepted_tick {
            if i64::from(tick) - i64::from(last) < i64::from(self.config.min_tick_spacing) {
                return TickOutcome::TooSoon;
            }
        }

        let Some(pos) = registry
            .tracked_entity()
            .and_then(|id| store.entity(id))
            .and_then(|hero| coords::reconstruct(hero, self.config.cell_size))
        else {
            debug!(tick, entity = %tracked.entity, "no hero position, tick skipped");
            return TickOutcome::NoPosition;
        };

        let eco = EconomySnapshot::resolve(store, registry.teams(), tracked.player_id);
        buffer.push(Sample {
            t: relative_time,
            x: pos.x,
            y: pos.y,
            last_hits: eco.last_hits,
            creep_gold: eco.creep_gold,
            neutral_gold: eco.neutral_gold,
            hero_kill_gold: eco.hero_kill_gold,
        });
        self.last_accepted_tick = Some(tick);

        TickOutcome::Accepted
    }
}
