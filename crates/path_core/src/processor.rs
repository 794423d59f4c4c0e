//! Per-run processing state
//!
//! [`PathProcessor`] owns everything one extraction mutates: the registry,
//! the sampler and the buffer. It is the handler the replay source drives.

use crate::config::SamplerConfig;
use crate::entity::{EntityId, EntityStore};
use crate::error::SourceError;
use crate::registry::EntityRegistry;
use crate::sample::SampleBuffer;
use crate::sampler::TickSampler;
use crate::source::{ReplayHandler, ReplaySource};

/// Most samples reserved up front; longer windows grow the buffer on demand
pub const MAX_PREALLOCATED_SAMPLES: usize = 8192;

#[derive(Debug, Clone)]
pub struct PathProcessor {
    registry: EntityRegistry,
    sampler: TickSampler,
    buffer: SampleBuffer,
}

impl PathProcessor {
    pub fn new(target_player_id: i64, config: SamplerConfig) -> Self {
        let buffer =
            SampleBuffer::with_capacity(config.max_samples().min(MAX_PREALLOCATED_SAMPLES));
        Self {
            registry: EntityRegistry::new(target_player_id),
            sampler: TickSampler::new(config),
            buffer,
        }
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn sampler(&self) -> &TickSampler {
        &self.sampler
    }

    pub fn samples(&self) -> &SampleBuffer {
        &self.buffer
    }

    /// End of run: hand over the collected series
    pub fn finish(self) -> SampleBuffer {
        self.buffer
    }
}

impl ReplayHandler for PathProcessor {
    fn on_entity_created(&mut self, store: &dyn EntityStore, id: EntityId) {
        if let Some(entity) = store.entity(id) {
            self.registry.on_entity_created(id, entity);
        }
    }

    fn on_tick_start(&mut self, store: &dyn EntityStore, tick: i32, _synthetic: bool) {
        self.sampler.on_tick_start(tick, store, &self.registry, &mut self.buffer);
    }
}

/// Run `source` to completion and return the samples for `target_player_id`
pub fn extract_path(
    source: &mut dyn ReplaySource,
    target_player_id: i64,
    config: SamplerConfig,
) -> Result<SampleBuffer, SourceError> {
    let mut processor = PathProcessor::new(target_player_id, config);
    source.run(&mut processor)?;
    Ok(processor.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityRecord, EntityTable};
    use crate::sampler::SamplerPhase;

    #[test]
    fn test_processor_wires_registry_and_sampler() {
        let mut table = EntityTable::new();
        let mut processor = PathProcessor::new(10, SamplerConfig::default());

        processor.on_tick_start(&table, 0, false);
        assert_eq!(processor.sampler().phase(), SamplerPhase::Unarmed);

        let hero = EntityRecord::new("CDOTA_Unit_Hero_Pudge")
            .with_property("m_iPlayerID", 10)
            .with_property("m_vecOrigin[0]", -500.0)
            .with_property("m_vecOrigin[1]", 250.0);
        table.insert(EntityId(42), hero);
        processor.on_entity_created(&table, EntityId(42));

        processor.on_tick_start(&table, 30, false);
        processor.on_tick_start(&table, 31, true);
        processor.on_tick_start(&table, 38, false);

        assert_eq!(processor.registry().tracked().map(|t| t.entity), Some(EntityId(42)));
        let samples = processor.finish();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples.as_slice()[0].x, -500.0);
    }

    #[test]
    fn test_huge_window_does_not_preallocate_it() {
        let config = SamplerConfig::from_json(r#"{"max_duration_secs": 1e30}"#).unwrap();
        let mut processor = PathProcessor::new(2, config);
        assert!(processor.samples().capacity() <= MAX_PREALLOCATED_SAMPLES);

        let mut table = EntityTable::new();
        let hero = EntityRecord::new("CDOTA_Unit_Hero_Lina")
            .with_property("m_iPlayerID", 2)
            .with_property("m_vecOrigin[0]", 1.0)
            .with_property("m_vecOrigin[1]", 2.0);
        table.insert(EntityId(7), hero);
        processor.on_entity_created(&table, EntityId(7));
        processor.on_tick_start(&table, 0, false);
        processor.on_tick_start(&table, 30 * 3600 * 24, false);

        assert_eq!(processor.finish().len(), 2);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let table = EntityTable::new();
        let mut processor = PathProcessor::new(0, SamplerConfig::default());

        processor.on_entity_created(&table, EntityId(1));
        assert!(processor.registry().tracked().is_none());
    }
}
