//! # path_core - Hero path extraction from decoded replays
//!
//! Samples one hero's world position and lane economy from the entity and
//! tick events of a replay decoder, and renders the series as JSON for
//! offline analysis (heatmaps, path playback).
//!
//! ## Pipeline
//! - [`registry`]: spots the team data entities and the tracked hero
//! - [`sampler`]: tick window and cadence policy
//! - [`coords`] / [`team_stats`]: position and stat lookup, built on [`property`]
//! - [`sample`]: the append-only series and its text format
//!
//! The decoder itself sits behind [`source::ReplaySource`]; [`trace::TraceSource`]
//! replays a JSON Lines event dump.

pub mod analysis;
pub mod config;
pub mod coords;
pub mod entity;
pub mod error;
pub mod processor;
pub mod property;
pub mod registry;
pub mod sample;
pub mod sampler;
pub mod source;
pub mod team_stats;
pub mod trace;

pub use analysis::{format_game_time, sample_at_time, PathSummary};
pub use config::SamplerConfig;
pub use coords::WorldPos;
pub use entity::{Entity, EntityId, EntityRecord, EntityStore, EntityTable, PropertyValue};
pub use error::{ConfigError, OutputError, SourceError};
pub use processor::{extract_path, PathProcessor};
pub use registry::{EntityRegistry, TrackedParticipant};
pub use sample::{parse_samples, Sample, SampleBuffer};
pub use sampler::{SamplerPhase, TickOutcome, TickSampler};
pub use source::{ReplayHandler, ReplaySource};
pub use team_stats::{EconomySnapshot, TeamSide, TeamSlot, TeamStat};
pub use trace::{TraceRecord, TraceSource};
