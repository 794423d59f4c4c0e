//! Replay decoder interface
//!
//! A [`ReplaySource`] decodes a replay and pushes events, strictly in order,
//! into a [`ReplayHandler`]. Ticks never go backwards.

use crate::entity::{EntityId, EntityStore};
use crate::error::SourceError;

pub trait ReplayHandler {
    /// An entity was created; it is already visible through `store`
    fn on_entity_created(&mut self, store: &dyn EntityStore, id: EntityId);

    /// A new tick begins. `synthetic` marks ticks the decoder generated
    /// itself rather than read from the stream.
    fn on_tick_start(&mut self, store: &dyn EntityStore, tick: i32, synthetic: bool);
}

pub trait ReplaySource {
    /// Drive `handler` to the end of the stream. Decoding errors are fatal.
    fn run(&mut self, handler: &mut dyn ReplayHandler) -> Result<(), SourceError>;
}
