//! Decoded event trace reader
//!
//! The upstream decoder dumps entity and tick events as JSON Lines:
//!
//! ```text
//! {"event":"create","index":300,"class":"CDOTA_Unit_Hero_Axe","props":{"m_iPlayerID":2}}
//! {"event":"update","index":300,"props":{"CBodyComponent.m_cellX":70}}
//! {"event":"delete","index":300}
//! {"event":"tick","tick":1800,"synthetic":false}
//! ```
//!
//! [`TraceSource`] keeps the live entity table and replays the events into a
//! [`ReplayHandler`]. Anything malformed aborts the run.

use crate::entity::{EntityId, EntityRecord, EntityTable, PropertyValue};
use crate::error::SourceError;
use crate::source::{ReplayHandler, ReplaySource};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One line of the trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum TraceRecord {
    Create {
        index: u32,
        class: String,
        #[serde(default)]
        props: HashMap<String, PropertyValue>,
    },
    Update {
        index: u32,
        props: HashMap<String, PropertyValue>,
    },
    Delete {
        index: u32,
    },
    Tick {
        tick: i32,
        #[serde(default)]
        synthetic: bool,
    },
}

pub struct TraceSource<R> {
    reader: R,
    origin: PathBuf,
    entities: EntityTable,
    last_tick: Option<i32>,
}

impl TraceSource<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|source| SourceError::Io { path: path.to_path_buf(), source })?;
        Ok(Self::with_origin(BufReader::new(file), path.to_path_buf()))
    }
}

impl<R: BufRead> TraceSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self::with_origin(reader, PathBuf::from("<reader>"))
    }

    fn with_origin(reader: R, origin: PathBuf) -> Self {
        Self { reader, origin, entities: EntityTable::new(), last_tick: None }
    }

    /// Live entities at the current stream position
    pub fn entities(&self) -> &EntityTable {
        &self.entities
    }

    fn apply(
        &mut self,
        line: usize,
        record: TraceRecord,
        handler: &mut dyn ReplayHandler,
    ) -> Result<(), SourceError> {
        match record {
            TraceRecord::Create { index, class, props } => {
                let id = EntityId(index);
                if self.entities.contains(id) {
                    return Err(SourceError::DuplicateEntity { line, index });
                }
                self.entities.insert(id, EntityRecord { class_name: class, properties: props });
                handler.on_entity_created(&self.entities, id);
            }
            TraceRecord::Update { index, props } => {
                let entity = self
                    .entities
                    .get_mut(EntityId(index))
                    .ok_or(SourceError::UnknownEntity { line, index })?;
                entity.properties.extend(props);
            }
            TraceRecord::Delete { index } => {
                self.entities
                    .remove(EntityId(index))
                    .ok_or(SourceError::UnknownEntity { line, index })?;
            }
            TraceRecord::Tick { tick, synthetic } => {
                if let Some(previous) = self.last_tick {
                    if tick < previous {
                        return Err(SourceError::TickOrder { line, tick, previous });
                    }
                }
                self.last_tick = Some(tick);
                handler.on_tick_start(&self.entities, tick, synthetic);
            }
        }
        Ok(())
    }
}

impl<R: BufRead> ReplaySource for TraceSource<R> {
    fn run(&mut self, handler: &mut dyn ReplayHandler) -> Result<(), SourceError> {
        let mut line_no = 0;
        let mut buf = String::new();

        loop {
            buf.clear();
            let read = self
                .reader
                .read_line(&mut buf)
                .map_err(|source| SourceError::Io { path: self.origin.clone(), source })?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let text = buf.trim();
            if text.is_empty() {
                continue;
            }

            let record: TraceRecord = serde_json::from_str(text)
                .map_err(|source| SourceError::Malformed { line: line_no, source })?;
            self.apply(line_no, record, handler)?;
        }

        debug!(lines = line_no, entities = self.entities.len(), "trace finished");
        Ok(())
    }
}
