//! Entity model shared with the replay decoder
//!
//! Entities belong to the decoder. The core never holds a borrow across
//! events: it keeps [`EntityId`]s and looks the live entity up through the
//! [`EntityStore`] handed to every callback.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Index of an entity in the decoder's entity table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decoded property value
///
/// JSON integers decode as `Int`, everything else numeric as `Float`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Int(i64),
    Float(f64),
}

impl PropertyValue {
    /// Integer view. Floats are not truncated into integers.
    pub fn as_int(self) -> Option<i64> {
        match self {
            PropertyValue::Int(v) => Some(v),
            PropertyValue::Float(_) => None,
        }
    }

    /// Float view. Integers widen.
    pub fn as_float(self) -> Option<f64> {
        match self {
            PropertyValue::Int(v) => Some(v as f64),
            PropertyValue::Float(v) => Some(v),
        }
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Int(i64::from(v))
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<f32> for PropertyValue {
    fn from(v: f32) -> Self {
        PropertyValue::Float(f64::from(v))
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Float(v)
    }
}

/// Read access to one decoded entity
pub trait Entity {
    /// Network class name, e.g. `CDOTA_Unit_Hero_Juggernaut`
    fn class_name(&self) -> &str;

    /// Property by its flattened path. `None` when the entity has no such
    /// property; this is a normal answer, not a failure.
    fn property(&self, name: &str) -> Option<PropertyValue>;
}

/// Lookup of live entities by index
pub trait EntityStore {
    fn entity(&self, id: EntityId) -> Option<&dyn Entity>;
}

/// Plain owned entity: a class name plus a property bag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub class_name: String,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

impl EntityRecord {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self { class_name: class_name.into(), properties: HashMap::new() }
    }

    /// Builder-style property setter
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.set_property(name, value);
        self
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(name.into(), value.into());
    }
}

impl Entity for EntityRecord {
    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn property(&self, name: &str) -> Option<PropertyValue> {
        self.properties.get(name).copied()
    }
}

/// Index → entity table, the store behind the trace source
#[derive(Debug, Clone, Default)]
pub struct EntityTable {
    entities: HashMap<EntityId, EntityRecord>,
}

impl EntityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; returns the previous entity at this index
    pub fn insert(&mut self, id: EntityId, entity: EntityRecord) -> Option<EntityRecord> {
        self.entities.insert(id, entity)
    }

    pub fn get(&self, id: EntityId) -> Option<&EntityRecord> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut EntityRecord> {
        self.entities.get_mut(&id)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<EntityRecord> {
        self.entities.remove(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl EntityStore for EntityTable {
    fn entity(&self, id: EntityId) -> Option<&dyn Entity> {
        self.entities.get(&id).map(|e| e as &dyn Entity)
    }
}
