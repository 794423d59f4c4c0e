//! Property fallback resolution
//!
//! Replay schema versions name the same quantity differently. Call sites pass
//! every known name in priority order and take the first one the entity has.

use crate::entity::{Entity, PropertyValue};

/// First candidate present on `entity` that `extract` accepts
pub fn resolve<T>(
    entity: &dyn Entity,
    candidates: &[&str],
    extract: impl Fn(PropertyValue) -> Option<T>,
) -> Option<T> {
    candidates.iter().find_map(|name| entity.property(name).and_then(&extract))
}

pub fn resolve_int(entity: &dyn Entity, candidates: &[&str]) -> Option<i64> {
    resolve(entity, candidates, PropertyValue::as_int)
}

pub fn resolve_float(entity: &dyn Entity, candidates: &[&str]) -> Option<f64> {
    resolve(entity, candidates, PropertyValue::as_float)
}
