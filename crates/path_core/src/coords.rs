//! World position reconstruction
//!
//! Newer replays split a position into an integer grid cell and a float
//! offset inside the cell; older ones carry one absolute origin vector.
//! The grid form is tried first.

use crate::entity::Entity;
use crate::property::{resolve_float, resolve_int};
use serde::{Deserialize, Serialize};

/// World units per grid cell
pub const CELL_SIZE: f32 = 128.0;

const CELL_X: &[&str] = &["CBodyComponent.m_cellX", "m_cellX"];
const CELL_Y: &[&str] = &["CBodyComponent.m_cellY", "m_cellY"];

const LOCAL_X: &[&str] = &[
    "CBodyComponent.m_vecOrigin.x",
    "CBodyComponent.m_vecOrigin[0]",
    "CBodyComponent.m_vecX",
    "m_vecX",
    "m_vecOrigin[0]",
];
const LOCAL_Y: &[&str] = &[
    "CBodyComponent.m_vecOrigin.y",
    "CBodyComponent.m_vecOrigin[1]",
    "CBodyComponent.m_vecY",
    "m_vecY",
    "m_vecOrigin[1]",
];

const ORIGIN_X: &[&str] = &["m_vecOrigin[0]"];
const ORIGIN_Y: &[&str] = &["m_vecOrigin[1]"];

/// Position in world units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: WorldPos) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Reconstruct the entity's world position.
///
/// `None` when neither a full cell pair nor a full origin pair is present.
pub fn reconstruct(entity: &dyn Entity, cell_size: f32) -> Option<WorldPos> {
    let cell_x = resolve_int(entity, CELL_X);
    let cell_y = resolve_int(entity, CELL_Y);

    if let (Some(cx), Some(cy)) = (cell_x, cell_y) {
        let lx = resolve_float(entity, LOCAL_X).unwrap_or(0.0) as f32;
        let ly = resolve_float(entity, LOCAL_Y).unwrap_or(0.0) as f32;
        return Some(WorldPos { x: cx as f32 * cell_size + lx, y: cy as f32 * cell_size + ly });
    }

    let x = resolve_float(entity, ORIGIN_X)?;
    let y = resolve_float(entity, ORIGIN_Y)?;
    Some(WorldPos { x: x as f32, y: y as f32 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityRecord;

    fn hero() -> EntityRecord {
        EntityRecord::new("CDOTA_Unit_Hero_Juggernaut")
    }

    #[test]
    fn test_cell_plus_local_offset() {
        let e = hero()
            .with_property("CBodyComponent.m_cellX", 5)
            .with_property("CBodyComponent.m_cellY", 3)
            .with_property("CBodyComponent.m_vecX", 10.0)
            .with_property("CBodyComponent.m_vecY", 20.0);

        assert_eq!(reconstruct(&e, CELL_SIZE), Some(WorldPos::new(650.0, 404.0)));
    }

    #[test]
    fn test_missing_offset_axis_defaults_to_zero() {
        let e = hero()
            .with_property("m_cellX", 5)
            .with_property("m_cellY", 3)
            .with_property("m_vecY", 20.0);

        assert_eq!(reconstruct(&e, CELL_SIZE), Some(WorldPos::new(640.0, 404.0)));
    }

    #[test]
    fn test_offset_naming_priority() {
        let e = hero()
            .with_property("m_cellX", 0)
            .with_property("m_cellY", 0)
            .with_property("m_vecX", 99.0)
            .with_property("CBodyComponent.m_vecOrigin.x", 1.5)
            .with_property("CBodyComponent.m_vecOrigin[1]", 2.5);

        assert_eq!(reconstruct(&e, CELL_SIZE), Some(WorldPos::new(1.5, 2.5)));
    }

    #[test]
    fn test_direct_origin_fallback() {
        let e = hero().with_property("m_vecOrigin[0]", 12.5).with_property("m_vecOrigin[1]", 7.5);

        assert_eq!(reconstruct(&e, CELL_SIZE), Some(WorldPos::new(12.5, 7.5)));
    }

    #[test]
    fn test_single_cell_falls_back_to_origin() {
        let e = hero()
            .with_property("m_cellX", 5)
            .with_property("m_vecOrigin[0]", 12.5)
            .with_property("m_vecOrigin[1]", 7.5);

        assert_eq!(reconstruct(&e, CELL_SIZE), Some(WorldPos::new(12.5, 7.5)));
    }

    #[test]
    fn test_nothing_resolvable() {
        assert_eq!(reconstruct(&hero(), CELL_SIZE), None);

        let half = hero().with_property("m_vecOrigin[0]", 12.5);
        assert_eq!(reconstruct(&half, CELL_SIZE), None);
    }

    #[test]
    fn test_distance() {
        let d = WorldPos::new(0.0, 0.0).distance(WorldPos::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 0.001);
    }
}
