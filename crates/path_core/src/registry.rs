//! Entity registry
//!
//! Watches entity creation for the two team data entities and for the hero
//! owned by the target player.

use crate::entity::{Entity, EntityId};
use crate::property::resolve_int;
use crate::team_stats::{TeamEntities, TeamSide};
use tracing::{info, warn};

pub const DATA_RADIANT_CLASS: &str = "CDOTA_DataRadiant";
pub const DATA_DIRE_CLASS: &str = "CDOTA_DataDire";
pub const HERO_CLASS_PREFIX: &str = "CDOTA_Unit_Hero_";

const PLAYER_ID: &[&str] = &["m_iPlayerID"];

/// The adopted hero. Never replaced once set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedParticipant {
    pub entity: EntityId,
    /// Player id read from the hero at adoption time
    pub player_id: i64,
}

#[derive(Debug, Clone)]
pub struct EntityRegistry {
    target_player_id: i64,
    teams: TeamEntities,
    tracked: Option<TrackedParticipant>,
    /// Set once the tracked index is reused by a newly created entity
    detached: bool,
}

impl EntityRegistry {
    pub fn new(target_player_id: i64) -> Self {
        Self { target_player_id, teams: TeamEntities::default(), tracked: None, detached: false }
    }

    pub fn target_player_id(&self) -> i64 {
        self.target_player_id
    }

    pub fn teams(&self) -> &TeamEntities {
        &self.teams
    }

    pub fn tracked(&self) -> Option<&TrackedParticipant> {
        self.tracked.as_ref()
    }

    /// Index of the tracked hero while it still refers to the adopted entity
    pub fn tracked_entity(&self) -> Option<EntityId> {
        self.tracked.filter(|_| !self.detached).map(|t| t.entity)
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// React to one created entity
    pub fn on_entity_created(&mut self, id: EntityId, entity: &dyn Entity) {
        let class_name = entity.class_name();

        if !self.detached && self.tracked.is_some_and(|t| t.entity == id) {
            // the adopted hero was deleted and its index handed to a new entity
            self.detached = true;
            warn!(entity = %id, class = class_name, "tracked hero index reused, sampling stops");
        }

        match class_name {
            DATA_RADIANT_CLASS => self.teams.set(TeamSide::Radiant, id),
            DATA_DIRE_CLASS => self.teams.set(TeamSide::Dire, id),
            _ if class_name.starts_with(HERO_CLASS_PREFIX) => self.on_hero_created(id, entity),
            _ => {}
        }
    }

    fn on_hero_created(&mut self, id: EntityId, entity: &dyn Entity) {
        let player_id = resolve_int(entity, PLAYER_ID);

        info!(
            player_id = %player_id.map_or_else(|| "?".to_string(), |p| p.to_string()),
            class = entity.class_name(),
            entity = %id,
            "hero created"
        );

        if self.tracked.is_some() || player_id != Some(self.target_player_id) {
            return;
        }

        self.tracked = Some(TrackedParticipant { entity: id, player_id: self.target_player_id });
        info!(
            class = entity.class_name(),
            player_id = self.target_player_id,
            entity = %id,
            "tracking hero"
        );
    }
}
