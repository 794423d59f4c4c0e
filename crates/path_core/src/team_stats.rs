//! Per-player stats from the team data entities
//!
//! `CDOTA_DataRadiant` / `CDOTA_DataDire` each hold a 5-slot array
//! `m_vecDataTeam`. Player ids 0,2,..,8 sit on Radiant and 10,12,..,18 on
//! Dire, two ids per slot.

use crate::entity::{EntityId, EntityStore};
use crate::property::resolve_int;
use std::fmt;

/// Slots per team data array
pub const TEAM_SLOTS: i64 = 5;

const DIRE_ID_BASE: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamSide {
    Radiant,
    Dire,
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamSide::Radiant => write!(f, "Radiant"),
            TeamSide::Dire => write!(f, "Dire"),
        }
    }
}

/// Location of one player inside the team data arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamSlot {
    pub side: TeamSide,
    pub index: u8,
}

/// Player id → team slot. `None` for ids outside both ranges.
pub fn team_slot(player_id: i64) -> Option<TeamSlot> {
    let (side, base) = match player_id {
        0..=8 => (TeamSide::Radiant, 0),
        10..=18 => (TeamSide::Dire, DIRE_ID_BASE),
        _ => return None,
    };

    let index = (player_id - base) / 2;
    if !(0..TEAM_SLOTS).contains(&index) {
        return None;
    }

    Some(TeamSlot { side, index: u8::try_from(index).ok()? })
}

/// Stats read from a team slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamStat {
    LastHits,
    CreepKillGold,
    NeutralKillGold,
    HeroKillGold,
}

impl TeamStat {
    pub fn suffix(self) -> &'static str {
        match self {
            TeamStat::LastHits => "m_iLastHitCount",
            TeamStat::CreepKillGold => "m_iCreepKillGold",
            TeamStat::NeutralKillGold => "m_iNeutralKillGold",
            TeamStat::HeroKillGold => "m_iHeroKillGold",
        }
    }
}

/// Flattened property path of a slot stat, e.g. `m_vecDataTeam.0003.m_iLastHitCount`
pub fn stat_path(index: u8, suffix: &str) -> String {
    format!("m_vecDataTeam.{index:04}.{suffix}")
}

/// Handles to the two team data entities, as seen so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamEntities {
    pub radiant: Option<EntityId>,
    pub dire: Option<EntityId>,
}

impl TeamEntities {
    pub fn get(&self, side: TeamSide) -> Option<EntityId> {
        match side {
            TeamSide::Radiant => self.radiant,
            TeamSide::Dire => self.dire,
        }
    }

    pub fn set(&mut self, side: TeamSide, id: EntityId) {
        match side {
            TeamSide::Radiant => self.radiant = Some(id),
            TeamSide::Dire => self.dire = Some(id),
        }
    }
}

/// Resolve one stat for `player_id`.
///
/// `None` when the id maps to no slot, the team entity is unknown or gone,
/// or the property is absent or does not fit an `i32`.
pub fn resolve_team_stat(
    store: &dyn EntityStore,
    teams: &TeamEntities,
    player_id: i64,
    stat: TeamStat,
) -> Option<i32> {
    let slot = team_slot(player_id)?;
    let entity = store.entity(teams.get(slot.side)?)?;
    let value = resolve_int(entity, &[stat_path(slot.index, stat.suffix()).as_str()])?;
    i32::try_from(value).ok()
}

/// The four economy stats of one player, 0 where absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EconomySnapshot {
    pub last_hits: i32,
    pub creep_gold: i32,
    pub neutral_gold: i32,
    pub hero_kill_gold: i32,
}

impl EconomySnapshot {
    pub fn resolve(store: &dyn EntityStore, teams: &TeamEntities, player_id: i64) -> Self {
        let stat = |s| resolve_team_stat(store, teams, player_id, s).unwrap_or(0);
        Self {
            last_hits: stat(TeamStat::LastHits),
            creep_gold: stat(TeamStat::CreepKillGold),
            neutral_gold: stat(TeamStat::NeutralKillGold),
            hero_kill_gold: stat(TeamStat::HeroKillGold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityRecord, EntityTable};

    const ALL_STATS: [TeamStat; 4] = [
        TeamStat::LastHits,
        TeamStat::CreepKillGold,
        TeamStat::NeutralKillGold,
        TeamStat::HeroKillGold,
    ];

    fn slot(side: TeamSide, index: u8) -> Option<TeamSlot> {
        Some(TeamSlot { side, index })
    }

    fn fixture() -> (EntityTable, TeamEntities) {
        let mut table = EntityTable::new();
        let mut radiant = EntityRecord::new("CDOTA_DataRadiant");
        let mut dire = EntityRecord::new("CDOTA_DataDire");
        for i in 0..5u8 {
            let n = i32::from(i);
            radiant.set_property(stat_path(i, "m_iLastHitCount"), 10 + n);
            radiant.set_property(stat_path(i, "m_iCreepKillGold"), 100 + n);
            dire.set_property(stat_path(i, "m_iLastHitCount"), 20 + n);
            dire.set_property(stat_path(i, "m_iHeroKillGold"), 200 + n);
        }
        table.insert(EntityId(1), radiant);
        table.insert(EntityId(2), dire);

        let teams = TeamEntities { radiant: Some(EntityId(1)), dire: Some(EntityId(2)) };
        (table, teams)
    }

    #[test]
    fn test_team_slot_mapping() {
        assert_eq!(team_slot(0), slot(TeamSide::Radiant, 0));
        assert_eq!(team_slot(4), slot(TeamSide::Radiant, 2));
        assert_eq!(team_slot(8), slot(TeamSide::Radiant, 4));
        assert_eq!(team_slot(10), slot(TeamSide::Dire, 0));
        assert_eq!(team_slot(18), slot(TeamSide::Dire, 4));
        assert_eq!(team_slot(3), slot(TeamSide::Radiant, 1));
    }

    #[test]
    fn test_team_slot_out_of_range() {
        for id in [-2, -1, 9, 19, 20, 100] {
            assert_eq!(team_slot(id), None, "player id {id}");
        }
    }

    #[test]
    fn test_stat_path_is_zero_padded() {
        assert_eq!(stat_path(3, "m_iLastHitCount"), "m_vecDataTeam.0003.m_iLastHitCount");
        assert_eq!(stat_path(0, "m_iHeroKillGold"), "m_vecDataTeam.0000.m_iHeroKillGold");
    }

    #[test]
    fn test_resolve_from_both_teams() {
        let (table, teams) = fixture();

        assert_eq!(resolve_team_stat(&table, &teams, 0, TeamStat::LastHits), Some(10));
        assert_eq!(resolve_team_stat(&table, &teams, 8, TeamStat::CreepKillGold), Some(104));
        assert_eq!(resolve_team_stat(&table, &teams, 10, TeamStat::LastHits), Some(20));
        assert_eq!(resolve_team_stat(&table, &teams, 18, TeamStat::HeroKillGold), Some(204));
    }

    #[test]
    fn test_out_of_range_id_yields_no_value_for_every_stat() {
        let (table, teams) = fixture();

        for id in [9, 19, -1] {
            for stat in ALL_STATS {
                assert_eq!(resolve_team_stat(&table, &teams, id, stat), None);
            }
        }
    }

    #[test]
    fn test_missing_team_entity() {
        let (table, _) = fixture();
        let teams = TeamEntities { radiant: Some(EntityId(1)), dire: None };

        assert_eq!(resolve_team_stat(&table, &teams, 12, TeamStat::LastHits), None);
        assert_eq!(resolve_team_stat(&table, &teams, 2, TeamStat::LastHits), Some(11));
    }

    #[test]
    fn test_economy_snapshot_defaults_missing_to_zero() {
        let (table, teams) = fixture();

        let eco = EconomySnapshot::resolve(&table, &teams, 14);
        assert_eq!(
            eco,
            EconomySnapshot { last_hits: 22, creep_gold: 0, neutral_gold: 0, hero_kill_gold: 202 }
        );

        assert_eq!(EconomySnapshot::resolve(&table, &teams, 9), EconomySnapshot::default());
    }
}
