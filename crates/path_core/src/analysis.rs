//! Offline helpers over a finished series (playback and summaries)

use crate::coords::WorldPos;
use crate::sample::Sample;
use serde::{Deserialize, Serialize};

/// Game clock reads this many seconds when sampling starts
pub const GAME_START_OFFSET_SECS: f32 = -120.0;

/// Sample at time `t`.
///
/// Clamps to the first/last sample outside the covered range. Inside it,
/// `x`/`y` are interpolated linearly; stats come from the earlier sample.
pub fn sample_at_time(samples: &[Sample], t: f32) -> Option<Sample> {
    let first = samples.first()?;
    let last = samples.last()?;
    if t <= first.t {
        return Some(*first);
    }
    if t >= last.t {
        return Some(*last);
    }

    let i = samples.partition_point(|s| s.t <= t);
    let (a, b) = (samples[i - 1], samples[i]);
    let span = b.t - a.t;
    let alpha = if span > 0.0 { (t - a.t) / span } else { 0.0 };

    Some(Sample { t, x: a.x + alpha * (b.x - a.x), y: a.y + alpha * (b.y - a.y), ..a })
}

/// `mm:ss` game clock for a relative sample time, e.g. `-02:00` at t = 0
pub fn format_game_time(t: f32) -> String {
    let total = (t + GAME_START_OFFSET_SECS).floor() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let abs = total.abs();
    format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
}

/// Aggregate view of one extracted path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSummary {
    pub sample_count: usize,
    /// Seconds between first and last sample
    pub duration_secs: f32,
    /// Polyline length in world units
    pub distance: f32,
    pub last_hits: i32,
    pub creep_gold: i32,
    pub neutral_gold: i32,
    pub hero_kill_gold: i32,
}

impl PathSummary {
    pub fn from_samples(samples: &[Sample]) -> Self {
        let distance = samples
            .windows(2)
            .map(|w| WorldPos::new(w[0].x, w[0].y).distance(WorldPos::new(w[1].x, w[1].y)))
            .sum();
        let duration_secs = match (samples.first(), samples.last()) {
            (Some(a), Some(b)) => b.t - a.t,
            _ => 0.0,
        };
        let last = samples.last();

        Self {
            sample_count: samples.len(),
            duration_secs,
            distance,
            last_hits: last.map_or(0, |s| s.last_hits),
            creep_gold: last.map_or(0, |s| s.creep_gold),
            neutral_gold: last.map_or(0, |s| s.neutral_gold),
            hero_kill_gold: last.map_or(0, |s| s.hero_kill_gold),
        }
    }
}
