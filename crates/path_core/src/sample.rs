//! Samples and the output buffer
//!
//! The output is a JSON array with one record per line. Floats are written
//! with exactly three decimals, ties rounded away from zero, always with a
//! `.` separator.

use crate::error::OutputError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Decimals written for `t`, `x` and `y`
const FLOAT_DECIMALS: u32 = 3;

/// Fixed three-decimal text of `v`.
///
/// Rounds the shortest decimal form of the widened value half away from
/// zero, so `650.0625` becomes `650.063`. Values outside the decimal range
/// (or non-finite) fall back to plain float formatting.
pub fn format_fixed3(v: f32) -> String {
    let wide = f64::from(v);
    match Decimal::from_str(&wide.to_string()) {
        Ok(d) => {
            let mut rounded =
                d.round_dp_with_strategy(FLOAT_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(FLOAT_DECIMALS);
            rounded.to_string()
        }
        Err(_) => format!("{wide:.3}"),
    }
}

/// One accepted tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// Seconds since the first armed tick
    pub t: f32,
    pub x: f32,
    pub y: f32,
    pub last_hits: i32,
    pub creep_gold: i32,
    pub neutral_gold: i32,
    pub hero_kill_gold: i32,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"t\": {}, \"x\": {}, \"y\": {}, \"lastHits\": {}, \"creepGold\": {}, \"neutralGold\": {}, \"heroKillGold\": {}}}",
            format_fixed3(self.t),
            format_fixed3(self.x),
            format_fixed3(self.y),
            self.last_hits,
            self.creep_gold,
            self.neutral_gold,
            self.hero_kill_gold
        )
    }
}

/// Append-only sample series in tick arrival order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<Sample>,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { samples: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, sample: Sample) {
        debug_assert!(
            self.samples.last().map_or(true, |last| last.t <= sample.t),
            "samples must arrive in time order"
        );
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn capacity(&self) -> usize {
        self.samples.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn into_vec(self) -> Vec<Sample> {
        self.samples
    }

    /// Render the whole series as output text
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Render and write to `path`
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), OutputError> {
        let path = path.as_ref();
        fs::write(path, self.render())
            .map_err(|source| OutputError::Write { path: path.to_path_buf(), source })
    }
}

impl fmt::Display for SampleBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for (i, sample) in self.samples.iter().enumerate() {
            if i > 0 {
                writeln!(f, ",")?;
            }
            write!(f, "  {sample}")?;
        }
        if !self.samples.is_empty() {
            writeln!(f)?;
        }
        writeln!(f, "]")
    }
}

impl<'a> IntoIterator for &'a SampleBuffer {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl From<Vec<Sample>> for SampleBuffer {
    fn from(samples: Vec<Sample>) -> Self {
        Self { samples }
    }
}

/// Parse previously written output back into samples
pub fn parse_samples(text: &str) -> serde_json::Result<Vec<Sample>> {
    serde_json::from_str(text)
}
