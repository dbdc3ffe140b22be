//! The persisted per-day status file.

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::solutions::Part;

/// One part of a day as stored: `result` and `time` plus whatever else the file holds,
/// kept in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartRecord(Map<String, Value>);

impl Default for PartRecord {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl PartRecord {
    pub fn new(result: Option<String>, time: Option<f64>) -> Self {
        let mut r = Self(Map::new());
        r.set(result, time);
        r
    }

    pub fn result(&self) -> Option<&str> {
        self.0.get("result").and_then(Value::as_str)
    }

    pub fn time(&self) -> Option<f64> {
        self.0.get("time").and_then(Value::as_f64)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Overwrites `result` and `time` only.
    pub fn set(&mut self, result: Option<String>, time: Option<f64>) {
        self.0
            .insert("result".to_owned(), result.map_or(Value::Null, Value::String));
        self.0
            .insert("time".to_owned(), time.map_or(Value::Null, time_value));
    }

    pub fn is_unset(&self) -> bool {
        self.result().is_none()
    }
}

/// Whole milliseconds are written as integers (`12`, not `12.0`).
fn time_value(ms: f64) -> Value {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if ms.fract() == 0.0 && ms.abs() < MAX_EXACT {
        Value::from(ms as i64)
    } else {
        serde_json::Number::from_f64(ms).map_or(Value::Null, Value::Number)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(default)]
    pub part1: PartRecord,
    #[serde(default)]
    pub part2: PartRecord,

    /// Fields this crate does not know about, kept as loaded.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DayRecord {
    pub fn part(&self, part: Part) -> &PartRecord {
        match part {
            Part::One => &self.part1,
            Part::Two => &self.part2,
        }
    }

    pub fn part_mut(&mut self, part: Part) -> &mut PartRecord {
        match part {
            Part::One => &mut self.part1,
            Part::Two => &mut self.part2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    pub days: Vec<DayRecord>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Config {
    pub const MAX_DAYS: usize = 25;

    /// A fresh status with every day unset.
    pub fn new(year: Option<u16>) -> Self {
        Self {
            year,
            days: vec![DayRecord::default(); Self::MAX_DAYS],
            extra: Map::new(),
        }
    }

    pub fn day(&self, day: u8) -> Option<&DayRecord> {
        (day as usize).checked_sub(1).and_then(|i| self.days.get(i))
    }

    pub fn day_mut(&mut self, day: u8) -> Option<&mut DayRecord> {
        (day as usize)
            .checked_sub(1)
            .and_then(|i| self.days.get_mut(i))
    }

    /// Sum of all recorded times, in milliseconds.
    pub fn total_time(&self) -> f64 {
        self.days
            .iter()
            .flat_map(|d| [&d.part1, &d.part2])
            .filter_map(PartRecord::time)
            .sum()
    }
}

/// Loads and saves the status as a whole.
pub trait ConfigStore: Send + Sync {
    fn read_config(&self) -> anyhow::Result<Config>;
    fn save_config(&self, config: &Config) -> anyhow::Result<()>;
}

#[derive(Debug, Clone)]
pub struct JsonConfigStore {
    filepath: PathBuf,
}

impl JsonConfigStore {
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
        }
    }

    pub fn filepath(&self) -> &Path {
        &self.filepath
    }
}

impl ConfigStore for JsonConfigStore {
    fn read_config(&self) -> anyhow::Result<Config> {
        log::debug!("Reading status from {:?}", self.filepath);
        fsutil::read_json_with_deserialize(&self.filepath).context("Failed to load status file")
    }

    fn save_config(&self, config: &Config) -> anyhow::Result<()> {
        log::debug!("Saving status to {:?}", self.filepath);
        fsutil::write_json_with_mkdir(&self.filepath, config).context("Failed to save status file")
    }
}

/// Keeps the status in memory and counts how often it was touched.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    inner: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    config: Config,
    reads: usize,
    saves: usize,
}

impl MemoryConfigStore {
    pub fn new(config: Config) -> Self {
        Self {
            inner: Mutex::new(MemoryState {
                config,
                reads: 0,
                saves: 0,
            }),
        }
    }

    pub fn config(&self) -> Config {
        self.lock().config.clone()
    }

    pub fn reads(&self) -> usize {
        self.lock().reads
    }

    pub fn saves(&self) -> usize {
        self.lock().saves
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ConfigStore for MemoryConfigStore {
    fn read_config(&self) -> anyhow::Result<Config> {
        let mut state = self.lock();
        state.reads += 1;
        Ok(state.config.clone())
    }

    fn save_config(&self, config: &Config) -> anyhow::Result<()> {
        let mut state = self.lock();
        state.saves += 1;
        state.config = config.clone();
        Ok(())
    }
}
