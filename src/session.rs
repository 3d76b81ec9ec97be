use serde::Serialize;

use crate::language::{Difficulty, Language};
use crate::time_series::TimeSeriesPoint;

pub const DEFAULT_DURATION_SECS: u64 = 60;
pub const DEFAULT_WORD_COUNT: usize = 25;
pub const DEFAULT_ENDING_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub duration_secs: u64,
    pub ending_delay_ms: u64,
    pub language: Language,
    pub difficulty: Difficulty,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            ending_delay_ms: DEFAULT_ENDING_DELAY_MS,
            language: Language::default(),
            difficulty: Difficulty::default(),
        }
    }
}

/// `Idle → Active → Ending → Complete`, back to `Idle` on retry or switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Active,
    Ending,
    Complete,
}

impl Phase {
    /// Active or winding down; starts, switches and retries are refused
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Active | Phase::Ending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EndReason {
    Completed,
    TimeUp,
    Stopped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub phase: Phase,
    pub seconds_remaining: u64,
    pub started_at_ms: Option<u64>,
    pub ended_at_ms: Option<u64>,
    /// Clock reading at which the next countdown second elapses
    pub next_second_at_ms: Option<u64>,
    pub end_reason: Option<EndReason>,
    // Typing state
    pub finalized: Vec<String>,
    pub in_progress: String,
    pub raw_input: String,
    // Results
    pub wpm_samples: Vec<TimeSeriesPoint>,
}

impl SessionState {
    pub fn new(duration_secs: u64) -> Self {
        Self {
            phase: Phase::Idle,
            seconds_remaining: duration_secs,
            started_at_ms: None,
            ended_at_ms: None,
            next_second_at_ms: None,
            end_reason: None,
            finalized: Vec::new(),
            in_progress: String::new(),
            raw_input: String::new(),
            wpm_samples: Vec::new(),
        }
    }

    /// Words finalized so far plus the one being typed, if any
    pub fn typed_word_count(&self) -> usize {
        self.finalized.len() + usize::from(!self.in_progress.is_empty())
    }

    pub fn raw_len(&self) -> usize {
        self.raw_input.chars().count()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}
