use log::{debug, info, warn};
use serde::Serialize;

use crate::clock::Clock;
use crate::language::{Difficulty, Language};
use crate::passage::{ClassifiedChar, Passage};
use crate::session::{EndReason, Phase, SessionConfig, SessionState};
use crate::stats::{compute_statistics, consistency, Statistics};
use crate::time_series::TimeSeriesPoint;
use crate::typing_policy::{apply_input, flush_in_progress, Effect, InputEvent};
use crate::word_generator::PassageGenerator;

const MS_PER_SECOND: u64 = 1_000;

/// Final result of a completed attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub language: Language,
    pub difficulty: Difficulty,
    pub end_reason: EndReason,
    pub elapsed_secs: f64,
    pub consistency: f64,
    #[serde(flatten)]
    pub stats: Statistics,
}

/// Owns one typing test: the passage, the typed input, timing and scoring.
///
/// Every transition is serialized through `&mut self`; the shell calls
/// [`TypingSession::handle_input`] for keystrokes and
/// [`TypingSession::on_tick`] on its periodic tick.
#[derive(Debug)]
pub struct TypingSession {
    config: SessionConfig,
    generator: PassageGenerator,
    clock: Box<dyn Clock>,
    passage: Passage,
    state: SessionState,
    stats: Statistics,
}

impl TypingSession {
    pub fn new(config: SessionConfig, mut generator: PassageGenerator, clock: Box<dyn Clock>) -> Self {
        let passage = generator.generate(config.language, config.difficulty);
        let state = SessionState::new(config.duration_secs);
        Self {
            config,
            generator,
            clock,
            passage,
            state,
            stats: Statistics::default(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn passage(&self) -> &Passage {
        &self.passage
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn language(&self) -> Language {
        self.config.language
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    pub fn seconds_remaining(&self) -> u64 {
        self.state.seconds_remaining
    }

    pub fn wpm_samples(&self) -> &[TimeSeriesPoint] {
        &self.state.wpm_samples
    }

    /// Per-character view of the passage for the display
    pub fn classify(&self) -> Vec<ClassifiedChar> {
        self.passage
            .classify(&self.state.finalized, &self.state.in_progress)
    }

    pub fn cursor(&self) -> usize {
        self.passage
            .cursor(&self.state.finalized, &self.state.in_progress)
    }

    /// Time since start, frozen once the session has ended
    pub fn elapsed_ms(&self) -> Option<u64> {
        let started = self.state.started_at_ms?;
        let until = self
            .state
            .ended_at_ms
            .unwrap_or_else(|| self.clock.now_ms());
        Some(until.saturating_sub(started))
    }

    pub fn summary(&self) -> Option<Summary> {
        if self.state.phase != Phase::Complete {
            return None;
        }
        Some(Summary {
            language: self.config.language,
            difficulty: self.config.difficulty,
            end_reason: self.state.end_reason?,
            elapsed_secs: self.elapsed_ms()? as f64 / MS_PER_SECOND as f64,
            consistency: consistency(&self.state.wpm_samples),
            stats: self.stats,
        })
    }

    /// Begin timing the current passage. Refused while a test is running.
    pub fn start(&mut self) -> bool {
        if self.state.phase.is_running() {
            debug!("start ignored, session is {}", self.state.phase);
            return false;
        }

        let now = self.clock.now_ms();
        self.state = SessionState::new(self.config.duration_secs);
        self.state.phase = Phase::Active;
        self.state.started_at_ms = Some(now);
        self.state.next_second_at_ms = Some(now + MS_PER_SECOND);
        self.stats = Statistics::default();

        info!(
            "session started: {} words, {}s, {}/{}",
            self.passage.len(),
            self.config.duration_secs,
            self.config.language,
            self.config.difficulty
        );
        true
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match self.state.phase {
            Phase::Active => {
                // a keystroke may land after a deadline no tick has seen yet
                self.advance_countdown(self.clock.now_ms());
                if self.state.phase != Phase::Active {
                    debug!("dropped {event:?} typed after the deadline");
                    return;
                }
            }
            Phase::Ending => return,
            Phase::Idle | Phase::Complete => match event {
                // only a keystroke that would be accepted starts the clock
                InputEvent::Char(c) if !c.is_whitespace() && !self.passage.is_empty() => {
                    self.start();
                }
                _ => return,
            },
        }

        match apply_input(&mut self.state, &self.passage, event) {
            Effect::Continue => self.refresh_stats(),
            Effect::Rejected => debug!("rejected {event:?}"),
            Effect::Complete => {
                let now = self.clock.now_ms();
                self.end_with(EndReason::Completed, now);
            }
            Effect::Stop => {
                let now = self.clock.now_ms();
                self.end_with(EndReason::Stopped, now);
            }
        }
    }

    /// Explicit stop. A no-op unless the session is active.
    pub fn end(&mut self) {
        let now = self.clock.now_ms();
        self.end_with(EndReason::Stopped, now);
    }

    fn end_with(&mut self, reason: EndReason, at_ms: u64) {
        if self.state.phase != Phase::Active {
            debug!("end ({reason}) ignored, session is {}", self.state.phase);
            return;
        }

        if reason == EndReason::Completed {
            flush_in_progress(&mut self.state);
        }
        self.state.phase = Phase::Ending;
        self.state.ended_at_ms = Some(at_ms);
        self.state.end_reason = Some(reason);
        self.state.next_second_at_ms = None;
        info!(
            "session ending ({reason}) with {} of {} words typed",
            self.state.finalized.len(),
            self.passage.len()
        );

        if self.config.ending_delay_ms == 0 {
            self.finish();
        }
    }

    fn finish(&mut self) {
        if self.state.phase != Phase::Ending {
            return;
        }
        // a passage finished by its first keystroke has no elapsed time
        let elapsed = self.elapsed_ms().unwrap_or_default().max(1);
        if let Some(stats) = compute_statistics(
            &self.passage,
            &self.state.finalized,
            &self.state.in_progress,
            elapsed,
        ) {
            self.stats = stats;
        }
        self.state.phase = Phase::Complete;
        info!(
            "session complete: {} wpm, {}% accuracy, {} errors",
            self.stats.wpm, self.stats.accuracy, self.stats.errors
        );
    }

    /// Advance the countdown and the ending delay against the clock
    pub fn on_tick(&mut self) {
        let now = self.clock.now_ms();
        match self.state.phase {
            Phase::Active => self.advance_countdown(now),
            Phase::Ending => {
                let ended = self.state.ended_at_ms.unwrap_or(now);
                if now.saturating_sub(ended) >= self.config.ending_delay_ms {
                    self.finish();
                }
            }
            Phase::Idle | Phase::Complete => {}
        }
    }

    fn advance_countdown(&mut self, now: u64) {
        while let Some(next) = self.state.next_second_at_ms {
            if now < next {
                break;
            }
            self.state.seconds_remaining = self.state.seconds_remaining.saturating_sub(1);
            self.state.next_second_at_ms = Some(next + MS_PER_SECOND);
            self.record_sample(next);

            if self.state.seconds_remaining == 0 {
                self.end_with(EndReason::TimeUp, next);
            }
        }
    }

    fn record_sample(&mut self, at_ms: u64) {
        let Some(started) = self.state.started_at_ms else {
            return;
        };
        let elapsed = at_ms.saturating_sub(started);
        if let Some(stats) = compute_statistics(
            &self.passage,
            &self.state.finalized,
            &self.state.in_progress,
            elapsed,
        ) {
            self.stats = stats;
            self.state.wpm_samples.push(TimeSeriesPoint::new(
                elapsed as f64 / MS_PER_SECOND as f64,
                stats.wpm as f64,
            ));
        }
    }

    /// Recompute statistics; keeps the previous snapshot before the clock has moved
    pub fn refresh_stats(&mut self) {
        let Some(elapsed) = self.elapsed_ms() else {
            return;
        };
        if let Some(stats) = compute_statistics(
            &self.passage,
            &self.state.finalized,
            &self.state.in_progress,
            elapsed,
        ) {
            self.stats = stats;
        }
    }

    pub fn set_language(&mut self, language: Language) -> bool {
        if self.state.phase.is_running() {
            warn!("language switch to {language} refused while a test is running");
            return false;
        }
        if language == self.config.language {
            return false;
        }
        self.config.language = language;
        self.regenerate();
        true
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.state.phase.is_running() {
            warn!("difficulty switch to {difficulty} refused while a test is running");
            return false;
        }
        if difficulty == self.config.difficulty {
            return false;
        }
        self.config.difficulty = difficulty;
        self.regenerate();
        true
    }

    /// Fresh passage and a clean slate; the next keystroke starts the clock
    pub fn retry(&mut self) -> bool {
        if self.state.phase.is_running() {
            warn!("retry refused while a test is running");
            return false;
        }
        self.regenerate();
        true
    }

    fn regenerate(&mut self) {
        self.passage = self
            .generator
            .generate(self.config.language, self.config.difficulty);
        self.state = SessionState::new(self.config.duration_secs);
        self.stats = Statistics::default();
        debug!(
            "new passage for {}/{}: {} words",
            self.config.language,
            self.config.difficulty,
            self.passage.len()
        );
    }
}
