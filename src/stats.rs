use serde::Serialize;

use crate::passage::Passage;
use crate::time_series::TimeSeriesPoint;

/// Upper bound on reported WPM; tiny elapsed times right after the first
/// keystroke would otherwise produce absurd spikes.
pub const MAX_WPM: u32 = 250;
/// Standard word length used to turn characters into words
pub const CHARS_PER_WORD: f64 = 5.0;

/// Derived snapshot of a session's performance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub wpm: u32,
    pub accuracy: u32,
    pub errors: usize,
    pub correct_chars: usize,
    pub total_chars: usize,
    pub correct_words: usize,
}

/// Score the typed words against the passage.
///
/// Returns `None` when no time has elapsed yet, so callers keep whatever
/// snapshot they already had instead of dividing by zero.
pub fn compute_statistics(
    passage: &Passage,
    finalized: &[String],
    in_progress: &str,
    elapsed_ms: u64,
) -> Option<Statistics> {
    if elapsed_ms == 0 {
        return None;
    }

    let mut correct_chars = 0;
    let mut errors = 0;
    let mut correct_words = 0;
    let mut typed_chars = 0;

    for (idx, typed) in finalized.iter().enumerate() {
        let typed_len = typed.chars().count();
        typed_chars += typed_len;
        match passage.word(idx) {
            Some(target) if target == typed => {
                correct_chars += typed_len;
                correct_words += 1;
            }
            target => {
                let target_len = target.map_or(0, |t| t.chars().count());
                errors += typed_len.max(target_len);
            }
        }
    }

    if !in_progress.is_empty() {
        typed_chars += in_progress.chars().count();
        // no target means the word has nothing to be judged against
        if let Some(target) = passage.word(finalized.len()) {
            let target: Vec<char> = target.chars().collect();
            for (pos, c) in in_progress.chars().enumerate() {
                if target.get(pos) == Some(&c) {
                    correct_chars += 1;
                } else {
                    errors += 1;
                }
            }
        }
    }

    let tokens = finalized.len() + usize::from(!in_progress.is_empty());
    let separators = tokens.saturating_sub(1);
    correct_chars += separators;
    let total_chars = typed_chars + separators;

    let accuracy = ((correct_chars as f64 / total_chars.max(1) as f64) * 100.0).round() as u32;

    let elapsed_minutes = elapsed_ms as f64 / 60_000.0;
    let gross_wpm = ((correct_chars as f64 / CHARS_PER_WORD) / elapsed_minutes).round() as u32;

    Some(Statistics {
        wpm: gross_wpm.min(MAX_WPM),
        accuracy: accuracy.min(100),
        errors,
        correct_chars,
        total_chars,
        correct_words,
    })
}

/// Standard deviation of the per-second WPM samples; lower is steadier
pub fn consistency(samples: &[TimeSeriesPoint]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let count = samples.len() as f64;
    let mean = samples.iter().map(|p| p.wpm).sum::<f64>() / count;
    let variance = samples
        .iter()
        .map(|p| (p.wpm - mean).powi(2))
        .sum::<f64>()
        / count;
    variance.sqrt()
}
