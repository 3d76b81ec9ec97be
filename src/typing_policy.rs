//! Input transitions over a [`SessionState`].
//!
//! These functions only touch the state they are handed. They report what
//! the keystroke means for the session as an [`Effect`] and leave starting,
//! ending and timing to the caller.

use std::mem;

use crate::passage::Passage;
use crate::session::SessionState;

/// A discrete keystroke as delivered by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Backspace,
    Enter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The keystroke was applied
    Continue,
    /// The keystroke was refused and the state is unchanged
    Rejected,
    /// The keystroke finished the passage
    Complete,
    /// The user asked to stop
    Stop,
}

pub fn apply_input(state: &mut SessionState, passage: &Passage, event: InputEvent) -> Effect {
    match event {
        InputEvent::Char(c) => apply_char(state, passage, c),
        InputEvent::Backspace => apply_backspace(state),
        InputEvent::Enter => Effect::Stop,
    }
}

pub fn apply_char(state: &mut SessionState, passage: &Passage, c: char) -> Effect {
    if passage.is_empty() || state.finalized.len() >= passage.len() {
        return Effect::Rejected;
    }

    if c.is_whitespace() {
        return commit_word(state, passage);
    }

    state.in_progress.push(c);
    state.raw_input.push(c);

    let on_last_word = state.finalized.len() + 1 == passage.len();
    if on_last_word && passage.last_word() == Some(state.in_progress.as_str()) {
        return Effect::Complete;
    }
    if state.raw_len() >= passage.char_len() {
        return Effect::Complete;
    }
    Effect::Continue
}

/// Finalize the in-progress word at a boundary keystroke.
///
/// A boundary with nothing in progress is refused, so leading and repeated
/// spaces never reach the finalized list.
pub fn commit_word(state: &mut SessionState, passage: &Passage) -> Effect {
    if state.in_progress.is_empty() {
        return Effect::Rejected;
    }

    state.finalized.push(mem::take(&mut state.in_progress));
    state.raw_input.push(' ');

    if state.finalized.len() >= passage.len() || state.raw_len() >= passage.char_len() {
        Effect::Complete
    } else {
        Effect::Continue
    }
}

/// Remove the last character of the word being typed; finalized words stay put
pub fn apply_backspace(state: &mut SessionState) -> Effect {
    if state.in_progress.pop().is_none() {
        return Effect::Rejected;
    }
    state.raw_input.pop();
    Effect::Continue
}

/// Move a non-empty in-progress word into the finalized list
pub fn flush_in_progress(state: &mut SessionState) {
    if !state.in_progress.is_empty() {
        state.finalized.push(mem::take(&mut state.in_progress));
    }
}
