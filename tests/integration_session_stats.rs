use fastkey::{
    clock::ManualClock,
    language::{Difficulty, EmbeddedWordSource, Language, StaticWordSource, WordSource},
    passage::Outcome,
    session::{EndReason, Phase, SessionConfig},
    typing_policy::InputEvent,
    word_generator::{PassageGenerator, WordGenConfig},
    TypingSession,
};

fn session(prompt: &str) -> (TypingSession, ManualClock) {
    let clock = ManualClock::new();
    let generator = PassageGenerator::new(
        WordGenConfig {
            custom_prompt: Some(prompt.to_string()),
            ..WordGenConfig::default()
        },
        Box::new(StaticWordSource::default()),
    );
    let session = TypingSession::new(
        SessionConfig {
            ending_delay_ms: 0,
            ..SessionConfig::default()
        },
        generator,
        Box::new(clock.clone()),
    );
    (session, clock)
}

fn type_keys(session: &mut TypingSession, clock: &ManualClock, keys: &str) {
    for c in keys.chars() {
        clock.advance(150);
        session.handle_input(InputEvent::Char(c));
    }
}

#[test]
fn corrected_word_scores_as_correct() {
    let (mut s, clock) = session("the cat sat");
    type_keys(&mut s, &clock, "thx");
    s.handle_input(InputEvent::Backspace);
    type_keys(&mut s, &clock, "e cat sat");

    let summary = s.summary().unwrap();
    assert_eq!(summary.stats.errors, 0);
    assert_eq!(summary.stats.accuracy, 100);
    assert_eq!(summary.stats.correct_words, 3);
}

#[test]
fn backspace_cannot_reopen_committed_word() {
    let (mut s, clock) = session("the cat sat");
    type_keys(&mut s, &clock, "teh ");
    s.handle_input(InputEvent::Backspace);
    assert_eq!(s.state().finalized, vec!["teh"]);

    let outcomes: Vec<Outcome> = s.classify().iter().take(3).map(|c| c.outcome).collect();
    assert_eq!(outcomes, vec![Outcome::Incorrect; 3]);
}

#[test]
fn wrong_final_characters_still_complete_at_full_length() {
    let (mut s, clock) = session("the cat");
    type_keys(&mut s, &clock, "the cax");

    let summary = s.summary().unwrap();
    assert_eq!(summary.end_reason, EndReason::Completed);
    assert_eq!(summary.stats.correct_words, 1);
    assert!(summary.stats.errors > 0);
    assert!(summary.stats.accuracy < 100);
}

#[test]
fn stopping_early_scores_the_partial_word() {
    let (mut s, clock) = session("the cat sat");
    type_keys(&mut s, &clock, "the ca");
    s.end();

    let summary = s.summary().unwrap();
    assert_eq!(summary.end_reason, EndReason::Stopped);
    // "the" + separator + "ca"
    assert_eq!(summary.stats.correct_chars, 6);
    assert_eq!(summary.stats.correct_words, 1);
    assert_eq!(summary.stats.accuracy, 100);
}

#[test]
fn turkish_characters_are_counted_as_characters() {
    let (mut s, clock) = session("çok güzel");
    type_keys(&mut s, &clock, "çok güzel");

    let summary = s.summary().unwrap();
    assert_eq!(summary.stats.correct_chars, 9);
    assert_eq!(summary.stats.total_chars, 9);
    assert_eq!(s.cursor(), s.passage().char_len());
}

#[test]
fn generated_passages_come_from_the_selected_pool() {
    let source = EmbeddedWordSource::load().unwrap();
    let pool: Vec<String> = source
        .fetch_words(Language::En, Difficulty::Hard)
        .to_vec();
    let generator = PassageGenerator::new(
        WordGenConfig {
            seed: Some(3),
            ..WordGenConfig::default()
        },
        Box::new(source),
    );
    let mut s = TypingSession::new(
        SessionConfig {
            difficulty: Difficulty::Hard,
            ..SessionConfig::default()
        },
        generator,
        Box::new(ManualClock::new()),
    );

    assert_eq!(s.passage().len(), 25);
    assert!(s.passage().words().iter().all(|w| pool.contains(w)));

    assert!(s.set_language(Language::Tr));
    assert_eq!(s.phase(), Phase::Idle);
    assert!(s.passage().words().iter().all(|w| !pool.contains(w)));
}
