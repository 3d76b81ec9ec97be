use itertools::{EitherOrBoth, Itertools};

/// How a passage character relates to what has been typed so far
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    Correct,
    Incorrect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassifiedChar {
    pub char: char,
    pub outcome: Outcome,
}

/// The target text of one attempt
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Passage {
    words: Vec<String>,
    text: String,
}

impl Passage {
    pub fn new(words: Vec<String>) -> Self {
        let text = words.join(" ");
        Self { words, text }
    }

    /// Build a passage from free text, collapsing any run of whitespace
    pub fn from_text(text: &str) -> Self {
        Self::new(text.split_whitespace().map(str::to_string).collect())
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Target word at `idx`, or `None` past the end of the passage
    pub fn word(&self, idx: usize) -> Option<&str> {
        self.words.get(idx).map(String::as_str)
    }

    pub fn last_word(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the full text in characters, separators included
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Classify every character of the passage text against the typed words.
    ///
    /// Finalized words are judged as a whole, the word being typed is judged
    /// position by position, and a separator turns correct once the word
    /// before it has been finalized.
    pub fn classify(&self, finalized: &[String], in_progress: &str) -> Vec<ClassifiedChar> {
        let mut out = Vec::with_capacity(self.text.len());
        let current_idx = finalized.len();

        for (idx, target) in self.words.iter().enumerate() {
            if idx > 0 {
                let outcome = if idx <= finalized.len() {
                    Outcome::Correct
                } else {
                    Outcome::Pending
                };
                out.push(ClassifiedChar { char: ' ', outcome });
            }

            if let Some(typed) = finalized.get(idx) {
                let outcome = if typed == target {
                    Outcome::Correct
                } else {
                    Outcome::Incorrect
                };
                out.extend(target.chars().map(|char| ClassifiedChar { char, outcome }));
            } else if idx == current_idx {
                out.extend(target.chars().zip_longest(in_progress.chars()).filter_map(
                    |pair| match pair {
                        EitherOrBoth::Both(expected, typed) => Some(ClassifiedChar {
                            char: expected,
                            outcome: if expected == typed {
                                Outcome::Correct
                            } else {
                                Outcome::Incorrect
                            },
                        }),
                        EitherOrBoth::Left(expected) => Some(ClassifiedChar {
                            char: expected,
                            outcome: Outcome::Pending,
                        }),
                        // overflow past the target has no passage character to mark
                        EitherOrBoth::Right(_) => None,
                    },
                ));
            } else {
                out.extend(target.chars().map(|char| ClassifiedChar {
                    char,
                    outcome: Outcome::Pending,
                }));
            }
        }

        out
    }

    /// Character index of the next expected passage character
    pub fn cursor(&self, finalized: &[String], in_progress: &str) -> usize {
        let done: usize = self
            .words
            .iter()
            .take(finalized.len())
            .map(|w| w.chars().count() + 1)
            .sum();
        let current = self
            .word(finalized.len())
            .map(|w| w.chars().count().min(in_progress.chars().count()))
            .unwrap_or(0);
        (done + current).min(self.char_len())
    }
}
