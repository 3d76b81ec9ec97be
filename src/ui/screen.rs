use fastkey::session::Phase;
use ratatui::Frame;

use crate::{
    ui::{ResultsView, TypingView},
    App,
};

/// A UI Screen boundary: responsible for rendering one phase of the app
pub trait Screen {
    fn render(&self, app: &App, f: &mut Frame);
}

/// Passage, live stats and countdown; used until the session completes
pub struct TypingScreen;

impl Screen for TypingScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        f.render_widget(TypingView(app), f.area());
    }
}

/// WPM chart and final numbers
pub struct ResultsScreen;

impl Screen for ResultsScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        f.render_widget(ResultsView(app), f.area());
    }
}

/// Helper to construct the appropriate screen for the current phase
pub fn current_screen(phase: Phase) -> Box<dyn Screen> {
    match phase {
        Phase::Idle | Phase::Active | Phase::Ending => Box::new(TypingScreen),
        Phase::Complete => Box::new(ResultsScreen),
    }
}
