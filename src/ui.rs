pub mod charting;
pub mod screen;

use fastkey::{
    passage::{ClassifiedChar, Outcome},
    session::{EndReason, Phase},
    time_series::to_coords,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Widget, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

pub fn draw(app: &App, f: &mut Frame) {
    screen::current_screen(app.session.phase()).render(app, f);
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn dim_bold() -> Style {
    bold().add_modifier(Modifier::DIM)
}

fn header(app: &App) -> Paragraph<'static> {
    let session = &app.session;
    Paragraph::new(Line::from(vec![
        Span::styled(session.language().label(), bold().fg(Color::Cyan)),
        Span::raw("  ·  "),
        Span::styled(session.difficulty().to_string(), bold().fg(Color::Cyan)),
        Span::raw("  ·  "),
        Span::styled(
            format!("{}s", session.config().duration_secs),
            dim_bold(),
        ),
    ]))
    .alignment(Alignment::Center)
}

/// Style one passage character by its outcome; the cursor cell is underlined
fn char_span(idx: usize, cursor: usize, classified: &ClassifiedChar, ending: bool) -> Span<'static> {
    let (text, style) = match classified.outcome {
        Outcome::Correct => (classified.char.to_string(), bold().fg(Color::Green)),
        Outcome::Incorrect => (
            match classified.char {
                ' ' => "·".to_owned(),
                c => c.to_string(),
            },
            bold().fg(Color::Red),
        ),
        Outcome::Pending => (classified.char.to_string(), dim_bold()),
    };

    let style = if idx == cursor && !ending {
        style.add_modifier(Modifier::UNDERLINED)
    } else if ending {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    };
    Span::styled(text, style)
}

/// Passage, countdown and live stats
pub struct TypingView<'a>(pub &'a App);

impl Widget for TypingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let app = self.0;
        let session = &app.session;
        let ending = session.phase() == Phase::Ending;

        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let text_width = session.passage().text().width();
        let prompt_occupied_lines = if text_width <= max_chars_per_line as usize {
            1
        } else {
            ((text_width as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16
        };
        let filler = area.height.saturating_sub(prompt_occupied_lines + 6) / 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(filler),
                Constraint::Length(2), // timer
                Constraint::Length(prompt_occupied_lines),
                Constraint::Length(1), // padding
                Constraint::Length(1), // live stats
                Constraint::Min(0),
                Constraint::Length(1), // legend
            ])
            .split(area);

        header(app).render(chunks[0], buf);

        Paragraph::new(Span::styled(
            session.seconds_remaining().to_string(),
            if session.phase() == Phase::Active {
                bold().fg(Color::Yellow)
            } else {
                dim_bold()
            },
        ))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);

        let cursor = session.cursor();
        let spans: Vec<Span> = session
            .classify()
            .iter()
            .enumerate()
            .map(|(idx, c)| char_span(idx, cursor, c, ending))
            .collect();

        Paragraph::new(Line::from(spans))
            .alignment(if prompt_occupied_lines == 1 {
                // when the prompt is small enough to fit on one line
                // centering the text gives a nice zen feeling
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: true })
            .render(chunks[3], buf);

        let stats = session.stats();
        Paragraph::new(Span::styled(
            format!(
                "{} wpm   {}% acc   {} errors",
                stats.wpm, stats.accuracy, stats.errors
            ),
            bold(),
        ))
        .alignment(Alignment::Center)
        .render(chunks[5], buf);

        let legend = match session.phase() {
            Phase::Idle => {
                "start typing or (ctrl+s)tart / (tab) new passage / (ctrl+l)anguage / (ctrl+d)ifficulty / (esc)ape"
            }
            Phase::Active => "(enter) finish / (esc)ape",
            Phase::Ending | Phase::Complete => "",
        };
        Paragraph::new(Span::styled(
            legend,
            Style::default().add_modifier(Modifier::ITALIC),
        ))
        .render(chunks[7], buf);
    }
}

/// Results chart and final numbers
pub struct ResultsView<'a>(pub &'a App);

impl Widget for ResultsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let app = self.0;
        let session = &app.session;
        let Some(summary) = session.summary() else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Min(1),    // chart
                Constraint::Length(1), // stats
                Constraint::Length(1), // end reason
                Constraint::Length(1), // padding
                Constraint::Length(1), // legend
            ])
            .split(area);

        header(app).render(chunks[0], buf);

        let tuples = to_coords(session.wpm_samples());
        let (overall_duration, highest_wpm) =
            charting::compute_chart_params(&tuples, summary.elapsed_secs);

        let datasets = vec![Dataset::default()
            .marker(ratatui::symbols::Marker::Braille)
            .style(Style::default().fg(Color::Magenta))
            .graph_type(GraphType::Line)
            .data(&tuples)];

        Chart::new(datasets)
            .x_axis(
                Axis::default()
                    .title("seconds")
                    .bounds([1.0, overall_duration])
                    .labels(vec![
                        Span::styled("1", bold()),
                        Span::styled(charting::format_label(overall_duration), bold()),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .title("wpm")
                    .bounds([0.0, highest_wpm])
                    .labels(vec![
                        Span::styled("0", bold()),
                        Span::styled(charting::format_label(highest_wpm), bold()),
                    ]),
            )
            .render(chunks[1], buf);

        let stats = summary.stats;
        Paragraph::new(Span::styled(
            format!(
                "{} wpm   {}% acc   {} errors   {}/{} words   {:.2} sd",
                stats.wpm,
                stats.accuracy,
                stats.errors,
                stats.correct_words,
                session.passage().len(),
                summary.consistency
            ),
            bold(),
        ))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);

        let reason = match summary.end_reason {
            EndReason::Completed => format!("completed in {:.1}s", summary.elapsed_secs),
            EndReason::TimeUp => "time's up".to_string(),
            EndReason::Stopped => format!("stopped after {:.1}s", summary.elapsed_secs),
        };
        Paragraph::new(Span::styled(
            reason,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);

        Paragraph::new(Span::styled(
            "type to retry / (tab) new passage / (ctrl+l)anguage / (ctrl+d)ifficulty / (esc)ape",
            Style::default().add_modifier(Modifier::ITALIC),
        ))
        .render(chunks[5], buf);
    }
}
