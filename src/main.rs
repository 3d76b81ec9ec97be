mod ui;

use clap::{builder::RangedU64ValueParser, error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use fastkey::{
    app_dirs::AppDirs,
    clock::{Clock, SystemClock},
    config::{Config, ConfigStore, FileConfigStore},
    input::{map_event, Command},
    language::{Difficulty, EmbeddedWordSource, Language, WordSource},
    runtime::{CrosstermEventSource, EventSource, FixedTicker, Runner, Ticker},
    session::SessionConfig,
    word_generator::{PassageGenerator, WordGenConfig},
    TypingSession,
};
use log::{info, warn};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    fs::{self, OpenOptions},
    io::{self, stdin},
    time::Duration,
};

/// terminal typing speed test
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal typing speed test: type a randomly generated passage against the clock and get live words-per-minute, accuracy and per-character feedback."
)]
pub struct Cli {
    /// number of seconds to run test
    #[clap(short = 's', long, value_parser = RangedU64ValueParser::<u64>::new().range(1..))]
    seconds: Option<u64>,

    /// number of words in each passage
    #[clap(short = 'w', long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    words: Option<usize>,

    /// language to pull words from
    #[clap(short = 'l', long, value_enum)]
    language: Option<Language>,

    /// easy uses common words, hard uses long ones
    #[clap(short = 'd', long, value_enum)]
    difficulty: Option<Difficulty>,

    /// custom prompt to use instead of random words
    #[clap(short = 'p', long)]
    prompt: Option<String>,

    /// seed for reproducible passages
    #[clap(long)]
    seed: Option<u64>,

    /// print the final result as JSON on exit
    #[clap(long)]
    json: bool,

    /// write a debug log to the state directory (filter with RUST_LOG)
    #[clap(long)]
    log: bool,
}

impl Cli {
    /// Command line values win over the stored config for this run
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(seconds) = self.seconds {
            cfg.duration_secs = seconds;
        }
        if let Some(words) = self.words {
            cfg.word_count = words;
        }
        if let Some(language) = self.language {
            cfg.language = language;
        }
        if let Some(difficulty) = self.difficulty {
            cfg.difficulty = difficulty;
        }
        cfg
    }

    fn to_word_gen_config(&self, cfg: &Config) -> WordGenConfig {
        WordGenConfig {
            number_of_words: cfg.word_count,
            custom_prompt: self.prompt.clone(),
            seed: self.seed,
        }
    }
}

pub struct App {
    pub session: TypingSession,
    pub config: Config,
    /// What goes back to disk; command line overrides stay out of it
    stored: Config,
    store: Box<dyn ConfigStore>,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        cli: &Cli,
        store: Box<dyn ConfigStore>,
        source: Box<dyn WordSource>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let stored = store.load();
        let config = cli.apply(stored.clone());
        let generator = PassageGenerator::new(cli.to_word_gen_config(&config), source);
        let session = TypingSession::new(SessionConfig::from(&config), generator, clock);

        Self {
            session,
            config,
            stored,
            store,
            should_quit: false,
        }
    }

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Type(event) => self.session.handle_input(event),
            Command::Start => {
                self.session.start();
            }
            Command::Retry => {
                self.session.retry();
            }
            Command::ToggleLanguage => {
                let language = self.session.language().toggled();
                if self.session.set_language(language) {
                    self.config.language = language;
                    self.stored.language = language;
                    self.persist();
                }
            }
            Command::ToggleDifficulty => {
                let difficulty = self.session.difficulty().toggled();
                if self.session.set_difficulty(difficulty) {
                    self.config.difficulty = difficulty;
                    self.stored.difficulty = difficulty;
                    self.persist();
                }
            }
            Command::Tick => self.session.on_tick(),
            Command::Quit => self.should_quit = true,
            Command::Redraw | Command::Ignore => {}
        }
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.stored) {
            warn!("failed to save config: {err}");
        }
    }
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    let Some(path) = AppDirs::log_path() else {
        return Err("no directory available for the log file".into());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = OpenOptions::new().create(true).append(true).open(&path)?;

    // the terminal belongs to the TUI, so logs only ever go to the file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    info!("logging to {}", path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if cli.log {
        init_logging()?;
    }

    let source = EmbeddedWordSource::load()?;
    let mut app = App::new(
        &cli,
        Box::new(FileConfigStore::new()),
        Box::new(source),
        Box::new(SystemClock::new()),
    );
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(app.config.tick_rate_ms.max(1))),
    );

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    result?;

    if let Some(summary) = app.session.summary() {
        if cli.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!(
                "{} wpm   {}% acc   {} errors   {:.2} sd",
                summary.stats.wpm,
                summary.stats.accuracy,
                summary.stats.errors,
                summary.consistency
            );
        }
    }

    Ok(())
}

fn start_tui<B: Backend, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui::draw(app, f))?;

    loop {
        let command = map_event(&runner.step());
        app.handle(command);
        if app.should_quit {
            info!("quitting in phase {}", app.session.phase());
            break;
        }
        if command != Command::Ignore {
            terminal.draw(|f| ui::draw(app, f))?;
        }
    }

    Ok(())
}
