use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    thread,
    time::{Duration, Instant},
};

use clap::Parser;
use log::{error, info, warn};
use speedread_core::{
    ReaderConfig, Sequencer,
    schedule::DeadlineScheduler,
    settings::ContextLayout,
};

use stdin_input::StdinInput;
use terminal::TerminalRenderer;

#[path = "main/stdin_input.rs"]
mod stdin_input;
#[path = "main/terminal.rs"]
mod terminal;

/// Upper bound on how long the loop sleeps before polling input again.
const INPUT_POLL_MS: u64 = 20;

/// RSVP speed reader for the terminal.
#[derive(Parser, Debug)]
#[command(name = "speedread", version, about, long_about = None)]
struct Cli {
    /// Text file to read. Reads stdin when neither a file nor --text is given.
    path: Option<PathBuf>,

    /// Read this text instead of a file.
    #[arg(long, conflicts_with = "path")]
    text: Option<String>,

    /// Words per minute.
    #[arg(long)]
    wpm: Option<u32>,

    /// Words shown at once.
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Extra seconds after `. ! ? : ;`.
    #[arg(long)]
    pause_punctuation: Option<f64>,

    /// Extra seconds after `,`.
    #[arg(long)]
    pause_comma: Option<f64>,

    /// Seconds shown for a paragraph break.
    #[arg(long)]
    pause_paragraph: Option<f64>,

    /// Relative fixation position, 0.0 to 1.0.
    #[arg(long)]
    orp_position: Option<f64>,

    /// Disable fixation highlighting.
    #[arg(long)]
    no_orp: bool,

    /// Delay before the first item, in milliseconds.
    #[arg(long)]
    initial_delay_ms: Option<u32>,

    /// Items longer than this many characters get extra time.
    #[arg(long)]
    word_length_threshold: Option<usize>,

    /// Extra milliseconds per character above the threshold.
    #[arg(long)]
    extra_ms_per_char: Option<u32>,

    /// Show the previous and next item around the current one.
    #[arg(long)]
    show_context: bool,

    /// Show context side by side instead of above and below.
    #[arg(long, requires = "show_context")]
    horizontal_context: bool,

    /// Do not print the context snippet when pausing.
    #[arg(long)]
    no_snippet: bool,
}

impl Cli {
    fn reader_config(&self) -> ReaderConfig {
        let defaults = ReaderConfig::default();
        ReaderConfig {
            wpm: self.wpm.unwrap_or(defaults.wpm),
            chunk_size: self.chunk_size.unwrap_or(defaults.chunk_size),
            pause_punctuation: self.pause_punctuation.unwrap_or(defaults.pause_punctuation),
            pause_comma: self.pause_comma.unwrap_or(defaults.pause_comma),
            pause_paragraph: self.pause_paragraph.unwrap_or(defaults.pause_paragraph),
            enable_orp: !self.no_orp,
            orp_position: self.orp_position.unwrap_or(defaults.orp_position),
            initial_delay_ms: self.initial_delay_ms.unwrap_or(defaults.initial_delay_ms),
            word_length_threshold: self
                .word_length_threshold
                .unwrap_or(defaults.word_length_threshold),
            extra_ms_per_char: self.extra_ms_per_char.unwrap_or(defaults.extra_ms_per_char),
            show_context: self.show_context,
            context_layout: if self.horizontal_context {
                ContextLayout::Horizontal
            } else {
                ContextLayout::Vertical
            },
            show_continuous_context: !self.no_snippet,
        }
    }

    /// Source text, and whether stdin is free for reading controls.
    fn load_text(&self) -> io::Result<(String, bool)> {
        if let Some(text) = &self.text {
            return Ok((text.clone(), true));
        }
        if let Some(path) = &self.path {
            return Ok((fs::read_to_string(path)?, true));
        }

        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok((text, false))
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("speedread failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> io::Result<()> {
    let requested = cli.reader_config();
    if let Err(err) = requested.validate() {
        warn!("adjusting settings: {err}");
    }
    let mut config = requested.sanitized();
    let (text, interactive) = cli.load_text()?;

    let mut sequencer = Sequencer::new(DeadlineScheduler::new());
    if let Err(err) = sequencer.start_text(&text, &config) {
        info!("{err}");
        println!("Nothing to read.");
        return Ok(());
    }
    info!(
        "reading {} items at {} wpm (chunk size {})",
        sequencer.item_count(),
        config.wpm,
        config.chunk_size
    );

    let mut input = interactive.then(StdinInput::spawn);
    let mut renderer = TerminalRenderer::new(io::stdout().lock());
    if interactive {
        renderer.print_help()?;
    }

    let clock = Instant::now();
    let mut was_paused = false;
    loop {
        let now_ms = u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX);
        sequencer.scheduler_mut().set_now(now_ms);

        if let Some(input) = input.as_mut() {
            let mut emitted = Vec::new();
            if sequencer
                .process_inputs(input, &mut config, |event| emitted.push(event))
                .is_err()
            {
                info!("quit requested");
                break;
            }
            for event in emitted {
                renderer.render(&sequencer, event, &config)?;
            }
        }

        if let Some(handle) = sequencer.scheduler_mut().poll(now_ms) {
            if let Some(event) = sequencer.on_timer(handle, &config) {
                renderer.render(&sequencer, event, &config)?;
            }
        }
        if sequencer.is_finished() && input.as_ref().is_none_or(StdinInput::is_closed) {
            break;
        }

        let paused = sequencer.is_paused();
        if paused != was_paused {
            renderer.render_status(&sequencer, &config)?;
            was_paused = paused;
        }

        let sleep_ms = sequencer
            .scheduler()
            .next_deadline_ms()
            .map_or(INPUT_POLL_MS, |deadline| {
                deadline.saturating_sub(now_ms).min(INPUT_POLL_MS)
            });
        thread::sleep(Duration::from_millis(sleep_ms.max(1)));
    }

    Ok(())
}
