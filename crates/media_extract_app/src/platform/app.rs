use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use clap::Parser;
use engine_logging::{engine_debug, engine_info, engine_warn};
use media_extract_core::{update, AppState, Msg};

use super::cli::Cli;
use super::config::load_config;
use super::effects::EffectRunner;
use super::ui;
use super::ui::commands::{parse_command, Command};

/// Everything the console loop reacts to.
#[derive(Debug)]
pub(crate) enum AppInput {
    Msg(Msg),
    Line(String),
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    engine_logging::initialize(cli.log_destination(), cli.log_level());

    let config = load_config(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    if cli.print_config {
        let pretty = ron::ser::PrettyConfig::new();
        let text = ron::ser::to_string_pretty(&config, pretty).context("serializing config")?;
        println!("{text}");
        return Ok(());
    }

    let glitch_enabled = config.glitch_enabled && !cli.no_glitch;
    let (input_tx, input_rx) = mpsc::channel::<AppInput>();
    let runner = EffectRunner::new(config.to_settings(), glitch_enabled, input_tx.clone())
        .context("starting extraction engine")?;
    spawn_stdin_reader(input_tx);
    engine_info!("Console started glitch_enabled={}", glitch_enabled);

    let stdout = io::stdout();
    let mut console = Console::new(runner, stdout.lock());
    console.render().context("writing to stdout")?;
    console.run(&input_rx).context("writing to stdout")?;
    console.shutdown();
    Ok(())
}

fn spawn_stdin_reader(tx: mpsc::Sender<AppInput>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(AppInput::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    engine_warn!("Failed to read stdin: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(AppInput::InputClosed);
    });
}

/// Owns the state and drives `update`, effects and rendering.
pub(crate) struct Console<W: Write> {
    state: AppState,
    runner: EffectRunner,
    out: W,
    input_closed: bool,
}

impl<W: Write> Console<W> {
    pub fn new(runner: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(),
            runner,
            out,
            input_closed: false,
        }
    }

    /// Process inputs until `quit`, or until input is closed and nothing is pending.
    pub fn run(&mut self, inputs: &mpsc::Receiver<AppInput>) -> io::Result<()> {
        while let Ok(input) = inputs.recv() {
            let flow = match input {
                AppInput::Msg(msg) => {
                    self.dispatch(msg)?;
                    Flow::Continue
                }
                AppInput::Line(line) => self.handle_line(&line)?,
                AppInput::InputClosed => {
                    self.input_closed = true;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
            if self.input_closed && !self.state.is_busy() {
                engine_debug!("Input closed and nothing pending; leaving");
                break;
            }
        }
        self.out.flush()
    }

    pub fn shutdown(self) {
        self.runner.shutdown();
    }

    fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        match parse_command(line) {
            Ok(Command::Dispatch(msg)) => self.dispatch(msg)?,
            Ok(Command::Download { card }) => {
                let record_id = self.state.results().get(card).map(|record| record.id.clone());
                match record_id {
                    Some(record_id) => self.dispatch(Msg::DownloadClicked { record_id })?,
                    None => writeln!(self.out, "!! no result card #{}", card + 1)?,
                }
            }
            Ok(Command::Show) => self.render()?,
            Ok(Command::Help) => writeln!(self.out, "{}", ui::commands::HELP)?,
            Ok(Command::Quit) => return Ok(Flow::Quit),
            Err(err) => writeln!(self.out, "!! {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let glitch = match msg {
            Msg::GlitchStarted => Some(true),
            Msg::GlitchEnded => Some(false),
            _ => None,
        };
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        let notices = self.runner.enqueue(effects);
        match glitch {
            None if was_dirty => self.render()?,
            // Only the title flickers, and only while nothing else is being drawn.
            Some(true) if was_dirty && !self.state.is_busy() => {
                writeln!(self.out, "{}", ui::render::title_line(&self.state.view()))?;
                self.out.flush()?;
            }
            _ => {}
        }
        for notice in notices {
            writeln!(self.out, "!! {notice}")?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        for line in ui::render::render(&self.state.view()) {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use media_extract_engine::ExtractorSettings;

    fn fast_settings() -> ExtractorSettings {
        ExtractorSettings {
            min_latency: Duration::from_millis(5),
            max_latency: Duration::from_millis(10),
            download_latency: Duration::from_millis(5),
            ..ExtractorSettings::default()
        }
    }

    fn console() -> (Console<Vec<u8>>, mpsc::Sender<AppInput>, mpsc::Receiver<AppInput>) {
        engine_logging::initialize_for_tests();
        let (tx, rx) = mpsc::channel();
        let runner = EffectRunner::new(fast_settings(), false, tx.clone()).unwrap();
        (Console::new(runner, Vec::new()), tx, rx)
    }

    fn output(console: &Console<Vec<u8>>) -> String {
        String::from_utf8_lossy(&console.out).into_owned()
    }

    #[test]
    fn extraction_then_download_completes_before_exit() {
        let (mut console, tx, rx) = console();
        let script = [
            "multi",
            "set 1 https://instagram.com/p/x",
            "add",
            "set 2 https://tiktok.com/@y",
            "extract",
        ];
        for line in script {
            tx.send(AppInput::Line(line.to_string())).unwrap();
        }
        tx.send(AppInput::InputClosed).unwrap();
        console.run(&rx).unwrap();

        let text = output(&console);
        assert!(text.contains("<EXTRACTING...>"));
        assert!(text.contains("> EXTRACTION_COMPLETE: 2 MEDIA FILES FOUND"));
        assert!(text.contains("#1 [INSTAGRAM]"));
        assert!(text.contains("#2 [TIKTOK]"));
        assert_eq!(console.state.results().len(), 2);

        let kind = console.state.results()[0].kind;
        console.input_closed = false;
        tx.send(AppInput::Line("download 1".to_string())).unwrap();
        tx.send(AppInput::InputClosed).unwrap();
        console.run(&rx).unwrap();

        let text = output(&console);
        assert!(text.contains("DOWNLOADING..."));
        assert!(text.contains(&format!("!! Download simulated for {kind} from Instagram")));
        console.shutdown();
    }

    #[test]
    fn download_notice_survives_clear_before_end_of_input() {
        let (mut console, tx, rx) = console();
        tx.send(AppInput::Line("set 1 https://x.com/a/status/1".to_string())).unwrap();
        tx.send(AppInput::Line("extract".to_string())).unwrap();
        tx.send(AppInput::InputClosed).unwrap();
        console.run(&rx).unwrap();
        let kind = console.state.results()[0].kind;

        console.input_closed = false;
        for line in ["download 1", "clear"] {
            tx.send(AppInput::Line(line.to_string())).unwrap();
        }
        tx.send(AppInput::InputClosed).unwrap();
        console.run(&rx).unwrap();

        let text = output(&console);
        assert!(text.contains(&format!("!! Download simulated for {kind} from X/Twitter")));
        assert!(!console.state.is_busy());
        console.shutdown();
    }

    #[test]
    fn glitch_pulse_redraws_only_the_title_when_idle() {
        let (mut console, _tx, _rx) = console();
        console.dispatch(Msg::GlitchStarted).unwrap();
        console.dispatch(Msg::GlitchEnded).unwrap();
        assert_eq!(output(&console), "==[ M3D!A_3XTR4CT.3x3 ]==\n");
    }

    #[test]
    fn glitch_pulse_stays_quiet_while_extracting() {
        let (mut console, _tx, _rx) = console();
        console.handle_line("set 1 https://reddit.com/r/rust").unwrap();
        console.handle_line("extract").unwrap();
        let before = output(&console).len();
        console.dispatch(Msg::GlitchStarted).unwrap();
        assert_eq!(output(&console).len(), before);
    }

    #[test]
    fn bad_lines_and_missing_cards_are_reported() {
        let (mut console, tx, rx) = console();
        tx.send(AppInput::Line("frobnicate".to_string())).unwrap();
        tx.send(AppInput::Line("download 3".to_string())).unwrap();
        tx.send(AppInput::InputClosed).unwrap();
        console.run(&rx).unwrap();

        let text = output(&console);
        assert!(text.contains("!! unknown command `frobnicate`"));
        assert!(text.contains("!! no result card #3"));
    }

    #[test]
    fn quit_stops_the_loop() {
        let (mut console, tx, rx) = console();
        tx.send(AppInput::Line("quit".to_string())).unwrap();
        tx.send(AppInput::Line("extract".to_string())).unwrap();
        console.run(&rx).unwrap();
        assert!(console.out.is_empty());
    }
}
