//! Interactive session: one line per user action, each mapped onto the
//! matching handler of [`CareBridgeApp`].

use crate::core::app::CareBridgeApp;
use crate::core::{AnalysisService, Dictation, Geolocation, PreferenceStore, Storage, View};
use crate::domain::model::PointerEvent;
use crate::TerminalView;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const HELP_TEXT: &str = "\
Commands:
  symptoms <text>   set the symptoms field
  age <text>        set the age field
  analyze           analyze the current input
  report            download the PDF health report
  hospital          search hospitals near your location
  voice             dictate symptoms
  theme             toggle light/dark theme
  text              toggle large text
  glow <x> <y>      move the pointer glow
  help              show this help
  quit              leave the session";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Symptoms(String),
    Age(String),
    Analyze,
    Report,
    Hospital,
    Voice,
    Theme,
    Text,
    Glow(f64, f64),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "symptoms" => Self::Symptoms(rest.to_string()),
            "age" => Self::Age(rest.to_string()),
            "analyze" => Self::Analyze,
            "report" => Self::Report,
            "hospital" => Self::Hospital,
            "voice" => Self::Voice,
            "theme" => Self::Theme,
            "text" => Self::Text,
            "glow" => {
                let mut coords = rest.split_whitespace().map(str::parse::<f64>);
                match (coords.next(), coords.next()) {
                    (Some(Ok(x)), Some(Ok(y))) => Self::Glow(x, y),
                    _ => Self::Unknown(line.to_string()),
                }
            }
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// Runs the session until `quit` or end of input.
pub async fn run_shell<R, W, S, St, P, D, G>(
    input: R,
    app: &mut CareBridgeApp<S, St, P, D, G>,
    view: &mut TerminalView<W>,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    S: AnalysisService + Clone,
    St: Storage,
    P: PreferenceStore,
    D: Dictation,
    G: Geolocation,
{
    app.load(view);
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        match ShellCommand::parse(&line) {
            ShellCommand::Symptoms(text) => view.enter_symptoms(&text),
            ShellCommand::Age(text) => view.enter_age(&text),
            ShellCommand::Analyze => {
                app.submit(view).await;
            }
            ShellCommand::Report => {
                app.download_report(view).await;
            }
            ShellCommand::Hospital => {
                // 沒有定位時退回服務提供的連結
                if app.find_hospital(view).await.is_none() {
                    if let Some(url) = view.hospital_link().map(str::to_string) {
                        view.open_url(&url);
                    }
                }
            }
            ShellCommand::Voice => {
                app.start_voice(view).await;
            }
            ShellCommand::Theme => {
                app.toggle_theme(view);
            }
            ShellCommand::Text => {
                app.toggle_text_size(view);
            }
            ShellCommand::Glow(x, y) => app.on_pointer(view, &PointerEvent::Mouse { x, y }),
            ShellCommand::Help => view.alert(HELP_TEXT),
            ShellCommand::Quit => break,
            ShellCommand::Empty => {}
            ShellCommand::Unknown(text) => {
                tracing::debug!("Unknown shell command: {}", text);
                view.alert("Unknown command, type `help`");
            }
        }
    }

    Ok(())
}
