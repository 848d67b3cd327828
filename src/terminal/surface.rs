use std::io::Write;
use std::sync::{Arc, Mutex};

use mediagrab_core::core::events::{Notice, NoticeLevel, UiSurface};
use mediagrab_core::models::quality::QualityOption;
use mediagrab_core::models::theme::ThemePreference;
use mediagrab_core::platforms::Detection;

use super::input::LineSource;

type Output = Arc<Mutex<dyn Write + Send>>;

#[derive(Default)]
struct ScreenState {
    qualities: Vec<QualityOption>,
    theme: ThemePreference,
}

/// Line-oriented rendering of the download form.
#[derive(Clone)]
pub struct TerminalSurface {
    out: Output,
    input: LineSource,
    state: Arc<Mutex<ScreenState>>,
}

fn level_tag(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "info",
        NoticeLevel::Success => "ok",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    }
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

impl TerminalSurface {
    pub fn stdout(input: LineSource) -> Self {
        Self::with_output(Arc::new(Mutex::new(std::io::stdout())), input)
    }

    pub fn with_output(out: Output, input: LineSource) -> Self {
        Self {
            out,
            input,
            state: Arc::new(Mutex::new(ScreenState::default())),
        }
    }

    pub fn write_line(&self, line: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }

    fn write_prompt(&self, prompt: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = write!(out, "{}", prompt);
            let _ = out.flush();
        }
    }

    /// Queue shared with the main loop.
    pub fn input(&self) -> &LineSource {
        &self.input
    }

    pub fn prompt(&self) {
        self.write_prompt("> ");
    }

    pub fn qualities(&self) -> Vec<QualityOption> {
        self.state
            .lock()
            .map(|s| s.qualities.clone())
            .unwrap_or_default()
    }

    pub fn current_theme(&self) -> ThemePreference {
        self.state.lock().map(|s| s.theme).unwrap_or_default()
    }
}

impl UiSurface for TerminalSurface {
    fn show_detection(&self, detection: Detection) {
        match detection {
            Detection::Empty => self.write_line("Paste a link to get started"),
            Detection::Platform(platform) => self.write_line(&format!(
                "[{}] {} link detected",
                platform.icon_hint(),
                platform.label()
            )),
        }
    }

    fn show_qualities(&self, options: &[QualityOption]) {
        if let Ok(mut state) = self.state.lock() {
            state.qualities = options.to_vec();
        }
        let listed = options
            .iter()
            .enumerate()
            .map(|(i, o)| format!("  {}. {}", i + 1, o.display))
            .collect::<Vec<_>>()
            .join("\n");
        self.write_line(&format!("Available qualities:\n{}", listed));
    }

    fn clear_qualities(&self) {
        let had_options = self
            .state
            .lock()
            .map(|mut s| !std::mem::take(&mut s.qualities).is_empty())
            .unwrap_or(false);
        if had_options {
            self.write_line("Quality list cleared");
        }
    }

    fn notify(&self, notice: &Notice) {
        self.write_line(&format!("[{}] {}", level_tag(notice.level), notice.message));
    }

    fn apply_theme(&self, theme: ThemePreference) {
        if let Ok(mut state) = self.state.lock() {
            state.theme = theme;
        }
        self.write_line(&format!("Theme: {}", theme.label()));
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.write_prompt(&format!("{} [y/N] ", prompt));
        match self.input.next_line_blocking() {
            Some(answer) => is_yes(&answer),
            None => {
                self.write_line("");
                false
            }
        }
    }

    fn alert(&self, notice: &Notice) {
        self.write_line(&format!("[{}] {}", level_tag(notice.level), notice.message));
    }
}
