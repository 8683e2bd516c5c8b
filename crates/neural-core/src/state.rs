use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::commands::Command;
use super::config::TimingConfig;
use super::portfolio::PortfolioData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    System,
    User,
    Output,
    Error,
}

impl LineKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Output => "output",
            Self::Error => "error",
        }
    }
}

/// A line that has not been appended yet. The buffer assigns the id and
/// timestamp on append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDraft {
    pub text: String,
    pub kind: LineKind,
    pub link_target: Option<String>,
}

impl LineDraft {
    pub fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
            link_target: None,
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Output)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::System)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Error)
    }

    pub fn blank() -> Self {
        Self::output("")
    }

    pub fn link(text: impl Into<String>, kind: LineKind, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            link_target: Some(target.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub id: LineId,
    pub text: String,
    pub kind: LineKind,
    pub ts_ms: u64,
    pub link_target: Option<String>,
}

impl TerminalLine {
    pub fn is_clickable(&self) -> bool {
        self.link_target.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("clickable line has an empty link target")]
    EmptyLinkTarget,
    #[error("line {0:?} is not in the buffer")]
    UnknownLine(LineId),
}

/// Append-only terminal log. Ids keep increasing across `clear` so a stale
/// id can never address a newer line.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    next_id: u64,
    lines: Vec<TerminalLine>,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            lines: Vec::new(),
        }
    }

    pub fn append(&mut self, draft: LineDraft, ts_ms: u64) -> Result<LineId, LineError> {
        if draft
            .link_target
            .as_deref()
            .is_some_and(|target| target.trim().is_empty())
        {
            return Err(LineError::EmptyLinkTarget);
        }

        let id = LineId(self.next_id);
        self.next_id += 1;
        self.lines.push(TerminalLine {
            id,
            text: draft.text,
            kind: draft.kind,
            ts_ms,
            link_target: draft.link_target,
        });
        Ok(id)
    }

    /// Appends one word to the text of line `id`, separated by a single
    /// space unless the line is still empty.
    pub fn extend_text(&mut self, id: LineId, word: &str) -> Result<(), LineError> {
        let line = self
            .lines
            .iter_mut()
            .rev()
            .find(|line| line.id == id)
            .ok_or(LineError::UnknownLine(id))?;
        if !line.text.is_empty() {
            line.text.push(' ');
        }
        line.text.push_str(word);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn get(&self, id: LineId) -> Option<&TerminalLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn last(&self) -> Option<&TerminalLine> {
        self.lines.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TerminalLine> {
        self.lines.iter()
    }

    pub fn as_slice(&self) -> &[TerminalLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Terminal,
    Portfolio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowChrome {
    Normal,
    Minimized,
    Maximized,
}

impl WindowChrome {
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Minimized => "minimized",
            Self::Maximized => "maximized",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Main,
    Projects,
    Skills,
    About,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::About => "about",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UiTheme {
    #[default]
    Matrix,
    Cyberpunk,
    Amber,
}

impl UiTheme {
    pub fn label(self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::Cyberpunk => "cyberpunk",
            Self::Amber => "amber",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "matrix" => Some(Self::Matrix),
            "cyberpunk" => Some(Self::Cyberpunk),
            "amber" => Some(Self::Amber),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RevealId(pub u64);

/// The one in-flight typewriter reveal. While this exists the sequencer is
/// busy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    pub id: RevealId,
    pub line: LineId,
    pub words: Vec<String>,
    pub shown: usize,
    pub then: Command,
}

impl RevealState {
    pub fn is_complete(&self) -> bool {
        self.shown >= self.words.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub text: String,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Rows scrolled up from the tail; 0 follows the newest line.
    pub scroll_from_bottom: usize,
    pub focused_link: Option<LineId>,
    pub portfolio_scroll: u16,
    /// Index into `PortfolioData::link_targets` while the portfolio view is up.
    pub portfolio_link: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct ShellState {
    pub lines: LineBuffer,
    pub mode: SessionMode,
    pub chrome: WindowChrome,
    pub section: Section,
    pub input: InputState,
    pub view: ViewState,
    pub reveal: Option<RevealState>,
    pub next_reveal_id: u64,
    pub boot_started: bool,
    pub boot_complete: bool,
    /// Logical-timeline time, set by the owning session before each reduce.
    pub now_ms: u64,
    pub timing: TimingConfig,
    pub data: Arc<PortfolioData>,
}

impl ShellState {
    pub fn new(data: Arc<PortfolioData>, timing: TimingConfig) -> Self {
        Self {
            lines: LineBuffer::new(),
            mode: SessionMode::Terminal,
            chrome: WindowChrome::Normal,
            section: Section::Main,
            input: InputState::default(),
            view: ViewState::default(),
            reveal: None,
            next_reveal_id: 1,
            boot_started: false,
            boot_complete: false,
            now_ms: 0,
            timing,
            data,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.reveal.is_some()
    }

    /// Clickable lines in display order.
    pub fn link_lines(&self) -> impl Iterator<Item = &TerminalLine> {
        self.lines.iter().filter(|line| line.is_clickable())
    }

    /// Target of the focused link in whichever view is active.
    pub fn focused_link_target(&self) -> Option<String> {
        match self.mode {
            SessionMode::Terminal => {
                let id = self.view.focused_link?;
                self.lines.get(id)?.link_target.clone()
            }
            SessionMode::Portfolio => {
                let index = self.view.portfolio_link?;
                self.data.link_targets().into_iter().nth(index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ids_keep_increasing_across_clear() {
        let mut buffer = LineBuffer::new();
        let first = buffer.append(LineDraft::output("one"), 0).unwrap();
        buffer.clear();
        let second = buffer.append(LineDraft::output("two"), 0).unwrap();

        assert!(second > first);
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.get(first), None);
    }

    #[test]
    fn empty_link_target_is_rejected() {
        let mut buffer = LineBuffer::new();
        let err = buffer
            .append(LineDraft::link("demo", LineKind::Output, "  "), 0)
            .unwrap_err();

        assert_eq!(err, LineError::EmptyLinkTarget);
        assert!(buffer.is_empty());
    }

    #[test]
    fn extend_text_joins_words_with_single_space() {
        let mut buffer = LineBuffer::new();
        let id = buffer.append(LineDraft::blank(), 0).unwrap();
        buffer.extend_text(id, "ACCESSING").unwrap();
        buffer.extend_text(id, "FILES").unwrap();

        assert_eq!(buffer.get(id).map(|l| l.text.as_str()), Some("ACCESSING FILES"));
    }

    #[test]
    fn extend_text_on_cleared_line_fails() {
        let mut buffer = LineBuffer::new();
        let id = buffer.append(LineDraft::blank(), 0).unwrap();
        buffer.clear();

        assert_eq!(buffer.extend_text(id, "x"), Err(LineError::UnknownLine(id)));
    }

    #[test]
    fn theme_parse_is_case_insensitive() {
        assert_eq!(UiTheme::parse(" Cyberpunk "), Some(UiTheme::Cyberpunk));
        assert_eq!(UiTheme::parse("solar"), None);
    }
}
