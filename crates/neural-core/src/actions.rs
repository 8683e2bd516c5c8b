use super::state::LineDraft;
use super::state::LineId;
use super::state::RevealId;

#[derive(Debug, Clone)]
pub enum TerminalAction {
    User(UserAction),
    Timer(TimerAction),
}

#[derive(Debug, Clone)]
pub enum UserAction {
    /// Starts the boot banner. Only the first call has an effect.
    Activate,
    InputChar(char),
    InputBackspace,
    InputPaste(String),
    ClearInput,
    /// Submits the current input line.
    Submit,
    /// Submits `raw` as if it had been typed, leaving the input untouched.
    SubmitCommand(String),
    HistoryUp,
    HistoryDown,
    CloseWindow,
    ToggleMinimize,
    ToggleMaximize,
    BackToTerminal,
    ScrollLines(isize),
    ScrollToBottom,
    /// Scrolls the portfolio view by `delta` rows, never past `max`.
    ScrollPortfolio { delta: i32, max: u16 },
    FocusNextLink,
    FocusPrevLink,
    ActivateLine(LineId),
    /// Opens the portfolio-view link at this index.
    ActivatePortfolioLink(usize),
    OpenFocusedLink,
    CopyFocusedLink,
}

/// Work deferred on the logical timeline. Produced by the reducer through
/// `TerminalEffect::Schedule` and fed back when due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerAction {
    BootLine(usize),
    RevealStep(RevealId),
    AppendLines(Vec<LineDraft>),
    EnterPortfolio,
}

impl TimerAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::BootLine(_) => "boot-line",
            Self::RevealStep(_) => "reveal-step",
            Self::AppendLines(_) => "append-lines",
            Self::EnterPortfolio => "enter-portfolio",
        }
    }
}
