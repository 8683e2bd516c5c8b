#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEffect {
    RequestFrame,
    Schedule {
        delay_ms: u64,
        group: TimerGroup,
        action: TimerAction,
    },
    CancelTimers(TimerGroup),
    OpenLink(String),
    CopyToClipboard(String),
}

use tracing::debug;
use tracing::warn;

use super::actions::TerminalAction;
use super::actions::TimerAction;
use super::actions::UserAction;
use super::commands::classify;
use super::commands::Command;
use super::commands::CommandRegistry;
use super::commands::Dispatch;
use super::commands::BOOT_SEQUENCE;
use super::scheduler::TimerGroup;
use super::script::script_for;
use super::state::LineDraft;
use super::state::LineId;
use super::state::LineKind;
use super::state::RevealId;
use super::state::RevealState;
use super::state::Section;
use super::state::SessionMode;
use super::state::ShellState;
use super::state::ViewState;
use super::state::WindowChrome;

pub const COMMAND_HINT: &str = "💡 Type /help for available commands.";
pub const SYNTAX_HINT: &str = "💡 Commands must start with /. Type /help for available commands.";

pub fn reduce(state: &mut ShellState, action: TerminalAction) -> Vec<TerminalEffect> {
    match action {
        TerminalAction::User(user) => reduce_user(state, user),
        TerminalAction::Timer(timer) => reduce_timer(state, timer),
    }
}

fn reduce_user(state: &mut ShellState, action: UserAction) -> Vec<TerminalEffect> {
    match action {
        UserAction::Activate => {
            if state.boot_started {
                return Vec::new();
            }
            state.boot_started = true;
            debug!(lines = BOOT_SEQUENCE.len(), "starting boot sequence");
            vec![TerminalEffect::Schedule {
                delay_ms: state.timing.boot_line_ms,
                group: TimerGroup::Boot,
                action: TimerAction::BootLine(0),
            }]
        }
        UserAction::InputChar(c) => {
            if !accepts_input(state) {
                return Vec::new();
            }
            state.input.text.push(c);
            vec![TerminalEffect::RequestFrame]
        }
        UserAction::InputBackspace => {
            if !accepts_input(state) {
                return Vec::new();
            }
            state.input.text.pop();
            vec![TerminalEffect::RequestFrame]
        }
        UserAction::InputPaste(text) => {
            if !accepts_input(state) {
                return Vec::new();
            }
            let flattened: String = text
                .chars()
                .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                .collect();
            state.input.text.push_str(&flattened);
            vec![TerminalEffect::RequestFrame]
        }
        UserAction::ClearInput => {
            if !accepts_input(state) {
                return Vec::new();
            }
            state.input.text.clear();
            state.input.history_index = None;
            vec![TerminalEffect::RequestFrame]
        }
        UserAction::Submit => {
            if !accepts_input(state) || state.input.text.trim().is_empty() {
                return Vec::new();
            }
            let raw = std::mem::take(&mut state.input.text);
            submit(state, raw)
        }
        UserAction::SubmitCommand(raw) => submit(state, raw),
        UserAction::HistoryUp => {
            if !accepts_input(state) || state.input.history.is_empty() {
                return Vec::new();
            }
            let index = match state.input.history_index {
                None => state.input.history.len() - 1,
                Some(index) => index.saturating_sub(1),
            };
            state.input.history_index = Some(index);
            state.input.text = state.input.history[index].clone();
            vec![TerminalEffect::RequestFrame]
        }
        UserAction::HistoryDown => {
            if !accepts_input(state) {
                return Vec::new();
            }
            let Some(index) = state.input.history_index else {
                return Vec::new();
            };
            if index + 1 < state.input.history.len() {
                state.input.history_index = Some(index + 1);
                state.input.text = state.input.history[index + 1].clone();
            } else {
                state.input.history_index = None;
                state.input.text.clear();
            }
            vec![TerminalEffect::RequestFrame]
        }
        UserAction::CloseWindow => {
            // Narration only; the session keeps running.
            push_lines(
                state,
                [
                    LineDraft::system("> SYSTEM SHUTDOWN INITIATED..."),
                    LineDraft::error("❌ CONNECTION TERMINATED"),
                    LineDraft::error("💀 NEURAL_NET.EXE has stopped responding"),
                    LineDraft::blank(),
                    LineDraft::system("🔄 Type /restart to reinitialize system"),
                ],
            );
            vec![TerminalEffect::RequestFrame]
        }
        UserAction::ToggleMinimize => {
            if state.chrome == WindowChrome::Minimized {
                state.chrome = WindowChrome::Normal;
                push_lines(
                    state,
                    [
                        LineDraft::system("> RESTORING TERMINAL INTERFACE..."),
                        LineDraft::output("📤 WINDOW RESTORED"),
                    ],
                );
            } else {
                state.chrome = WindowChrome::Minimized;
                push_lines(
                    state,
                    [
                        LineDraft::system("> MINIMIZING TERMINAL INTERFACE..."),
                        LineDraft::output("📦 WINDOW MINIMIZED"),
                    ],
                );
            }
            vec![TerminalEffect::RequestFrame]
        }
        UserAction::ToggleMaximize => {
            if state.chrome == WindowChrome::Maximized {
                state.chrome = WindowChrome::Normal;
                push_lines(
                    state,
                    [
                        LineDraft::system("> RESTORING WINDOW SIZE..."),
                        LineDraft::output("📐 NORMAL VIEW MODE ACTIVATED"),
                    ],
                );
            } else {
                state.chrome = WindowChrome::Maximized;
                push_lines(
                    state,
                    [
                        LineDraft::system("> MAXIMIZING TERMINAL INTERFACE..."),
                        LineDraft::output("🔍 FULL SCREEN MODE ACTIVATED"),
                    ],
                );
            }
            vec![TerminalEffect::RequestFrame]
        }
        UserAction::BackToTerminal => {
            if state.mode != SessionMode::Portfolio {
                return Vec::new();
            }
            state.mode = SessionMode::Terminal;
            debug!("returned to terminal view");
            vec![TerminalEffect::RequestFrame]
        }
        UserAction::ScrollLines(delta) => {
            let max = state.lines.len();
            state.view.scroll_from_bottom = state
                .view
                .scroll_from_bottom
                .saturating_add_signed(delta)
                .min(max);
            vec![TerminalEffect::RequestFrame]
        }
        UserAction::ScrollToBottom => {
            state.view.scroll_from_bottom = 0;
            vec![TerminalEffect::RequestFrame]
        }
        UserAction::ScrollPortfolio { delta, max } => {
            let next = i64::from(state.view.portfolio_scroll) + i64::from(delta);
            state.view.portfolio_scroll = next.clamp(0, i64::from(max)) as u16;
            vec![TerminalEffect::RequestFrame]
        }
        UserAction::FocusNextLink => {
            step_link_focus(state, true);
            vec![TerminalEffect::RequestFrame]
        }
        UserAction::FocusPrevLink => {
            step_link_focus(state, false);
            vec![TerminalEffect::RequestFrame]
        }
        UserAction::ActivateLine(id) => {
            let Some(target) = state.lines.get(id).and_then(|l| l.link_target.clone()) else {
                return Vec::new();
            };
            state.view.focused_link = Some(id);
            vec![TerminalEffect::OpenLink(target), TerminalEffect::RequestFrame]
        }
        UserAction::ActivatePortfolioLink(index) => {
            if state.mode != SessionMode::Portfolio {
                return Vec::new();
            }
            let Some(target) = state.data.link_targets().into_iter().nth(index) else {
                return Vec::new();
            };
            state.view.portfolio_link = Some(index);
            vec![TerminalEffect::OpenLink(target), TerminalEffect::RequestFrame]
        }
        UserAction::OpenFocusedLink => match state.focused_link_target() {
            Some(target) => vec![TerminalEffect::OpenLink(target), TerminalEffect::RequestFrame],
            None => Vec::new(),
        },
        UserAction::CopyFocusedLink => match state.focused_link_target() {
            Some(target) => vec![TerminalEffect::CopyToClipboard(target)],
            None => Vec::new(),
        },
    }
}

fn reduce_timer(state: &mut ShellState, action: TimerAction) -> Vec<TerminalEffect> {
    match action {
        TimerAction::BootLine(index) => {
            let Some(text) = BOOT_SEQUENCE.get(index) else {
                state.boot_complete = true;
                return Vec::new();
            };
            push_line(state, LineDraft::system(*text));
            let mut effects = Vec::new();
            if index + 1 < BOOT_SEQUENCE.len() {
                effects.push(TerminalEffect::Schedule {
                    delay_ms: state.timing.boot_line_ms,
                    group: TimerGroup::Boot,
                    action: TimerAction::BootLine(index + 1),
                });
            } else {
                state.boot_complete = true;
                debug!("boot sequence complete");
            }
            effects.push(TerminalEffect::RequestFrame);
            effects
        }
        TimerAction::RevealStep(id) => advance_reveal(state, id),
        TimerAction::AppendLines(lines) => {
            push_lines(state, lines);
            vec![TerminalEffect::RequestFrame]
        }
        TimerAction::EnterPortfolio => {
            state.mode = SessionMode::Portfolio;
            state.view.portfolio_scroll = 0;
            state.view.portfolio_link = None;
            debug!("entered portfolio view");
            vec![TerminalEffect::RequestFrame]
        }
    }
}

fn accepts_input(state: &ShellState) -> bool {
    !state.is_busy() && state.mode == SessionMode::Terminal
}

fn submit(state: &mut ShellState, raw: String) -> Vec<TerminalEffect> {
    if !accepts_input(state) {
        debug!(busy = state.is_busy(), "submission rejected");
        return Vec::new();
    }
    if raw.trim().is_empty() {
        return Vec::new();
    }

    state.input.history.push(raw.clone());
    state.input.history_index = None;

    push_line(state, LineDraft::new(format!("> {raw}"), LineKind::User));
    let placeholder = push_line(state, LineDraft::blank());

    let mut effects = match classify(&raw) {
        Dispatch::Known(command) => {
            debug!(command = command.as_str(), "dispatching command");
            run_command(state, command, placeholder)
        }
        Dispatch::NotFound(cmd) => {
            debug!(%cmd, "unknown command");
            push_lines(
                state,
                [
                    LineDraft::error(format!("❌ Command not found: {cmd}")),
                    LineDraft::system(COMMAND_HINT),
                ],
            );
            Vec::new()
        }
        Dispatch::InvalidSyntax(raw) => {
            debug!(%raw, "input without command prefix");
            push_lines(
                state,
                [
                    LineDraft::error(format!("❌ Invalid syntax: {raw}")),
                    LineDraft::system(SYNTAX_HINT),
                ],
            );
            Vec::new()
        }
    };
    effects.push(TerminalEffect::RequestFrame);
    effects
}

fn run_command(
    state: &mut ShellState,
    command: Command,
    placeholder: Option<LineId>,
) -> Vec<TerminalEffect> {
    match command {
        Command::Projects => state.section = Section::Projects,
        Command::Skills => state.section = Section::Skills,
        Command::About => state.section = Section::About,
        _ => {}
    }

    match command {
        Command::Clear => {
            state.lines.clear();
            state.view.scroll_from_bottom = 0;
            state.view.focused_link = None;
            push_lines(
                state,
                [
                    LineDraft::system("Terminal cleared."),
                    LineDraft::system("Type /help for available commands."),
                ],
            );
            Vec::new()
        }
        Command::Restart => {
            state.lines.clear();
            state.section = Section::Main;
            state.mode = SessionMode::Terminal;
            state.chrome = WindowChrome::Normal;
            state.view = ViewState::default();
            push_lines(
                state,
                [
                    LineDraft::system("🔄 SYSTEM RESTART INITIATED..."),
                    LineDraft::system("⚡ NEURAL_NET.EXE REBOOTING..."),
                    LineDraft::system("✅ SYSTEM ONLINE"),
                    LineDraft::system("Type /help for available commands."),
                ],
            );
            vec![
                TerminalEffect::CancelTimers(TimerGroup::Stagger),
                TerminalEffect::CancelTimers(TimerGroup::ModeSwitch),
            ]
        }
        _ => {
            let text = CommandRegistry::get(command).reveal.unwrap_or_default();
            match placeholder {
                Some(line) => start_reveal(state, line, text, command),
                None => finish_command(state, command),
            }
        }
    }
}

fn start_reveal(
    state: &mut ShellState,
    line: LineId,
    text: &str,
    then: Command,
) -> Vec<TerminalEffect> {
    let id = RevealId(state.next_reveal_id);
    state.next_reveal_id += 1;
    state.reveal = Some(RevealState {
        id,
        line,
        words: text.split_whitespace().map(str::to_string).collect(),
        shown: 0,
        then,
    });
    // The first word lands immediately; the rest follow on the cadence.
    write_next_word(state);
    vec![TerminalEffect::Schedule {
        delay_ms: state.timing.word_delay_ms,
        group: TimerGroup::Reveal,
        action: TimerAction::RevealStep(id),
    }]
}

fn advance_reveal(state: &mut ShellState, id: RevealId) -> Vec<TerminalEffect> {
    let Some(reveal) = state.reveal.as_ref() else {
        return Vec::new();
    };
    if reveal.id != id {
        debug!(stale = id.0, current = reveal.id.0, "ignoring stale reveal step");
        return Vec::new();
    }

    if !reveal.is_complete() {
        write_next_word(state);
        return vec![
            TerminalEffect::Schedule {
                delay_ms: state.timing.word_delay_ms,
                group: TimerGroup::Reveal,
                action: TimerAction::RevealStep(id),
            },
            TerminalEffect::RequestFrame,
        ];
    }

    let Some(done) = state.reveal.take() else {
        return Vec::new();
    };
    let mut effects = finish_command(state, done.then);
    effects.push(TerminalEffect::RequestFrame);
    effects
}

fn write_next_word(state: &mut ShellState) {
    let Some(reveal) = state.reveal.as_mut() else {
        return;
    };
    let Some(word) = reveal.words.get(reveal.shown).cloned() else {
        return;
    };
    reveal.shown += 1;
    let line = reveal.line;
    if let Err(err) = state.lines.extend_text(line, &word) {
        warn!(%err, "reveal target vanished");
    }
}

/// Runs the part of a command that follows its reveal.
fn finish_command(state: &mut ShellState, command: Command) -> Vec<TerminalEffect> {
    if command == Command::Portfolio {
        return vec![TerminalEffect::Schedule {
            delay_ms: state.timing.portfolio_switch_ms,
            group: TimerGroup::ModeSwitch,
            action: TimerAction::EnterPortfolio,
        }];
    }

    let script = script_for(command, &state.data, &state.timing);
    debug!(
        command = command.as_str(),
        immediate = script.immediate.len(),
        staged = script.staged_line_count(),
        "running command script"
    );
    push_lines(state, script.immediate);
    script
        .staged
        .into_iter()
        .map(|(delay_ms, lines)| TerminalEffect::Schedule {
            delay_ms,
            group: TimerGroup::Stagger,
            action: TimerAction::AppendLines(lines),
        })
        .collect()
}

fn push_line(state: &mut ShellState, draft: LineDraft) -> Option<LineId> {
    let kind = draft.kind;
    match state.lines.append(draft, state.now_ms) {
        Ok(id) => {
            state.view.scroll_from_bottom = 0;
            Some(id)
        }
        Err(err) => {
            warn!(%err, kind = kind.label(), "dropping terminal line");
            None
        }
    }
}

fn push_lines(state: &mut ShellState, drafts: impl IntoIterator<Item = LineDraft>) {
    for draft in drafts {
        push_line(state, draft);
    }
}

/// Moves link focus within the active view, wrapping at either end.
fn step_link_focus(state: &mut ShellState, forward: bool) {
    match state.mode {
        SessionMode::Terminal => {
            let ids: Vec<LineId> = state.link_lines().map(|line| line.id).collect();
            let current = state
                .view
                .focused_link
                .and_then(|id| ids.iter().position(|candidate| *candidate == id));
            state.view.focused_link = cycle(current, ids.len(), forward).map(|pos| ids[pos]);
        }
        SessionMode::Portfolio => {
            let count = state.data.link_targets().len();
            let current = state.view.portfolio_link.filter(|index| *index < count);
            state.view.portfolio_link = cycle(current, count, forward);
        }
    }
}

fn cycle(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(pos), true) => (pos + 1) % len,
        (Some(pos), false) => (pos + len - 1) % len,
    })
}

#[cfg(test)]
mod tests;
