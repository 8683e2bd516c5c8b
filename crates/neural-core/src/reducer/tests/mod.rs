use std::sync::Arc;

use pretty_assertions::assert_eq;

pub(super) use super::reduce;
pub(super) use super::TerminalEffect;
pub(super) use super::COMMAND_HINT;
pub(super) use super::SYNTAX_HINT;
pub(super) use crate::actions::TerminalAction;
pub(super) use crate::actions::TimerAction;
pub(super) use crate::actions::UserAction;
pub(super) use crate::commands::CommandRegistry;
pub(super) use crate::commands::BOOT_SEQUENCE;
pub(super) use crate::commands::STATUS_REPORT;
pub(super) use crate::config::TimingConfig;
pub(super) use crate::portfolio::PortfolioData;
pub(super) use crate::scheduler::TimerGroup;
pub(super) use crate::session::Session;
pub(super) use crate::state::LineKind;
pub(super) use crate::state::RevealId;
pub(super) use crate::state::Section;
pub(super) use crate::state::SessionMode;
pub(super) use crate::state::ShellState;
pub(super) use crate::state::WindowChrome;

mod progressive_reveal;
mod staggered_output;
mod submit_dispatch;

fn state() -> ShellState {
    ShellState::new(Arc::new(PortfolioData::builtin()), TimingConfig::default())
}

fn session() -> Session {
    Session::new(Arc::new(PortfolioData::builtin()), TimingConfig::default())
}

fn run_user(state: &mut ShellState, action: UserAction) -> Vec<TerminalEffect> {
    reduce(state, TerminalAction::User(action))
}

fn run_timer(state: &mut ShellState, action: TimerAction) -> Vec<TerminalEffect> {
    reduce(state, TerminalAction::Timer(action))
}

fn texts(state: &ShellState) -> Vec<String> {
    state.lines.iter().map(|line| line.text.clone()).collect()
}

fn kinds(state: &ShellState) -> Vec<LineKind> {
    state.lines.iter().map(|line| line.kind).collect()
}

fn scheduled(effects: &[TerminalEffect]) -> Vec<(u64, TimerGroup, TimerAction)> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            TerminalEffect::Schedule {
                delay_ms,
                group,
                action,
            } => Some((*delay_ms, *group, action.clone())),
            _ => None,
        })
        .collect()
}

fn booted_session() -> Session {
    let mut session = session();
    session.activate();
    session.run_until_idle();
    assert_eq!(session.state().lines.len(), BOOT_SEQUENCE.len());
    session
}
