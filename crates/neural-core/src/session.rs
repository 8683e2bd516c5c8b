//! The controller that owns a terminal session: its state, its logical
//! clock and every pending timer.
//!
//! Hosts feed user actions through [`Session::dispatch`] and move time with
//! [`Session::advance_to`]. Scheduling effects are consumed here; only the
//! effects a host has to act on are returned.

use std::sync::Arc;

use tracing::debug;
use tracing::info;

use crate::actions::TerminalAction;
use crate::actions::TimerAction;
use crate::actions::UserAction;
use crate::config::TimingConfig;
use crate::portfolio::PortfolioData;
use crate::reducer::reduce;
use crate::reducer::TerminalEffect;
use crate::scheduler::Scheduler;
use crate::scheduler::TimerGroup;
use crate::state::ShellState;

#[derive(Debug)]
pub struct Session {
    state: ShellState,
    timers: Scheduler<TimerAction>,
    torn_down: bool,
}

impl Session {
    pub fn new(data: Arc<PortfolioData>, timing: TimingConfig) -> Self {
        Self {
            state: ShellState::new(data, timing),
            timers: Scheduler::new(),
            torn_down: false,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    pub fn pending_in(&self, group: TimerGroup) -> usize {
        self.timers.pending_in(group)
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// Starts the boot banner.
    pub fn activate(&mut self) -> Vec<TerminalEffect> {
        self.dispatch(UserAction::Activate)
    }

    /// Submits `raw` as a command line.
    pub fn submit(&mut self, raw: impl Into<String>) -> Vec<TerminalEffect> {
        self.dispatch(UserAction::SubmitCommand(raw.into()))
    }

    pub fn dispatch(&mut self, action: UserAction) -> Vec<TerminalEffect> {
        if self.torn_down {
            return Vec::new();
        }
        self.state.now_ms = self.timers.now_ms();
        let effects = reduce(&mut self.state, TerminalAction::User(action));
        self.apply(effects)
    }

    /// Fires every timer due at or before `now_ms`, in timeline order, then
    /// leaves the clock at `now_ms`.
    pub fn advance_to(&mut self, now_ms: u64) -> Vec<TerminalEffect> {
        let mut host_effects = Vec::new();
        if self.torn_down {
            return host_effects;
        }
        while let Some(fired) = self.timers.pop_due(now_ms) {
            debug!(
                group = fired.group.label(),
                task = fired.task.label(),
                due_ms = fired.due_ms,
                "timer fired"
            );
            self.state.now_ms = fired.due_ms;
            let effects = reduce(&mut self.state, TerminalAction::Timer(fired.task));
            host_effects.extend(self.apply(effects));
        }
        self.timers.set_now(now_ms);
        self.state.now_ms = self.timers.now_ms();
        dedup_frames(host_effects)
    }

    /// Runs the timeline until nothing is pending.
    pub fn run_until_idle(&mut self) -> Vec<TerminalEffect> {
        let mut host_effects = Vec::new();
        while let Some(deadline) = self.timers.next_deadline() {
            host_effects.extend(self.advance_to(deadline));
        }
        dedup_frames(host_effects)
    }

    /// Cancels every outstanding timer and makes the session inert.
    pub fn teardown(&mut self) -> usize {
        let cancelled = self.timers.cancel_all();
        self.state.reveal = None;
        self.torn_down = true;
        info!(cancelled, "session torn down");
        cancelled
    }

    fn apply(&mut self, effects: Vec<TerminalEffect>) -> Vec<TerminalEffect> {
        let mut host_effects = Vec::new();
        for effect in effects {
            match effect {
                TerminalEffect::Schedule {
                    delay_ms,
                    group,
                    action,
                } => {
                    self.timers.schedule(delay_ms, group, action);
                }
                TerminalEffect::CancelTimers(group) => {
                    let cancelled = self.timers.cancel_group(group);
                    debug!(group = group.label(), cancelled, "timers cancelled");
                }
                other => host_effects.push(other),
            }
        }
        host_effects
    }
}

fn dedup_frames(effects: Vec<TerminalEffect>) -> Vec<TerminalEffect> {
    let mut framed = false;
    let mut out = Vec::with_capacity(effects.len());
    for effect in effects {
        if effect == TerminalEffect::RequestFrame {
            if framed {
                continue;
            }
            framed = true;
        }
        out.push(effect);
    }
    out
}
