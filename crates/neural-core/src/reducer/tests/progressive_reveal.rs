use super::*;
use pretty_assertions::assert_eq;

#[test]
fn reveal_grows_the_placeholder_one_word_per_step() {
    let mut state = state();
    let effects = run_user(&mut state, UserAction::SubmitCommand("/status".to_string()));

    let first_step = (50, TimerGroup::Reveal, TimerAction::RevealStep(RevealId(1)));
    assert_eq!(scheduled(&effects), vec![first_step.clone()]);

    let placeholder = state.lines.as_slice()[1].id;
    let text = |state: &ShellState| state.lines.get(placeholder).map(|l| l.text.clone());
    let mut seen = vec![text(&state)];

    let effects = run_timer(&mut state, TimerAction::RevealStep(RevealId(1)));
    assert_eq!(scheduled(&effects), vec![first_step.clone()]);
    seen.push(text(&state));
    run_timer(&mut state, TimerAction::RevealStep(RevealId(1)));
    seen.push(text(&state));

    assert_eq!(
        seen,
        vec![
            Some("RETRIEVING".to_string()),
            Some("RETRIEVING SYSTEM".to_string()),
            Some("RETRIEVING SYSTEM STATUS...".to_string()),
        ]
    );
    assert!(state.is_busy());
    assert_eq!(state.lines.len(), 2);

    run_timer(&mut state, TimerAction::RevealStep(RevealId(1)));
    assert!(!state.is_busy());
    assert_eq!(state.lines.len(), 2 + 1 + STATUS_REPORT.len());
    assert_eq!(text(&state), Some("RETRIEVING SYSTEM STATUS...".to_string()));
}

#[test]
fn reveal_finishes_one_cadence_after_the_last_word() {
    let mut session = session();
    session.submit("/help");

    // "DISPLAYING COMMAND REFERENCE..." has three words.
    session.advance_to(149);
    assert!(session.is_busy());
    session.advance_to(150);
    assert!(!session.is_busy());
    assert_eq!(session.pending_timers(), 0);
}

#[test]
fn stale_reveal_steps_are_ignored() {
    let mut state = state();
    run_user(&mut state, UserAction::SubmitCommand("/hack".to_string()));
    let before = texts(&state);

    let effects = run_timer(&mut state, TimerAction::RevealStep(RevealId(9)));
    assert!(effects.is_empty());
    assert_eq!(texts(&state), before);
    assert!(state.is_busy());
}

#[test]
fn each_reveal_gets_a_fresh_id() {
    let mut session = session();
    session.submit("/status");
    session.run_until_idle();
    session.submit("/status");

    let reveal = session.state().reveal.as_ref().map(|r| r.id);
    assert_eq!(reveal, Some(RevealId(2)));
}

#[test]
fn revealed_words_never_repeat_or_reorder() {
    let mut session = session();
    session.submit("/portfolio");
    let placeholder = session.state().lines.as_slice()[1].id;

    let mut snapshots = Vec::new();
    for t in (0..=200).step_by(50) {
        session.advance_to(t);
        if let Some(line) = session.state().lines.get(placeholder) {
            snapshots.push(line.text.clone());
        }
    }

    let full = "LOADING COMPLETE PORTFOLIO INTERFACE...";
    for snapshot in &snapshots {
        assert!(full.starts_with(snapshot.as_str()), "{snapshot}");
    }
    assert_eq!(snapshots.last().map(String::as_str), Some(full));
}
