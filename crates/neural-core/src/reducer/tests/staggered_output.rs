use super::*;
use pretty_assertions::assert_eq;

fn position(session: &Session, needle: &str) -> Option<usize> {
    session
        .state()
        .lines
        .iter()
        .position(|line| line.text.starts_with(needle))
}

#[test]
fn input_reopens_while_project_blocks_still_trickle_in() {
    let mut session = session();
    session.submit("/projects");
    session.advance_to(100);

    assert!(!session.is_busy());
    assert_eq!(session.pending_in(TimerGroup::Stagger), 2);

    session.submit("/status");
    session.run_until_idle();

    let status = position(&session, "🎯 MISSION").unwrap();
    let second = position(&session, "📂 [PROJECT-2]").unwrap();
    let third = position(&session, "📂 [PROJECT-3]").unwrap();
    assert!(status < second);
    assert!(second < third);
    assert_eq!(session.state().lines.last().map(|l| l.text.as_str()), Some(""));
}

#[test]
fn project_blocks_land_on_their_stagger_slots() {
    let mut session = session();
    session.submit("/projects");

    session.advance_to(499);
    assert!(position(&session, "📂 [PROJECT-1]").is_some());
    assert!(position(&session, "📂 [PROJECT-2]").is_none());
    session.advance_to(500);
    assert!(position(&session, "📂 [PROJECT-2]").is_some());
    session.advance_to(900);
    assert!(position(&session, "📂 [PROJECT-3]").is_some());
    assert_eq!(session.pending_timers(), 0);
}

#[test]
fn restart_cancels_pending_stagger_and_mode_switch() {
    let mut session = session();
    session.submit("/projects");
    session.advance_to(100);
    session.submit("/restart");

    assert_eq!(session.pending_in(TimerGroup::Stagger), 0);
    let after_restart: Vec<String> = texts(session.state());
    session.run_until_idle();
    assert_eq!(texts(session.state()), after_restart);
    assert_eq!(
        after_restart,
        vec![
            "🔄 SYSTEM RESTART INITIATED...".to_string(),
            "⚡ NEURAL_NET.EXE REBOOTING...".to_string(),
            "✅ SYSTEM ONLINE".to_string(),
            "Type /help for available commands.".to_string(),
        ]
    );
}

#[test]
fn restart_cancels_a_pending_portfolio_switch() {
    let mut session = session();
    session.submit("/portfolio");
    session.advance_to(200);
    assert_eq!(session.pending_in(TimerGroup::ModeSwitch), 1);

    session.submit("/restart");
    session.run_until_idle();
    assert_eq!(session.state().mode, SessionMode::Terminal);
}

#[test]
fn clear_leaves_pending_stagger_running() {
    let mut session = session();
    session.submit("/projects");
    session.advance_to(100);
    session.submit("/clear");

    assert_eq!(session.state().lines.len(), 2);
    session.run_until_idle();
    assert!(position(&session, "📂 [PROJECT-3]").is_some());
    assert!(position(&session, "📂 [PROJECT-1]").is_none());
}

#[test]
fn skill_listing_runs_to_the_tools_spacer() {
    let mut session = session();
    session.submit("/skills");
    session.run_until_idle();

    let tools = position(&session, "🔹 [TOOLS]").unwrap();
    let rows: Vec<String> = session
        .state()
        .lines
        .iter()
        .skip(tools + 1)
        .map(|line| line.text.clone())
        .collect();
    assert_eq!(
        rows,
        vec![
            "   Git             [█████████░] 90%".to_string(),
            "   n8n Automation  [█████████░] 90%".to_string(),
            "   AI Tools        [█████████░] 95%".to_string(),
            String::new(),
        ]
    );
}
