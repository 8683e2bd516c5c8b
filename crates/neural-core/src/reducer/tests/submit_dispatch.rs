use super::*;
use pretty_assertions::assert_eq;

#[test]
fn submit_echoes_raw_input_then_placeholder() {
    let mut state = state();
    run_user(&mut state, UserAction::SubmitCommand("  /Status ".to_string()));

    assert_eq!(state.lines.len(), 2);
    assert_eq!(state.lines.as_slice()[0].text, ">   /Status ");
    assert_eq!(state.lines.as_slice()[0].kind, LineKind::User);
    assert_eq!(state.lines.as_slice()[1].kind, LineKind::Output);
    assert_eq!(state.lines.as_slice()[1].text, "RETRIEVING");
    assert!(state.is_busy());
}

#[test]
fn casing_and_whitespace_do_not_change_the_output_script() {
    for spec in CommandRegistry::list() {
        let mut canonical = session();
        canonical.submit(spec.name);
        canonical.run_until_idle();

        let mut shouted = session();
        shouted.submit(format!("\t {}  ", spec.name.to_uppercase()));
        shouted.run_until_idle();

        let tail = |s: &Session| -> Vec<String> {
            s.state().lines.iter().skip(1).map(|l| l.text.clone()).collect()
        };
        assert_eq!(tail(&canonical), tail(&shouted), "{}", spec.name);
        assert_eq!(canonical.state().mode, shouted.state().mode, "{}", spec.name);
    }
}

#[test]
fn unknown_prefixed_command_reports_not_found() {
    let mut state = state();
    let effects = run_user(
        &mut state,
        UserAction::SubmitCommand("/doesnotexist".to_string()),
    );

    assert_eq!(
        texts(&state),
        vec![
            "> /doesnotexist".to_string(),
            String::new(),
            "❌ Command not found: /doesnotexist".to_string(),
            COMMAND_HINT.to_string(),
        ]
    );
    assert_eq!(
        kinds(&state)[2..].to_vec(),
        vec![LineKind::Error, LineKind::System]
    );
    assert!(!state.is_busy());
    assert_eq!(effects, vec![TerminalEffect::RequestFrame]);
}

#[test]
fn input_without_prefix_is_invalid_syntax() {
    let mut state = state();
    run_user(&mut state, UserAction::SubmitCommand("hello".to_string()));

    let lines = texts(&state);
    assert_eq!(lines[2], "❌ Invalid syntax: hello");
    assert_eq!(lines[3], SYNTAX_HINT);
    assert_eq!(
        kinds(&state)[2..].to_vec(),
        vec![LineKind::Error, LineKind::System]
    );
}

#[test]
fn whitespace_only_submission_is_ignored() {
    let mut state = state();
    let effects = run_user(&mut state, UserAction::SubmitCommand("   ".to_string()));

    assert!(effects.is_empty());
    assert!(state.lines.is_empty());
    assert!(state.input.history.is_empty());
}

#[test]
fn submit_while_busy_changes_nothing() {
    let mut state = state();
    run_user(&mut state, UserAction::SubmitCommand("/projects".to_string()));
    assert!(state.is_busy());

    let before = texts(&state);
    let history = state.input.history.clone();
    let section = state.section;

    let effects = run_user(&mut state, UserAction::SubmitCommand("/help".to_string()));
    assert!(effects.is_empty());
    assert_eq!(texts(&state), before);
    assert_eq!(state.input.history, history);
    assert_eq!(state.section, section);
}

#[test]
fn typing_is_locked_while_busy() {
    let mut state = state();
    run_user(&mut state, UserAction::SubmitCommand("/help".to_string()));

    assert!(run_user(&mut state, UserAction::InputChar('x')).is_empty());
    assert!(run_user(&mut state, UserAction::InputPaste("abc".to_string())).is_empty());
    assert_eq!(state.input.text, "");
}

#[test]
fn typed_input_is_submitted_and_recorded() {
    let mut state = state();
    for c in "/help".chars() {
        run_user(&mut state, UserAction::InputChar(c));
    }
    run_user(&mut state, UserAction::Submit);

    assert_eq!(state.input.text, "");
    assert_eq!(state.input.history, vec!["/help".to_string()]);
    assert_eq!(state.lines.as_slice()[0].text, "> /help");
}

#[test]
fn history_walks_back_and_forward() {
    let mut state = state();
    state.input.history = vec!["/about".to_string(), "/skills".to_string()];

    run_user(&mut state, UserAction::HistoryUp);
    assert_eq!(state.input.text, "/skills");
    run_user(&mut state, UserAction::HistoryUp);
    assert_eq!(state.input.text, "/about");
    run_user(&mut state, UserAction::HistoryUp);
    assert_eq!(state.input.text, "/about");

    run_user(&mut state, UserAction::HistoryDown);
    assert_eq!(state.input.text, "/skills");
    run_user(&mut state, UserAction::HistoryDown);
    assert_eq!(state.input.text, "");
    assert_eq!(state.input.history_index, None);
}

#[test]
fn pasted_newlines_become_spaces() {
    let mut state = state();
    run_user(&mut state, UserAction::InputPaste("/hel\np".to_string()));
    assert_eq!(state.input.text, "/hel p");

    run_user(&mut state, UserAction::InputBackspace);
    assert_eq!(state.input.text, "/hel ");
    run_user(&mut state, UserAction::ClearInput);
    assert_eq!(state.input.text, "");
}

#[test]
fn listing_commands_select_their_section() {
    let mut state = state();
    run_user(&mut state, UserAction::SubmitCommand("/skills".to_string()));
    assert_eq!(state.section, Section::Skills);
}
