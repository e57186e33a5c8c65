//! Score submission flow tests: qualify gate, name editor, ledger write.

mod collaborators;

use std::fs;

use collaborators::{RecordingFrontend, ScriptedInput, confirm, right, up};
use coinop_core::score::{self, submit_score};

#[test]
fn test_qualifying_score_is_recorded_under_the_typed_name() {
    let tmp = tempfile::tempdir().expect("Failed to create temp dir");
    let path = tmp.path().join("highscore.txt");
    fs::write(&path, "BBB-900\nAAA-500").unwrap();

    // Type CCC: two steps up from the initial A, three up from each blank.
    let mut input = ScriptedInput::new([
        up(),
        up(),
        right(),
        up(),
        up(),
        up(),
        right(),
        up(),
        up(),
        up(),
        right(),
        confirm(),
    ]);
    let mut frontend = RecordingFrontend::new();

    let recorded = submit_score(&path, 700, &mut input, &mut frontend).unwrap();

    assert!(recorded);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "BBB-900\nCCC-700\nAAA-500"
    );
    // One editor frame drawn per input frame consumed.
    assert_eq!(frontend.name_entries.len(), 12);
    assert_eq!(frontend.name_entries[0].slots, ['A', ' ', ' ', '#']);
    assert_eq!(frontend.name_entries[0].cursor, 0);
    assert_eq!(frontend.name_entries[11].cursor, 3);
    assert_eq!(frontend.name_entries[0].score, 700);
}

#[test]
fn test_score_below_a_full_board_never_reaches_the_editor() {
    let tmp = tempfile::tempdir().expect("Failed to create temp dir");
    let path = tmp.path().join("highscore.txt");
    let board: Vec<String> = (0..10).map(|i| format!("AAA-{}", 1000 - i * 100)).collect();
    fs::write(&path, board.join("\n")).unwrap();

    // Empty script: polling input at all would fail the test.
    let mut input = ScriptedInput::new(std::iter::empty());
    let mut frontend = RecordingFrontend::new();

    let recorded = submit_score(&path, 50, &mut input, &mut frontend).unwrap();

    assert!(!recorded);
    assert!(frontend.name_entries.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), board.join("\n"));
}

#[test]
fn test_tie_with_last_place_on_full_board_does_not_qualify() {
    let tmp = tempfile::tempdir().expect("Failed to create temp dir");
    let path = tmp.path().join("highscore.txt");
    let board: Vec<String> = (0..10).map(|i| format!("AAA-{}", 1000 - i * 100)).collect();
    fs::write(&path, board.join("\n")).unwrap();

    let mut input = ScriptedInput::new(std::iter::empty());
    let mut frontend = RecordingFrontend::new();

    // Ties rank below the incumbent, so matching 10th place is not enough.
    let recorded = submit_score(&path, 100, &mut input, &mut frontend).unwrap();

    assert!(!recorded);
    assert_eq!(fs::read_to_string(&path).unwrap(), board.join("\n"));
}

#[test]
fn test_default_name_commits_as_a_padded_with_blanks() {
    let tmp = tempfile::tempdir().expect("Failed to create temp dir");
    let path = tmp.path().join("highscore.txt");

    // Walk straight to the marker and confirm without editing.
    let mut input = ScriptedInput::new([right(), right(), right(), confirm()]);
    let mut frontend = RecordingFrontend::new();

    let recorded = submit_score(&path, 300, &mut input, &mut frontend).unwrap();

    assert!(recorded);
    assert_eq!(fs::read_to_string(&path).unwrap(), "A  -300");
    let board = score::load(&path);
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].name, "A  ");
    assert_eq!(board[0].score, 300);
}

#[test]
fn test_confirm_away_from_the_marker_keeps_editing() {
    let tmp = tempfile::tempdir().expect("Failed to create temp dir");
    let path = tmp.path().join("highscore.txt");

    // The first confirm lands on slot 0 and must be ignored.
    let mut input = ScriptedInput::new([confirm(), right(), right(), right(), confirm()]);
    let mut frontend = RecordingFrontend::new();

    let recorded = submit_score(&path, 42, &mut input, &mut frontend).unwrap();

    assert!(recorded);
    assert_eq!(frontend.name_entries.len(), 5);
    assert_eq!(fs::read_to_string(&path).unwrap(), "A  -42");
}

#[test]
fn test_board_is_truncated_back_to_capacity_after_a_new_entry() {
    let tmp = tempfile::tempdir().expect("Failed to create temp dir");
    let path = tmp.path().join("highscore.txt");
    let board: Vec<String> = (0..10).map(|i| format!("AAA-{}", 1000 - i * 100)).collect();
    fs::write(&path, board.join("\n")).unwrap();

    let mut input = ScriptedInput::new([right(), right(), right(), confirm()]);
    let mut frontend = RecordingFrontend::new();

    let recorded = submit_score(&path, 950, &mut input, &mut frontend).unwrap();

    assert!(recorded);
    let reloaded = score::load(&path);
    assert_eq!(reloaded.len(), score::MAX_ENTRIES);
    assert_eq!(reloaded[0].score, 1000);
    assert_eq!(reloaded[1].score, 950);
    assert_eq!(reloaded[1].name, "A  ");
    // The old 10th place fell off the board.
    assert_eq!(reloaded[9].score, 200);
}
