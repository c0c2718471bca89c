use chess_tactics::analysis::{analyze_preview, AnalysisParams, Favor, StatKind};
use chess_tactics::board::{Board, Color, Square};
use chess_tactics::{PositionOracle, Session};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_starting_position_end_to_end() {
    let mut session = Session::default();
    assert!(session.hanging(Color::White).is_empty());
    assert!(session.hanging(Color::Black).is_empty());
    assert!(session.pawn_structure(Color::White).doubled.is_empty());
    assert_eq!(session.attacked_count(Color::White), 0);
    assert_eq!(session.developed_count(Color::Black), 0);
    assert_eq!(session.pawn_count(Color::White), 8);
    assert_eq!(session.computations(), 1);
}

#[test]
fn test_reads_are_idempotent() {
    let mut session = Session::default();
    session.play_uci("e2e4").unwrap();
    let first = session.hanging(Color::Black);
    let second = session.hanging(Color::Black);
    assert_eq!(first, second);
    assert_eq!(session.computations(), 1);
}

#[test]
fn test_apply_move_invalidates() {
    let mut session = Session::default();
    session.play_uci("e2e4").unwrap();
    session.play_uci("e7e5").unwrap();
    assert!(session.hanging(Color::Black).is_empty());

    // Qh5 leaves e5 attacked and undefended
    session.play_uci("d1h5").unwrap();
    assert_eq!(session.hanging(Color::Black), vec![sq("e5")]);

    // Nc6 defends it again
    session.play_uci("b8c6").unwrap();
    assert!(session.hanging(Color::Black).is_empty());
    assert_eq!(session.computations(), 3);
}

#[test]
fn test_undo_redo_invalidate() {
    let mut session = Session::from_position_command("position startpos moves e2e4 e7e5 d1h5")
        .expect("valid position command");
    assert_eq!(session.hanging(Color::Black), vec![sq("e5")]);

    session.undo();
    assert!(session.hanging(Color::Black).is_empty());

    session.redo();
    assert_eq!(session.hanging(Color::Black), vec![sq("e5")]);
    assert_eq!(session.computations(), 3);
}

#[test]
fn test_preview_does_not_touch_canonical() {
    let mut session = Session::from_position_command("position startpos moves e2e4 e7e5")
        .expect("valid position command");
    let before = session.hanging(Color::Black);
    let board_before = session.board().clone();

    let preview = session.preview_uci("d1h5").unwrap();
    assert_eq!(preview.hanging(Color::Black), &[sq("e5")]);

    assert_eq!(session.hanging(Color::Black), before);
    assert_eq!(session.board(), &board_before);
    assert_eq!(session.computations(), 1);
}

#[test]
fn test_detached_preview_is_pure() {
    let board = Board::new();
    let mv = board.parse_uci("e2e4").unwrap();
    let next = board.apply_hypothetical(mv);
    let a = analyze_preview(&next);
    let b = analyze_preview(&next);
    assert_eq!(a, b);
    assert_eq!(board, Board::new());
}

#[test]
fn test_skewer_through_session() {
    let board: Board = "8/b7/8/8/r7/8/8/Q7 w - - 0 1".parse().unwrap();
    let mut session = Session::new(board);
    assert_eq!(session.skewered(Color::Black), vec![sq("a4")]);
    assert!(session.skewered(Color::White).is_empty());
}

#[test]
fn test_params_change_invalidates() {
    let mut session = Session::from_position_command(
        "position startpos moves e2e4 e7e5 g1f3 b8c6 f1b5 d7d6",
    )
    .expect("valid position command");
    assert_eq!(session.pinned(Color::Black), vec![sq("c6")]);

    session.set_params(AnalysisParams::piece_level_only());
    assert!(session.pinned(Color::Black).is_empty());
    assert_eq!(session.developed_count(Color::White), 2);
    assert_eq!(session.computations(), 2);
}

#[test]
fn test_scoreboard_after_development() {
    let mut session =
        Session::from_position_command("position startpos moves g1f3").expect("valid command");
    let board = session.scoreboard(Color::White);
    let development = board.row(StatKind::Development).unwrap();
    assert_eq!(development.favor, Favor::Favorable);
    assert_eq!(board.row(StatKind::Pawns).unwrap().favor, Favor::Even);
}

#[test]
fn test_attack_info_and_interesting_squares() {
    let mut session =
        Session::from_position_command("position startpos moves e2e4 d7d5").expect("valid command");
    let info = session.attack_info(sq("e4")).unwrap();
    assert_eq!(info.attackers.to_squares(), vec![sq("d5")]);
    assert!(info.defenders.is_empty());
    assert_eq!(session.interesting_squares(), vec![sq("e4"), sq("d5")]);
    assert!(session.attack_info(sq("e5")).is_none());
}

#[cfg(feature = "serde")]
#[test]
fn test_snapshot_serde_round_trip() {
    use chess_tactics::AnalysisSnapshot;

    let mut session =
        Session::from_position_command("position startpos moves e2e4 e7e5 d1h5").unwrap();
    let snapshot = session.snapshot();
    let json = serde_json::to_string(&*snapshot).unwrap();
    let back: AnalysisSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, &*snapshot);
}
