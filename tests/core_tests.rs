//! Core Module Tests
//!
//! Tests for squares, pieces, board parsing, move application and move notation.

use chess_agent::core::board::{Board, CastlingRights, Color, Piece, PieceType, Square};
use chess_agent::core::error::{BoardError, MoveParseError};
use chess_agent::core::moves::Move;

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

fn mv(s: &str) -> Move {
    Move::from_uci(s).unwrap()
}

fn fen(s: &str) -> (Board, Color) {
    Board::from_fen(s).unwrap()
}

// ============================================================================
// Square Tests
// ============================================================================

#[test]
fn test_square_algebraic() {
    assert_eq!(sq("a1"), Square(0));
    assert_eq!(sq("h8"), Square(63));
    assert_eq!(sq("e4").file(), 4);
    assert_eq!(sq("e4").rank(), 3);
    assert_eq!(Square(28).to_algebraic(), "e4");
    assert_eq!(Square::from_algebraic("i1"), None);
    assert_eq!(Square::from_algebraic("a9"), None);
    assert_eq!(Square::from_algebraic("a"), None);
}

#[test]
fn test_square_offset_stays_on_board() {
    assert_eq!(sq("a1").offset(-1, 0), None);
    assert_eq!(sq("a1").offset(0, -1), None);
    assert_eq!(sq("h8").offset(1, 0), None);
    assert_eq!(sq("h8").offset(0, 1), None);
    assert_eq!(sq("a1").offset(1, 1), Some(sq("b2")));
    assert_eq!(sq("g7").offset(2, 1), None);

    for from in Square::all() {
        for dr in -7..=7 {
            for df in -7..=7 {
                if let Some(to) = from.offset(dr, df) {
                    assert!(to.index() < 64);
                    assert_eq!(to.rank() as i8, from.rank() as i8 + dr);
                    assert_eq!(to.file() as i8, from.file() as i8 + df);
                }
            }
        }
    }
}

// ============================================================================
// Piece and Color Tests
// ============================================================================

#[test]
fn test_piece_chars() {
    let wq = Piece::new(PieceType::Queen, Color::White);
    assert_eq!(wq.to_char(), 'Q');
    assert_eq!(Piece::from_char('Q'), Some(wq));
    assert_eq!(Piece::from_char('n'), Some(Piece::new(PieceType::Knight, Color::Black)));
    assert_eq!(Piece::from_char('x'), None);
}

#[test]
fn test_color_parse() {
    assert_eq!("white".parse::<Color>().unwrap(), Color::White);
    assert_eq!("Black".parse::<Color>().unwrap(), Color::Black);
    assert_eq!(
        "green".parse::<Color>(),
        Err(BoardError::Color("green".to_string()))
    );
    assert_eq!(!Color::White, Color::Black);
    assert_eq!(Color::Black.to_string(), "black");
}

// ============================================================================
// Board Parsing Tests
// ============================================================================

#[test]
fn test_startpos_layout() {
    let board = Board::startpos();
    assert_eq!(board.piece_at(sq("e1")), Some(Piece::new(PieceType::King, Color::White)));
    assert_eq!(board.piece_at(sq("d8")), Some(Piece::new(PieceType::Queen, Color::Black)));
    assert_eq!(board.piece_at(sq("a2")), Some(Piece::new(PieceType::Pawn, Color::White)));
    assert_eq!(board.piece_at(sq("e4")), None);
    assert_eq!(board.castling, CastlingRights::ALL);
    assert_eq!(board.en_passant, None);
    assert_eq!(board.placement(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
}

#[test]
fn test_from_ranks_reverses_rows() {
    let rows = ["4k3", "8", "8", "8", "8", "8", "8", "R3K3"];
    let board = Board::from_ranks(&rows).unwrap();
    // Last row given is white's first rank
    assert_eq!(board.piece_at(sq("a1")), Some(Piece::new(PieceType::Rook, Color::White)));
    assert_eq!(board.piece_at(sq("e8")), Some(Piece::new(PieceType::King, Color::Black)));
    assert_eq!(board.grid()[0][4], Some(Piece::new(PieceType::King, Color::White)));
}

#[test]
fn test_from_ranks_errors() {
    assert_eq!(Board::from_ranks(&["8"; 7]), Err(BoardError::RankCount(7)));

    let short = ["7", "8", "8", "8", "8", "8", "8", "8"];
    assert_eq!(
        Board::from_ranks(&short),
        Err(BoardError::RankWidth { rank: 7, width: 7 })
    );

    let wide = ["8", "8", "8", "8", "8", "8", "8", "8p"];
    assert!(matches!(
        Board::from_ranks(&wide),
        Err(BoardError::RankWidth { rank: 0, .. })
    ));

    let unknown = ["8", "8", "8", "8", "8", "8", "8", "7z"];
    assert_eq!(Board::from_ranks(&unknown), Err(BoardError::UnknownPiece('z')));
}

#[test]
fn test_fen_roundtrip() {
    for s in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1",
        "r3k2r/8/8/8/8/8/8/R3K2R b Kq - 0 1",
        "8/8/8/8/8/8/8/4K2k w - - 0 1",
    ] {
        let (board, side) = fen(s);
        assert_eq!(board.to_fen(side), s);
    }
}

#[test]
fn test_fen_errors() {
    assert!(Board::from_fen("8/8/8 w").is_err());
    assert!(Board::from_fen("8/8/8/8/8/8/8/8 x - - 0 1").is_err());
    assert!(Board::from_fen("8/8/8/8/8/8/8/8 w Z - 0 1").is_err());
    assert!(Board::from_fen("8/8/8/8/8/8/8/8 w - z9 0 1").is_err());
}

#[test]
fn test_king_square() {
    let board = Board::startpos();
    assert_eq!(board.king_square(Color::White), Some(sq("e1")));
    assert_eq!(board.king_square(Color::Black), Some(sq("e8")));
    assert_eq!(Board::empty().king_square(Color::White), None);
}

// ============================================================================
// Move Application Tests
// ============================================================================

#[test]
fn test_apply_relocates_piece() {
    let board = Board::startpos();
    let next = board.apply(mv("g1f3"), Color::White);
    assert_eq!(next.piece_at(sq("g1")), None);
    assert_eq!(next.piece_at(sq("f3")), Some(Piece::new(PieceType::Knight, Color::White)));
    assert_eq!(next.en_passant, None);
}

#[test]
fn test_apply_does_not_mutate_original() {
    let board = Board::startpos();
    let copy = board;
    let _ = board.apply(mv("e2e4"), Color::White);
    assert_eq!(board, copy);
}

#[test]
fn test_apply_capture_replaces_piece() {
    let (board, side) = fen("4k3/8/8/8/8/8/8/R1q4K b - - 0 1");
    let next = board.apply(mv("c1a1"), side);
    assert_eq!(next.piece_at(sq("a1")), Some(Piece::new(PieceType::Queen, Color::Black)));
    assert_eq!(next.piece_at(sq("c1")), None);
}

#[test]
fn test_double_step_sets_passed_square() {
    let board = Board::startpos();
    let next = board.apply(mv("e2e4"), Color::White);
    assert_eq!(next.en_passant, Some(sq("e3")));

    let next = next.apply(mv("d7d5"), Color::Black);
    assert_eq!(next.en_passant, Some(sq("d6")));
}

#[test]
fn test_en_passant_target_lasts_one_ply() {
    let board = Board::startpos().apply(mv("e2e4"), Color::White);
    assert_eq!(board.en_passant, Some(sq("e3")));
    let board = board.apply(mv("g8f6"), Color::Black);
    assert_eq!(board.en_passant, None);

    // A single pawn step clears it too
    let board = Board::startpos()
        .apply(mv("e2e4"), Color::White)
        .apply(mv("e7e6"), Color::Black);
    assert_eq!(board.en_passant, None);
}

#[test]
fn test_en_passant_capture_removes_pawn() {
    let (board, _) = fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    let board = board.apply(mv("d7d5"), Color::Black);
    assert_eq!(board.en_passant, Some(sq("d6")));

    let next = board.apply(mv("e5d6"), Color::White);
    assert_eq!(next.piece_at(sq("d5")), None);
    assert_eq!(next.piece_at(sq("e5")), None);
    assert_eq!(next.piece_at(sq("d6")), Some(Piece::new(PieceType::Pawn, Color::White)));
    assert_eq!(next.en_passant, None);
}

#[test]
fn test_black_en_passant_capture() {
    let (board, _) = fen("4k3/8/8/8/5p2/8/4P3/4K3 w - - 0 1");
    let board = board.apply(mv("e2e4"), Color::White);
    let next = board.apply(mv("f4e3"), Color::Black);
    assert_eq!(next.piece_at(sq("e4")), None);
    assert_eq!(next.piece_at(sq("e3")), Some(Piece::new(PieceType::Pawn, Color::Black)));
}

#[test]
fn test_promotion_places_new_piece() {
    let (board, side) = fen("8/P7/8/8/8/8/8/4K2k w - - 0 1");
    let next = board.apply(mv("a7a8n"), side);
    assert_eq!(next.piece_at(sq("a8")), Some(Piece::new(PieceType::Knight, Color::White)));
    assert_eq!(next.piece_at(sq("a7")), None);

    let (board, side) = fen("4k3/8/8/8/8/8/p7/4K3 b - - 0 1");
    let next = board.apply(mv("a2a1q"), side);
    assert_eq!(next.piece_at(sq("a1")), Some(Piece::new(PieceType::Queen, Color::Black)));
}

#[test]
fn test_castling_moves_rook_and_clears_rights() {
    let (board, _) = fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");

    let next = board.apply(mv("e1g1"), Color::White);
    assert_eq!(next.piece_at(sq("g1")), Some(Piece::new(PieceType::King, Color::White)));
    assert_eq!(next.piece_at(sq("f1")), Some(Piece::new(PieceType::Rook, Color::White)));
    assert_eq!(next.piece_at(sq("h1")), None);
    assert_eq!(next.piece_at(sq("e1")), None);
    assert!(!next.castling.can_castle_kingside(Color::White));
    assert!(!next.castling.can_castle_queenside(Color::White));
    assert!(next.castling.can_castle_kingside(Color::Black));

    let next = board.apply(mv("e8c8"), Color::Black);
    assert_eq!(next.piece_at(sq("c8")), Some(Piece::new(PieceType::King, Color::Black)));
    assert_eq!(next.piece_at(sq("d8")), Some(Piece::new(PieceType::Rook, Color::Black)));
    assert_eq!(next.piece_at(sq("a8")), None);
    assert_eq!(next.piece_at(sq("a1")), Some(Piece::new(PieceType::Rook, Color::White)));
    assert!(!next.castling.can_castle_queenside(Color::Black));
    assert!(next.castling.can_castle_queenside(Color::White));
}

#[test]
fn test_plain_king_and_rook_moves_keep_rights() {
    let (board, _) = fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let next = board.apply(mv("h1h2"), Color::White);
    assert_eq!(next.castling, CastlingRights::ALL);
    let next = board.apply(mv("e1f1"), Color::White);
    assert_eq!(next.castling, CastlingRights::ALL);
}

// ============================================================================
// Move Notation Tests
// ============================================================================

#[test]
fn test_move_notation_roundtrip_all_pairs() {
    for from in Square::all() {
        for to in Square::all() {
            let m = Move::new(from, to);
            let back = Move::from_uci(&m.to_uci()).unwrap();
            assert_eq!(back.from(), from);
            assert_eq!(back.to(), to);
            assert_eq!(back, m);
        }
    }
}

#[test]
fn test_move_promotion_notation() {
    let m = mv("e7e8q");
    assert_eq!(m.promotion_piece(), Some(PieceType::Queen));
    assert_eq!(m.to_uci(), "e7e8q");
    assert_eq!(mv("b2b1N").promotion_piece(), Some(PieceType::Knight));
}

#[test]
fn test_capture_marker_is_stripped() {
    assert_eq!(mv("e5xd6"), Move::new(sq("e5"), sq("d6")));
    assert_eq!(
        mv("e7xd8q"),
        Move::new_promotion(sq("e7"), sq("d8"), PieceType::Queen)
    );
    assert_eq!("g1f3".parse::<Move>().unwrap().to_string(), "g1f3");
}

#[test]
fn test_move_parse_errors() {
    assert!(matches!(Move::from_uci("e2"), Err(MoveParseError::Length(_))));
    assert!(matches!(Move::from_uci("e2e4e5"), Err(MoveParseError::Length(_))));
    assert!(matches!(Move::from_uci("e9e4"), Err(MoveParseError::Square(_))));
    assert_eq!(Move::from_uci("e7e8k"), Err(MoveParseError::Promotion('k')));
}
