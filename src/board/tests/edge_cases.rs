//! Edge case tests for special chess positions and moves.

use crate::board::{Board, BoardBuilder, CastleSide, Color, Move, PieceKind, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn notations(moves: &[Move]) -> Vec<String> {
    let mut out: Vec<String> = moves.iter().map(Move::to_string).collect();
    out.sort();
    out
}

fn castles(board: &Board) -> Vec<CastleSide> {
    board
        .legal_moves()
        .iter()
        .filter_map(Move::castle_side)
        .collect()
}

#[test]
fn test_stalemate_position() {
    let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!board.is_checkmate());
    assert!(board.is_stalemate());
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_kingside_castle_without_black_king() {
    let board = Board::from_fen("8/8/8/8/8/8/8/R3K2R w KQ - 0 0");
    let castle = board
        .legal_moves()
        .into_iter()
        .find(|m| m.castle_side() == Some(CastleSide::Kingside))
        .unwrap();
    assert_eq!(
        board.apply(&castle).to_fen(),
        "8/8/8/8/8/8/8/R4RK1 b - - 1 0"
    );
}

#[test]
fn test_castle_rejected_through_attacked_square() {
    // f8 rook covers f1
    let board = Board::from_fen("5r2/8/8/8/8/8/8/R3K2R w KQ - 0 0");
    assert_eq!(castles(&board), vec![CastleSide::Queenside]);

    // g8 rook covers the kingside destination
    let board = Board::from_fen("6r1/8/8/8/8/8/8/R3K2R w KQ - 0 0");
    assert_eq!(castles(&board), vec![CastleSide::Queenside]);

    // d8 rook covers the queenside transit square
    let board = Board::from_fen("3r4/8/8/8/8/8/8/R3K2R w KQ - 0 0");
    assert_eq!(castles(&board), vec![CastleSide::Kingside]);
}

#[test]
fn test_castle_allowed_with_attacked_b_file() {
    let board = Board::from_fen("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 0");
    let mut sides = castles(&board);
    sides.sort_by_key(|side| side.notation());
    assert_eq!(sides, vec![CastleSide::Kingside, CastleSide::Queenside]);
}

#[test]
fn test_no_castling_out_of_check() {
    let board = Board::from_fen("4k3/4r3/8/8/8/8/8/R3K2R w KQ - 0 0");
    assert!(board.is_in_check(Color::White));
    assert!(castles(&board).is_empty());
}

#[test]
fn test_black_castles() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/4K3 b kq - 0 5");
    let mut sides = castles(&board);
    sides.sort_by_key(|side| side.notation());
    assert_eq!(sides, vec![CastleSide::Kingside, CastleSide::Queenside]);

    let queenside = board
        .legal_moves()
        .into_iter()
        .find(|m| m.castle_side() == Some(CastleSide::Queenside))
        .unwrap();
    assert_eq!(
        board.apply(&queenside).to_fen(),
        "2kr3r/8/8/8/8/8/8/4K3 w - - 1 6"
    );
}

#[test]
fn test_en_passant_moves_from_pawn() {
    let board = Board::from_fen("8/8/pP6/8/8/8/8/8 w - a7 0 0");
    let moves = board.legal_moves_from(sq("b6"));
    assert_eq!(notations(&moves), vec!["b6a7", "b6b7"]);

    let ep = moves.iter().find(|m| m.is_en_passant()).unwrap();
    assert_eq!(ep.captured(), Some(sq("a6")));
    assert_eq!(board.apply(ep).to_fen(), "8/P7/8/8/8/8/8/8 b - - 0 0");
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    // Taking c6 would clear the fifth rank between the rook and the king
    let board = Board::from_fen("8/8/8/KPp4r/8/8/8/7k w - c6 0 1");
    let moves = board.legal_moves_from(sq("b5"));
    assert_eq!(notations(&moves), vec!["b5b6"]);
}

#[test]
fn test_en_passant_after_double_push() {
    let board = Board::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    let push = board
        .legal_moves_from(sq("d7"))
        .into_iter()
        .find(|m| m.to_string() == "d7d5")
        .unwrap();
    let board = board.apply(&push);
    assert_eq!(board.en_passant_target(), Some(sq("d6")));

    let ep = board
        .legal_moves_from(sq("e5"))
        .into_iter()
        .find(Move::is_en_passant)
        .unwrap();
    let board = board.apply(&ep);
    assert_eq!(board.piece_at(sq("d5")), None);
    assert_eq!(
        board.piece_at(sq("d6")).map(|p| p.kind),
        Some(PieceKind::Pawn)
    );
}

#[test]
fn test_underpromotions_available() {
    let board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = board.legal_moves_from(sq("a7"));
    assert_eq!(notations(&moves), vec!["a7a8B", "a7a8N", "a7a8Q", "a7a8R"]);

    let knight = moves
        .iter()
        .find(|m| m.promotion() == Some(PieceKind::Knight))
        .unwrap();
    let after = board.apply(knight);
    let promoted = after.piece_at(sq("a8")).unwrap();
    assert_eq!(promoted.kind, PieceKind::Knight);
    assert_eq!(promoted.color, Color::White);
}

#[test]
fn test_black_promotes_on_first_rank() {
    let board = BoardBuilder::new()
        .piece(sq("h8"), Color::White, PieceKind::King)
        .piece(sq("a8"), Color::Black, PieceKind::King)
        .piece(sq("c2"), Color::Black, PieceKind::Pawn)
        .piece(sq("d1"), Color::White, PieceKind::Rook)
        .side_to_move(Color::Black)
        .build();
    let promotions = notations(&board.legal_moves_from(sq("c2")));
    assert_eq!(promotions.len(), 8);
    for to in ["c1", "d1"] {
        for letter in ["B", "N", "Q", "R"] {
            assert!(promotions.contains(&format!("c2{to}{letter}")));
        }
    }
}

#[test]
fn test_pinned_piece_cannot_leave_line() {
    let board = Board::from_fen("4k3/8/8/8/1b6/8/3N4/4K3 w - - 0 1");
    assert!(board.legal_moves_from(sq("d2")).is_empty());
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    let board = Board::from_fen("4k3/8/8/8/8/8/3q4/3rK3 w - - 0 1");
    assert!(board.is_in_check(Color::White));
    assert!(board.is_checkmate());
}

#[test]
fn test_knight_in_corner() {
    let board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, PieceKind::Knight)
        .build();
    assert_eq!(
        notations(&board.legal_moves_from(sq("a1"))),
        vec!["a1b3", "a1c2"]
    );
}
