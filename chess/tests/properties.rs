use asciichess_core::{
    decode, encode, render, Board, ColorScheme, Piece, PieceColor, PieceKind, SquareColor,
};
use proptest::prelude::*;

fn piece_strategy() -> impl Strategy<Value = Option<Piece>> {
    let kind = prop::sample::select(PieceKind::ALL.to_vec());
    let color = prop_oneof![Just(PieceColor::White), Just(PieceColor::Black)];
    prop_oneof![
        3 => Just(None),
        1 => (kind, color).prop_map(|(kind, color)| Some(Piece::new(kind, color))),
    ]
}

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(piece_strategy(), 64).prop_map(|cells| {
        let mut board = Board::new();
        for (index, piece) in cells.into_iter().enumerate() {
            board
                .set_piece(index % 8, index / 8, piece)
                .expect("index within 8x8");
        }
        board
    })
}

proptest! {
    #[test]
    fn encode_then_decode_preserves_occupancy(board in board_strategy()) {
        let placement = encode(&board);
        let mut decoded = Board::new();
        decode(&placement, &mut decoded).unwrap();
        prop_assert_eq!(&decoded, &board);
        prop_assert_eq!(encode(&decoded), placement);
    }

    #[test]
    fn encoded_groups_cover_eight_files(board in board_strategy()) {
        let placement = encode(&board);
        let groups: Vec<&str> = placement.split('/').collect();
        prop_assert_eq!(groups.len(), 8);
        for group in groups {
            let width: u32 = group
                .chars()
                .map(|c| c.to_digit(10).unwrap_or(1))
                .sum();
            prop_assert_eq!(width, 8);
        }
    }

    #[test]
    fn square_color_alternates(file in 0usize..8, rank in 0usize..8) {
        prop_assert_eq!(SquareColor::at(file, rank), SquareColor::at(file + 2, rank));
        prop_assert_ne!(SquareColor::at(file, rank), SquareColor::at(file + 1, rank));
        prop_assert_ne!(SquareColor::at(file, rank), SquareColor::at(file, rank + 1));
    }

    #[test]
    fn rendering_is_deterministic(board in board_strategy(), black in any::<bool>()) {
        let scheme = ColorScheme::grayscale();
        let player = if black { PieceColor::Black } else { PieceColor::White };
        let before = board.clone();
        prop_assert_eq!(render(&board, &scheme, player), render(&board, &scheme, player));
        prop_assert_eq!(&board, &before);
    }
}

#[test]
fn starting_position_round_trips() {
    let placement = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
    let board = Board::from_fen(placement).unwrap();
    assert_eq!(encode(&board), placement);
}
