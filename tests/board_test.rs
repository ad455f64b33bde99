//! Board behavior over the public API.

use tictactoe::{Board, MatchState, MoveError, Player, Position, Square};

#[test]
fn test_fresh_board_is_empty() {
    let board = Board::new();
    for position in Position::ALL {
        assert_eq!(board.get(position), Square::Empty);
    }
    assert!(!board.has_win());
    assert!(!board.has_tie());
    assert_eq!(board.state(), MatchState::InProgress);
}

#[test]
fn test_fresh_board_renders_position_numbers() {
    let board = Board::new();
    let expected = [
        " 1 | 2 | 3",
        "---|---|---",
        " 4 | 5 | 6",
        "---|---|---",
        " 7 | 8 | 9",
    ]
    .join("\n");
    assert_eq!(board.to_string(), expected);
}

#[test]
fn test_render_shows_marks_on_occupied_cells() {
    let mut board = Board::new();
    board.try_move(Position::TopLeft, Player::X).unwrap();
    board.try_move(Position::Center, Player::O).unwrap();

    let expected = [
        " X | 2 | 3",
        "---|---|---",
        " 4 | O | 6",
        "---|---|---",
        " 7 | 8 | 9",
    ]
    .join("\n");
    assert_eq!(board.to_string(), expected);
}

#[test]
fn test_move_onto_occupied_cell_is_rejected() {
    let mut board = Board::new();
    board.try_move(Position::Center, Player::X).unwrap();

    let err = board.try_move(Position::Center, Player::O).unwrap_err();
    assert_eq!(
        err,
        MoveError::Occupied {
            position: Position::Center
        }
    );
    // The failed attempt left the first mark in place.
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
}

#[test]
fn test_every_line_of_three_wins() {
    let lines = [
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ],
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
        [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ],
        [
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ],
        [
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ],
        [Position::TopLeft, Position::Center, Position::BottomRight],
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ];

    for line in lines {
        let mut board = Board::new();
        for position in line {
            // Two of three never count as a win.
            assert!(!board.has_win());
            board.try_move(position, Player::O).unwrap();
        }
        assert!(board.has_win());
        assert_eq!(board.state(), MatchState::Won(Player::O));
    }
}

#[test]
fn test_full_board_without_line_is_a_tie() {
    // X O X / X O O / O X X
    let marks = [
        (Position::TopLeft, Player::X),
        (Position::TopCenter, Player::O),
        (Position::TopRight, Player::X),
        (Position::MiddleLeft, Player::X),
        (Position::Center, Player::O),
        (Position::MiddleRight, Player::O),
        (Position::BottomLeft, Player::O),
        (Position::BottomCenter, Player::X),
        (Position::BottomRight, Player::X),
    ];

    let mut board = Board::new();
    for (position, player) in marks {
        board.try_move(position, player).unwrap();
    }

    assert!(!board.has_win());
    assert!(board.has_tie());
    assert_eq!(board.state(), MatchState::Tied);
}

#[test]
fn test_win_on_the_last_cell_beats_the_tie_check() {
    // O O X / X O X / O X _ with the bottom-right completing the right
    // column for X while filling the board.
    let marks = [
        (Position::TopLeft, Player::O),
        (Position::TopCenter, Player::O),
        (Position::TopRight, Player::X),
        (Position::MiddleLeft, Player::X),
        (Position::Center, Player::O),
        (Position::MiddleRight, Player::X),
        (Position::BottomLeft, Player::O),
        (Position::BottomCenter, Player::X),
    ];

    let mut board = Board::new();
    for (position, player) in marks {
        board.try_move(position, player).unwrap();
    }
    assert_eq!(board.state(), MatchState::InProgress);

    board.try_move(Position::BottomRight, Player::X).unwrap();
    assert!(board.has_win());
    assert_eq!(board.state(), MatchState::Won(Player::X));
}

#[test]
fn test_reset_starts_a_fresh_match() {
    let mut board = Board::new();
    board.try_move(Position::TopLeft, Player::X).unwrap();
    board.try_move(Position::TopCenter, Player::X).unwrap();
    board.try_move(Position::TopRight, Player::X).unwrap();
    assert!(board.has_win());

    board.reset();

    assert!(!board.has_win());
    assert_eq!(board, Board::new());
    // The cell freed by the reset accepts a move again.
    board.try_move(Position::TopLeft, Player::O).unwrap();
}
