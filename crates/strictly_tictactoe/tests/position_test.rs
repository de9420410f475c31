//! Tests for reading squares typed by players.

use strictly_tictactoe::Position;

#[test]
fn test_index_round_trip() {
    for (i, pos) in Position::ALL.into_iter().enumerate() {
        assert_eq!(pos.to_index(), i);
        assert_eq!(Position::from_index(i), Some(pos));
    }
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_numbers_and_names() {
    let cases = [
        (" 4 ", Some(Position::Center)),
        ("0", Some(Position::TopLeft)),
        ("center", Some(Position::Center)),
        ("top left", Some(Position::TopLeft)),
        ("BOTTOM_RIGHT", Some(Position::BottomRight)),
        ("middle-right", Some(Position::MiddleRight)),
        ("middle", None),
        ("", None),
        ("12", None),
        ("-1", None),
    ];
    for (input, expected) in cases {
        assert_eq!(Position::from_label_or_number(input), expected, "{:?}", input);
    }
}

#[test]
fn test_display_uses_label() {
    assert_eq!(Position::BottomCenter.to_string(), "Bottom-center");
}
