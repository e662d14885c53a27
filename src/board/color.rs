use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// The two sides of the game. White moves up the board (towards row 0) and
/// is the maximizing side; Black moves down the board and minimizes.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn maximize_score(&self) -> bool {
        match self {
            Color::White => true,
            Color::Black => false,
        }
    }

    /// Maps the searcher's maximizing flag back onto a side.
    pub fn from_maximizing(maximizing: bool) -> Self {
        if maximizing {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Row delta of a single pawn step for this side.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Color::White)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            Color::Black => "black",
            Color::White => "white",
        };
        write!(f, "{}", color_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Color {
    type Err = ParseError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            "random" => Ok(Color::random()),
            _ => Err("invalid color; options are: black, white, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random() {
        assert!(Color::ALL.contains(&Color::random()));
    }

    #[test]
    fn test_parse_white() {
        assert_eq!(Color::White, Color::from_str("white").unwrap());
    }

    #[test]
    fn test_parse_black() {
        assert_eq!(Color::Black, Color::from_str("black").unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Color::from_str("green").is_err());
    }

    #[test]
    fn test_maximizing_round_trip() {
        for color in Color::ALL {
            assert_eq!(color, Color::from_maximizing(color.maximize_score()));
        }
    }

    #[test]
    fn test_forward_directions_oppose() {
        assert_eq!(Color::White.forward(), -Color::Black.forward());
    }
}
