//! Compass headings and the rotation tables between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Direction a rover is facing.
///
/// Serialized as its single-letter form (`"N"`, `"E"`, `"S"`, `"W"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Heading {
    /// All headings in clockwise order starting at north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Heading after a 90 degree counter-clockwise spin.
    pub fn left(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Heading after a 90 degree clockwise spin.
    pub fn right(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Unit `(dx, dy)` step for one forward move.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }

    /// Parse a heading letter, ignoring case.
    pub fn from_letter(letter: char) -> Option<Heading> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Heading::North),
            'E' => Some(Heading::East),
            'S' => Some(Heading::South),
            'W' => Some(Heading::West),
            _ => None,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Error returned when a token is not one of `N`, `E`, `S`, `W`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown heading '{0}' (expected one of N, E, S, W)")]
pub struct UnknownHeading(pub String);

impl FromStr for Heading {
    type Err = UnknownHeading;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                Heading::from_letter(letter).ok_or_else(|| UnknownHeading(token.to_string()))
            }
            _ => Err(UnknownHeading(token.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_heading() -> impl Strategy<Value = Heading> {
        prop::sample::select(Heading::ALL.to_vec())
    }

    #[test]
    fn left_table_matches_compass() {
        assert_eq!(Heading::North.left(), Heading::West);
        assert_eq!(Heading::West.left(), Heading::South);
        assert_eq!(Heading::South.left(), Heading::East);
        assert_eq!(Heading::East.left(), Heading::North);
    }

    #[test]
    fn right_table_matches_compass() {
        assert_eq!(Heading::North.right(), Heading::East);
        assert_eq!(Heading::East.right(), Heading::South);
        assert_eq!(Heading::South.right(), Heading::West);
        assert_eq!(Heading::West.right(), Heading::North);
    }

    #[test]
    fn parses_letters_case_insensitively() {
        assert_eq!("n".parse::<Heading>(), Ok(Heading::North));
        assert_eq!("W".parse::<Heading>(), Ok(Heading::West));
        assert_eq!(
            "X".parse::<Heading>(),
            Err(UnknownHeading("X".to_string()))
        );
        assert!("NE".parse::<Heading>().is_err());
        assert!("".parse::<Heading>().is_err());
    }

    #[test]
    fn serializes_as_letter() {
        let json = serde_json::to_string(&Heading::South).expect("serialize");
        assert_eq!(json, "\"S\"");
    }

    proptest! {
        #[test]
        fn left_undoes_right(h in arb_heading()) {
            prop_assert_eq!(h.right().left(), h);
            prop_assert_eq!(h.left().right(), h);
        }

        #[test]
        fn four_lefts_return_to_start(h in arb_heading()) {
            prop_assert_eq!(h.left().left().left().left(), h);
            prop_assert_ne!(h.left(), h);
            prop_assert_ne!(h.left().left(), h);
        }

        #[test]
        fn offset_is_a_unit_step(h in arb_heading()) {
            let (dx, dy) = h.offset();
            prop_assert_eq!(dx.abs() + dy.abs(), 1);
            let (rx, ry) = h.right().right().offset();
            prop_assert_eq!((rx, ry), (-dx, -dy));
        }
    }
}
