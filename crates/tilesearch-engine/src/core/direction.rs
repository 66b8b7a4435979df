use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseDirectionError;

/// A move direction.
///
/// [`Direction::ALL`] lists the directions in expansion order, which search code relies on
/// for deterministic tie-breaking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const LEN: usize = 4;
    pub const ALL: [Self; Self::LEN] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Single-character path code: `U`, `D`, `L` or `R`.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }

    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'U' | 'u' => Some(Self::Up),
            'D' | 'd' => Some(Self::Down),
            'L' | 'l' => Some(Self::Left),
            'R' | 'r' => Some(Self::Right),
            _ => None,
        }
    }
}

/// Accepts either the single-character code or the full name, case-insensitively.
impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(direction) = Self::from_code(c)
        {
            return Ok(direction);
        }
        Self::ALL
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDirectionError {
                input: s.to_owned(),
            })
    }
}

/// Renders a path as its direction codes, e.g. `"ULLR"`.
#[must_use]
pub fn path_codes(path: &[Direction]) -> String {
    path.iter().map(|d| d.code()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_order() {
        assert_eq!(
            Direction::ALL,
            [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right
            ]
        );
    }

    #[test]
    fn test_code_roundtrip() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_code(d.code()), Some(d));
        }
        assert_eq!(Direction::from_code('x'), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("U".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("r".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!("down".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("Left".parse::<Direction>().unwrap(), Direction::Left);
        let err = "north".parse::<Direction>().unwrap_err();
        assert!(err.to_string().contains("north"));
    }

    #[test]
    fn test_path_codes() {
        let path = [Direction::Up, Direction::Left, Direction::Left, Direction::Right];
        assert_eq!(path_codes(&path), "ULLR");
        assert_eq!(path_codes(&[]), "");
    }
}
