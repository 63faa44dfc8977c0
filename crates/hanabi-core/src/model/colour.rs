use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Colour {
    Blue = 0,
    Green = 1,
    Rainbow = 2,
    Red = 3,
    Yellow = 4,
    White = 5,
}

impl Colour {
    pub const COUNT: usize = 6;

    pub const ALL: [Colour; 6] = [
        Colour::Blue,
        Colour::Green,
        Colour::Rainbow,
        Colour::Red,
        Colour::Yellow,
        Colour::White,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Colour::Blue),
            1 => Some(Colour::Green),
            2 => Some(Colour::Rainbow),
            3 => Some(Colour::Red),
            4 => Some(Colour::Yellow),
            5 => Some(Colour::White),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-letter code used in printed hands ("A" for Rainbow, which
    /// already ceded "R" to Red).
    pub const fn short(self) -> &'static str {
        match self {
            Colour::Blue => "B",
            Colour::Green => "G",
            Colour::Rainbow => "A",
            Colour::Red => "R",
            Colour::Yellow => "Y",
            Colour::White => "W",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Colour::Blue => "Blue",
            Colour::Green => "Green",
            Colour::Rainbow => "Rainbow",
            Colour::Red => "Red",
            Colour::Yellow => "Yellow",
            Colour::White => "White",
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}

#[cfg(test)]
mod tests {
    use super::Colour;

    #[test]
    fn from_index_maps_valid_values() {
        assert_eq!(Colour::from_index(3), Some(Colour::Red));
        assert_eq!(Colour::from_index(6), None);
    }

    #[test]
    fn rainbow_uses_a_as_short_code() {
        assert_eq!(Colour::Rainbow.to_string(), "A");
        assert_eq!(Colour::Red.to_string(), "R");
    }

    #[test]
    fn index_roundtrip() {
        for (i, colour) in Colour::ALL.iter().enumerate() {
            assert_eq!(Colour::from_index(i), Some(*colour));
            assert_eq!(colour.index(), i);
        }
    }
}
