use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Value {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Value {
    pub const ORDERED: [Value; 5] = [
        Value::One,
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
    ];

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Value::One),
            2 => Some(Value::Two),
            3 => Some(Value::Three),
            4 => Some(Value::Four),
            5 => Some(Value::Five),
            _ => None,
        }
    }

    pub const fn number(self) -> u8 {
        self as u8
    }

    /// How many physical copies of this value exist per colour.
    pub const fn copies(self) -> u8 {
        match self {
            Value::One => 3,
            Value::Two | Value::Three | Value::Four => 2,
            Value::Five => 1,
        }
    }

    pub const fn successor(self) -> Option<Value> {
        match self {
            Value::One => Some(Value::Two),
            Value::Two => Some(Value::Three),
            Value::Three => Some(Value::Four),
            Value::Four => Some(Value::Five),
            Value::Five => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
