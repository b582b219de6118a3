use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Каноническая позиция за 9-max столом.
///
/// Это именно метка места в раздаче, а не номер кресла: пользователь,
/// восстанавливая руку, расставляет игроков по этим меткам.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    Utg,
    UtgPlus1,
    Mp,
    Lj,
    Hj,
    Co,
    Btn,
    Sb,
    Bb,
}

/// Порядок хода на префлопе: первым ходит UTG (сразу после BB).
pub const PREFLOP_ORDER: [Position; 9] = [
    Position::Utg,
    Position::UtgPlus1,
    Position::Mp,
    Position::Lj,
    Position::Hj,
    Position::Co,
    Position::Btn,
    Position::Sb,
    Position::Bb,
];

/// Порядок хода на постфлопе: первым ходит SB (или следующий занятый).
pub const POSTFLOP_ORDER: [Position; 9] = [
    Position::Sb,
    Position::Bb,
    Position::Utg,
    Position::UtgPlus1,
    Position::Mp,
    Position::Lj,
    Position::Hj,
    Position::Co,
    Position::Btn,
];

impl Position {
    /// Является ли позиция блайндом.
    pub fn is_blind(&self) -> bool {
        matches!(self, Position::Sb | Position::Bb)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Utg => "UTG",
            Position::UtgPlus1 => "UTG+1",
            Position::Mp => "MP",
            Position::Lj => "LJ",
            Position::Hj => "HJ",
            Position::Co => "CO",
            Position::Btn => "BTN",
            Position::Sb => "SB",
            Position::Bb => "BB",
        };
        write!(f, "{s}")
    }
}

/// Парсинг метки позиции из строк визарда ("UTG", "UTG+1", "BTN", …).
impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UTG" => Ok(Position::Utg),
            "UTG+1" | "UTG1" => Ok(Position::UtgPlus1),
            "MP" => Ok(Position::Mp),
            "LJ" => Ok(Position::Lj),
            "HJ" => Ok(Position::Hj),
            "CO" => Ok(Position::Co),
            "BTN" => Ok(Position::Btn),
            "SB" => Ok(Position::Sb),
            "BB" => Ok(Position::Bb),
            _ => Err(format!("Unknown position: {s}")),
        }
    }
}
