//! Доменная модель раздачи: фишки, карты, позиции, улицы, игроки.

pub mod card;
pub mod chips;
pub mod hand;
pub mod player;
pub mod position;

/// Идентификатор игрока в рамках редактируемой руки.
pub type PlayerId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use hand::*;
pub use player::*;
pub use position::*;
