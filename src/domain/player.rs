use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::position::Position;
use crate::domain::PlayerId;

/// Запись игрока в ростере, как её отдаёт визард восстановления руки.
///
/// Валидация ростера происходит при конструировании движка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSpec {
    pub id: PlayerId,
    pub name: String,
    /// Стек на начало раздачи.
    pub stack: Chips,
    pub position: Position,
}

/// Состояние игрока внутри раздачи. Владеет им только `HandEngine`:
/// создаётся один раз из ростера, мутируется применением действий,
/// наружу отдаётся только копиями (snapshot).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Оставшийся стек.
    pub stack: Chips,
    /// Ставка на текущей улице.
    pub street_bet: Chips,
    /// Всего внесено в банк за раздачу (для side pots).
    pub total_invested: Chips,
    pub folded: bool,
    pub all_in: bool,
    /// Ходил ли игрок после последнего рейза на этой улице.
    /// Сбрасывается у остальных при каждом bet/raise.
    pub has_acted: bool,
    pub position: Position,
}

impl Player {
    pub fn from_spec(spec: PlayerSpec) -> Self {
        Self {
            id: spec.id,
            name: spec.name,
            stack: spec.stack,
            street_bet: Chips::ZERO,
            total_invested: Chips::ZERO,
            folded: false,
            all_in: false,
            has_acted: false,
            position: spec.position,
        }
    }

    /// Участвует ли игрок ещё в банке (не сфолдил).
    pub fn is_in_hand(&self) -> bool {
        !self.folded
    }

    /// Может ли игрок ещё делать ставки (не сфолдил и не в оллыне).
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in
    }
}
