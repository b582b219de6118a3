use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Street};

/// Состояние торгов. Банк общий на раздачу, остальное – per-улица.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Всего внесено в банк за раздачу. Никогда не уменьшается.
    pub pot: Chips,
    /// Текущая ставка улицы – максимум street_bet среди не сфолдивших.
    pub current_bet: Chips,
    /// Размер последнего легального рейза на улице.
    /// На свежей улице = BB; это и есть минимум следующего рейза.
    pub last_raise: Chips,
    pub street: Street,
}

impl BettingState {
    pub fn new(big_blind: Chips) -> Self {
        Self {
            pot: Chips::ZERO,
            current_bet: Chips::ZERO,
            last_raise: big_blind,
            street: Street::Preflop,
        }
    }

    /// Сброс per-улица полей при переходе на новую улицу.
    pub fn reset_for_street(&mut self, street: Street, big_blind: Chips) {
        self.current_bet = Chips::ZERO;
        self.last_raise = big_blind;
        self.street = street;
    }

    /// Обновление после bet/raise/оллына-рейза.
    pub fn on_raise(&mut self, new_bet: Chips, raise_size: Chips) {
        self.current_bet = new_bet;
        self.last_raise = raise_size;
    }
}
