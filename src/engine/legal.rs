//! Калькулятор легальных действий.
//!
//! Единственный источник правды для минимального рейза: минимум равен
//! размеру предыдущего рейза на улице (не "удвоению текущей ставки").
//! Чистые функции без мутаций – два вызова подряд дают один результат.

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Player};
use crate::engine::actions::ActionKind;
use crate::engine::betting::BettingState;
use crate::engine::errors::ActionError;

/// Легальное действие с границами сумм для UI.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LegalAction {
    Fold,
    Check,
    /// `all_in` = true, когда call съедает весь стек: промоция в all-in
    /// явная, UI обязан её показать, а не молча урезать сумму.
    Call { amount: Chips, all_in: bool },
    /// Границы размера ставки.
    Bet { min: Chips, max: Chips },
    /// Границы итоговой ставки (total-to), не добавки.
    Raise { min: Chips, max: Chips },
    AllIn { amount: Chips },
}

/// Сколько фишек не хватает игроку до текущей ставки.
pub fn to_call(player: &Player, betting: &BettingState) -> Chips {
    betting.current_bet.saturating_sub(player.street_bet)
}

/// Набор легальных действий для игрока при данном состоянии торгов.
pub fn legal_actions(player: &Player, betting: &BettingState, big_blind: Chips) -> Vec<LegalAction> {
    let mut actions = Vec::new();

    if !player.can_act() {
        return actions;
    }

    let need = to_call(player, betting);

    // Fold имеет смысл только против ставки.
    if !need.is_zero() && !player.stack.is_zero() {
        actions.push(LegalAction::Fold);
    }

    if need.is_zero() {
        actions.push(LegalAction::Check);
    }

    if !need.is_zero() {
        let amount = need.min(player.stack);
        actions.push(LegalAction::Call {
            amount,
            all_in: amount == player.stack,
        });
    }

    if betting.current_bet.is_zero() && player.stack >= big_blind {
        actions.push(LegalAction::Bet {
            min: big_blind,
            max: player.stack,
        });
    }

    if !betting.current_bet.is_zero() && player.stack.saturating_sub(need) >= betting.last_raise {
        actions.push(LegalAction::Raise {
            min: betting.current_bet + betting.last_raise,
            max: player.street_bet + player.stack,
        });
    }

    if !player.stack.is_zero() {
        actions.push(LegalAction::AllIn {
            amount: player.stack,
        });
    }

    actions
}

/// Проверка конкретного действия против тех же правил, что выдаёт
/// `legal_actions`. Ошибки несут вычисленную границу для UI.
pub fn check_action(
    player: &Player,
    betting: &BettingState,
    big_blind: Chips,
    kind: ActionKind,
) -> Result<(), ActionError> {
    let need = to_call(player, betting);

    match kind {
        ActionKind::Fold => {
            if need.is_zero() {
                Err(ActionError::CannotFold)
            } else {
                Ok(())
            }
        }

        ActionKind::Check => {
            if need.is_zero() {
                Ok(())
            } else {
                Err(ActionError::CannotCheck { to_call: need })
            }
        }

        ActionKind::Call => {
            if need.is_zero() {
                Err(ActionError::CannotCall)
            } else {
                Ok(())
            }
        }

        ActionKind::Bet(amount) => {
            if !betting.current_bet.is_zero() {
                return Err(ActionError::CannotBet {
                    current_bet: betting.current_bet,
                });
            }
            if amount < big_blind {
                return Err(ActionError::BetTooSmall { min: big_blind });
            }
            if amount > player.stack {
                return Err(ActionError::BetTooLarge { max: player.stack });
            }
            Ok(())
        }

        ActionKind::Raise(total) => {
            if betting.current_bet.is_zero() {
                return Err(ActionError::CannotRaise);
            }
            if player.stack.saturating_sub(need) < betting.last_raise {
                return Err(ActionError::RaiseNotCovered);
            }
            let min = betting.current_bet + betting.last_raise;
            let max = player.street_bet + player.stack;
            if total < min {
                return Err(ActionError::RaiseTooSmall { min });
            }
            if total > max {
                return Err(ActionError::RaiseTooLarge { max });
            }
            Ok(())
        }

        ActionKind::AllIn => {
            if player.stack.is_zero() {
                Err(ActionError::EmptyStack)
            } else {
                Ok(())
            }
        }

        ActionKind::SmallBlind | ActionKind::BigBlind => Err(ActionError::NotAPlayerAction),
    }
}
