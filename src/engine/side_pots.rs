//! Разбиение банка на side pots по уровням вкладов.

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Player, PlayerId};

/// Side pot: часть банка и игроки, которые могут его выиграть.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    /// Не сфолдившие игроки, внёсшие хотя бы до уровня этого пота.
    pub eligible: Vec<PlayerId>,
}

/// Посчитать side pots из суммарных вкладов игроков.
///
/// Идём по уровням вкладов снизу вверх; на каждом уровне прирост пота =
/// (уровень − предыдущий уровень) × число игроков с вкладом ≥ уровня.
/// Фишки сфолдивших остаются в приросте, но сами они не входят ни в
/// один eligible-набор. Сумма всех потов всегда равна общему банку,
/// поэтому уровень, где все вкладчики сфолдили, всё равно выдаётся
/// (с пустым eligible).
pub fn compute_side_pots(players: &[Player]) -> Vec<SidePot> {
    // Все, кто вообще что-то внёс: и активные, и сфолдившие.
    let mut entries: Vec<(&Player, Chips)> = players
        .iter()
        .filter(|p| !p.total_invested.is_zero())
        .map(|p| (p, p.total_invested))
        .collect();

    if entries.is_empty() {
        return Vec::new();
    }

    // Сортируем по размеру вклада (возрастание).
    entries.sort_by_key(|(_, c)| c.0);

    let mut pots = Vec::new();
    let mut prev_level = Chips::ZERO;

    for i in 0..entries.len() {
        let level = entries[i].1;
        if level == prev_level {
            continue;
        }
        let diff = level - prev_level;

        // Все с вкладом >= уровня участвуют в приросте этого пота.
        let contributors = &entries[i..];
        let amount = Chips(diff.0 * contributors.len() as u64);

        let eligible: Vec<PlayerId> = contributors
            .iter()
            .filter(|(p, _)| !p.folded)
            .map(|(p, _)| p.id)
            .collect();

        pots.push(SidePot { amount, eligible });
        prev_level = level;
    }

    pots
}
