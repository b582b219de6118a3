use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId, Street};

/// Тип действия. Закрытый union – матчится исчерпывающе,
/// никакой диспетчеризации по строкам.
///
/// `SmallBlind`/`BigBlind` существуют только для истории раздачи:
/// калькулятор легальных действий их никогда не выдаёт, а
/// `apply_action` отвергает их как не-действия игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    /// Bet на улице без текущей ставки. Значение – размер ставки.
    Bet(Chips),
    /// Raise. Значение – итоговая ставка на улице (total-to), не добавка.
    Raise(Chips),
    /// Поставить весь оставшийся стек.
    AllIn,
    SmallBlind,
    BigBlind,
}

/// Одна запись в истории раздачи. Append-only, после создания не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionRecord {
    pub player_id: PlayerId,
    pub kind: ActionKind,
    /// Сколько фишек реально ушло в банк этим действием.
    pub amount: Chips,
    pub street: Street,
    /// Порядковый номер в раздаче, с нуля.
    pub sequence: u32,
}

/// Каноническая история раздачи: только добавление, никаких правок.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionLog {
    records: Vec<ActionRecord>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, player_id: PlayerId, kind: ActionKind, amount: Chips, street: Street) {
        let sequence = self.records.len() as u32;
        self.records.push(ActionRecord {
            player_id,
            kind,
            amount,
            street,
            sequence,
        });
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
