//! Снимок состояния раздачи для UI и сохранения.
//!
//! Всегда owned-копии: никаких ссылок внутрь живого состояния движка.
//! Сериализацией занимается внешний слой – здесь только serde-derive.

use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, Player, PlayerId, Street};
use crate::engine::actions::ActionRecord;
use crate::engine::hand_engine::HandEngine;
use crate::engine::side_pots::SidePot;

/// Полный снимок раздачи на текущий момент.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub pot: Chips,
    pub street: Street,
    pub community_cards: Vec<Card>,
    pub action_history: Vec<ActionRecord>,
    pub current_bet: Chips,
    pub current_actor_id: Option<PlayerId>,
    pub side_pots: Vec<SidePot>,
}

impl HandEngine {
    /// Снять снимок текущего состояния.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            players: self.players().to_vec(),
            pot: self.pot(),
            street: self.street(),
            community_cards: self.board().to_vec(),
            action_history: self.history().to_vec(),
            current_bet: self.current_bet(),
            current_actor_id: self.current_actor().map(|p| p.id),
            side_pots: self.side_pots(),
        }
    }
}
