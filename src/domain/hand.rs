use serde::{Deserialize, Serialize};

/// Улица раздачи.
///
/// `Complete` – терминальное состояние: ставки на ривере закончились
/// или в руке остался один не сфолдивший игрок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Complete,
}
