//! Движок торгов одной раздачи: легальные действия, порядок хода,
//! переход улиц, side pots.
//!
//! Высокоуровневый объект: `HandEngine`.
//! Основные операции:
//!   - `post_blinds` / `start_betting_round` – подготовка раздачи
//!   - `legal_actions` / `apply_action` – цикл действий
//!   - `advance_to_flop/turn/river` – переход улиц
//!   - `side_pots` / `snapshot` – итог для UI

pub mod actions;
pub mod betting;
pub mod errors;
pub mod hand_engine;
pub mod legal;
pub mod positions;
pub mod side_pots;
pub mod snapshot;

pub use actions::{ActionKind, ActionLog, ActionRecord};
pub use betting::BettingState;
pub use errors::{ActionError, ConstructionError, StreetError};
pub use hand_engine::HandEngine;
pub use legal::{legal_actions, to_call, LegalAction};
pub use positions::{betting_order, parse_position, validate_positions};
pub use side_pots::{compute_side_pots, SidePot};
pub use snapshot::Snapshot;
