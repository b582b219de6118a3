//! poker-replay – движок торгов для восстановления сыгранной руки.
//!
//! Пользователь заново вводит руку, которую сыграл где-то ещё; движок
//! на каждом шаге говорит, какие действия легальны, применяет выбранное,
//! ведёт очередь хода и улицы, а на шоудауне раскладывает банк на
//! side pots. Ни раздачи карт, ни оценки силы рук, ни сети здесь нет –
//! всё это живёт снаружи.

pub mod domain;
pub mod engine;

pub use domain::{Card, Chips, Player, PlayerId, PlayerSpec, Position, Street};
pub use engine::{
    ActionError, ActionKind, ActionRecord, ConstructionError, HandEngine, LegalAction, SidePot,
    Snapshot, StreetError,
};
