//! Порядок хода и валидация расстановки позиций.
//!
//! Резолвер – чистая функция: множество занятых позиций + улица →
//! упорядоченная последовательность хода. Никаких кругов по креслам,
//! порядок задан константными таблицами.

use crate::domain::{Position, Street, POSTFLOP_ORDER, PREFLOP_ORDER};
use crate::engine::errors::ConstructionError;

/// Порядок хода на улице, суженный до занятых позиций.
///
/// Префлоп: UTG → … → BTN → SB → BB. Постфлоп: SB → … → BTN.
/// Частичные столы (рука восстановлена с середины, часть позиций уже
/// сфолдила до начала записи) просто дают более короткий список.
pub fn betting_order(occupied: &[Position], street: Street) -> Vec<Position> {
    let base: &[Position; 9] = match street {
        Street::Preflop => &PREFLOP_ORDER,
        _ => &POSTFLOP_ORDER,
    };

    base.iter()
        .copied()
        .filter(|pos| occupied.contains(pos))
        .collect()
}

/// Разобрать метку позиции из строки визарда ("UTG+1", "LJ", …).
pub fn parse_position(label: &str) -> Result<Position, ConstructionError> {
    label
        .parse()
        .map_err(|_| ConstructionError::UnknownPosition(label.to_string()))
}

/// Валидатор расстановки позиций. Запускается до конструирования движка,
/// но `HandEngine::new` вызывает его ещё раз сам.
///
/// Допустимы частичные конфигурации без BTN или без BB ("фолды до
/// записанных игроков"). Недопустимы: меньше двух позиций, дубликаты,
/// BTN при полном отсутствии блайндов.
pub fn validate_positions(occupied: &[Position]) -> Result<(), ConstructionError> {
    if occupied.len() < 2 {
        return Err(ConstructionError::TooFewPlayers(occupied.len()));
    }

    for (i, pos) in occupied.iter().enumerate() {
        if occupied[..i].contains(pos) {
            return Err(ConstructionError::DuplicatePosition(*pos));
        }
    }

    let has_btn = occupied.contains(&Position::Btn);
    let has_blind = occupied.iter().any(|p| p.is_blind());
    if has_btn && !has_blind {
        return Err(ConstructionError::ButtonWithoutBlinds);
    }

    Ok(())
}
