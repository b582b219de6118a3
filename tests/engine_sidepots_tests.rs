//! Тесты side pots.
//!
//! Проверяем:
//! - формирование потов по уровням вкладов (2, 3 оллына);
//! - фишки сфолдивших остаются в банке, но без права на выигрыш;
//! - сумма потов всегда равна общему банку;
//! - сквозной сценарий через настоящий движок.

use poker_replay::domain::{Chips, Player, PlayerId, PlayerSpec, Position};
use poker_replay::engine::side_pots::{compute_side_pots, SidePot};
use poker_replay::{ActionKind, HandEngine};

/// Игрок с заданным суммарным вкладом и флагом фолда.
fn contributor(id: PlayerId, position: Position, invested: u64, folded: bool) -> Player {
    let mut p = Player::from_spec(PlayerSpec {
        id,
        name: format!("P{id}"),
        stack: Chips::ZERO,
        position,
    });
    p.total_invested = Chips::new(invested);
    p.folded = folded;
    p
}

/// (amount, отсортированные id) для удобных сравнений.
fn pot_info(pot: &SidePot) -> (u64, Vec<PlayerId>) {
    let mut ids = pot.eligible.clone();
    ids.sort_unstable();
    (pot.amount.0, ids)
}

fn total(pots: &[SidePot]) -> u64 {
    pots.iter().map(|p| p.amount.0).sum()
}

/// Два равных вклада – один общий пот.
#[test]
fn equal_contributions_make_single_pot() {
    let players = [
        contributor(1, Position::Sb, 100, false),
        contributor(2, Position::Bb, 100, false),
    ];

    let pots = compute_side_pots(&players);

    assert_eq!(pots.len(), 1, "Должен быть один общий пот");
    assert_eq!(pot_info(&pots[0]), (200, vec![1, 2]));
}

/// Три оллына 100/200/300 – три уровня.
#[test]
fn three_all_ins_make_three_tiers() {
    let players = [
        contributor(1, Position::Btn, 100, false),
        contributor(2, Position::Sb, 200, false),
        contributor(3, Position::Bb, 300, false),
    ];

    let pots = compute_side_pots(&players);

    assert_eq!(pots.len(), 3, "Ожидаем три слоя side pots");
    assert_eq!(pot_info(&pots[0]), (300, vec![1, 2, 3]));
    assert_eq!(pot_info(&pots[1]), (200, vec![2, 3]));
    assert_eq!(pot_info(&pots[2]), (100, vec![3]));
    assert_eq!(total(&pots), 600);
}

/// Фишки сфолдившего входят в прирост потов, но сам он не претендует
/// ни на один уровень.
#[test]
fn folded_chips_stay_in_pot_without_eligibility() {
    let players = [
        contributor(1, Position::Btn, 300, false),
        contributor(2, Position::Sb, 50, true),
        contributor(3, Position::Bb, 300, false),
    ];

    let pots = compute_side_pots(&players);

    assert_eq!(pots.len(), 2);
    assert_eq!(pot_info(&pots[0]), (150, vec![1, 3]));
    assert_eq!(pot_info(&pots[1]), (500, vec![1, 3]));
    assert_eq!(total(&pots), 650, "Сумма потов равна общему банку");
}

/// Верхний уровень, где все вкладчики сфолдили, всё равно выдаётся –
/// иначе фишки "испаряются" и банк не сходится.
#[test]
fn top_tier_of_folded_player_is_emitted() {
    let players = [
        contributor(1, Position::Btn, 300, false),
        contributor(2, Position::Sb, 500, true),
        contributor(3, Position::Bb, 300, false),
    ];

    let pots = compute_side_pots(&players);

    assert_eq!(pots.len(), 2);
    assert_eq!(pot_info(&pots[0]), (900, vec![1, 3]));
    assert_eq!(pot_info(&pots[1]), (200, vec![]));
    assert_eq!(total(&pots), 1100);
}

/// Никто не вкладывался – нет и потов.
#[test]
fn no_contributions_no_pots() {
    let players = [
        contributor(1, Position::Sb, 0, false),
        contributor(2, Position::Bb, 0, false),
    ];

    assert!(compute_side_pots(&players).is_empty());
}

/// Сквозной сценарий: BTN(1000) рейзит до 300, SB(200) в оллыне,
/// BB(1000) коллирует. Главный пот 600 на троих, side pot 200 на двоих.
#[test]
fn engine_all_in_scenario_partitions_pot() {
    let roster = vec![
        PlayerSpec {
            id: 1,
            name: "Alice".to_string(),
            stack: Chips::new(1000),
            position: Position::Btn,
        },
        PlayerSpec {
            id: 2,
            name: "Bob".to_string(),
            stack: Chips::new(200),
            position: Position::Sb,
        },
        PlayerSpec {
            id: 3,
            name: "Carol".to_string(),
            stack: Chips::new(1000),
            position: Position::Bb,
        },
    ];
    let mut engine = HandEngine::new(roster, Chips::new(50), Chips::new(100)).unwrap();
    engine.post_blinds(1, 2).unwrap();
    engine.start_betting_round();

    engine.apply_action(1, ActionKind::Raise(Chips::new(300))).unwrap();
    engine.apply_action(2, ActionKind::AllIn).unwrap();
    engine.apply_action(3, ActionKind::Call).unwrap();

    let pots = engine.side_pots();
    assert_eq!(pots.len(), 2);
    assert_eq!(pot_info(&pots[0]), (600, vec![1, 2, 3]));
    assert_eq!(pot_info(&pots[1]), (200, vec![1, 3]));
    assert_eq!(total(&pots), engine.pot().0, "Сумма потов равна банку");
}
