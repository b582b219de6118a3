//! Тесты переходов улиц: Preflop → Flop → Turn → River → Complete.
//!
//! Проверяем:
//! - сброс per-улица полей при переходе;
//! - постфлоп-порядок (SB первый), хотя префлоп начинал BTN;
//! - ошибки перехода: не та улица, незакрытые торги;
//! - терминальное состояние после ривера;
//! - сериализацию снимка (внешний слой пишет его в свою запись руки).

use poker_replay::{
    ActionError, ActionKind, Card, Chips, HandEngine, PlayerSpec, Position, Street, StreetError,
};

fn card(s: &str) -> Card {
    s.parse().expect("Валидная строка карты")
}

/// Трое BTN(1)/SB(2)/BB(3), стеки 1000, блайнды 50/100, префлоп закрыт
/// коллами и чеком BB.
fn engine_after_preflop() -> HandEngine {
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
            stack: Chips::new(1000),
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

    engine.apply_action(1, ActionKind::Call).unwrap();
    engine.apply_action(2, ActionKind::Call).unwrap();
    engine.apply_action(3, ActionKind::Check).unwrap();
    assert!(engine.is_round_complete());
    engine
}

/// Все чекают текущую улицу до конца.
fn check_around(engine: &mut HandEngine) {
    while let Some(actor) = engine.current_actor() {
        let id = actor.id;
        engine.apply_action(id, ActionKind::Check).unwrap();
    }
}

/// После флопа первым ходит SB, хотя на префлопе первым был BTN.
#[test]
fn flop_action_starts_with_small_blind() {
    let mut engine = engine_after_preflop();

    engine
        .advance_to_flop([card("As"), card("Ks"), card("Qs")])
        .unwrap();

    assert_eq!(engine.street(), Street::Flop);
    assert_eq!(engine.current_actor().map(|p| p.id), Some(2));
    assert_eq!(engine.board().len(), 3);
}

/// Переход сбрасывает ставки улицы и min-raise, банк не трогает.
#[test]
fn street_reset_clears_per_street_fields() {
    let mut engine = engine_after_preflop();
    let pot_before = engine.pot();

    engine
        .advance_to_flop([card("As"), card("Ks"), card("Qs")])
        .unwrap();

    for p in engine.players() {
        assert_eq!(p.street_bet, Chips::ZERO);
        assert!(!p.has_acted);
    }
    assert_eq!(engine.current_bet(), Chips::ZERO);
    assert_eq!(engine.last_raise(), engine.big_blind());
    assert_eq!(engine.pot(), pot_before, "Банк при переходе не меняется");
}

/// Полная рука чеками до ривера: после закрытия торгов ривера
/// улица становится Complete, действия больше не принимаются.
#[test]
fn hand_completes_after_river() {
    let mut engine = engine_after_preflop();

    engine
        .advance_to_flop([card("As"), card("Ks"), card("Qs")])
        .unwrap();
    check_around(&mut engine);

    engine.advance_to_turn(card("2d")).unwrap();
    check_around(&mut engine);

    engine.advance_to_river(card("7h")).unwrap();
    check_around(&mut engine);

    assert_eq!(engine.street(), Street::Complete);
    assert_eq!(engine.board().len(), 5);
    // Шоудаун на троих – получателя "по фолдам" нет.
    assert_eq!(engine.pot_recipient(), None);

    let err = engine.apply_action(2, ActionKind::Check).unwrap_err();
    assert_eq!(err, ActionError::HandComplete);
}

/// Перескочить улицу нельзя: тёрн с префлопа – ошибка, движок жив.
#[test]
fn cannot_skip_a_street() {
    let mut engine = engine_after_preflop();

    let err = engine.advance_to_turn(card("2d")).unwrap_err();
    assert_eq!(
        err,
        StreetError::WrongStreet {
            from: Street::Preflop,
            to: Street::Turn,
        }
    );

    // Операция провалилась, но движок работоспособен.
    engine
        .advance_to_flop([card("As"), card("Ks"), card("Qs")])
        .unwrap();
    assert_eq!(engine.street(), Street::Flop);
}

/// Пока торги улицы не закрыты, переход запрещён.
#[test]
fn cannot_advance_with_open_betting() {
    let mut engine = engine_after_preflop();
    engine
        .advance_to_flop([card("As"), card("Ks"), card("Qs")])
        .unwrap();

    // SB ставит – торги открыты.
    engine.apply_action(2, ActionKind::Bet(Chips::new(100))).unwrap();

    let err = engine.advance_to_turn(card("2d")).unwrap_err();
    assert_eq!(err, StreetError::BettingUnfinished);
}

/// Хедз-ап: фолд BTN на префлопе завершает раздачу сразу,
/// банк достаётся оставшемуся.
#[test]
fn heads_up_fold_ends_hand_immediately() {
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
            stack: Chips::new(1000),
            position: Position::Bb,
        },
    ];
    let mut engine = HandEngine::new(roster, Chips::new(50), Chips::new(100)).unwrap();
    // Хедз-ап: BTN постит SB.
    engine.post_blinds(0, 1).unwrap();
    engine.start_betting_round();

    assert_eq!(engine.current_actor().map(|p| p.id), Some(1));
    engine.apply_action(1, ActionKind::Fold).unwrap();

    assert_eq!(engine.street(), Street::Complete);
    assert_eq!(engine.pot_recipient(), Some(2));
    assert_eq!(engine.pot(), Chips::new(150));
}

/// Снимок – owned-копия, сериализуется и восстанавливается без потерь.
#[test]
fn snapshot_round_trips_through_json() {
    let mut engine = engine_after_preflop();
    engine
        .advance_to_flop([card("As"), card("Ks"), card("Qs")])
        .unwrap();

    let snapshot = engine.snapshot();
    let json = serde_json::to_string(&snapshot).expect("Снимок сериализуется");
    let restored: poker_replay::Snapshot =
        serde_json::from_str(&json).expect("Снимок восстанавливается");

    assert_eq!(restored, snapshot);
    assert_eq!(restored.action_history.len(), 5); // 2 блайнда + 3 действия
}
