// src/bin/replay_dev_cli.rs

use poker_replay::{
    ActionKind, Card, Chips, HandEngine, PlayerSpec, Position,
};

fn main() {
    env_logger::init();

    println!("replay_dev_cli: прогоняем сценарии восстановления руки…");

    scenario_raise_war();
    scenario_all_in_side_pots();
    scenario_heads_up_fold();

    println!();
    println!("[CLI] Завершение работы dev-CLI.");
}

/// Ростер на троих: BTN / SB / BB, стеки по 1000, блайнды 50/100.
fn three_player_engine() -> HandEngine {
    let roster = vec![
        spec(1, "Alice", 1000, Position::Btn),
        spec(2, "Bob", 1000, Position::Sb),
        spec(3, "Carol", 1000, Position::Bb),
    ];
    let mut engine =
        HandEngine::new(roster, Chips::new(50), Chips::new(100)).expect("валидный ростер");
    engine.post_blinds(1, 2).expect("валидные индексы блайндов");
    engine.start_betting_round();
    engine
}

fn spec(id: u64, name: &str, stack: u64, position: Position) -> PlayerSpec {
    PlayerSpec {
        id,
        name: name.to_string(),
        stack: Chips::new(stack),
        position,
    }
}

/// Сценарий 1: война рейзов и минимальный рейз.
fn scenario_raise_war() {
    println!();
    println!("================ RAISE WAR =================");

    let mut engine = three_player_engine();
    report(&engine);

    step(&mut engine, 1, ActionKind::Raise(Chips::new(300)));

    // Недостаточный рейз – движок называет точную границу.
    if let Err(e) = engine.apply_action(2, ActionKind::Raise(Chips::new(400))) {
        println!("[CLI] отклонено, как и ожидалось: {e}");
    }

    step(&mut engine, 2, ActionKind::Raise(Chips::new(500)));
    step(&mut engine, 3, ActionKind::Call);
    step(&mut engine, 1, ActionKind::Call);

    // Префлоп закрыт – открываем флоп, первым ходит SB.
    engine
        .advance_to_flop([card("As"), card("Ks"), card("Qs")])
        .expect("торги префлопа завершены");
    report(&engine);
}

/// Сценарий 2: короткий оллын и side pots.
fn scenario_all_in_side_pots() {
    println!();
    println!("================ ALL-IN / SIDE POTS =================");

    let roster = vec![
        spec(1, "Alice", 1000, Position::Btn),
        spec(2, "Bob", 200, Position::Sb),
        spec(3, "Carol", 1000, Position::Bb),
    ];
    let mut engine =
        HandEngine::new(roster, Chips::new(50), Chips::new(100)).expect("валидный ростер");
    engine.post_blinds(1, 2).expect("валидные индексы блайндов");
    engine.start_betting_round();

    step(&mut engine, 1, ActionKind::Raise(Chips::new(300)));
    step(&mut engine, 2, ActionKind::AllIn);
    step(&mut engine, 3, ActionKind::Call);

    for pot in engine.side_pots() {
        println!(
            "[CLI] pot {} фишек, претенденты: {:?}",
            pot.amount, pot.eligible
        );
    }
    report(&engine);
}

/// Сценарий 3: хедз-ап, BTN фолдит – раздача закончена сразу.
fn scenario_heads_up_fold() {
    println!();
    println!("================ HEADS-UP FOLD =================");

    let roster = vec![
        spec(1, "Alice", 1000, Position::Btn),
        spec(2, "Bob", 1000, Position::Bb),
    ];
    let mut engine =
        HandEngine::new(roster, Chips::new(50), Chips::new(100)).expect("валидный ростер");
    engine.post_blinds(0, 1).expect("валидные индексы блайндов");
    engine.start_betting_round();

    step(&mut engine, 1, ActionKind::Fold);

    println!(
        "[CLI] улица: {:?}, получатель банка: {:?}",
        engine.street(),
        engine.pot_recipient()
    );
}

/// Применить действие и напечатать результат.
fn step(engine: &mut HandEngine, player_id: u64, kind: ActionKind) {
    match engine.apply_action(player_id, kind) {
        Ok(()) => println!("[CLI] id={player_id} {kind:?} – ок, банк {}", engine.pot()),
        Err(e) => println!("[CLI] id={player_id} {kind:?} – ошибка: {e}"),
    }
}

/// Печать снимка состояния (как его увидит UI).
fn report(engine: &HandEngine) {
    let snapshot = engine.snapshot();
    println!(
        "[CLI] улица {:?}, банк {}, ставка {}, ходит {:?}",
        snapshot.street, snapshot.pot, snapshot.current_bet, snapshot.current_actor_id
    );
    for p in &snapshot.players {
        println!(
            "      {} ({}) стек {}, на улице {}, всего {}{}{}",
            p.name,
            p.position,
            p.stack,
            p.street_bet,
            p.total_invested,
            if p.folded { ", fold" } else { "" },
            if p.all_in { ", all-in" } else { "" },
        );
    }
    println!(
        "      история: {}",
        serde_json::to_string(&snapshot.action_history).unwrap_or_default()
    );
}

fn card(s: &str) -> Card {
    s.parse().expect("валидная карта")
}
