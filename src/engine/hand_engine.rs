//! Машина состояний одной раздачи.
//!
//! Жизненный цикл: `new` → `post_blinds` → `start_betting_round` →
//! (`current_actor` / `legal_actions` / `apply_action`)* →
//! `advance_to_flop/turn/river` → … → `Street::Complete`.
//!
//! Движок владеет игроками единолично: создаёт их из ростера один раз,
//! мутирует на месте, наружу отдаёт копии через `snapshot`.

use log::debug;

use crate::domain::{Card, Chips, Player, PlayerId, PlayerSpec, Position, Street};
use crate::engine::actions::{ActionKind, ActionLog, ActionRecord};
use crate::engine::betting::BettingState;
use crate::engine::errors::{ActionError, ConstructionError, StreetError};
use crate::engine::legal::{self, LegalAction};
use crate::engine::positions::{betting_order, validate_positions};
use crate::engine::side_pots::{compute_side_pots, SidePot};

/// Движок одной восстанавливаемой раздачи.
#[derive(Debug)]
pub struct HandEngine {
    players: Vec<Player>,
    small_blind: Chips,
    big_blind: Chips,
    betting: BettingState,
    board: Vec<Card>,
    log: ActionLog,
    /// Индексы игроков в порядке хода на текущей улице
    /// (только те, кто может действовать).
    order: Vec<usize>,
    /// Указатель текущего актёра внутри `order`.
    turn: Option<usize>,
    round_complete: bool,
}

impl HandEngine {
    /// Создать движок из провалидированного ростера и блайндов.
    ///
    /// Ошибки конструирования фатальны – с таким входом раздачу
    /// начинать нельзя.
    pub fn new(
        roster: Vec<PlayerSpec>,
        small_blind: Chips,
        big_blind: Chips,
    ) -> Result<Self, ConstructionError> {
        if roster.len() < 2 {
            return Err(ConstructionError::TooFewPlayers(roster.len()));
        }
        if roster.len() > 10 {
            return Err(ConstructionError::TooManyPlayers(roster.len()));
        }
        if small_blind.is_zero() || big_blind.is_zero() {
            return Err(ConstructionError::NonPositiveBlinds);
        }
        if big_blind <= small_blind {
            return Err(ConstructionError::BigBlindNotGreater {
                small: small_blind,
                big: big_blind,
            });
        }

        for (i, spec) in roster.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(ConstructionError::MissingName(spec.id));
            }
            if roster[..i].iter().any(|s| s.id == spec.id) {
                return Err(ConstructionError::DuplicatePlayer(spec.id));
            }
        }

        let positions: Vec<Position> = roster.iter().map(|s| s.position).collect();
        validate_positions(&positions)?;

        let players: Vec<Player> = roster.into_iter().map(Player::from_spec).collect();

        Ok(Self {
            players,
            small_blind,
            big_blind,
            betting: BettingState::new(big_blind),
            board: Vec::new(),
            log: ActionLog::new(),
            order: Vec::new(),
            turn: None,
            round_complete: false,
        })
    }

    /// Постинг блайндов. Короткий стек клампится и уходит в all-in,
    /// но целевая ставка остаётся номинальным BB.
    pub fn post_blinds(
        &mut self,
        sb_index: usize,
        bb_index: usize,
    ) -> Result<(), ConstructionError> {
        if sb_index >= self.players.len() {
            return Err(ConstructionError::InvalidBlindIndex(sb_index));
        }
        if bb_index >= self.players.len() {
            return Err(ConstructionError::InvalidBlindIndex(bb_index));
        }
        if sb_index == bb_index {
            return Err(ConstructionError::BlindsOnSamePlayer);
        }

        let sb = self.small_blind;
        let bb = self.big_blind;
        self.commit_chips(sb_index, sb.min(self.players[sb_index].stack));
        let sb_paid = self.players[sb_index].street_bet;
        self.commit_chips(bb_index, bb.min(self.players[bb_index].stack));
        let bb_paid = self.players[bb_index].street_bet;

        self.betting.current_bet = bb;
        self.betting.last_raise = bb;

        let sb_id = self.players[sb_index].id;
        let bb_id = self.players[bb_index].id;
        self.log
            .push(sb_id, ActionKind::SmallBlind, sb_paid, Street::Preflop);
        self.log
            .push(bb_id, ActionKind::BigBlind, bb_paid, Street::Preflop);

        debug!("blinds posted: SB id={sb_id} {sb_paid}, BB id={bb_id} {bb_paid}");
        Ok(())
    }

    /// Запустить раунд торгов на текущей улице: собрать порядок хода
    /// через резолвер и поставить указатель на первого, кто может
    /// действовать. Если таких ≤1 – раунд завершён сразу.
    pub fn start_betting_round(&mut self) {
        let street = self.betting.street;
        let occupied: Vec<Position> = self
            .players
            .iter()
            .filter(|p| p.can_act())
            .map(|p| p.position)
            .collect();

        let ordered = betting_order(&occupied, street);
        self.order = ordered
            .iter()
            .filter_map(|pos| self.players.iter().position(|p| p.position == *pos))
            .collect();

        if self.order.len() <= 1 {
            self.order.clear();
            self.turn = None;
            self.round_complete = true;
            if street == Street::River {
                self.betting.street = Street::Complete;
            }
        } else {
            self.turn = Some(0);
            self.round_complete = false;
        }

        debug!(
            "betting round started: street={street:?}, actors={}",
            self.order.len()
        );
    }

    /// Текущий актёр (если раунд идёт). Сфолдившие и оллыны не выбираются.
    pub fn current_actor(&self) -> Option<&Player> {
        self.turn.map(|t| &self.players[self.order[t]])
    }

    /// Легальные действия текущего актёра. Чистый запрос, без мутаций:
    /// два вызова подряд дают идентичный результат.
    pub fn legal_actions(&self) -> Vec<LegalAction> {
        match self.current_actor() {
            Some(player) => legal::legal_actions(player, &self.betting, self.big_blind),
            None => Vec::new(),
        }
    }

    /// Применить действие игрока.
    ///
    /// Ошибки хода/легальности восстановимы: UI перечитывает
    /// `legal_actions` и спрашивает заново.
    pub fn apply_action(&mut self, player_id: PlayerId, kind: ActionKind) -> Result<(), ActionError> {
        if self.betting.street == Street::Complete {
            return Err(ActionError::HandComplete);
        }
        let turn = self.turn.ok_or(ActionError::NoActor)?;
        let idx = self.order[turn];

        if self.players[idx].id != player_id {
            return Err(ActionError::NotPlayersTurn {
                expected: Some(self.players[idx].id),
            });
        }

        legal::check_action(&self.players[idx], &self.betting, self.big_blind, kind)?;

        let need = legal::to_call(&self.players[idx], &self.betting);
        let current_bet_before = self.betting.current_bet;

        let paid = match kind {
            ActionKind::Fold => {
                self.players[idx].folded = true;
                Chips::ZERO
            }

            ActionKind::Check => Chips::ZERO,

            ActionKind::Call => {
                // Кламп до стека: короткий call – это явный all-in,
                // калькулятор уже сообщил об этом в LegalAction::Call.
                let pay = need.min(self.players[idx].stack);
                self.commit_chips(idx, pay);
                pay
            }

            ActionKind::Bet(amount) => {
                self.commit_chips(idx, amount);
                self.betting.on_raise(amount, amount);
                self.reopen_betting(idx);
                amount
            }

            ActionKind::Raise(total) => {
                let pay = total - self.players[idx].street_bet;
                self.commit_chips(idx, pay);
                self.betting.on_raise(total, total - current_bet_before);
                self.reopen_betting(idx);
                pay
            }

            ActionKind::AllIn => {
                let pay = self.players[idx].stack;
                self.commit_chips(idx, pay);
                let new_total = self.players[idx].street_bet;
                if new_total > current_bet_before {
                    // Оллын выше текущей ставки – фактически рейз.
                    self.betting
                        .on_raise(new_total, new_total - current_bet_before);
                    self.reopen_betting(idx);
                }
                // Короткий оллын-колл торги не переоткрывает.
                pay
            }

            ActionKind::SmallBlind | ActionKind::BigBlind => {
                return Err(ActionError::NotAPlayerAction)
            }
        };

        self.players[idx].has_acted = true;
        let street = self.betting.street;
        self.log.push(player_id, kind, paid, street);

        debug!(
            "action applied: id={player_id} {kind:?} paid={paid}, pot={}",
            self.betting.pot
        );

        self.advance_turn(turn);
        Ok(())
    }

    /// Переход Preflop → Flop. Три карты флопа приходят из UI.
    pub fn advance_to_flop(&mut self, cards: [Card; 3]) -> Result<(), StreetError> {
        self.advance_street(Street::Flop, &cards)
    }

    /// Переход Flop → Turn.
    pub fn advance_to_turn(&mut self, card: Card) -> Result<(), StreetError> {
        self.advance_street(Street::Turn, &[card])
    }

    /// Переход Turn → River.
    pub fn advance_to_river(&mut self, card: Card) -> Result<(), StreetError> {
        self.advance_street(Street::River, &[card])
    }

    /// Side pots по текущим вкладам. Осмысленно на шоудауне или когда
    /// кто-то в оллыне, но считать можно в любой момент.
    pub fn side_pots(&self) -> Vec<SidePot> {
        compute_side_pots(&self.players)
    }

    /// Получатель банка, когда раздача закончилась фолдами
    /// (остался один не сфолдивший). `None`, пока рука идёт или
    /// когда нужен шоудаун.
    pub fn pot_recipient(&self) -> Option<PlayerId> {
        if self.betting.street != Street::Complete {
            return None;
        }
        let mut in_hand = self.players.iter().filter(|p| p.is_in_hand());
        match (in_hand.next(), in_hand.next()) {
            (Some(p), None) => Some(p.id),
            _ => None,
        }
    }

    // ---- Read-only доступ для UI/тестов. ----

    pub fn street(&self) -> Street {
        self.betting.street
    }

    pub fn pot(&self) -> Chips {
        self.betting.pot
    }

    pub fn current_bet(&self) -> Chips {
        self.betting.current_bet
    }

    pub fn last_raise(&self) -> Chips {
        self.betting.last_raise
    }

    pub fn big_blind(&self) -> Chips {
        self.big_blind
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn history(&self) -> &[ActionRecord] {
        self.log.records()
    }

    /// Завершён ли раунд торгов текущей улицы.
    pub fn is_round_complete(&self) -> bool {
        self.round_complete
    }

    // ---- Внутренности. ----

    /// Списать фишки со стека в банк: street_bet, total_invested, pot.
    /// Пустой стек после списания = all-in.
    fn commit_chips(&mut self, idx: usize, amount: Chips) {
        let player = &mut self.players[idx];
        player.stack -= amount;
        player.street_bet += amount;
        player.total_invested += amount;
        self.betting.pot += amount;
        if player.stack.is_zero() {
            player.all_in = true;
        }
    }

    /// После bet/raise остальные активные не-оллын игроки обязаны
    /// ответить на новую ставку.
    fn reopen_betting(&mut self, raiser_idx: usize) {
        for (i, p) in self.players.iter_mut().enumerate() {
            if i != raiser_idx && p.can_act() {
                p.has_acted = false;
            }
        }
    }

    /// Все ли, кто может действовать, уже походили и уравняли ставку.
    fn round_finished(&self) -> bool {
        self.players
            .iter()
            .filter(|p| p.can_act())
            .all(|p| p.has_acted && p.street_bet == self.betting.current_bet)
    }

    /// Передать ход следующему, кому ещё нужно действовать, либо
    /// закрыть раунд/раздачу.
    fn advance_turn(&mut self, from: usize) {
        // Остался один не сфолдивший – раздача завершена, он получает банк.
        if self.players.iter().filter(|p| p.is_in_hand()).count() == 1 {
            self.turn = None;
            self.round_complete = true;
            self.betting.street = Street::Complete;
            debug!("hand complete: single player left");
            return;
        }

        if self.round_finished() {
            self.turn = None;
            self.round_complete = true;
            if self.betting.street == Street::River {
                self.betting.street = Street::Complete;
            }
            debug!("betting round complete: street={:?}", self.betting.street);
            return;
        }

        // Следующий по кругу, кто ещё должен ответить.
        let n = self.order.len();
        for step in 1..=n {
            let t = (from + step) % n;
            let p = &self.players[self.order[t]];
            if p.can_act() && !p.has_acted {
                self.turn = Some(t);
                return;
            }
        }

        // Некому отвечать (все оставшиеся в оллыне) – раунд закрыт.
        self.turn = None;
        self.round_complete = true;
        if self.betting.street == Street::River {
            self.betting.street = Street::Complete;
        }
    }

    /// Общий переход улицы: проверка порядка улиц и завершённости
    /// торгов, сброс per-улица полей, новый раунд торгов.
    fn advance_street(&mut self, to: Street, cards: &[Card]) -> Result<(), StreetError> {
        let from = self.betting.street;
        // Переход легален только с непосредственно предыдущей улицы.
        let expected = match to {
            Street::Flop => Some(Street::Preflop),
            Street::Turn => Some(Street::Flop),
            Street::River => Some(Street::Turn),
            _ => None,
        };
        if expected != Some(from) {
            return Err(StreetError::WrongStreet { from, to });
        }
        if !self.round_complete {
            return Err(StreetError::BettingUnfinished);
        }

        self.board.extend_from_slice(cards);

        for p in self.players.iter_mut() {
            p.street_bet = Chips::ZERO;
            p.has_acted = false;
        }
        self.betting.reset_for_street(to, self.big_blind);

        debug!("street advanced: {from:?} -> {to:?}, board={}", self.board.len());

        self.start_betting_round();
        Ok(())
    }
}
