use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Board, BoardId, Card, Deck, HandId, Position, Seat, SeatIndex, Street, TableConfig,
};
use crate::engine::actions::{Action, BotDecision};
use crate::engine::bot::{BotPolicy, BotView};
use crate::engine::dealer::deal_hand;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{
    collect_active_seats, count_active_seats, seat_index_of, seats_reacting_to_bet,
};
use crate::engine::showdown::{resolve_showdown, ShowdownResult};
use crate::engine::validation::validate_action;
use crate::engine::RandomSource;

/// Состояние одной раздачи bomb pot.
///
/// Каждое действие возвращает новый снимок (`apply_action` берёт `&HandState`),
/// старый снимок остаётся нетронутым.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandState {
    pub hand_id: HandId,
    pub config: TableConfig,
    /// Остаток колоды после раздачи. Новых карт по ходу раздачи не сдаётся.
    pub deck: Deck,
    /// Места в порядке ростера.
    pub seats: Vec<Seat>,
    /// Два борда, сданные целиком при старте.
    pub boards: [Board; 2],
    pub street: Street,
    /// Очередь хода на текущей улице (индексы мест). Первый – тот, чей ход.
    pub to_act: Vec<SeatIndex>,
    /// Итог шоудауна (есть только на Street::Showdown).
    pub showdown: Option<ShowdownResult>,
    /// Герой должен ответить на чужую ставку (Fold / Continue),
    /// пока ответа нет, улица стоит.
    #[serde(default)]
    pub awaiting_response: Option<SeatIndex>,
    /// Улица, на которой раздача закончилась. Борды открыты до неё.
    #[serde(default)]
    pub ended_on: Option<Street>,
    pub history: HandHistory,
}

impl HandState {
    /// Индекс места, от которого ждём хода или ответа на ставку.
    pub fn actor_index(&self) -> Option<SeatIndex> {
        self.awaiting_response
            .or_else(|| self.to_act.first().copied())
    }

    /// Место, чей сейчас ход.
    pub fn current_actor(&self) -> Option<&Seat> {
        self.actor_index()
            .and_then(|idx| self.seats.get(idx as usize))
    }

    /// Место героя, если оно ждёт ответа на ставку.
    pub fn responder(&self) -> Option<&Seat> {
        self.awaiting_response
            .and_then(|idx| self.seats.get(idx as usize))
    }

    pub fn seat(&self, position: &Position) -> Option<&Seat> {
        self.seats.iter().find(|s| &s.position == position)
    }

    pub fn hero(&self) -> Option<&Seat> {
        self.seats.iter().find(|s| s.is_hero)
    }

    pub fn active_count(&self) -> usize {
        count_active_seats(&self.seats)
    }

    pub fn is_finished(&self) -> bool {
        self.street == Street::Showdown
    }

    pub fn board(&self, id: BoardId) -> &Board {
        &self.boards[id.index()]
    }

    /// Открытая часть борда: 3 / 4 / 5 карт в зависимости от улицы.
    /// После досрочного конца остаётся столько, сколько было открыто.
    pub fn visible_board(&self, id: BoardId) -> &[Card] {
        self.board(id).visible(self.ended_on.unwrap_or(self.street))
    }

    /// Раздача кончилась без вскрытия (осталось одно место).
    pub fn is_uncontested(&self) -> bool {
        self.showdown
            .as_ref()
            .is_some_and(|r| r.board1.uncontested && r.board2.uncontested)
    }

    /// Итог шоудауна; до шоудауна – `NotAtShowdown`.
    pub fn showdown_result(&self) -> Result<&ShowdownResult, EngineError> {
        match (&self.showdown, self.street) {
            (Some(result), Street::Showdown) => Ok(result),
            _ => Err(EngineError::NotAtShowdown(self.street)),
        }
    }

    /// Что видит бот с места `idx`.
    pub fn bot_view(&self, idx: SeatIndex, facing_bet: bool) -> BotView {
        let seat = &self.seats[idx as usize];
        BotView {
            position: seat.position.clone(),
            hole_cards: seat.hole_cards.clone(),
            board1: self.visible_board(BoardId::First).to_vec(),
            board2: self.visible_board(BoardId::Second).to_vec(),
            street: self.street,
            facing_bet,
            opponents_in: self.active_count().saturating_sub(1),
        }
    }

    /// Применить действие к этому снимку (внутренняя мутация копии).
    fn apply_in_place<P: BotPolicy + ?Sized>(
        &mut self,
        idx: SeatIndex,
        action: Action,
        policy: &mut P,
    ) -> Result<(), EngineError> {
        let position = self.seats[idx as usize].position.clone();
        debug!("{} {} on {}", position, action, self.street);

        self.history.push(HandEventKind::PlayerActed {
            position: position.clone(),
            action,
        });

        match action {
            Action::Check => {}
            Action::Fold => {
                self.seats[idx as usize].folded = true;
            }
            Action::Bet => {
                for other in seats_reacting_to_bet(&self.seats, idx) {
                    let view = self.bot_view(other, true);
                    if policy.decide(&view) == BotDecision::Fold {
                        self.fold_bot(other, &position);
                    }
                }
                // Герой отвечает сам, после ботов.
                self.awaiting_response = self
                    .seats
                    .iter()
                    .position(|s| s.is_hero && s.is_in_hand())
                    .map(|i| i as SeatIndex)
                    .filter(|&hero| hero != idx);
            }
        }

        // Текущее место походило → убираем из очереди.
        self.to_act.retain(|&s| s != idx);
        self.settle()
    }

    /// Ответ героя на чужую ставку.
    fn respond_in_place(&mut self, idx: SeatIndex, decision: BotDecision) -> Result<(), EngineError> {
        let position = self.seats[idx as usize].position.clone();
        debug!("{} answers bet: {:?}", position, decision);

        self.awaiting_response = None;
        self.history.push(HandEventKind::BetAnswered {
            position,
            decision,
        });
        if decision == BotDecision::Fold {
            self.seats[idx as usize].folded = true;
            self.to_act.retain(|&s| s != idx);
        }
        self.settle()
    }

    /// Конец раздачи, следующая улица или ожидание ответа героя.
    fn settle(&mut self) -> Result<(), EngineError> {
        if self.active_count() == 1 {
            return self.finish_hand();
        }
        if self.awaiting_response.is_none() && self.to_act.is_empty() {
            self.advance_street()?;
        }
        Ok(())
    }

    fn fold_bot(&mut self, idx: SeatIndex, bettor: &Position) {
        let seat = &mut self.seats[idx as usize];
        seat.folded = true;
        debug!("{} folds to bet from {}", seat.position, bettor);

        self.history.push(HandEventKind::BotFolded {
            position: seat.position.clone(),
            bettor: bettor.clone(),
        });
        self.to_act.retain(|&s| s != idx);
    }

    /// Переход улиц / шоудаун.
    fn advance_street(&mut self) -> Result<(), EngineError> {
        match self.street.next() {
            Some(Street::Showdown) | None => self.finish_hand(),
            Some(next) => {
                self.street = next;
                self.to_act = collect_active_seats(&self.seats);
                self.push_street_changed();
                Ok(())
            }
        }
    }

    fn push_street_changed(&mut self) {
        debug!(
            "street {}: board1={:?} board2={:?}",
            self.street,
            self.visible_board(BoardId::First),
            self.visible_board(BoardId::Second)
        );
        self.history.push(HandEventKind::StreetChanged {
            street: self.street,
            board1: self.visible_board(BoardId::First).to_vec(),
            board2: self.visible_board(BoardId::Second).to_vec(),
        });
    }

    /// Завершение раздачи: шоудаун по обоим бордам (или без вскрытия,
    /// если осталось одно место).
    fn finish_hand(&mut self) -> Result<(), EngineError> {
        let [board1, board2] = &self.boards;
        let result = resolve_showdown(&self.seats, board1, board2)?;

        self.ended_on = Some(self.street);
        self.street = Street::Showdown;
        self.to_act.clear();
        self.awaiting_response = None;

        for board in [&result.board1, &result.board2] {
            for reveal in &board.reveals {
                self.history.push(HandEventKind::ShowdownReveal {
                    board: board.board,
                    position: reveal.position.clone(),
                    rank: reveal.rank,
                });
            }
            self.history.push(HandEventKind::BoardAwarded {
                board: board.board,
                winners: board.winners.clone(),
                category: board.category.clone(),
            });
        }
        self.history.push(HandEventKind::HandFinished {
            hand_id: self.hand_id,
        });

        info!(
            "hand {} finished: board1 -> {:?}, board2 -> {:?}",
            self.hand_id, result.board1.winners, result.board2.winners
        );

        self.showdown = Some(result);
        Ok(())
    }
}

/// Старт новой раздачи:
/// - свежая колода, перемешанная `rng`;
/// - раздача 4 карманных карт каждому месту и двух бордов;
/// - улица Flop, очередь хода – все места в порядке ростера.
pub fn new_hand<R: RandomSource + ?Sized>(
    config: &TableConfig,
    hero: &Position,
    rng: &mut R,
    hand_id: HandId,
) -> Result<HandState, EngineError> {
    config.validate()?;

    let mut deck = Deck::standard_52();
    deck.shuffle(rng);

    let dealt = deal_hand(deck, &config.positions, hero)?;

    let mut history = HandHistory::new();
    history.push(HandEventKind::HandStarted {
        hand_id,
        hero: hero.clone(),
    });
    for seat in &dealt.seats {
        history.push(HandEventKind::HoleCardsDealt {
            position: seat.position.clone(),
            cards: seat.hole_cards.clone(),
        });
    }
    history.push(HandEventKind::BoardsDealt);

    let to_act = collect_active_seats(&dealt.seats);
    let mut state = HandState {
        hand_id,
        config: config.clone(),
        deck: dealt.remaining_deck,
        seats: dealt.seats,
        boards: [dealt.board1, dealt.board2],
        street: Street::Flop,
        to_act,
        showdown: None,
        awaiting_response: None,
        ended_on: None,
        history,
    };
    state.push_street_changed();

    info!(
        "hand {} started: {} seats, hero {}",
        hand_id,
        state.seats.len(),
        hero
    );
    Ok(state)
}

/// Применить действие места. Возвращает новый снимок раздачи.
///
/// `policy` решает за ботов, которые должны ответить на bet.
/// Пока герой должен ответить на ставку, его Fold / Check
/// принимаются как ответ (см. `respond_to_bet`).
pub fn apply_action<P: BotPolicy + ?Sized>(
    state: &HandState,
    position: &Position,
    action: Action,
    policy: &mut P,
) -> Result<HandState, EngineError> {
    if state.awaiting_response.is_some() && !state.is_finished() {
        let decision = match action {
            Action::Fold => BotDecision::Fold,
            Action::Check => BotDecision::Continue,
            Action::Bet => {
                warn!("rejected {} from {}: bet is pending an answer", action, position);
                return Err(EngineError::InvalidActor(position.clone()));
            }
        };
        return respond_to_bet(state, position, decision);
    }

    let idx = validate_action(state, position, action).map_err(|e| {
        warn!("rejected {} from {}: {}", action, position, e);
        e
    })?;

    let mut next = state.clone();
    next.apply_in_place(idx, action, policy)?;
    Ok(next)
}

/// Ответ героя на чужую ставку: сбросить или продолжить.
///
/// Допустим только для места из `awaiting_response`. Пока ответа нет,
/// ни один бот не ходит и улица не меняется.
pub fn respond_to_bet(
    state: &HandState,
    position: &Position,
    decision: BotDecision,
) -> Result<HandState, EngineError> {
    if state.is_finished() {
        return Err(EngineError::InvalidStreet(state.street));
    }
    let idx = seat_index_of(&state.seats, position)
        .ok_or_else(|| EngineError::UnknownPosition(position.to_string()))?;
    if state.awaiting_response != Some(idx) {
        warn!("rejected answer {:?} from {}: no bet to answer", decision, position);
        return Err(EngineError::InvalidActor(position.clone()));
    }

    let mut next = state.clone();
    next.respond_in_place(idx, decision)?;
    Ok(next)
}

/// Сыграть ровно один ход бота (того, чья сейчас очередь).
///
/// Вызывающий код сам решает, когда звать следующий ход
/// (например, с задержкой для анимации) – на исход это не влияет.
pub fn step_bot<P: BotPolicy + ?Sized>(
    state: &HandState,
    policy: &mut P,
) -> Result<HandState, EngineError> {
    if state.is_finished() {
        return Err(EngineError::InvalidStreet(state.street));
    }

    let idx = state.actor_index().ok_or(EngineError::NoActiveHand)?;
    let seat = &state.seats[idx as usize];
    if seat.is_hero {
        return Err(EngineError::InvalidActor(seat.position.clone()));
    }

    let view = state.bot_view(idx, false);
    let action = policy.choose_action(&view);
    apply_action(state, &view.position, action, policy)
}

/// Играть за ботов, пока не наступит ход героя или шоудаун.
pub fn play_bots<P: BotPolicy + ?Sized>(
    state: &HandState,
    policy: &mut P,
) -> Result<HandState, EngineError> {
    let mut current = state.clone();
    while !current.is_finished() && current.current_actor().is_some_and(|s| s.is_bot()) {
        current = step_bot(&current, policy)?;
    }
    Ok(current)
}
