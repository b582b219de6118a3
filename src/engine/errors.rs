use thiserror::Error;

use crate::domain::{Chips, PlayerId, Position, Street};

/// Ошибки конструирования движка: плохой ростер или блайнды.
///
/// Фатальны – раздачу с такими входными данными начинать нельзя.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("Слишком мало игроков: {0} (минимум 2)")]
    TooFewPlayers(usize),

    #[error("Слишком много игроков: {0} (максимум 10)")]
    TooManyPlayers(usize),

    #[error("Блайнды должны быть положительными")]
    NonPositiveBlinds,

    #[error("Большой блайнд должен быть больше малого: SB={small}, BB={big}")]
    BigBlindNotGreater { small: Chips, big: Chips },

    #[error("У игрока id={0} пустое имя")]
    MissingName(PlayerId),

    #[error("Игрок id={0} встречается в ростере дважды")]
    DuplicatePlayer(PlayerId),

    #[error("Позиция {0} занята дважды")]
    DuplicatePosition(Position),

    #[error("Неизвестная позиция: {0}")]
    UnknownPosition(String),

    #[error("BTN без единого блайнда – такая расстановка не бывает в раздаче")]
    ButtonWithoutBlinds,

    #[error("Некорректный индекс блайнда: {0}")]
    InvalidBlindIndex(usize),

    #[error("SB и BB не могут указывать на одного игрока")]
    BlindsOnSamePlayer,
}

/// Ошибки применения действия. Восстановимые: UI перечитывает
/// `legal_actions` и спрашивает игрока заново, авто-ретраев нет.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    /// Действие не от того игрока, чей сейчас ход.
    #[error("Сейчас не ход этого игрока (ходит id={expected:?})")]
    NotPlayersTurn { expected: Option<PlayerId> },

    #[error("Раздача завершена, действия больше не принимаются")]
    HandComplete,

    #[error("Сейчас никто не ходит – раунд ставок завершён")]
    NoActor,

    #[error("Check невозможен – нужно уравнять {to_call}")]
    CannotCheck { to_call: Chips },

    #[error("Call невозможен – нет ставки для уравнивания")]
    CannotCall,

    #[error("Fold невозможен – ставки нет, доступен check")]
    CannotFold,

    #[error("Bet невозможен – уже есть ставка {current_bet}, нужен raise")]
    CannotBet { current_bet: Chips },

    #[error("Минимальный bet – {min}")]
    BetTooSmall { min: Chips },

    #[error("Максимальный bet – {max} (весь стек)")]
    BetTooLarge { max: Chips },

    #[error("Raise невозможен – ставки ещё нет, доступен bet")]
    CannotRaise,

    #[error("Минимальный рейз – до {min}")]
    RaiseTooSmall { min: Chips },

    #[error("Максимальный рейз – до {max} (весь стек)")]
    RaiseTooLarge { max: Chips },

    #[error("Не хватает стека для полного рейза – доступен только all-in или call")]
    RaiseNotCovered,

    #[error("All-in невозможен – стек пуст")]
    EmptyStack,

    /// Блайнды – не действие игрока; они постятся через `post_blinds`.
    #[error("Блайнд не является действием игрока")]
    NotAPlayerAction,
}

/// Ошибки перехода улиц. Фатальны для самой операции перехода,
/// но движок остаётся в рабочем состоянии.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreetError {
    #[error("Переход на {to:?} невозможен с улицы {from:?}")]
    WrongStreet { from: Street, to: Street },

    #[error("Торги на текущей улице ещё не завершены")]
    BettingUnfinished,
}
