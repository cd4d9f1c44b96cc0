use crate::{
    error::UserError,
    game_state::{PlayerId, TableView},
    scoring::Scoreboard,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    First,
    Second,
}

/// Everything the engine tells the interface. Events own their data so the
/// renderer never reaches back into the game state.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ChoosingPhaseStarted,
    ActionPhaseStarted,
    Table(TableView),
    ChoosePrompt { player: PlayerId, pick: Pick },
    ActionPrompt { player: PlayerId },
    Reprompt { player: PlayerId },
    Rejected(UserError),
    Help,
    HandsExchanged,
    RoundFinished,
    GameOver(Scoreboard),
}
