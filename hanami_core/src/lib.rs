use card::Card;
use error::GameError;
use game_logic::GameSession;
use interface::Interface;
use scoring::Scoreboard;

pub mod card;
pub mod card_list;
pub mod command;
pub mod error;
pub mod event;
pub mod game_logic;
pub mod game_state;
pub mod interface;
pub mod scoring;
pub mod utils;

/// Deals the deck and plays a whole game over the given interface.
/// `Ok(None)` means somebody quit, which skips scoring.
pub fn run_game<I>(
    player_count: usize,
    deck: &[Card],
    interface: I,
) -> Result<Option<Scoreboard>, GameError>
where
    I: Interface,
{
    let mut session = GameSession::new(player_count, deck, interface)?;
    Ok(session.run()?)
}
