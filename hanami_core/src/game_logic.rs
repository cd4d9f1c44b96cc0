use log::{debug, info};

use crate::{
    card::Card,
    command::{ActionCommand, ChoiceCommand},
    error::{FatalError, Interrupt, SetupError, UserError},
    event::{Event, Pick},
    game_state::{GameState, PlayerId, PLAYER_COUNT},
    interface::Interface,
    scoring::Scoreboard,
};

pub const CHOSEN_PER_ROUND: usize = 2;

/// Drives the round loop against one interface: CHOOSING, hand exchange,
/// ACTION, until the hands run dry or somebody quits.
pub struct GameSession<I: Interface> {
    state: GameState,
    interface: I,
}

impl<I: Interface> GameSession<I> {
    pub fn new(player_count: usize, deck: &[Card], interface: I) -> Result<Self, SetupError> {
        if player_count != PLAYER_COUNT {
            return Err(SetupError::UnsupportedPlayerCount(player_count));
        }
        Ok(GameSession {
            state: GameState::deal(deck),
            interface,
        })
    }

    /// Plays until natural end and returns the scoreboard, or `None` after
    /// a quit, which skips scoring entirely.
    pub fn run(&mut self) -> Result<Option<Scoreboard>, FatalError> {
        match self.play_rounds() {
            Ok(()) => {
                let scoreboard = self.state.score();
                self.interface.notify(&Event::GameOver(scoreboard.clone()));
                Ok(Some(scoreboard))
            }
            Err(Interrupt::Quit) => {
                info!("quit requested, ending without scoring");
                Ok(None)
            }
            Err(Interrupt::Fatal(error)) => Err(error),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn interface(&self) -> &I {
        &self.interface
    }

    fn play_rounds(&mut self) -> Result<(), Interrupt> {
        while self.state.any_cards_left() {
            self.choosing_phase()?;
            self.state.exchange_hands();
            debug!("hands exchanged");
            self.interface.notify(&Event::HandsExchanged);
            self.action_phase()?;
        }
        info!("hands exhausted, game over");
        Ok(())
    }

    fn choosing_phase(&mut self) -> Result<(), Interrupt> {
        self.interface.notify(&Event::ChoosingPhaseStarted);

        for player in 0..PLAYER_COUNT {
            self.interface.notify(&Event::Table(self.state.view(player)));

            let mut picked = 0;
            while picked < CHOSEN_PER_ROUND {
                let pick = if picked == 0 { Pick::First } else { Pick::Second };
                self.interface.notify(&Event::ChoosePrompt { player, pick });

                loop {
                    let line = self.interface.read_line()?;
                    match ChoiceCommand::parse(&line) {
                        Ok(ChoiceCommand::Quit) => return Err(Interrupt::Quit),
                        Ok(ChoiceCommand::Pick(rank)) => match self.state.choose(player, rank) {
                            Ok(card) => {
                                debug!("player {} keeps {}", player + 1, card);
                                picked += 1;
                                break;
                            }
                            Err(error) => self.reject(player, error),
                        },
                        Err(error) => self.reject(player, error),
                    }
                }
            }
        }
        Ok(())
    }

    fn action_phase(&mut self) -> Result<(), Interrupt> {
        self.interface.notify(&Event::ActionPhaseStarted);

        for player in 0..PLAYER_COUNT {
            while !self.state.player(player).chosen().is_empty() {
                self.interface.notify(&Event::Table(self.state.view(player)));
                self.interface.notify(&Event::ActionPrompt { player });

                loop {
                    let line = self.interface.read_line()?;
                    match ActionCommand::parse(&line) {
                        Ok(ActionCommand::Quit) => return Err(Interrupt::Quit),
                        Ok(ActionCommand::Help) => {
                            self.interface.notify(&Event::Help);
                            break;
                        }
                        Ok(ActionCommand::Place { row, rank }) => {
                            match self.state.place(player, row - 1, rank) {
                                Ok(card) => {
                                    debug!("player {} places {} in row {}", player + 1, card, row);
                                    break;
                                }
                                Err(error) => self.reject(player, error),
                            }
                        }
                        Ok(ActionCommand::Discard { rank }) => {
                            match self.state.discard(player, rank) {
                                Ok(card) => {
                                    debug!("player {} discards {}", player + 1, card);
                                    break;
                                }
                                Err(error) => self.reject(player, error),
                            }
                        }
                        Err(error) => self.reject(player, error),
                    }
                }
            }
            self.interface.notify(&Event::Table(self.state.view(player)));
        }

        self.interface.notify(&Event::RoundFinished);
        Ok(())
    }

    fn reject(&mut self, player: PlayerId, error: UserError) {
        self.interface.notify(&Event::Rejected(error));
        self.interface.notify(&Event::Reprompt { player });
    }
}
