use std::str::FromStr;

use itertools::Itertools;
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString};

use crate::{error::UserError, game_state::ROW_COUNT};

#[derive(Debug, PartialEq, Copy, Clone, Display, EnumIter, EnumString, EnumMessage)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Keyword {
    #[strum(message = "help\n  Display this help message.")]
    Help,
    #[strum(
        message = "place <row number> <card number>\n  Append a card to the chosen row or if the chosen row does not exist create it."
    )]
    Place,
    #[strum(message = "discard <card number>\n  Discard a card from the chosen cards.")]
    Discard,
    #[strum(message = "quit\n  Terminate the program.")]
    Quit,
}

impl Keyword {
    pub fn reference() -> String {
        let commands = Keyword::iter()
            .map(|keyword| format!("- {}", keyword.get_message().unwrap_or_default()))
            .join("\n\n");
        format!("Available commands:\n\n{}\n", commands)
    }
}

/// A fully parsed action-phase command. Rows are the user-facing 1..=3.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum ActionCommand {
    Help,
    Place { row: usize, rank: u32 },
    Discard { rank: u32 },
    Quit,
}

impl ActionCommand {
    pub fn parse(line: &str) -> Result<Self, UserError> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().ok_or(UserError::UnknownCommand)?;
        let keyword = Keyword::from_str(keyword).map_err(|_| UserError::UnknownCommand)?;

        let command = match keyword {
            Keyword::Help => ActionCommand::Help,
            Keyword::Quit => ActionCommand::Quit,
            Keyword::Place => {
                let row_token = tokens.next().ok_or(UserError::WrongArgumentCount)?;
                let rank_token = tokens.next().ok_or(UserError::WrongArgumentCount)?;
                let row = row_token
                    .parse::<usize>()
                    .ok()
                    .filter(|row| (1..=ROW_COUNT).contains(row))
                    .ok_or(UserError::InvalidRow)?;
                let rank = rank_token.parse().map_err(|_| UserError::NotInHand)?;
                ActionCommand::Place { row, rank }
            }
            Keyword::Discard => {
                let rank_token = tokens.next().ok_or(UserError::WrongArgumentCount)?;
                let rank = rank_token.parse().map_err(|_| UserError::NotInChosen)?;
                ActionCommand::Discard { rank }
            }
        };

        if tokens.next().is_some() {
            return Err(UserError::WrongArgumentCount);
        }
        Ok(command)
    }
}

/// Choosing-phase input: a card rank to keep, or quit. Everything else is
/// answered with the hand-card rejection text.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum ChoiceCommand {
    Pick(u32),
    Quit,
}

impl ChoiceCommand {
    pub fn parse(line: &str) -> Result<Self, UserError> {
        let mut tokens = line.split_whitespace();
        let first = tokens.next().ok_or(UserError::NotInHand)?;

        if first.eq_ignore_ascii_case("quit") {
            if tokens.next().is_some() {
                return Err(UserError::WrongArgumentCount);
            }
            return Ok(ChoiceCommand::Quit);
        }

        let rank = first.parse().map_err(|_| UserError::NotInHand)?;
        if tokens.next().is_some() {
            return Err(UserError::NotInHand);
        }
        Ok(ChoiceCommand::Pick(rank))
    }
}
