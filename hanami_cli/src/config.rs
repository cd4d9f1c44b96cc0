use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use hanami_core::{
    card::{Card, Color},
    game_state::MAX_CARDS_PER_PLAYER,
};
use thiserror::Error;

pub const MAGIC: &str = "ESP";

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Error: Cannot open file: {0}")]
    Open(String),
    #[error("Error while reading the File")]
    Read,
    #[error("Error: Invalid file: {0}")]
    BadMagic(String),
    #[error("Error: Invalid file: {0}")]
    BadPlayerCount(String),
    #[error("Error: Invalid file: {0}")]
    BadCard(String),
}

impl ConfigError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ConfigError::BadMagic(_) => 3,
            _ => 2,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct GameSetup {
    pub path: PathBuf,
    pub player_count: usize,
    pub deck: Vec<Card>,
}

pub fn parse(path: &str) -> Result<GameSetup, ConfigError> {
    let file = File::open(path).map_err(|_| ConfigError::Open(path.to_string()))?;
    parse_reader(BufReader::new(file), path)
}

/// Format: the magic marker on the first line, then the player count, then
/// `<rank>_<color>` card tokens in deal order. At most ten cards per player
/// are read; the rest of the file is ignored.
fn parse_reader(mut reader: impl BufRead, path: &str) -> Result<GameSetup, ConfigError> {
    let mut magic = String::new();
    if reader.read_line(&mut magic).map_err(|_| ConfigError::Read)? == 0 {
        return Err(ConfigError::Read);
    }
    if magic.trim_end_matches(['\r', '\n']) != MAGIC {
        return Err(ConfigError::BadMagic(path.to_string()));
    }

    let mut rest = String::new();
    reader
        .read_to_string(&mut rest)
        .map_err(|_| ConfigError::Read)?;
    let mut tokens = rest.split_whitespace();

    let player_count = tokens
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| ConfigError::BadPlayerCount(path.to_string()))?;

    let mut deck = Vec::new();
    for token in tokens.take(player_count * MAX_CARDS_PER_PLAYER) {
        deck.push(parse_card(token, path)?);
    }

    Ok(GameSetup {
        path: PathBuf::from(path),
        player_count,
        deck,
    })
}

fn parse_card(token: &str, path: &str) -> Result<Card, ConfigError> {
    let bad = || ConfigError::BadCard(path.to_string());

    let (rank, color) = token.split_once('_').ok_or_else(bad)?;
    let rank = rank.parse().map_err(|_| bad())?;
    let mut codes = color.chars();
    let code = codes.next().ok_or_else(bad)?;
    if codes.next().is_some() {
        return Err(bad());
    }
    Ok(Card::new(rank, Color::from_code(code)))
}
