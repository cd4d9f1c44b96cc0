use thiserror::Error;

/// Recoverable input rejections. The display text is the line shown to the
/// player before the re-prompt; nothing in the game state changes.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Error)]
pub enum UserError {
    #[error("Please enter a valid command!")]
    UnknownCommand,
    #[error("Please enter the correct number of parameters!")]
    WrongArgumentCount,
    #[error("Please enter a valid row number!")]
    InvalidRow,
    #[error("Please enter the number of a card in your hand cards!")]
    NotInHand,
    #[error("Please enter the number of a card in your chosen cards!")]
    NotInChosen,
    #[error("This card cannot extend the chosen row!")]
    CannotExtendRow,
}

/// Unrecoverable failures while the game is running. The session tears down
/// by dropping its state and the process exits non-zero.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("input stream closed")]
    InputClosed,
    #[error("cannot read input: {0}")]
    Read(#[from] std::io::Error),
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("this engine plays exactly 2 players, the configuration asks for {0}")]
    UnsupportedPlayerCount(usize),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Fatal(#[from] FatalError),
}

/// Early return out of an interactive phase: either the player asked to
/// quit, or the input source died underneath the prompt.
#[derive(Debug)]
pub enum Interrupt {
    Quit,
    Fatal(FatalError),
}

impl From<FatalError> for Interrupt {
    fn from(error: FatalError) -> Self {
        Interrupt::Fatal(error)
    }
}
