use crate::{error::FatalError, event::Event};

/// The seam between the engine and the outside world: a typed event sink
/// and a blocking line reader. The game is hot-seat, so one interface
/// serves both players; events carry the seat they concern.
pub trait Interface {
    fn notify(&mut self, event: &Event);

    /// Blocks until the next line of input is available. End-of-input is a
    /// fatal read failure, not an empty line.
    fn read_line(&mut self) -> Result<String, FatalError>;
}
