use std::{fs::OpenOptions, io, io::Write, path::Path};

use hanami_core::scoring::Scoreboard;

/// Appends the final standings to the config file. The file is never
/// created here; a missing destination is the caller's warning case.
pub fn append(path: &Path, scoreboard: &Scoreboard) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).open(path)?;

    for (player, points) in &scoreboard.rankings {
        write!(file, "\nPlayer {}: {} points", player + 1, points)?;
    }
    for winner in &scoreboard.winners {
        write!(
            file,
            "\n\nCongratulations! Player {} wins the game!\n",
            winner + 1
        )?;
    }
    Ok(())
}
