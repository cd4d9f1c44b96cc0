use std::io::{self, BufRead, Write};

use hanami_core::{
    card::Card,
    command::Keyword,
    error::FatalError,
    event::{Event, Pick},
    game_state::TableView,
    interface::Interface,
    scoring::Scoreboard,
};
use itertools::Itertools;

/// Renders engine events onto the terminal with the classic surface texts
/// and feeds lines back from stdin.
pub struct ConsoleInterface;

impl ConsoleInterface {
    pub fn new() -> Self {
        ConsoleInterface
    }

    fn print_table(&self, view: &TableView) {
        print!("\nPlayer {}:\n  hand cards:", view.player + 1);
        print!("{}", cards_text(&view.hand));
        println!();
        print!("  chosen cards:{}", cards_text(&view.chosen));
        for (index, row) in view.rows.iter().enumerate() {
            if !row.is_empty() {
                print!("\n  row_{}:{}", index + 1, cards_text(row));
            }
        }
        println!("\n");
    }

    fn print_results(&self, scoreboard: &Scoreboard) {
        println!();
        for (player, points) in &scoreboard.rankings {
            print!("\nPlayer {}: {} points", player + 1, points);
        }
        println!("\n");
        for winner in &scoreboard.winners {
            println!("Congratulations! Player {} wins the game!", winner + 1);
        }
    }

    fn prompt(&self, text: &str) {
        print!("{}", text);
        io::stdout().flush().unwrap();
    }
}

impl Interface for ConsoleInterface {
    fn notify(&mut self, event: &Event) {
        match event {
            Event::ChoosingPhaseStarted => {
                println!("\n-------------------\nCARD CHOOSING PHASE\n-------------------")
            }
            Event::ActionPhaseStarted => {
                println!("------------\nACTION PHASE\n------------")
            }
            Event::Table(view) => self.print_table(view),
            Event::ChoosePrompt { player, pick } => {
                let ordinal = match pick {
                    Pick::First => "first",
                    Pick::Second => "second",
                };
                self.prompt(&format!(
                    "Please choose a {} card to keep:\nP{} > ",
                    ordinal,
                    player + 1
                ));
            }
            Event::ActionPrompt { player } => {
                self.prompt(&format!("What do you want to do?\nP{} > ", player + 1));
            }
            Event::Reprompt { player } => self.prompt(&format!("P{} > ", player + 1)),
            Event::Rejected(error) => println!("{}", error),
            Event::Help => println!("\n{}", Keyword::reference()),
            Event::HandsExchanged => println!(
                "\nCard choosing phase is over - passing remaining hand cards to the next player!\n"
            ),
            Event::RoundFinished => println!("\nAction phase is over - starting next game round!"),
            Event::GameOver(scoreboard) => self.print_results(scoreboard),
        }
    }

    fn read_line(&mut self) -> Result<String, FatalError> {
        match io::stdin().lock().lines().next() {
            Some(Ok(line)) => Ok(line),
            Some(Err(error)) => Err(FatalError::Read(error)),
            None => Err(FatalError::InputClosed),
        }
    }
}

fn cards_text(cards: &[Card]) -> String {
    cards.iter().map(|card| format!(" {}", card)).join("")
}

#[cfg(test)]
mod tests {
    use hanami_core::card::Color;

    use super::*;

    #[test]
    fn cards_text_should_prefix_every_card_with_a_space() {
        let cards = vec![Card::new(1, Color::Blue), Card::new(13, Color::Red)];

        assert_eq!(cards_text(&cards), " 1_b 13_r");
        assert_eq!(cards_text(&[]), "");
    }
}
