use std::fmt;

/// One of the four scoring suits, or an unrecognized code from the deck
/// file. Unknown colors stay on the card but are worth nothing.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Blue,
    Green,
    White,
    Red,
    Other(char),
}

impl Color {
    pub fn from_code(code: char) -> Self {
        match code {
            'b' => Color::Blue,
            'g' => Color::Green,
            'w' => Color::White,
            'r' => Color::Red,
            other => Color::Other(other),
        }
    }

    pub fn code(&self) -> char {
        match self {
            Color::Blue => 'b',
            Color::Green => 'g',
            Color::White => 'w',
            Color::Red => 'r',
            Color::Other(code) => *code,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            Color::Blue => 3,
            Color::Green => 4,
            Color::White => 7,
            Color::Red => 10,
            Color::Other(_) => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Card {
    pub rank: u32,
    pub color: Color,
}

impl Card {
    pub fn new(rank: u32, color: Color) -> Self {
        Card { rank, color }
    }

    pub fn points(&self) -> u32 {
        self.color.points()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.rank, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_should_follow_the_color_table() {
        assert_eq!(Card::new(1, Color::Blue).points(), 3);
        assert_eq!(Card::new(1, Color::Green).points(), 4);
        assert_eq!(Card::new(1, Color::White).points(), 7);
        assert_eq!(Card::new(1, Color::Red).points(), 10);
    }

    #[test]
    fn unknown_color_should_be_worth_nothing() {
        assert_eq!(Card::new(5, Color::Other('x')).points(), 0);
    }

    #[test]
    fn color_code_should_round_trip() {
        for code in ['b', 'g', 'w', 'r', 'z'] {
            assert_eq!(Color::from_code(code).code(), code);
        }
    }

    #[test]
    fn display_should_use_rank_and_color_code() {
        assert_eq!(Card::new(13, Color::Red).to_string(), "13_r");
        assert_eq!(Card::new(4, Color::Other('x')).to_string(), "4_x");
    }
}
