use crate::{
    card_list::SortedCardList,
    game_state::{GameState, PlayerId, PlayerState},
};

/// Final standings: `(player, points)` pairs in display order (descending
/// points, ties in seat order) plus every player matching the top score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub rankings: Vec<(PlayerId, u32)>,
    pub winners: Vec<PlayerId>,
}

fn row_points(row: &SortedCardList) -> u32 {
    row.iter().map(|card| card.points()).sum()
}

impl PlayerState {
    /// Row sums plus the longest row counted a second time. The first row
    /// to reach the maximum length holds the bonus; later rows of equal
    /// length do not take it over.
    pub fn final_points(&self) -> u32 {
        let total: u32 = self.rows.iter().map(row_points).sum();

        let mut longest = 0;
        let mut longest_len = 0;
        for (index, row) in self.rows.iter().enumerate() {
            if row.len() > longest_len {
                longest = index;
                longest_len = row.len();
            }
        }

        total + row_points(&self.rows[longest])
    }
}

impl GameState {
    pub fn score(&self) -> Scoreboard {
        let scores: Vec<u32> = self
            .players
            .iter()
            .map(PlayerState::final_points)
            .collect();

        let mut rankings: Vec<(PlayerId, u32)> = scores.iter().copied().enumerate().collect();
        // stable sort keeps tied seats in index order
        rankings.sort_by(|a, b| b.1.cmp(&a.1));

        let highest = scores.iter().copied().max().unwrap_or(0);
        let winners = scores
            .iter()
            .enumerate()
            .filter(|(_, &score)| score == highest)
            .map(|(player, _)| player)
            .collect();

        Scoreboard { rankings, winners }
    }
}
