use std::mem;

use crate::{card::Card, card_list::SortedCardList, error::UserError};

pub type PlayerId = usize;

pub const PLAYER_COUNT: usize = 2;
pub const ROW_COUNT: usize = 3;
pub const MAX_CARDS_PER_PLAYER: usize = 10;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub(crate) hand: SortedCardList,
    pub(crate) chosen: SortedCardList,
    pub(crate) rows: [SortedCardList; ROW_COUNT],
}

impl PlayerState {
    pub fn hand(&self) -> &SortedCardList {
        &self.hand
    }

    pub fn chosen(&self) -> &SortedCardList {
        &self.chosen
    }

    pub fn rows(&self) -> &[SortedCardList; ROW_COUNT] {
        &self.rows
    }

    pub fn has_cards_left(&self) -> bool {
        !self.hand.is_empty() || !self.chosen.is_empty()
    }
}

/// Owned snapshot of one seat, handed to the interface for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub player: PlayerId,
    pub hand: Vec<Card>,
    pub chosen: Vec<Card>,
    pub rows: [Vec<Card>; ROW_COUNT],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) players: Vec<PlayerState>,
}

impl GameState {
    /// Deals the deck in order: the first half of the deal window seeds
    /// player 0's hand, the second half player 1's. The window is
    /// `(deck.len() / PLAYER_COUNT) * 2` cards; anything beyond it stays
    /// undealt. Hands come out rank-sorted because insertion sorts.
    pub fn deal(deck: &[Card]) -> Self {
        let mut players: Vec<PlayerState> =
            (0..PLAYER_COUNT).map(|_| PlayerState::default()).collect();

        let window = (deck.len() / PLAYER_COUNT) * 2;
        let half = window / 2;
        for (position, card) in deck.iter().take(window).enumerate() {
            let seat = if position < half { 0 } else { 1 };
            players[seat].hand.insert(*card);
        }

        GameState { players }
    }

    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    pub fn any_cards_left(&self) -> bool {
        self.players.iter().any(PlayerState::has_cards_left)
    }

    pub fn view(&self, player: PlayerId) -> TableView {
        let state = &self.players[player];
        TableView {
            player,
            hand: state.hand.cards().to_vec(),
            chosen: state.chosen.cards().to_vec(),
            rows: std::array::from_fn(|row| state.rows[row].cards().to_vec()),
        }
    }

    /// Moves the first hand card matching `rank` into the chosen pool.
    pub fn choose(&mut self, player: PlayerId, rank: u32) -> Result<Card, UserError> {
        let state = &mut self.players[player];
        let card = state.hand.take(rank).ok_or(UserError::NotInHand)?;
        state.chosen.insert(card);
        Ok(card)
    }

    /// Swaps the two remaining hands, leaving chosen pools and rows where
    /// they are. Happens exactly once per round.
    pub fn exchange_hands(&mut self) {
        let (first, rest) = self.players.split_at_mut(1);
        mem::swap(&mut first[0].hand, &mut rest[0].hand);
    }

    /// Moves a chosen card into a row. A non-empty row only accepts ranks
    /// strictly below its minimum or strictly above its maximum; on any
    /// rejection the chosen pool is untouched. `row` is 0-based here.
    pub fn place(&mut self, player: PlayerId, row: usize, rank: u32) -> Result<Card, UserError> {
        let state = &mut self.players[player];
        let card = *state.chosen.find(rank).ok_or(UserError::NotInChosen)?;

        if let (Some(min), Some(max)) = (state.rows[row].first(), state.rows[row].last()) {
            if card.rank >= min.rank && card.rank <= max.rank {
                return Err(UserError::CannotExtendRow);
            }
        }

        if let Some(taken) = state.chosen.take(rank) {
            state.rows[row].insert(taken);
        }
        Ok(card)
    }

    /// Removes a chosen card outright; the returned card is dropped by the
    /// caller and never scores.
    pub fn discard(&mut self, player: PlayerId, rank: u32) -> Result<Card, UserError> {
        self.players[player]
            .chosen
            .take(rank)
            .ok_or(UserError::NotInChosen)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::card::Color;

    fn deck(ranks: &[u32]) -> Vec<Card> {
        ranks.iter().map(|&rank| Card::new(rank, Color::Blue)).collect()
    }

    fn hand_ranks(state: &GameState, player: PlayerId) -> Vec<u32> {
        state.players[player].hand.iter().map(|card| card.rank).collect()
    }

    #[test]
    fn deal_should_split_the_deck_into_contiguous_halves() {
        let state = GameState::deal(&deck(&[1, 2, 3, 4]));

        assert_eq!(hand_ranks(&state, 0), vec![1, 2]);
        assert_eq!(hand_ranks(&state, 1), vec![3, 4]);
    }

    #[test]
    fn deal_should_sort_each_hand_by_rank() {
        let state = GameState::deal(&deck(&[9, 2, 7, 1, 8, 3]));

        assert_eq!(hand_ranks(&state, 0), vec![2, 7, 9]);
        assert_eq!(hand_ranks(&state, 1), vec![1, 3, 8]);
    }

    #[test]
    fn deal_should_leave_cards_beyond_the_window_undealt() {
        let state = GameState::deal(&deck(&[1, 2, 3, 4, 5]));

        assert_eq!(hand_ranks(&state, 0).len() + hand_ranks(&state, 1).len(), 4);
        assert_eq!(hand_ranks(&state, 1), vec![3, 4]);
    }

    #[test]
    fn choose_should_move_the_card_from_hand_to_chosen() {
        let mut state = GameState::deal(&deck(&[1, 2, 3, 4]));

        let chosen = state.choose(0, 2).unwrap();

        assert_eq!(chosen.rank, 2);
        assert_eq!(hand_ranks(&state, 0), vec![1]);
        assert_eq!(state.players[0].chosen.len(), 1);
    }

    #[test]
    fn choose_should_reject_a_rank_missing_from_the_hand() {
        let mut state = GameState::deal(&deck(&[1, 2, 3, 4]));

        assert_eq!(state.choose(0, 9), Err(UserError::NotInHand));
        assert_eq!(hand_ranks(&state, 0), vec![1, 2]);
    }

    #[test]
    fn exchange_should_swap_hands_and_nothing_else() {
        let mut state = GameState::deal(&deck(&[1, 2, 3, 4]));
        state.choose(0, 1).unwrap();

        state.exchange_hands();

        assert_eq!(hand_ranks(&state, 0), vec![3, 4]);
        assert_eq!(hand_ranks(&state, 1), vec![2]);
        assert_eq!(state.players[0].chosen.len(), 1);
        assert_eq!(state.players[1].chosen.len(), 0);
    }

    #[test]
    fn place_should_start_an_empty_row_with_any_card() {
        let mut state = GameState::deal(&deck(&[5, 6, 7, 8]));
        state.choose(0, 5).unwrap();

        state.place(0, 1, 5).unwrap();

        assert_eq!(state.players[0].rows[1].len(), 1);
        assert!(state.players[0].chosen.is_empty());
    }

    #[test]
    fn place_should_extend_a_row_only_at_its_ends() {
        let mut state = GameState {
            players: vec![
                PlayerState {
                    chosen: [
                        Card::new(1, Color::Blue),
                        Card::new(5, Color::Red),
                        Card::new(9, Color::White),
                    ]
                    .into_iter()
                    .collect(),
                    rows: [
                        [Card::new(3, Color::Green), Card::new(7, Color::Green)]
                            .into_iter()
                            .collect(),
                        SortedCardList::new(),
                        SortedCardList::new(),
                    ],
                    ..Default::default()
                },
                PlayerState::default(),
            ],
        };

        state.place(0, 0, 1).unwrap();
        state.place(0, 0, 9).unwrap();

        let row: Vec<u32> = state.players[0].rows[0].iter().map(|c| c.rank).collect();
        assert_eq!(row, vec![1, 3, 7, 9]);
    }

    #[test]
    fn place_should_reject_a_rank_inside_the_row_bounds() {
        let mut state = GameState {
            players: vec![
                PlayerState {
                    chosen: [Card::new(5, Color::Red)].into_iter().collect(),
                    rows: [
                        [Card::new(1, Color::Blue), Card::new(2, Color::Green)]
                            .into_iter()
                            .collect(),
                        SortedCardList::new(),
                        SortedCardList::new(),
                    ],
                    ..Default::default()
                },
                PlayerState::default(),
            ],
        };

        assert_eq!(state.place(0, 0, 5), Err(UserError::CannotExtendRow));
        assert_eq!(
            state.players[0].chosen.cards(),
            &[Card::new(5, Color::Red)]
        );
        assert_eq!(state.players[0].rows[0].len(), 2);
    }

    #[test]
    fn place_should_reject_a_rank_missing_from_the_chosen_pool() {
        let mut state = GameState::deal(&deck(&[1, 2, 3, 4]));

        assert_eq!(state.place(0, 0, 1), Err(UserError::NotInChosen));
    }

    #[test]
    fn discard_should_remove_only_the_matching_card() {
        let mut state = GameState::deal(&deck(&[1, 2, 3, 4]));
        state.choose(0, 1).unwrap();
        state.choose(0, 2).unwrap();

        state.discard(0, 2).unwrap();

        let chosen: Vec<u32> = state.players[0].chosen.iter().map(|c| c.rank).collect();
        assert_eq!(chosen, vec![1]);
        assert!(state.players[0].rows.iter().all(|row| row.is_empty()));
    }

    #[test]
    fn discard_should_reject_an_empty_pool() {
        let mut state = GameState::deal(&deck(&[1, 2, 3, 4]));

        assert_eq!(state.discard(0, 1), Err(UserError::NotInChosen));
    }

    #[test]
    fn any_cards_left_should_see_hands_and_chosen_pools() {
        let mut state = GameState::deal(&deck(&[1, 2]));
        assert!(state.any_cards_left());

        state.choose(0, 1).unwrap();
        assert!(state.any_cards_left());

        state.discard(0, 1).unwrap();
        state.choose(1, 2).unwrap();
        state.discard(1, 2).unwrap();
        assert!(!state.any_cards_left());
    }

    proptest! {
        #[test]
        fn row_extension_law_holds(
            row_ranks in prop::collection::vec(0u32..30, 1..8),
            pick in 0u32..30,
        ) {
            let row: SortedCardList = row_ranks
                .iter()
                .map(|&rank| Card::new(rank, Color::Blue))
                .collect();
            let min = row.first().unwrap().rank;
            let max = row.last().unwrap().rank;
            let mut state = GameState {
                players: vec![
                    PlayerState {
                        chosen: [Card::new(pick, Color::Red)].into_iter().collect(),
                        rows: [row.clone(), SortedCardList::new(), SortedCardList::new()],
                        ..Default::default()
                    },
                    PlayerState::default(),
                ],
            };

            let placed = state.place(0, 0, pick);

            if pick < min || pick > max {
                prop_assert!(placed.is_ok());
                prop_assert_eq!(state.players[0].rows[0].len(), row.len() + 1);
                prop_assert!(state.players[0].chosen.is_empty());
            } else {
                prop_assert_eq!(placed, Err(UserError::CannotExtendRow));
                prop_assert_eq!(
                    state.players[0].chosen.cards(),
                    &[Card::new(pick, Color::Red)]
                );
            }
        }

        #[test]
        fn ownership_is_conserved_across_transfers(
            ranks in prop::collection::vec(0u32..15, 0..24),
            ops in prop::collection::vec(
                (0usize..3, 0usize..PLAYER_COUNT, 0usize..ROW_COUNT, 0u32..15),
                0..40,
            ),
        ) {
            let deck: Vec<Card> = ranks
                .iter()
                .map(|&rank| Card::new(rank, Color::Green))
                .collect();
            let window = (deck.len() / PLAYER_COUNT) * 2;
            let mut state = GameState::deal(&deck);
            let mut destroyed: Vec<Card> = vec![];

            for (kind, player, row, rank) in ops {
                match kind {
                    0 => { let _ = state.choose(player, rank); }
                    1 => { let _ = state.place(player, row, rank); }
                    _ => {
                        if let Ok(card) = state.discard(player, rank) {
                            destroyed.push(card);
                        }
                    }
                }
            }

            let mut remaining: Vec<Card> = destroyed;
            for player in &state.players {
                remaining.extend(player.hand.iter());
                remaining.extend(player.chosen.iter());
                for row in &player.rows {
                    remaining.extend(row.iter());
                }
            }
            let mut dealt: Vec<Card> = deck[..window].to_vec();
            remaining.sort_by_key(|card| (card.rank, card.color.code()));
            dealt.sort_by_key(|card| (card.rank, card.color.code()));
            prop_assert_eq!(remaining, dealt);
        }
    }
}
