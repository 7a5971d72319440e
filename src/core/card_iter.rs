use super::Card;

/// Iterator over every `num_cards` sized combination of a set of cards.
///
/// Combinations come out in lexicographic order of their positions in
/// `possible_cards`, so iterating a deck sorted by value yields hands
/// whose cards are sorted too.
#[derive(Debug)]
pub struct CardIter {
    // All the possible cards that can be dealt
    possible_cards: Vec<Card>,

    // Set of current offsets being used to create card sets.
    idx: Vec<usize>,

    // size of card sets requested.
    num_cards: usize,

    // Has the first combination been handed out yet?
    started: bool,
}

impl CardIter {
    pub fn new(possible_cards: Vec<Card>, num_cards: usize) -> CardIter {
        CardIter {
            possible_cards,
            idx: (0..num_cards).collect(),
            num_cards,
            started: false,
        }
    }

    fn current(&self) -> Vec<Card> {
        self.idx.iter().map(|i| self.possible_cards[*i]).collect()
    }
}

impl Iterator for CardIter {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        let len = self.possible_cards.len();
        if self.num_cards == 0 || self.num_cards > len {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }

        // Find the right most offset that can still move forward while
        // leaving room for the offsets after it.
        let mut level = self.num_cards;
        while level > 0 {
            level -= 1;
            let cards_needed_after = self.num_cards - (level + 1);
            if self.idx[level] + 1 < len - cards_needed_after {
                self.idx[level] += 1;
                // Every level after this one restarts right behind it.
                for next in level + 1..self.num_cards {
                    self.idx[next] = self.idx[next - 1] + 1;
                }
                return Some(self.current());
            }
        }
        // Nothing left to move. Park the iterator.
        self.num_cards = 0;
        None
    }
}
