//! Everything needed to score hands of one deck shape, in one place.

use std::cmp::Ordering;

use tracing::event;

use crate::core::{Card, DeckShape, PokerError};
use crate::evaluator::{Evaluation, EvaluatorConfig, evaluate_in};
use crate::ranking::{CountTable, RankingTable, generate_ranking};
use crate::score::{log_score, score};

/// A classified, ranked and scored hand.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredHand {
    pub evaluation: Evaluation,
    pub rank: usize,
    pub score: u128,
    pub log_score: f64,
}

/// Ranks and scores hands for a single deck shape.
///
/// The ranking tables are built once when the ranker is created and
/// never change afterwards, so one ranker can be shared between threads.
/// The tables are generated with the same royal flush and wheel rules
/// the evaluator uses, so every evaluated hand has a category to look up.
///
/// ```
/// use combinatorial_poker::HandRanker;
/// use combinatorial_poker::core::{Card, DeckShape};
/// use combinatorial_poker::evaluator::EvaluatorConfig;
///
/// let ranker = HandRanker::new(DeckShape::standard(), EvaluatorConfig::default()).unwrap();
/// let flush = ranker.score_hand(&Card::parse_hand("2d9dJd4d6d").unwrap()).unwrap();
/// let straight = ranker.score_hand(&Card::parse_hand("6d2c4h3s5s").unwrap()).unwrap();
/// assert!(flush.score > straight.score);
/// ```
#[derive(Debug, Clone)]
pub struct HandRanker {
    shape: DeckShape,
    config: EvaluatorConfig,
    ranking: RankingTable,
    counts: CountTable,
}

impl HandRanker {
    pub fn new(shape: DeckShape, config: EvaluatorConfig) -> Result<Self, PokerError> {
        config.validate()?;
        // The wheel count assumes the ace playing low sits right below the lowest value.
        let values = shape.value_range(config.ace_value)?;
        if config.allow_dual_ace && *values.start() != config.alt_ace_value + 1 {
            return Err(PokerError::InvalidAltAceValue {
                ace_value: config.ace_value,
                alt_ace_value: config.alt_ace_value,
            });
        }

        let (ranking, counts) = generate_ranking(shape, config.ranking_config())?;
        event!(
            tracing::Level::DEBUG,
            ?shape,
            categories = ranking.len(),
            "Hand ranker ready"
        );
        Ok(Self {
            shape,
            config,
            ranking,
            counts,
        })
    }

    pub fn shape(&self) -> &DeckShape {
        &self.shape
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn ranking(&self) -> &RankingTable {
        &self.ranking
    }

    pub fn counts(&self) -> &CountTable {
        &self.counts
    }

    /// Classify a hand against this ranker's deck.
    pub fn evaluate(&self, cards: &[Card]) -> Result<Evaluation, PokerError> {
        evaluate_in(&self.shape, cards, &self.config)
    }

    /// Classify, rank and score a hand.
    pub fn score_hand(&self, cards: &[Card]) -> Result<ScoredHand, PokerError> {
        let evaluation = self.evaluate(cards)?;
        let rank = self.ranking.rank(&evaluation.category())?;
        let values = evaluation.values();
        let score = score(&values, rank, self.config.ace_value)?;
        let log_score = log_score(&values, rank, self.config.ace_value)?;
        Ok(ScoredHand {
            evaluation,
            rank,
            score,
            log_score,
        })
    }

    /// Which of two hands is stronger.
    pub fn compare(&self, a: &[Card], b: &[Card]) -> Result<Ordering, PokerError> {
        Ok(self.score_hand(a)?.score.cmp(&self.score_hand(b)?.score))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::core::Deck;
    use crate::ranking::{Category, Signature};

    fn config_for(shape: &DeckShape, royal: bool, wheel: bool) -> EvaluatorConfig {
        EvaluatorConfig {
            ace_value: shape.values() + 1,
            alt_ace_value: 1,
            accept_royal_flush: royal,
            allow_dual_ace: wheel,
            replace_ace_value: true,
        }
    }

    /// Deal every hand of a small deck and check the classifier
    /// lands on exactly the counts the enumerator predicts.
    #[test_log::test]
    fn test_exhaustive_counts_agree() {
        for (values, suits, hand_size) in [
            (5, 2, 3),
            (6, 3, 4),
            (7, 2, 5),
            (5, 4, 5),
            (4, 3, 2),
            (3, 3, 1),
            (4, 4, 4),
            (3, 4, 5),
            (6, 1, 3),
        ] {
            let shape = DeckShape::new(values, suits, hand_size).unwrap();
            for royal in [true, false] {
                for wheel in [true, false] {
                    let config = config_for(&shape, royal, wheel);
                    let ranker = HandRanker::new(shape, config).unwrap();
                    let deck = Deck::new(shape, config.ace_value).unwrap();

                    let mut seen: BTreeMap<Category, u128> = BTreeMap::new();
                    for hand in deck.hands() {
                        let category = ranker.evaluate(&hand).unwrap().category();
                        *seen.entry(category).or_insert(0) += 1;
                    }

                    for (category, count) in ranker.counts().iter() {
                        assert_eq!(
                            count,
                            seen.get(category).copied().unwrap_or(0),
                            "{shape:?} royal={royal} wheel={wheel} {category}"
                        );
                    }
                    for category in seen.keys() {
                        assert!(ranker.ranking().contains(category), "{category}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_standard_hands() {
        let ranker = HandRanker::new(DeckShape::standard(), EvaluatorConfig::default()).unwrap();

        let royal = ranker
            .score_hand(&Card::parse_hand("AsKsQsJsTs").unwrap())
            .unwrap();
        assert_eq!(9, royal.rank);
        assert_eq!(29_043_958_007_812_500, royal.score);

        let wheel = ranker
            .score_hand(&Card::parse_hand("As2s3s4s5s").unwrap())
            .unwrap();
        assert_eq!(Category::StraightFlush, wheel.evaluation.category());
        assert_eq!(8, wheel.rank);

        let pair = ranker
            .score_hand(&Card::parse_hand("2s2h5c7d9s").unwrap())
            .unwrap();
        assert_eq!(
            Category::RepeatedValue(Signature::new(vec![2, 1, 1, 1]).unwrap()),
            pair.evaluation.category()
        );
        assert_eq!(1, pair.rank);
    }

    #[test]
    fn test_compare() {
        let ranker = HandRanker::new(DeckShape::standard(), EvaluatorConfig::default()).unwrap();
        let hands = [
            "2h3c4d5s7h", // high card
            "AhKcQdJs9h", // better high card
            "2s2h5c7d9s", // pair
            "2s2h5c5d9s", // two pair
            "4s4h4c7d9s", // trips
            "As2c3d4s5h", // wheel
            "6s2c3d4s5h", // six high straight
            "2d9dJd4d6d", // flush
            "3s3h3c2d2s", // full house
            "8s8h8c8d2s", // quads
            "9cTcJcQcKc", // straight flush
            "ThJhQhKhAh", // royal flush
        ];
        for w in hands.windows(2) {
            let a = Card::parse_hand(w[0]).unwrap();
            let b = Card::parse_hand(w[1]).unwrap();
            assert_eq!(Ordering::Less, ranker.compare(&a, &b).unwrap(), "{} {}", w[0], w[1]);
        }
    }

    #[test]
    fn test_rank_monotonic_scores() {
        for shape in [
            DeckShape::standard(),
            DeckShape::new(8, 3, 4).unwrap(),
            DeckShape::new(10, 5, 7).unwrap(),
        ] {
            let config = config_for(&shape, true, true);
            let ranker = HandRanker::new(shape, config).unwrap();
            let n = shape.hand_size();
            let max_rank = ranker.ranking().max_rank().unwrap();
            for rank in 0..max_rank {
                let best = score(&vec![config.ace_value; n], rank, config.ace_value).unwrap();
                let worst = score(&vec![config.alt_ace_value; n], rank + 1, config.ace_value).unwrap();
                assert!(worst > best, "{shape:?} rank {rank}");
            }
        }
    }

    #[test]
    fn test_sampled_hands_rank() {
        let shape = DeckShape::new(9, 3, 6).unwrap();
        let config = config_for(&shape, true, true);
        let ranker = HandRanker::new(shape, config).unwrap();
        let deck = Deck::new(shape, config.ace_value).unwrap();
        let mut rng = rand::rng();
        for _ in 0..500 {
            let scored = ranker.score_hand(&deck.sample_hand(&mut rng)).unwrap();
            assert!(scored.rank <= ranker.ranking().max_rank().unwrap());
            assert!(scored.log_score > 0.0);
        }
    }

    #[test]
    fn test_shared_between_threads() {
        let ranker = Arc::new(HandRanker::new(DeckShape::standard(), EvaluatorConfig::default()).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ranker = Arc::clone(&ranker);
                thread::spawn(move || {
                    let hand = Card::parse_hand("8s8h8c8d2s").unwrap();
                    ranker.score_hand(&hand).unwrap().rank
                })
            })
            .collect();
        for h in handles {
            assert_eq!(7, h.join().unwrap());
        }
    }

    #[test]
    fn test_rejects_bad_hands() {
        let ranker = HandRanker::new(DeckShape::standard(), EvaluatorConfig::default()).unwrap();
        assert!(matches!(
            ranker.score_hand(&Card::parse_hand("AsKs").unwrap()),
            Err(PokerError::WrongHandSize { .. })
        ));
    }

    #[test]
    fn test_rejects_misplaced_wheel() {
        let config = EvaluatorConfig::with_ace(13);
        assert!(matches!(
            HandRanker::new(DeckShape::standard(), config),
            Err(PokerError::InvalidAltAceValue { .. })
        ));
        let config = EvaluatorConfig {
            allow_dual_ace: false,
            ..EvaluatorConfig::with_ace(13)
        };
        assert!(HandRanker::new(DeckShape::standard(), config).is_ok());
    }
}
