//! Ranking-signal properties of the weighted objective sum.

use proptest::prelude::*;

use crate::appraiser::lexicographic_score;

proptest! {
    /// A full win on the highest-priority objective beats any combination of
    /// lower-priority scores paired with a loss there.
    #[test]
    fn top_priority_dominates(
        (winners, losers) in (1usize..6).prop_flat_map(|n| {
            (
                prop::collection::vec(0f64..=1.0, n),
                prop::collection::vec(0f64..=1.0, n),
            )
        }),
    ) {
        prop_assume!(winners.len() == losers.len());

        let mut winners = winners;
        let mut losers = losers;
        winners[0] = 1.0;
        losers[0] = 0.0;

        prop_assert!(lexicographic_score(&winners) > lexicographic_score(&losers));
    }

    /// Scores always normalize into [0, 1].
    #[test]
    fn scores_stay_normalized(scores in prop::collection::vec(0f64..=1.0, 0..8)) {
        let score = lexicographic_score(&scores);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    /// Improving any single objective never lowers the total.
    #[test]
    fn monotone_in_every_objective(
        scores in prop::collection::vec(0f64..=0.9, 1..6),
        index in 0usize..6,
    ) {
        prop_assume!(index < scores.len());

        let mut improved = scores.clone();
        improved[index] += 0.1;

        prop_assert!(lexicographic_score(&improved) > lexicographic_score(&scores));
    }
}
