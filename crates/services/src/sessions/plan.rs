use rand::Rng;
use rand::seq::index;

/// Number of questions asked per session unless the caller requests otherwise.
pub const DEFAULT_QUESTIONS_PER_SESSION: usize = 5;

/// Selection result for a session: the sampled, ordered subset of indices
/// into the full question collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPlan {
    order: Vec<usize>,
}

impl SessionPlan {
    /// Draw a plan of `min(requested, question_count)` distinct indices.
    ///
    /// The sample is uniform and without replacement (no index can appear
    /// twice, and no position is favored). A comparator-based shuffle over a
    /// random key is not an acceptable substitute; it biases the ordering.
    ///
    /// `question_count == 0` or `requested == 0` yields an empty plan; the
    /// session constructor decides whether that is an error.
    #[must_use]
    pub fn draw<R: Rng + ?Sized>(question_count: usize, requested: usize, rng: &mut R) -> Self {
        let amount = requested.min(question_count);
        let order = index::sample(rng, question_count, amount).into_vec();
        Self { order }
    }

    /// The selected indices, in presentation order.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Total number of questions in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.order.len()
    }

    /// Returns true when no questions were selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub(crate) fn into_order(self) -> Vec<usize> {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn plan_length_is_min_of_requested_and_available() {
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(SessionPlan::draw(10, 5, &mut rng).total(), 5);
        assert_eq!(SessionPlan::draw(3, 5, &mut rng).total(), 3);
        assert_eq!(SessionPlan::draw(5, 5, &mut rng).total(), 5);
        assert!(SessionPlan::draw(0, 5, &mut rng).is_empty());
        assert!(SessionPlan::draw(5, 0, &mut rng).is_empty());
    }

    #[test]
    fn plan_indices_are_distinct_and_in_range() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = SessionPlan::draw(10, 5, &mut rng);

            let unique: HashSet<_> = plan.order().iter().copied().collect();
            assert_eq!(unique.len(), plan.total());
            assert!(plan.order().iter().all(|&i| i < 10));
        }
    }

    #[test]
    fn plan_is_deterministic_for_a_fixed_seed() {
        let a = SessionPlan::draw(20, 8, &mut StdRng::seed_from_u64(42));
        let b = SessionPlan::draw(20, 8, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn every_index_gets_selected_across_seeds() {
        // With K/N = 1/2 over 400 draws, a never-selected or always-first
        // index would indicate a biased sampler.
        let n = 8;
        let mut selected_counts = vec![0_u32; n];
        let mut first_counts = vec![0_u32; n];

        for seed in 0..400 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = SessionPlan::draw(n, n / 2, &mut rng);
            for &i in plan.order() {
                selected_counts[i] += 1;
            }
            first_counts[plan.order()[0]] += 1;
        }

        // Expected selection count is 200, expected first-position count 50.
        assert!(selected_counts.iter().all(|&c| c > 120 && c < 280));
        assert!(first_counts.iter().all(|&c| c > 10 && c < 120));
    }
}
