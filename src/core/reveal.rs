//! Random single-item reveal for the feedback list.
//!
//! On page load the feedback container shows exactly one testimonial. This
//! module picks which one: child 1 (the default-visible testimonial) is
//! hidden first, then a uniformly random child in the closed range
//! `[1, N-1]` is shown. Child 0 is the persistent section heading and is
//! never touched. When the pick lands on index 1 the default testimonial is
//! hidden and immediately shown again, netting out visible.
//!
//! The DOM never appears here: callers supply a [`RevealTarget`] (the
//! container capability) and a [`RandomSource`], so the behavior is fully
//! testable without a browser.

/// Uniform random source producing values in `[0, 1)`.
///
/// Production code uses the `Math.random()` adapter in [`crate::utils::dom`];
/// tests supply scripted or seeded sources.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

/// A container whose direct children can be shown or hidden by index.
///
/// The minimal capability the reveal needs from the DOM: a child count and
/// an index-addressed visibility setter. Implementations must treat an
/// out-of-range index as "no such child" and leave everything untouched.
pub trait RevealTarget {
    /// Number of direct children.
    fn child_count(&self) -> usize;

    /// Set the inline display style of the child at `index`.
    ///
    /// `visible` maps to `display: block`, hidden to `display: none`.
    /// Returns `false` when no child exists at `index`.
    fn set_visible(&mut self, index: usize, visible: bool) -> bool;
}

/// Pick the index to reveal: `floor(roll * (N - 1)) + 1`.
///
/// With `roll` uniform in `[0, 1)` the result is uniform over the closed
/// range `[1, N-1]`. For N <= 1 the range collapses and the result is
/// always 1, which is out of bounds; [`RevealTarget::set_visible`] no-ops
/// there rather than faulting.
fn reveal_index(child_count: usize, roll: f64) -> usize {
    let span = child_count.saturating_sub(1);
    (roll * span as f64).floor() as usize + 1
}

/// Hide the default testimonial (child 1), then reveal one random child.
///
/// Mutates the display style of at most two children: index 1 is hidden
/// first, then the picked index is shown, so a pick of 1 nets out visible.
/// All other children keep their prior style.
///
/// Returns the revealed index, or `None` when the container is too small
/// for a child to exist at the picked index (N <= 1, including empty).
pub fn reveal_random(
    target: &mut impl RevealTarget,
    random: &mut impl RandomSource,
) -> Option<usize> {
    let idx = reveal_index(target.child_count(), random.next_f64());
    target.set_visible(1, false);
    target.set_visible(idx, true).then_some(idx)
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    /// Plays back a fixed sequence of rolls.
    struct Scripted {
        rolls: Vec<f64>,
        next: usize,
    }

    impl Scripted {
        fn new(rolls: &[f64]) -> Self {
            Self {
                rolls: rolls.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn next_f64(&mut self) -> f64 {
            let roll = self.rolls[self.next];
            self.next += 1;
            roll
        }
    }

    /// Seeded deterministic source for the distribution trial.
    struct Seeded(StdRng);

    impl RandomSource for Seeded {
        fn next_f64(&mut self) -> f64 {
            self.0.gen_range(0.0..1.0)
        }
    }

    /// In-memory stand-in for the DOM container.
    ///
    /// Children start with no inline display style (`None`); landed
    /// mutations are recorded in call order.
    struct FakeContainer {
        display: Vec<Option<&'static str>>,
        calls: Vec<(usize, bool)>,
    }

    impl FakeContainer {
        fn with_children(count: usize) -> Self {
            Self {
                display: vec![None; count],
                calls: Vec::new(),
            }
        }

        fn shown(&self) -> Vec<usize> {
            self.display
                .iter()
                .enumerate()
                .filter(|(_, style)| **style == Some("block"))
                .map(|(index, _)| index)
                .collect()
        }
    }

    impl RevealTarget for FakeContainer {
        fn child_count(&self) -> usize {
            self.display.len()
        }

        fn set_visible(&mut self, index: usize, visible: bool) -> bool {
            if index >= self.display.len() {
                return false;
            }
            self.display[index] = Some(if visible { "block" } else { "none" });
            self.calls.push((index, visible));
            true
        }
    }

    #[test]
    fn test_reveal_index_formula() {
        // 4 children: floor(0.5 * 3) + 1 = 2
        assert_eq!(reveal_index(4, 0.5), 2);
        // Bottom of the range is the default slot
        assert_eq!(reveal_index(4, 0.0), 1);
        // Top of the range stays closed at N-1
        assert_eq!(reveal_index(4, 0.999), 3);
        // Two children leave a single candidate
        assert_eq!(reveal_index(2, 0.0), 1);
        assert_eq!(reveal_index(2, 0.99), 1);
        // Degenerate containers collapse to 1
        assert_eq!(reveal_index(1, 0.5), 1);
        assert_eq!(reveal_index(0, 0.5), 1);
    }

    #[test]
    fn test_reveal_hides_default_and_shows_pick() {
        // [A, B, C, D] with roll 0.5 picks index 2 (C)
        let mut container = FakeContainer::with_children(4);
        let mut random = Scripted::new(&[0.5]);

        assert_eq!(reveal_random(&mut container, &mut random), Some(2));
        assert_eq!(container.display[1], Some("none"));
        assert_eq!(container.display[2], Some("block"));
        // A and D keep their prior style
        assert_eq!(container.display[0], None);
        assert_eq!(container.display[3], None);
    }

    #[test]
    fn test_pick_of_default_slot_nets_visible() {
        // Roll 0.0 picks index 1: hidden first, then shown again
        let mut container = FakeContainer::with_children(4);
        let mut random = Scripted::new(&[0.0]);

        assert_eq!(reveal_random(&mut container, &mut random), Some(1));
        assert_eq!(container.calls, vec![(1, false), (1, true)]);
        assert_eq!(container.display[1], Some("block"));
    }

    #[test]
    fn test_exactly_one_child_shown() {
        for roll in [0.0, 0.19, 0.4, 0.61, 0.83, 0.999] {
            let mut container = FakeContainer::with_children(6);
            let mut random = Scripted::new(&[roll]);

            let picked = reveal_random(&mut container, &mut random).unwrap();
            assert!((1..6).contains(&picked));
            assert_eq!(container.shown(), vec![picked]);
        }
    }

    #[test]
    fn test_single_child_container_is_untouched() {
        // Index 1 does not exist, so both steps no-op
        let mut container = FakeContainer::with_children(1);
        let mut random = Scripted::new(&[0.7]);

        assert_eq!(reveal_random(&mut container, &mut random), None);
        assert!(container.calls.is_empty());
        assert_eq!(container.display[0], None);
    }

    #[test]
    fn test_empty_container_is_untouched() {
        let mut container = FakeContainer::with_children(0);
        let mut random = Scripted::new(&[0.3]);

        assert_eq!(reveal_random(&mut container, &mut random), None);
        assert!(container.calls.is_empty());
    }

    #[test]
    fn test_two_children_always_pick_the_only_candidate() {
        for roll in [0.0, 0.5, 0.999] {
            let mut container = FakeContainer::with_children(2);
            let mut random = Scripted::new(&[roll]);

            assert_eq!(reveal_random(&mut container, &mut random), Some(1));
            assert_eq!(container.display[1], Some("block"));
        }
    }

    #[test]
    fn test_pick_distribution_is_roughly_uniform() {
        // Heading plus four testimonials: picks land in [1, 4],
        // expected ~2500 each over 10k trials
        let mut random = Seeded(StdRng::seed_from_u64(0x5eed));
        let mut counts = [0usize; 5];

        for _ in 0..10_000 {
            let mut container = FakeContainer::with_children(5);
            let picked = reveal_random(&mut container, &mut random).unwrap();
            counts[picked] += 1;
        }

        assert_eq!(counts[0], 0, "heading slot must never be picked");
        for (index, &count) in counts.iter().enumerate().skip(1) {
            assert!(
                (2200..=2800).contains(&count),
                "index {} picked {} times out of 10000: {:?}",
                index,
                count,
                counts
            );
        }
    }
}
