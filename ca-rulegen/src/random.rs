use crate::Rule;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use std::collections::BTreeSet;

impl Distribution<Rule> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rule {
        let num_born = rng.gen_range(0..=8);
        let num_survive = rng.gen_range(0..=8);

        let born = draw_digits(rng, num_born);
        let survive = draw_digits(rng, num_survive);

        Rule::from_digit_sets(&born, &survive)
    }
}

/// Perform `count` draws, each uniform over `1..=8`, and keep a digit the
/// first time it is drawn.
///
/// Duplicate draws are discarded rather than redrawn, so the set may end up
/// with fewer than `count` digits.
fn draw_digits<R: Rng + ?Sized>(rng: &mut R, count: u32) -> BTreeSet<u8> {
    let mut digits = BTreeSet::new();
    for _ in 0..count {
        digits.insert(rng.gen_range(1..=8));
    }
    digits
}

impl Rule {
    /// Generate a random rule.
    ///
    /// The number of birth draws and the number of survival draws are each
    /// uniform over `0..=8`. These are counts of draws, not of distinct
    /// digits: duplicate draws within a half are discarded, so either half
    /// may end up with fewer digits than draws, including none (`"b/s"` is a
    /// valid outcome). Digits are restricted to `1`–`8`; a generated rule
    /// never contains `0`.
    ///
    /// This cannot fail, and is deterministic for a seeded `rng`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ca_rulegen::Rule;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(2020);
    /// let rule = Rule::random(&mut rng);
    ///
    /// let mut rng = StdRng::seed_from_u64(2020);
    /// assert_eq!(Rule::random(&mut rng), rule);
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    /// Split a canonical rule string into its born and survive digit halves.
    fn halves(rule: &Rule) -> (String, String) {
        let (born, survive) = rule.as_str().split_once('/').unwrap();
        (
            born.strip_prefix('b').unwrap().to_string(),
            survive.strip_prefix('s').unwrap().to_string(),
        )
    }

    fn is_canonical(digits: &str) -> bool {
        let bytes = digits.as_bytes();
        bytes.iter().all(|&b| (b'1'..=b'8').contains(&b))
            && bytes.windows(2).all(|pair| pair[0] < pair[1])
    }

    #[test]
    fn test_generated_rules_are_canonical() {
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..1000 {
            let rule = Rule::random(&mut rng);
            let (born, survive) = halves(&rule);

            assert!(is_canonical(&born), "bad rule: {rule}");
            assert!(is_canonical(&survive), "bad rule: {rule}");
            assert!(born.len() <= 8);
            assert!(survive.len() <= 8);
        }
    }

    #[test]
    fn test_generated_rules_never_contain_zero() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..1000 {
            assert!(!Rule::random(&mut rng).as_str().contains('0'));
        }
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let mut rng = StdRng::seed_from_u64(0xca11ab1e);
        let first: Vec<Rule> = (0..16).map(|_| Rule::random(&mut rng)).collect();

        let mut rng = StdRng::seed_from_u64(0xca11ab1e);
        let second: Vec<Rule> = (0..16).map(|_| Rule::random(&mut rng)).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_halves_are_reachable() {
        // With 1000 samples, a draw count of 0 for some half is all but
        // certain.
        let mut rng = StdRng::seed_from_u64(2);
        let empty_half = (0..1000).map(|_| Rule::random(&mut rng)).any(|rule| {
            let (born, survive) = halves(&rule);
            born.is_empty() || survive.is_empty()
        });

        assert!(empty_half);
    }
}
