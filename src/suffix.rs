use rand::Rng;

/// Letters allowed on a plate. `I`, `O` and `Q` are left out because they are
/// too easily confused with digits.
pub const PLATE_LETTERS: &[u8] = b"ABCDEFGHJKLMNPRSTUVWXYZ";

pub const SUFFIX_LEN: usize = 3;

/// How the three suffix letters are drawn from [`PLATE_LETTERS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuffixMode {
    /// A single random start index followed by the next two letters, e.g.
    /// `DEF` or `XYZ`. Only `PLATE_LETTERS.len() - 2` suffixes exist.
    #[default]
    Consecutive,
    /// Three independent draws, e.g. `ZAK`.
    Independent,
}

pub fn generate_suffix<R: Rng + ?Sized>(rng: &mut R, mode: SuffixMode) -> String {
    match mode {
        SuffixMode::Consecutive => {
            // The last valid start index still leaves room for the full window
            let start = rng.gen_range(0..=PLATE_LETTERS.len() - SUFFIX_LEN);
            PLATE_LETTERS[start..start + SUFFIX_LEN]
                .iter()
                .map(|&b| b as char)
                .collect()
        }
        SuffixMode::Independent => (0..SUFFIX_LEN)
            .map(|_| PLATE_LETTERS[rng.gen_range(0..PLATE_LETTERS.len())] as char)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_plate_letters() {
        assert_eq!(PLATE_LETTERS.len(), 23);
        assert!(!PLATE_LETTERS.contains(&b'I'));
        assert!(!PLATE_LETTERS.contains(&b'O'));
        assert!(!PLATE_LETTERS.contains(&b'Q'));
        assert!(PLATE_LETTERS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_consecutive_suffix() {
        let mut rng = StepRng::new(0, 0);
        insta::assert_snapshot!(generate_suffix(&mut rng, SuffixMode::Consecutive), @"ABC");

        let windows: Vec<String> = PLATE_LETTERS
            .windows(SUFFIX_LEN)
            .map(|w| String::from_utf8_lossy(w).into_owned())
            .collect();

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let suffix = generate_suffix(&mut rng, SuffixMode::Consecutive);
            assert!(windows.contains(&suffix), "{suffix} is not a consecutive window");
        }
    }

    #[test]
    fn test_consecutive_suffix_reaches_last_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen_last = (0..10_000)
            .map(|_| generate_suffix(&mut rng, SuffixMode::Consecutive))
            .any(|suffix| suffix == "XYZ");
        assert!(seen_last);
    }

    #[test]
    fn test_independent_suffix() {
        let mut rng = StepRng::new(0, 0);
        insta::assert_snapshot!(generate_suffix(&mut rng, SuffixMode::Independent), @"AAA");

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let suffix = generate_suffix(&mut rng, SuffixMode::Independent);
            assert_eq!(suffix.len(), SUFFIX_LEN);
            assert!(suffix.bytes().all(|b| PLATE_LETTERS.contains(&b)), "{suffix}");
        }
    }
}
