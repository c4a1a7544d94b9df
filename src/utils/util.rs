//! # Utility Module
//!
//! Small helpers shared by the generator and the border merge.
//!
//! ## `band_len`
//!
//! A border band starts at a multiple of the section size and is clipped at
//! the grid edge. The result is never zero, so it can always be used as the
//! upper end of a random range.
//!
//! ## `derive_seed`
//!
//! Every section task and the merge step draw from their own RNG stream.
//! Streams are derived from one base seed so a seeded run reproduces the
//! same maze no matter how the tasks were scheduled.

/// Length of the band starting at `start`, at most `section_size`, clipped
/// to `limit` and clamped to at least 1.
///
/// # Examples
///
/// ```
/// use sectored_maze::utils::util::band_len;
///
/// assert_eq!(band_len(0, 5, 12), 5);
/// assert_eq!(band_len(10, 5, 12), 2);
/// assert_eq!(band_len(12, 5, 12), 1);
/// ```
pub fn band_len(start: usize, section_size: usize, limit: usize) -> usize {
    section_size.min(limit.saturating_sub(start)).max(1)
}

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 finaliser.
fn mix64(value: u64) -> u64 {
    let mut z = value.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Seed for stream `stream` of a run seeded with `base`.
pub fn derive_seed(base: u64, stream: u64) -> u64 {
    mix64(base ^ mix64(stream))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_len_full_band() {
        assert_eq!(band_len(5, 5, 20), 5);
    }

    #[test]
    fn test_band_len_clipped_at_edge() {
        assert_eq!(band_len(15, 5, 17), 2);
    }

    #[test]
    fn test_band_len_never_zero() {
        assert_eq!(band_len(17, 5, 17), 1);
        assert_eq!(band_len(30, 5, 17), 1);
        assert_eq!(band_len(0, 0, 17), 1);
    }

    #[test]
    fn test_derive_seed_is_stable() {
        assert_eq!(derive_seed(42, 3), derive_seed(42, 3));
    }

    #[test]
    fn test_derive_seed_separates_streams() {
        let seeds: Vec<u64> = (0..64).map(|stream| derive_seed(42, stream)).collect();
        for (i, a) in seeds.iter().enumerate() {
            for b in &seeds[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_ne!(derive_seed(1, 0), derive_seed(2, 0));
    }
}
