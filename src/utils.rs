//! Integer rounding helpers for window-sizing logic, plus small Polars
//! schema plumbing shared by the table readers.

use itertools::Itertools;
use polars::prelude::*;

/// Creates a schema from separate arrays of names and data types.
pub(crate) fn schema_from_arrays(
    names: &[&str],
    dtypes: &[DataType],
) -> Schema {
    Schema::from_iter(names.iter().cloned().map_into().zip(dtypes.iter().cloned()))
}

/// Largest multiple of `multiple` not exceeding `x`, or the smallest
/// multiple of `multiple` at least `x` when `smallest` is set.
pub fn round_to_multiple(
    x: u64,
    multiple: u64,
    smallest: bool,
) -> u64 {
    let rem = x % multiple;
    if rem == 0 {
        x
    }
    else if smallest {
        x - rem + multiple
    }
    else {
        x - rem
    }
}

/// Largest multiple of `multiple` not exceeding `x`, computed with a
/// rounding mask. The mask is only valid for power-of-two multipliers;
/// use [`round_to_multiple`] for arbitrary ones.
pub fn round_to_pow2_multiple(
    x: u64,
    multiple: u64,
) -> u64 {
    debug_assert!(
        multiple.is_power_of_two(),
        "rounding mask requires a power-of-two multiple, got {multiple}"
    );
    let rounded = (x + multiple / 2) & !(multiple - 1);
    if rounded > x {
        rounded - multiple
    }
    else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(100, 50, false, 100)]
    #[case(120, 50, false, 100)]
    #[case(120, 50, true, 150)]
    #[case(0, 50, false, 0)]
    #[case(49, 50, true, 50)]
    fn test_round_to_multiple(
        #[case] x: u64,
        #[case] multiple: u64,
        #[case] smallest: bool,
        #[case] expected: u64,
    ) {
        assert_eq!(round_to_multiple(x, multiple, smallest), expected);
    }

    #[rstest]
    #[case(10, 4, 8)]
    #[case(16, 4, 16)]
    #[case(7, 2, 6)]
    #[case(1023, 256, 768)]
    fn test_round_to_pow2_multiple(
        #[case] x: u64,
        #[case] multiple: u64,
        #[case] expected: u64,
    ) {
        assert_eq!(round_to_pow2_multiple(x, multiple), expected);
    }

    /// The two rounding functions agree wherever the mask precondition
    /// holds.
    #[test]
    fn test_rounding_agreement_on_powers_of_two() {
        for multiple in [1u64, 2, 4, 8, 64] {
            for x in 0..200 {
                assert_eq!(
                    round_to_pow2_multiple(x, multiple),
                    round_to_multiple(x, multiple, false),
                    "x={x} multiple={multiple}"
                );
            }
        }
    }
}
