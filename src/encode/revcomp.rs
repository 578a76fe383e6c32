use ndarray::{
    s,
    Array3,
    ArrayView3,
};

use crate::data_structs::typedef::SignalType;
use crate::error::{
    PrepError,
    Result,
};

/// Watson-Crick complement. Only the four upper-case bases substitute;
/// N, ambiguity codes and anything unrecognized pass through unchanged.
fn complement(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'C' => 'G',
        'G' => 'C',
        other => other,
    }
}

/// Reverse complement of a list of DNA sequences.
///
/// Each string is complemented base-by-base, then reversed end-to-end.
/// An empty input list is reported but not fatal: callers batching many
/// chromosomes decide whether to abort or skip.
pub fn reverse_complement_of_sequences<S: AsRef<str>>(
    sequences: &[S]
) -> Vec<String> {
    if sequences.is_empty() {
        log::warn!("'sequences' is empty");
    }
    sequences
        .iter()
        .map(|sequence| sequence.as_ref().chars().rev().map(complement).collect())
        .collect()
}

/// Reverse complement of a batch of signal profiles.
///
/// `profiles` has shape `(num_examples, seq_length, num_channels)`. For
/// stranded profiles the channels are consecutive (+, -) pairs per assay:
/// the view is reshaped to `(num_examples, seq_length, num_assays, 2)`
/// and flipped along both the position axis and the strand-pair axis, so
/// the signal order mirrors the reverse-complemented window and each
/// physical strand channel swaps its read direction. Unstranded profiles
/// flip along the position axis only.
pub fn reverse_complement_of_profiles(
    profiles: ArrayView3<SignalType>,
    stranded: bool,
) -> Result<Array3<SignalType>> {
    let (num_examples, seq_length, num_channels) = profiles.dim();

    if stranded {
        if num_channels % 2 != 0 {
            return Err(PrepError::UnevenStrandChannels(num_channels));
        }
        let paired = profiles.to_shape((
            num_examples,
            seq_length,
            num_channels / 2,
            2,
        ))?;
        let flipped = paired
            .slice(s![.., ..;-1, .., ..;-1])
            .as_standard_layout()
            .to_owned();
        Ok(flipped.into_shape_with_order((
            num_examples,
            seq_length,
            num_channels,
        ))?)
    }
    else {
        Ok(profiles.slice(s![.., ..;-1, ..]).to_owned())
    }
}

#[cfg(test)]
mod tests {
    use ndarray::Array3;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("ACGTN", "NACGT")]
    #[case("AAAA", "TTTT")]
    #[case("", "")]
    fn test_reverse_complement_of_sequences(
        #[case] sequence: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(
            reverse_complement_of_sequences(&[sequence]),
            vec![expected.to_string()]
        );
    }

    #[test]
    fn test_reverse_complement_is_involution() {
        let sequences = vec!["ACGTTGCA".to_string(), "GGGTTTAC".to_string()];
        let twice = reverse_complement_of_sequences(&reverse_complement_of_sequences(
            &sequences,
        ));
        assert_eq!(twice, sequences);
    }

    #[test]
    fn test_empty_sequence_list() {
        assert!(reverse_complement_of_sequences::<String>(&[]).is_empty());
    }

    fn example_profile(
        seq_length: usize,
        num_channels: usize,
    ) -> Array3<f32> {
        // distinct value per (position, channel) cell
        Array3::from_shape_fn((1, seq_length, num_channels), |(_, pos, ch)| {
            (pos * num_channels + ch) as f32
        })
    }

    #[test]
    fn test_stranded_round_trip() {
        let profile = example_profile(8, 2);
        let once = reverse_complement_of_profiles(profile.view(), true).unwrap();
        let twice = reverse_complement_of_profiles(once.view(), true).unwrap();
        assert_eq!(twice, profile);
        assert_ne!(once, profile);
    }

    #[test]
    fn test_stranded_swaps_strand_pairs_and_positions() {
        let profile = example_profile(4, 2);
        let flipped =
            reverse_complement_of_profiles(profile.view(), true).unwrap();
        for pos in 0..4 {
            // plus channel now carries the minus signal of the mirrored
            // position and vice versa
            assert_eq!(flipped[[0, pos, 0]], profile[[0, 3 - pos, 1]]);
            assert_eq!(flipped[[0, pos, 1]], profile[[0, 3 - pos, 0]]);
        }
    }

    #[test]
    fn test_stranded_multiple_assays_pair_locally() {
        let profile = example_profile(3, 4);
        let flipped =
            reverse_complement_of_profiles(profile.view(), true).unwrap();
        for pos in 0..3 {
            assert_eq!(flipped[[0, pos, 0]], profile[[0, 2 - pos, 1]]);
            assert_eq!(flipped[[0, pos, 1]], profile[[0, 2 - pos, 0]]);
            assert_eq!(flipped[[0, pos, 2]], profile[[0, 2 - pos, 3]]);
            assert_eq!(flipped[[0, pos, 3]], profile[[0, 2 - pos, 2]]);
        }
    }

    #[test]
    fn test_unstranded_reverses_positions_only() {
        let profile = example_profile(5, 3);
        let flipped =
            reverse_complement_of_profiles(profile.view(), false).unwrap();
        assert_eq!(flipped.dim(), (1, 5, 3));
        for pos in 0..5 {
            for ch in 0..3 {
                assert_eq!(flipped[[0, pos, ch]], profile[[0, 4 - pos, ch]]);
            }
        }
    }

    #[test]
    fn test_stranded_rejects_odd_channel_count() {
        let profile = example_profile(4, 3);
        let err =
            reverse_complement_of_profiles(profile.view(), true).unwrap_err();
        assert!(matches!(err, PrepError::UnevenStrandChannels(3)));
    }
}
