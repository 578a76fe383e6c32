use ndarray::Array3;
use once_cell::sync::Lazy;
use rayon::prelude::*;

use crate::data_structs::typedef::SignalType;
use crate::error::{
    PrepError,
    Result,
};

/// Byte-indexed encoder rows. A/C/G/T (either case) map to the unit
/// vectors e0..e3; every other byte, N and IUPAC ambiguity codes
/// included, maps to the zero row. Indexing the table replaces
/// per-character branching in the batch loop.
static ENCODER: Lazy<[[SignalType; 4]; 256]> = Lazy::new(|| {
    let mut table = [[0.0; 4]; 256];
    for (column, base) in [b'A', b'C', b'G', b'T'].into_iter().enumerate() {
        table[base as usize][column] = 1.0;
        table[base.to_ascii_lowercase() as usize][column] = 1.0;
    }
    table
});

/// Pads `sequence` with `N` on the right or truncates it from the right
/// so the result is exactly `length` characters. Total function, no
/// error cases.
pub fn fix_sequence_length(
    sequence: &str,
    length: usize,
) -> String {
    let mut fixed = String::with_capacity(length);
    let mut taken = 0;
    for ch in sequence.chars().take(length) {
        fixed.push(ch);
        taken += 1;
    }
    for _ in taken..length {
        fixed.push('N');
    }
    fixed
}

/// One-hot encoding of a list of DNA sequences.
///
/// Each sequence is first fixed to `seq_length` via
/// [`fix_sequence_length`], then encoded row-by-row through [`ENCODER`].
/// Returns a tensor of shape `(sequences.len(), seq_length, 4)`, or
/// [`PrepError::EmptyInput`] for an empty list.
pub fn one_hot_encode<S>(
    sequences: &[S],
    seq_length: usize,
) -> Result<Array3<SignalType>>
where
    S: AsRef<str> + Sync, {
    if sequences.is_empty() {
        return Err(PrepError::EmptyInput("sequences"));
    }

    let flat: Vec<SignalType> = sequences
        .par_iter()
        .flat_map_iter(|sequence| {
            let fixed = fix_sequence_length(sequence.as_ref(), seq_length);
            fixed
                .chars()
                .flat_map(|ch| {
                    // non-ASCII characters share the zero row at index 0
                    let index = if ch.is_ascii() { ch as usize } else { 0 };
                    ENCODER[index]
                })
                .collect::<Vec<_>>()
        })
        .collect();

    Ok(Array3::from_shape_vec(
        (sequences.len(), seq_length, 4),
        flat,
    )?)
}
