use polars::prelude::*;
use rand::Rng;

use crate::data_structs::{
    ChromSizes,
    PosType,
    CHROM_COL,
    POS_COL,
};
use crate::error::{
    PrepError,
    Result,
};

/// How positions are drawn from each chromosome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingMode {
    /// Tiled from the start of the valid range at `step` intervals.
    Sequential { step: PosType },
    /// Uniform draws with replacement from the valid range.
    Random,
}

/// Chromosome positions spanning each chromosome at regular intervals or
/// at random locations.
///
/// The valid range on a chromosome is `[flank, chrom_size - flank]`;
/// a chromosome too short for the flank contributes zero rows. With
/// `num_positions == None`, sequential mode tiles the whole valid range;
/// random mode requires an explicit count, since its cardinality is
/// otherwise undefined. Output rows are grouped per chromosome in the
/// order chromosomes were supplied, ascending within a chromosome in
/// sequential mode.
pub fn chrom_positions<R: Rng + ?Sized>(
    chroms: &[String],
    chrom_sizes: &ChromSizes,
    flank: PosType,
    mode: SamplingMode,
    num_positions: Option<usize>,
    rng: &mut R,
) -> Result<DataFrame> {
    if matches!(mode, SamplingMode::Random) && num_positions.is_none() {
        return Err(PrepError::Configuration(
            "'Random' sampling requires an explicit 'num_positions'".to_owned(),
        ));
    }
    if matches!(mode, SamplingMode::Sequential { step: 0 }) {
        return Err(PrepError::Configuration(
            "'Sequential' sampling requires a non-zero 'step'".to_owned(),
        ));
    }

    let mut out_chroms: Vec<&str> = Vec::new();
    let mut out_positions: Vec<PosType> = Vec::new();

    for chrom in chroms {
        let chrom_size = chrom_sizes.get(chrom)? as u64;

        // half-open valid range: the last admissible position is
        // chrom_size - flank
        let start = flank as u64;
        let end = (chrom_size + 1).saturating_sub(flank as u64);
        if end <= start {
            continue;
        }

        let before = out_positions.len();
        match mode {
            SamplingMode::Random => {
                // cardinality validated at entry
                let count = num_positions.unwrap_or(0);
                out_positions.extend(
                    (0..count).map(|_| rng.gen_range(start..end) as PosType),
                );
            },
            SamplingMode::Sequential { step } => {
                let mut stop = end;
                if let Some(count) = num_positions {
                    stop = stop.min(start + step as u64 * count as u64);
                }
                out_positions.extend(
                    (start..stop)
                        .step_by(step as usize)
                        .map(|pos| pos as PosType),
                );
            },
        }
        out_chroms.extend(
            std::iter::repeat(chrom.as_str())
                .take(out_positions.len() - before),
        );
    }

    Ok(df!(
        CHROM_COL => out_chroms,
        POS_COL => out_positions,
    )?)
}
