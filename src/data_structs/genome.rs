use hashbrown::HashMap;
use polars::prelude::*;

use crate::data_structs::typedef::PosType;
use crate::error::{
    PrepError,
    Result,
};

/// Chromosome name column of coordinate and size tables.
pub const CHROM_COL: &str = "chrom";
/// Position column of coordinate tables.
pub const POS_COL: &str = "pos";
/// Size column of the chromosome size table.
pub const SIZE_COL: &str = "size";

/// Chromosome size table.
///
/// Every chromosome referenced by a selector must have an entry here;
/// a lookup miss is a schema violation, not a skippable condition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChromSizes {
    sizes: HashMap<String, PosType>,
}

impl ChromSizes {
    /// Builds the table from a two-column `DataFrame` with [`CHROM_COL`]
    /// and [`SIZE_COL`] columns (see [`crate::io::read_chrom_sizes`]).
    pub fn try_from_frame(df: &DataFrame) -> Result<Self> {
        let chrom = df
            .column(CHROM_COL)
            .map_err(|_| {
                PrepError::MissingColumn {
                    column: CHROM_COL,
                    table:  "chrom_sizes",
                }
            })?
            .as_materialized_series()
            .str()?
            .clone();
        let size = df
            .column(SIZE_COL)
            .map_err(|_| {
                PrepError::MissingColumn {
                    column: SIZE_COL,
                    table:  "chrom_sizes",
                }
            })?
            .as_materialized_series()
            .cast(&DataType::UInt32)?;

        let sizes = chrom
            .into_iter()
            .zip(size.u32()?.into_iter())
            .filter_map(|(chrom, size)| Some((chrom?.to_owned(), size?)))
            .collect();
        Ok(Self { sizes })
    }

    /// Size of `chrom`, or [`PrepError::UnknownChromosome`].
    pub fn get(
        &self,
        chrom: &str,
    ) -> Result<PosType> {
        self.sizes
            .get(chrom)
            .copied()
            .ok_or_else(|| PrepError::UnknownChromosome(chrom.to_owned()))
    }

    pub fn contains(
        &self,
        chrom: &str,
    ) -> bool {
        self.sizes.contains_key(chrom)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, PosType)> {
        self.sizes.iter().map(|(chrom, size)| (chrom.as_str(), *size))
    }
}

impl<S: Into<String>> FromIterator<(S, PosType)> for ChromSizes {
    fn from_iter<T: IntoIterator<Item = (S, PosType)>>(iter: T) -> Self {
        Self {
            sizes: iter
                .into_iter()
                .map(|(chrom, size)| (chrom.into(), size))
                .collect(),
        }
    }
}
