//! Readers for the tab-separated tables the position selectors consume.
//!
//! Both formats are headerless TSVs with fixed column layouts, so each is
//! described by its column names and data types and read through the same
//! Polars CSV machinery.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::error::Result;
use crate::utils::schema_from_arrays;

/// Supported input table formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableFormat {
    /// Two-column chromosome size table (`chrom<TAB>size`).
    ChromSizes,
    /// ENCODE narrowPeak peak calls (BED6+4).
    NarrowPeak,
}

impl TableFormat {
    /// Returns column names for this table format.
    pub const fn col_names(&self) -> &[&'static str] {
        match self {
            Self::ChromSizes => &["chrom", "size"],
            Self::NarrowPeak => {
                &[
                    "chrom", "start", "end", "name", "score", "strand", "signal",
                    "p", "q", "summit",
                ]
            },
        }
    }

    /// Returns data types for each column.
    pub const fn col_types(&self) -> &[DataType] {
        match self {
            Self::ChromSizes => {
                &[
                    DataType::String, // chrom
                    DataType::UInt32, // size
                ]
            },
            Self::NarrowPeak => {
                &[
                    DataType::String,  // chrom
                    DataType::UInt32,  // start
                    DataType::UInt32,  // end
                    DataType::String,  // name
                    DataType::UInt32,  // score
                    DataType::String,  // strand
                    DataType::Float32, // signal
                    DataType::Float32, // p
                    DataType::Float32, // q
                    DataType::UInt32,  // summit
                ]
            },
        }
    }

    /// Creates a Polars schema for this format.
    pub fn schema(&self) -> Schema {
        schema_from_arrays(self.col_names(), self.col_types())
    }

    /// Creates CSV read options for this format.
    pub fn read_options(&self) -> CsvReadOptions {
        CsvReadOptions::default()
            .with_has_header(false)
            .with_schema(Some(SchemaRef::from(self.schema())))
            .with_parse_options(
                CsvParseOptions::default()
                    .with_separator(b'\t')
                    .with_try_parse_dates(false),
            )
    }

    /// Reads a table of this format into a `DataFrame`.
    pub fn read<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<DataFrame> {
        let handle = File::open(path.as_ref())?;
        let df = self
            .read_options()
            .into_reader_with_file_handle(handle)
            .finish()?;
        Ok(df)
    }
}

/// Reads a `chrom.sizes` table.
pub fn read_chrom_sizes<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    TableFormat::ChromSizes.read(path)
}

/// Reads an ENCODE narrowPeak file. Only `chrom`, `start` and `summit`
/// are consumed by [`crate::positions::peak_positions`].
pub fn read_narrow_peak<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    TableFormat::NarrowPeak.read(path)
}
