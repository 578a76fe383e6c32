//! Coordinate window selectors.
//!
//! Both selectors produce a two-column `DataFrame` (`chrom`, `pos`) whose
//! every row satisfies `pos - flank >= 0` and `pos + flank <= chrom_size`,
//! so the downstream windowing step can extract `2 * flank` of sequence
//! and signal around each position without touching a chromosome edge.

mod peaks;
mod sampler;

pub use peaks::peak_positions;
pub use sampler::{
    chrom_positions,
    SamplingMode,
};
