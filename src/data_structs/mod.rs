//! Core data structures shared by the window selectors and encoders.
//!
//! Key components:
//!
//! - [`genome`]: the chromosome size table ([`ChromSizes`]) every selector
//!   consults for bounds checks, plus the column-name constants of the
//!   two-column coordinate tables the crate hands off.
//! - [`task`]: the [`TaskDescriptor`] describing one strand/modality of an
//!   assay (its peak calls and optional signal/control handles), the
//!   ordered [`TaskMap`], and the [`Strand`] enum.
//! - [`typedef`]: aliases for genomic position and signal value types.

pub mod genome;
pub mod task;
pub mod typedef;

pub use genome::{
    ChromSizes,
    CHROM_COL,
    POS_COL,
    SIZE_COL,
};
pub use task::{
    Strand,
    TaskDescriptor,
    TaskMap,
};
pub use typedef::{
    PosType,
    SignalType,
};
