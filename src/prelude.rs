pub use crate::data_structs::typedef::{
    PosType,
    SignalType,
};
pub use crate::data_structs::{
    ChromSizes,
    Strand,
    TaskDescriptor,
    TaskMap,
    CHROM_COL,
    POS_COL,
    SIZE_COL,
};
pub use crate::encode::{
    fix_sequence_length,
    one_hot_encode,
    reverse_complement_of_profiles,
    reverse_complement_of_sequences,
};
pub use crate::error::{
    PrepError,
    Result,
};
pub use crate::io::{
    read_chrom_sizes,
    read_narrow_peak,
    TableFormat,
};
pub use crate::positions::{
    chrom_positions,
    peak_positions,
    SamplingMode,
};
