/// Genomic coordinate type. Every assembled chromosome fits in 32 bits.
pub type PosType = u32;

/// Element type of one-hot and signal profile tensors.
pub type SignalType = f32;
