//! Tensor encoding and reverse-complement augmentation.
//!
//! [`onehot`] turns lists of DNA sequences into `(N, seq_length, 4)`
//! tensors; [`revcomp`] produces the reverse-complement view of sequence
//! lists and of paired signal profile tensors.

pub mod onehot;
pub mod revcomp;

pub use onehot::{
    fix_sequence_length,
    one_hot_encode,
};
pub use revcomp::{
    reverse_complement_of_profiles,
    reverse_complement_of_sequences,
};
