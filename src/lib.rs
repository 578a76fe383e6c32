//! # seqprep
//!
//! `seqprep` prepares training examples for genomic sequence-to-signal
//! machine-learning models. Given a genome's chromosome sizes and a set of
//! per-task peak calls, it selects coordinate windows that stay within
//! chromosome bounds once a symmetric flank is added, turns raw DNA
//! sequence strings into fixed-length one-hot tensors, and produces the
//! reverse-complement view of sequences and their paired signal profiles
//! for data augmentation.
//!
//! ## Key Features
//!
//! * **Window selection**: positions tiled at regular intervals across
//!   chromosomes or drawn uniformly at random
//!   ([`chrom_positions`](positions::chrom_positions)), and positions
//!   centered on peak-caller summits across multiple tasks
//!   ([`peak_positions`](positions::peak_positions)). Both clip to the
//!   valid flanked range and hand off a two-column Polars `DataFrame`.
//! * **Tensor encoding**: batched one-hot encoding of DNA sequences into
//!   `(N, seq_length, 4)` [`ndarray`] tensors with a byte-indexed lookup
//!   table, padding or truncating each sequence to a fixed length first.
//! * **Strand-aware augmentation**: reverse complements of sequence lists
//!   and of stranded or unstranded signal profile tensors, with the
//!   positive/negative channel pairing preserved under the flip.
//!
//! All operations are pure, synchronous transformations: inputs are
//! borrowed, outputs are newly constructed, and independent calls can run
//! in parallel freely.
//!
//! ## Structure
//!
//! * [`data_structs`]: chromosome size table ([`ChromSizes`](data_structs::ChromSizes)),
//!   task descriptors and strand enum.
//! * [`positions`]: the coordinate window selectors.
//! * [`encode`]: one-hot encoding and reverse-complement transforms.
//! * [`io`]: readers for the tab-separated chromosome-size and ENCODE
//!   narrowPeak tables the selectors consume.
//! * [`utils`]: integer rounding helpers used by window-sizing logic.
//!
//! ## Usage
//!
//! ```no_run
//! use rand::thread_rng;
//! use seqprep::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let sizes = ChromSizes::try_from_frame(&read_chrom_sizes("hg38.chrom.sizes")?)?;
//!     let chroms = vec!["chr1".to_string(), "chr2".to_string()];
//!
//!     // Tile both chromosomes at 50 bp intervals, keeping a 500 bp flank
//!     // inside the chromosome ends.
//!     let windows = chrom_positions(
//!         &chroms,
//!         &sizes,
//!         500,
//!         SamplingMode::Sequential { step: 50 },
//!         None,
//!         &mut thread_rng(),
//!     )?;
//!     println!("{} candidate windows", windows.height());
//!
//!     // Encode the extracted sequences (windowing is external).
//!     let seqs = vec!["ACGTACGT".to_string(); 4];
//!     let onehot = one_hot_encode(&seqs, 8)?;
//!     let augmented = reverse_complement_of_sequences(&seqs);
//!     assert_eq!(onehot.dim(), (4, 8, 4));
//!     assert_eq!(augmented.len(), 4);
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod encode;
pub mod error;
pub mod io;
pub mod positions;
pub mod prelude;
pub mod utils;

#[allow(unused_imports)]
use prelude::*;
