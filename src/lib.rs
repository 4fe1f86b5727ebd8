//! ribocode - DNA to RNA converter and codon translator
//!
//! This library validates DNA sequences, transcribes them into RNA and
//! translates the RNA codon by codon using the standard genetic code,
//! stopping at the first stop codon.

pub mod app;
pub mod error;
pub mod logging;
pub mod sequence;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use error::RibocodeError;
pub use sequence::{is_valid_dna, dna_to_rna, translate_rna, CodonTable, Label};
