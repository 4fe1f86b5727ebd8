//! Base validation and conversion functions for DNA/RNA sequences

/// Check whether a base belongs to the DNA alphabet (upper-case only)
pub fn is_dna_base(base: char) -> bool {
    matches!(base, 'A' | 'T' | 'G' | 'C')
}

/// Locate the first character that is not a DNA base, with its position
pub fn first_invalid_base(dna: &str) -> Option<(usize, char)> {
    dna.chars()
        .enumerate()
        .find(|&(_, base)| !is_dna_base(base))
}

/// Validate an upper-cased DNA sequence. The empty sequence is valid.
pub fn is_valid_dna(dna: &str) -> bool {
    first_invalid_base(dna).is_none()
}

/// Convert a DNA base to its RNA counterpart
pub fn dna_base_to_rna(base: char) -> char {
    match base {
        'T' => 'U',
        other => other,
    }
}

/// Transcribe a coding-strand DNA sequence into RNA
pub fn dna_to_rna(dna: &str) -> String {
    dna.chars().map(dna_base_to_rna).collect()
}
