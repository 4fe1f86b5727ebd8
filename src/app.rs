use log::{debug, info, trace, warn};

use crate::error::RibocodeError;
use crate::sequence::{dna_to_rna, first_invalid_base, translate_rna, Label};
use crate::ui::{format_one_letter, format_protein, format_protein_colored};

/// State of a single DNA → RNA → protein run
pub struct App {
    pub input: String,
    pub mrna: String,
    pub amino_acids: Vec<Label>,
    pub separator: String,
    pub one_letter: bool,
    pub colored: bool,
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

impl App {
    pub fn new() -> App {
        debug!("Creating new App instance");
        App {
            input: String::new(),
            mrna: String::new(),
            amino_acids: Vec::new(),
            separator: "-".to_string(),
            one_letter: false,
            colored: false,
        }
    }

    /// Normalize raw user input, validate it as DNA and translate it.
    /// On failure the previous sequence is left untouched.
    pub fn load_sequence(&mut self, raw: &str) -> Result<(), RibocodeError> {
        let dna = raw.trim().to_uppercase();
        trace!("Loading sequence of {} bases", dna.chars().count());

        if let Some((position, base)) = first_invalid_base(&dna) {
            warn!("Rejected DNA input: invalid base '{base}' at position {position}");
            return Err(RibocodeError::InvalidBase { base, position });
        }

        self.input = dna;
        self.update_sequences();
        Ok(())
    }

    fn update_sequences(&mut self) {
        self.mrna = dna_to_rna(&self.input);
        self.amino_acids = translate_rna(&self.mrna);

        let partial = self.get_current_partial_codon();
        if !partial.is_empty() && !self.amino_acids.iter().any(Label::is_stop) {
            debug!("Dropping trailing partial codon '{partial}'");
        }

        let invalid = self.amino_acids.iter().filter(|l| **l == Label::Invalid).count();
        if invalid > 0 {
            warn!("{invalid} codon(s) not found in the codon table");
        }

        info!(
            "Translated {} bases into {} codon label(s)",
            self.mrna.len(),
            self.amino_acids.len()
        );
    }

    /// Bases after the last complete codon of the RNA sequence
    pub fn get_current_partial_codon(&self) -> String {
        let codon_start = (self.mrna.len() / 3) * 3;
        self.mrna[codon_start..].to_string()
    }

    pub fn rna_line(&self) -> String {
        format!("RNA Sequence: {}", self.mrna)
    }

    pub fn protein_line(&self) -> String {
        let protein = if self.one_letter {
            format_one_letter(&self.amino_acids)
        } else if self.colored {
            format_protein_colored(&self.amino_acids, &self.separator)
        } else {
            format_protein(&self.amino_acids, &self.separator)
        };
        format!("Amino Acid Sequence: {protein}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_sequence_normalizes_input() {
        let mut app = App::new();
        app.load_sequence(" atgttttaa\n").unwrap();

        assert_eq!(app.input, "ATGTTTTAA");
        assert_eq!(app.mrna, "AUGUUUUAA");
        assert_eq!(app.amino_acids.len(), 3);
        assert_eq!(app.rna_line(), "RNA Sequence: AUGUUUUAA");
        assert_eq!(app.protein_line(), "Amino Acid Sequence: Met (Start)-Phe-STOP");
    }

    #[test]
    fn test_invalid_sequence_is_rejected() {
        let mut app = App::new();
        app.load_sequence("ATG").unwrap();

        let err = app.load_sequence("ATGXCC").unwrap_err();
        assert!(matches!(err, RibocodeError::InvalidBase { base: 'X', position: 3 }));
        assert_eq!(err.to_string(), "invalid base 'X' at position 3");
        assert_eq!(app.input, "ATG");
    }

    #[test]
    fn test_empty_sequence() {
        let mut app = App::new();
        app.load_sequence("").unwrap();
        assert!(app.amino_acids.is_empty());
        assert_eq!(app.protein_line(), "Amino Acid Sequence: ");
    }

    #[test]
    fn test_partial_codon_and_output_modes() {
        let mut app = App::new();
        app.load_sequence("ATGGCTGC").unwrap();
        assert_eq!(app.get_current_partial_codon(), "GC");

        app.separator = " ".to_string();
        assert_eq!(app.protein_line(), "Amino Acid Sequence: Met (Start) Ala");

        app.one_letter = true;
        assert_eq!(app.protein_line(), "Amino Acid Sequence: MA");
    }
}
