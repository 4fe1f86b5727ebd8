//! Text formatting for translation results and the codon table

use crossterm::style::Stylize;

use crate::sequence::{codon_to_string, CodonTable, Label};
use crate::ui::colors::get_label_color;

/// Format sequence with spaces every 3 characters (triplets)
pub fn format_triplets(sequence: &str) -> String {
    let total = sequence.chars().count();
    let mut result = String::new();
    let mut count = 0;

    for c in sequence.chars() {
        result.push(c);
        count += 1;
        if count % 3 == 0 && count < total {
            result.push(' ');
        }
    }

    result
}

/// Join labels with a separator, e.g. `Met (Start)-Phe-STOP`
pub fn format_protein(labels: &[Label], separator: &str) -> String {
    labels
        .iter()
        .map(|label| label.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Same as [`format_protein`] with each label wrapped in its terminal color
pub fn format_protein_colored(labels: &[Label], separator: &str) -> String {
    labels
        .iter()
        .map(|label| label.to_string().with(get_label_color(label)).to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

pub fn format_one_letter(labels: &[Label]) -> String {
    labels.iter().map(Label::one_letter).collect()
}

pub fn format_codon_table(table: &CodonTable) -> String {
    let mut lines = vec!["RNA Codon Table:".to_string()];
    for (codon, entry) in table.entries() {
        lines.push(format!("{}: {}", codon_to_string(codon), entry));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::translate_rna;

    #[test]
    fn test_format_triplets() {
        assert_eq!(format_triplets(""), "");
        assert_eq!(format_triplets("AUG"), "AUG");
        assert_eq!(format_triplets("AUGUUUUA"), "AUG UUU UA");
    }

    #[test]
    fn test_format_protein() {
        let labels = translate_rna("AUGUUUUAAGGG");
        assert_eq!(format_protein(&labels, "-"), "Met (Start)-Phe-STOP");
        assert_eq!(format_protein(&labels, " "), "Met (Start) Phe STOP");
        assert_eq!(format_protein(&[], "-"), "");
        assert_eq!(format_one_letter(&labels), "MF*");
    }

    #[test]
    fn test_colored_output_keeps_labels() {
        let labels = translate_rna("AUGUAA");
        let colored = format_protein_colored(&labels, "-");
        assert!(colored.contains("Met (Start)"));
        assert!(colored.contains("STOP"));
    }

    #[test]
    fn test_format_codon_table() {
        let rendered = format_codon_table(CodonTable::standard());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 65);
        assert_eq!(lines[0], "RNA Codon Table:");
        assert_eq!(lines[1], "UUU: Phe");
        assert!(lines.contains(&"AUG: Met (Start)"));
        assert!(lines.contains(&"UGA: STOP"));
    }
}
