use std::fmt;
use std::str::Chars;

use crate::sequence::codon::{CodonEntry, CodonTable};

/// One translated codon: a table entry, or `Invalid` when the codon is
/// missing from the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Coded(CodonEntry),
    Invalid,
}

impl Label {
    pub fn is_stop(&self) -> bool {
        matches!(self, Label::Coded(entry) if entry.is_stop())
    }

    pub fn is_start(&self) -> bool {
        matches!(self, Label::Coded(entry) if entry.start)
    }

    pub fn one_letter(&self) -> char {
        match self {
            Label::Coded(entry) => entry.residue.one_letter(),
            Label::Invalid => 'X',
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Coded(entry) => entry.fmt(f),
            Label::Invalid => f.write_str("Invalid"),
        }
    }
}

/// Lazy codon-by-codon translation of an RNA sequence. Yields nothing
/// further once a stop codon has been produced; a trailing partial codon
/// is dropped.
pub struct Translation<'a> {
    bases: Chars<'a>,
    table: &'a CodonTable,
    halted: bool,
}

impl<'a> Translation<'a> {
    pub fn new(table: &'a CodonTable, rna: &'a str) -> Self {
        Translation { bases: rna.chars(), table, halted: false }
    }
}

impl Iterator for Translation<'_> {
    type Item = Label;

    fn next(&mut self) -> Option<Label> {
        if self.halted {
            return None;
        }

        let codon = [self.bases.next()?, self.bases.next()?, self.bases.next()?];
        let label = match self.table.get(&codon) {
            Some(entry) => Label::Coded(entry),
            None => Label::Invalid,
        };

        if label.is_stop() {
            self.halted = true;
        }
        Some(label)
    }
}

impl CodonTable {
    pub fn translate<'a>(&'a self, rna: &'a str) -> Translation<'a> {
        Translation::new(self, rna)
    }
}

pub fn translate_with(table: &CodonTable, rna: &str) -> Vec<Label> {
    table.translate(rna).collect()
}

/// Translate an RNA sequence with the standard genetic code
pub fn translate_rna(rna: &str) -> Vec<Label> {
    translate_with(CodonTable::standard(), rna)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::codon::{AminoAcid, Residue};
    use proptest::prelude::*;

    fn names(labels: &[Label]) -> Vec<String> {
        labels.iter().map(|label| label.to_string()).collect()
    }

    #[test]
    fn test_empty_sequence() {
        assert!(translate_rna("").is_empty());
    }

    #[test]
    fn test_start_codon() {
        let labels = translate_rna("AUG");
        assert_eq!(labels.len(), 1);
        assert!(labels[0].is_start());
        assert_eq!(labels[0].to_string(), "Met (Start)");
    }

    #[test]
    fn test_stop_halts_translation() {
        assert_eq!(names(&translate_rna("UAAXXX")), vec!["STOP"]);
        assert_eq!(names(&translate_rna("AUGUUUUAAGGG")), vec!["Met (Start)", "Phe", "STOP"]);
        assert_eq!(names(&translate_rna("UGAUGA")), vec!["STOP"]);
    }

    #[test]
    fn test_partial_codon_is_dropped() {
        let labels = translate_rna("AUGUUUGG");
        assert_eq!(names(&labels), vec!["Met (Start)", "Phe"]);

        for rna in ["G", "GC", "GCUG", "GCUGC", "GCUGCUGCUGCUG"] {
            assert_eq!(translate_rna(rna).len(), rna.len() / 3);
        }
    }

    #[test]
    fn test_unknown_codon_yields_invalid() {
        let labels = translate_rna("AUGXYZUUU");
        assert_eq!(labels[1], Label::Invalid);
        assert_eq!(names(&labels), vec!["Met (Start)", "Invalid", "Phe"]);
        assert_eq!(translate_rna("aug"), vec![Label::Invalid]);
    }

    #[test]
    fn test_truncated_table() {
        let table = CodonTable::from_entries([
            (['G', 'G', 'G'], CodonEntry::amino(AminoAcid::Gly)),
        ]);
        let labels = translate_with(&table, "GGGAUGGGG");
        assert_eq!(
            labels,
            vec![
                Label::Coded(CodonEntry::amino(AminoAcid::Gly)),
                Label::Invalid,
                Label::Coded(CodonEntry::amino(AminoAcid::Gly)),
            ]
        );
    }

    #[test]
    fn test_lazy_translation_stops_at_stop_codon() {
        let table = CodonTable::standard();
        let mut translation = table.translate("UUUUAGUUU");
        assert_eq!(translation.next().map(|l| l.one_letter()), Some('F'));
        assert_eq!(translation.next().map(|l| l.is_stop()), Some(true));
        assert_eq!(translation.next(), None);
        assert_eq!(translation.next(), None);
    }

    #[test]
    fn test_one_letter_codes() {
        let letters: String = translate_rna("AUGGCUXXXUGGUAA").iter().map(Label::one_letter).collect();
        assert_eq!(letters, "MAXW*");
        assert_eq!(
            translate_rna("CCC")[0],
            Label::Coded(CodonEntry { residue: Residue::Amino(AminoAcid::Pro), start: false })
        );
    }

    fn sense_codon() -> impl Strategy<Value = String> {
        "[ACGU]{3}".prop_filter("stop codon", |c| !matches!(c.as_str(), "UAA" | "UAG" | "UGA"))
    }

    fn rna_without_stop() -> impl Strategy<Value = String> {
        (proptest::collection::vec(sense_codon(), 0..40), "[ACGU]{0,2}")
            .prop_map(|(codons, tail)| codons.concat() + &tail)
    }

    proptest! {
        #[test]
        fn without_stop_every_full_codon_is_translated(rna in rna_without_stop()) {
            let labels = translate_rna(&rna);
            prop_assert_eq!(labels.len(), rna.len() / 3);
            prop_assert!(labels.iter().all(|l| *l != Label::Invalid && !l.is_stop()));
        }

        #[test]
        fn only_the_last_label_can_be_stop(rna in "[ACGU]*") {
            let labels = translate_rna(&rna);
            prop_assert!(labels.len() <= rna.len() / 3);
            if let Some((last, rest)) = labels.split_last() {
                prop_assert!(!rest.iter().any(Label::is_stop));
                if labels.len() < rna.len() / 3 {
                    prop_assert!(last.is_stop());
                }
            }
        }

        #[test]
        fn arbitrary_input_never_fails(s in any::<String>()) {
            let labels = translate_rna(&s);
            prop_assert!(labels.len() <= s.chars().count() / 3);
        }
    }
}
