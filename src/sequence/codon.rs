//! RNA codon table
//!
//! Maps each of the 64 RNA codons to a residue (one of the twenty standard
//! amino acids or the stop marker). Whether a codon starts translation is
//! kept as a separate flag on the entry rather than folded into the residue.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use AminoAcid::*;

/// The twenty standard amino acids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
}

impl AminoAcid {
    pub fn three_letter(self) -> &'static str {
        match self {
            AminoAcid::Ala => "Ala",
            AminoAcid::Arg => "Arg",
            AminoAcid::Asn => "Asn",
            AminoAcid::Asp => "Asp",
            AminoAcid::Cys => "Cys",
            AminoAcid::Gln => "Gln",
            AminoAcid::Glu => "Glu",
            AminoAcid::Gly => "Gly",
            AminoAcid::His => "His",
            AminoAcid::Ile => "Ile",
            AminoAcid::Leu => "Leu",
            AminoAcid::Lys => "Lys",
            AminoAcid::Met => "Met",
            AminoAcid::Phe => "Phe",
            AminoAcid::Pro => "Pro",
            AminoAcid::Ser => "Ser",
            AminoAcid::Thr => "Thr",
            AminoAcid::Trp => "Trp",
            AminoAcid::Tyr => "Tyr",
            AminoAcid::Val => "Val",
        }
    }

    pub fn one_letter(self) -> char {
        match self {
            AminoAcid::Ala => 'A',
            AminoAcid::Arg => 'R',
            AminoAcid::Asn => 'N',
            AminoAcid::Asp => 'D',
            AminoAcid::Cys => 'C',
            AminoAcid::Gln => 'Q',
            AminoAcid::Glu => 'E',
            AminoAcid::Gly => 'G',
            AminoAcid::His => 'H',
            AminoAcid::Ile => 'I',
            AminoAcid::Leu => 'L',
            AminoAcid::Lys => 'K',
            AminoAcid::Met => 'M',
            AminoAcid::Phe => 'F',
            AminoAcid::Pro => 'P',
            AminoAcid::Ser => 'S',
            AminoAcid::Thr => 'T',
            AminoAcid::Trp => 'W',
            AminoAcid::Tyr => 'Y',
            AminoAcid::Val => 'V',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AminoAcid::Ala => "Alanine",
            AminoAcid::Arg => "Arginine",
            AminoAcid::Asn => "Asparagine",
            AminoAcid::Asp => "Aspartic acid",
            AminoAcid::Cys => "Cysteine",
            AminoAcid::Gln => "Glutamine",
            AminoAcid::Glu => "Glutamic acid",
            AminoAcid::Gly => "Glycine",
            AminoAcid::His => "Histidine",
            AminoAcid::Ile => "Isoleucine",
            AminoAcid::Leu => "Leucine",
            AminoAcid::Lys => "Lysine",
            AminoAcid::Met => "Methionine",
            AminoAcid::Phe => "Phenylalanine",
            AminoAcid::Pro => "Proline",
            AminoAcid::Ser => "Serine",
            AminoAcid::Thr => "Threonine",
            AminoAcid::Trp => "Tryptophan",
            AminoAcid::Tyr => "Tyrosine",
            AminoAcid::Val => "Valine",
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.three_letter())
    }
}

/// What a codon codes for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Residue {
    Amino(AminoAcid),
    Stop,
}

impl Residue {
    pub fn one_letter(self) -> char {
        match self {
            Residue::Amino(amino) => amino.one_letter(),
            Residue::Stop => '*',
        }
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Residue::Amino(amino) => amino.fmt(f),
            Residue::Stop => f.write_str("STOP"),
        }
    }
}

/// A codon table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodonEntry {
    pub residue: Residue,
    pub start: bool,
}

impl CodonEntry {
    pub const fn amino(amino: AminoAcid) -> Self {
        CodonEntry { residue: Residue::Amino(amino), start: false }
    }

    pub const fn start(amino: AminoAcid) -> Self {
        CodonEntry { residue: Residue::Amino(amino), start: true }
    }

    pub const fn stop() -> Self {
        CodonEntry { residue: Residue::Stop, start: false }
    }

    pub fn is_stop(&self) -> bool {
        self.residue == Residue::Stop
    }
}

impl fmt::Display for CodonEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start {
            write!(f, "{} (Start)", self.residue)
        } else {
            self.residue.fmt(f)
        }
    }
}

pub type Codon = [char; 3];

/// Codon from a three-base literal; a literal of any other length fails
/// const evaluation
const fn codon(bases: &str) -> Codon {
    let bytes = bases.as_bytes();
    assert!(bytes.len() == 3, "codon literal must be exactly three bases");
    [bytes[0] as char, bytes[1] as char, bytes[2] as char]
}

#[rustfmt::skip]
const STANDARD_CODONS: [(Codon, CodonEntry); 64] = [
    (codon("UUU"), CodonEntry::amino(Phe)), (codon("UUC"), CodonEntry::amino(Phe)),
    (codon("UUA"), CodonEntry::amino(Leu)), (codon("UUG"), CodonEntry::amino(Leu)),
    (codon("CUU"), CodonEntry::amino(Leu)), (codon("CUC"), CodonEntry::amino(Leu)),
    (codon("CUA"), CodonEntry::amino(Leu)), (codon("CUG"), CodonEntry::amino(Leu)),
    (codon("AUU"), CodonEntry::amino(Ile)), (codon("AUC"), CodonEntry::amino(Ile)),
    (codon("AUA"), CodonEntry::amino(Ile)),
    (codon("AUG"), CodonEntry::start(Met)),
    (codon("GUU"), CodonEntry::amino(Val)), (codon("GUC"), CodonEntry::amino(Val)),
    (codon("GUA"), CodonEntry::amino(Val)), (codon("GUG"), CodonEntry::amino(Val)),
    (codon("UCU"), CodonEntry::amino(Ser)), (codon("UCC"), CodonEntry::amino(Ser)),
    (codon("UCA"), CodonEntry::amino(Ser)), (codon("UCG"), CodonEntry::amino(Ser)),
    (codon("CCU"), CodonEntry::amino(Pro)), (codon("CCC"), CodonEntry::amino(Pro)),
    (codon("CCA"), CodonEntry::amino(Pro)), (codon("CCG"), CodonEntry::amino(Pro)),
    (codon("ACU"), CodonEntry::amino(Thr)), (codon("ACC"), CodonEntry::amino(Thr)),
    (codon("ACA"), CodonEntry::amino(Thr)), (codon("ACG"), CodonEntry::amino(Thr)),
    (codon("GCU"), CodonEntry::amino(Ala)), (codon("GCC"), CodonEntry::amino(Ala)),
    (codon("GCA"), CodonEntry::amino(Ala)), (codon("GCG"), CodonEntry::amino(Ala)),
    (codon("UAU"), CodonEntry::amino(Tyr)), (codon("UAC"), CodonEntry::amino(Tyr)),
    (codon("UAA"), CodonEntry::stop()), (codon("UAG"), CodonEntry::stop()),
    (codon("CAU"), CodonEntry::amino(His)), (codon("CAC"), CodonEntry::amino(His)),
    (codon("CAA"), CodonEntry::amino(Gln)), (codon("CAG"), CodonEntry::amino(Gln)),
    (codon("AAU"), CodonEntry::amino(Asn)), (codon("AAC"), CodonEntry::amino(Asn)),
    (codon("AAA"), CodonEntry::amino(Lys)), (codon("AAG"), CodonEntry::amino(Lys)),
    (codon("GAU"), CodonEntry::amino(Asp)), (codon("GAC"), CodonEntry::amino(Asp)),
    (codon("GAA"), CodonEntry::amino(Glu)), (codon("GAG"), CodonEntry::amino(Glu)),
    (codon("UGU"), CodonEntry::amino(Cys)), (codon("UGC"), CodonEntry::amino(Cys)),
    (codon("UGA"), CodonEntry::stop()),
    (codon("UGG"), CodonEntry::amino(Trp)),
    (codon("CGU"), CodonEntry::amino(Arg)), (codon("CGC"), CodonEntry::amino(Arg)),
    (codon("CGA"), CodonEntry::amino(Arg)), (codon("CGG"), CodonEntry::amino(Arg)),
    (codon("AGU"), CodonEntry::amino(Ser)), (codon("AGC"), CodonEntry::amino(Ser)),
    (codon("AGA"), CodonEntry::amino(Arg)), (codon("AGG"), CodonEntry::amino(Arg)),
    (codon("GGU"), CodonEntry::amino(Gly)), (codon("GGC"), CodonEntry::amino(Gly)),
    (codon("GGA"), CodonEntry::amino(Gly)), (codon("GGG"), CodonEntry::amino(Gly)),
];

static STANDARD: LazyLock<CodonTable> = LazyLock::new(|| {
    CodonTable::from_entries(STANDARD_CODONS)
});

/// Split a three-character string into a codon
pub fn codon_from_str(codon: &str) -> Option<Codon> {
    let mut chars = codon.chars();
    let codon = [chars.next()?, chars.next()?, chars.next()?];
    if chars.next().is_some() {
        return None;
    }
    Some(codon)
}

pub fn codon_to_string(codon: &Codon) -> String {
    codon.iter().collect()
}

/// Immutable lookup table from RNA codons to entries, enumerable in
/// insertion order
#[derive(Debug, Clone, Default)]
pub struct CodonTable {
    entries: Vec<(Codon, CodonEntry)>,
    index: HashMap<Codon, usize>,
}

impl CodonTable {
    /// The standard genetic code, built once per process
    pub fn standard() -> &'static CodonTable {
        &STANDARD
    }

    /// Build a table from codon/entry pairs. A repeated codon keeps its
    /// first position and takes the last entry.
    pub fn from_entries<I>(entries: I) -> CodonTable
    where
        I: IntoIterator<Item = (Codon, CodonEntry)>,
    {
        let mut table = CodonTable::default();
        for (codon, entry) in entries {
            match table.index.get(&codon) {
                Some(&i) => table.entries[i].1 = entry,
                None => {
                    table.index.insert(codon, table.entries.len());
                    table.entries.push((codon, entry));
                }
            }
        }
        table
    }

    pub fn get(&self, codon: &Codon) -> Option<CodonEntry> {
        self.index.get(codon).map(|&i| self.entries[i].1)
    }

    pub fn lookup(&self, codon: &str) -> Option<CodonEntry> {
        self.get(&codon_from_str(codon)?)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Codon, &CodonEntry)> {
        self.entries.iter().map(|(codon, entry)| (codon, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn start_codons(&self) -> Vec<String> {
        self.entries()
            .filter(|(_, entry)| entry.start)
            .map(|(codon, _)| codon_to_string(codon))
            .collect()
    }

    pub fn stop_codons(&self) -> Vec<String> {
        self.entries()
            .filter(|(_, entry)| entry.is_stop())
            .map(|(codon, _)| codon_to_string(codon))
            .collect()
    }
}
