//! Color definitions for amino acids

use crossterm::style::Color;

use crate::sequence::{Label, Residue};

/// Get the display color for an amino acid by its three-letter code
pub fn get_amino_acid_color(amino: &str) -> Color {
    match amino {
        "Phe" => Color::DarkRed,
        "Leu" => Color::DarkGreen,
        "Ile" => Color::DarkYellow,
        "Met" => Color::DarkBlue,
        "Val" => Color::DarkMagenta,
        "Ser" => Color::DarkCyan,
        "Pro" => Color::Grey,
        "Thr" => Color::DarkGrey,
        "Ala" => Color::Red,
        "Tyr" => Color::Green,
        "His" => Color::Yellow,
        "Gln" => Color::Blue,
        "Asn" => Color::Magenta,
        "Lys" => Color::Cyan,
        "Asp" => Color::White,
        "Glu" => Color::DarkRed,
        "Cys" => Color::DarkGreen,
        "Trp" => Color::DarkYellow,
        "Arg" => Color::DarkBlue,
        "Gly" => Color::DarkMagenta,
        "STOP" => Color::Red,
        _ => Color::White,
    }
}

pub fn get_label_color(label: &Label) -> Color {
    match label {
        Label::Coded(entry) => match entry.residue {
            Residue::Amino(amino) => get_amino_acid_color(amino.three_letter()),
            Residue::Stop => get_amino_acid_color("STOP"),
        },
        Label::Invalid => Color::DarkGrey,
    }
}
