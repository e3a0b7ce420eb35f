//! Static covalent-bond tables for the 20 canonical amino acids (BMRB nomenclature).
//!
//! Each residue has an atom catalog and a symmetric adjacency map. Graph completeness and
//! symmetry are checked by the tests in [`super::graph`].

use crate::core::models::residue::AminoAcid;
use phf::{Map, phf_map};

pub(crate) type Adjacency = Map<&'static str, &'static [&'static str]>;

pub(crate) fn catalog(residue: AminoAcid) -> &'static [&'static str] {
    match residue {
        AminoAcid::Alanine => ALANINE_ATOMS,
        AminoAcid::Cysteine => CYSTEINE_ATOMS,
        AminoAcid::AsparticAcid => ASPARTIC_ACID_ATOMS,
        AminoAcid::GlutamicAcid => GLUTAMIC_ACID_ATOMS,
        AminoAcid::Phenylalanine => PHENYLALANINE_ATOMS,
        AminoAcid::Glycine => GLYCINE_ATOMS,
        AminoAcid::Histidine => HISTIDINE_ATOMS,
        AminoAcid::Isoleucine => ISOLEUCINE_ATOMS,
        AminoAcid::Lysine => LYSINE_ATOMS,
        AminoAcid::Leucine => LEUCINE_ATOMS,
        AminoAcid::Methionine => METHIONINE_ATOMS,
        AminoAcid::Asparagine => ASPARAGINE_ATOMS,
        AminoAcid::Proline => PROLINE_ATOMS,
        AminoAcid::Glutamine => GLUTAMINE_ATOMS,
        AminoAcid::Arginine => ARGININE_ATOMS,
        AminoAcid::Serine => SERINE_ATOMS,
        AminoAcid::Threonine => THREONINE_ATOMS,
        AminoAcid::Valine => VALINE_ATOMS,
        AminoAcid::Tryptophan => TRYPTOPHAN_ATOMS,
        AminoAcid::Tyrosine => TYROSINE_ATOMS,
    }
}

pub(crate) fn adjacency(residue: AminoAcid) -> &'static Adjacency {
    match residue {
        AminoAcid::Alanine => &ALANINE_BONDS,
        AminoAcid::Cysteine => &CYSTEINE_BONDS,
        AminoAcid::AsparticAcid => &ASPARTIC_ACID_BONDS,
        AminoAcid::GlutamicAcid => &GLUTAMIC_ACID_BONDS,
        AminoAcid::Phenylalanine => &PHENYLALANINE_BONDS,
        AminoAcid::Glycine => &GLYCINE_BONDS,
        AminoAcid::Histidine => &HISTIDINE_BONDS,
        AminoAcid::Isoleucine => &ISOLEUCINE_BONDS,
        AminoAcid::Lysine => &LYSINE_BONDS,
        AminoAcid::Leucine => &LEUCINE_BONDS,
        AminoAcid::Methionine => &METHIONINE_BONDS,
        AminoAcid::Asparagine => &ASPARAGINE_BONDS,
        AminoAcid::Proline => &PROLINE_BONDS,
        AminoAcid::Glutamine => &GLUTAMINE_BONDS,
        AminoAcid::Arginine => &ARGININE_BONDS,
        AminoAcid::Serine => &SERINE_BONDS,
        AminoAcid::Threonine => &THREONINE_BONDS,
        AminoAcid::Valine => &VALINE_BONDS,
        AminoAcid::Tryptophan => &TRYPTOPHAN_BONDS,
        AminoAcid::Tyrosine => &TYROSINE_BONDS,
    }
}

static ALANINE_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "H", "HA", "HB1", "HB2", "HB3",
];

static ALANINE_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "HB1", "HB2", "HB3"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB1" => &["CB"],
    "HB2" => &["CB"],
    "HB3" => &["CB"],
};

static CYSTEINE_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "SG", "H", "HA", "HB2", "HB3", "HG",
];

static CYSTEINE_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "SG", "HB2", "HB3"],
    "SG" => &["CB", "HG"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB2" => &["CB"],
    "HB3" => &["CB"],
    "HG" => &["SG"],
};

static ASPARTIC_ACID_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "CG", "OD1", "OD2", "H", "HA", "HB2", "HB3", "HD2",
];

static ASPARTIC_ACID_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "CG", "HB2", "HB3"],
    "CG" => &["CB", "OD1", "OD2"],
    "OD1" => &["CG"],
    "OD2" => &["CG", "HD2"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB2" => &["CB"],
    "HB3" => &["CB"],
    "HD2" => &["OD2"],
};

static GLUTAMIC_ACID_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "CG", "CD", "OE1", "OE2", "H", "HA", "HB2", "HB3", "HG2", "HG3", "HE2",
];

static GLUTAMIC_ACID_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "CG", "HB2", "HB3"],
    "CG" => &["CB", "CD", "HG2", "HG3"],
    "CD" => &["CG", "OE1", "OE2"],
    "OE1" => &["CD"],
    "OE2" => &["CD", "HE2"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB2" => &["CB"],
    "HB3" => &["CB"],
    "HG2" => &["CG"],
    "HG3" => &["CG"],
    "HE2" => &["OE2"],
};

static PHENYLALANINE_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "CG", "CD1", "CD2", "CE1", "CE2", "CZ", "H", "HA", "HB2", "HB3", "HD1", "HD2", "HE1", "HE2", "HZ",
];

static PHENYLALANINE_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "CG", "HB2", "HB3"],
    "CG" => &["CB", "CD1", "CD2"],
    "CD1" => &["CG", "CE1", "HD1"],
    "CD2" => &["CG", "CE2", "HD2"],
    "CE1" => &["CD1", "CZ", "HE1"],
    "CE2" => &["CD2", "CZ", "HE2"],
    "CZ" => &["CE1", "CE2", "HZ"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB2" => &["CB"],
    "HB3" => &["CB"],
    "HD1" => &["CD1"],
    "HD2" => &["CD2"],
    "HE1" => &["CE1"],
    "HE2" => &["CE2"],
    "HZ" => &["CZ"],
};

static GLYCINE_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "H", "HA2", "HA3",
];

static GLYCINE_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "HA2", "HA3"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "H" => &["N"],
    "HA2" => &["CA"],
    "HA3" => &["CA"],
};

static HISTIDINE_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "CG", "ND1", "CD2", "CE1", "NE2", "H", "HA", "HB2", "HB3", "HD1", "HD2", "HE1", "HE2",
];

static HISTIDINE_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "CG", "HB2", "HB3"],
    "CG" => &["CB", "ND1", "CD2"],
    "ND1" => &["CG", "CE1", "HD1"],
    "CD2" => &["CG", "NE2", "HD2"],
    "CE1" => &["ND1", "NE2", "HE1"],
    "NE2" => &["CD2", "CE1", "HE2"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB2" => &["CB"],
    "HB3" => &["CB"],
    "HD1" => &["ND1"],
    "HD2" => &["CD2"],
    "HE1" => &["CE1"],
    "HE2" => &["NE2"],
};

static ISOLEUCINE_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "CG1", "CG2", "CD1", "H", "HA", "HB", "HG12", "HG13", "HG21", "HG22", "HG23", "HD11", "HD12", "HD13",
];

static ISOLEUCINE_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "CG1", "CG2", "HB"],
    "CG1" => &["CB", "CD1", "HG12", "HG13"],
    "CG2" => &["CB", "HG21", "HG22", "HG23"],
    "CD1" => &["CG1", "HD11", "HD12", "HD13"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB" => &["CB"],
    "HG12" => &["CG1"],
    "HG13" => &["CG1"],
    "HG21" => &["CG2"],
    "HG22" => &["CG2"],
    "HG23" => &["CG2"],
    "HD11" => &["CD1"],
    "HD12" => &["CD1"],
    "HD13" => &["CD1"],
};

static LYSINE_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "CG", "CD", "CE", "NZ", "H", "HA", "HB2", "HB3", "HG2", "HG3", "HD2", "HD3", "HE2", "HE3", "HZ1", "HZ2", "HZ3",
];

static LYSINE_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "CG", "HB2", "HB3"],
    "CG" => &["CB", "CD", "HG2", "HG3"],
    "CD" => &["CG", "CE", "HD2", "HD3"],
    "CE" => &["CD", "NZ", "HE2", "HE3"],
    "NZ" => &["CE", "HZ1", "HZ2", "HZ3"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB2" => &["CB"],
    "HB3" => &["CB"],
    "HG2" => &["CG"],
    "HG3" => &["CG"],
    "HD2" => &["CD"],
    "HD3" => &["CD"],
    "HE2" => &["CE"],
    "HE3" => &["CE"],
    "HZ1" => &["NZ"],
    "HZ2" => &["NZ"],
    "HZ3" => &["NZ"],
};

static LEUCINE_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "CG", "CD1", "CD2", "H", "HA", "HB2", "HB3", "HG", "HD11", "HD12", "HD13", "HD21", "HD22", "HD23",
];

static LEUCINE_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "CG", "HB2", "HB3"],
    "CG" => &["CB", "CD1", "CD2", "HG"],
    "CD1" => &["CG", "HD11", "HD12", "HD13"],
    "CD2" => &["CG", "HD21", "HD22", "HD23"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB2" => &["CB"],
    "HB3" => &["CB"],
    "HG" => &["CG"],
    "HD11" => &["CD1"],
    "HD12" => &["CD1"],
    "HD13" => &["CD1"],
    "HD21" => &["CD2"],
    "HD22" => &["CD2"],
    "HD23" => &["CD2"],
};

static METHIONINE_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "CG", "SD", "CE", "H", "HA", "HB2", "HB3", "HG2", "HG3", "HE1", "HE2", "HE3",
];

static METHIONINE_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "CG", "HB2", "HB3"],
    "CG" => &["CB", "SD", "HG2", "HG3"],
    "SD" => &["CG", "CE"],
    "CE" => &["SD", "HE1", "HE2", "HE3"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB2" => &["CB"],
    "HB3" => &["CB"],
    "HG2" => &["CG"],
    "HG3" => &["CG"],
    "HE1" => &["CE"],
    "HE2" => &["CE"],
    "HE3" => &["CE"],
};

static ASPARAGINE_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "CG", "OD1", "ND2", "H", "HA", "HB2", "HB3", "HD21", "HD22",
];

static ASPARAGINE_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "CG", "HB2", "HB3"],
    "CG" => &["CB", "OD1", "ND2"],
    "OD1" => &["CG"],
    "ND2" => &["CG", "HD21", "HD22"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB2" => &["CB"],
    "HB3" => &["CB"],
    "HD21" => &["ND2"],
    "HD22" => &["ND2"],
};

static PROLINE_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "CG", "CD", "H2", "H3", "HA", "HB2", "HB3", "HG2", "HG3", "HD2", "HD3",
];

static PROLINE_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "CD", "H2", "H3"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "CG", "HB2", "HB3"],
    "CG" => &["CB", "CD", "HG2", "HG3"],
    "CD" => &["N", "CG", "HD2", "HD3"],
    "H2" => &["N"],
    "H3" => &["N"],
    "HA" => &["CA"],
    "HB2" => &["CB"],
    "HB3" => &["CB"],
    "HG2" => &["CG"],
    "HG3" => &["CG"],
    "HD2" => &["CD"],
    "HD3" => &["CD"],
};

static GLUTAMINE_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "CG", "CD", "OE1", "NE2", "H", "HA", "HB2", "HB3", "HG2", "HG3", "HE21", "HE22",
];

static GLUTAMINE_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "CG", "HB2", "HB3"],
    "CG" => &["CB", "CD", "HG2", "HG3"],
    "CD" => &["CG", "OE1", "NE2"],
    "OE1" => &["CD"],
    "NE2" => &["CD", "HE21", "HE22"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB2" => &["CB"],
    "HB3" => &["CB"],
    "HG2" => &["CG"],
    "HG3" => &["CG"],
    "HE21" => &["NE2"],
    "HE22" => &["NE2"],
};

static ARGININE_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "CG", "CD", "NE", "CZ", "NH1", "NH2", "H", "HA", "HB2", "HB3", "HG2", "HG3", "HD2", "HD3", "HE", "HH11", "HH12", "HH21", "HH22",
];

static ARGININE_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "CG", "HB2", "HB3"],
    "CG" => &["CB", "CD", "HG2", "HG3"],
    "CD" => &["CG", "NE", "HD2", "HD3"],
    "NE" => &["CD", "CZ", "HE"],
    "CZ" => &["NE", "NH1", "NH2"],
    "NH1" => &["CZ", "HH11", "HH12"],
    "NH2" => &["CZ", "HH21", "HH22"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB2" => &["CB"],
    "HB3" => &["CB"],
    "HG2" => &["CG"],
    "HG3" => &["CG"],
    "HD2" => &["CD"],
    "HD3" => &["CD"],
    "HE" => &["NE"],
    "HH11" => &["NH1"],
    "HH12" => &["NH1"],
    "HH21" => &["NH2"],
    "HH22" => &["NH2"],
};

static SERINE_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "OG", "H", "HA", "HB2", "HB3", "HG",
];

static SERINE_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "OG", "HB2", "HB3"],
    "OG" => &["CB", "HG"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB2" => &["CB"],
    "HB3" => &["CB"],
    "HG" => &["OG"],
};

static THREONINE_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "OG1", "CG2", "H", "HA", "HB", "HG1", "HG21", "HG22", "HG23",
];

static THREONINE_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "OG1", "CG2", "HB"],
    "OG1" => &["CB", "HG1"],
    "CG2" => &["CB", "HG21", "HG22", "HG23"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB" => &["CB"],
    "HG1" => &["OG1"],
    "HG21" => &["CG2"],
    "HG22" => &["CG2"],
    "HG23" => &["CG2"],
};

static VALINE_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "CG1", "CG2", "H", "HA", "HB", "HG11", "HG12", "HG13", "HG21", "HG22", "HG23",
];

static VALINE_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "CG1", "CG2", "HB"],
    "CG1" => &["CB", "HG11", "HG12", "HG13"],
    "CG2" => &["CB", "HG21", "HG22", "HG23"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB" => &["CB"],
    "HG11" => &["CG1"],
    "HG12" => &["CG1"],
    "HG13" => &["CG1"],
    "HG21" => &["CG2"],
    "HG22" => &["CG2"],
    "HG23" => &["CG2"],
};

static TRYPTOPHAN_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "CG", "CD1", "CD2", "NE1", "CE2", "CE3", "CZ2", "CZ3", "CH2", "H", "HA", "HB2", "HB3", "HD1", "HE1", "HE3", "HZ2", "HZ3", "HH2",
];

static TRYPTOPHAN_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "CG", "HB2", "HB3"],
    "CG" => &["CB", "CD1", "CD2"],
    "CD1" => &["CG", "NE1", "HD1"],
    "CD2" => &["CG", "CE2", "CE3"],
    "NE1" => &["CD1", "CE2", "HE1"],
    "CE2" => &["CD2", "NE1", "CZ2"],
    "CE3" => &["CD2", "CZ3", "HE3"],
    "CZ2" => &["CE2", "CH2", "HZ2"],
    "CZ3" => &["CE3", "CH2", "HZ3"],
    "CH2" => &["CZ2", "CZ3", "HH2"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB2" => &["CB"],
    "HB3" => &["CB"],
    "HD1" => &["CD1"],
    "HE1" => &["NE1"],
    "HE3" => &["CE3"],
    "HZ2" => &["CZ2"],
    "HZ3" => &["CZ3"],
    "HH2" => &["CH2"],
};

static TYROSINE_ATOMS: &[&str] = &[
    "N", "CA", "C", "O", "CB", "CG", "CD1", "CD2", "CE1", "CE2", "CZ", "OH", "H", "HA", "HB2", "HB3", "HD1", "HD2", "HE1", "HE2", "HH",
];

static TYROSINE_BONDS: Adjacency = phf_map! {
    "N" => &["CA", "H"],
    "CA" => &["N", "C", "CB", "HA"],
    "C" => &["CA", "O"],
    "O" => &["C"],
    "CB" => &["CA", "CG", "HB2", "HB3"],
    "CG" => &["CB", "CD1", "CD2"],
    "CD1" => &["CG", "CE1", "HD1"],
    "CD2" => &["CG", "CE2", "HD2"],
    "CE1" => &["CD1", "CZ", "HE1"],
    "CE2" => &["CD2", "CZ", "HE2"],
    "CZ" => &["CE1", "CE2", "OH"],
    "OH" => &["CZ", "HH"],
    "H" => &["N"],
    "HA" => &["CA"],
    "HB2" => &["CB"],
    "HB3" => &["CB"],
    "HD1" => &["CD1"],
    "HD2" => &["CD2"],
    "HE1" => &["CE1"],
    "HE2" => &["CE2"],
    "HH" => &["OH"],
};
