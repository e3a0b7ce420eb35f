use crate::core::models::experiment::Nucleus;
use phf::{Set, phf_set};

// Atoms whose shifts are resolved per secondary structure.
static STRUCTURE_SENSITIVE_ATOM_NAMES: Set<&'static str> = phf_set! {
    "N", "H", "CA", "HA", "C",
};

pub fn is_backbone_atom(atom_name: &str) -> bool {
    STRUCTURE_SENSITIVE_ATOM_NAMES.contains(atom_name.trim())
}

/// The nucleus an atom name is observed as, if it is one of C, H or N.
pub fn nucleus_of(atom_name: &str) -> Option<Nucleus> {
    [Nucleus::Carbon, Nucleus::Hydrogen, Nucleus::Nitrogen]
        .into_iter()
        .find(|n| n.matches_atom(atom_name.trim()))
}
