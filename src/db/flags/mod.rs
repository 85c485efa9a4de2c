/*!
A database of flags, one record for each atom.

Each [Flags] record holds:
- Whether either literal on the atom is assumed.
- Whether either literal on the atom is a failed assumption.
- Whether the atom has been seen during the current analysis.

The `assumed` and `failed` flags are distinguished by polarity, as both a literal and its negation may be assumed.
The `seen` flag is scratch memory for walks through the implication graph.
It is set for an atom at most once during a walk, and every atom seen is cleared before a walk ends, so the flag is clear for every atom between walks.

The `failed` flag of a literal is set at most once between resets.
Attempting to set the flag a second time is taken to be a defect, and leads to a panic.
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The bit used to record a flag of `literal`.
///
/// Negative literals use the low bit, positive literals the next.
fn polarity_bit(literal: CLiteral) -> u8 {
    match literal.polarity() {
        true => 0b10,
        false => 0b01,
    }
}

/// Flags of an atom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// Polarities of the atom which are assumed.
    assumed: u8,

    /// Polarities of the atom which are failed assumptions.
    failed: u8,

    /// Whether the atom has been seen during the current walk.
    seen: bool,
}

/// The flag database.
#[derive(Default)]
pub struct FlagDB {
    flags: Vec<Flags>,
}

impl FlagDB {
    /// Ensures a record of flags exists for every atom up to and including `atom`.
    pub fn ensure_atom(&mut self, atom: Atom) {
        let required = atom as usize + 1;
        if self.flags.len() < required {
            self.flags.resize(required, Flags::default());
        }
    }

    /// The flags of an atom.
    pub fn flags(&self, atom: Atom) -> Flags {
        self.flags.get(atom as usize).copied().unwrap_or_default()
    }

    /// True if `literal` is assumed.
    pub fn is_assumed(&self, literal: CLiteral) -> bool {
        self.flags(literal.atom()).assumed & polarity_bit(literal) != 0
    }

    /// Notes `literal` is assumed.
    ///
    /// Returns true if `literal` was not already assumed, and false otherwise.
    pub fn set_assumed(&mut self, literal: CLiteral) -> bool {
        self.ensure_atom(literal.atom());
        let flags = &mut self.flags[literal.atom() as usize];
        let bit = polarity_bit(literal);
        match flags.assumed & bit {
            0 => {
                flags.assumed |= bit;
                true
            }
            _ => false,
        }
    }

    /// True if `literal` is a failed assumption.
    pub fn is_failed(&self, literal: CLiteral) -> bool {
        self.flags(literal.atom()).failed & polarity_bit(literal) != 0
    }

    /// Notes `literal` is a failed assumption.
    ///
    /// # Panics
    /// If `literal` has already been noted as failed since the flags of the literal were last [cleared](FlagDB::clear_assumption).
    pub fn mark_failed(&mut self, literal: CLiteral) {
        self.ensure_atom(literal.atom());
        let flags = &mut self.flags[literal.atom() as usize];
        let bit = polarity_bit(literal);
        assert!(flags.failed & bit == 0, "! {literal} marked as failed twice");
        flags.failed |= bit;
    }

    /// Clears the assumed and failed flags of `literal`, leaving those of the negation of `literal` as they are.
    pub fn clear_assumption(&mut self, literal: CLiteral) {
        if let Some(flags) = self.flags.get_mut(literal.atom() as usize) {
            let bit = polarity_bit(literal);
            flags.assumed &= !bit;
            flags.failed &= !bit;
        }
    }

    /// True if the atom has been seen.
    pub fn is_seen(&self, atom: Atom) -> bool {
        self.flags(atom).seen
    }

    /// Notes the atom has been seen.
    ///
    /// Returns true if the atom was not already seen, and false otherwise.
    pub fn mark_seen(&mut self, atom: Atom) -> bool {
        self.ensure_atom(atom);
        let flags = &mut self.flags[atom as usize];
        match flags.seen {
            true => false,
            false => {
                flags.seen = true;
                true
            }
        }
    }

    /// Clears the seen flag of the atom.
    pub fn unmark_seen(&mut self, atom: Atom) {
        if let Some(flags) = self.flags.get_mut(atom as usize) {
            flags.seen = false;
        }
    }

    /// An iterator over each atom which has been seen.
    pub fn seen_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, flags)| flags.seen)
            .map(|(atom, _)| atom as Atom)
    }
}
