/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- A current (often partial) valuation.
- For each valued atom, the decision level the value was given on, and the [Reason] for the value.
- A trail of assigned literals, split into levels.
- A count of how many reasons there are to keep an atom [frozen](AtomDB::freeze).
- For each literal fixed on the root level, the [id](ClauseId) of the unit clause which fixed it.

From the perspective of a failure analysis the atom database is read only, and is updated by the surrounding procedures.
*/

mod reason;
pub use reason::Reason;

use crate::{
    db::{ClauseId, LevelIndex},
    misc::log::targets::{self},
    structures::{
        atom::{ATOM_MAX, Atom},
        literal::{CLiteral, Literal},
    },
    types::err::AtomDBError,
};

#[derive(Debug, PartialEq, Eq)]
/// The status of the valuation of an atom, relative to some literal.
pub enum AtomValue {
    /// The atom has no value.
    NotSet,

    /// The value of the atom is the same as the polarity of the literal.
    Same,

    /// The value of the atom is not the same as the polarity of the literal.
    Different,
}

/// The atom database.
pub struct AtomDB {
    /// A current (often partial) valuation.
    valuation: Vec<Option<bool>>,

    /// The level on which each atom was valued, meaningful only for valued atoms.
    levels: Vec<LevelIndex>,

    /// The reason for the value of each atom, meaningful only for valued atoms.
    reasons: Vec<Reason>,

    /// A count of reasons to keep each atom from being eliminated.
    frozen: Vec<u32>,

    /// The id of the unit clause fixing a literal on the root level, indexed by [literal index](Literal::index).
    unit_ids: Vec<Option<ClauseId>>,

    /// Every assigned literal, in order of assignment.
    trail: Vec<CLiteral>,

    /// Indicies of the trail at which a level begins, from level 1.
    level_indicies: Vec<usize>,
}

impl Default for AtomDB {
    fn default() -> Self {
        AtomDB {
            valuation: vec![None],
            levels: vec![0],
            reasons: vec![Reason::Decision],
            frozen: vec![0],
            unit_ids: vec![None, None],
            trail: Vec::default(),
            level_indicies: Vec::default(),
        }
    }
}

impl AtomDB {
    /// A count of atoms in the [AtomDB], including the reserved atom.
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// The greatest atom in the database.
    pub fn max_atom(&self) -> Atom {
        (self.valuation.len() - 1) as Atom
    }

    /// The current valuation, indexed by atoms.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.valuation
    }

    /// A fresh atom --- on Ok the atom is part of the language of the database.
    pub fn fresh_atom(&mut self) -> Result<Atom, AtomDBError> {
        let atom: Atom = match self.valuation.len().try_into() {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(AtomDBError::AtomsExhausted),
        };

        self.valuation.push(None);
        self.levels.push(0);
        self.reasons.push(Reason::Decision);
        self.frozen.push(0);
        self.unit_ids.push(None);
        self.unit_ids.push(None);

        Ok(atom)
    }

    /// The value of an atom, if the atom has a value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.get(atom as usize).copied().flatten()
    }

    /// The value of a literal, if the atom of the literal has a value.
    ///
    /// That is, whether the literal is true or false, if either.
    pub fn value(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// The status of the value of the atom of `literal`, relative to `literal`.
    pub fn check_literal(&self, literal: CLiteral) -> AtomValue {
        match self.value(literal) {
            None => AtomValue::NotSet,
            Some(true) => AtomValue::Same,
            Some(false) => AtomValue::Different,
        }
    }

    /// The level on which an atom was valued.
    ///
    /// Meaningful only if the atom has a value.
    pub fn level_of(&self, atom: Atom) -> LevelIndex {
        self.levels[atom as usize]
    }

    /// The reason for the value of an atom.
    ///
    /// Meaningful only if the atom has a value.
    pub fn reason_of(&self, atom: Atom) -> Reason {
        self.reasons[atom as usize]
    }

    /// The id of the unit clause which fixed `literal` on the root level, if there is one.
    pub fn unit_id(&self, literal: CLiteral) -> Option<ClauseId> {
        self.unit_ids.get(literal.index()).copied().flatten()
    }

    /// Notes the unit clause with `id` fixes `literal` on the root level.
    pub fn set_unit_id(&mut self, literal: CLiteral, id: ClauseId) {
        self.unit_ids[literal.index()] = Some(id);
    }

    /// Values the atom of `literal` with the polarity of `literal`, on `level` due to `reason`.
    ///
    /// Returns the status of the atom prior to the assignment, and the assignment is made only if the atom had no value.
    pub fn assign(&mut self, literal: CLiteral, level: LevelIndex, reason: Reason) -> AtomValue {
        let status = self.check_literal(literal);
        if status == AtomValue::NotSet {
            let atom = literal.atom() as usize;
            self.valuation[atom] = Some(literal.polarity());
            self.levels[atom] = level;
            self.reasons[atom] = reason;
            self.trail.push(literal);
            log::trace!(target: targets::VALUATION, "Assigned {literal} on level {level} by {reason}");
        }
        status
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// Pushes a fresh level, and returns the index of the level.
    pub fn push_level(&mut self) -> LevelIndex {
        self.level_indicies.push(self.trail.len());
        self.level()
    }

    /// Every assigned literal, in order of assignment.
    pub fn trail(&self) -> &[CLiteral] {
        &self.trail
    }

    /// Removes all levels above `level`, clearing the value of each atom assigned on those levels.
    ///
    /// Returns the literals which were unassigned, in order of assignment.
    pub fn backjump(&mut self, level: LevelIndex) -> Vec<CLiteral> {
        let Some(&level_start) = self.level_indicies.get(level as usize) else {
            return Vec::default();
        };

        self.level_indicies.truncate(level as usize);
        let cleared = self.trail.split_off(level_start);
        for literal in &cleared {
            self.valuation[literal.atom() as usize] = None;
        }
        log::trace!(target: targets::VALUATION, "Backjumped to level {level}, clearing {} atoms", cleared.len());
        cleared
    }

    /// Keeps the atom of `literal` from being eliminated, until a matching call to [melt](AtomDB::melt).
    pub fn freeze(&mut self, literal: CLiteral) {
        let count = &mut self.frozen[literal.atom() as usize];
        *count = count.saturating_add(1);
    }

    /// Releases a single reason to keep the atom of `literal` from being eliminated.
    pub fn melt(&mut self, literal: CLiteral) {
        let count = &mut self.frozen[literal.atom() as usize];
        assert!(*count > 0, "! Melting the unfrozen atom {}", literal.atom());
        *count -= 1;
    }

    /// True if the atom has some reason to be kept from being eliminated.
    pub fn is_frozen(&self, atom: Atom) -> bool {
        self.frozen.get(atom as usize).is_some_and(|count| *count > 0)
    }
}
