/*!
Boolean constraint propagation.

Each stored clause is examined in turn, and:
- If every literal of the clause is false, the clause is a conflict.
- If every literal but one is false, and the remaining literal has no value, the remaining literal is assigned true with the clause as its reason.

The examination repeats until some conflict is found, or an examination assigns nothing.

Propagation is a full scan of the clause database, without watched literals, as the only use of propagation is to build the trail failure analysis reads.

# Root level

A literal propagated on the root level is fixed by the formula, and a unit clause on the literal is derived (with a chain, if chains are built).
The chain is made from the ids of the unit clauses which fix each other literal of the reason false, followed by the reason.
So, every literal fixed on the root level has a unit clause to cite in a chain.
*/

use crate::{
    context::Context,
    db::{atom::Reason, ClauseId},
    misc::log::targets::{self},
    structures::{
        clause::ClauseSource,
        literal::{CLiteral, Literal},
    },
    types::err::{AtomDBError, BCPError, ErrorKind, FailingError},
};

/// The status of a clause on the current valuation.
enum ClauseStatus {
    /// Some literal is true.
    Satisfied,

    /// Every literal is false.
    Falsified,

    /// Every literal but the given literal is false, and the given literal has no value.
    Unit(CLiteral),

    /// At least two literals have no value.
    Open,
}

impl Context {
    /// Propagates on the current valuation, until a fixed point or conflict.
    ///
    /// A conflict is returned as a [BCPError::Conflict] error, with the id of the falsified clause.
    pub fn bcp(&mut self) -> Result<(), ErrorKind> {
        let level = self.atom_db.level();

        loop {
            let mut assigned = false;

            for index in 0..self.clause_db.stored_ids().len() {
                let id = self.clause_db.stored_ids()[index];

                match self.clause_status(id)? {
                    ClauseStatus::Satisfied | ClauseStatus::Open => {}

                    ClauseStatus::Falsified => {
                        log::trace!(target: targets::PROPAGATION, "Conflict on {id} at level {level}");
                        return Err(BCPError::Conflict(id).into());
                    }

                    ClauseStatus::Unit(literal) => {
                        log::trace!(target: targets::PROPAGATION, "Propagated {literal} from {id}");
                        self.atom_db.assign(literal, level, Reason::Clause(id));
                        if level == 0 {
                            self.derive_root_unit(literal, id)?;
                        }
                        assigned = true;
                    }
                }
            }

            if !assigned {
                return Ok(());
            }
        }
    }

    fn clause_status(&self, id: ClauseId) -> Result<ClauseStatus, ErrorKind> {
        let mut unvalued = None;

        for &literal in self.clause_db.get(id)?.clause() {
            match self.atom_db.value(literal) {
                Some(true) => return Ok(ClauseStatus::Satisfied),
                Some(false) => {}
                None => match unvalued {
                    None => unvalued = Some(literal),
                    Some(_) => return Ok(ClauseStatus::Open),
                },
            }
        }

        match unvalued {
            None => Ok(ClauseStatus::Falsified),
            Some(literal) => Ok(ClauseStatus::Unit(literal)),
        }
    }

    /// The ids of the unit clauses fixing each literal of clause `id` other than `literal` false, followed by `id`.
    pub(crate) fn root_chain(
        &self,
        id: ClauseId,
        literal: Option<CLiteral>,
    ) -> Result<Vec<ClauseId>, ErrorKind> {
        let clause = self.clause_db.get(id)?.clause();
        let mut chain = Vec::with_capacity(clause.len());

        for &other in clause {
            if Some(other) == literal {
                continue;
            }
            let unit = other.negate();
            let unit_id = self
                .atom_db
                .unit_id(unit)
                .ok_or(AtomDBError::MissingUnit(unit))?;
            chain.push(unit_id);
        }
        chain.push(id);

        Ok(chain)
    }

    /// Derives a unit clause on `literal`, propagated on the root level from clause `reason`.
    fn derive_root_unit(&mut self, literal: CLiteral, reason: ClauseId) -> Result<(), ErrorKind> {
        let chain = self.root_chain(reason, Some(literal))?;

        if let Some(checker) = &mut self.checker {
            if let Err(e) = checker.check_learned_clause(&[literal]) {
                log::error!(target: targets::PROPAGATION, "Root unit check failed: {e:?}");
                return Err(FailingError::CheckFailed.into());
            }
            checker.add_clause(&[literal]);
        }

        let chain = match self.config.structured_proofs() {
            true => Some(chain.as_slice()),
            false => None,
        };
        let id = self
            .clause_db
            .store_derived(vec![literal], ClauseSource::Unit, chain)?;
        self.atom_db.set_unit_id(literal, id);

        log::trace!(target: targets::PROPAGATION, "Root unit {literal} derived as {id}");
        Ok(())
    }
}
