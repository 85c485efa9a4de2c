use std::fmt::Write;

use crate::{
    db::ClauseId,
    misc::log::targets::{self},
    structures::literal::CLiteral,
};

use super::Transcriber;

impl<W: std::io::Write> Transcriber<W> {
    fn write_clause_to_string(clause: &[CLiteral], string: &mut String) {
        for literal in clause {
            let _ = write!(string, "{literal} ");
        }
    }

    /// Transcribes a step of kind `step_id` on `clause`, with the hints of `chain` if given.
    pub fn transcribe_clause(
        &mut self,
        step_id: char,
        id: ClauseId,
        clause: &[CLiteral],
        chain: Option<&[ClauseId]>,
    ) {
        let mut step = format!("{step_id} {id} ");
        Self::write_clause_to_string(clause, &mut step);
        step.push('0');

        if let Some(chain) = chain {
            step.push_str(" l ");
            for hint in chain {
                let _ = write!(step, "{hint} ");
            }
            step.push('0');
        }
        step.push('\n');

        self.step_buffer.push(step);
    }

    /// Transcribes an original clause.
    pub fn transcribe_original(&mut self, id: ClauseId, clause: &[CLiteral]) {
        self.transcribe_clause('o', id, clause, None);
    }

    /// Transcribes a derived clause, with the chain justifying the derivation if given.
    pub fn transcribe_addition(&mut self, id: ClauseId, clause: &[CLiteral], chain: Option<&[ClauseId]>) {
        self.transcribe_clause('a', id, clause, chain);
    }

    /// Transcribes the deletion of a clause.
    pub fn transcribe_deletion(&mut self, id: ClauseId, clause: &[CLiteral]) {
        self.transcribe_clause('d', id, clause, None);
    }

    /// Transcribes that a clause is active at the end of a proof.
    pub fn transcribe_active(&mut self, id: ClauseId, clause: &[CLiteral]) {
        self.transcribe_clause('f', id, clause, None);
    }

    /// Writes any buffered steps.
    pub fn flush(&mut self) {
        for step in &self.step_buffer {
            if let Err(e) = self.writer.write_all(step.as_bytes()) {
                log::error!(target: targets::FRAT, "Failed to write step: {e}");
            }
        }
        self.step_buffer.clear();
        if let Err(e) = self.writer.flush() {
            log::error!(target: targets::FRAT, "Failed to flush: {e}");
        }
    }
}
