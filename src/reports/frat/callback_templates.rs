/*!
Functions to hook FRAT proof transcription into callbacks.

Each function takes a transcriber and the parameters relevant from the callback, and flushes the transcriber.
*/

use std::{cell::RefCell, io::Write, rc::Rc};

use crate::{context::Context, db::ClauseId, structures::literal::CLiteral};

use super::Transcriber;

/// Transcribe the addition of an original clause to the context.
pub fn transcribe_original<W: Write>(tx: &mut Transcriber<W>, id: ClauseId, clause: &[CLiteral]) {
    tx.transcribe_original(id, clause);
    tx.flush()
}

/// Transcribe the derivation of a clause.
pub fn transcribe_addition<W: Write>(
    tx: &mut Transcriber<W>,
    id: ClauseId,
    clause: &[CLiteral],
    chain: Option<&[ClauseId]>,
) {
    tx.transcribe_addition(id, clause, chain);
    tx.flush()
}

/// Transcribe the deletion of a clause.
pub fn transcribe_deletion<W: Write>(tx: &mut Transcriber<W>, id: ClauseId, clause: &[CLiteral]) {
    tx.transcribe_deletion(id, clause);
    tx.flush()
}

/// Links `transcriber` to `context` by setting the original, addition, and deletion callbacks of the clause database.
///
/// Returns a smart pointer to the transcriber.
pub fn attach<W: Write + 'static>(
    context: &mut Context,
    transcriber: Transcriber<W>,
) -> Rc<RefCell<Transcriber<W>>> {
    let tx = Rc::new(RefCell::new(transcriber));

    let original_tx = tx.clone();
    let original_cb = move |id: ClauseId, clause: &[CLiteral]| {
        transcribe_original(&mut original_tx.borrow_mut(), id, clause)
    };
    context.clause_db.set_callback_original(Box::new(original_cb));

    let addition_tx = tx.clone();
    let addition_cb = move |id: ClauseId, clause: &[CLiteral], chain: Option<&[ClauseId]>| {
        transcribe_addition(&mut addition_tx.borrow_mut(), id, clause, chain)
    };
    context.clause_db.set_callback_addition(Box::new(addition_cb));

    let deletion_tx = tx.clone();
    let deletion_cb = move |id: ClauseId, clause: &[CLiteral]| {
        transcribe_deletion(&mut deletion_tx.borrow_mut(), id, clause)
    };
    context.clause_db.set_callback_delete(Box::new(deletion_cb));

    tx
}
