/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

The atom `0` is reserved.
It is never part of a clause, and a `0` literal is used to terminate clauses passed one literal at a time, as with [constrain](crate::context::Context::constrain).

This representation allows atoms to be used as the indicies of a structure, e.g. `levels[a]` without taking too much space.

# Notes
In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The reserved atom.
pub const ATOM_ZERO: Atom = 0;

/// The maximum instance of an atom.
///
/// Limited by the integer representation of literals.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
