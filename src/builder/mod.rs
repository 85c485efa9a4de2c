/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [fresh_atom](crate::context::Context::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::Context::add_clause), to add a clause.

A formula may also be read from its DIMACS representation, through [read_dimacs](crate::context::Context::read_dimacs).
Atoms of a DIMACS formula are atoms of the context, so literals read are used as they are.

# Examples

```rust
# use otter_failing::context::Context;
# use otter_failing::config::Config;
# use otter_failing::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_atom().unwrap();
let q = the_context.fresh_atom().unwrap();

let clause_a = vec![CLiteral::new(p, true), CLiteral::new(q, false)];
let clause_b = vec![CLiteral::new(p, false), CLiteral::new(q, true)];

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());
assert_eq!(the_context.clause_db.count(), 2);
```
*/

mod dimacs;
pub use dimacs::ParserInfo;
