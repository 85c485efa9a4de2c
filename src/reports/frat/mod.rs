/*!
Tools for creating FRAT proofs by using callbacks.

Full specification of the FRAT format is documented in:
- *A Flexible Proof Format for SAT Solver-Elaborator Communication* (2022) Baek, Carneiro, and Heule.
  - [10.46298/lmcs-18(2:3)2022](https://doi.org/10.46298/lmcs-18(2:3)2022) ([arXiv](https://arxiv.org/abs/2109.09665v3) |  [LMCS](https://lmcs.episciences.org/9357))

Steps:
- Original, `o id literals 0`
- Addition, `a id literals 0`, followed by ` l hints 0` if a chain is given.
- Deletion, `d id literals 0`
- Finalisation, `f id literals 0`

Clause ids are those issued by the [clause database](crate::db::clause), so no translation is required.

# Use

A transcriber is hooked to a context through [attach](callback_templates::attach), after which each step is written as the step is made.

```rust
# use otter_failing::context::Context;
# use otter_failing::config::Config;
# use otter_failing::reports::frat::{Transcriber, callback_templates::attach};
let mut the_context = Context::from_config(Config::default());
let transcriber = attach(&mut the_context, Transcriber::from_writer(Vec::<u8>::new()));

assert!(the_context.add_clause(vec![1, 2]).is_ok());
assert!(the_context.add_clause(vec![-1]).is_ok());

let proof = String::from_utf8(transcriber.borrow().writer().clone()).unwrap();
assert!(proof.starts_with("o 1 1 2 0\n"));
```

Failing clauses are added and immediately deleted, so a proof contains an `a` step and a `d` step with the same id for each failing clause.
*/

pub mod callback_templates;
mod transcriber;

use std::{fs::File, io::Write, path::Path};

/// An intermediate struct to support transforming callbacks from a context to steps in an FRAT proof.
pub struct Transcriber<W: Write> {
    /// The writer to which steps of the proof are written.
    writer: W,

    /// A buffer holding steps until they are written.
    step_buffer: Vec<String>,
}

impl Transcriber<File> {
    /// A new transcriber which will write a proof to the given path.
    pub fn new(path: &Path) -> Result<Self, std::io::Error> {
        let file = std::fs::File::create(path)?;
        Ok(Transcriber::from_writer(file))
    }
}

impl<W: Write> Transcriber<W> {
    /// A new transcriber which will write a proof to `writer`.
    pub fn from_writer(writer: W) -> Self {
        Transcriber {
            writer,
            step_buffer: Vec::default(),
        }
    }

    /// The writer to which steps of the proof are written.
    pub fn writer(&self) -> &W {
        &self.writer
    }
}
