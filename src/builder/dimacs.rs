use std::{
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    context::Context,
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self, ErrorKind},
};

/// Details of a DIMACS formula read into a context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms given in the problem specification, if present.
    pub expected_atoms: Option<usize>,

    /// The count of clauses given in the problem specification, if present.
    pub expected_clauses: Option<usize>,

    /// The count of clauses read.
    pub added_clauses: usize,
}

impl Context {
    /// Reads a DIMACS formula into the context.
    ///
    /// ```rust
    /// # use otter_failing::context::Context;
    /// # use otter_failing::config::Config;
    /// # use otter_failing::reports::Report;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// p cnf 3 3
    ///  1  2    0
    /// -1  3    0
    /// -2  3    0
    /// ");
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.added_clauses, 3);
    ///
    /// assert!(the_context.assume(-3).is_ok());
    /// assert!(the_context.assert_assumptions().is_ok());
    /// assert_eq!(the_context.report(), Report::Unsatisfiable);
    /// assert_eq!(the_context.failed(-3), Ok(true));
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();
        let mut line_counter = 0;

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue,

                Some('%') => break,

                Some('p') => {
                    if info.added_clauses > 0 || !clause_buffer.is_empty() {
                        return Err(err::ParseError::MisplacedProblem(line_counter).into());
                    }

                    let mut details = buffer.split_whitespace().skip(2);
                    let mut count = || -> Result<usize, ErrorKind> {
                        match details.next().map(|string| string.parse()) {
                            Some(Ok(count)) => Ok(count),
                            _ => Err(err::ParseError::ProblemSpecification.into()),
                        }
                    };
                    info.expected_atoms = Some(count()?);
                    info.expected_clauses = Some(count()?);
                }

                _ => {
                    for item in buffer.split_whitespace() {
                        let Ok(literal) = item.parse::<CLiteral>() else {
                            return Err(err::ParseError::Line(line_counter).into());
                        };

                        match literal {
                            0 => {
                                let clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(clause)?;
                                info.added_clauses += 1;
                            }
                            _ => clause_buffer.push(literal),
                        }
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            return Err(err::ParseError::UnterminatedClause.into());
        }

        match info.expected_atoms {
            Some(0) | None => {}
            Some(expected) => match u32::try_from(expected) {
                Ok(atom) => self.ensure_atom(atom)?,
                Err(_) => return Err(err::ParseError::ProblemSpecification.into()),
            },
        }

        Ok(info)
    }
}

impl Context {
    /// Reads the DIMACS formula at `path` into the context.
    ///
    /// With the `xz` feature, a file with the `xz` extension is decompressed as it is read.
    pub fn read_dimacs_path(&mut self, path: &Path) -> Result<ParserInfo, ErrorKind> {
        let file = match std::fs::File::open(path) {
            Ok(file) => file,
            Err(_) => return Err(err::ParseError::NoFile.into()),
        };

        match path.extension() {
            #[cfg(feature = "xz")]
            Some(extension) if extension == "xz" => {
                self.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(file)))
            }

            _ => self.read_dimacs(BufReader::new(file)),
        }
    }
}
