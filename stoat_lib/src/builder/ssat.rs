use std::io::BufRead;

use crate::{
    context::Context,
    structures::{atom::Atom, literal::Literal},
    types::err,
};

/// Which labelled section the reader is inside, if any.
enum Section {
    Preamble,
    Variables,
    Clauses,
}

impl Context {
    /// Reads an `.ssat` instance into the context.
    ///
    /// The representation holds two labelled sections, each a blank-line-terminated list:
    ///
    /// - `variables` --- one `<index> <probability>` line per variable, in declaration order.
    ///   A probability of `-1` marks a choice variable, a value in `[0, 1]` a chance variable.
    /// - `clauses` --- whitespace-separated nonzero signed integers terminated by `0`, with magnitude the 1-based variable index and sign the polarity.
    ///
    /// Lines outside the two sections are ignored.
    /// Anything malformed --- a non-numeric token, a declaration index out of step, a probability outside range, a clause line without its terminating zero or with tokens after it, a literal naming no declared variable --- fails the read with the offending line number, and nothing is solved.
    ///
    /// ```rust
    /// # use stoat_lib::config::Config;
    /// # use stoat_lib::context::Context;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let instance = "
    /// variables
    /// 1 -1
    /// 2 0.5
    ///
    /// clauses
    /// 1 2 0
    /// -1 -2 0
    /// ";
    ///
    /// assert!(the_context.read_ssat(instance.as_bytes()).is_ok());
    /// assert_eq!(the_context.variable_db.count(), 2);
    /// assert_eq!(the_context.formula.clause_count(), 2);
    /// ```
    pub fn read_ssat(&mut self, mut reader: impl BufRead) -> Result<(), err::BuildError> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;
        let mut section = Section::Preamble;

        'line_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'line_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }

            let line = buffer.trim();

            if line.is_empty() {
                // a blank line closes whichever section was open
                section = Section::Preamble;
                continue 'line_loop;
            }

            match section {
                Section::Preamble => match line {
                    "variables" => section = Section::Variables,
                    "clauses" => section = Section::Clauses,
                    _ => {}
                },
                Section::Variables => self.read_variable_line(line, line_counter)?,
                Section::Clauses => self.read_clause_line(line, line_counter)?,
            }
        }

        Ok(())
    }

    fn read_variable_line(&mut self, line: &str, line_counter: usize) -> Result<(), err::BuildError> {
        let mut tokens = line.split_whitespace();
        let (Some(index_token), Some(value_token), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(err::ParseError::VariableDeclaration(line_counter).into());
        };

        let Ok(index) = index_token.parse::<usize>() else {
            return Err(err::ParseError::VariableDeclaration(line_counter).into());
        };
        let Ok(value) = value_token.parse::<f64>() else {
            return Err(err::ParseError::VariableDeclaration(line_counter).into());
        };

        if index != self.variable_db.count() + 1 {
            return Err(err::ParseError::VariableIndex(line_counter).into());
        }

        if value == -1.0 {
            self.fresh_choice();
        } else if (0.0..=1.0).contains(&value) {
            self.fresh_chance(value)?;
        } else {
            return Err(err::ParseError::ProbabilityRange(line_counter).into());
        }

        Ok(())
    }

    fn read_clause_line(&mut self, line: &str, line_counter: usize) -> Result<(), err::BuildError> {
        let mut literals: Vec<Literal> = Vec::new();
        let mut terminated = false;

        for token in line.split_whitespace() {
            if terminated {
                return Err(err::ParseError::TrailingToken(line_counter).into());
            }

            let Ok(value) = token.parse::<isize>() else {
                return Err(err::ParseError::ClauseToken(line_counter).into());
            };

            if value == 0 {
                terminated = true;
                continue;
            }

            let magnitude = value.unsigned_abs();
            if magnitude > self.variable_db.count() {
                return Err(err::ParseError::LiteralRange(line_counter).into());
            }

            literals.push(Literal::new((magnitude - 1) as Atom, value > 0));
        }

        if !terminated {
            return Err(err::ParseError::MissingZero(line_counter).into());
        }

        self.add_clause(literals)
    }
}
