/*
Names of the error enums --- for the most part --- overlap with the concern they belong to.

So, intended use is to namespace errors via the module.

For example:
- use err::{self}
- …
- err::<TYPE>
 */

/// Errors from reading the `.ssat` representation of an instance.
///
/// Each variant carries the number of the offending line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    Line(usize),                // The line could not be read
    VariableDeclaration(usize), // A variable line without an index and probability pair
    VariableIndex(usize),       // A declaration index out of step with the declaration count
    ProbabilityRange(usize),    // A probability outside [0, 1] which is not the choice marker
    ClauseToken(usize),         // A non-numeric token on a clause line
    MissingZero(usize),         // A clause line without its terminating zero
    TrailingToken(usize),       // A token after the terminating zero of a clause line
    LiteralRange(usize),        // A literal whose magnitude names no declared variable
}

/// Errors from building a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    OutOfRangeAtom,    // A literal references an undeclared variable
    ProbabilityRange,  // A chance probability outside [0, 1]
    Parse(ParseError), // The reader failed
}

impl From<ParseError> for BuildError {
    fn from(error: ParseError) -> Self {
        BuildError::Parse(error)
    }
}
