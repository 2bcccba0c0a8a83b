/// An atom --- a variable stripped of its quantifier, identified by an index into the variable database.
///
/// Atoms are 0-based internally; the external representation of an atom, as read from and written to `.ssat` instances, is 1-based.
pub type Atom = u32;
