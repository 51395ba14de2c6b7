//! Grammar symbols are opaque strings. Three values are reserved: ε denotes
//! the empty string, ◇ is the synthetic accepting state introduced when a
//! regular grammar is compiled to an automaton, and ♯ is the end-of-input
//! marker appended to the tape and stack of a top-down simulation.

use derive_more::{AsRef, Display};

pub const EPSILON: &str = "ε";
pub const DIAMOND: &str = "◇";
pub const HASH: &str = "♯";

#[derive(AsRef, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[as_ref(forward)]
pub struct Symbol(String);

impl Symbol {
    pub fn epsilon() -> Symbol {
        Symbol(EPSILON.to_string())
    }

    pub fn diamond() -> Symbol {
        Symbol(DIAMOND.to_string())
    }

    pub fn end_marker() -> Symbol {
        Symbol(HASH.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_epsilon(&self) -> bool {
        self.0 == EPSILON
    }

    // Symbols must be nonempty; the check lives in the constructors of the
    // values that contain them (Production, Transition).
    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Symbol {
        Symbol(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Symbol {
        Symbol(s)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Symbol {
        Symbol(c.to_string())
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
