//! The canonical rendering of every model type. Sets always print in
//! sorted order as `{A, B, C}`, so equal values render identically.

use std::fmt::Write as _;

use crate::automaton::{Automaton, State, Transition};
use crate::derivation::Derivation;
use crate::grammar::{EarleyItem, Grammar, Item, Lhs, Production};
use crate::symbol::Symbol;
use crate::tree::Tree;

/// Joins the symbols of a production side; invisible to the eye but keeps
/// multi-character symbols apart in the rendered form.
pub(crate) const HAIR_SPACE: char = '\u{200a}';

pub(crate) fn join_symbols(syms: &[Symbol]) -> String {
    let mut out = String::new();
    for (i, sym) in syms.iter().enumerate() {
        if i > 0 {
            out.push(HAIR_SPACE);
        }
        out.push_str(sym.as_str());
    }
    out
}

fn write_set<T: std::fmt::Display>(
    w: &mut std::fmt::Formatter,
    items: impl Iterator<Item = T>,
) -> std::fmt::Result {
    write!(w, "{{")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(w, ", ")?;
        }
        write!(w, "{}", item)?;
    }
    write!(w, "}}")
}

impl std::fmt::Display for Lhs {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "{}", join_symbols(self.symbols()))
    }
}

impl std::fmt::Display for Production {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "{} -> {}", self.lhs, join_symbols(&self.rhs))
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (pre, post) = self.production.rhs().split_at(self.pos);
        write!(
            w,
            "{} -> {}\u{2022}{}",
            self.production.lhs(),
            join_symbols(pre),
            join_symbols(post)
        )
    }
}

impl std::fmt::Display for EarleyItem {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "{}@{}", self.item, self.orig)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Single(s) => write!(w, "{}", s),
            State::SymbolSet(ss) => write_set(w, ss.iter()),
            State::ItemSet(items) => write_set(w, items.iter()),
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "{}-{}->{}", self.frm, self.label, self.to)
    }
}

impl std::fmt::Display for Automaton {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "Automaton(N=")?;
        write_set(w, self.states().iter())?;
        write!(w, ", T=")?;
        write_set(w, self.symbols().iter())?;
        write!(w, ", transitions=(")?;
        for (i, tr) in self.transitions().iter().enumerate() {
            if i > 0 {
                write!(w, ", ")?;
            }
            write!(w, "{}", tr)?;
        }
        write!(w, "), F=")?;
        write_set(w, self.finals().iter())?;
        write!(w, ", q0={})", self.q0())
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "Grammar(N=")?;
        write_set(w, self.nonterms().iter())?;
        write!(w, ", T=")?;
        write_set(w, self.terms().iter())?;
        write!(w, ", P=(")?;
        for (i, p) in self.productions().iter().enumerate() {
            if i > 0 {
                write!(w, ", ")?;
            }
            write!(w, "{}", p)?;
        }
        write!(w, "), S={})", self.start())
    }
}

impl std::fmt::Display for Derivation<'_> {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "{}", self.repr)
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.children().is_empty() {
            write!(w, "({})", self.root())
        } else {
            write!(w, "({}: ", self.root())?;
            for (i, c) in self.children().iter().enumerate() {
                if i > 0 {
                    write!(w, ", ")?;
                }
                write!(w, "{}", c)?;
            }
            write!(w, ")")
        }
    }
}

/// Renders a set of displayable values the way every `{...}` above does,
/// for use in error messages and tests.
pub fn set_to_string<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    let mut out = String::from("{");
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", item);
    }
    out.push('}');
    out
}
