//! A toolkit for playing with the objects of formal-language theory:
//! grammars and their productions, step-by-step derivations, finite
//! automata, and pushdown-automaton simulations. Everything is an
//! immutable value with a deterministic canonical rendering, so two equal
//! objects always print the same.

pub mod automaton;
pub mod derivation;
mod display;
pub mod error;
pub mod grammar;
pub mod pushdown;
pub mod stack;
pub mod symbol;
pub mod tree;
mod util;

pub use crate::automaton::{Automaton, State, Transition};
pub use crate::derivation::Derivation;
pub use crate::display::set_to_string;
pub use crate::error::{AutomatonError, DerivationError, GrammarError, SimulationError};
pub use crate::grammar::{EarleyItem, Grammar, Item, Lhs, Production};
pub use crate::pushdown::{
    BottomUpInstantaneousDescription, InstantaneousDescription, TopDownInstantaneousDescription,
};
pub use crate::stack::Stack;
pub use crate::symbol::Symbol;
pub use crate::tree::Tree;
