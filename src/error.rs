//! Failure taxonomy. Construction-invariant violations and malformed text
//! are fatal to the constructing call; operation-precondition violations are
//! fatal to that single call. Nothing here is recovered internally: retrying
//! (say, the next alternative production during a search) is the caller's
//! job, which the pure step functions make safe.

use thiserror::Error;

use crate::symbol::Symbol;

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum GrammarError {
    #[error("the lefthand side is not a nonempty symbol, nor a nonempty sequence of nonempty symbols")]
    InvalidLhs,
    #[error("the righthand side is not a nonempty sequence of nonempty symbols")]
    InvalidRhs,
    #[error("the righthand side contains ε but has more than one symbol")]
    EpsilonNotAlone,
    #[error("the lefthand side of an item must be a single symbol")]
    ItemLhsNotSingle,
    #[error("the dot position {pos} falls outside the righthand side of {production}")]
    DotOutOfRange { production: String, pos: usize },
    #[error("the sets of terminals and nonterminals are not disjoint, but have {{{common}}} in common")]
    NotDisjoint { common: String },
    #[error("the start symbol {start} is not a nonterminal")]
    StartNotNonterminal { start: Symbol },
    #[error("the following productions have a lefthand side that is not a nonterminal: {productions}")]
    LhsNotNonterminal { productions: String },
    #[error("the following productions contain symbols that are neither terminals nor nonterminals: {productions}")]
    UnknownSymbols { productions: String },
    #[error("malformed production \"{line}\": {reason}")]
    MalformedGrammar { line: String, reason: String },
    #[error("the start symbol {start} is not among the symbols to restrict to")]
    StartNotKept { start: Symbol },
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum DerivationError {
    #[error("there is no production with index {0}")]
    NoSuchProduction(usize),
    #[error("cannot apply {production} at position {pos} of {sentential_form}")]
    StepMismatch {
        production: String,
        pos: usize,
        sentential_form: String,
    },
    #[error("cannot perform a leftmost or rightmost derivation on a non context-free grammar")]
    NotContextFree,
    #[error("cannot apply {production}: there are no nonterminals in {sentential_form}")]
    NoNonterminal {
        production: String,
        sentential_form: String,
    },
    #[error("cannot apply {production}: the {side}most nonterminal of {sentential_form} is {symbol}")]
    WrongNonterminal {
        production: String,
        symbol: Symbol,
        side: &'static str,
        sentential_form: String,
    },
    #[error("the start symbol {0} is not a nonterminal of the grammar")]
    UnknownStart(Symbol),
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum AutomatonError {
    #[error("the {which} state is not a nonempty symbol, nor a nonempty set of nonempty symbols or items")]
    InvalidState { which: &'static str },
    #[error("the label is not a nonempty symbol")]
    InvalidLabel,
    #[error("the sets of states and input symbols are not disjoint, but have {{{common}}} in common")]
    NotDisjoint { common: String },
    #[error("the specified q0 ({q0}) is not a state")]
    StartNotState { q0: String },
    #[error("the accepting states {states} in F are not states")]
    FinalNotState { states: String },
    #[error("the following transitions contain states or symbols that are neither states nor input symbols: {transitions}")]
    UnknownTransitionParts { transitions: String },
    #[error("production {production} is not of a regular form: {reason}")]
    NotRegular {
        production: String,
        reason: &'static str,
    },
    #[error("malformed transition \"{line}\": expected \"frm, label, to\"")]
    MalformedAutomaton { line: String },
    #[error("the source contains no transitions")]
    NoTransitions,
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum SimulationError {
    #[error("the grammar symbols contain the end-of-input marker ♯")]
    EndMarkerInGrammar,
    #[error("the tape head at position {pos} is past the end of the tape")]
    HeadOutOfBounds { pos: usize },
    #[error("the stack is empty")]
    EmptyStack,
    #[error("cannot predict {production}: the top of the stack is {top}")]
    PredictMismatch { production: String, top: String },
    #[error("cannot match the tape symbol {head} against the stack top {top}")]
    MatchMismatch { top: String, head: String },
    #[error("cannot reduce {production}: the topmost subtrees do not match its righthand side")]
    ReduceMismatch { production: String },
}
