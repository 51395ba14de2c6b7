//! The (nondeterministic) finite automaton model: a tuple (N, T,
//! transitions, q0, F) where N are the states, T the input symbols,
//! q0 in N the starting state and F ⊆ N the accepting states. A restricted
//! ("regular") grammar compiles directly into one.

use std::collections::BTreeSet;

use crate::error::AutomatonError;
use crate::grammar::{Grammar, Item};
use crate::symbol::Symbol;

#[cfg(test)]
#[path = "tests/automaton.rs"]
mod tests_for_automaton;

/// An automaton state: a single symbol, a set of symbols (as produced by
/// the subset construction), or a set of items (as in LR-style automata).
/// The closed union keeps every state homogeneous by construction; the
/// remaining validity condition is nonemptiness.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum State {
    Single(Symbol),
    SymbolSet(BTreeSet<Symbol>),
    ItemSet(BTreeSet<Item>),
}

impl State {
    fn nonempty(&self) -> bool {
        match self {
            State::Single(s) => !s.is_empty(),
            State::SymbolSet(ss) => !ss.is_empty() && ss.iter().all(|s| !s.is_empty()),
            State::ItemSet(items) => !items.is_empty(),
        }
    }
}

impl From<Symbol> for State {
    fn from(s: Symbol) -> State {
        State::Single(s)
    }
}

impl From<&str> for State {
    fn from(s: &str) -> State {
        State::Single(s.into())
    }
}

impl From<BTreeSet<Symbol>> for State {
    fn from(ss: BTreeSet<Symbol>) -> State {
        State::SymbolSet(ss)
    }
}

impl From<BTreeSet<Item>> for State {
    fn from(items: BTreeSet<Item>) -> State {
        State::ItemSet(items)
    }
}

/// A transition frm-label->to. The label may be ε. Immutable, totally
/// ordered by (frm, label, to).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Transition {
    pub(crate) frm: State,
    pub(crate) label: Symbol,
    pub(crate) to: State,
}

impl Transition {
    pub fn new(
        frm: impl Into<State>,
        label: impl Into<Symbol>,
        to: impl Into<State>,
    ) -> Result<Transition, AutomatonError> {
        let (frm, label, to) = (frm.into(), label.into(), to.into());
        if !frm.nonempty() {
            return Err(AutomatonError::InvalidState { which: "frm" });
        }
        if label.is_empty() {
            return Err(AutomatonError::InvalidLabel);
        }
        if !to.nonempty() {
            return Err(AutomatonError::InvalidState { which: "to" });
        }
        Ok(Transition { frm, label, to })
    }

    pub fn frm(&self) -> &State {
        &self.frm
    }

    pub fn label(&self) -> &Symbol {
        &self.label
    }

    pub fn to(&self) -> &State {
        &self.to
    }

    /// Parses one `frm, label, to` transition per line, parts trimmed,
    /// blank lines ignored.
    pub fn from_text(source: &str) -> Result<Vec<Transition>, AutomatonError> {
        let mut transitions = Vec::new();
        for line in source.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let parts: Vec<&str> = line.split(',').map(str::trim).collect();
            if let [frm, label, to] = parts.as_slice() {
                transitions.push(Transition::new(*frm, *label, State::from(*to))?);
            } else {
                return Err(AutomatonError::MalformedAutomaton {
                    line: line.to_string(),
                });
            }
        }
        Ok(transitions)
    }
}

#[derive(Clone, Debug)]
pub struct Automaton {
    n: BTreeSet<State>,
    t: BTreeSet<Symbol>,
    transitions: Vec<Transition>,
    q0: State,
    f: BTreeSet<State>,
}

impl Automaton {
    pub fn new(
        n: BTreeSet<State>,
        t: BTreeSet<Symbol>,
        transitions: Vec<Transition>,
        q0: State,
        f: BTreeSet<State>,
    ) -> Result<Automaton, AutomatonError> {
        let common: Vec<&Symbol> = t
            .iter()
            .filter(|sym| n.contains(&State::Single((*sym).clone())))
            .collect();
        if !common.is_empty() {
            return Err(AutomatonError::NotDisjoint {
                common: common
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
        if !n.contains(&q0) {
            return Err(AutomatonError::StartNotState { q0: q0.to_string() });
        }
        let stray: Vec<String> = f
            .iter()
            .filter(|state| !n.contains(state))
            .map(|state| state.to_string())
            .collect();
        if !stray.is_empty() {
            return Err(AutomatonError::FinalNotState {
                states: format!("{{{}}}", stray.join(", ")),
            });
        }
        let bad: Vec<String> = transitions
            .iter()
            .filter(|tr| {
                !n.contains(&tr.frm)
                    || !n.contains(&tr.to)
                    || !(tr.label.is_epsilon() || t.contains(&tr.label))
            })
            .map(|tr| tr.to_string())
            .collect();
        if !bad.is_empty() {
            return Err(AutomatonError::UnknownTransitionParts {
                transitions: bad.join(", "),
            });
        }
        Ok(Automaton {
            n,
            t,
            transitions,
            q0,
            f,
        })
    }

    /// Compiles a regular grammar: `A -> a B` becomes a transition A-a->B,
    /// `A -> B` an ε-transition, and `A -> a` a transition into the
    /// synthetic accepting state ◇; anything else is not regular. The result
    /// has N ∪ {◇}, F = {◇} and q0 = S.
    pub fn from_grammar(g: &Grammar) -> Result<Automaton, AutomatonError> {
        let not_regular = |p: &crate::grammar::Production, reason: &'static str| {
            AutomatonError::NotRegular {
                production: p.to_string(),
                reason,
            }
        };
        let mut transitions = Vec::new();
        for p in g.productions() {
            let lhs = p
                .lhs()
                .as_single()
                .ok_or_else(|| not_regular(p, "the lefthand side is not a single nonterminal"))?
                .clone();
            match p.rhs() {
                [a, b] => {
                    if g.terms().contains(a) && g.nonterms().contains(b) {
                        transitions.push(Transition {
                            frm: State::Single(lhs),
                            label: a.clone(),
                            to: State::Single(b.clone()),
                        });
                    } else {
                        return Err(not_regular(p, "the righthand side is not of the aB form"));
                    }
                }
                [x] if g.nonterms().contains(x) => {
                    transitions.push(Transition {
                        frm: State::Single(lhs),
                        label: Symbol::epsilon(),
                        to: State::Single(x.clone()),
                    });
                }
                [x] => {
                    transitions.push(Transition {
                        frm: State::Single(lhs),
                        label: x.clone(),
                        to: State::Single(Symbol::diamond()),
                    });
                }
                _ => {
                    return Err(not_regular(
                        p,
                        "it has more than two symbols on the righthand side",
                    ))
                }
            }
        }
        let mut n: BTreeSet<State> = g.nonterms().iter().cloned().map(State::Single).collect();
        n.insert(State::Single(Symbol::diamond()));
        let f = BTreeSet::from([State::Single(Symbol::diamond())]);
        Automaton::new(
            n,
            g.terms().clone(),
            transitions,
            State::Single(g.start().clone()),
            f,
        )
    }

    /// Builds an automaton from the `frm, label, to` text format. The
    /// states and input symbols are inferred from the transitions; `q0`
    /// defaults to the `frm` of the first transition, `f` to the empty set.
    pub fn from_text(
        source: &str,
        f: Option<BTreeSet<State>>,
        q0: Option<State>,
    ) -> Result<Automaton, AutomatonError> {
        let transitions = Transition::from_text(source)?;
        let first = transitions.first().ok_or(AutomatonError::NoTransitions)?;
        let q0 = q0.unwrap_or_else(|| first.frm.clone());
        let n = transitions
            .iter()
            .flat_map(|tr| [tr.frm.clone(), tr.to.clone()])
            .collect();
        let t = transitions
            .iter()
            .filter(|tr| !tr.label.is_epsilon())
            .map(|tr| tr.label.clone())
            .collect();
        Automaton::new(n, t, transitions, q0, f.unwrap_or_default())
    }

    pub fn states(&self) -> &BTreeSet<State> {
        &self.n
    }

    pub fn symbols(&self) -> &BTreeSet<Symbol> {
        &self.t
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn q0(&self) -> &State {
        &self.q0
    }

    pub fn finals(&self) -> &BTreeSet<State> {
        &self.f
    }

    /// The transition function δ: the set of states reachable from `x` on
    /// `sym`. May be empty; never fails.
    pub fn delta(&self, x: &State, sym: &Symbol) -> BTreeSet<State> {
        self.transitions
            .iter()
            .filter(|tr| &tr.frm == x && &tr.label == sym)
            .map(|tr| tr.to.clone())
            .collect()
    }

    /// Joins every set-of-symbols state into a single state named by its
    /// sorted concatenated members, which makes subset-construction output
    /// readable. Item-set states are left untouched.
    pub fn coalesce(&self) -> Automaton {
        fn joined(state: &State) -> State {
            match state {
                State::SymbolSet(ss) => {
                    let name: String = ss.iter().map(Symbol::as_str).collect();
                    State::Single(name.into())
                }
                other => other.clone(),
            }
        }
        Automaton {
            n: self.n.iter().map(joined).collect(),
            t: self.t.clone(),
            transitions: self
                .transitions
                .iter()
                .map(|tr| Transition {
                    frm: joined(&tr.frm),
                    label: tr.label.clone(),
                    to: joined(&tr.to),
                })
                .collect(),
            q0: joined(&self.q0),
            f: self.f.iter().map(joined).collect(),
        }
    }
}
