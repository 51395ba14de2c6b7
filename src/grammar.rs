//! The grammar model: productions, dotted items, and validated grammars.
//!
//! A grammar G is a tuple (N, T, P, S), where
//!   N is the finite set of nonterminals,
//!   T is the finite set of terminals,
//!   P is the sequence of productions (ordered: indices identify them), and
//!   S in N is the start symbol.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use crate::error::GrammarError;
use crate::symbol::Symbol;

#[cfg(test)]
#[path = "tests/grammar.rs"]
mod tests_for_grammar;

/// The lefthand side of a production: a single symbol in the context-free
/// case, a sequence of symbols in the unrestricted one. The two are distinct
/// values even when the sequence has one element.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Lhs {
    Single(Symbol),
    Sequence(Vec<Symbol>),
}

impl Lhs {
    /// The unrestricted (type-0) view: a single-symbol lefthand side reads
    /// as a one-element sequence. Cheap, no allocation.
    pub fn symbols(&self) -> &[Symbol] {
        match self {
            Lhs::Single(s) => std::slice::from_ref(s),
            Lhs::Sequence(ss) => ss,
        }
    }

    pub fn as_single(&self) -> Option<&Symbol> {
        match self {
            Lhs::Single(s) => Some(s),
            Lhs::Sequence(_) => None,
        }
    }

    fn well_formed(&self) -> bool {
        match self {
            Lhs::Single(s) => !s.is_empty(),
            Lhs::Sequence(ss) => !ss.is_empty() && ss.iter().all(|s| !s.is_empty()),
        }
    }
}

impl From<Symbol> for Lhs {
    fn from(s: Symbol) -> Lhs {
        Lhs::Single(s)
    }
}

impl From<&str> for Lhs {
    fn from(s: &str) -> Lhs {
        Lhs::Single(s.into())
    }
}

impl From<Vec<Symbol>> for Lhs {
    fn from(ss: Vec<Symbol>) -> Lhs {
        Lhs::Sequence(ss)
    }
}

/// A production lhs -> rhs. The righthand side is a nonempty sequence of
/// symbols; ε may appear in it only as the sole element. Productions are
/// immutable and compare structurally by (lhs, rhs).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Production {
    pub(crate) lhs: Lhs,
    pub(crate) rhs: Vec<Symbol>,
}

impl Production {
    pub fn new(
        lhs: impl Into<Lhs>,
        rhs: impl IntoIterator<Item = impl Into<Symbol>>,
    ) -> Result<Production, GrammarError> {
        let lhs = lhs.into();
        let rhs: Vec<Symbol> = rhs.into_iter().map(Into::into).collect();
        if !lhs.well_formed() {
            return Err(GrammarError::InvalidLhs);
        }
        if rhs.is_empty() || rhs.iter().any(|s| s.is_empty()) {
            return Err(GrammarError::InvalidRhs);
        }
        if rhs.iter().any(Symbol::is_epsilon) && rhs.len() != 1 {
            return Err(GrammarError::EpsilonNotAlone);
        }
        Ok(Production { lhs, rhs })
    }

    pub fn lhs(&self) -> &Lhs {
        &self.lhs
    }

    pub fn rhs(&self) -> &[Symbol] {
        &self.rhs
    }

    /// The unrestricted view of the lefthand side, usable wherever it must
    /// be matched positionally against a sentential form.
    pub fn as_unrestricted(&self) -> &[Symbol] {
        self.lhs.symbols()
    }

    /// Parses the line-oriented `lhs -> rhs1 | rhs2 | ...` format; see
    /// [`Grammar::from_text`] for the conventions. Productions keep the
    /// order in which they appear in the source.
    pub fn from_text(source: &str, context_free: bool) -> Result<Vec<Production>, GrammarError> {
        let malformed = |line: &str, reason: String| GrammarError::MalformedGrammar {
            line: line.to_string(),
            reason,
        };
        let mut prods = Vec::new();
        for line in source.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let (lh, rha) = line
                .split_once("->")
                .ok_or_else(|| malformed(line, "expected \"lhs -> rhs\"".to_string()))?;
            let lhs_syms: Vec<Symbol> = lh.split_whitespace().map(Symbol::from).collect();
            let lhs = if context_free {
                if let [sym] = lhs_syms.as_slice() {
                    Lhs::Single(sym.clone())
                } else {
                    return Err(malformed(
                        line,
                        "more than one symbol as lefthand side, that is forbidden in a context-free grammar"
                            .to_string(),
                    ));
                }
            } else {
                Lhs::Sequence(lhs_syms)
            };
            for rh in rha.split('|') {
                let rhs: Vec<Symbol> = rh.split_whitespace().map(Symbol::from).collect();
                let p =
                    Production::new(lhs.clone(), rhs).map_err(|e| malformed(line, e.to_string()))?;
                prods.push(p);
            }
        }
        Ok(prods)
    }
}

/// A dotted item A -> α•β: `pos` marks how much of the righthand side has
/// been recognized so far. Equality and ordering include the dot.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Item {
    pub(crate) production: Production,
    pub(crate) pos: usize,
}

impl Item {
    pub fn new(production: Production, pos: usize) -> Result<Item, GrammarError> {
        if production.lhs.as_single().is_none() {
            return Err(GrammarError::ItemLhsNotSingle);
        }
        if pos > production.rhs.len() {
            return Err(GrammarError::DotOutOfRange {
                production: production.to_string(),
                pos,
            });
        }
        Ok(Item { production, pos })
    }

    pub fn production(&self) -> &Production {
        &self.production
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The symbol right after the dot, or `None` when the dot sits at the
    /// end of the righthand side.
    pub fn symbol_after_dot(&self) -> Option<&Symbol> {
        self.production.rhs.get(self.pos)
    }

    /// Advances the dot over `x`, returning the new item; `None` if the
    /// symbol after the dot is not `x`. Never mutates: items are the
    /// building blocks of item-set closures, which branch freely.
    pub fn advance(&self, x: &Symbol) -> Option<Item> {
        match self.symbol_after_dot() {
            Some(s) if s == x => Some(Item {
                production: self.production.clone(),
                pos: self.pos + 1,
            }),
            _ => None,
        }
    }
}

/// An item plus the input position where its recognition began. Data only:
/// no recognizer lives here, the vocabulary is for consumers building
/// Earley-style algorithms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct EarleyItem {
    pub(crate) item: Item,
    pub(crate) orig: usize,
}

impl EarleyItem {
    pub fn new(item: Item, orig: usize) -> EarleyItem {
        EarleyItem { item, orig }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn orig(&self) -> usize {
        self.orig
    }
}

/// A validated grammar (N, T, P, S). Immutable once constructed; equality
/// and hashing sort P first, so listing the same productions in a different
/// order yields an equal grammar even though P's order matters for indexing.
#[derive(Clone, Debug)]
pub struct Grammar {
    n: BTreeSet<Symbol>,
    t: BTreeSet<Symbol>,
    p: Vec<Production>,
    s: Symbol,
    context_free: bool,
}

impl Grammar {
    pub fn new(
        n: BTreeSet<Symbol>,
        t: BTreeSet<Symbol>,
        p: Vec<Production>,
        s: Symbol,
    ) -> Result<Grammar, GrammarError> {
        let context_free = p.iter().all(|prod| prod.lhs.as_single().is_some());
        let common: Vec<&Symbol> = n.intersection(&t).collect();
        if !common.is_empty() {
            return Err(GrammarError::NotDisjoint {
                common: common
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
        if !n.contains(&s) {
            return Err(GrammarError::StartNotNonterminal { start: s });
        }
        if context_free {
            let bad: Vec<String> = p
                .iter()
                .filter(|prod| prod.lhs.as_single().map_or(false, |l| !n.contains(l)))
                .map(|prod| prod.to_string())
                .collect();
            if !bad.is_empty() {
                return Err(GrammarError::LhsNotNonterminal {
                    productions: bad.join(", "),
                });
            }
        }
        let known = |sym: &Symbol| sym.is_epsilon() || n.contains(sym) || t.contains(sym);
        let bad: Vec<String> = p
            .iter()
            .filter(|prod| !prod.as_unrestricted().iter().all(known) || !prod.rhs.iter().all(known))
            .map(|prod| prod.to_string())
            .collect();
        if !bad.is_empty() {
            return Err(GrammarError::UnknownSymbols {
                productions: bad.join(", "),
            });
        }
        Ok(Grammar {
            n,
            t,
            p,
            s,
            context_free,
        })
    }

    /// Builds a grammar from the line-oriented text format: one production
    /// group per line, `lhs -> rhs1 | rhs2 | ...`, sides whitespace-split,
    /// blank lines ignored. With `context_free` the nonterminals are exactly
    /// the lefthand sides; otherwise a symbol is a nonterminal iff its first
    /// character is uppercase. The start symbol is the (first symbol of the)
    /// lefthand side of the first production.
    pub fn from_text(source: &str, context_free: bool) -> Result<Grammar, GrammarError> {
        let p = Production::from_text(source, context_free)?;
        let first = p.first().ok_or_else(|| GrammarError::MalformedGrammar {
            line: String::new(),
            reason: "the source contains no productions".to_string(),
        })?;
        // lefthand sides are nonempty by the Production invariant
        let s = first.as_unrestricted()[0].clone();
        let (n, t) = if context_free {
            let n: BTreeSet<Symbol> = p
                .iter()
                .filter_map(|prod| prod.lhs.as_single().cloned())
                .collect();
            let t = p
                .iter()
                .flat_map(|prod| prod.rhs.iter())
                .filter(|sym| !sym.is_epsilon() && !n.contains(*sym))
                .cloned()
                .collect();
            (n, t)
        } else {
            let symbols: BTreeSet<Symbol> = p
                .iter()
                .flat_map(|prod| prod.lhs.symbols().iter().chain(prod.rhs.iter()))
                .cloned()
                .collect();
            let n: BTreeSet<Symbol> = symbols
                .iter()
                .filter(|sym| sym.as_str().chars().next().map_or(false, char::is_uppercase))
                .cloned()
                .collect();
            let t = symbols
                .into_iter()
                .filter(|sym| !sym.is_epsilon() && !n.contains(sym))
                .collect();
            (n, t)
        };
        Grammar::new(n, t, p, s)
    }

    pub fn nonterms(&self) -> &BTreeSet<Symbol> {
        &self.n
    }

    pub fn terms(&self) -> &BTreeSet<Symbol> {
        &self.t
    }

    pub fn productions(&self) -> &[Production] {
        &self.p
    }

    pub fn start(&self) -> &Symbol {
        &self.s
    }

    pub fn is_context_free(&self) -> bool {
        self.context_free
    }

    /// Yields the righthand sides of all productions whose unrestricted
    /// lefthand side equals `lhs`, in P order.
    pub fn alternatives<'a>(&'a self, lhs: &'a [Symbol]) -> impl Iterator<Item = &'a [Symbol]> {
        self.p
            .iter()
            .filter(move |prod| prod.as_unrestricted() == lhs)
            .map(|prod| prod.rhs())
    }

    /// A new grammar keeping only the productions wholly contained (ε aside)
    /// in `symbols`; fails if the start symbol is not among them.
    pub fn restrict_to(&self, symbols: &BTreeSet<Symbol>) -> Result<Grammar, GrammarError> {
        if !symbols.contains(&self.s) {
            return Err(GrammarError::StartNotKept {
                start: self.s.clone(),
            });
        }
        let keep = |sym: &Symbol| sym.is_epsilon() || symbols.contains(sym);
        let p = self
            .p
            .iter()
            .filter(|prod| prod.as_unrestricted().iter().all(keep) && prod.rhs.iter().all(keep))
            .cloned()
            .collect();
        Grammar::new(
            self.n.intersection(symbols).cloned().collect(),
            self.t.intersection(symbols).cloned().collect(),
            p,
            self.s.clone(),
        )
    }

    pub(crate) fn sorted_productions(&self) -> Vec<&Production> {
        let mut sorted: Vec<&Production> = self.p.iter().collect();
        sorted.sort();
        sorted
    }
}

impl PartialEq for Grammar {
    fn eq(&self, other: &Grammar) -> bool {
        (&self.n, &self.t, self.sorted_productions(), &self.s)
            == (&other.n, &other.t, other.sorted_productions(), &other.s)
    }
}

impl Eq for Grammar {}

impl Hash for Grammar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.n.hash(state);
        self.t.hash(state);
        self.sorted_productions().hash(state);
        self.s.hash(state);
    }
}
