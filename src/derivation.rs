//! Immutable derivations. A derivation is a state of the rewriting machine:
//! it holds the current sentential form and the ordered (production,
//! position) applications that produced it. Every step returns a new value
//! and never alters the original, so several branches of a search can be
//! held and explored at once.

use std::hash::{Hash, Hasher};

use crate::display::join_symbols;
use crate::error::DerivationError;
use crate::grammar::{Grammar, Production};
use crate::symbol::Symbol;
use crate::util::Bother;

#[cfg(test)]
#[path = "tests/derivation.rs"]
mod tests_for_derivation;

#[derive(Clone, Debug)]
pub struct Derivation<'g> {
    grammar: &'g Grammar,
    start: Symbol,
    sf: Vec<Symbol>,
    steps: Vec<(usize, usize)>,
    pub(crate) repr: String,
}

impl<'g> Derivation<'g> {
    /// A fresh derivation starting from the grammar's start symbol.
    pub fn new(grammar: &'g Grammar) -> Derivation<'g> {
        let start = grammar.start().clone();
        Derivation {
            grammar,
            sf: vec![start.clone()],
            repr: start.as_str().to_string(),
            start,
            steps: Vec::new(),
        }
    }

    /// A fresh derivation starting from the given nonterminal.
    pub fn from_start(
        grammar: &'g Grammar,
        start: impl Into<Symbol>,
    ) -> Result<Derivation<'g>, DerivationError> {
        let start = start.into();
        if !grammar.nonterms().contains(&start) {
            return Err(DerivationError::UnknownStart(start));
        }
        Ok(Derivation {
            grammar,
            sf: vec![start.clone()],
            repr: start.as_str().to_string(),
            start,
            steps: Vec::new(),
        })
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    pub fn sentential_form(&self) -> &[Symbol] {
        &self.sf
    }

    pub fn steps(&self) -> &[(usize, usize)] {
        &self.steps
    }

    /// Applies production `prod` at position `pos` of the sentential form:
    /// the production's unrestricted lefthand side must equal the
    /// sub-sequence starting there. The righthand side is spliced in and
    /// every ε is removed from the result.
    pub fn step(&self, prod: usize, pos: usize) -> Result<Derivation<'g>, DerivationError> {
        let p = self
            .grammar
            .productions()
            .get(prod)
            .ok_or(DerivationError::NoSuchProduction(prod))?;
        let lhs = p.as_unrestricted();
        let matches = self
            .sf
            .get(pos..pos + lhs.len())
            .map_or(false, |slice| slice == lhs);
        if !matches {
            return Err(DerivationError::StepMismatch {
                production: p.to_string(),
                pos,
                sentential_form: join_symbols(&self.sf),
            });
        }
        let mut sf = Vec::with_capacity(self.sf.len() + p.rhs().len());
        sf.extend_from_slice(&self.sf[..pos]);
        sf.extend(p.rhs().iter().cloned());
        sf.extend_from_slice(&self.sf[pos + lhs.len()..]);
        sf.retain(|sym| !sym.is_epsilon());
        let mut steps = self.steps.clone();
        steps.push((prod, pos));
        let repr = format!("{} -> {}", self.repr, join_symbols(&sf));
        Ok(Derivation {
            grammar: self.grammar,
            start: self.start.clone(),
            sf,
            steps,
            repr,
        })
    }

    /// Applies `prod` to the leftmost nonterminal of the sentential form.
    pub fn leftmost(&self, prod: usize) -> Result<Derivation<'g>, DerivationError> {
        self.directed(prod, "left")
    }

    /// Applies `prod` to the rightmost nonterminal of the sentential form.
    pub fn rightmost(&self, prod: usize) -> Result<Derivation<'g>, DerivationError> {
        self.directed(prod, "right")
    }

    fn directed(&self, prod: usize, side: &'static str) -> Result<Derivation<'g>, DerivationError> {
        if !self.grammar.is_context_free() {
            return Err(DerivationError::NotContextFree);
        }
        let p = self
            .grammar
            .productions()
            .get(prod)
            .ok_or(DerivationError::NoSuchProduction(prod))?;
        let positions: Box<dyn Iterator<Item = usize>> = if side == "right" {
            Box::new((0..self.sf.len()).rev())
        } else {
            Box::new(0..self.sf.len())
        };
        for pos in positions {
            let symbol = &self.sf[pos];
            if self.grammar.nonterms().contains(symbol) {
                return if p.lhs().as_single() == Some(symbol) {
                    self.step(prod, pos)
                } else {
                    Err(DerivationError::WrongNonterminal {
                        production: p.to_string(),
                        symbol: symbol.clone(),
                        side,
                        sentential_form: join_symbols(&self.sf),
                    })
                };
            }
        }
        Err(DerivationError::NoNonterminal {
            production: p.to_string(),
            sentential_form: join_symbols(&self.sf),
        })
    }

    /// Threads the derivation through a sequence of (production, position)
    /// steps, stopping at the first failure.
    pub fn step_all(&self, steps: &[(usize, usize)]) -> Result<Derivation<'g>, DerivationError> {
        let mut d = self.clone();
        for &(prod, pos) in steps {
            d = d.step(prod, pos)?;
        }
        Ok(d)
    }

    /// Applies a sequence of leftmost steps, stopping at the first failure.
    pub fn leftmost_all(&self, prods: &[usize]) -> Result<Derivation<'g>, DerivationError> {
        let mut d = self.clone();
        for &prod in prods {
            d = d.leftmost(prod)?;
        }
        Ok(d)
    }

    /// Applies a sequence of rightmost steps, stopping at the first failure.
    pub fn rightmost_all(&self, prods: &[usize]) -> Result<Derivation<'g>, DerivationError> {
        let mut d = self.clone();
        for &prod in prods {
            d = d.rightmost(prod)?;
        }
        Ok(d)
    }

    /// All the (production, position) pairs applicable to the current
    /// sentential form, optionally constrained to one production and/or one
    /// position. Lazy and finite; call again to restart.
    pub fn possible_steps<'a>(
        &'a self,
        prod: Option<usize>,
        pos: Option<usize>,
    ) -> Box<dyn Iterator<Item = (usize, usize)> + 'a> {
        let prods: Box<dyn Iterator<Item = (usize, &'a Production)> + 'a> = match prod {
            Some(i) => self
                .grammar
                .productions()
                .get(i)
                .map(|p| (i, p))
                .b_iter(),
            None => Box::new(self.grammar.productions().iter().enumerate()),
        };
        Box::new(prods.flat_map(move |(i, p)| {
            let lhs = p.as_unrestricted();
            let sf = &self.sf;
            let positions: Box<dyn Iterator<Item = usize>> = match pos {
                Some(at) => Some(at).b_iter(),
                None => Box::new(0..sf.len().saturating_sub(lhs.len()) + 1),
            };
            positions.filter_map(move |at| {
                let matches = sf.get(at..at + lhs.len()).map_or(false, |s| s == lhs);
                matches.then_some((i, at))
            })
        }))
    }
}

// The sentential form is a function of (grammar, start, steps), so it takes
// no part in equality or hashing.
impl PartialEq for Derivation<'_> {
    fn eq(&self, other: &Derivation<'_>) -> bool {
        self.grammar == other.grammar && self.start == other.start && self.steps == other.steps
    }
}

impl Eq for Derivation<'_> {}

impl Hash for Derivation<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grammar.hash(state);
        self.start.hash(state);
        self.steps.hash(state);
    }
}
