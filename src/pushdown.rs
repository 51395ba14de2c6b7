//! Pushdown-automaton configurations ("instantaneous descriptions"): a
//! tape, a head position, a stack, and the steps taken so far. Every move
//! returns a fresh configuration and leaves the original alone, so a
//! search over alternative moves just keeps the configurations it likes
//! and drops the rest.

use std::collections::VecDeque;

use crate::error::SimulationError;
use crate::grammar::{Grammar, Production};
use crate::stack::Stack;
use crate::symbol::Symbol;
use crate::tree::Tree;

#[cfg(test)]
#[path = "tests/pushdown.rs"]
mod tests_for_pushdown;

/// What top-down and bottom-up configurations have in common. `top` reads
/// through to the root symbol when the stack holds trees.
pub trait InstantaneousDescription {
    fn tape(&self) -> &[Symbol];

    fn head_pos(&self) -> usize;

    /// The tape symbol under the head.
    fn head(&self) -> Result<&Symbol, SimulationError> {
        self.tape()
            .get(self.head_pos())
            .ok_or(SimulationError::HeadOutOfBounds {
                pos: self.head_pos(),
            })
    }

    /// The symbol on top of the stack.
    fn top(&self) -> Result<&Symbol, SimulationError>;

    fn is_done(&self) -> bool;
}

/// A predictive (LL-style) configuration. The tape is the input followed
/// by ♯ and the stack starts as [♯, S] with S on top; `predict` expands
/// the nonterminal on top, `match_head` consumes a terminal against the
/// tape.
#[derive(Clone, Debug)]
pub struct TopDownInstantaneousDescription<'g> {
    grammar: &'g Grammar,
    tape: Vec<Symbol>,
    head: usize,
    stack: Stack<Symbol>,
    steps: Vec<Production>,
}

impl<'g> TopDownInstantaneousDescription<'g> {
    pub fn new(
        grammar: &'g Grammar,
        input: impl IntoIterator<Item = impl Into<Symbol>>,
    ) -> Result<TopDownInstantaneousDescription<'g>, SimulationError> {
        let marker = Symbol::end_marker();
        if grammar.nonterms().contains(&marker) || grammar.terms().contains(&marker) {
            return Err(SimulationError::EndMarkerInGrammar);
        }
        let mut tape: Vec<Symbol> = input.into_iter().map(Into::into).collect();
        tape.push(marker.clone());
        let stack = Stack::new().push(marker).push(grammar.start().clone());
        Ok(TopDownInstantaneousDescription {
            grammar,
            tape,
            head: 0,
            stack,
            steps: Vec::new(),
        })
    }

    pub fn stack(&self) -> &Stack<Symbol> {
        &self.stack
    }

    pub fn steps(&self) -> &[Production] {
        &self.steps
    }

    /// Expands the nonterminal on top of the stack with `p`: the top is
    /// replaced by the righthand side, its first symbol uppermost, with ε
    /// not pushed at all.
    pub fn predict(
        &self,
        p: &Production,
    ) -> Result<TopDownInstantaneousDescription<'g>, SimulationError> {
        let mismatch = || SimulationError::PredictMismatch {
            production: p.to_string(),
            top: self.top().map_or_else(|_| "ε".to_string(), Symbol::to_string),
        };
        let (top, rest) = self.stack.pop().ok_or(SimulationError::EmptyStack)?;
        if p.lhs().as_single() != Some(&top) {
            return Err(mismatch());
        }
        let stack = p
            .rhs()
            .iter()
            .rev()
            .filter(|sym| !sym.is_epsilon())
            .fold(rest, |stack, sym| stack.push(sym.clone()));
        let mut steps = self.steps.clone();
        steps.push(p.clone());
        Ok(TopDownInstantaneousDescription {
            grammar: self.grammar,
            tape: self.tape.clone(),
            head: self.head,
            stack,
            steps,
        })
    }

    /// Consumes the stack top: an ε is popped in place, a terminal equal
    /// to the symbol under the head is popped and the head advances.
    pub fn match_head(&self) -> Result<TopDownInstantaneousDescription<'g>, SimulationError> {
        let (top, rest) = self.stack.pop().ok_or(SimulationError::EmptyStack)?;
        let head = if top.is_epsilon() {
            self.head
        } else if self.grammar.terms().contains(&top) && Ok(&top) == self.head() {
            self.head + 1
        } else {
            return Err(SimulationError::MatchMismatch {
                top: top.to_string(),
                head: self
                    .head()
                    .map_or_else(|_| "ε".to_string(), Symbol::to_string),
            });
        };
        Ok(TopDownInstantaneousDescription {
            grammar: self.grammar,
            tape: self.tape.clone(),
            head,
            stack: rest,
            steps: self.steps.clone(),
        })
    }
}

impl InstantaneousDescription for TopDownInstantaneousDescription<'_> {
    fn tape(&self) -> &[Symbol] {
        &self.tape
    }

    fn head_pos(&self) -> usize {
        self.head
    }

    fn top(&self) -> Result<&Symbol, SimulationError> {
        self.stack.peek().ok_or(SimulationError::EmptyStack)
    }

    fn is_done(&self) -> bool {
        let marker = Symbol::end_marker();
        self.stack.peek() == Some(&marker) && self.tape.get(self.head) == Some(&marker)
    }
}

// Two configurations reached by different move sequences are the same
// configuration; the step history is bookkeeping, not state.
impl PartialEq for TopDownInstantaneousDescription<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.grammar == other.grammar
            && self.tape == other.tape
            && self.head == other.head
            && self.stack == other.stack
    }
}

impl Eq for TopDownInstantaneousDescription<'_> {}

/// A shift-reduce (LR-style) configuration. The stack holds the parse
/// trees built so far; `shift` moves the symbol under the head onto the
/// stack as a leaf, `reduce` groups the topmost subtrees under a
/// production's lefthand side.
#[derive(Clone, Debug)]
pub struct BottomUpInstantaneousDescription<'g> {
    grammar: &'g Grammar,
    tape: Vec<Symbol>,
    head: usize,
    stack: Stack<Tree>,
    steps: VecDeque<Production>,
}

impl<'g> BottomUpInstantaneousDescription<'g> {
    pub fn new(
        grammar: &'g Grammar,
        input: impl IntoIterator<Item = impl Into<Symbol>>,
    ) -> BottomUpInstantaneousDescription<'g> {
        BottomUpInstantaneousDescription {
            grammar,
            tape: input.into_iter().map(Into::into).collect(),
            head: 0,
            stack: Stack::new(),
            steps: VecDeque::new(),
        }
    }

    pub fn stack(&self) -> &Stack<Tree> {
        &self.stack
    }

    /// The productions applied so far, in rightmost-derivation order:
    /// each reduction is recorded at the front, so reading the steps
    /// front to back replays the derivation top-down.
    pub fn steps(&self) -> impl Iterator<Item = &Production> {
        self.steps.iter()
    }

    pub fn shift(&self) -> Result<BottomUpInstantaneousDescription<'g>, SimulationError> {
        let leaf = Tree::leaf(self.head()?.clone());
        Ok(BottomUpInstantaneousDescription {
            grammar: self.grammar,
            tape: self.tape.clone(),
            head: self.head + 1,
            stack: self.stack.push(leaf),
            steps: self.steps.clone(),
        })
    }

    /// Pops one subtree per righthand-side symbol of `p` and regroups
    /// them, in the order they were pushed, under a node rooted at the
    /// lefthand side.
    pub fn reduce(
        &self,
        p: &Production,
    ) -> Result<BottomUpInstantaneousDescription<'g>, SimulationError> {
        let mismatch = || SimulationError::ReduceMismatch {
            production: p.to_string(),
        };
        let lhs = p.lhs().as_single().ok_or_else(mismatch)?;
        let mut children = Vec::with_capacity(p.rhs().len());
        let mut rest = self.stack.clone();
        for _ in p.rhs() {
            let (tree, below) = rest.pop().ok_or(SimulationError::EmptyStack)?;
            children.push(tree);
            rest = below;
        }
        children.reverse();
        if !children.iter().map(Tree::root).eq(p.rhs().iter()) {
            return Err(mismatch());
        }
        let mut steps = self.steps.clone();
        steps.push_front(p.clone());
        Ok(BottomUpInstantaneousDescription {
            grammar: self.grammar,
            tape: self.tape.clone(),
            head: self.head,
            stack: rest.push(Tree::new(lhs.clone(), children)),
            steps,
        })
    }
}

impl InstantaneousDescription for BottomUpInstantaneousDescription<'_> {
    fn tape(&self) -> &[Symbol] {
        &self.tape
    }

    fn head_pos(&self) -> usize {
        self.head
    }

    fn top(&self) -> Result<&Symbol, SimulationError> {
        self.stack
            .peek()
            .map(Tree::root)
            .ok_or(SimulationError::EmptyStack)
    }

    fn is_done(&self) -> bool {
        self.head == self.tape.len()
            && self.stack.len() == 1
            && self.stack.peek().map(Tree::root) == Some(self.grammar.start())
    }
}

impl PartialEq for BottomUpInstantaneousDescription<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.grammar == other.grammar
            && self.tape == other.tape
            && self.head == other.head
            && self.stack == other.stack
    }
}

impl Eq for BottomUpInstantaneousDescription<'_> {}
