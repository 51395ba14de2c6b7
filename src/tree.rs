//! Ordered trees of symbols, as produced by a bottom-up parse: every
//! reduction groups the popped subtrees under the production's lefthand
//! side.

use crate::symbol::Symbol;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Tree {
    root: Symbol,
    children: Vec<Tree>,
}

impl Tree {
    pub fn leaf(root: impl Into<Symbol>) -> Tree {
        Tree {
            root: root.into(),
            children: Vec::new(),
        }
    }

    pub fn new(root: impl Into<Symbol>, children: Vec<Tree>) -> Tree {
        Tree {
            root: root.into(),
            children,
        }
    }

    pub fn root(&self) -> &Symbol {
        &self.root
    }

    pub fn children(&self) -> &[Tree] {
        &self.children
    }
}
