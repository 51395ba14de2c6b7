//! A persistent stack. Pushing and popping return new stacks that share
//! their tail with the original, so a simulation step can branch into
//! several successor configurations without copying the whole stack.

use std::rc::Rc;

#[cfg(test)]
#[path = "tests/stack.rs"]
mod tests_for_stack;

enum Node<T> {
    Empty,
    Cons(T, Rc<Node<T>>),
}

pub struct Stack<T> {
    top: Rc<Node<T>>,
    len: usize,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack {
            top: Rc::new(Node::Empty),
            len: 0,
        }
    }

    pub fn push(&self, value: T) -> Stack<T> {
        Stack {
            top: Rc::new(Node::Cons(value, Rc::clone(&self.top))),
            len: self.len + 1,
        }
    }

    pub fn peek(&self) -> Option<&T> {
        match &*self.top {
            Node::Empty => None,
            Node::Cons(value, _) => Some(value),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        struct Iter<'a, T>(&'a Node<T>);
        impl<'a, T> Iterator for Iter<'a, T> {
            type Item = &'a T;
            fn next(&mut self) -> Option<&'a T> {
                match self.0 {
                    Node::Empty => None,
                    Node::Cons(value, rest) => {
                        self.0 = &**rest;
                        Some(value)
                    }
                }
            }
        }
        Iter(&self.top)
    }
}

impl<T: Clone> Stack<T> {
    /// Returns the top element and the stack below it, leaving `self`
    /// untouched.
    pub fn pop(&self) -> Option<(T, Stack<T>)> {
        match &*self.top {
            Node::Empty => None,
            Node::Cons(value, rest) => Some((
                value.clone(),
                Stack {
                    top: Rc::clone(rest),
                    len: self.len - 1,
                },
            )),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Stack<T> {
        Stack::new()
    }
}

impl<T> Clone for Stack<T> {
    fn clone(&self) -> Stack<T> {
        Stack {
            top: Rc::clone(&self.top),
            len: self.len,
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// The last element of the iterator ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Stack<T> {
        iter.into_iter()
            .fold(Stack::new(), |stack, value| stack.push(value))
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Stack<T>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        w.debug_list().entries(self.iter()).finish()
    }
}
