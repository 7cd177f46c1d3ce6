use std::error::Error;
use std::fmt;

#[allow(unused_imports)]
use log::{debug, info, trace};

pub type Element = f64;

/// Returned by [`Stack::pop`] when there is nothing left to pop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EmptyStack;

impl fmt::Display for EmptyStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pop on empty stack")
    }
}

impl Error for EmptyStack {}

/// LIFO container; the back of `store` is the top.
#[derive(Debug, Default, Clone)]
pub struct Stack {
    store: Vec<Element>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, v: impl Into<Element>) {
        let v = v.into();
        trace!("push: {:?}", v);

        self.store.push(v)
    }

    pub fn pop(&mut self) -> Result<Element, EmptyStack> {
        match self.store.pop() {
            Some(v) => {
                trace!("pop: {:?}", v);
                Ok(v)
            }
            None => {
                info!("pop: empty stack");
                Err(EmptyStack)
            }
        }
    }

    #[allow(dead_code)]
    pub fn top(&self) -> Option<&Element> {
        self.store.last()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
