use super::handler::Handler;
use super::rule::Rule;
use std::fmt;

/// Accumulates chain steps in execution order and materializes them into a
/// linked [`Handler`] chain.
///
/// A builder is always seeded with one step, so an empty chain cannot be
/// expressed. `build` does not consume the builder: more steps may be added
/// afterwards and every call reflects the full current step list.
pub struct ChainBuilder<C, S, E> {
    first: Rule<C, S, E>,
    rest: Vec<Rule<C, S, E>>,
}

impl<C, S, E> ChainBuilder<C, S, E> {
    pub fn new<P, T>(predicate: P, transform: T, short_circuit: bool) -> Self
    where
        P: Fn(&C, &S) -> Result<bool, E> + Send + Sync + 'static,
        T: Fn(&C, S) -> Result<S, E> + Send + Sync + 'static,
    {
        Self::from_rule(Rule::new(predicate, transform, short_circuit))
    }

    pub fn from_rule(rule: Rule<C, S, E>) -> Self {
        Self {
            first: rule,
            rest: Vec::new(),
        }
    }

    /// Appends a step after every step added so far.
    pub fn add_next<P, T>(self, predicate: P, transform: T, short_circuit: bool) -> Self
    where
        P: Fn(&C, &S) -> Result<bool, E> + Send + Sync + 'static,
        T: Fn(&C, S) -> Result<S, E> + Send + Sync + 'static,
    {
        self.add_rule(Rule::new(predicate, transform, short_circuit))
    }

    pub fn add_rule(mut self, rule: Rule<C, S, E>) -> Self {
        self.rest.push(rule);
        self
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Creates one node per step, links each node to the following one and
    /// returns the first node.
    pub fn build(&self) -> Handler<C, S, E> {
        let tail = self
            .rest
            .iter()
            .rev()
            .fold(None, |next: Option<Handler<C, S, E>>, rule| {
                let node = Handler::from_rule(rule.clone());
                Some(match next {
                    Some(next) => node.with_next(next),
                    None => node,
                })
            });

        let head = Handler::from_rule(self.first.clone());
        match tail {
            Some(next) => head.with_next(next),
            None => head,
        }
    }
}

impl<C, S, E> fmt::Debug for ChainBuilder<C, S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainBuilder")
            .field("len", &self.len())
            .finish()
    }
}
