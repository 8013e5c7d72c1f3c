use super::rule::Rule;
use std::fmt;

/// A node of an executable chain.
///
/// Each node owns its only successor, so a chain is always a simple forward
/// list. Nodes hold no mutable state: the subject is moved through
/// [`Handler::execute`] and handed back to the caller, which makes a built
/// chain safe to run from several threads at once.
pub struct Handler<C, S, E> {
    rule: Rule<C, S, E>,
    next: Option<Box<Handler<C, S, E>>>,
}

impl<C, S, E> Handler<C, S, E> {
    /// Creates a node without successor.
    pub fn new<P, T>(predicate: P, transform: T, short_circuit: bool) -> Self
    where
        P: Fn(&C, &S) -> Result<bool, E> + Send + Sync + 'static,
        T: Fn(&C, S) -> Result<S, E> + Send + Sync + 'static,
    {
        Self::from_rule(Rule::new(predicate, transform, short_circuit))
    }

    pub fn from_rule(rule: Rule<C, S, E>) -> Self {
        Self { rule, next: None }
    }

    /// Links `next` as the successor of this node, replacing any previous one.
    pub fn with_next(mut self, next: Handler<C, S, E>) -> Self {
        self.next = Some(Box::new(next));
        self
    }

    pub fn next(&self) -> Option<&Handler<C, S, E>> {
        self.next.as_deref()
    }

    pub fn is_short_circuit(&self) -> bool {
        self.rule.is_short_circuit()
    }

    /// Number of nodes from this one to the end of the chain.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        let mut len = 1;
        let mut node = self;
        while let Some(next) = node.next() {
            len += 1;
            node = next;
        }
        len
    }

    /// Runs the chain starting at this node.
    ///
    /// A node whose predicate holds replaces the subject with the output of
    /// its transform. Execution stops after a matching short-circuit node or
    /// at the last node; otherwise the current subject is handed to the
    /// successor. The first plug-in error is returned as is and no later
    /// node runs.
    pub fn execute(&self, context: &C, mut subject: S) -> Result<S, E> {
        let mut node = self;
        loop {
            let matched = node.rule.matches(context, &subject)?;
            if matched {
                subject = node.rule.apply(context, subject)?;
            }

            match node.next() {
                Some(next) if !(matched && node.is_short_circuit()) => node = next,
                _ => return Ok(subject),
            }
        }
    }
}

// Unlink iteratively so dropping a long chain does not recurse per node.
impl<C, S, E> Drop for Handler<C, S, E> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<C, S, E> fmt::Debug for Handler<C, S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("short_circuit", &self.is_short_circuit())
            .field("len", &self.len())
            .finish()
    }
}
