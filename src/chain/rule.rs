use std::fmt;
use std::sync::Arc;

/// Decides whether a step fires for the given context and subject.
pub type Predicate<C, S, E> = Arc<dyn Fn(&C, &S) -> Result<bool, E> + Send + Sync>;

/// Produces the updated subject when the guarding predicate holds.
pub type Transform<C, S, E> = Arc<dyn Fn(&C, S) -> Result<S, E> + Send + Sync>;

/// A single step of a chain: a predicate, the transform it guards and
/// whether a match stops the chain.
pub struct Rule<C, S, E> {
    predicate: Predicate<C, S, E>,
    transform: Transform<C, S, E>,
    short_circuit: bool,
}

impl<C, S, E> Rule<C, S, E> {
    pub fn new<P, T>(predicate: P, transform: T, short_circuit: bool) -> Self
    where
        P: Fn(&C, &S) -> Result<bool, E> + Send + Sync + 'static,
        T: Fn(&C, S) -> Result<S, E> + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            transform: Arc::new(transform),
            short_circuit,
        }
    }

    pub fn is_short_circuit(&self) -> bool {
        self.short_circuit
    }

    pub fn matches(&self, context: &C, subject: &S) -> Result<bool, E> {
        (self.predicate)(context, subject)
    }

    pub fn apply(&self, context: &C, subject: S) -> Result<S, E> {
        (self.transform)(context, subject)
    }
}

// Derived Clone would require C, S and E to be Clone.
impl<C, S, E> Clone for Rule<C, S, E> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            transform: Arc::clone(&self.transform),
            short_circuit: self.short_circuit,
        }
    }
}

impl<C, S, E> fmt::Debug for Rule<C, S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("short_circuit", &self.short_circuit)
            .finish_non_exhaustive()
    }
}
