use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(1);

/// Process-unique node identity used to synthesize default labels.
///
/// Cloning draws a fresh identity, so a cloned node never shares a default
/// label with its original.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(u64);

impl Identity {
    pub fn next() -> Self {
        Self(NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::next()
    }
}

impl Clone for Identity {
    fn clone(&self) -> Self {
        Self::next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identities_are_unique() {
        let a = Identity::next();
        let b = Identity::next();
        assert_ne!(a, b);
        assert!(b.value() > a.value());
    }

    #[test]
    fn clone_draws_a_fresh_identity() {
        let a = Identity::next();
        let b = a.clone();
        assert_ne!(a, b);
    }
}
