//! One writer per state variable: either the engine (uncontrolled) or the
//! host (controlled). Which one is decided by whether the host has supplied
//! a value, never by inspecting the value itself.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Controlled<T> {
    internal: T,
    external: Option<T>,
}

impl<T> Controlled<T> {
    pub fn new(initial: T) -> Self {
        Self {
            internal: initial,
            external: None,
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    /// The value every read within one operation should use.
    pub fn resolve(&self) -> &T {
        self.external.as_ref().unwrap_or(&self.internal)
    }

    /// Hands ownership to the host. An empty external value still counts as
    /// controlled.
    pub fn control(&mut self, value: T) {
        self.external = Some(value);
    }

    /// Returns ownership to the engine, keeping the internal value it had.
    pub fn release(&mut self) {
        self.external = None;
    }

    /// Writes the engine's proposal. Ignored while the host is the writer.
    /// Returns true when the internal value was updated.
    pub fn propose(&mut self, value: T) -> bool {
        if self.is_controlled() {
            return false;
        }
        self.internal = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncontrolled_reads_internal_and_accepts_proposals() {
        let mut value = Controlled::new(1);

        assert!(value.propose(2));
        assert_eq!(*value.resolve(), 2);
    }

    #[test]
    fn controlled_value_wins_and_blocks_proposals() {
        let mut value = Controlled::new(vec![1]);
        value.control(vec![]);

        assert!(!value.propose(vec![9]));
        assert!(value.resolve().is_empty());
        assert!(value.is_controlled());
    }

    #[test]
    fn release_restores_internal_value() {
        let mut value = Controlled::new("internal");
        value.control("external");

        value.release();

        assert_eq!(*value.resolve(), "internal");
    }
}
