//! Option-function construction shared by every clause type

/// Construct a value from its default by applying configuration functions
///
/// Implemented for every `Default` type, so any clause can be assembled from
/// a list of independent, order-insensitive field setters:
///
/// ```rust
/// use squidex_dsl::query::{Configure, Term};
///
/// fn active(t: &mut Term) {
///     t.value = "active".to_string();
/// }
/// fn boosted(t: &mut Term) {
///     t.boost = Some(2.0);
/// }
///
/// let term = Term::build([active as fn(&mut Term), boosted]);
/// assert_eq!(term.value, "active");
/// ```
pub trait Configure: Default {
    /// Start from the default value and apply each option in order
    fn build<I, F>(opts: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(&mut Self),
    {
        opts.into_iter().fold(Self::default(), |value, opt| value.apply(opt))
    }

    /// Apply a single configuration function, returning the value for chaining
    fn apply<F>(mut self, opt: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        opt(&mut self);
        self
    }
}

impl<T: Default> Configure for T {}
