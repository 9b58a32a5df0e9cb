//! Core trait for priority rules.

/// A scoring rule that assigns a priority value to an item.
///
/// Rules return `f64` scores where **lower is higher priority**. To
/// prefer large values, negate them.
///
/// # Type Parameters
///
/// * `T` - The item type being scored
/// * `C` - The context type providing state information
///
/// # Examples
///
/// ```
/// use bidline::catalog::Pairing;
/// use bidline::ordering::PriorityRule;
///
/// // Fewest legs first
/// struct FewestLegs;
///
/// impl PriorityRule<Pairing, ()> for FewestLegs {
///     fn name(&self) -> &str { "FewestLegs" }
///     fn score(&self, pairing: &Pairing, _ctx: &()) -> f64 {
///         pairing.legs() as f64
///     }
/// }
/// ```
pub trait PriorityRule<T, C>: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes a priority score for the given item.
    ///
    /// Lower scores indicate higher priority.
    fn score(&self, item: &T, context: &C) -> f64;
}
