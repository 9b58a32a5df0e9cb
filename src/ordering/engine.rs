//! Lexicographic rule composition.

use super::types::PriorityRule;
use std::cmp::Ordering;

/// Scores closer than this tie on a rule.
const TIE_EPSILON: f64 = 1e-9;

/// Engine that orders items by a sequence of rules.
///
/// Rules are applied in order: a later rule is only consulted when every
/// earlier rule ties (within [`TIE_EPSILON`]). Items tying on all rules keep
/// their input order, so callers get a deterministic tie-break by
/// pre-sorting the input.
///
/// # Examples
///
/// ```ignore
/// let engine = RuleEngine::new()
///     .with_rule(ShortestTrip)
///     .with_rule(PreferenceScore);
///
/// let sorted = engine.sort_refs(&candidates, &context);
/// ```
pub struct RuleEngine<T, C> {
    rules: Vec<Box<dyn PriorityRule<T, C>>>,
}

impl<T, C> RuleEngine<T, C> {
    /// Creates an engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule, consulted after all rules added before it.
    pub fn with_rule<R: PriorityRule<T, C> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts borrowed items by priority (lowest score first).
    pub fn sort_refs<'a>(&self, items: &[&'a T], context: &C) -> Vec<&'a T> {
        let scores: Vec<Vec<f64>> = items
            .iter()
            .map(|item| self.rules.iter().map(|r| r.score(item, context)).collect())
            .collect();

        let mut indices: Vec<usize> = (0..items.len()).collect();
        indices.sort_by(|&a, &b| {
            for (va, vb) in scores[a].iter().zip(scores[b].iter()) {
                if (va - vb).abs() > TIE_EPSILON {
                    return va.partial_cmp(vb).unwrap_or(Ordering::Equal);
                }
            }
            Ordering::Equal
        });
        indices.into_iter().map(|i| items[i]).collect()
    }
}

impl<T, C> Default for RuleEngine<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
