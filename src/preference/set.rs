//! User-edited collection of preference rules.

use super::types::{Preference, PreferenceKind};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;

/// Stable handle for a preference inside its set.
///
/// Ids are never reused, so a score breakdown keyed by id stays
/// unambiguous after removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreferenceId(u32);

impl PreferenceId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PreferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A preference together with its id and optional display label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreferenceEntry {
    pub id: PreferenceId,
    pub preference: Preference,
    pub label: Option<String>,
}

/// Ordered set of active preferences.
///
/// Insertion order is kept for display only; scoring treats the set as
/// unordered. Any change to the set invalidates previously computed
/// scores and schedules, which are recomputed from scratch.
///
/// # Examples
///
/// ```
/// use bidline::preference::{Preference, PreferenceSet};
///
/// let mut prefs = PreferenceSet::new();
/// let earn = prefs.add(Preference::MaximizeEarnings);
/// prefs.add_labeled(Preference::avoid_airport("EWR"), "No Newark");
/// assert_eq!(prefs.len(), 2);
///
/// prefs.remove(earn);
/// assert_eq!(prefs.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreferenceSet {
    entries: Vec<PreferenceEntry>,
    next_id: u32,
}

impl PreferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a preference and returns its id.
    pub fn add(&mut self, preference: Preference) -> PreferenceId {
        self.push(preference, None)
    }

    /// Adds a preference with a display label.
    pub fn add_labeled(&mut self, preference: Preference, label: impl Into<String>) -> PreferenceId {
        self.push(preference, Some(label.into()))
    }

    fn push(&mut self, preference: Preference, label: Option<String>) -> PreferenceId {
        let id = PreferenceId(self.next_id);
        self.next_id += 1;
        self.entries.push(PreferenceEntry {
            id,
            preference,
            label,
        });
        id
    }

    /// Removes a preference, returning it if present.
    pub fn remove(&mut self, id: PreferenceId) -> Option<Preference> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos).preference)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: PreferenceId) -> Option<&PreferenceEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PreferenceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_kind(&self, kind: PreferenceKind) -> bool {
        self.entries.iter().any(|e| e.preference.kind() == kind)
    }

    /// Dates no generated schedule may touch.
    pub fn hard_blocked_dates(&self) -> BTreeSet<NaiveDate> {
        self.entries
            .iter()
            .filter_map(|e| e.preference.hard_blocked_date())
            .collect()
    }

    /// A copy keeping only comfort-related rules, ids preserved.
    pub fn comfort_only(&self) -> PreferenceSet {
        PreferenceSet {
            entries: self
                .entries
                .iter()
                .filter(|e| e.preference.kind().is_comfort())
                .cloned()
                .collect(),
            next_id: self.next_id,
        }
    }
}

impl FromIterator<Preference> for PreferenceSet {
    fn from_iter<I: IntoIterator<Item = Preference>>(iter: I) -> Self {
        let mut set = PreferenceSet::new();
        for p in iter {
            set.add(p);
        }
        set
    }
}

impl<'a> IntoIterator for &'a PreferenceSet {
    type Item = &'a PreferenceEntry;
    type IntoIter = std::slice::Iter<'a, PreferenceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    #[test]
    fn test_ids_not_reused() {
        let mut set = PreferenceSet::new();
        let a = set.add(Preference::AvoidRedEye);
        let b = set.add(Preference::MaximizeEarnings);
        assert_ne!(a, b);

        assert_eq!(set.remove(a), Some(Preference::AvoidRedEye));
        assert!(set.remove(a).is_none());

        let c = set.add(Preference::AvoidRedEye);
        assert_ne!(c, a);
        assert_ne!(c, b);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_labels() {
        let mut set = PreferenceSet::new();
        let id = set.add_labeled(Preference::max_duration(3), "Short Trips");
        assert_eq!(set.get(id).unwrap().label.as_deref(), Some("Short Trips"));
    }

    #[test]
    fn test_hard_blocked_dates() {
        let set: PreferenceSet = vec![
            Preference::block_date_off(date(15)),
            Preference::soft_date_off(date(20)),
            Preference::block_date_off(date(3)),
            Preference::block_weekday(Weekday::Sat),
        ]
        .into_iter()
        .collect();

        let dates: Vec<_> = set.hard_blocked_dates().into_iter().collect();
        assert_eq!(dates, vec![date(3), date(15)]);
    }

    #[test]
    fn test_comfort_only_keeps_ids() {
        let mut set = PreferenceSet::new();
        set.add(Preference::MaximizeEarnings);
        let red_eye = set.add(Preference::AvoidRedEye);

        let comfort = set.comfort_only();
        assert_eq!(comfort.len(), 1);
        assert!(comfort.get(red_eye).is_some());
        assert!(!comfort.contains_kind(PreferenceKind::MaximizeEarnings));
    }
}
