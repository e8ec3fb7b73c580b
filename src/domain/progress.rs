use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Sub-step markers for one multi-day challenge
///
/// Behaves like a boolean array that only ever gains `true` entries: its
/// length is the highest marked index plus one, and indices that were skipped
/// over read as unmarked. Only the marked indices are stored, so a far-off
/// index does not allocate the gap. Serialized as the full boolean array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<bool>", into = "Vec<bool>")]
pub struct DotTrail {
    marked: BTreeSet<usize>,
}

impl DotTrail {
    /// Mark a dot. Marking twice is harmless; nothing ever unmarks.
    pub fn mark(&mut self, index: usize) {
        self.marked.insert(index);
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }

    /// Highest marked index plus one (0 when nothing is marked)
    pub fn span(&self) -> usize {
        self.marked.last().map_or(0, |last| last.saturating_add(1))
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// Expand into `width` flags, padding or truncating as needed
    pub fn flags(&self, width: usize) -> Vec<bool> {
        (0..width).map(|index| self.is_marked(index)).collect()
    }
}

impl From<DotTrail> for Vec<bool> {
    fn from(trail: DotTrail) -> Self {
        trail.flags(trail.span())
    }
}

impl From<Vec<bool>> for DotTrail {
    fn from(flags: Vec<bool>) -> Self {
        let marked = flags
            .into_iter()
            .enumerate()
            .filter_map(|(index, marked)| marked.then_some(index))
            .collect();
        Self { marked }
    }
}

/// Dot progress for every challenge that has been touched, keyed by challenge id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChallengeProgress {
    trails: BTreeMap<u32, DotTrail>,
}

impl ChallengeProgress {
    /// Mark a dot, creating the trail for the challenge on first use
    pub fn mark(&mut self, challenge_id: u32, dot_index: usize) {
        self.trails.entry(challenge_id).or_default().mark(dot_index);
    }

    pub fn trail(&self, challenge_id: u32) -> Option<&DotTrail> {
        self.trails.get(&challenge_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &DotTrail)> {
        self.trails.iter().map(|(id, trail)| (*id, trail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_in_order() {
        let mut trail = DotTrail::default();
        trail.mark(0);
        trail.mark(1);

        assert_eq!(trail.span(), 2);
        assert_eq!(trail.marked_count(), 2);
        assert_eq!(trail.flags(3), vec![true, true, false]);
    }

    #[test]
    fn test_mark_out_of_order_leaves_gap() {
        let mut trail = DotTrail::default();
        trail.mark(3);

        assert_eq!(trail.span(), 4);
        assert_eq!(trail.marked_count(), 1);
        assert!(!trail.is_marked(1));
        assert_eq!(trail.flags(4), vec![false, false, false, true]);
    }

    #[test]
    fn test_mark_is_set_only() {
        let mut trail = DotTrail::default();
        trail.mark(2);
        trail.mark(2);
        trail.mark(0);

        assert!(trail.is_marked(2));
        assert!(trail.is_marked(0));
        assert_eq!(trail.marked_count(), 2);
    }

    #[test]
    fn test_far_index_does_not_allocate_gap() {
        let mut trail = DotTrail::default();
        trail.mark(1_000_000);

        assert_eq!(trail.span(), 1_000_001);
        assert_eq!(trail.marked_count(), 1);
        assert_eq!(trail.flags(2), vec![false, false]);
    }

    #[test]
    fn test_progress_creates_trail_on_first_mark() {
        let mut progress = ChallengeProgress::default();
        assert!(progress.trail(1).is_none());

        progress.mark(1, 0);
        progress.mark(4, 2);

        assert!(progress.trail(1).unwrap().is_marked(0));
        assert_eq!(progress.trail(4).unwrap().span(), 3);
        assert_eq!(progress.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn test_progress_serializes_as_flag_arrays() {
        let mut progress = ChallengeProgress::default();
        progress.mark(1, 0);
        progress.mark(1, 2);
        progress.mark(3, 1);

        let json = serde_json::to_string(&progress).unwrap();
        assert_eq!(json, r#"{"1":[true,false,true],"3":[false,true]}"#);
    }

    #[test]
    fn test_progress_reads_flag_arrays() {
        let progress: ChallengeProgress =
            serde_json::from_str(r#"{"2":[false,true,false,true]}"#).unwrap();

        let trail = progress.trail(2).unwrap();
        assert_eq!(trail.span(), 4);
        assert_eq!(trail.marked_count(), 2);
        assert!(trail.is_marked(3));
        assert!(!trail.is_marked(2));
    }
}
