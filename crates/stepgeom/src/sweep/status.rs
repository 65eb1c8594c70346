//! Sweep-line status: segments crossing the sweep line, ordered by `y_sweep`.
//!
//! Members are arena ids; the sort key lives in the arena and changes whenever the sweep
//! moves. The list is never searched with stale keys: `refresh` rewrites every member's
//! `y_sweep` for the new position and then re-sorts the whole list before any lookup.

use std::cmp::Ordering;

use crate::geom2::Segment;

use super::types::SegmentId;

/// Walking direction along the status list (`Up` = increasing `y_sweep`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct StatusList {
    members: Vec<SegmentId>,
}

impl StatusList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members from lowest to highest `y_sweep`.
    pub fn iter(&self) -> impl Iterator<Item = SegmentId> + '_ {
        self.members.iter().copied()
    }

    pub fn contains(&self, id: SegmentId) -> bool {
        self.members.contains(&id)
    }

    /// Re-derive `y_sweep` of every member at `x` and restore the order.
    pub fn refresh(&mut self, arena: &mut [Segment], x: f64) {
        for &id in &self.members {
            let s = &mut arena[id.0];
            s.y_sweep = s.sweep_y(x);
        }
        // Stable: members that tie keep their previous relative order.
        self.members.sort_by(|a, b| {
            arena[a.0]
                .y_sweep
                .partial_cmp(&arena[b.0].y_sweep)
                .unwrap_or(Ordering::Equal)
        });
    }

    /// Insert by the segment's current `y_sweep`, after any members with an equal key.
    pub fn insert(&mut self, id: SegmentId, arena: &[Segment]) {
        let y = arena[id.0].y_sweep;
        let at = self.members.partition_point(|m| arena[m.0].y_sweep <= y);
        self.members.insert(at, id);
    }

    /// Remove by identity; returns whether the segment was a member.
    pub fn remove(&mut self, id: SegmentId) -> bool {
        match self.members.iter().position(|&m| m == id) {
            Some(k) => {
                self.members.remove(k);
                true
            }
            None => false,
        }
    }

    /// Nearest member strictly above `y` (`Up`) or strictly below it (`Down`).
    pub fn search(&self, y: f64, dir: Direction, arena: &[Segment]) -> Option<SegmentId> {
        match dir {
            Direction::Up => {
                let k = self.members.partition_point(|m| arena[m.0].y_sweep <= y);
                self.members.get(k).copied()
            }
            Direction::Down => {
                let k = self.members.partition_point(|m| arena[m.0].y_sweep < y);
                k.checked_sub(1).map(|k| self.members[k])
            }
        }
    }

    /// Successor (`Up`) or predecessor (`Down`) of member `id`; `None` at either end or when
    /// `id` is not a member.
    pub fn neighbor(&self, id: SegmentId, dir: Direction) -> Option<SegmentId> {
        let k = self.members.iter().position(|&m| m == id)?;
        match dir {
            Direction::Up => self.members.get(k + 1).copied(),
            Direction::Down => k.checked_sub(1).map(|k| self.members[k]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::Color;

    fn arena() -> Vec<Segment> {
        vec![
            Segment::from_coords(0.0, 0.0, 10.0, 0.0, Color::Blue),
            Segment::from_coords(0.0, 5.0, 10.0, 5.0, Color::Blue),
            Segment::from_coords(0.0, 9.0, 10.0, 1.0, Color::Blue),
        ]
    }

    fn filled(arena: &mut [Segment], x: f64) -> StatusList {
        let mut list = StatusList::new();
        for k in 0..arena.len() {
            arena[k].y_sweep = arena[k].sweep_y(x);
            list.insert(SegmentId(k), arena);
        }
        list
    }

    #[test]
    fn insert_keeps_y_order() {
        let mut a = arena();
        let list = filled(&mut a, 0.0);
        let order: Vec<_> = list.iter().collect();
        assert_eq!(order, vec![SegmentId(0), SegmentId(1), SegmentId(2)]);
    }

    #[test]
    fn refresh_reorders_after_keys_move() {
        let mut a = arena();
        let mut list = filled(&mut a, 0.0);
        // Segment 2 drops from y=9 to y=1.8 at x=9, below segment 1.
        list.refresh(&mut a, 9.0);
        let order: Vec<_> = list.iter().collect();
        assert_eq!(order, vec![SegmentId(0), SegmentId(2), SegmentId(1)]);
        assert!((a[2].y_sweep - 1.8).abs() < 1e-12);
    }

    #[test]
    fn search_is_strict_in_both_directions() {
        let mut a = arena();
        let list = filled(&mut a, 0.0);
        assert_eq!(list.search(5.0, Direction::Up, &a), Some(SegmentId(2)));
        assert_eq!(list.search(5.0, Direction::Down, &a), Some(SegmentId(0)));
        assert_eq!(list.search(9.0, Direction::Up, &a), None);
        assert_eq!(list.search(0.0, Direction::Down, &a), None);
        assert_eq!(StatusList::new().search(1.0, Direction::Up, &a), None);
    }

    #[test]
    fn neighbor_walks_by_identity() {
        let mut a = arena();
        let mut list = filled(&mut a, 0.0);
        assert_eq!(list.neighbor(SegmentId(1), Direction::Up), Some(SegmentId(2)));
        assert_eq!(list.neighbor(SegmentId(1), Direction::Down), Some(SegmentId(0)));
        assert_eq!(list.neighbor(SegmentId(2), Direction::Up), None);
        assert!(list.remove(SegmentId(1)));
        assert!(!list.remove(SegmentId(1)));
        assert_eq!(list.neighbor(SegmentId(1), Direction::Up), None);
        assert_eq!(list.neighbor(SegmentId(0), Direction::Up), Some(SegmentId(2)));
    }

    #[test]
    fn equal_keys_are_all_kept() {
        let mut a = vec![
            Segment::from_coords(0.0, 2.0, 10.0, 2.0, Color::Red),
            Segment::from_coords(0.0, 2.0, 10.0, 8.0, Color::Red),
        ];
        let list = filled(&mut a, 0.0);
        assert_eq!(list.len(), 2);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![SegmentId(0), SegmentId(1)]);
    }
}
