//! Recency list: an intrusive doubly linked list over arena nodes
//!
//! Ordered from least recently used (head) to most recently used (tail).

use crate::arena::{Arena, NodeId};

#[derive(Debug, Default)]
pub(crate) struct RecencyList {
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl RecencyList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Least recently used node
    pub(crate) fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Most recently used node
    #[cfg(test)]
    pub(crate) fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    /// Append an unlinked node at the most recently used end
    pub(crate) fn push_back(&mut self, arena: &mut Arena, id: NodeId) {
        {
            let node = &mut arena[id];
            node.recency_prev = self.tail;
            node.recency_next = None;
        }
        match self.tail {
            Some(tail) => arena[tail].recency_next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// Move a node to the most recently used end
    pub(crate) fn promote(&mut self, arena: &mut Arena, id: NodeId) {
        if self.tail == Some(id) {
            return;
        }

        if self.head == Some(id) {
            let next = arena[id].recency_next;
            debug_assert!(next.is_some(), "head is not tail but has no successor");
            self.head = next;
            if let Some(next) = next {
                arena[next].recency_prev = None;
            }
        } else {
            let (prev, next) = {
                let node = &arena[id];
                (node.recency_prev, node.recency_next)
            };
            match (prev, next) {
                (Some(prev), Some(next)) => {
                    arena[prev].recency_next = Some(next);
                    arena[next].recency_prev = Some(prev);
                }
                _ => panic!("interior node {id} is missing a recency link"),
            }
        }

        self.push_back(arena, id);
    }

    /// Detach any node, wherever it sits
    pub(crate) fn unlink(&mut self, arena: &mut Arena, id: NodeId) {
        let (prev, next) = {
            let node = &arena[id];
            (node.recency_prev, node.recency_next)
        };

        match prev {
            Some(prev) => arena[prev].recency_next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => arena[next].recency_prev = prev,
            None => self.tail = prev,
        }

        let node = &mut arena[id];
        node.recency_prev = None;
        node.recency_next = None;
    }

    /// Detach and return the least recently used node
    pub(crate) fn evict_head(&mut self, arena: &mut Arena) -> Option<NodeId> {
        let head = self.head?;
        if self.tail == Some(head) {
            self.head = None;
            self.tail = None;
        } else {
            let next = arena[head].recency_next;
            self.head = next;
            if let Some(next) = next {
                arena[next].recency_prev = None;
            }
        }

        let node = &mut arena[head];
        node.recency_prev = None;
        node.recency_next = None;
        Some(head)
    }

    pub(crate) fn clear(&mut self) {
        self.head = None;
        self.tail = None;
    }

    /// Walk from least to most recently used
    pub(crate) fn iter<'a>(&self, arena: &'a Arena) -> Iter<'a> {
        Iter {
            arena,
            cursor: self.head,
        }
    }
}

/// Iterator over node ids in recency order
pub(crate) struct Iter<'a> {
    arena: &'a Arena,
    cursor: Option<NodeId>,
}

impl Iterator for Iter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.cursor?;
        self.cursor = self.arena[id].recency_next;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(n: i32) -> (Arena, RecencyList, Vec<NodeId>) {
        let mut arena = Arena::with_capacity(n as usize);
        let mut list = RecencyList::new();
        let ids = (0..n)
            .map(|k| {
                let id = arena.alloc(k, k);
                list.push_back(&mut arena, id);
                id
            })
            .collect();
        (arena, list, ids)
    }

    fn order(list: &RecencyList, arena: &Arena) -> Vec<i32> {
        list.iter(arena).map(|id| arena[id].key).collect()
    }

    #[test]
    fn test_push_back_order() {
        let (arena, list, ids) = build(3);
        assert_eq!(order(&list, &arena), vec![0, 1, 2]);
        assert_eq!(list.head(), Some(ids[0]));
        assert_eq!(list.tail(), Some(ids[2]));
    }

    #[test]
    fn test_promote_tail_is_noop() {
        let (mut arena, mut list, ids) = build(3);
        list.promote(&mut arena, ids[2]);
        list.promote(&mut arena, ids[2]);
        assert_eq!(order(&list, &arena), vec![0, 1, 2]);
    }

    #[test]
    fn test_promote_head() {
        let (mut arena, mut list, ids) = build(3);
        list.promote(&mut arena, ids[0]);
        assert_eq!(order(&list, &arena), vec![1, 2, 0]);
        assert_eq!(list.head(), Some(ids[1]));
        assert!(arena[ids[1]].recency_prev.is_none());
        assert_eq!(list.tail(), Some(ids[0]));
        assert!(arena[ids[0]].recency_next.is_none());
    }

    #[test]
    fn test_promote_interior() {
        let (mut arena, mut list, ids) = build(4);
        list.promote(&mut arena, ids[1]);
        assert_eq!(order(&list, &arena), vec![0, 2, 3, 1]);
        assert_eq!(arena[ids[2]].recency_prev, Some(ids[0]));
        assert_eq!(arena[ids[3]].recency_prev, Some(ids[2]));
    }

    #[test]
    fn test_promote_two_nodes() {
        let (mut arena, mut list, ids) = build(2);
        list.promote(&mut arena, ids[0]);
        assert_eq!(order(&list, &arena), vec![1, 0]);
        list.promote(&mut arena, ids[0]);
        assert_eq!(order(&list, &arena), vec![1, 0]);
    }

    #[test]
    fn test_evict_head() {
        let (mut arena, mut list, ids) = build(2);

        assert_eq!(list.evict_head(&mut arena), Some(ids[0]));
        assert_eq!(list.head(), Some(ids[1]));
        assert!(arena[ids[1]].recency_prev.is_none());

        assert_eq!(list.evict_head(&mut arena), Some(ids[1]));
        assert!(list.head().is_none());
        assert!(list.tail().is_none());

        assert_eq!(list.evict_head(&mut arena), None);
    }

    #[test]
    fn test_unlink_any_position() {
        let (mut arena, mut list, ids) = build(4);

        list.unlink(&mut arena, ids[2]);
        assert_eq!(order(&list, &arena), vec![0, 1, 3]);

        list.unlink(&mut arena, ids[3]);
        assert_eq!(list.tail(), Some(ids[1]));

        list.unlink(&mut arena, ids[0]);
        assert_eq!(list.head(), Some(ids[1]));

        list.unlink(&mut arena, ids[1]);
        assert!(list.head().is_none());
        assert!(list.tail().is_none());
    }
}
