//! Node storage shared by the index and the recency list
//!
//! Nodes live in a dense vector of slots and link to each other by slot id,
//! so a node can sit in a bucket chain and in the recency list at once
//! without shared ownership.

/// Slot id of a node in the arena
pub(crate) type NodeId = usize;

/// A cache entry with its bucket-chain and recency links
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) key: i32,
    pub(crate) value: i32,
    pub(crate) chain_prev: Option<NodeId>,
    pub(crate) chain_next: Option<NodeId>,
    pub(crate) recency_prev: Option<NodeId>,
    pub(crate) recency_next: Option<NodeId>,
}

impl Node {
    fn new(key: i32, value: i32) -> Self {
        Self {
            key,
            value,
            chain_prev: None,
            chain_next: None,
            recency_prev: None,
            recency_next: None,
        }
    }
}

/// Fixed-size pool of node slots with a free list
#[derive(Debug)]
pub(crate) struct Arena {
    slots: Vec<Option<Node>>,
    free_list: Vec<NodeId>,
}

impl Arena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
        }
    }

    /// Store an unlinked node, reusing a vacated slot when one exists
    pub(crate) fn alloc(&mut self, key: i32, value: i32) -> NodeId {
        let node = Some(Node::new(key, value));
        if let Some(id) = self.free_list.pop() {
            self.slots[id] = node;
            id
        } else {
            self.slots.push(node);
            self.slots.len() - 1
        }
    }

    /// Vacate a slot and hand back its node
    pub(crate) fn free(&mut self, id: NodeId) -> Node {
        let node = self.slots[id]
            .take()
            .unwrap_or_else(|| panic!("arena slot {id} freed twice"));
        self.free_list.push(id);
        node
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
    }

    /// Number of occupied slots
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Number of slots ever handed out (occupied or free)
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[cfg(test)]
    pub(crate) fn is_live(&self, id: NodeId) -> bool {
        matches!(self.slots.get(id), Some(Some(_)))
    }
}

impl std::ops::Index<NodeId> for Arena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        self.slots[id]
            .as_ref()
            .unwrap_or_else(|| panic!("arena slot {id} is vacant"))
    }
}

impl std::ops::IndexMut<NodeId> for Arena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots[id]
            .as_mut()
            .unwrap_or_else(|| panic!("arena slot {id} is vacant"))
    }
}
