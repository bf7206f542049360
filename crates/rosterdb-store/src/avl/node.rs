//! Tree nodes and the rebalancing primitives.
//!
//! Nodes are parent-owned boxes; rotations are box reassignment. Every
//! mutating helper returns the (possibly new) subtree root with its
//! height already recomputed.

use std::cmp::Ordering;

use tracing::trace;

use crate::id_list::IdList;

pub(super) type Link<K> = Option<Box<Node<K>>>;

#[derive(Debug, Clone)]
pub(super) struct Node<K> {
    pub key: K,
    pub height: i32,
    pub left: Link<K>,
    pub right: Link<K>,
    pub ids: IdList,
}

impl<K> Node<K> {
    pub fn leaf(key: K, id: usize) -> Self {
        Self { key, height: 1, left: None, right: None, ids: IdList::singleton(id) }
    }

    pub fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(right) - height(left)`; +2 or -2 means a violation.
    pub fn balance_factor(&self) -> i32 {
        height(&self.right) - height(&self.left)
    }
}

pub(super) fn height<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(0, |node| node.height)
}

/// Promote the left child to subtree root.
///
/// Returns the node unchanged when it has no left child; callers only
/// invoke this on a left-heavy node.
pub(super) fn rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut promoted) = node.left.take() else {
        return node;
    };
    trace!("right rotation");
    node.left = promoted.right.take();
    node.update_height();
    promoted.right = Some(node);
    promoted.update_height();
    promoted
}

/// Promote the right child to subtree root.
pub(super) fn rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut promoted) = node.right.take() else {
        return node;
    };
    trace!("left rotation");
    node.right = promoted.left.take();
    node.update_height();
    promoted.left = Some(node);
    promoted.update_height();
    promoted
}

/// Restore the balance invariant at one node, performing the single or
/// double rotation the balance factor calls for.
pub(super) fn rebalance<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    node.update_height();

    match node.balance_factor() {
        2 => {
            if node.right.as_ref().map_or(0, |r| r.balance_factor()) < 0 {
                node.right = node.right.take().map(rotate_right);
            }
            rotate_left(node)
        }
        -2 => {
            if node.left.as_ref().map_or(0, |l| l.balance_factor()) > 0 {
                node.left = node.left.take().map(rotate_left);
            }
            rotate_right(node)
        }
        _ => node,
    }
}

pub(super) fn insert_at<K: Ord>(
    link: Link<K>,
    key: K,
    id: usize,
    created: &mut bool,
) -> Box<Node<K>> {
    let Some(mut node) = link else {
        *created = true;
        return Box::new(Node::leaf(key, id));
    };

    match key.cmp(&node.key) {
        Ordering::Equal => node.ids.add(id),
        Ordering::Less => node.left = Some(insert_at(node.left.take(), key, id, created)),
        Ordering::Greater => {
            node.right = Some(insert_at(node.right.take(), key, id, created));
        }
    }

    rebalance(node)
}

/// Detach the maximum node of a subtree, rebalancing what remains.
fn detach_max<K: Ord>(mut node: Box<Node<K>>) -> (Link<K>, Box<Node<K>>) {
    match node.right.take() {
        None => {
            let remaining = node.left.take();
            (remaining, node)
        }
        Some(right) => {
            let (remaining, max) = detach_max(right);
            node.right = remaining;
            (Some(rebalance(node)), max)
        }
    }
}

/// Remove a node from its subtree by predecessor splicing: the maximum
/// of the left subtree becomes the new subtree root. A node with no
/// left child is replaced by its right child directly.
fn splice<K: Ord>(mut node: Box<Node<K>>) -> Link<K> {
    let left = node.left.take();
    let right = node.right.take();

    match left {
        None => right,
        Some(left) => {
            let (remaining, mut max) = detach_max(left);
            max.left = remaining;
            max.right = right;
            Some(rebalance(max))
        }
    }
}

/// Remove `id` from the bucket at `key`; an emptied bucket deletes the
/// whole node. `removed_node` reports whether a node went away.
pub(super) fn remove_at<K: Ord>(
    link: Link<K>,
    key: &K,
    id: usize,
    removed_node: &mut bool,
) -> Link<K> {
    let mut node = link?;

    match key.cmp(&node.key) {
        Ordering::Less => node.left = remove_at(node.left.take(), key, id, removed_node),
        Ordering::Greater => {
            node.right = remove_at(node.right.take(), key, id, removed_node);
        }
        Ordering::Equal => {
            node.ids.remove(id);
            if node.ids.is_empty() {
                *removed_node = true;
                return splice(node);
            }
        }
    }

    Some(rebalance(node))
}

/// Delete the node at `key` regardless of its bucket contents.
pub(super) fn remove_key_at<K: Ord>(
    link: Link<K>,
    key: &K,
    removed_node: &mut bool,
) -> Link<K> {
    let mut node = link?;

    match key.cmp(&node.key) {
        Ordering::Less => node.left = remove_key_at(node.left.take(), key, removed_node),
        Ordering::Greater => {
            node.right = remove_key_at(node.right.take(), key, removed_node);
        }
        Ordering::Equal => {
            *removed_node = true;
            return splice(node);
        }
    }

    Some(rebalance(node))
}
