use thiserror::Error;

use crate::node::RbNode;
use crate::util::{first, next};

use super::TreeMap;

/// A broken structural or red-black invariant, as reported by
/// [`TreeMap::check_invariants`].
///
/// Nothing in the map itself constructs these; the checker exists for tests
/// and debugging.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("recorded size {recorded} does not match {actual} stored nodes")]
    SizeMismatch { recorded: usize, actual: usize },
    #[error("root node {0} is red")]
    RedRoot(u32),
    #[error("red node {child} has red parent {parent}")]
    RedRedEdge { parent: u32, child: u32 },
    #[error("black height differs between subtrees of node {node}: {left} vs {right}")]
    BlackHeightMismatch {
        node: u32,
        left: usize,
        right: usize,
    },
    #[error("node {0} is not greater than its in-order predecessor")]
    OrderViolation(u32),
    #[error("parent or role links inconsistent at node {0}")]
    LinkMismatch(u32),
    #[error("{reachable} nodes reachable from the root, arena holds {arena}")]
    LostNodes { reachable: usize, arena: usize },
}

impl<K, V, C> TreeMap<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    /// Walks the whole tree and verifies every invariant the map promises:
    /// BST ordering under the comparator, black root, no red-red edge,
    /// uniform black height, parent/role link consistency, and that no node
    /// has been lost from the arena.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.size != self.arena.len() {
            return Err(InvariantError::SizeMismatch {
                recorded: self.size,
                actual: self.arena.len(),
            });
        }

        let arena = self.arena.as_slice();
        let Some(root) = self.root else {
            if arena.is_empty() {
                return Ok(());
            }
            return Err(InvariantError::LostNodes {
                reachable: 0,
                arena: arena.len(),
            });
        };

        if arena[root as usize].p.is_some() {
            return Err(InvariantError::LinkMismatch(root));
        }
        if !arena[root as usize].b {
            return Err(InvariantError::RedRoot(root));
        }

        let (reachable, _) = check_subtree(arena, root)?;
        if reachable != arena.len() {
            return Err(InvariantError::LostNodes {
                reachable,
                arena: arena.len(),
            });
        }

        // Ordering: each in-order successor must compare greater.
        let mut prev_idx: Option<u32> = None;
        let mut curr = first(arena, Some(root));
        while let Some(i) = curr {
            if let Some(pi) = prev_idx {
                if self.compare(&arena[pi as usize].k, &arena[i as usize].k) <= 0 {
                    return Err(InvariantError::OrderViolation(i));
                }
            }
            prev_idx = Some(i);
            curr = next(arena, i);
        }

        Ok(())
    }
}

/// Returns (reachable node count, black height) of the subtree at `i`.
fn check_subtree<K, V>(arena: &[RbNode<K, V>], i: u32) -> Result<(usize, usize), InvariantError> {
    let n = &arena[i as usize];

    if !n.b {
        for child in [n.l, n.r].into_iter().flatten() {
            if !arena[child as usize].b {
                return Err(InvariantError::RedRedEdge {
                    parent: i,
                    child,
                });
            }
        }
    }

    let mut counts = [0usize; 2];
    let mut heights = [0usize; 2];
    for (slot, (child, is_left)) in [(n.l, true), (n.r, false)].into_iter().enumerate() {
        let Some(c) = child else {
            continue;
        };
        let cn = &arena[c as usize];
        if cn.p != Some(i) || cn.left_child != is_left {
            return Err(InvariantError::LinkMismatch(c));
        }
        let (count, height) = check_subtree(arena, c)?;
        counts[slot] = count;
        heights[slot] = height;
    }

    if heights[0] != heights[1] {
        return Err(InvariantError::BlackHeightMismatch {
            node: i,
            left: heights[0],
            right: heights[1],
        });
    }

    Ok((1 + counts[0] + counts[1], heights[0] + usize::from(n.b)))
}
