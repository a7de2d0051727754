mod validate;

pub use validate::InvariantError;

use std::collections::VecDeque;
use std::fmt;

use crate::node::RbNode;
use crate::print::{print_binary, PrintChild, Printable};
use crate::red_black::insert_fixup;
use crate::util::{first, last, next, prev};

/// Ordered key-value map backed by a red-black tree.
///
/// Keys are unique and ordered by a caller-supplied comparator fixed at
/// construction.  Nodes live in a growable arena and refer to each other by
/// `Option<u32>` index, so the parent back-reference carries no ownership and
/// rotations are plain index surgery.
///
/// The comparator is consulted as `comparator(&node_key, &candidate_key)`
/// during descent: a negative result sends the candidate into the left
/// subtree, a positive result into the right, and zero means the keys are
/// equal.  One consequence worth spelling out: with a numerically-descending
/// comparator such as `|a, b| b - a`, in-order traversal yields keys in
/// numerically-ascending order.
pub struct TreeMap<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    root: Option<u32>,
    comparator: C,
    arena: Vec<RbNode<K, V>>,
    size: usize,
}

impl<K, V, C> TreeMap<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    /// Creates an empty map ordered by `comparator`, which must be a total
    /// order over keys and consistent for the map's whole lifetime.
    pub fn new(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Vec::new(),
            size: 0,
        }
    }

    #[inline]
    fn compare(&self, a: &K, b: &K) -> i32 {
        (self.comparator)(a, b)
    }

    fn push_node(&mut self, p: Option<u32>, left_child: bool, k: K, v: V) -> u32 {
        self.arena.push(RbNode::new(p, left_child, k, v));
        (self.arena.len() - 1) as u32
    }

    /// Inserts `key` → `value`.
    ///
    /// Returns `true` if the key was added.  If an equal key is already
    /// present the call returns `false` and the map is left untouched; the
    /// existing value is not replaced.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let Some(root) = self.root else {
            let idx = self.push_node(None, false, key, value);
            self.root = insert_fixup(&mut self.arena, Some(idx), idx);
            self.size = 1;
            return true;
        };

        let mut curr = root;
        loop {
            let cmp = self.compare(&self.arena[curr as usize].k, &key);
            if cmp == 0 {
                return false;
            }
            if cmp < 0 {
                match self.arena[curr as usize].l {
                    Some(l) => curr = l,
                    None => {
                        let idx = self.push_node(Some(curr), true, key, value);
                        self.arena[curr as usize].l = Some(idx);
                        self.root = insert_fixup(&mut self.arena, self.root, idx);
                        self.size += 1;
                        return true;
                    }
                }
            } else {
                match self.arena[curr as usize].r {
                    Some(r) => curr = r,
                    None => {
                        let idx = self.push_node(Some(curr), false, key, value);
                        self.arena[curr as usize].r = Some(idx);
                        self.root = insert_fixup(&mut self.arena, self.root, idx);
                        self.size += 1;
                        return true;
                    }
                }
            }
        }
    }

    /// Looks `key` up by comparator descent, O(log n).
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut curr = self.root;
        while let Some(i) = curr {
            let cmp = self.compare(&self.arena[i as usize].k, key);
            if cmp == 0 {
                return Some(&self.arena[i as usize].v);
            }
            curr = if cmp < 0 {
                self.arena[i as usize].l
            } else {
                self.arena[i as usize].r
            };
        }
        None
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// In-order traversal, ascending in the map's order.
    ///
    /// `f` returns `false` to stop immediately; no further node is visited,
    /// unvisited ancestors included.
    pub fn traverse<F: FnMut(&K, &V) -> bool>(&self, mut f: F) {
        let mut curr = first(&self.arena, self.root);
        while let Some(i) = curr {
            let n = &self.arena[i as usize];
            if !f(&n.k, &n.v) {
                return;
            }
            curr = next(&self.arena, i);
        }
    }

    /// Level-order traversal over a FIFO queue seeded with the root.
    ///
    /// `f` returns `false` to stop; the children of the rejected node are
    /// never enqueued, so nothing below or after it is visited.
    pub fn traverse_bf<F: FnMut(&K, &V) -> bool>(&self, mut f: F) {
        let Some(root) = self.root else {
            return;
        };

        let mut queue = VecDeque::new();
        queue.push_back(root);
        while let Some(i) = queue.pop_front() {
            let n = &self.arena[i as usize];
            if !f(&n.k, &n.v) {
                return;
            }
            if let Some(l) = n.l {
                queue.push_back(l);
            }
            if let Some(r) = n.r {
                queue.push_back(r);
            }
        }
    }

    /// Double-ended in-order iterator over `(&K, &V)`.
    pub fn iter(&self) -> Entries<'_, K, V, C> {
        Entries {
            map: self,
            front: first(&self.arena, self.root),
            back: last(&self.arena, self.root),
            done: self.root.is_none(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Entry with the smallest key in the map's order.
    pub fn front(&self) -> Option<(&K, &V)> {
        first(&self.arena, self.root).map(|i| {
            let n = &self.arena[i as usize];
            (&n.k, &n.v)
        })
    }

    /// Entry with the largest key in the map's order.
    pub fn back(&self) -> Option<(&K, &V)> {
        last(&self.arena, self.root).map(|i| {
            let n = &self.arena[i as usize];
            (&n.k, &n.v)
        })
    }

    pub fn height(&self) -> usize {
        fn height<K, V>(arena: &[RbNode<K, V>], node: Option<u32>) -> usize {
            let Some(i) = node else {
                return 0;
            };
            let n = &arena[i as usize];
            1 + height(arena, n.l).max(height(arena, n.r))
        }
        height(&self.arena, self.root)
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn key(&self, idx: u32) -> &K {
        &self.arena[idx as usize].k
    }

    pub fn value(&self, idx: u32) -> &V {
        &self.arena[idx as usize].v
    }
}

impl<K, V, C> Printable for TreeMap<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Fn(&K, &K) -> i32,
{
    fn to_string_with_tab(&self, tab: Option<&str>) -> String {
        let tab = tab.unwrap_or("");
        match self.root {
            None => "TreeMap(len=0)".to_string(),
            Some(root) => format!(
                "TreeMap(len={})\n{tab}{}",
                self.size,
                print_node(&self.arena, root, tab)
            ),
        }
    }
}

fn print_node<K, V>(arena: &[RbNode<K, V>], i: u32, tab: &str) -> String
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    let n = &arena[i as usize];
    let label = format!("{:?} = {:?} {}", n.k, n.v, if n.b { "b" } else { "r" });

    let left = n.l.map(|l| move |t: &str| print_node(arena, l, t));
    let right = n.r.map(|r| move |t: &str| print_node(arena, r, t));
    let children = print_binary(
        Some(tab),
        [
            left.as_ref().map(|f| f as &PrintChild<'_>),
            right.as_ref().map(|f| f as &PrintChild<'_>),
        ],
    );

    format!("{label}{children}")
}

/// In-order iterator over a [`TreeMap`], created by [`TreeMap::iter`].
pub struct Entries<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    map: &'a TreeMap<K, V, C>,
    front: Option<u32>,
    back: Option<u32>,
    done: bool,
}

impl<'a, K, V, C> Iterator for Entries<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let i = self.front?;
        if self.front == self.back {
            self.done = true;
        } else {
            self.front = next(&self.map.arena, i);
        }
        let n = &self.map.arena[i as usize];
        Some((&n.k, &n.v))
    }
}

impl<'a, K, V, C> DoubleEndedIterator for Entries<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let i = self.back?;
        if self.front == self.back {
            self.done = true;
        } else {
            self.back = prev(&self.map.arena, i);
        }
        let n = &self.map.arena[i as usize];
        Some((&n.k, &n.v))
    }
}
