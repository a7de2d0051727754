//! Insertion fix-up machinery: violation classification, recoloring, and
//! rotations over the node arena.
//!
//! Every function takes the arena plus the current tree root and works with
//! indices; functions that can restructure the tree return the root, which a
//! rotation at the top replaces.

use crate::node::RbNode;

/// Local red-black violation at a node.
///
/// Classification order matters: a red root has neither uncle nor
/// grandparent, and a red uncle resolves by recoloring alone, independent of
/// shape, so those two outrank the geometry cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    None,
    RedRoot,
    RedUncle,
    Triangle,
    Line,
}

/// Absent nodes count as black.
pub fn is_black<K, V>(arena: &[RbNode<K, V>], n: Option<u32>) -> bool {
    match n {
        Some(i) => arena[i as usize].b,
        None => true,
    }
}

pub fn grandparent<K, V>(arena: &[RbNode<K, V>], n: u32) -> Option<u32> {
    let p = arena[n as usize].p?;
    arena[p as usize].p
}

/// The grandparent's child on the side opposite the parent's role.
pub fn uncle<K, V>(arena: &[RbNode<K, V>], n: u32) -> Option<u32> {
    let g = grandparent(arena, n)?;
    let p = arena[n as usize].p?;
    if arena[p as usize].left_child {
        arena[g as usize].r
    } else {
        arena[g as usize].l
    }
}

pub fn toggle_color<K, V>(arena: &mut [RbNode<K, V>], n: Option<u32>) {
    if let Some(i) = n {
        arena[i as usize].b = !arena[i as usize].b;
    }
}

fn is_root<K, V>(arena: &[RbNode<K, V>], n: u32) -> bool {
    arena[n as usize].p.is_none()
}

/// Left child of a left child, or right child of a right child.
fn line_arrangement<K, V>(arena: &[RbNode<K, V>], n: u32) -> bool {
    match arena[n as usize].p {
        Some(p) if !is_root(arena, p) => {
            arena[n as usize].left_child == arena[p as usize].left_child
        }
        _ => false,
    }
}

/// Zig-zag: the node's role differs from its parent's.
fn triangle_arrangement<K, V>(arena: &[RbNode<K, V>], n: u32) -> bool {
    match arena[n as usize].p {
        Some(p) if !is_root(arena, p) => {
            arena[n as usize].left_child != arena[p as usize].left_child
        }
        _ => false,
    }
}

/// Classifies the violation at `n`, in priority order.
pub fn classify<K, V>(arena: &[RbNode<K, V>], n: u32) -> Violation {
    if is_root(arena, n) && !is_black(arena, Some(n)) {
        return Violation::RedRoot;
    }

    let unc = uncle(arena, n);
    if unc.is_some() && !is_black(arena, unc) {
        return Violation::RedUncle;
    }

    let red_pair = !is_black(arena, Some(n)) && !is_black(arena, arena[n as usize].p);
    if triangle_arrangement(arena, n) && red_pair {
        return Violation::Triangle;
    }
    if line_arrangement(arena, n) && red_pair {
        return Violation::Line;
    }

    Violation::None
}

/// Left-rotates around `n`, promoting its right child into `n`'s position.
///
/// Rewires the promoted child's former left subtree onto `n`'s right side,
/// with parent links and role flags kept consistent throughout.  Returns the
/// tree root, replaced when the pivot was the root.  Structural no-op when
/// the pivot or its right child is absent.
pub fn rotate_left<K, V>(
    arena: &mut [RbNode<K, V>],
    root: Option<u32>,
    n: Option<u32>,
) -> Option<u32> {
    let Some(n) = n else {
        return root;
    };
    let Some(c) = arena[n as usize].r else {
        return root;
    };

    let old_parent = arena[n as usize].p;
    let inner = arena[c as usize].l;

    arena[n as usize].r = inner;
    if let Some(inner) = inner {
        arena[inner as usize].p = Some(n);
        arena[inner as usize].left_child = false;
    }

    arena[c as usize].p = old_parent;
    let root = match old_parent {
        Some(op) => {
            if arena[n as usize].left_child {
                arena[op as usize].l = Some(c);
                arena[c as usize].left_child = true;
            } else {
                arena[op as usize].r = Some(c);
                arena[c as usize].left_child = false;
            }
            root
        }
        None => Some(c),
    };

    arena[c as usize].l = Some(n);
    arena[n as usize].p = Some(c);
    arena[n as usize].left_child = true;

    root
}

/// Mirror image of [`rotate_left`]: promotes the left child.
pub fn rotate_right<K, V>(
    arena: &mut [RbNode<K, V>],
    root: Option<u32>,
    n: Option<u32>,
) -> Option<u32> {
    let Some(n) = n else {
        return root;
    };
    let Some(c) = arena[n as usize].l else {
        return root;
    };

    let old_parent = arena[n as usize].p;
    let inner = arena[c as usize].r;

    arena[n as usize].l = inner;
    if let Some(inner) = inner {
        arena[inner as usize].p = Some(n);
        arena[inner as usize].left_child = true;
    }

    arena[c as usize].p = old_parent;
    let root = match old_parent {
        Some(op) => {
            if arena[n as usize].left_child {
                arena[op as usize].l = Some(c);
                arena[c as usize].left_child = true;
            } else {
                arena[op as usize].r = Some(c);
                arena[c as usize].left_child = false;
            }
            root
        }
        None => Some(c),
    };

    arena[c as usize].r = Some(n);
    arena[n as usize].p = Some(c);
    arena[n as usize].left_child = false;

    root
}

/// Repairs red-black invariants starting at the just-inserted node.
///
/// Walks parent links iteratively, classifying the local violation at each
/// step and either recoloring, rotating, or climbing.  Terminates once no
/// violation remains at the root.  Returns the tree root, which rotations may
/// have replaced.
pub fn insert_fixup<K, V>(
    arena: &mut [RbNode<K, V>],
    mut root: Option<u32>,
    start: u32,
) -> Option<u32> {
    let mut x = start;
    loop {
        let parent = arena[x as usize].p;
        let grand = grandparent(arena, x);
        let unc = uncle(arena, x);

        match classify(arena, x) {
            Violation::None => match parent {
                None => return root,
                Some(p) => x = p,
            },
            Violation::RedRoot => {
                toggle_color(arena, Some(x));
            }
            Violation::RedUncle => {
                toggle_color(arena, parent);
                toggle_color(arena, unc);
                toggle_color(arena, grand);
                x = parent.expect("red uncle implies a parent");
            }
            Violation::Triangle => {
                let p = parent.expect("triangle implies a parent");
                root = if arena[x as usize].left_child {
                    rotate_right(arena, root, Some(p))
                } else {
                    rotate_left(arena, root, Some(p))
                };
                x = p;
            }
            Violation::Line => {
                let p = parent.expect("line implies a parent");
                root = if arena[x as usize].left_child {
                    rotate_right(arena, root, grand)
                } else {
                    rotate_left(arena, root, grand)
                };
                toggle_color(arena, Some(p));
                toggle_color(arena, grand);
                x = p;
            }
        }
    }
}
