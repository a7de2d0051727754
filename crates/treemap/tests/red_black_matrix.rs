use treemap::red_black::{
    classify, grandparent, is_black, rotate_left, rotate_right, toggle_color, uncle, Violation,
};
use treemap::RbNode;

fn node(p: Option<u32>, left_child: bool, black: bool, k: i32) -> RbNode<i32, i32> {
    let mut n = RbNode::new(p, left_child, k, k);
    n.b = black;
    n
}

#[test]
fn is_black_matrix() {
    let arena = vec![node(None, false, true, 1), node(None, false, false, 2)];

    assert!(is_black(&arena, Some(0)));
    assert!(!is_black(&arena, Some(1)));
    // Absent nodes count as black.
    assert!(is_black::<i32, i32>(&[], None));
}

#[test]
fn toggle_color_matrix() {
    let mut arena = vec![node(None, false, true, 1)];

    toggle_color(&mut arena, Some(0));
    assert!(!arena[0].b);
    toggle_color(&mut arena, Some(0));
    assert!(arena[0].b);
    toggle_color(&mut arena, None);
}

#[test]
fn grandparent_and_uncle_matrix() {
    //        0
    //      /   \
    //     1     2
    //             \
    //              3
    let mut arena = vec![
        node(None, false, true, 10),
        node(Some(0), true, true, 5),
        node(Some(0), false, true, 20),
        node(Some(2), false, false, 30),
    ];
    arena[0].l = Some(1);
    arena[0].r = Some(2);
    arena[2].r = Some(3);

    assert_eq!(grandparent(&arena, 3), Some(0));
    assert_eq!(grandparent(&arena, 1), None);
    assert_eq!(grandparent(&arena, 0), None);

    // 3's parent is a right child, so the uncle sits on the grandparent's
    // left.
    assert_eq!(uncle(&arena, 3), Some(1));
    assert_eq!(uncle(&arena, 1), None);
    assert_eq!(uncle(&arena, 2), None);
    assert_eq!(uncle(&arena, 0), None);
}

#[test]
fn rotate_left_chain_matrix() {
    //   0             1
    //    \           / \
    //     1    =>   0   2
    //      \
    //       2
    let mut arena = vec![
        node(None, false, true, 1),
        node(Some(0), false, false, 2),
        node(Some(1), false, false, 3),
    ];
    arena[0].r = Some(1);
    arena[1].r = Some(2);

    let root = rotate_left(&mut arena, Some(0), Some(0));
    assert_eq!(root, Some(1));

    assert_eq!(arena[1].p, None);
    assert_eq!(arena[1].l, Some(0));
    assert_eq!(arena[1].r, Some(2));

    assert_eq!(arena[0].p, Some(1));
    assert!(arena[0].left_child);
    assert_eq!(arena[0].l, None);
    assert_eq!(arena[0].r, None);

    assert_eq!(arena[2].p, Some(1));
    assert!(!arena[2].left_child);
    assert_eq!(arena[2].l, None);
    assert_eq!(arena[2].r, None);
}

#[test]
fn rotate_right_chain_matrix() {
    //       0         1
    //      /         / \
    //     1    =>   2   0
    //    /
    //   2
    let mut arena = vec![
        node(None, false, true, 3),
        node(Some(0), true, false, 2),
        node(Some(1), true, false, 1),
    ];
    arena[0].l = Some(1);
    arena[1].l = Some(2);

    let root = rotate_right(&mut arena, Some(0), Some(0));
    assert_eq!(root, Some(1));

    assert_eq!(arena[1].p, None);
    assert_eq!(arena[1].l, Some(2));
    assert_eq!(arena[1].r, Some(0));

    assert_eq!(arena[0].p, Some(1));
    assert!(!arena[0].left_child);
    assert_eq!(arena[0].l, None);
    assert_eq!(arena[0].r, None);

    assert_eq!(arena[2].p, Some(1));
    assert!(arena[2].left_child);
}

#[test]
fn rotation_reparents_inner_child_matrix() {
    //   0               1
    //    \             / \
    //     1     =>    0   …
    //    /             \
    //   2               2
    let mut arena = vec![
        node(None, false, true, 1),
        node(Some(0), false, false, 3),
        node(Some(1), true, false, 2),
    ];
    arena[0].r = Some(1);
    arena[1].l = Some(2);

    let root = rotate_left(&mut arena, Some(0), Some(0));
    assert_eq!(root, Some(1));

    // The promoted child's former left subtree crosses over to the pivot's
    // right side, parent link and role flag included.
    assert_eq!(arena[0].r, Some(2));
    assert_eq!(arena[2].p, Some(0));
    assert!(!arena[2].left_child);
}

#[test]
fn rotation_below_the_root_updates_the_parent_matrix() {
    //   0                 0
    //    \                 \
    //     1        =>       2
    //      \               /
    //       2             1
    let mut arena = vec![
        node(None, false, true, 1),
        node(Some(0), false, false, 2),
        node(Some(1), false, false, 3),
    ];
    arena[0].r = Some(1);
    arena[1].r = Some(2);

    let root = rotate_left(&mut arena, Some(0), Some(1));
    assert_eq!(root, Some(0), "root unchanged by a lower rotation");

    assert_eq!(arena[0].r, Some(2));
    assert_eq!(arena[2].p, Some(0));
    assert!(!arena[2].left_child);
    assert_eq!(arena[2].l, Some(1));
    assert_eq!(arena[1].p, Some(2));
    assert!(arena[1].left_child);
}

#[test]
fn rotation_without_required_child_is_a_no_op_matrix() {
    let mut arena = vec![node(None, false, true, 1)];

    assert_eq!(rotate_left(&mut arena, Some(0), Some(0)), Some(0));
    assert_eq!(rotate_right(&mut arena, Some(0), Some(0)), Some(0));
    assert_eq!(rotate_left(&mut arena, Some(0), None), Some(0));

    assert_eq!(arena[0].p, None);
    assert_eq!(arena[0].l, None);
    assert_eq!(arena[0].r, None);
}

#[test]
fn classify_matrix() {
    // Lone red root.
    let arena = vec![node(None, false, false, 1)];
    assert_eq!(classify(&arena, 0), Violation::RedRoot);

    // Lone black root.
    let arena = vec![node(None, false, true, 1)];
    assert_eq!(classify(&arena, 0), Violation::None);

    // Red uncle outranks geometry.
    let mut arena = vec![
        node(None, false, true, 10),
        node(Some(0), true, false, 5),
        node(Some(0), false, false, 20),
        node(Some(1), true, false, 1),
    ];
    arena[0].l = Some(1);
    arena[0].r = Some(2);
    arena[1].l = Some(3);
    assert_eq!(classify(&arena, 3), Violation::RedUncle);

    // Zig-zag without an uncle.
    let mut arena = vec![
        node(None, false, true, 10),
        node(Some(0), true, false, 5),
        node(Some(1), false, false, 7),
    ];
    arena[0].l = Some(1);
    arena[1].r = Some(2);
    assert_eq!(classify(&arena, 2), Violation::Triangle);

    // Straight line without an uncle.
    let mut arena = vec![
        node(None, false, true, 10),
        node(Some(0), true, false, 5),
        node(Some(1), true, false, 1),
    ];
    arena[0].l = Some(1);
    arena[1].l = Some(2);
    assert_eq!(classify(&arena, 2), Violation::Line);

    // Red child of a black parent breaks nothing.
    let mut arena = vec![
        node(None, false, true, 10),
        node(Some(0), true, true, 5),
        node(Some(1), true, false, 1),
    ];
    arena[0].l = Some(1);
    arena[1].l = Some(2);
    assert_eq!(classify(&arena, 2), Violation::None);
}
