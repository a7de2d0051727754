use crate::types::Node;

use super::last::last;

/// In-order predecessor of `curr`.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = arena[curr as usize].l() {
        return last(arena, Some(l));
    }

    let mut p = arena[curr as usize].p();
    while let Some(pi) = p {
        if arena[pi as usize].l() == Some(curr) {
            curr = pi;
            p = arena[pi as usize].p();
        } else {
            return Some(pi);
        }
    }
    None
}
