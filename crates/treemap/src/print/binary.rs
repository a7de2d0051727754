use super::types::PrintChild;

/// Renders the two children of a binary-tree node as indented `←`/`→`
/// branches, one line each.
pub fn print_binary(tab: Option<&str>, children: [Option<&PrintChild<'_>>; 2]) -> String {
    let tab = tab.unwrap_or("");
    let child_tab = format!("{tab}  ");
    let [left, right] = children;

    let mut out = String::new();
    for (arrow, child) in [("← ", left), ("→ ", right)] {
        let Some(child) = child else {
            continue;
        };
        out.push('\n');
        out.push_str(tab);
        out.push_str(arrow);
        out.push_str(&child(&child_tab));
    }
    out
}
