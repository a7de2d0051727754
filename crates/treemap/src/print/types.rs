/// Anything that can render itself as an indented tree.
pub trait Printable {
    fn to_string_with_tab(&self, tab: Option<&str>) -> String;
}

/// Child printer callback used by [`super::print_binary`]; receives the
/// child's indentation prefix.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;
