//! Pre-order traversal with entering/exiting callbacks.

use crate::tree::TreeNode;

/// What the walker does after a visitor callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WalkStatus {
    /// Keep going: descend into children, then move to the next sibling.
    #[default]
    GoToNext,
    /// Do not descend into the current node's children. Only meaningful on
    /// the entering call; the exiting call still happens.
    SkipChildren,
    /// Stop the whole traversal.
    Terminate,
}

/// Callback invoked twice per node: with `entering = true` before its
/// children, and with `entering = false` after them.
pub trait Visitor<N: TreeNode> {
    fn visit(&mut self, node: &N, entering: bool) -> WalkStatus;
}

impl<N, F> Visitor<N> for F
where
    N: TreeNode,
    F: FnMut(&N, bool) -> WalkStatus,
{
    fn visit(&mut self, node: &N, entering: bool) -> WalkStatus {
        self(node, entering)
    }
}

/// Walks `node` depth-first.
///
/// Returns [`WalkStatus::Terminate`] if a callback asked to stop, otherwise
/// [`WalkStatus::GoToNext`]. A `Terminate` from the entering callback still
/// delivers the exiting callback for that same node before unwinding.
pub fn walk<N, V>(node: &N, visitor: &mut V) -> WalkStatus
where
    N: TreeNode,
    V: Visitor<N> + ?Sized,
{
    let status = visitor.visit(node, true);
    if status == WalkStatus::Terminate {
        visitor.visit(node, false);
        return WalkStatus::Terminate;
    }

    if status != WalkStatus::SkipChildren {
        for child in node.children() {
            if walk(child, visitor) == WalkStatus::Terminate {
                return WalkStatus::Terminate;
            }
        }
    }

    match visitor.visit(node, false) {
        WalkStatus::Terminate => WalkStatus::Terminate,
        _ => WalkStatus::GoToNext,
    }
}

/// Closure form of [`walk`].
pub fn walk_fn<N, F>(node: &N, mut f: F) -> WalkStatus
where
    N: TreeNode,
    F: FnMut(&N, bool) -> WalkStatus,
{
    walk(node, &mut f)
}
