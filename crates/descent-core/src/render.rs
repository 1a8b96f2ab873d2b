//! Text rendering with branch glyphs.
//!
//! ```text
//! Expr
//! ├─ Term
//! │  └─ Number
//! │     └─ 2.8
//! └─ Expr'
//!    └─ ε
//! ```
//!
//! Every line, including the last, ends with a newline.

use crate::colors::Colors;
use crate::tree::TreeNode;

const BRANCH: &str = "├─ ";
const LAST_BRANCH: &str = "└─ ";
const PIPE: &str = "│  ";
const BLANK: &str = "   ";

pub fn render<N: TreeNode>(node: &N, colors: Colors) -> String {
    let mut out = String::new();
    push_label(&mut out, node, colors);
    render_children(&mut out, node, &mut String::new(), colors);
    out
}

fn render_children<N: TreeNode>(out: &mut String, node: &N, prefix: &mut String, colors: Colors) {
    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        out.push_str(&colors.paint(colors.dim, prefix));
        out.push_str(&colors.paint(colors.dim, if last { LAST_BRANCH } else { BRANCH }));
        push_label(out, child, colors);

        let len = prefix.len();
        prefix.push_str(if last { BLANK } else { PIPE });
        render_children(out, child, prefix, colors);
        prefix.truncate(len);
    }
}

fn push_label<N: TreeNode>(out: &mut String, node: &N, colors: Colors) {
    let label = node.label();
    let color = if node.is_failure() {
        colors.red
    } else if node.is_terminal() {
        colors.green
    } else {
        colors.blue
    };
    out.push_str(&colors.paint(color, &label));
    out.push('\n');
}
