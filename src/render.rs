//! Box-drawing tree renderer
//!
//! Pre-order walk in stored order. Each non-root line gets one trunk segment
//! per ancestor between the root and the node's parent, then a connector.

use std::io::{self, Write};

use crate::tree::TreeNode;

const TRUNK_OPEN: &str = "│  ";
const TRUNK_CLOSED: &str = "   ";
const BRANCH: &str = "├─ ";
const LAST_BRANCH: &str = "└─ ";

/// Write the tree to `out`, one line per node
///
/// Write errors are returned as-is.
pub fn write_tree<W: Write>(out: &mut W, root: &TreeNode) -> io::Result<()> {
    writeln!(out, "{}", root.label())?;
    let mut trunk = Vec::new();
    write_children(out, root, &mut trunk)
}

/// Render the tree into a string
pub fn render(root: &TreeNode) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail, and labels are valid UTF-8.
    let _ = write_tree(&mut buf, root);
    String::from_utf8_lossy(&buf).into_owned()
}

/// `trunk[i]` is true when the ancestor at depth `i + 1` was its parent's last child
fn write_children<W: Write>(
    out: &mut W,
    node: &TreeNode,
    trunk: &mut Vec<bool>,
) -> io::Result<()> {
    let count = node.children().len();
    for (index, child) in node.children().iter().enumerate() {
        let is_last = index + 1 == count;
        writeln!(out, "{}{}", line_prefix(trunk, is_last), child.label())?;

        if !child.is_leaf() {
            trunk.push(is_last);
            write_children(out, child, trunk)?;
            trunk.pop();
        }
    }
    Ok(())
}

fn line_prefix(trunk: &[bool], is_last: bool) -> String {
    let mut prefix = String::with_capacity((trunk.len() + 1) * 3);
    for &ancestor_is_last in trunk {
        prefix.push_str(if ancestor_is_last {
            TRUNK_CLOSED
        } else {
            TRUNK_OPEN
        });
    }
    prefix.push_str(if is_last { LAST_BRANCH } else { BRANCH });
    prefix
}
