//! Append-only resource tree
//!
//! Nodes are moved into their parent on [`TreeNode::append`], so each node has
//! exactly one owner and the tree cannot contain cycles. Labels are fixed at
//! construction and children are never removed or reordered.

/// A display node: a formatted label and its ordered children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a node with no children
    ///
    /// Control characters in `label` (newlines included) become spaces, so a
    /// node always renders as exactly one line.
    pub fn new(label: impl Into<String>) -> Self {
        let mut label = label.into();
        if label.contains(char::is_control) {
            label = label
                .chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect();
        }
        Self {
            label,
            children: Vec::new(),
        }
    }

    /// Add `child` as the new last child and return a handle to it
    pub fn append(&mut self, child: TreeNode) -> &mut TreeNode {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Children in display order
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_leaf() {
        let node = TreeNode::new("EC2");
        assert_eq!(node.label(), "EC2");
        assert!(node.is_leaf());
        assert_eq!(node.node_count(), 1);
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut root = TreeNode::new("root");
        root.append(TreeNode::new("zeta"));
        root.append(TreeNode::new("alpha"));
        root.append(TreeNode::new("mid"));

        let labels: Vec<&str> = root.children().iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_append_returns_handle_to_child() {
        let mut root = TreeNode::new("Account: Foo (1)");
        let region = root.append(TreeNode::new("region: us-east-1"));
        region.append(TreeNode::new("EC2"));

        assert_eq!(root.children().len(), 1);
        assert_eq!(root.children()[0].children()[0].label(), "EC2");
        assert_eq!(root.node_count(), 3);
    }

    #[test]
    fn test_node_count_covers_whole_subtree() {
        let mut root = TreeNode::new("root");
        let a = root.append(TreeNode::new("a"));
        a.append(TreeNode::new("a1"));
        a.append(TreeNode::new("a2"));
        root.append(TreeNode::new("b"));
        assert_eq!(root.node_count(), 5);
        assert!(!root.is_leaf());
    }

    #[test]
    fn test_label_control_characters_become_spaces() {
        let node = TreeNode::new("Compute Instance name: web\nprod\r\tid: i-1");
        assert_eq!(node.label(), "Compute Instance name: web prod  id: i-1");
        assert_eq!(TreeNode::new("région: ü").label(), "région: ü");
    }

    #[test]
    fn test_multiline_label_renders_one_line_per_node() {
        let mut root = TreeNode::new("Account: Foo (1)");
        let region = root.append(TreeNode::new("region: us-east-1"));
        crate::providers::attach_category(
            region,
            "EC2",
            vec!["Compute Instance name: web\nprod id: i-1".to_string()],
        );
        root.append(TreeNode::new("region: us-west-1"));

        let output = crate::render::render(&root);
        assert_eq!(output.lines().count(), root.node_count());
        assert!(output.contains("│     └─ Compute Instance name: web prod id: i-1\n"));
    }

    #[test]
    fn test_append_to_trailing_leaf_extends_render() {
        let mut root = TreeNode::new("root");
        let region = root.append(TreeNode::new("region: eu-west-1"));
        region.append(TreeNode::new("S3"));
        let before = crate::render::render(&root);

        root.children[0].children[0].append(TreeNode::new("Bucket name: logs"));
        let after = crate::render::render(&root);

        assert!(after.starts_with(&before));
        assert_eq!(after.lines().count(), before.lines().count() + 1);
        assert_eq!(root.children()[0].children()[0].label(), "S3");
    }
}
