use super::{Matcher, ScriptTree};
use tree_sitter::Node;

/// Collects every node in `tree` matching `matcher`, in document order.
#[must_use]
pub fn find_all<'t>(tree: &'t ScriptTree, matcher: &Matcher) -> Vec<Node<'t>> {
    let mut out = Vec::new();
    collect(tree.root(), matcher, tree.text(), &mut out);
    out
}

fn collect<'t>(node: Node<'t>, matcher: &Matcher, source: &str, out: &mut Vec<Node<'t>>) {
    if matcher.matches(node, source) {
        out.push(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, matcher, source, out);
    }
}

/// Direct children of `node` matching `matcher`, in document order.
#[must_use]
pub fn matching_children<'t>(node: Node<'t>, matcher: &Matcher, source: &str) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|child| matcher.matches(*child, source))
        .collect()
}

/// True when `second` begins at or after the end of `first`, scanning toward
/// the end of the document. Arbitrary nodes may lie between the two.
#[must_use]
pub fn follows(first: Node<'_>, second: Node<'_>) -> bool {
    second.start_byte() >= first.end_byte()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_all_returns_document_order() {
        let tree = ScriptTree::parse("echo one\necho two | grep o\n").unwrap();
        let commands = find_all(&tree, &Matcher::Kind("command"));
        assert_eq!(commands.len(), 3);
        let texts: Vec<&str> = commands.iter().map(|c| tree.node_text(*c)).collect();
        assert_eq!(texts, ["echo one", "echo two", "grep o"]);
    }

    #[test]
    fn test_follows_scans_past_intervening_nodes() {
        let tree = ScriptTree::parse("aws s3 cp s3://a --quiet s3://b\n").unwrap();
        let command = tree.root().child(0).unwrap();
        let uris = matching_children(
            command,
            &Matcher::token_matching(
                "word",
                &regex::Regex::new("^s3://").unwrap(),
            ),
            tree.text(),
        );
        assert_eq!(uris.len(), 2);
        assert!(follows(uris[0], uris[1]));
        assert!(!follows(uris[1], uris[0]));
    }
}
