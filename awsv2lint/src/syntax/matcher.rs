use regex::Regex;
use tree_sitter::Node;

/// Textual pattern applied to a node's exact source slice.
#[derive(Debug, Clone)]
pub enum TextPattern {
    /// The node text equals this string exactly.
    Literal(String),
    /// The node text matches this regular expression.
    Regex(Regex),
}

impl TextPattern {
    fn is_match(&self, text: &str) -> bool {
        match self {
            TextPattern::Literal(expected) => text == expected,
            TextPattern::Regex(re) => re.is_match(text),
        }
    }
}

/// A composable structural predicate over tree nodes.
///
/// Matchers are built once when a rule is constructed and evaluated many
/// times against command nodes.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Node kind equals the given grammar kind name.
    Kind(&'static str),
    /// Node text matches the pattern.
    Text(TextPattern),
    /// Some direct child matches the inner matcher.
    HasChild(Box<Matcher>),
    /// Some descendant (the node itself excluded) matches the inner matcher.
    HasDescendant(Box<Matcher>),
    /// The inner matcher does not match.
    Not(Box<Matcher>),
    /// Every inner matcher matches.
    All(Vec<Matcher>),
    /// At least one inner matcher matches.
    Any(Vec<Matcher>),
}

impl Matcher {
    /// Node kind plus exact text in one step.
    #[must_use]
    pub fn token(kind: &'static str, text: impl Into<String>) -> Self {
        Matcher::All(vec![
            Matcher::Kind(kind),
            Matcher::Text(TextPattern::Literal(text.into())),
        ])
    }

    /// Node kind plus regex text in one step.
    #[must_use]
    pub fn token_matching(kind: &'static str, pattern: &Regex) -> Self {
        Matcher::All(vec![
            Matcher::Kind(kind),
            Matcher::Text(TextPattern::Regex(pattern.clone())),
        ])
    }

    /// Boxes `inner` into a [`Matcher::HasChild`].
    #[must_use]
    pub fn has_child(inner: Matcher) -> Self {
        Matcher::HasChild(Box::new(inner))
    }

    /// Boxes `inner` into a [`Matcher::HasDescendant`].
    #[must_use]
    pub fn has_descendant(inner: Matcher) -> Self {
        Matcher::HasDescendant(Box::new(inner))
    }

    /// Boxes `inner` into a [`Matcher::Not`].
    #[must_use]
    pub fn not(inner: Matcher) -> Self {
        Matcher::Not(Box::new(inner))
    }

    /// Conjunction of `inner` matchers.
    #[must_use]
    pub fn all(inner: Vec<Matcher>) -> Self {
        Matcher::All(inner)
    }

    /// Disjunction of `inner` matchers.
    #[must_use]
    pub fn any(inner: Vec<Matcher>) -> Self {
        Matcher::Any(inner)
    }

    /// Evaluates this matcher against `node` within `source`.
    #[must_use]
    pub fn matches(&self, node: Node<'_>, source: &str) -> bool {
        match self {
            Matcher::Kind(kind) => node.kind() == *kind,
            Matcher::Text(pattern) => pattern.is_match(&source[node.byte_range()]),
            Matcher::HasChild(inner) => {
                let mut cursor = node.walk();
                let has_match = node
                    .children(&mut cursor)
                    .any(|child| inner.matches(child, source));
                has_match
            }
            Matcher::HasDescendant(inner) => any_descendant(node, inner, source),
            Matcher::Not(inner) => !inner.matches(node, source),
            Matcher::All(inner) => inner.iter().all(|m| m.matches(node, source)),
            Matcher::Any(inner) => inner.iter().any(|m| m.matches(node, source)),
        }
    }
}

fn any_descendant(node: Node<'_>, matcher: &Matcher, source: &str) -> bool {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if matcher.matches(child, source) || any_descendant(child, matcher, source) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ScriptTree;

    fn first_command(tree: &ScriptTree) -> Node<'_> {
        tree.root().child(0).unwrap()
    }

    #[test]
    fn test_kind_and_text() {
        let tree = ScriptTree::parse("aws s3 ls\n").unwrap();
        let command = first_command(&tree);
        assert!(Matcher::Kind("command").matches(command, tree.text()));
        assert!(!Matcher::Kind("pipeline").matches(command, tree.text()));
        assert!(Matcher::has_child(Matcher::token("word", "s3")).matches(command, tree.text()));
        assert!(!Matcher::has_child(Matcher::token("word", "s4")).matches(command, tree.text()));
    }

    #[test]
    fn test_has_child_does_not_see_grandchildren() {
        // The program name is nested inside a command_name node, so a
        // child-level token matcher on the command must not reach it.
        let tree = ScriptTree::parse("aws s3 ls\n").unwrap();
        let command = first_command(&tree);
        assert!(!Matcher::has_child(Matcher::token("word", "aws")).matches(command, tree.text()));
        assert!(
            Matcher::has_descendant(Matcher::token("word", "aws")).matches(command, tree.text())
        );
    }

    #[test]
    fn test_not_and_any_combinators() {
        let tree = ScriptTree::parse("aws s3 ls\n").unwrap();
        let command = first_command(&tree);
        let missing_pager =
            Matcher::not(Matcher::has_child(Matcher::token("word", "--no-cli-pager")));
        assert!(missing_pager.matches(command, tree.text()));

        let either = Matcher::any(vec![
            Matcher::has_child(Matcher::token("word", "ec2")),
            Matcher::has_child(Matcher::token("word", "s3")),
        ]);
        assert!(either.matches(command, tree.text()));
    }

    #[test]
    fn test_regex_pattern() {
        let tree = ScriptTree::parse("aws s3 cp s3://bucket/key .\n").unwrap();
        let command = first_command(&tree);
        let re = Regex::new("^s3://").unwrap();
        assert!(Matcher::has_child(Matcher::token_matching("word", &re))
            .matches(command, tree.text()));
    }
}
