//! Shell syntax-tree capability: parsing, structural queries, and
//! node-scoped text edits.
//!
//! A [`ScriptTree`] is a value produced fresh from text. Byte offsets become
//! stale after any committed edit batch, so callers re-parse the new text
//! instead of retaining a tree handle across a mutation.

mod edit;
mod matcher;
mod query;

pub use edit::Edit;
pub use matcher::{Matcher, TextPattern};
pub use query::{find_all, follows, matching_children};

use anyhow::{anyhow, Context, Result};
use tree_sitter::{Node, Parser, Tree};

/// A parsed shell script together with the source text it was parsed from.
pub struct ScriptTree {
    source: String,
    tree: Tree,
}

impl ScriptTree {
    /// Parses `source` as a bash/POSIX shell script.
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_bash::LANGUAGE.into())
            .context("failed to load the bash grammar")?;
        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| anyhow!("bash parser produced no tree"))?;
        Ok(Self { source, tree })
    }

    /// The full document text this tree was parsed from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.source
    }

    /// Root node of the parse tree.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Exact source slice covered by `node`.
    #[must_use]
    pub fn node_text(&self, node: Node<'_>) -> &str {
        &self.source[node.byte_range()]
    }

    /// 0-based `(start_line, end_line)` span of `node`.
    #[must_use]
    pub fn line_range(&self, node: Node<'_>) -> (usize, usize) {
        (node.start_position().row, node.end_position().row)
    }

    /// Builds the edit that replaces `node`'s whole span with `new_text`.
    #[must_use]
    pub fn replace(&self, node: Node<'_>, new_text: impl Into<String>) -> Edit {
        Edit {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            new_text: new_text.into(),
        }
    }

    /// Applies a batch of edits produced from this (unmodified) tree and
    /// returns the new full document text. The result does not depend on the
    /// relative order of non-overlapping edits.
    #[must_use]
    pub fn commit_edits(&self, edits: &[Edit]) -> String {
        edit::splice(&self.source, edits)
    }
}
