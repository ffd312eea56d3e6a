//! JavaDoc comment node
//!
//! A `JavaDocComment` is the finalized product of a `JavaDocCommentBuilder`:
//! one newline-joined body that the writer wraps in `/** ... */` when the
//! owning declaration is emitted.

use crate::ast::builders::JavaDocCommentBuilder;
use crate::ast::comments::Comment;
use crate::ast::visitor::AstNodeVisitor;

/// Immutable, fully assembled documentation comment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JavaDocComment {
    text: String,
}

impl JavaDocComment {
    /// Start a fresh builder with no throws clause and no deprecation notice
    pub fn builder() -> JavaDocCommentBuilder {
        JavaDocCommentBuilder::new()
    }

    /// Wrap already-joined text. Only the builder finalizes comments.
    pub(crate) fn from_text(text: String) -> Self {
        Self { text }
    }

    /// Whether the comment has no content at all
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the rendered lines of the comment body
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

impl Comment for JavaDocComment {
    fn text(&self) -> &str {
        &self.text
    }

    fn accept<R>(&self, visitor: &mut dyn AstNodeVisitor<R>) -> R {
        visitor.visit_javadoc_comment(self)
    }
}
