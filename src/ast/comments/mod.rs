//! Comment nodes
//!
//! This module provides the comment kinds that can be attached to generated
//! declarations, the `Comment` capability they share, and the `CommentKind`
//! sum type used wherever a node may hold any of them.

pub mod block_comment;
pub mod comment_statement;
pub mod javadoc_comment;
pub mod line_comment;

pub use block_comment::BlockComment;
pub use comment_statement::CommentStatement;
pub use javadoc_comment::JavaDocComment;
pub use line_comment::LineComment;

use crate::ast::visitor::AstNodeVisitor;

/// A renderable comment: finalized text plus visitor acceptance
pub trait Comment {
    /// The comment body, without any target-language delimiters
    fn text(&self) -> &str;

    /// Call back into `visitor` with this node
    fn accept<R>(&self, visitor: &mut dyn AstNodeVisitor<R>) -> R;
}

/// Any comment node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommentKind {
    Line(LineComment),
    Block(BlockComment),
    JavaDoc(JavaDocComment),
}

impl Comment for CommentKind {
    fn text(&self) -> &str {
        match self {
            CommentKind::Line(comment) => comment.text(),
            CommentKind::Block(comment) => comment.text(),
            CommentKind::JavaDoc(comment) => comment.text(),
        }
    }

    fn accept<R>(&self, visitor: &mut dyn AstNodeVisitor<R>) -> R {
        match self {
            CommentKind::Line(comment) => visitor.visit_line_comment(comment),
            CommentKind::Block(comment) => visitor.visit_block_comment(comment),
            CommentKind::JavaDoc(comment) => visitor.visit_javadoc_comment(comment),
        }
    }
}

impl From<LineComment> for CommentKind {
    fn from(comment: LineComment) -> Self {
        CommentKind::Line(comment)
    }
}

impl From<BlockComment> for CommentKind {
    fn from(comment: BlockComment) -> Self {
        CommentKind::Block(comment)
    }
}

impl From<JavaDocComment> for CommentKind {
    fn from(comment: JavaDocComment) -> Self {
        CommentKind::JavaDoc(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records which visit method was reached
    struct KindRecorder;

    impl AstNodeVisitor<&'static str> for KindRecorder {
        fn visit_line_comment(&mut self, _comment: &LineComment) -> &'static str {
            "line"
        }

        fn visit_block_comment(&mut self, _comment: &BlockComment) -> &'static str {
            "block"
        }

        fn visit_javadoc_comment(&mut self, _comment: &JavaDocComment) -> &'static str {
            "javadoc"
        }

        fn visit_comment_statement(&mut self, _statement: &CommentStatement) -> &'static str {
            "statement"
        }
    }

    #[test]
    fn test_comment_kind_dispatches_to_concrete_visit() {
        let kinds: Vec<CommentKind> = vec![
            LineComment::with_comment("a").into(),
            BlockComment::with_comment("b").into(),
            JavaDocComment::builder().add_comment("c").build().into(),
        ];

        let visited: Vec<_> = kinds
            .iter()
            .map(|k| k.accept::<&'static str>(&mut KindRecorder))
            .collect();
        assert_eq!(visited, vec!["line", "block", "javadoc"]);
    }

    #[test]
    fn test_comment_kind_text() {
        let kind = CommentKind::from(JavaDocComment::builder().add_paragraph("Hello").build());
        assert_eq!(kind.text(), "<p> Hello");
    }
}
