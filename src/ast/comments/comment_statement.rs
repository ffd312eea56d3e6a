//! Comment statement
//!
//! Groups the comments written in front of a declaration, in insertion order.

use crate::ast::comments::CommentKind;
use crate::ast::visitor::AstNodeVisitor;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CommentStatement {
    comments: Vec<CommentKind>,
}

impl CommentStatement {
    pub fn new(comments: Vec<CommentKind>) -> Self {
        Self { comments }
    }

    /// Statement holding a single comment
    pub fn with_comment(comment: impl Into<CommentKind>) -> Self {
        Self {
            comments: vec![comment.into()],
        }
    }

    pub fn push(&mut self, comment: impl Into<CommentKind>) {
        self.comments.push(comment.into());
    }

    pub fn comments(&self) -> &[CommentKind] {
        &self.comments
    }

    pub fn accept<R>(&self, visitor: &mut dyn AstNodeVisitor<R>) -> R {
        visitor.visit_comment_statement(self)
    }
}
