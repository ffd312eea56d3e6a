//! Visitor trait for comment nodes
//!
//! Nodes call back into the visitor with themselves (`accept`), so a visitor
//! recognizes the concrete node kind without the node knowing how it is
//! rendered.

use crate::ast::comments::{BlockComment, CommentStatement, JavaDocComment, LineComment};

/// Double-dispatch target for every comment node kind, generic over the
/// value each visit produces.
pub trait AstNodeVisitor<R> {
    fn visit_line_comment(&mut self, comment: &LineComment) -> R;

    fn visit_block_comment(&mut self, comment: &BlockComment) -> R;

    fn visit_javadoc_comment(&mut self, comment: &JavaDocComment) -> R;

    fn visit_comment_statement(&mut self, statement: &CommentStatement) -> R;
}
