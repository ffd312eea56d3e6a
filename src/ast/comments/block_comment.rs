use crate::ast::comments::Comment;
use crate::ast::visitor::AstNodeVisitor;

/// Block comment, written as `/* ... */`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockComment {
    text: String,
}

impl BlockComment {
    pub fn with_comment(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// True if the body spans more than one line
    pub fn is_multiline(&self) -> bool {
        self.text.contains('\n')
    }
}

impl Comment for BlockComment {
    fn text(&self) -> &str {
        &self.text
    }

    fn accept<R>(&self, visitor: &mut dyn AstNodeVisitor<R>) -> R {
        visitor.visit_block_comment(self)
    }
}
