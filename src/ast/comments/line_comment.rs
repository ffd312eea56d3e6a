use crate::ast::comments::Comment;
use crate::ast::visitor::AstNodeVisitor;

/// Single-line comment, written as `// ...`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineComment {
    text: String,
}

impl LineComment {
    pub fn with_comment(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Comment for LineComment {
    fn text(&self) -> &str {
        &self.text
    }

    fn accept<R>(&self, visitor: &mut dyn AstNodeVisitor<R>) -> R {
        visitor.visit_line_comment(self)
    }
}
