//! Java comment writer
//!
//! Renders comment nodes into Java source syntax. Builders only produce the
//! comment body; the delimiters, line prefixes and indentation are added here.

use crate::ast::comments::{
    BlockComment, Comment, CommentStatement, JavaDocComment, LineComment,
};
use crate::ast::visitor::AstNodeVisitor;

/// Written in place of `*/` so comment text cannot close the block early
const ESCAPED_BLOCK_END: &str = "*&#47;";

/// Options controlling how comments are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    /// Spaces written before every emitted line
    pub indent: usize,
    /// Escape `*/` inside block and JavaDoc comments
    pub escape: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indent: 0,
            escape: true,
        }
    }
}

/// Visitor producing Java source text for comment nodes
#[derive(Debug, Clone, Default)]
pub struct JavaWriterVisitor {
    options: WriterOptions,
}

impl JavaWriterVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: WriterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Render any comment node
    pub fn write<C: Comment>(&mut self, comment: &C) -> String {
        comment.accept(self)
    }

    fn indent(&self) -> String {
        " ".repeat(self.options.indent)
    }

    fn escape<'t>(&self, text: &'t str) -> std::borrow::Cow<'t, str> {
        if self.options.escape && text.contains("*/") {
            text.replace("*/", ESCAPED_BLOCK_END).into()
        } else {
            text.into()
        }
    }

    /// `/*` or `/**` opener, ` * ` prefixed lines, ` */` closer
    fn write_star_block(&self, opener: &str, text: &str) -> String {
        let indent = self.indent();
        let mut out = format!("{}{}\n", indent, opener);
        for line in text.split('\n') {
            if line.is_empty() {
                out.push_str(&format!("{} *\n", indent));
            } else {
                out.push_str(&format!("{} * {}\n", indent, self.escape(line)));
            }
        }
        out.push_str(&format!("{} */", indent));
        out
    }
}

impl AstNodeVisitor<String> for JavaWriterVisitor {
    fn visit_line_comment(&mut self, comment: &LineComment) -> String {
        let indent = self.indent();
        comment
            .text()
            .split('\n')
            .map(|line| {
                if line.is_empty() {
                    format!("{}//", indent)
                } else {
                    format!("{}// {}", indent, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn visit_block_comment(&mut self, comment: &BlockComment) -> String {
        if comment.is_multiline() {
            self.write_star_block("/*", comment.text())
        } else {
            format!("{}/* {} */", self.indent(), self.escape(comment.text()))
        }
    }

    fn visit_javadoc_comment(&mut self, comment: &JavaDocComment) -> String {
        if comment.is_empty() {
            return String::new();
        }
        self.write_star_block("/**", comment.text())
    }

    fn visit_comment_statement(&mut self, statement: &CommentStatement) -> String {
        let mut out = String::new();
        for comment in statement.comments() {
            let rendered: String = comment.accept(self);
            if rendered.is_empty() {
                continue;
            }
            out.push_str(&rendered);
            out.push('\n');
        }
        out
    }
}
