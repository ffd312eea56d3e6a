//! javadoc-ast: documentation comment nodes for a Java source generator
//!
//! This library provides the comment leaves of the generator's AST: an
//! incremental `JavaDocCommentBuilder` that finalizes into an immutable
//! `JavaDocComment`, sibling line and block comments, a visitor trait, and a
//! writer that renders comments as Java source.

pub mod ast;
pub mod cli;
pub mod codegen;
pub mod error;
pub mod request;

pub use error::{Error as CommentError, Result as CommentResult};

// Re-export commonly used types
pub use ast::{
    AstNodeVisitor, BlockComment, Comment, CommentKind, CommentStatement, JavaDocComment,
    JavaDocCommentBuilder, LineComment,
};
pub use codegen::{JavaWriterVisitor, WriterOptions};
pub use request::CommentRequest;
