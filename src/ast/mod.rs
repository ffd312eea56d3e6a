//! Abstract Syntax Tree (AST) module
//!
//! Comment nodes of the generator's AST. The module is organized into
//! sub-modules by functionality:
//!
//! - `builders/`: Incremental builders that finalize into immutable nodes
//! - `comments/`: Comment node kinds and the `Comment` capability
//! - `visitor`: Double-dispatch visitor over comment nodes

pub mod builders;
pub mod comments;
pub mod visitor;

// Re-export the main types for public API
pub use builders::JavaDocCommentBuilder;
pub use comments::{
    BlockComment, Comment, CommentKind, CommentStatement, JavaDocComment, LineComment,
};
pub use visitor::AstNodeVisitor;
