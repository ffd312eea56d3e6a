//! AST construction utilities
//!
//! This module provides builders that accumulate fragments and finalize them
//! into immutable comment nodes.

pub mod javadoc_builder;

pub use javadoc_builder::JavaDocCommentBuilder;
