//! Source emission for comment nodes

pub mod java_writer;

pub use java_writer::{JavaWriterVisitor, WriterOptions};
