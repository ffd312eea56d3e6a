//! JSON comment requests
//!
//! A request lists builder calls as data so comments can be generated outside
//! of Rust code (the `render` subcommand reads one from disk). Body fragments
//! are replayed in document order; tag clauses end up last as usual.

use serde::{Deserialize, Serialize};

use crate::ast::builders::JavaDocCommentBuilder;
use crate::ast::comments::JavaDocComment;
use crate::error::Result;

/// One body fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fragment {
    Comment(String),
    Paragraph(String),
    SampleCode(String),
    OrderedList(Vec<String>),
    UnorderedList(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThrowsRequest {
    #[serde(rename = "type")]
    pub exception_type: String,
    #[serde(default)]
    pub description: String,
}

/// Description of a whole JavaDoc comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommentRequest {
    pub body: Vec<Fragment>,
    pub params: Vec<ParamRequest>,
    pub throws: Option<ThrowsRequest>,
    pub deprecated: Option<String>,
}

impl CommentRequest {
    /// Parse a request from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replay the request into a fresh builder
    pub fn into_builder(self) -> JavaDocCommentBuilder {
        let mut builder = JavaDocComment::builder();
        for fragment in self.body {
            builder = match fragment {
                Fragment::Comment(line) => builder.add_comment(line),
                Fragment::Paragraph(text) => builder.add_paragraph(text),
                Fragment::SampleCode(code) => builder.add_sample_code(code),
                Fragment::OrderedList(items) => builder.add_ordered_list(items),
                Fragment::UnorderedList(items) => builder.add_unordered_list(items),
            };
        }
        for param in self.params {
            builder = builder.add_param(param.name, param.description);
        }
        if let Some(throws) = self.throws {
            builder = builder.set_throws(throws.exception_type, throws.description);
        }
        if let Some(deprecated) = self.deprecated {
            builder = builder.set_deprecated(deprecated);
        }
        builder
    }

    pub fn build(self) -> JavaDocComment {
        self.into_builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::comments::Comment;
    use crate::error::Error;

    #[test]
    fn test_full_request() {
        let json = r#"{
            "body": [
                {"paragraph": "Lists the topics."},
                {"unordered_list": ["one", "two"]},
                {"sample_code": "a();\nb();"}
            ],
            "params": [{"name": "project", "description": "the project id"}],
            "throws": {"type": "ApiException", "description": "if the call fails"},
            "deprecated": "use listTopicsAsync"
        }"#;

        let comment = CommentRequest::from_json(json).unwrap().build();
        assert_eq!(
            comment.text(),
            "<p> Lists the topics.\n<ul>\n<li> one\n<li> two\n</ul>\n<pre><code>\na();\nb();\n</code></pre>\n@param project the project id\n@throws ApiException if the call fails\n@deprecated use listTopicsAsync"
        );
    }

    #[test]
    fn test_empty_request_builds_empty_comment() {
        let comment = CommentRequest::from_json("{}").unwrap().build();
        assert_eq!(comment.text(), "");
    }

    #[test]
    fn test_throws_description_defaults_to_empty() {
        let comment = CommentRequest::from_json(r#"{"throws": {"type": "E"}}"#)
            .unwrap()
            .build();
        assert_eq!(comment.text(), "@throws E ");
    }

    #[test]
    fn test_unknown_fragment_is_rejected() {
        let err = CommentRequest::from_json(r#"{"body": [{"table": "x"}]}"#).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = CommentRequest::from_json(r#"{"see": "Other"}"#).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }
}
