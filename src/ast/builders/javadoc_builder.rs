//! JavaDoc comment builder
//!
//! Collects description fragments and tag clauses in any call order and
//! finalizes them into a `JavaDocComment`. Body fragments keep their call
//! order; `@param`, `@throws` and `@deprecated` always come last, in that
//! order.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::comments::JavaDocComment;

const PARAGRAPH_PREFIX: &str = "<p> ";
const LIST_ITEM_PREFIX: &str = "<li> ";
const SAMPLE_CODE_OPEN: &str = "<pre><code>";
const SAMPLE_CODE_CLOSE: &str = "</code></pre>";
const ORDERED_LIST_OPEN: &str = "<ol>";
const ORDERED_LIST_CLOSE: &str = "</ol>";
const UNORDERED_LIST_OPEN: &str = "<ul>";
const UNORDERED_LIST_CLOSE: &str = "</ul>";

/// Line breaks in sample code, bare or carriage-return-prefixed
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n").unwrap());

/// Exception clause rendered as `@throws <type> <description>`
#[derive(Debug, Clone, PartialEq, Eq)]
struct ThrowsClause {
    exception_type: String,
    description: String,
}

/// Accumulates fragments for a single JavaDoc comment.
///
/// Every method takes the builder by value so calls chain; `build` consumes
/// it. Clone the builder to finalize the same state more than once.
#[derive(Debug, Clone, Default)]
pub struct JavaDocCommentBuilder {
    body_lines: Vec<String>,
    param_lines: Vec<String>,
    throws: Option<ThrowsClause>,
    deprecated: Option<String>,
}

impl JavaDocCommentBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw description line
    pub fn add_comment(mut self, comment: impl Into<String>) -> Self {
        self.body_lines.push(comment.into());
        self
    }

    /// Append a paragraph, rendered as `<p> <text>`
    pub fn add_paragraph(mut self, paragraph: impl AsRef<str>) -> Self {
        self.body_lines
            .push(format!("{}{}", PARAGRAPH_PREFIX, paragraph.as_ref()));
        self
    }

    /// Append a `<pre><code>` block holding every line of `sample_code`
    pub fn add_sample_code(mut self, sample_code: impl AsRef<str>) -> Self {
        self.body_lines.push(SAMPLE_CODE_OPEN.to_string());
        self.body_lines.extend(
            LINE_BREAK
                .split(sample_code.as_ref())
                .map(str::to_string),
        );
        self.body_lines.push(SAMPLE_CODE_CLOSE.to_string());
        self
    }

    /// Append an `<ol>` list with one `<li>` line per item
    pub fn add_ordered_list<I>(self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.add_list(ORDERED_LIST_OPEN, items, ORDERED_LIST_CLOSE)
    }

    /// Append a `<ul>` list with one `<li>` line per item
    pub fn add_unordered_list<I>(self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.add_list(UNORDERED_LIST_OPEN, items, UNORDERED_LIST_CLOSE)
    }

    fn add_list<I>(mut self, open: &str, items: I, close: &str) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.body_lines.push(open.to_string());
        for item in items {
            self.body_lines
                .push(format!("{}{}", LIST_ITEM_PREFIX, item.as_ref()));
        }
        self.body_lines.push(close.to_string());
        self
    }

    /// Document a parameter as `@param <name> <description>`
    pub fn add_param(mut self, name: impl AsRef<str>, description: impl AsRef<str>) -> Self {
        self.param_lines.push(format!(
            "@param {} {}",
            name.as_ref(),
            description.as_ref()
        ));
        self
    }

    /// Set the exception clause. Only one is kept: a later call replaces an
    /// earlier one, and an empty type clears it.
    pub fn set_throws(
        mut self,
        exception_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let exception_type = exception_type.into();
        if let Some(previous) = &self.throws {
            log::debug!(
                "Replacing @throws {} with @throws {}",
                previous.exception_type,
                exception_type
            );
        }
        self.throws = if exception_type.is_empty() {
            None
        } else {
            Some(ThrowsClause {
                exception_type,
                description: description.into(),
            })
        };
        self
    }

    /// Set the deprecation notice. An empty notice clears it.
    pub fn set_deprecated(mut self, deprecated: impl Into<String>) -> Self {
        let deprecated = deprecated.into();
        self.deprecated = if deprecated.is_empty() {
            None
        } else {
            Some(deprecated)
        };
        self
    }

    /// Finalize into an immutable comment
    pub fn build(self) -> JavaDocComment {
        log::debug!(
            "Building JavaDoc: {} body lines, {} params, throws: {}, deprecated: {}",
            self.body_lines.len(),
            self.param_lines.len(),
            self.throws.is_some(),
            self.deprecated.is_some()
        );

        let mut lines = self.body_lines;
        lines.extend(self.param_lines);
        if let Some(throws) = self.throws {
            lines.push(format!(
                "@throws {} {}",
                throws.exception_type, throws.description
            ));
        }
        if let Some(deprecated) = self.deprecated {
            lines.push(format!("@deprecated {}", deprecated));
        }

        JavaDocComment::from_text(lines.join("\n"))
    }
}
