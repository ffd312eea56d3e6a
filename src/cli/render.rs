use crate::ast::comments::Comment;
use crate::codegen::{JavaWriterVisitor, WriterOptions};
use crate::error::{Error, Result};
use crate::request::CommentRequest;
use std::fs;

/// Arguments for the render command
#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub input_path: std::path::PathBuf,
    pub output_path: Option<std::path::PathBuf>,
    pub indent: usize,
    pub no_escape: bool,
    pub raw: bool,
}

impl RenderArgs {
    /// Convert to WriterOptions
    pub fn to_options(&self) -> WriterOptions {
        WriterOptions {
            indent: self.indent,
            escape: !self.no_escape,
        }
    }
}

/// Build the comment described by `json` and render it
pub fn render_request(json: &str, args: &RenderArgs) -> Result<String> {
    if args.raw && (args.indent > 0 || args.no_escape) {
        return Err(Error::invalid_args(
            "--raw prints the bare comment body and cannot be combined with --indent or --no-escape",
        ));
    }
    let comment = CommentRequest::from_json(json)?.build();
    if args.raw {
        return Ok(comment.text().to_string());
    }
    Ok(JavaWriterVisitor::with_options(args.to_options()).write(&comment))
}

/// Run the render subcommand
pub fn render(args: &RenderArgs) -> Result<()> {
    log::info!("Reading comment request from {}", args.input_path.display());
    let json = fs::read_to_string(&args.input_path).map_err(|e| {
        Error::Io(format!(
            "Failed to read {}: {}",
            args.input_path.display(),
            e
        ))
    })?;

    let output = render_request(&json, args)?;

    match &args.output_path {
        Some(path) => {
            fs::write(path, format!("{}\n", output)).map_err(|e| {
                Error::Io(format!("Failed to write {}: {}", path.display(), e))
            })?;
            log::info!("Rendered comment written to {}", path.display());
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> RenderArgs {
        RenderArgs {
            input_path: "request.json".into(),
            output_path: None,
            indent: 0,
            no_escape: false,
            raw: false,
        }
    }

    #[test]
    fn test_render_request_wraps_comment() {
        let output = render_request(r#"{"body": [{"paragraph": "Hello"}]}"#, &args()).unwrap();
        assert_eq!(output, "/**\n * <p> Hello\n */");
    }

    #[test]
    fn test_render_request_raw() {
        let raw = RenderArgs { raw: true, ..args() };
        let output = render_request(r#"{"params": [{"name": "x", "description": "the input"}]}"#, &raw)
            .unwrap();
        assert_eq!(output, "@param x the input");
    }

    #[test]
    fn test_raw_rejects_writer_options() {
        let conflicting = RenderArgs {
            raw: true,
            indent: 2,
            ..args()
        };
        let err = render_request("{}", &conflicting).unwrap_err();
        assert!(matches!(err, Error::InvalidArgs { .. }));
    }

    #[test]
    fn test_to_options() {
        let options = RenderArgs {
            indent: 4,
            no_escape: true,
            ..args()
        }
        .to_options();
        assert_eq!(
            options,
            WriterOptions {
                indent: 4,
                escape: false
            }
        );
    }
}
