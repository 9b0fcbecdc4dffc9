//! The style-sheet transform capability.
//!
//! The pipeline only needs "XML + style-sheet in, markup out". The stylesheet
//! is never interpreted here; [`XsltProc`] delegates to an external XSLT
//! processor and anything implementing [`Transformer`] can stand in for it.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Errors raised by a transform capability.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The processor program could not be started.
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The processor ran and reported failure.
    #[error("transform failed ({status}): {stderr}")]
    Failed { status: String, stderr: String },

    /// IO error while talking to the processor.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output was not valid UTF-8.
    #[error("transform output is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Applies a style-sheet to an XML document and returns the markup.
pub trait Transformer {
    fn transform(&self, xml: &str, stylesheet: &Path) -> Result<String, TransformError>;
}

impl<F> Transformer for F
where
    F: Fn(&str, &Path) -> Result<String, TransformError>,
{
    fn transform(&self, xml: &str, stylesheet: &Path) -> Result<String, TransformError> {
        self(xml, stylesheet)
    }
}

/// Runs an external XSLT processor as `<program> <stylesheet> -`, with the
/// XML on stdin and the markup read from stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XsltProc {
    program: PathBuf,
}

impl XsltProc {
    pub const DEFAULT_PROGRAM: &'static str = "xsltproc";

    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for XsltProc {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM)
    }
}

impl Transformer for XsltProc {
    fn transform(&self, xml: &str, stylesheet: &Path) -> Result<String, TransformError> {
        let mut child = Command::new(&self.program)
            .arg(stylesheet)
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| TransformError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        // Feed stdin from a separate thread so a large output cannot block us.
        let stdin = child.stdin.take();
        let input = xml.to_owned();
        let feeder = std::thread::spawn(move || match stdin {
            Some(mut stdin) => stdin.write_all(input.as_bytes()),
            None => Ok(()),
        });

        let output = child.wait_with_output()?;
        let fed = feeder
            .join()
            .unwrap_or_else(|_| Err(std::io::Error::other("stdin feeder panicked")));

        if !output.status.success() {
            return Err(TransformError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        fed?;

        Ok(String::from_utf8(output.stdout)?)
    }
}
