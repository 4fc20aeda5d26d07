//! Image rendering through the Graphviz `dot` executable.

use crate::utils::error::{AnalysisError, Result};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    program: String,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new("dot")
    }
}

impl GraphvizRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Pipe `source` into `dot -T<format>` and return the produced image.
    pub fn render(&self, source: &str, format: &str) -> Result<Vec<u8>> {
        tracing::debug!("Running {} -T{}", self.program, format);

        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", format))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| AnalysisError::RenderError {
                message: format!("cannot start '{}': {}", self.program, e),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // The program may exit before reading everything; its status and
            // stderr below say why.
            match stdin.write_all(source.as_bytes()) {
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    tracing::debug!("{} closed its input early", self.program);
                }
                other => other?,
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(AnalysisError::RenderError {
                message: format!(
                    "'{}' exited with {}: {}",
                    self.program,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }
        Ok(output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_render_error() {
        let renderer = GraphvizRenderer::new("odl-cfg-analysis-no-such-dot");
        let err = renderer.render("digraph {}", "png").unwrap_err();
        assert!(matches!(err, AnalysisError::RenderError { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_program_exiting_before_reading_is_render_error() {
        let source = format!("digraph {{\n{}}}\n", "\"n\";\n".repeat(100_000));
        let err = GraphvizRenderer::new("false").render(&source, "png").unwrap_err();
        assert!(matches!(err, AnalysisError::RenderError { ref message } if message.contains("exited with")));
    }
}
