//! SVG to component transform and module compilation.
//!
//! Both stages are pluggable. The stock implementations shell out to a
//! configured command that reads its input on stdin and writes the result
//! on stdout.

use std::{path::Path, process::Stdio};

use async_trait::async_trait;
use iconforge_manifest::{CompileConfig, TransformConfig};
use tokio::{io::AsyncWriteExt, process::Command};
use tracing::debug;

use crate::TransformError;

/// Environment variable carrying the path of the file being processed.
const FILE_ENV: &str = "ICON_FORGE_FILE";
/// Environment variable carrying the transform options as JSON.
const OPTIONS_ENV: &str = "ICON_FORGE_OPTIONS";

/// Turns SVG markup into component source.
#[async_trait]
pub trait VectorTransform: Send + Sync {
    async fn transform(&self, svg: &str, path: &Path) -> Result<String, TransformError>;
}

/// Turns component source into a module the host can consume.
#[async_trait]
pub trait ModuleCompiler: Send + Sync {
    async fn compile(&self, source: &str, id: &str) -> Result<CompiledModule, TransformError>;
}

/// Compiled module code with an optional source map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledModule {
    pub code: String,
    pub map: Option<String>,
}

/// Used when no transform command is configured; every load fails.
#[derive(Debug, Default)]
pub struct UnconfiguredTransform;

#[async_trait]
impl VectorTransform for UnconfiguredTransform {
    async fn transform(&self, _svg: &str, _path: &Path) -> Result<String, TransformError> {
        Err(TransformError::NotConfigured { stage: "transform" })
    }
}

/// Hands component source through untouched.
#[derive(Debug, Default)]
pub struct Passthrough;

#[async_trait]
impl ModuleCompiler for Passthrough {
    async fn compile(&self, source: &str, _id: &str) -> Result<CompiledModule, TransformError> {
        Ok(CompiledModule {
            code: source.to_string(),
            map: None,
        })
    }
}

/// Runs an external program as the vector transform.
#[derive(Debug, Clone)]
pub struct CommandTransform {
    argv: Vec<String>,
    options: String,
}

impl CommandTransform {
    pub fn new(argv: Vec<String>, options: serde_json::Value) -> Self {
        Self {
            argv,
            options: options.to_string(),
        }
    }

    /// Build from `[transform]`, if a command is set.
    pub fn from_config(config: &TransformConfig) -> Option<Self> {
        let argv = config.command.clone().filter(|argv| !argv.is_empty())?;
        Some(Self::new(argv, config.options_json()))
    }
}

#[async_trait]
impl VectorTransform for CommandTransform {
    async fn transform(&self, svg: &str, path: &Path) -> Result<String, TransformError> {
        let file = path.display().to_string();
        run_command(
            &self.argv,
            svg,
            &[(FILE_ENV, file.as_str()), (OPTIONS_ENV, self.options.as_str())],
        )
        .await
    }
}

/// Runs an external program as the module compiler.
#[derive(Debug, Clone)]
pub struct CommandCompiler {
    argv: Vec<String>,
}

impl CommandCompiler {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }

    /// Build from `[compile]`, if a command is set.
    pub fn from_config(config: &CompileConfig) -> Option<Self> {
        let argv = config.command.clone().filter(|argv| !argv.is_empty())?;
        Some(Self::new(argv))
    }
}

#[async_trait]
impl ModuleCompiler for CommandCompiler {
    async fn compile(&self, source: &str, id: &str) -> Result<CompiledModule, TransformError> {
        let code = run_command(&self.argv, source, &[(FILE_ENV, id)]).await?;
        Ok(CompiledModule { code, map: None })
    }
}

async fn run_command(
    argv: &[String],
    input: &str,
    envs: &[(&str, &str)],
) -> Result<String, TransformError> {
    let Some((program, args)) = argv.split_first() else {
        return Err(TransformError::Other("empty command".to_string()));
    };
    debug!(program = %program, "running external command");

    let mut child = Command::new(program)
        .args(args)
        .envs(envs.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| TransformError::Spawn {
            program: program.clone(),
            source,
        })?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| TransformError::Other(format!("no stdin for '{}'", program)))?;
    let input = input.as_bytes().to_vec();
    let feed = async move {
        let result = stdin.write_all(&input).await;
        drop(stdin);
        result
    };

    let (fed, output) = tokio::join!(feed, child.wait_with_output());
    let output = output.map_err(|source| TransformError::Spawn {
        program: program.clone(),
        source,
    })?;

    if !output.status.success() {
        return Err(TransformError::Failed {
            program: program.clone(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    // A program may exit successfully without draining stdin
    if let Err(e) = fed
        && e.kind() != std::io::ErrorKind::BrokenPipe
    {
        return Err(TransformError::Spawn {
            program: program.clone(),
            source: e,
        });
    }

    String::from_utf8(output.stdout).map_err(|_| TransformError::InvalidOutput {
        program: program.clone(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_unconfigured_transform_fails() {
        let err = UnconfiguredTransform
            .transform("<svg/>", Path::new("/icons/heart.svg"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransformError::NotConfigured { stage: "transform" }));
    }

    #[tokio::test]
    async fn test_passthrough_keeps_source() {
        let module = Passthrough.compile("export default 1;", "heart.svg").await.unwrap();
        assert_eq!(module.code, "export default 1;");
        assert_eq!(module.map, None);
    }

    #[test]
    fn test_from_config_requires_command() {
        assert!(CommandTransform::from_config(&TransformConfig::default()).is_none());
        assert!(
            CommandCompiler::from_config(&CompileConfig {
                command: Some(vec![])
            })
            .is_none()
        );
        assert!(
            CommandCompiler::from_config(&CompileConfig {
                command: Some(vec!["esbuild".to_string()])
            })
            .is_some()
        );
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let transform = CommandTransform::new(
            vec!["icon-forge-test-no-such-program".to_string()],
            json!({}),
        );
        let err = transform
            .transform("<svg/>", Path::new("heart.svg"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransformError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_transform_pipes_stdin_to_stdout() {
        let transform = CommandTransform::new(vec!["cat".to_string()], json!({}));
        let out = transform
            .transform("<svg></svg>", Path::new("heart.svg"))
            .await
            .unwrap();
        assert_eq!(out, "<svg></svg>");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_transform_receives_environment() {
        let transform = CommandTransform::new(
            vec![
                "sh".to_string(),
                "-c".to_string(),
                "printf '%s|%s' \"$ICON_FORGE_FILE\" \"$ICON_FORGE_OPTIONS\"".to_string(),
            ],
            json!({ "icon": true }),
        );
        let out = transform
            .transform("<svg/>", Path::new("/icons/heart.svg"))
            .await
            .unwrap();
        assert_eq!(out, r#"/icons/heart.svg|{"icon":true}"#);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_command_reports_stderr() {
        let compiler = CommandCompiler::new(vec![
            "sh".to_string(),
            "-c".to_string(),
            "echo boom >&2; exit 3".to_string(),
        ]);
        let err = compiler.compile("x", "heart.svg").await.unwrap_err();
        match err {
            TransformError::Failed { stderr, status, .. } => {
                assert_eq!(stderr, "boom");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
