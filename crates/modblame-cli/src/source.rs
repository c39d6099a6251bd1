//! Where the edge list comes from.
//!
//! By default modblame runs `go mod graph` in the working directory and
//! streams its stdout straight into the parser. `--input FILE` reads a saved
//! edge list instead, and `--input -` reads stdin.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use modblame_graph::{Graph, read_edges};
use tracing::debug;

use crate::config::ModblameConfig;
use crate::error::{CliError, Result, ResultExt, SourceError};

/// A producer of `<module> <dependency>` edges.
pub trait EdgeSource {
    /// Human-readable origin, used in log messages.
    fn describe(&self) -> String;

    /// Read every edge into a new graph.
    fn read_graph(&mut self) -> Result<Graph<String>>;
}

/// Runs `<go> mod graph` and parses its output.
#[derive(Debug, Clone)]
pub struct GoModGraph {
    program: PathBuf,
    dir: Option<PathBuf>,
}

impl GoModGraph {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            dir: None,
        }
    }

    /// Run in `dir` instead of the current working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    fn spawn_error(&self, err: io::Error) -> SourceError {
        if err.kind() == io::ErrorKind::NotFound {
            SourceError::NotFound {
                program: self.program.clone(),
            }
        } else {
            SourceError::Spawn {
                program: self.program.clone(),
                source: err,
            }
        }
    }
}

impl EdgeSource for GoModGraph {
    fn describe(&self) -> String {
        format!("`{} mod graph`", self.program.display())
    }

    fn read_graph(&mut self) -> Result<Graph<String>> {
        let mut command = Command::new(&self.program);
        command
            .args(["mod", "graph"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.dir {
            command.current_dir(dir);
        }

        debug!(program = %self.program.display(), "spawning go mod graph");
        let mut child = command.spawn().map_err(|e| self.spawn_error(e))?;

        let (Some(stdout), Some(mut stderr)) = (child.stdout.take(), child.stderr.take()) else {
            return Err(self
                .spawn_error(io::Error::other("child pipes were not captured"))
                .into());
        };

        // Drained on its own thread so a chatty stderr can't block stdout.
        let stderr_reader = thread::spawn(move || {
            let mut captured = String::new();
            let _ = stderr.read_to_string(&mut captured);
            captured
        });

        let parsed = read_edges(BufReader::new(stdout));
        if parsed.is_err() {
            let _ = child.kill();
        }

        let status = child.wait().map_err(|e| self.spawn_error(e))?;
        let captured = stderr_reader.join().unwrap_or_default();

        let graph = parsed?;
        if !status.success() {
            return Err(SourceError::Failed {
                program: self.program.clone(),
                status,
                stderr: captured.trim().to_string(),
            }
            .into());
        }
        Ok(graph)
    }
}

/// Reads a saved edge list from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EdgeSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_graph(&mut self) -> Result<Graph<String>> {
        let file = File::open(&self.path).with_path(&self.path)?;
        read_edges(BufReader::new(file)).map_err(|e| match e {
            modblame_graph::IngestError::Io(io_err) => CliError::Custom(format!(
                "reading {}: {}",
                self.path.display(),
                io_err
            )),
            other => other.into(),
        })
    }
}

/// Reads an edge list piped to stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl EdgeSource for StdinSource {
    fn describe(&self) -> String {
        "stdin".to_string()
    }

    fn read_graph(&mut self) -> Result<Graph<String>> {
        Ok(read_edges(io::stdin().lock())?)
    }
}

/// Pick the edge source the configuration asks for.
pub fn from_config(config: &ModblameConfig) -> Box<dyn EdgeSource> {
    if config.reads_stdin() {
        return Box::new(StdinSource);
    }
    match &config.input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(GoModGraph::new(&config.go)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_source_reads_edges() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("graph.txt");
        fs::write(&path, "app lib@v1\nlib@v1 util@v2\n").unwrap();

        let mut source = FileSource::new(&path);
        let graph = source.read_graph().unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(source.path(), path.as_path());
    }

    #[test]
    fn test_file_source_missing_file() {
        let mut source = FileSource::new("/nonexistent/graph.txt");
        let err = source.read_graph().unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_file_source_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("graph.txt");
        fs::write(&path, "app lib\nbroken\n").unwrap();

        let err = FileSource::new(&path).read_graph().unwrap_err();
        assert!(matches!(err, CliError::Ingest(_)));
    }

    #[test]
    fn test_go_mod_graph_missing_executable() {
        let mut source = GoModGraph::new("/nonexistent/bin/go-for-modblame-tests");
        let err = source.read_graph().unwrap_err();
        assert!(matches!(
            err,
            CliError::Source(SourceError::NotFound { .. })
        ));
    }

    /// `sh mod graph` runs the script saved as `mod` with `graph` as `$1`,
    /// which stands in for the go tool without needing an executable file.
    #[cfg(unix)]
    fn fake_go(script: &str) -> (TempDir, GoModGraph) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("mod"), script).unwrap();
        let source = GoModGraph::new("sh").in_dir(temp.path());
        (temp, source)
    }

    #[cfg(unix)]
    #[test]
    fn test_go_mod_graph_reads_child_stdout() {
        let (_temp, mut source) = fake_go(
            "[ \"$1\" = graph ] || exit 9\necho 'app lib@v1'\necho 'lib@v1 util@v2'\n",
        );

        let graph = source.read_graph().unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_go_mod_graph_nonzero_exit() {
        let (_temp, mut source) = fake_go("echo 'go: go.mod file not found' >&2\nexit 1\n");

        let err = source.read_graph().unwrap_err();
        match err {
            CliError::Source(SourceError::Failed { stderr, status, .. }) => {
                assert_eq!(stderr, "go: go.mod file not found");
                assert!(!status.success());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_go_mod_graph_malformed_output() {
        let (_temp, mut source) = fake_go("echo 'app lib@v1'\necho 'garbage'\n");

        let err = source.read_graph().unwrap_err();
        assert!(matches!(err, CliError::Ingest(_)));
    }

    #[test]
    fn test_from_config_picks_source() {
        let stdin = ModblameConfig {
            input: Some(PathBuf::from("-")),
            ..ModblameConfig::default()
        };
        assert_eq!(from_config(&stdin).describe(), "stdin");

        let file = ModblameConfig {
            input: Some(PathBuf::from("graph.txt")),
            ..ModblameConfig::default()
        };
        assert_eq!(from_config(&file).describe(), "graph.txt");

        let go = ModblameConfig::default();
        assert_eq!(from_config(&go).describe(), "`go mod graph`");
    }
}
