//! Common test utilities for Skillport integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use walkdir::WalkDir;

/// A package directory and a fake home directory in one temp dir
#[allow(dead_code)]
pub struct TestPackage {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Package root (what `--source` points at)
    pub source: PathBuf,
    /// Value of `HOME` for the spawned binary
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestPackage {
    /// Create an empty package and home directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("package");
        let home = temp.path().join("home");
        std::fs::create_dir_all(&source).expect("Failed to create package directory");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        Self { temp, source, home }
    }

    /// Package with two plugins, one empty plugin and a manifest
    pub fn with_plugins() -> Self {
        let package = Self::new();
        package.write_file(
            "plugins/market-pulse/.claude-plugin/plugin.json",
            r#"{"name": "market-pulse", "version": "1.2.0", "description": "Daily market briefing"}"#,
        );
        package.write_file("plugins/market-pulse/skills/briefing/SKILL.md", "# Briefing\n");
        package.write_file(
            "plugins/market-pulse/skills/briefing/scripts/fetch.py",
            "print('fetch')\n",
        );
        package.write_bytes(
            "plugins/market-pulse/skills/briefing/assets/logo.bin",
            &[0, 1, 2, 254, 255],
        );
        package.write_file("plugins/market-pulse/agents/analyst.md", "# Analyst\n");
        package.write_file("plugins/market-pulse/agents/README.txt", "not an agent\n");
        package.write_file("plugins/market-pulse/commands/pulse/run.md", "# Run\n");
        package.write_file("plugins/jd-analyzer/skills/jd-review/SKILL.md", "# JD\n");
        package.create_dir("plugins/empty-plugin/skills");
        package
    }

    /// Flat package with skills, agents and commands at the root
    pub fn flat() -> Self {
        let package = Self::new();
        package.write_file("skills/summarize/SKILL.md", "# Summarize\n");
        package.write_file("agents/reviewer.md", "# Reviewer\n");
        package.write_file("agents/planner/AGENT.md", "# Planner\n");
        package.write_file("commands/commit.md", "# Commit\n");
        package
    }

    /// Write a file in the package
    pub fn write_file(&self, path: &str, content: &str) {
        self.write_bytes(path, content.as_bytes());
    }

    pub fn write_bytes(&self, path: &str, content: &[u8]) {
        let file_path = self.source.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, path: &str) {
        std::fs::create_dir_all(self.source.join(path)).expect("Failed to create directory");
    }

    /// Default destination root (`$HOME/.claude`)
    pub fn claude_dir(&self) -> PathBuf {
        self.home.join(".claude")
    }

    /// Write a file below the destination root
    pub fn write_installed(&self, path: &str, content: &str) {
        let file_path = self.claude_dir().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Check if a path exists below the destination root
    pub fn installed(&self, path: &str) -> bool {
        self.claude_dir().join(path).exists()
    }

    /// Read a file below the destination root
    pub fn read_installed(&self, path: &str) -> String {
        std::fs::read_to_string(self.claude_dir().join(path)).expect("Failed to read file")
    }

    /// Command for the real binary, run from the package root with a fake home
    pub fn cmd(&self) -> Command {
        let mut cmd = skillport_cmd();
        cmd.current_dir(&self.source);
        cmd.env("HOME", &self.home);
        cmd
    }
}

impl Default for TestPackage {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the real binary with developer overrides removed
#[allow(deprecated, dead_code)]
pub fn skillport_cmd() -> Command {
    let mut cmd = Command::cargo_bin("skillport").expect("Failed to find skillport binary");
    cmd.env_remove("SKILLPORT_SOURCE");
    cmd.env_remove("SKILLPORT_DEST");
    cmd
}

/// Relative paths and file contents of every entry below `root`
#[allow(dead_code)]
pub fn tree_snapshot(root: &Path) -> Vec<(PathBuf, Option<Vec<u8>>)> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_path_buf();
            let contents = entry
                .file_type()
                .is_file()
                .then(|| std::fs::read(entry.path()).expect("Failed to read file"));
            (relative, contents)
        })
        .collect()
}

/// Assert that two directory trees are identical, byte for byte
#[allow(dead_code)]
pub fn assert_trees_equal(expected: &Path, actual: &Path) {
    assert_eq!(
        tree_snapshot(expected),
        tree_snapshot(actual),
        "{} and {} differ",
        expected.display(),
        actual.display()
    );
}
