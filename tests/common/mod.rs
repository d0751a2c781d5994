#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use rb_rank::config::RankingConfig;
use tempfile::{TempDir, tempdir};

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}

/// Header line with the identifier columns followed by every default stat.
pub fn stats_header() -> String {
    let config = RankingConfig::default();
    let mut columns = vec![config.name_column.clone(), config.team_column.clone()];
    columns.extend(config.stats.iter().map(|stat| stat.name.clone()));
    columns.join(",")
}

/// A row where every stat reflects the same `quality`: regular stats take the
/// value itself and lower-is-better stats take `100 - quality`.
pub fn uniform_row(name: &str, team: &str, quality: f64) -> String {
    let config = RankingConfig::default();
    let mut cells = vec![name.to_string(), team.to_string()];
    cells.extend(config.stats.iter().map(|stat| {
        if stat.lower_is_better {
            (100.0 - quality).to_string()
        } else {
            quality.to_string()
        }
    }));
    cells.join(",")
}

/// A row whose stat cells all hold `cell` verbatim.
pub fn filled_row(name: &str, team: &str, cell: &str) -> String {
    let config = RankingConfig::default();
    let mut cells = vec![name.to_string(), team.to_string()];
    cells.extend(config.stats.iter().map(|_| cell.to_string()));
    cells.join(",")
}

pub fn stats_csv(rows: &[String]) -> String {
    let mut text = stats_header();
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

/// Three players that strictly dominate one another.
pub fn three_player_csv() -> String {
    stats_csv(&[
        uniform_row("Mid", "KC", 50.0),
        uniform_row("Backup", "NYJ", 10.0),
        uniform_row("Star", "SF", 90.0),
    ])
}
