use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;

/// Supplies the raw character rows of a board. `A` marks the start, `B` the goal, `#` a wall
/// and `.` plain ground; `w`, `m`, `f`, `g` and `r` are weighted terrain.
pub trait BoardSource {
    fn rows(&self) -> Result<Vec<String>>;
}

/// Splits text into rows. A trailing `\r` on each line and blank lines at the end are dropped.
fn split_rows(text: &str) -> Vec<String> {
    let mut rows = text
        .lines()
        .map(|line| line.trim_end_matches('\r').to_owned())
        .collect::<Vec<String>>();
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }
    rows
}

impl BoardSource for str {
    fn rows(&self) -> Result<Vec<String>> {
        Ok(split_rows(self))
    }
}

impl BoardSource for String {
    fn rows(&self) -> Result<Vec<String>> {
        Ok(split_rows(self))
    }
}

impl BoardSource for [String] {
    fn rows(&self) -> Result<Vec<String>> {
        Ok(self.to_vec())
    }
}

impl BoardSource for Vec<String> {
    fn rows(&self) -> Result<Vec<String>> {
        Ok(self.clone())
    }
}

/// Reads a board from a plain text file, one row per line.
#[derive(Clone, Debug)]
pub struct FileBoardSource {
    path: PathBuf,
}

impl FileBoardSource {
    pub fn new<P: AsRef<Path>>(path: P) -> FileBoardSource {
        FileBoardSource {
            path: path.as_ref().to_path_buf(),
        }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BoardSource for FileBoardSource {
    fn rows(&self) -> Result<Vec<String>> {
        debug!("Reading board from {}", self.path.display());
        let text = fs::read_to_string(&self.path)?;
        Ok(split_rows(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::Grid;

    #[test]
    fn text_rows_drop_line_endings() {
        let rows = "A.w\r\n#.B\r\n\n\n".rows().unwrap();
        assert_eq!(rows, vec!["A.w".to_owned(), "#.B".to_owned()]);
        let grid = Grid::from_source("A.w\n#.B\n").unwrap();
        assert_eq!((grid.height(), grid.width()), (2, 3));
    }

    #[test]
    fn blank_row_inside_board_is_ragged() {
        assert!(matches!(
            Grid::from_source("A.\n\n.B"),
            Err(Error::MalformedBoard(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = FileBoardSource::new("boards/does-not-exist.txt");
        assert!(matches!(Grid::from_source(&source), Err(Error::Io(_))));
    }

    #[test]
    fn reads_board_file() {
        let path = std::env::temp_dir().join("terrain_pathfinding_board_source.txt");
        fs::write(&path, "A.g\n..B\n").unwrap();
        let grid = Grid::from_source(&FileBoardSource::new(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(grid.goal().unwrap().point(), grid_util::point::Point::new(2, 1));
    }
}
