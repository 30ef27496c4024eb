//! Map data and management module.
//!
//! This module contains the [`Maze`] matrix the solver works on, the `.labmap` text format it is
//! read from, and the [`Map`] struct pairing a maze with the name it was loaded under.

use std::{ffi::OsString, fmt, str::FromStr};

use color_eyre::eyre::{OptionExt as _, Result};

use crate::{errors::MazeError, types::Point};

/// Rectangular matrix of cell codes.
///
/// Cells are stored row-major. A maze always has at least one cell and every row has the same
/// length; both are checked on construction, so the accessors never have to deal with a ragged or
/// empty matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Cell codes, row after row.
    cells: Vec<u32>,
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
}

impl Maze {
    /// Builds a maze from its rows.
    ///
    /// # Errors
    ///
    /// - [`MazeError::EmptyMaze`] if there are no rows or the first row is empty.
    /// - [`MazeError::RaggedRow`] if a row differs in length from the first one.
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self, MazeError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MazeError::EmptyMaze);
        }

        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != width)
        {
            return Err(MazeError::RaggedRow {
                row,
                expected: width,
                found: values.len(),
            });
        }

        // Every row holds exactly `width` cells from here on.
        let height = rows.len();
        let cells: Vec<u32> = rows.into_iter().flatten().collect();

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether the point lies inside the maze.
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Cell code at the given point, or `None` outside the maze.
    #[must_use]
    pub fn get(&self, point: Point) -> Option<u32> {
        if self.contains(point) {
            self.cells.get(point.y * self.width + point.x).copied()
        } else {
            None
        }
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// The last row of the maze, where exits are searched for.
    #[must_use]
    pub fn bottom_row(&self) -> &[u32] {
        self.cells
            .get(self.cells.len().saturating_sub(self.width)..)
            .unwrap_or_default()
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Parses the `.labmap` text format.
    ///
    /// Each non-blank line is a row and cells are separated by whitespace, commas or both.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rows = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.split(|ch: char| ch.is_whitespace() || ch == ',')
                    .filter(|token| !token.is_empty())
                    .enumerate()
                    .map(|(column, token)| {
                        token.parse().map_err(|_err| MazeError::InvalidCell {
                            row,
                            column,
                            token: token.to_owned(),
                        })
                    })
                    .collect::<Result<Vec<u32>, MazeError>>()
            })
            .collect::<Result<Vec<_>, MazeError>>()?;

        Self::new(rows)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                writeln!(formatter)?;
            }
            for (column, cell) in row.iter().enumerate() {
                if column > 0 {
                    write!(formatter, " ")?;
                }
                write!(formatter, "{cell}")?;
            }
        }

        Ok(())
    }
}

/// Labyrinth map data container.
///
/// This structure pairs a parsed maze with the key it is known by, which is the file name it was
/// loaded from without its `.labmap` extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    /// Display name of the map.
    pub key: String,
    /// Parsed cell matrix.
    pub maze: Maze,
}

impl Default for Map {
    fn default() -> Self {
        Self::new("Default.labmap".into(), DEFAULT_MAP).expect("failed to create default map")
    }
}

impl Map {
    /// Builds a new map from a filename and the `.labmap` contents of the file.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The `OsString` cannot be converted to a string slice
    /// - The filename doesn't contain the expected ".labmap" extension
    /// - The contents are not a valid maze
    pub fn new(key: OsString, data: &str) -> Result<Self> {
        let mut file_name = key
            .to_str()
            .ok_or_eyre("failed to convert osstring to string slice")?
            .to_owned();
        file_name.truncate({
            file_name
                .rfind(".labmap")
                .ok_or_eyre("failed to find extension in file name")?
        });

        Ok(Self {
            key: file_name,
            maze: data.parse()?,
        })
    }
}

/// Built-in map used when no map file is given.
///
/// The start at the top-left corner reaches all three bottom-row exits; the rightmost one is the
/// exit the solver routes to.
const DEFAULT_MAP: &str = "\
0 0 0 9 0 0 0 0 0
9 9 0 9 0 9 9 9 0
0 0 0 0 0 9 0 0 0
0 9 9 9 3 9 0 9 9
0 0 0 9 0 0 0 0 0
9 9 0 9 2 9 9 9 0
9 9 0 9 0 9 9 9 0";
