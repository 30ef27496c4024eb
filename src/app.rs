//! Core application state and logic for the labyrinth solver.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{bail, Result, WrapErr as _};
use env_logger::Env;
use log::info;

use crate::{
    file_loader,
    map::Map,
    solver::{route_to_exit, Solution},
    types::{CellCodes, Point, DEFAULT_WALL, OPEN},
};

/// Routes labyrinth maps to their bottom-row exit with A*.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// A .labmap file, or a directory whose .labmap files are all solved. The built-in map is used
    /// when omitted.
    pub map: Option<PathBuf>,

    /// Column of the start cell.
    #[arg(short = 'x', long, default_value_t = 0)]
    pub start_x: usize,

    /// Row of the start cell.
    #[arg(short = 'y', long, default_value_t = 0)]
    pub start_y: usize,

    /// Cell code of walls.
    #[arg(long, default_value_t = DEFAULT_WALL)]
    pub wall: u32,

    /// Cell code of open cells, searched for along the bottom row to find exits.
    #[arg(long, default_value_t = OPEN)]
    pub open: u32,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Application state container for the labyrinth solver.
///
/// This structure holds the parsed command line and drives a run: it sets up logging, loads the
/// requested maps and writes one report per map.
#[derive(Debug)]
pub struct App {
    /// Parsed command line arguments.
    args: Args,
}

impl App {
    /// Creates a new instance of the App structure from parsed arguments.
    #[must_use]
    pub const fn new(args: Args) -> Self {
        Self { args }
    }

    /// Runs the application.
    ///
    /// # Errors
    ///
    /// This function may return errors if logging cannot be initialised, the maps cannot be loaded,
    /// a map breaks a solver precondition or writing to standard output fails.
    pub fn run(&self) -> Result<()> {
        init_logging(self.args.verbose)?;

        let maps = self.load_maps()?;
        info!("solving {} map(s)", maps.len());

        let mut stdout = io::stdout().lock();
        self.report(&maps, &mut stdout)
    }

    /// Cell codes selected on the command line.
    const fn codes(&self) -> CellCodes {
        CellCodes {
            open: self.args.open,
            wall: self.args.wall,
        }
    }

    /// Loads the map file, every map in the map directory, or the built-in map.
    fn load_maps(&self) -> Result<Vec<Map>> {
        match &self.args.map {
            None => Ok(vec![Map::default()]),
            Some(path) if path.is_dir() => {
                let maps = file_loader::fetch_files(path)?;
                if maps.is_empty() {
                    bail!(
                        "no valid .{} files found in {}",
                        file_loader::MAP_EXTENSION,
                        path.display()
                    );
                }
                Ok(maps)
            }
            Some(path) => Ok(vec![file_loader::load_file(path)?]),
        }
    }

    /// Solves every map and writes the report.
    ///
    /// Each map gets a header line naming the exit, the route length and its cost, followed by
    /// the route itself. An unreachable exit is reported instead of a route.
    pub(crate) fn report<W: Write>(&self, maps: &[Map], out: &mut W) -> Result<()> {
        let start = Point::new(self.args.start_x, self.args.start_y);

        for map in maps {
            let solution = route_to_exit(&map.maze, start, self.codes())
                .wrap_err_with(|| format!("failed to solve map {}", map.key))?;
            write_solution(out, &map.key, &solution)?;
        }

        out.flush()?;
        Ok(())
    }
}

/// Writes the report of a single map.
fn write_solution<W: Write>(out: &mut W, key: &str, solution: &Solution) -> Result<()> {
    let (exit_row, exit_column) = solution.exit.row_col();

    if !solution.is_reachable() {
        writeln!(
            out,
            "{key}: no route to exit at (row {exit_row}, column {exit_column})"
        )?;
        return Ok(());
    }

    writeln!(
        out,
        "{key}: exit at (row {exit_row}, column {exit_column}), {} cells, cost {}",
        solution.route.len(),
        solution.cost
    )?;
    let steps: Vec<String> = solution
        .route
        .iter()
        .map(|(row, column)| format!("({row}, {column})"))
        .collect();
    writeln!(out, "{}", steps.join(" -> "))?;

    Ok(())
}

/// Installs the global logger.
///
/// The default filter follows the verbosity count; `RUST_LOG` overrides it.
fn init_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .try_init()
        .wrap_err("failed to initialise logging")
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use clap::CommandFactory as _;

    use super::*;

    fn create_test_app(arguments: &[&str]) -> App {
        let args = Args::try_parse_from(
            std::iter::once("labyroute").chain(arguments.iter().copied()),
        )
        .expect("Failed to parse arguments");
        App::new(args)
    }

    fn create_test_map(key: &str, data: &str) -> Map {
        Map::new(OsString::from(format!("{key}.labmap")), data).expect("Failed to create map")
    }

    fn render(app: &App, maps: &[Map]) -> String {
        let mut out = Vec::new();
        app.report(maps, &mut out).expect("Failed to write report");
        String::from_utf8(out).expect("Report is valid UTF-8")
    }

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_defaults() {
        let app = create_test_app(&[]);

        assert_eq!(app.args.map, None);
        assert_eq!(app.args.start_x, 0);
        assert_eq!(app.args.start_y, 0);
        assert_eq!(app.codes(), CellCodes::default());
        assert_eq!(app.args.verbose, 0);
    }

    #[test]
    fn test_args_custom_values() {
        let app = create_test_app(&[
            "-x", "3", "-y", "2", "--wall", "7", "--open", "1", "-vv", "maze.labmap",
        ]);

        assert_eq!(app.args.map, Some(PathBuf::from("maze.labmap")));
        assert_eq!(app.args.start_x, 3);
        assert_eq!(app.args.start_y, 2);
        assert_eq!(app.codes(), CellCodes { open: 1, wall: 7 });
        assert_eq!(app.args.verbose, 2);
    }

    #[test]
    fn test_report_center_wall_map() {
        let app = create_test_app(&[]);
        let map = create_test_map("ring", "0 0 0\n0 9 0\n0 0 0");

        let report = render(&app, &[map]);
        let mut lines = report.lines();

        assert_eq!(
            lines.next(),
            Some("ring: exit at (row 2, column 2), 5 cells, cost 0")
        );
        let route = lines.next().expect("Route line present");
        assert!(route.starts_with("(0, 0) -> "));
        assert!(route.ends_with(" -> (2, 2)"));
        assert_eq!(route.matches(" -> ").count(), 4);
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_report_unreachable_exit() {
        let app = create_test_app(&[]);
        let map = create_test_map("blocked", "0 9\n9 0");

        assert_eq!(
            render(&app, &[map]),
            "blocked: no route to exit at (row 1, column 1)\n"
        );
    }

    #[test]
    fn test_report_default_map() {
        let app = create_test_app(&[]);

        let report = render(&app, &[Map::default()]);

        assert!(report.starts_with("Default: exit at (row 6, column 8), "));
        assert!(report.trim_end().ends_with("(5, 8) -> (6, 8)"));
    }

    #[test]
    fn test_report_multiple_maps_in_order() {
        let app = create_test_app(&[]);
        let maps = [
            create_test_map("first", "0"),
            create_test_map("second", "0 9\n9 0"),
        ];

        let report = render(&app, &maps);

        assert_eq!(
            report,
            "first: exit at (row 0, column 0), 1 cells, cost 0\n(0, 0)\n\
             second: no route to exit at (row 1, column 1)\n"
        );
    }

    #[test]
    fn test_report_no_exit_error() {
        let app = create_test_app(&[]);
        let map = create_test_map("closed", "0 0\n9 9");

        let mut out = Vec::new();
        let result = app.report(&[map], &mut out);

        assert!(result.is_err());
    }

    #[test]
    fn test_report_start_out_of_bounds_error() {
        let app = create_test_app(&["-x", "10"]);
        let map = create_test_map("small", "0 0\n0 0");

        let mut out = Vec::new();

        assert!(app.report(&[map], &mut out).is_err());
    }

    #[test]
    fn test_load_maps_defaults_to_built_in_map() {
        let app = create_test_app(&[]);

        let maps = app.load_maps().expect("Failed to load maps");

        assert_eq!(maps, vec![Map::default()]);
    }

    #[test]
    fn test_load_maps_missing_file() {
        let app = create_test_app(&["/nonexistent/labyroute/missing.labmap"]);

        assert!(app.load_maps().is_err());
    }
}
