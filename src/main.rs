use docopt::Docopt;
use log::{debug, LevelFilter};
use serde_derive::Deserialize;
use simple_logger::SimpleLogger;
use smallvec::smallvec;
use perfect_mazes::{
    cells::GridCoordinate,
    generators,
    grid_displays::{PathDisplay, StartEndPointsDisplay},
    layout::{LayoutOptions, MazeLayout},
    maze::Maze,
    pathing,
    random,
};
use std::{
    io,
    io::prelude::*,
    fs::File,
};

const USAGE: &str = "Perfect mazes

Usage:
    maze_driver -h | --help
    maze_driver [--grid-size=<n>] [--seed=<s>] [--text-out=<path>] [--show-path | --show-distances | --mark-start-end] [--save-edges=<path>] [--layout --cell-length=<u>] [-v]

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid size is n * n [default: 10].
    --seed=<s>             Seed the random generator so the same maze comes out every run.
    --text-out=<path>      Output file path for a textual rendering of a maze. Printed if not given.
    --show-path            Show the path from the top left cell to the bottom right cell.
    --show-distances       Show the distance from the top left cell to every other cell, in hexadecimal.
    --mark-start-end       Draw an 'S' (start) in the top left cell and an 'E' (end) in the bottom right cell.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
    --layout               Print the wall, boundary, goal and ball geometry, one body per line.
    --cell-length=<u>      Side length of one cell in the layout [default: 100].
    -v --verbose           Log generation details to stderr.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: usize,
    flag_seed: Option<u64>,
    flag_text_out: String,
    flag_show_path: bool,
    flag_show_distances: bool,
    flag_mark_start_end: bool,
    flag_save_edges: String,
    flag_layout: bool,
    flag_cell_length: f32,
    flag_verbose: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::perfect_mazes::errors::Error, ::perfect_mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            LoggerInit(::log::SetLoggerError);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    SimpleLogger::new()
        .without_timestamps()
        .with_level(if args.flag_verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init()?;

    let maze = if let Some(seed) = args.flag_seed {
        debug!("generating with seed {}", seed);
        generators::recursive_backtracker(args.flag_grid_size, &mut random::seeded(seed))?
    } else {
        generators::recursive_backtracker(args.flag_grid_size, &mut random::from_entropy())?
    };

    let text = render_text(&maze, &args)?;
    if args.flag_text_out.is_empty() {
        print!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze, &args.flag_save_edges)?;
    }

    if args.flag_layout {
        let options = LayoutOptions {
            cell_length: args.flag_cell_length,
            ..LayoutOptions::default()
        };
        print!("{}", MazeLayout::new(&maze, &options)?);
    }

    Ok(())
}

/// The ball starts in the top left cell and the goal sits in the bottom right one, so those
/// are the start and end of any path or marker shown.
fn render_text(maze: &Maze, maze_args: &MazeArgs) -> Result<String> {

    let start = GridCoordinate::new(0, 0);
    let end = GridCoordinate::new(maze.size() - 1, maze.size() - 1);

    if maze_args.flag_show_distances || maze_args.flag_show_path {

        let distances = pathing::Distances::new(maze, start)
            .ok_or("Invalid start coordinate from which to show path distances.")?;

        if maze_args.flag_show_distances {
            return Ok(maze.render(Some(&distances)));
        }

        if let Some(path) = pathing::shortest_path(maze, &distances, end) {
            return Ok(maze.render(Some(&PathDisplay::new(&path))));
        }
        // No route at all, the maze is not perfect. Fall back to marking the end points.
    } else if !maze_args.flag_mark_start_end {
        return Ok(maze.to_string());
    }

    let display_start_end_points = StartEndPointsDisplay::new(smallvec![start], smallvec![end]);
    Ok(maze.render(Some(&display_start_end_points)))
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze: &Maze, file_path: &str) -> Result<()> {

    let mut graph_data = String::new();
    graph_data.push_str(maze.cells_count().to_string().as_ref());
    graph_data.push(' ');
    graph_data.push_str(maze.passages_count().to_string().as_ref());
    graph_data.push('\n');

    for (src, dst) in maze.iter_links() {
        let index_a = maze.coordinate_to_index(src).ok_or("Link from outside the maze")?;
        let index_b = maze.coordinate_to_index(dst).ok_or("Link to outside the maze")?;

        graph_data.push_str((index_a + 1).to_string().as_ref());
        graph_data.push(' ');
        graph_data.push_str((index_b + 1).to_string().as_ref());
        graph_data.push('\n');
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;

    Ok(())
}
