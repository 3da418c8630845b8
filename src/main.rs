//! Terminal front end for inspecting room layouts.

use dungeon_editor::codec;
use dungeon_editor::grid::Grid;
use dungeon_editor::model::RoomModel;
use std::env;
use std::process::exit;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    // the hex digest holds at most 16 columns per row
    let size = match args.next().map(|arg| arg.parse::<usize>()) {
        Some(Ok(size)) if (5..=15).contains(&size) => size,
        _ => {
            eprintln!("usage: dungeon-editor <size (5..=15)> [hex-layout]");
            exit(2);
        }
    };

    let mut model = RoomModel::new(size);

    if let Some(digest) = args.next() {
        let layout = match codec::hex_to_grid(&digest, size) {
            Ok(layout) => layout,
            Err(reason) => {
                eprintln!("could not decode layout: {reason}");
                exit(1);
            }
        };
        if let Err(reason) = model.set_layout(&layout) {
            eprintln!("could not apply layout: {reason}");
            exit(1);
        }
    }

    let layout = model.get_layout();
    print_room(&layout);
    println!();

    if !model.has_all_paths() {
        println!("room is incomplete: some doors or floor cells are unreachable");
        exit(1);
    }

    println!("{}", codec::grid_to_json_string(&layout));
    println!();
    println!("hex: {}", codec::grid_to_hex(&layout));
}

fn print_room(layout: &Grid) {
    let size = layout.len();
    for y in 0..size {
        let row: String = (0..size)
            .map(|x| if layout[x][y] { '#' } else { '.' })
            .collect();
        println!("{row}");
    }
}
