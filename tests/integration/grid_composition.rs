//! Matrix helpers and grid building.

use sdgen::action::{back, program_scene};
use sdgen::grid::{Grid, cell, paginate, repeat_row, transpose};
use sdgen::profile::Profile;

#[test]
fn test_transpose_twice_restores_matrix() {
    let m = vec![vec![1, 2, 3], vec![4, 5, 6]];
    assert_eq!(transpose(&transpose(&m)), m);
}

#[test]
fn test_transpose_empty() {
    let empty: Vec<Vec<i32>> = Vec::new();
    assert!(transpose(&empty).is_empty());
}

#[test]
fn test_pages_cover_every_item_once() {
    let items: Vec<u32> = (0..23).collect();
    let page_size = 5;
    let pages = items.len().div_ceil(page_size);

    let joined: Vec<u32> = (0..pages)
        .flat_map(|i| paginate(&items, page_size, i).iter().copied())
        .collect();
    assert_eq!(joined, items);
    assert!(paginate(&items, page_size, pages).is_empty());
}

#[test]
fn test_negative_repeat_is_empty() {
    assert!(repeat_row(-2, &0).is_empty());
    assert_eq!(repeat_row(2, &"x"), vec!["x", "x"]);
}

#[test]
fn test_grid_to_manifest_skips_empty_keys() {
    let mut grid = Grid::from_rows(vec![
        vec![None, cell(program_scene("Idle", "idle"))],
        Vec::new(),
    ]);
    grid.set_cell(0, 0, cell(back()))
        .set_cell(3, 2, cell(program_scene("BRB", "break")));

    let profile = Profile::new("Grid", &grid);
    let keypad = profile.manifest().keypad().unwrap();
    let mut keys: Vec<&str> = keypad.actions.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["0,0", "1,0", "3,2"]);
}
