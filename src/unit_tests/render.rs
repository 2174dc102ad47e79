use super::*;
use crate::verify::path_to_configs;

#[test]
fn renders_the_unique_path_on_an_adjacent_2x2_grid() {
    let grid = Grid::from_codes(2, 2, &[2, 3, 0, 0]).unwrap();
    let path = [(0, 0), (1, 0), (1, 1), (0, 1)];
    let configs = path_to_configs(&grid, &path);

    let rendered = render_configs(&grid, &configs[1..]);
    assert_eq!(rendered, "A B \n| | \n+-+ \n    \n");
}

#[test]
fn blocked_cells_render_as_blank() {
    let grid = Grid::from_codes(3, 1, &[2, 1, 3]).unwrap();
    let configs = vec![vec![0, 0, 0]];
    let rendered = render_configs(&grid, &configs);
    let first_line = rendered.lines().next().unwrap();
    assert_eq!(first_line.chars().nth(0), Some('A'));
    assert_eq!(first_line.chars().nth(2), Some(' '));
    assert_eq!(first_line.chars().nth(4), Some('B'));
}
