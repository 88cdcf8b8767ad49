//! The 5x5 grid of the taxi world.
//!
//! Cells of the grid sit at odd columns of [`MAP`]; the characters between them
//! are either `:` (passable) or `|` (wall).

/// Text layout of the grid.
pub const MAP: [&str; 7] = [
    "+---------+",
    "|R: | : :G|",
    "| : | : : |",
    "| : : : : |",
    "| | : | : |",
    "|Y| : |B: |",
    "+---------+",
];

/// Number of rows of the grid.
pub const NUM_ROWS: usize = 5;

/// Number of columns of the grid.
pub const NUM_COLS: usize = 5;

/// Landmarks where passengers wait and get dropped off, as `(row, col)`.
///
/// The order defines the location indices: R, G, Y, B.
pub const LOCS: [(usize, usize); 4] = [(0, 0), (0, 4), (4, 0), (4, 3)];

/// Letters of the landmarks, in the order of [`LOCS`].
pub const LOC_NAMES: [char; 4] = ['R', 'G', 'Y', 'B'];

fn cell(line: usize, col: usize) -> u8 {
    MAP[line].as_bytes()[col]
}

/// Returns `true` if the taxi can move east from `(row, col)`.
pub fn can_move_east(row: usize, col: usize) -> bool {
    col + 1 < NUM_COLS && cell(row + 1, 2 * col + 2) == b':'
}

/// Returns `true` if the taxi can move west from `(row, col)`.
pub fn can_move_west(row: usize, col: usize) -> bool {
    col > 0 && cell(row + 1, 2 * col) == b':'
}

/// Returns the index of the landmark at `(row, col)`, if any.
pub fn loc_index(row: usize, col: usize) -> Option<usize> {
    LOCS.iter().position(|&l| l == (row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls() {
        // R cannot go east past the wall at column 1
        assert!(can_move_east(0, 0));
        assert!(!can_move_east(0, 1));
        assert!(!can_move_west(0, 2));
        assert!(can_move_east(2, 1));
        assert!(!can_move_east(4, 0));
        assert!(!can_move_west(4, 1));
        assert!(!can_move_east(3, 4));
        assert!(!can_move_west(3, 0));
    }

    #[test]
    fn landmarks_are_lettered_on_the_map() {
        for (&(r, c), &name) in LOCS.iter().zip(LOC_NAMES.iter()) {
            assert_eq!(cell(r + 1, 2 * c + 1), name as u8);
            assert_eq!(loc_index(r, c), LOC_NAMES.iter().position(|&n| n == name));
        }
        assert_eq!(loc_index(2, 2), None);
    }
}
