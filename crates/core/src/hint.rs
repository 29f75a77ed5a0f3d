//! Hint search - the first swap that would produce a match
//!
//! Exhaustive trial-swap scan in a fixed order: row-major over all cells,
//! each cell trying its right neighbor first, then its down neighbor. Every
//! trial swaps, scans, and swaps back immediately, so the board is restored
//! bit-identically whether or not a match was found. First-found policy, not
//! best-found.

use arrayvec::ArrayVec;

use match_three_types::Pos;

use crate::board::Board;
use crate::matches::find_matches;

/// Find the first swap that produces a match, or `None` when no single swap
/// anywhere on the board does.
///
/// A `None` result is a valid terminal signal (the board has no legal
/// moves); what to do about it - typically a reshuffle - is the caller's
/// decision.
pub fn find_hint(board: &mut Board) -> Option<(Pos, Pos)> {
    let size = board.size();

    for row in 0..size {
        for col in 0..size {
            let origin = Pos::new(row, col);

            let mut neighbors: ArrayVec<Pos, 2> = ArrayVec::new();
            if col + 1 < size {
                neighbors.push(Pos::new(row, col + 1));
            }
            if row + 1 < size {
                neighbors.push(Pos::new(row + 1, col));
            }

            for neighbor in neighbors {
                board.swap(origin, neighbor);
                let found = !find_matches(board).is_empty();
                board.swap(origin, neighbor);
                if found {
                    return Some((origin, neighbor));
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use match_three_types::Tile;

    fn board(rows: &[&[u8]]) -> Board {
        let grid: Vec<Vec<Tile>> = rows
            .iter()
            .map(|row| row.iter().map(|i| Tile::from_index(*i).unwrap()).collect())
            .collect();
        Board::from_grid(&grid)
    }

    #[test]
    fn test_finds_first_producing_swap_in_scan_order() {
        let mut b = board(&[
            &[0, 1, 0, 3],
            &[1, 0, 2, 2],
            &[2, 3, 1, 3],
            &[3, 2, 3, 1],
        ]);

        // Swapping (0,1) down makes row 0 read 0 0 0 3. Earlier cells in the
        // row-major scan produce nothing, so this is the first hit.
        let hint = find_hint(&mut b);
        assert_eq!(hint, Some((Pos::new(0, 1), Pos::new(1, 1))));
    }

    #[test]
    fn test_no_legal_moves_returns_none() {
        // In this latin-square layout every line holds four distinct tiles,
        // so any single swap leaves at most two equal tiles in a line.
        let mut b = board(&[
            &[0, 1, 2, 3],
            &[1, 0, 3, 2],
            &[2, 3, 0, 1],
            &[3, 2, 1, 0],
        ]);

        assert_eq!(find_hint(&mut b), None);
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut b = board(&[
            &[0, 1, 0, 3],
            &[1, 0, 2, 2],
            &[2, 3, 1, 3],
            &[3, 2, 3, 1],
        ]);
        let before = b.clone();

        find_hint(&mut b);
        assert_eq!(b, before);

        // Also after an exhaustive search that finds nothing.
        let mut none_board = board(&[
            &[0, 1, 2, 3],
            &[1, 0, 3, 2],
            &[2, 3, 0, 1],
            &[3, 2, 1, 0],
        ]);
        let before = none_board.clone();
        find_hint(&mut none_board);
        assert_eq!(none_board, before);
    }

    #[test]
    fn test_hint_swap_really_matches() {
        let mut b = board(&[
            &[0, 1, 0, 3],
            &[1, 0, 2, 2],
            &[2, 3, 1, 3],
            &[3, 2, 3, 1],
        ]);

        let (a, c) = find_hint(&mut b).unwrap();
        b.swap(a, c);
        assert!(!find_matches(&b).is_empty());
    }
}
