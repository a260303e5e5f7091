//! Textual rendering of solutions.
//!
//! Lives outside the search core: the solver never renders strings, and the
//! id-to-label mapping is owned here. Rendering only needs the public
//! [`Solution`] query API.

use crate::geometry::Point;
use crate::pieces::PieceId;
use crate::solver::Solution;

/// Display label for a cell occupant. Empty cells show as '.'.
///
/// Ids are arbitrary `u8` tags, not dense indices, so anything past the
/// letter range falls back to '?' rather than wrapping.
pub fn piece_label(occupant: Option<PieceId>) -> char {
    match occupant {
        None => '.',
        Some(PieceId(n)) if n < 26 => char::from(b'A' + n),
        Some(PieceId(n)) if n < 52 => char::from(b'a' + (n - 26)),
        Some(_) => '?',
    }
}

/// Formats a solution as z-slices side by side, rows from y max down to 0,
/// x increasing to the right.
pub fn format_solution(solution: &Solution) -> String {
    let dims = solution.dims();
    // widen narrow slices so the longest header label still fits its column
    let widest_label = format!("z={}", dims.z - 1).len();
    let column = (dims.x as usize).max(widest_label);

    let mut output = String::new();
    for z in 0..dims.z {
        if z > 0 {
            output.push_str("  ");
        }
        let label = format!("z={z}");
        if z + 1 < dims.z {
            output.push_str(&format!("{label:<column$}"));
        } else {
            output.push_str(&label);
        }
    }
    output.push('\n');

    for y in (0..dims.y).rev() {
        for z in 0..dims.z {
            if z > 0 {
                output.push_str("  ");
            }
            for x in 0..dims.x {
                output.push(piece_label(solution.occupant(Point::new(x, y, z))));
            }
            if z + 1 < dims.z {
                for _ in dims.x as usize..column {
                    output.push(' ');
                }
            }
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::pieces::{PieceDef, Puzzle};
    use crate::solver::solve;

    #[test]
    fn labels_map_ids_to_letters() {
        assert_eq!(piece_label(None), '.');
        assert_eq!(piece_label(Some(PieceId(0))), 'A');
        assert_eq!(piece_label(Some(PieceId(5))), 'F');
        assert_eq!(piece_label(Some(PieceId(26))), 'a');
        assert_eq!(piece_label(Some(PieceId(51))), 'z');
    }

    #[test]
    fn labels_are_total_over_all_ids() {
        // ids are tags, not indices; none may panic, even past the letters
        for n in 0..=u8::MAX {
            let label = piece_label(Some(PieceId(n)));
            assert!(label.is_ascii_alphabetic() || label == '?');
        }
        assert_eq!(piece_label(Some(PieceId(52))), '?');
        assert_eq!(piece_label(Some(PieceId(200))), '?');
    }

    #[test]
    fn formats_a_solution_with_a_large_piece_id() {
        let puzzle = Puzzle::new(
            Size::new(1, 1, 1),
            vec![PieceDef::new(PieceId(200), vec![Point::ORIGIN])],
        );
        let solutions = solve(&puzzle, None).unwrap();
        let output = format_solution(&solutions[0]);
        insta::assert_snapshot!(output, @r"
        z=0
        ?
        ");
    }

    #[test]
    fn formats_two_dominoes_in_a_flat_box() {
        // deterministic first solution: both dominoes stand along y
        let domino = vec![Point::new(0, 0, 0), Point::new(1, 0, 0)];
        let puzzle = Puzzle::new(
            Size::new(2, 2, 1),
            vec![
                PieceDef::new(PieceId(0), domino.clone()),
                PieceDef::new(PieceId(1), domino),
            ],
        );
        let solutions = solve(&puzzle, Some(1)).unwrap();
        let output = format_solution(&solutions[0]);
        insta::assert_snapshot!(output, @r"
        z=0
        AB
        AB
        ");
    }

    #[test]
    fn headers_stay_aligned_when_slices_are_narrower_than_labels() {
        // deterministic first solution: both dominoes stand upright, one
        // per column, so each z slice reads "AB"
        let domino = vec![Point::new(0, 0, 0), Point::new(1, 0, 0)];
        let puzzle = Puzzle::new(
            Size::new(2, 1, 2),
            vec![
                PieceDef::new(PieceId(0), domino.clone()),
                PieceDef::new(PieceId(1), domino),
            ],
        );
        let solutions = solve(&puzzle, Some(1)).unwrap();
        let output = format_solution(&solutions[0]);
        // slices are 2 wide but labels are 3 wide; columns widen to match
        insta::assert_snapshot!(output, @r"
        z=0  z=1
        AB   AB
        ");
    }
}
