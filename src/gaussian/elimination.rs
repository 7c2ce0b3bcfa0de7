use crate::basic_types::CheckStatus;
use crate::gaussian::matrix::Row;
use crate::parity_assert_extreme;
use crate::parity_assert_moderate;

/// The result of reducing one matrix.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Elimination {
    /// The number of linearly independent rows found.
    pub(crate) rank: usize,
    /// [`CheckStatus::Contradiction`] if a row reduced to `0 = 1`, otherwise
    /// [`CheckStatus::Consistent`].
    pub(crate) status: CheckStatus,
}

/// Forward Gaussian elimination over GF(2) with column-major pivot search.
///
/// For every column the first row at or after the rank cursor with that bit
/// set becomes the pivot (stable and deterministic; over GF(2) all non-zero
/// elements are 1, so there is nothing to gain from heuristic pivoting). The
/// pivot is then xor-ed into every other row with the bit set, above and
/// below the cursor. The full reduction matters: a row can only be recognised
/// as `0 = 1` once all of its bits have been cancelled, regardless of where
/// it sits in the matrix.
pub(crate) fn eliminate(rows: &mut [Row], width: usize) -> Elimination {
    let mut rank = 0;

    for col in 0..width {
        if rank == rows.len() {
            break;
        }

        // This column never becomes a pivot; fine, since the goal is
        // contradiction detection rather than solution extraction.
        let Some(offset) = rows[rank..].iter().position(|row| row.lhs.get(col)) else {
            continue;
        };

        rows.swap(rank, rank + offset);

        let (reduced, active) = rows.split_at_mut(rank);
        if let Some((pivot_row, remainder)) = active.split_first_mut() {
            parity_assert_moderate!(pivot_row.lhs.get(col));

            for row in reduced.iter_mut().chain(remainder.iter_mut()) {
                if row.lhs.get(col) {
                    row.lhs.xor_assign(&pivot_row.lhs);
                    row.rhs ^= pivot_row.rhs;
                }
            }
        }

        rank += 1;
    }

    parity_assert_extreme!(rows
        .iter()
        .take(rank)
        .all(|row| !row.lhs.is_zero()));

    let status = if rows.iter().any(Row::is_contradiction) {
        CheckStatus::Contradiction
    } else {
        CheckStatus::Consistent
    };

    Elimination { rank, status }
}
