//! Hungarian/Munkres minimum-cost assignment on a square cost matrix.
//!
//! The solver runs in place: on return, cells of the selected matching are
//! `0.0` and every other cell is `-1.0`. All working state lives inside one
//! [`solve_assignment`] call, so distinct calls may run in parallel.

use crate::assignment::Assignment;
use crate::matrix::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    None,
    Star,
    Prime,
}

/// The phases of the Munkres algorithm. Each variant carries what the next
/// transition needs; `Done` is the only terminal state.
#[derive(Debug)]
enum Step {
    CoverStarredColumns,
    PrimeUncoveredZeros,
    AugmentFrom { row: usize, col: usize },
    AdjustByMinUncovered,
    Done,
}

struct CoverState {
    order: usize,
    marks: Vec<Mark>,
    row_covered: Vec<bool>,
    col_covered: Vec<bool>,
}

impl CoverState {
    fn new(order: usize) -> CoverState {
        CoverState {
            order,
            marks: vec![Mark::None; order * order],
            row_covered: vec![false; order],
            col_covered: vec![false; order],
        }
    }

    #[inline]
    fn mark(&self, row: usize, col: usize) -> Mark {
        self.marks[row * self.order + col]
    }

    #[inline]
    fn set_mark(&mut self, row: usize, col: usize, mark: Mark) {
        self.marks[row * self.order + col] = mark;
    }

    fn star_in_row(&self, row: usize) -> Option<usize> {
        (0..self.order).find(|&col| self.mark(row, col) == Mark::Star)
    }

    fn star_in_col(&self, col: usize) -> Option<usize> {
        (0..self.order).find(|&row| self.mark(row, col) == Mark::Star)
    }

    fn prime_in_row(&self, row: usize) -> Option<usize> {
        (0..self.order).find(|&col| self.mark(row, col) == Mark::Prime)
    }

    fn find_uncovered_zero(&self, costs: &Matrix<f32>) -> Option<(usize, usize)> {
        for row in 0..self.order {
            if self.row_covered[row] {
                continue;
            }
            for col in 0..self.order {
                if !self.col_covered[col] && costs.at(row, col) == 0.0 {
                    return Some((row, col));
                }
            }
        }
        None
    }
}

/// Computes a minimum-total-cost perfect matching of the square matrix in
/// place: matched cells become `0.0`, all others `-1.0`.
///
/// Non-finite entries are sentinels for forbidden pairs; they are replaced
/// by one more than the largest finite cost, so the solver only picks one
/// when a row has no finite alternative.
pub fn solve_assignment(costs: &mut Matrix<f32>) {
    assert_eq!(
        costs.rows(),
        costs.cols(),
        "assignment requires a square cost matrix, got {}x{}",
        costs.rows(),
        costs.cols()
    );
    let order = costs.rows();
    if order == 0 {
        return;
    }

    let mut max_finite = 0.0_f32;
    for row in 0..order {
        for col in 0..order {
            let v = costs.at(row, col);
            if v.is_finite() && v > max_finite {
                max_finite = v;
            }
        }
    }
    for row in 0..order {
        for col in 0..order {
            if !costs.at(row, col).is_finite() {
                *costs.at_mut(row, col) = max_finite + 1.0;
            }
        }
    }

    let mut state = CoverState::new(order);

    // Star every zero that shares no row or column with a starred zero.
    for row in 0..order {
        for col in 0..order {
            if costs.at(row, col) == 0.0
                && state.star_in_row(row).is_none()
                && state.star_in_col(col).is_none()
            {
                state.set_mark(row, col, Mark::Star);
            }
        }
    }

    let mut step = Step::CoverStarredColumns;
    loop {
        step = match step {
            Step::CoverStarredColumns => {
                for col in 0..order {
                    if state.star_in_col(col).is_some() {
                        state.col_covered[col] = true;
                    }
                }
                let covered = state.col_covered.iter().filter(|&&v| v).count();
                if covered >= order {
                    Step::Done
                } else {
                    Step::PrimeUncoveredZeros
                }
            }
            Step::PrimeUncoveredZeros => {
                let mut next = Step::AdjustByMinUncovered;
                while let Some((row, col)) = state.find_uncovered_zero(costs) {
                    state.set_mark(row, col, Mark::Prime);
                    match state.star_in_row(row) {
                        Some(star_col) => {
                            state.row_covered[row] = true;
                            state.col_covered[star_col] = false;
                        }
                        None => {
                            next = Step::AugmentFrom { row, col };
                            break;
                        }
                    }
                }
                next
            }
            Step::AugmentFrom { row, col } => {
                augment(&mut state, row, col);
                Step::CoverStarredColumns
            }
            Step::AdjustByMinUncovered => {
                let mut h = f32::INFINITY;
                for row in 0..order {
                    if state.row_covered[row] {
                        continue;
                    }
                    for col in 0..order {
                        if !state.col_covered[col] {
                            h = h.min(costs.at(row, col));
                        }
                    }
                }
                for row in 0..order {
                    if state.row_covered[row] {
                        for col in 0..order {
                            *costs.at_mut(row, col) += h;
                        }
                    }
                }
                for col in 0..order {
                    if !state.col_covered[col] {
                        for row in 0..order {
                            *costs.at_mut(row, col) -= h;
                        }
                    }
                }
                Step::PrimeUncoveredZeros
            }
            Step::Done => break,
        };
    }

    for row in 0..order {
        for col in 0..order {
            *costs.at_mut(row, col) = if state.mark(row, col) == Mark::Star {
                0.0
            } else {
                -1.0
            };
        }
    }
}

/// Alternating path of starred and primed zeros rooted at the primed zero
/// `(row, col)`: unstars the starred, stars the primed, then clears all
/// primes and covers.
fn augment(state: &mut CoverState, row: usize, col: usize) {
    let mut path = vec![(row, col)];
    loop {
        let last_col = path[path.len() - 1].1;
        match state.star_in_col(last_col) {
            Some(star_row) => {
                path.push((star_row, last_col));
                // A starred zero on the path always has a primed zero in
                // its row: that prime is what covered the row.
                let prime_col = state
                    .prime_in_row(star_row)
                    .expect("augmenting path: starred row without a primed zero");
                path.push((star_row, prime_col));
            }
            None => break,
        }
    }

    // Even positions are primed zeros, odd positions starred ones.
    for (i, &(r, c)) in path.iter().enumerate() {
        let mark = if i % 2 == 0 { Mark::Star } else { Mark::None };
        state.set_mark(r, c, mark);
    }
    for mark in state.marks.iter_mut() {
        if *mark == Mark::Prime {
            *mark = Mark::None;
        }
    }
    state.row_covered.fill(false);
    state.col_covered.fill(false);
}

/// Extracts the matched pairs inside the unpadded `rows x cols` region of a
/// solved matrix. Pairs involving padding rows or columns are dropped.
pub fn assignment_pairs(solved: &Matrix<f32>, rows: usize, cols: usize) -> Assignment {
    let mut pairs = Vec::with_capacity(rows.min(cols));
    for row in 0..rows.min(solved.rows()) {
        for col in 0..cols.min(solved.cols()) {
            if solved.at(row, col) == 0.0 {
                pairs.push((row, col));
                break;
            }
        }
    }
    Assignment::new(pairs)
}
