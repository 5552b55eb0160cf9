use crate::algorithms::SymmetryScanner;
use crate::logging::{get_correlation_id, ScanSpan};
use crate::{ImageMatrix, SymmetryResult};
use instant::Instant;
use ndarray::s;
use rayon::prelude::*;

/// Number of mirrored column pairs around `mid`, bounded by the nearer edge.
pub fn reach(mid: usize, width: usize) -> usize {
    mid.min(width.saturating_sub(mid + 1))
}

/// How many axes in a row of `width` columns have at least one mirror pair.
pub fn candidate_count(width: usize) -> usize {
    width.saturating_sub(2)
}

/// Sum of squared differences between columns `mid - a` and `mid + a`
/// for every `a` in `1..=reach` and every row.
pub fn axis_loss(matrix: &ImageMatrix, mid: usize) -> u64 {
    let view = matrix.view();
    let mut loss = 0u64;

    for a in 1..=reach(mid, matrix.width()) {
        for row in 0..matrix.height() {
            let diff = i64::from(view[[row, mid - a]]) - i64::from(view[[row, mid + a]]);
            loss += (diff * diff) as u64;
        }
    }

    loss
}

/// Same quantity as [`axis_loss`], computed on whole column blocks: the
/// columns left of `mid` are taken in reverse so they line up with their
/// mirrors on the right.
pub fn axis_loss_vectorized(matrix: &ImageMatrix, mid: usize) -> u64 {
    let r = reach(mid, matrix.width());
    if r == 0 {
        return 0;
    }

    let view = matrix.view();
    let left = view.slice(s![.., mid - r..mid; -1]).mapv(i32::from);
    let right = view.slice(s![.., mid + 1..=mid + r]).mapv(i32::from);

    (left - right).mapv(|d| (d * d) as u64).sum()
}

/// First strictly smaller loss wins, so equal losses keep the lower axis.
fn select_best<I>(losses: I) -> (usize, Option<u64>)
where
    I: IntoIterator<Item = (usize, u64)>,
{
    let mut best_mid = 0;
    let mut best_loss: Option<u64> = None;

    for (mid, loss) in losses {
        if best_loss.map_or(true, |best| loss < best) {
            best_loss = Some(loss);
            best_mid = mid;
        }
    }

    (best_mid, best_loss)
}

fn scan_sequential<F>(
    name: &'static str,
    matrix: &ImageMatrix,
    loss_fn: F,
) -> crate::Result<SymmetryResult>
where
    F: Fn(&ImageMatrix, usize) -> u64,
{
    let span = ScanSpan::new(name, matrix.width(), matrix.height(), get_correlation_id());
    let _enter = span.enter();
    let start = Instant::now();

    if matrix.is_empty() {
        return Ok(build_result(name, matrix, 0, None, start, &span));
    }

    let width = matrix.width();
    let losses = (0..width)
        .filter(|&mid| reach(mid, width) > 0)
        .map(|mid| {
            let loss = loss_fn(matrix, mid);
            span.record_candidate(mid, reach(mid, width), loss);
            (mid, loss)
        });
    let (axis, loss) = select_best(losses);

    Ok(build_result(name, matrix, axis, loss, start, &span))
}

fn build_result(
    name: &str,
    matrix: &ImageMatrix,
    axis: usize,
    loss: Option<u64>,
    start: Instant,
    span: &ScanSpan,
) -> SymmetryResult {
    let mut result = SymmetryResult::new(name);
    result.axis = axis;
    result.loss = loss;
    result.left = matrix.crop_left(axis);
    result.candidates_evaluated = if matrix.is_empty() {
        0
    } else {
        candidate_count(matrix.width())
    };
    result.processing_time_ms = start.elapsed().as_secs_f32() * 1000.0;

    span.record_result(&result);
    result
}

/// Reference implementation: explicit loops, one pixel pair at a time.
pub struct NaiveScanner;

impl SymmetryScanner for NaiveScanner {
    fn scan(&self, matrix: &ImageMatrix) -> crate::Result<SymmetryResult> {
        scan_sequential(self.name(), matrix, axis_loss)
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}

pub struct VectorizedScanner;

impl SymmetryScanner for VectorizedScanner {
    fn scan(&self, matrix: &ImageMatrix) -> crate::Result<SymmetryResult> {
        scan_sequential(self.name(), matrix, axis_loss_vectorized)
    }

    fn name(&self) -> &'static str {
        "Vectorized"
    }
}

/// Evaluates candidate axes on the rayon pool. The reduction takes the
/// minimum of `(loss, mid)`, which keeps the lowest axis on equal loss.
pub struct ParallelScanner;

impl SymmetryScanner for ParallelScanner {
    fn scan(&self, matrix: &ImageMatrix) -> crate::Result<SymmetryResult> {
        let span = ScanSpan::new(self.name(), matrix.width(), matrix.height(), get_correlation_id());
        let _enter = span.enter();
        let start = Instant::now();

        if matrix.is_empty() {
            return Ok(build_result(self.name(), matrix, 0, None, start, &span));
        }

        let width = matrix.width();
        let best = (0..width)
            .into_par_iter()
            .filter(|&mid| reach(mid, width) > 0)
            .map(|mid| (axis_loss_vectorized(matrix, mid), mid))
            .min();

        let (axis, loss) = best.map_or((0, None), |(loss, mid)| (mid, Some(loss)));
        Ok(build_result(self.name(), matrix, axis, loss, start, &span))
    }

    fn name(&self) -> &'static str {
        "Parallel"
    }
}
