use crate::SymmetryResult;

fn loss_cell(loss: Option<u64>) -> String {
    loss.map_or_else(|| "-".to_string(), |l| l.to_string())
}

pub fn print_comparison_table(results: &[SymmetryResult]) {
    println!("| Scanner | Time (ms) | Axis | Loss | Left matrix |");
    println!("|---------|-----------|------|------|-------------|");

    for result in results {
        println!(
            "| {} | {:.2} | {} | {} | {}x{} |",
            result.scanner_used,
            result.processing_time_ms,
            result.axis,
            loss_cell(result.loss),
            result.left.height(),
            result.left.width()
        );
    }
}

/// First pair of results that disagree on axis, loss or left matrix.
pub fn find_disagreement(results: &[SymmetryResult]) -> Option<(&SymmetryResult, &SymmetryResult)> {
    let first = results.first()?;
    results
        .iter()
        .skip(1)
        .find(|other| !first.same_outcome(other))
        .map(|other| (first, other))
}
