use mirror_axis::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn matrix(rows: &[&[u8]]) -> ImageMatrix {
    let rows: Vec<Vec<u8>> = rows.iter().map(|r| r.to_vec()).collect();
    ImageMatrix::from_rows(&rows).unwrap()
}

fn random_matrix(rng: &mut StdRng, width: usize, height: usize) -> ImageMatrix {
    let flat: Vec<u8> = (0..width * height).map(|_| rng.gen()).collect();
    ImageMatrix::from_flat(width, height, flat).unwrap()
}

fn all_scanners() -> Vec<Box<dyn SymmetryScanner>> {
    ScanStrategy::ALL.iter().map(|s| s.scanner()).collect()
}

#[test]
fn test_documented_example() {
    let m = matrix(&[&[1, 2, 3, 2, 1], &[4, 5, 6, 5, 4]]);

    for scanner in all_scanners() {
        let result = scanner.scan(&m).unwrap();
        assert_eq!(result.axis, 2, "{}", scanner.name());
        assert_eq!(result.loss, Some(0));
        assert_eq!(result.left.to_rows(), vec![vec![1, 2], vec![4, 5]]);
        assert_eq!(result.candidates_evaluated, 3);
        assert_eq!(result.scanner_used, scanner.name());
    }
}

#[test]
fn test_empty_matrix() {
    let m = ImageMatrix::from_rows(&[]).unwrap();

    for scanner in all_scanners() {
        let result = scanner.scan(&m).unwrap();
        assert_eq!(result.axis, 0);
        assert_eq!(result.loss, None);
        assert!(result.left.to_rows().is_empty());
        assert_eq!(result.candidates_evaluated, 0);
    }
}

#[test]
fn test_zero_width_rows() {
    let m = ImageMatrix::from_rows(&[vec![], vec![], vec![]]).unwrap();

    for scanner in all_scanners() {
        let result = scanner.scan(&m).unwrap();
        assert_eq!(result.axis, 0);
        assert_eq!(result.loss, None);
        assert_eq!(result.left.height(), 3);
        assert_eq!(result.left.width(), 0);
    }
}

#[test]
fn test_no_mirror_pairs_falls_back_to_axis_zero() {
    for m in [matrix(&[&[9]]), matrix(&[&[1, 200], &[3, 4]])] {
        for scanner in all_scanners() {
            let result = scanner.scan(&m).unwrap();
            assert_eq!(result.axis, 0);
            assert_eq!(result.loss, None);
            assert_eq!(result.left.width(), 0);
            assert_eq!(result.left.height(), m.height());
        }
    }
}

#[test]
fn test_edge_axes_never_selected() {
    // Column 0 and the last column would score 0 if they were considered.
    let m = matrix(&[&[0, 255, 0, 255], &[255, 0, 255, 0], &[0, 0, 255, 255], &[1, 2, 3, 4]]);

    for scanner in all_scanners() {
        let result = scanner.scan(&m).unwrap();
        assert!(result.axis == 1 || result.axis == 2);
        assert!(result.loss.unwrap() > 0);
    }
}

#[test]
fn test_palindromic_rows_pick_center() {
    let m = matrix(&[
        &[10, 40, 90, 250, 90, 40, 10],
        &[0, 1, 2, 3, 2, 1, 0],
        &[7, 7, 100, 5, 100, 7, 7],
        &[30, 60, 90, 120, 90, 60, 30],
        &[255, 0, 255, 0, 255, 0, 255],
        &[5, 6, 7, 8, 7, 6, 5],
        &[1, 1, 1, 1, 1, 1, 1],
    ]);

    for scanner in all_scanners() {
        let result = scanner.scan(&m).unwrap();
        assert_eq!(result.axis, 3, "{}", scanner.name());
        assert_eq!(result.loss, Some(0));
        assert_eq!(axis_loss(&m, 3), 0);
    }
}

#[test]
fn test_uniform_matrix_ties_resolve_to_lowest_axis() {
    let m = ImageMatrix::from_flat(6, 6, vec![128; 36]).unwrap();

    for scanner in all_scanners() {
        let result = scanner.scan(&m).unwrap();
        assert_eq!(result.axis, 1, "{}", scanner.name());
        assert_eq!(result.loss, Some(0));
    }
}

#[test]
fn test_tie_between_interior_axes_keeps_first() {
    // mid 1 and mid 5 both mirror perfectly; mid 1 comes first.
    let m = matrix(&[&[5, 9, 5, 0, 7, 8, 7], &[2, 4, 2, 0, 3, 1, 3]]);

    for scanner in all_scanners() {
        let result = scanner.scan(&m).unwrap();
        assert_eq!(result.axis, 1, "{}", scanner.name());
        assert_eq!(result.loss, Some(0));
        assert_eq!(result.left.to_rows(), vec![vec![5], vec![2]]);
    }
}

#[test]
fn test_scan_is_idempotent_and_leaves_input_untouched() {
    let mut rng = StdRng::seed_from_u64(7);
    let m = random_matrix(&mut rng, 16, 16);
    let before = m.clone();

    for scanner in all_scanners() {
        let first = scanner.scan(&m).unwrap();
        let second = scanner.scan(&m).unwrap();
        assert!(first.same_outcome(&second));
    }
    assert_eq!(m, before);
}

#[test]
fn test_left_matrix_matches_input_cells() {
    let mut rng = StdRng::seed_from_u64(11);
    let m = random_matrix(&mut rng, 12, 12);
    let result = VectorizedScanner.scan(&m).unwrap();

    assert_eq!(result.left.height(), m.height());
    assert_eq!(result.left.width(), result.axis);
    for row in 0..m.height() {
        for col in 0..result.axis {
            assert_eq!(result.left.get(row, col), m.get(row, col));
        }
    }
}

#[test]
fn test_best_loss_is_minimum_over_candidates() {
    let mut rng = StdRng::seed_from_u64(3);
    let m = random_matrix(&mut rng, 9, 9);
    let result = NaiveScanner.scan(&m).unwrap();

    let width = m.width();
    let minimum = (0..width)
        .filter(|&mid| reach(mid, width) > 0)
        .map(|mid| axis_loss(&m, mid))
        .min();
    assert_eq!(result.loss, minimum);
    assert_eq!(axis_loss(&m, result.axis), minimum.unwrap());
}

#[test]
fn test_strategies_agree_on_random_matrices() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..40 {
        let width = rng.gen_range(0..24);
        let height = rng.gen_range(0..24);
        let m = random_matrix(&mut rng, width, height);

        let results: Vec<SymmetryResult> = all_scanners()
            .iter()
            .map(|scanner| scanner.scan(&m).unwrap())
            .collect();

        for other in &results[1..] {
            assert!(
                results[0].same_outcome(other),
                "{} and {} disagree on {}x{}",
                results[0].scanner_used,
                other.scanner_used,
                width,
                height
            );
        }
    }
}

#[test]
fn test_strategies_agree_on_low_contrast_ties() {
    // Two intensity levels make equal losses common, exercising the tie rule.
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..40 {
        let side = rng.gen_range(3..12);
        let flat: Vec<u8> = (0..side * side).map(|_| rng.gen_range(0..2)).collect();
        let m = ImageMatrix::from_flat(side, side, flat).unwrap();

        let naive = NaiveScanner.scan(&m).unwrap();
        let parallel = ParallelScanner.scan(&m).unwrap();
        let vectorized = VectorizedScanner.scan(&m).unwrap();
        assert!(naive.same_outcome(&vectorized));
        assert!(naive.same_outcome(&parallel));
    }
}
