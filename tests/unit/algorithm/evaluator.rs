//! Tests for per-cell weight accumulation and entropy scoring

#[cfg(test)]
mod tests {
    use dungeontile::algorithm::catalog::{Pattern, PatternCatalog};
    use dungeontile::algorithm::evaluator::{
        CellEvaluator, TileWeights, accumulate_weights, evaluate,
    };
    use dungeontile::algorithm::rotation::RotationSet;
    use dungeontile::spatial::grid::TileGrid;
    use dungeontile::{AlgorithmError, BorderMatching, TileType};

    const W: TileType = TileType::Wall;
    const E: TileType = TileType::Empty;
    const U: TileType = TileType::Unknown;

    fn seeded_grid() -> TileGrid {
        let mut grid = TileGrid::new(5, 5).expect("valid dimensions");
        grid.set_tile(2, 2, E).expect("centre is interior");
        grid
    }

    // Tests repeated tiles are summed and totals cover every tile
    // Verified by overwriting instead of adding
    #[test]
    fn test_tile_weights_accumulate() {
        let weights = TileWeights::from_pairs(&[(W, 10), (E, 5), (W, 20)]);
        assert_eq!(weights.get(W), 30);
        assert_eq!(weights.get(E), 5);
        assert_eq!(weights.get(TileType::Floor), 0);
        assert_eq!(weights.total(), 35);
        assert_eq!(weights.concrete(), [30, 5, 0, 0]);
    }

    // Tests candidates skip zero weights and keep concrete order
    // Verified by returning candidates in insertion order
    #[test]
    fn test_tile_weights_candidates() {
        let weights = TileWeights::from_pairs(&[(E, 7), (TileType::Stairs, 0), (W, 3)]);
        let candidates: Vec<_> = weights.candidates().collect();
        assert_eq!(candidates, vec![(W, 3), (E, 7)]);
    }

    // Tests entropy is one bit for an even split, zero for one tile, absent for none
    // Verified by returning zero entropy for an empty distribution
    #[test]
    fn test_tile_weights_entropy() {
        let even = TileWeights::from_pairs(&[(W, 10), (E, 10)]);
        let entropy = even.entropy().expect("non-zero total");
        assert!((entropy - 1.0).abs() < 1e-12);

        let certain = TileWeights::from_pairs(&[(E, 70)]);
        assert_eq!(certain.entropy(), Some(0.0));

        assert_eq!(TileWeights::default().entropy(), None);
    }

    // Tests a fully unknown neighbourhood collects every rotation of every pattern
    // Verified by adding each pattern's weight once regardless of rotation count
    #[test]
    fn test_accumulate_unknown_kernel() {
        let catalog = PatternCatalog::dungeon().expect("stock catalog is valid");
        let weights = accumulate_weights(&catalog, &[U; 8]);
        assert_eq!(weights.get(W), 120);
        assert_eq!(weights.get(E), 150);
        assert_eq!(weights.concrete()[..2], catalog.weight_mass()[..2]);
    }

    // Tests a corner cell next to the seed under the wall border
    // Verified by reading border neighbours as Unknown
    #[test]
    fn test_evaluate_corner_with_wall_border() {
        let grid = seeded_grid();
        let catalog = PatternCatalog::dungeon().expect("stock catalog is valid");

        let state = evaluate(&grid, &catalog, [1, 1], BorderMatching::Wall)
            .expect("interior unknown cell");
        assert_eq!(state.position, [1, 1]);
        assert_eq!(state.kernel, [W, W, W, W, U, W, U, E]);
        assert_eq!(state.weights.get(W), 10);
        assert_eq!(state.weights.get(E), 10);
        assert_eq!(state.total_weight(), 20);
        assert!(!state.is_contradiction());
        let entropy = state.entropy.expect("weights are non-zero");
        assert!((entropy - 1.0).abs() < 1e-12);
    }

    // Tests the same corner cell when border neighbours act as wildcards
    // Verified by keeping border neighbours as Wall in wildcard mode
    #[test]
    fn test_evaluate_corner_with_wildcard_border() {
        let grid = seeded_grid();
        let catalog = PatternCatalog::dungeon().expect("stock catalog is valid");

        let state = evaluate(&grid, &catalog, [1, 1], BorderMatching::Wildcard)
            .expect("interior unknown cell");
        assert_eq!(state.kernel, [U, U, U, U, U, U, U, E]);
        assert_eq!(state.weights.get(W), 50);
        assert_eq!(state.weights.get(E), 80);
    }

    // Tests a neighbourhood no pattern accepts has no entropy
    // Verified by defaulting entropy to zero
    #[test]
    fn test_evaluate_contradiction() {
        let grid = seeded_grid();
        let catalog = PatternCatalog::new(vec![Pattern::new(
            "Full_Wall",
            W,
            50,
            [W; 8],
            RotationSet::all(),
        )])
        .expect("valid catalog");

        let state =
            evaluate(&grid, &catalog, [1, 1], BorderMatching::Wall).expect("interior cell");
        assert!(state.is_contradiction());
        assert_eq!(state.entropy, None);
    }

    // Tests border and resolved cells are refused
    // Verified by removing the resolved-cell check
    #[test]
    fn test_evaluate_rejects_invalid_positions() {
        let grid = seeded_grid();
        let catalog = PatternCatalog::dungeon().expect("stock catalog is valid");

        for position in [[0, 0], [4, 2], [2, 2], [9, 9]] {
            let result = evaluate(&grid, &catalog, position, BorderMatching::Wall);
            assert!(
                matches!(result, Err(AlgorithmError::InvalidPosition { .. })),
                "position {position:?} should be rejected"
            );
        }
    }

    // Tests the cached evaluator agrees with direct evaluation and reuses kernels
    // Verified by bypassing the cache on repeated kernels
    #[test]
    fn test_cell_evaluator_uses_cache() {
        let grid = seeded_grid();
        let catalog = PatternCatalog::dungeon().expect("stock catalog is valid");
        let mut evaluator = CellEvaluator::new(&catalog, BorderMatching::Wall);
        assert_eq!(evaluator.border(), BorderMatching::Wall);
        assert_eq!(evaluator.catalog().len(), catalog.len());

        let cached = evaluator.evaluate(&grid, [1, 1]).expect("interior cell");
        let direct =
            evaluate(&grid, &catalog, [1, 1], BorderMatching::Wall).expect("interior cell");
        assert_eq!(cached, direct);
        assert_eq!(evaluator.cache().stats.misses, 1);

        evaluator.evaluate(&grid, [1, 1]).expect("interior cell");
        assert_eq!(evaluator.cache().stats.hits, 1);

        evaluator.evaluate(&grid, [3, 3]).expect("interior cell");
        assert_eq!(evaluator.cache().stats.misses, 2);
        assert_eq!(evaluator.cache().len(), 2);
    }
}
