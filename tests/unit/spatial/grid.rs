//! Tests for grid construction, writes, neighbourhood reads and freezing

#[cfg(test)]
mod tests {
    use dungeontile::spatial::grid::{TileGrid, validate_dimensions};
    use dungeontile::spatial::scale::CellScale;
    use dungeontile::{AlgorithmError, BorderMatching, TileType};

    const W: TileType = TileType::Wall;
    const E: TileType = TileType::Empty;
    const U: TileType = TileType::Unknown;

    // Tests a new grid has a wall ring around an unknown interior
    // Verified by leaving the bottom row unknown
    #[test]
    fn test_new_grid_layout() {
        let grid = TileGrid::new(6, 4).expect("valid dimensions");
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.height(), 4);
        for y in 0..4 {
            for x in 0..6 {
                let expected = if grid.is_border(x, y) { W } else { U };
                assert_eq!(grid.tile_at(x, y), expected, "cell ({x}, {y})");
            }
        }
        assert_eq!(grid.unknown_count(), 4 * 2);
        assert_eq!(grid.tile_at(6, 0), W);
        assert_eq!(grid.tile_at(100, 100), W);
    }

    // Tests dimensions outside the accepted range are refused
    // Verified by accepting a side of two
    #[test]
    fn test_dimension_limits() {
        assert!(validate_dimensions(3, 3).is_ok());
        assert!(validate_dimensions(4096, 3).is_ok());
        for (width, height) in [(2, 5), (5, 0), (4097, 5)] {
            assert!(matches!(
                TileGrid::new(width, height),
                Err(AlgorithmError::InvalidDimensions { .. })
            ));
        }
    }

    // Tests writes are limited to interior cells and concrete tiles
    // Verified by allowing writes onto the border
    #[test]
    fn test_set_tile_rules() {
        let mut grid = TileGrid::new(4, 4).expect("valid dimensions");
        grid.set_tile(1, 2, E).expect("interior cell");
        assert_eq!(grid.tile_at(1, 2), E);

        assert!(matches!(
            grid.set_tile(0, 1, E),
            Err(AlgorithmError::InvalidPosition { .. })
        ));
        assert!(matches!(
            grid.set_tile(9, 1, E),
            Err(AlgorithmError::InvalidPosition { .. })
        ));
        assert!(matches!(
            grid.set_tile(2, 2, U),
            Err(AlgorithmError::InvalidParameter { .. })
        ));
        assert_eq!(grid.tile_at(2, 2), U);
    }

    // Tests border neighbours read as walls or wildcards depending on policy
    // Verified by ignoring the border policy
    #[test]
    fn test_kernel_at_border_policy() {
        let mut grid = TileGrid::new(4, 4).expect("valid dimensions");
        grid.set_tile(2, 2, E).expect("interior cell");

        assert_eq!(
            grid.kernel_at([1, 1], BorderMatching::Wall),
            [W, W, W, W, U, W, U, E]
        );
        assert_eq!(
            grid.kernel_at([1, 1], BorderMatching::Wildcard),
            [U, U, U, U, U, U, U, E]
        );
    }

    // Tests kernels requested at the grid edge treat missing cells per policy
    // Verified by reading missing cells as Empty
    #[test]
    fn test_kernel_at_outside_cells() {
        let grid = TileGrid::new(3, 3).expect("valid dimensions");
        assert_eq!(
            grid.kernel_at([0, 0], BorderMatching::Wall),
            [W, W, W, W, W, W, W, U]
        );
        assert_eq!(
            grid.kernel_at([0, 0], BorderMatching::Wildcard),
            [U, U, U, U, U, U, U, U]
        );
    }

    // Tests only unknown interior neighbours are reported
    // Verified by including border neighbours
    #[test]
    fn test_unknown_neighbors() {
        let mut grid = TileGrid::new(5, 5).expect("valid dimensions");
        grid.set_tile(2, 1, W).expect("interior cell");
        let neighbors = grid.unknown_neighbors([1, 1]);
        assert_eq!(neighbors, vec![[1, 2], [2, 2]]);
    }

    // Tests interior positions run row-major and keys round-trip
    // Verified by iterating column-major
    #[test]
    fn test_interior_positions_and_keys() {
        let grid = TileGrid::new(4, 4).expect("valid dimensions");
        let positions: Vec<[usize; 2]> = grid.interior_positions().collect();
        assert_eq!(positions, vec![[1, 1], [2, 1], [1, 2], [2, 2]]);

        for position in positions {
            assert_eq!(grid.decode(grid.encode(position)), position);
        }
        assert_eq!(grid.encode([3, 2]), 11);
    }

    // Tests the frozen grid exposes the same tiles and renders them
    // Verified by rendering columns as lines
    #[test]
    fn test_freeze_and_render() {
        let mut grid = TileGrid::new(4, 3).expect("valid dimensions");
        grid.set_tile(1, 1, E).expect("interior cell");
        grid.set_tile(2, 1, W).expect("interior cell");
        let frozen = grid.freeze();

        assert_eq!(frozen.to_ascii(), "####\n#.##\n####\n");
        assert_eq!(frozen.to_string(), frozen.to_ascii());
        assert_eq!(frozen.count(E), 1);
        assert_eq!(frozen.count(W), 11);
        assert_eq!(frozen.rows().count(), 3);
        assert_eq!(frozen.view().dim(), (3, 4));
        assert!(frozen.is_border(3, 1));
        assert!(!frozen.is_border(1, 1));
    }

    // Tests world positions resolve to tiles and outside positions are solid
    // Verified by returning Empty outside the grid
    #[test]
    fn test_tile_at_world() {
        let mut grid = TileGrid::new(3, 3).expect("valid dimensions");
        grid.set_tile(1, 1, E).expect("interior cell");
        let frozen = grid.freeze();
        let scale = CellScale::new(10.0, 10.0).expect("positive sides");

        assert_eq!(frozen.tile_at_world([15.0f64, 12.5], &scale), E);
        assert_eq!(frozen.tile_at_world([5.0f64, 5.0], &scale), W);
        assert_eq!(frozen.tile_at_world([-1.0f64, 15.0], &scale), W);
        assert_eq!(frozen.tile_at_world([95.0f64, 15.0], &scale), W);
    }
}
