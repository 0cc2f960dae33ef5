//! Tests for command-line parsing and the generation runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use dungeontile::io::cli::{Cli, run};
    use dungeontile::io::configuration::{
        DEFAULT_CELL_PIXELS, DEFAULT_HEIGHT, DEFAULT_LOG_LEVEL, DEFAULT_SEED, DEFAULT_WIDTH,
    };
    use dungeontile::{AlgorithmError, BorderMatching, TileType};
    use std::path::PathBuf;
    use std::time::Duration;

    // Tests parsing with no arguments uses the defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.height, DEFAULT_HEIGHT);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.cell_pixels, DEFAULT_CELL_PIXELS);
        assert_eq!(cli.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(cli.seed_position(), None);
        assert!(cli.output.is_none());
        assert!(cli.visualize.is_none());
        assert!(cli.should_show_progress());
        assert!(cli.should_print_ascii());
    }

    // Tests parsing with all available arguments
    // Verified by renaming long flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "--width",
            "12",
            "--height",
            "8",
            "--seed",
            "123",
            "--seed-x",
            "3",
            "--seed-y",
            "4",
            "--max-steps",
            "50",
            "--timeout-ms",
            "250",
            "--output",
            "out.png",
            "--visualize",
            "out.gif",
            "--cell-pixels",
            "4",
            "--wildcard-border",
            "--quiet",
            "--no-ascii",
            "--log-level",
            "debug",
        ]);

        assert_eq!(cli.width, 12);
        assert_eq!(cli.height, 8);
        assert_eq!(cli.output, Some(PathBuf::from("out.png")));
        assert_eq!(cli.visualize, Some(PathBuf::from("out.gif")));
        assert_eq!(cli.cell_pixels, 4);
        assert_eq!(cli.log_level, "debug");
        assert!(!cli.should_show_progress());
        assert!(!cli.should_print_ascii());

        let config = cli.generator_config();
        assert_eq!(config.seed_position, Some([3, 4]));
        assert_eq!(config.rng_seed, 123);
        assert_eq!(config.border, BorderMatching::Wildcard);
        assert_eq!(config.budget.max_steps, Some(50));
        assert_eq!(config.budget.deadline, Some(Duration::from_millis(250)));
    }

    // Tests short flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "-W", "10", "-H", "6", "-s", "9", "-q", "-p", "2"]);
        assert_eq!(cli.width, 10);
        assert_eq!(cli.height, 6);
        assert_eq!(cli.seed, 9);
        assert_eq!(cli.cell_pixels, 2);
        assert!(cli.quiet);
        assert_eq!(cli.generator_config().border, BorderMatching::Wall);
    }

    // Tests a single seed coordinate is completed from the centre
    // Verified by ignoring a lone seed coordinate
    #[test]
    fn test_partial_seed_position() {
        let only_x = Cli::parse_from(["program", "-W", "11", "-H", "7", "--seed-x", "2"]);
        assert_eq!(only_x.seed_position(), Some([2, 3]));

        let only_y = Cli::parse_from(["program", "-W", "11", "-H", "7", "--seed-y", "5"]);
        assert_eq!(only_y.seed_position(), Some([5, 5]));
    }

    // Tests a run writes both requested files
    // Verified by skipping the PNG export
    #[test]
    fn test_run_writes_outputs() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let png = dir.path().join("nested").join("grid.png");
        let gif = dir.path().join("grid.gif");

        let cli = Cli::parse_from([
            "program",
            "-W",
            "9",
            "-H",
            "7",
            "-p",
            "3",
            "--wildcard-border",
            "--quiet",
            "--output",
            png.to_str().expect("utf-8 path"),
            "--visualize",
            gif.to_str().expect("utf-8 path"),
        ]);

        let grid = run(&cli).expect("wildcard border never contradicts");
        assert_eq!(grid.width(), 9);
        assert_eq!(grid.height(), 7);
        assert_eq!(grid.count(TileType::Unknown), 0);

        assert_eq!(
            image::image_dimensions(&png).expect("readable png"),
            (27, 21)
        );
        assert!(gif.exists());
    }

    // Tests invalid dimensions fail before any work is done
    // Verified by validating dimensions after building the catalog
    #[test]
    fn test_run_rejects_invalid_dimensions() {
        let cli = Cli::parse_from(["program", "-W", "2", "-H", "9", "--quiet"]);
        let result = run(&cli);
        assert!(matches!(
            result,
            Err(AlgorithmError::InvalidDimensions { width: 2, .. })
        ));
    }
}
