pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

pub const EXPECTED_SCORES_CSV_PATH: &str = "tests/test_data_files/expected_scores.csv";

pub const SCORE_TOLERANCE: f64 = 1e-9;
