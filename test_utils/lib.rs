#![allow(dead_code)]

use keyword_sniffer::{
    extract_keywords_with_custom_config, CandidateText, KeywordExtractorConfig, KeywordScore,
    RankedResult, StopWordSet,
};
use std::error::Error;
use std::{fs, path::Path};
pub mod constants;

/// A single row of the expected-scores table.
#[derive(Debug, Clone)]
pub struct ExpectedScore {
    pub file_name: String,
    pub candidate: CandidateText,
    pub score: KeywordScore,
}

fn get_directive_values(file_path: &Path, directive: &str) -> Vec<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            line.strip_prefix(directive)
                .map(|value| value.trim().to_string())
        })
        .collect()
}

// Helper function to get the expected leading candidates, in rank order
pub fn get_expected_candidates(file_path: &Path) -> Vec<CandidateText> {
    get_directive_values(file_path, "EXPECTED:")
}

// Helper function to get candidates which must not be extracted
pub fn get_unexpected_candidates(file_path: &Path) -> Vec<CandidateText> {
    get_directive_values(file_path, "UNEXPECTED:")
}

// Strips `EXPECTED:`, `UNEXPECTED:` and `COMMENT:` lines, leaving the document text
pub fn get_document_text(file_path: &Path) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    raw_text
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !line.starts_with("EXPECTED:")
                && !line.starts_with("UNEXPECTED:")
                && !line.starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Loads `file,candidate,score` rows.
pub fn load_expected_scores(csv_path: &Path) -> Result<Vec<ExpectedScore>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(csv_path)?;
    let mut expected_scores = Vec::new();

    for record in reader.records() {
        let record = record?;

        if record.len() != 3 {
            return Err(format!("Invalid row: {:?}", record).into());
        }

        expected_scores.push(ExpectedScore {
            file_name: record[0].to_string(),
            candidate: record[1].to_string(),
            score: record[2].trim().parse()?,
        });
    }

    Ok(expected_scores)
}

pub fn candidate_texts(ranked_result: &RankedResult) -> Vec<&str> {
    ranked_result
        .iter()
        .map(|scored_candidate| scored_candidate.candidate.as_str())
        .collect()
}

// Helper function to run the test for a fixture file
pub fn run_test_for_file(
    test_file_path: &Path,
    keyword_extractor_config: &KeywordExtractorConfig,
    stop_words: &StopWordSet,
) -> RankedResult {
    let text = get_document_text(test_file_path);

    let ranked_result =
        extract_keywords_with_custom_config(keyword_extractor_config, &text, stop_words);
    let actual_candidates = candidate_texts(&ranked_result);

    let expected_candidates = get_expected_candidates(test_file_path);
    let unexpected_candidates = get_unexpected_candidates(test_file_path);

    assert!(
        actual_candidates.len() >= expected_candidates.len(),
        "{:?} - Expected at least {} candidates but found {}: {:?}",
        test_file_path,
        expected_candidates.len(),
        actual_candidates.len(),
        actual_candidates
    );

    for (rank, expected_candidate) in expected_candidates.iter().enumerate() {
        assert_eq!(
            actual_candidates[rank], expected_candidate,
            "{:?} - Rank {} mismatch. Found: {:?}",
            test_file_path, rank, actual_candidates
        );
    }

    for unexpected_candidate in &unexpected_candidates {
        assert!(
            !actual_candidates.contains(&unexpected_candidate.as_str()),
            "{:?} - Unexpected candidate {:?} found in results.",
            test_file_path,
            unexpected_candidate
        );
    }

    ranked_result
}
