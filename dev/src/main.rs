//! Prints the phrase split and word statistics behind a ranking, for tuning stop words.

use keyword_sniffer::{KeywordExtractor, StopWordSet, DEFAULT_KEYWORD_EXTRACTOR_CONFIG};
use log::{error, info};
use std::io::{self, Read};

fn main() {
    env_logger::init();

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    let stop_words = StopWordSet::english();
    let extractor = KeywordExtractor::new(DEFAULT_KEYWORD_EXTRACTOR_CONFIG, &stop_words);

    let phrases = extractor.split_candidate_phrases(&input);
    info!("{} candidate phrases", phrases.len());
    for phrase in &phrases {
        println!("phrase: {}", phrase.text());
    }

    let mut word_stats: Vec<_> = extractor.collect_word_stats(&input).into_iter().collect();
    word_stats.sort_by(|a, b| a.0.cmp(&b.0));

    println!("{:<24} {:>5} {:>6} {:>7}", "word", "freq", "degree", "ratio");
    for (word, stats) in word_stats {
        println!(
            "{:<24} {:>5} {:>6} {:>7.3}",
            word,
            stats.frequency,
            stats.degree,
            stats.degree_to_frequency_ratio()
        );
    }

    for scored_candidate in extractor.process_text_doc(&input) {
        println!("{}: {:.2}", scored_candidate.candidate, scored_candidate.score);
    }
}
