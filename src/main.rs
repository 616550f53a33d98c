use keyword_sniffer::{extract_keywords, StopWordSet};
use log::error;
use std::io::{self, Read};

fn main() {
    // Initialize the logger
    env_logger::init();

    // Read the input text from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    let stop_words = StopWordSet::english();

    for scored_candidate in extract_keywords(&input, &stop_words) {
        println!("{}: {:.2}", scored_candidate.candidate, scored_candidate.score);
    }
}
