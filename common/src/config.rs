use std::path::PathBuf;

use crate::pagination::QUESTIONS_PER_PAGE;

pub const DEFAULT_STORE_PATH: &str = "trivia.json";

pub struct Config {
    /// Location of the JSON document backing the catalog.
    ///
    /// Created from the built-in seed when it does not exist yet.
    pub store_path: PathBuf,
    /// Number of questions per page on `GET /questions`.
    pub page_size: usize,
    /// Output verbosity. 0 prints headers, 1 drops them, 2 also silences info logs.
    pub quiet: u8,
    /// Print response bodies on a single line.
    pub compact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            page_size: QUESTIONS_PER_PAGE,
            quiet: 0,
            compact: false,
        }
    }
}
