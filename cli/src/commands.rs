pub mod request;
pub mod seed;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgAction, Parser, Subcommand};
use trivia_common::config::{Config, DEFAULT_STORE_PATH};
use trivia_common::models::{CategoryId, QuestionId};
use trivia_common::pagination::QUESTIONS_PER_PAGE;
use trivia_core::api::Method;

#[derive(Parser)]
#[command(name = "trivia")]
#[command(about = "Browse, edit and play a trivia question catalog.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON document backing the catalog
    #[arg(long, global = true, default_value = DEFAULT_STORE_PATH)]
    pub store: PathBuf,

    /// Questions per page
    #[arg(long, global = true, default_value_t = QUESTIONS_PER_PAGE)]
    pub page_size: usize,

    /// Less output (-q hides headers, -qq also hides info logs)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Print response bodies on one line
    #[arg(long, global = true)]
    pub compact: bool,
}

/// Categories a quiz round draws from, as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(CategoryId),
}

impl FromStr for QuizScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse()
            .map(Self::Category)
            .map_err(|_| format!("expected a category id or `all`, got `{s}`"))
    }
}

impl fmt::Display for QuizScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Category(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all categories
    #[command(alias = "c")]
    Categories,
    /// List one page of questions
    #[command(alias = "q")]
    Questions {
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
    },
    /// Delete a question
    #[command(alias = "d")]
    Delete { id: String },
    /// Add a question (every field is required)
    Create {
        #[arg(long)]
        question: Option<String>,
        #[arg(long)]
        answer: Option<String>,
        #[arg(long)]
        difficulty: Option<i32>,
        #[arg(long)]
        category: Option<CategoryId>,
    },
    /// Search question text
    #[command(alias = "s")]
    Search { term: Option<String> },
    /// List the questions of a category
    CategoryQuestions { id: String },
    /// Draw the next question of a quiz round
    Quiz {
        /// Category id, or `all` to play across every category
        #[arg(long, default_value_t = QuizScope::All)]
        category: QuizScope,
        /// Display label sent along with --category
        #[arg(long, default_value = "")]
        label: String,
        /// Ids already played this round
        #[arg(long, value_delimiter = ',')]
        previous: Vec<QuestionId>,
    },
    /// Send a raw request, e.g. `request GET /questions?page=2`
    Request {
        method: Method,
        target: String,
        /// JSON request body
        #[arg(short, long)]
        data: Option<String>,
    },
    /// Write the built-in questions to the store
    Seed {
        /// Replace an existing store
        #[arg(long)]
        force: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            store_path: self.store.clone(),
            page_size: self.page_size,
            quiet: self.quiet,
            compact: self.compact,
        }
    }
}
