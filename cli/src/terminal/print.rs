use colored::*;
use tracing::info;
use trivia_common::config::Config;
use trivia_core::api::ApiResponse;

pub const PRINT_TARGET: &str = "trivia::print";
pub const TOTAL_WIDTH: usize = 64;

pub fn print(msg: &str) {
    info!(target: "trivia::print", raw_msg = msg);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn status(response: &ApiResponse) {
    let code: ColoredString = match response.status {
        200..=299 => response.status.to_string().green().bold(),
        400..=499 => response.status.to_string().yellow().bold(),
        _ => response.status.to_string().red().bold(),
    };
    let prefix: ColoredString = ">".bright_black();
    print(&format!("{} status {}", prefix, code));
}

/// Writes the status to the log and the body to stdout.
pub fn response(response: &ApiResponse, cfg: &Config) {
    if cfg.quiet == 0 {
        status(response);
    }
    let body = if cfg.compact {
        response.body.to_string()
    } else {
        serde_json::to_string_pretty(&response.body).unwrap_or_else(|_| response.body.to_string())
    };
    println!("{body}");
}
