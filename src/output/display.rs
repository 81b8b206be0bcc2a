//! Display functions for command results

use super::formatters::{columns, format_ladder, format_path, render_board};
use crate::commands::{CheckResult, FindResult, LadderResult, NeighborsResult, ScoreResult, WordsResult};
use crate::core::Board;
use colored::Colorize;

fn header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print the board grid
pub fn print_board(board: &Board) {
    header(&format!("BOARD {0}×{0}", board.size()));
    println!();
    print!("{}", render_board(board, &[]));
}

/// Print where a word was found
pub fn print_find_result(result: &FindResult) {
    header(&format!("FIND: {}", result.word.to_uppercase()));
    println!();
    print!("{}", render_board(&result.board, &result.path));
    println!();

    if result.found() {
        println!("{}", "✅ On the board".green().bold());
        println!("   Cells: {:?}", result.path);
        println!("   Path:  {}", format_path(&result.board, &result.path));
    } else {
        println!("{}", "❌ Not on the board".red().bold());
    }
}

/// Print every scorable word
pub fn print_words_result(result: &WordsResult) {
    header(&format!("SCORABLE WORDS (length ≥ {})", result.min_length));

    if result.words.is_empty() {
        println!("\n   {}", "No scorable words".yellow());
        return;
    }

    let words: Vec<&String> = result.words.iter().collect();
    println!();
    for row in columns(&words, 6) {
        println!("   {row}");
    }
    println!(
        "\n📊 {} words, {} points",
        result.words.len().to_string().bright_yellow().bold(),
        result.total_score.to_string().bright_yellow().bold()
    );
}

/// Print the score of a submitted word list
pub fn print_score_result(result: &ScoreResult) {
    header(&format!("SCORE (length ≥ {})", result.min_length));
    println!();

    for entry in &result.entries {
        let points = if entry.points > 0 {
            format!("+{}", entry.points).green()
        } else {
            "0".bright_black()
        };
        println!("   {:<16} {points}", entry.word.to_uppercase());
    }
    println!(
        "\n   Total: {}",
        result.total.to_string().bright_yellow().bold()
    );
}

/// Print a shortest ladder
pub fn print_ladder_result(result: &LadderResult) {
    header(&format!(
        "LADDER: {} → {}",
        result.start.to_uppercase(),
        result.end.to_uppercase()
    ));
    println!();

    match result.steps() {
        Some(steps) => {
            println!("   {}", format_ladder(&result.ladder).bright_yellow());
            println!(
                "\n{}",
                format!("✅ {} rungs, {steps} changes", result.ladder.len())
                    .green()
                    .bold()
            );
        }
        None => println!("{}", "❌ No ladder exists".red().bold()),
    }
}

/// Print the neighbours of a word
pub fn print_neighbors_result(result: &NeighborsResult) {
    header(&format!("NEIGHBORS: {}", result.word.to_uppercase()));
    if !result.is_word {
        println!("\n   {}", "(not in the word list)".yellow());
    }

    if result.neighbors.is_empty() {
        println!("\n   {}", "No neighbors".yellow());
        return;
    }

    println!();
    for row in columns(&result.neighbors, 8) {
        println!("   {row}");
    }
    println!("\n📊 {} neighbors", result.neighbors.len());
}

/// Print a rung-by-rung ladder check
pub fn print_check_result(result: &CheckResult) {
    header("LADDER CHECK");
    println!();

    for (i, rung) in result.rungs.iter().enumerate() {
        let word_mark = if rung.is_word { "word".green() } else { "not a word".red() };
        let step = match (i, rung.distance) {
            (0, _) => String::new(),
            (_, Some(1)) => format!("{}", "1 change".green()),
            (_, Some(d)) => format!("{}", format!("{d} changes").red()),
            (_, None) => format!("{}", "length differs".red()),
        };
        println!("   {:<12} {word_mark:<12} {step}", rung.word.to_uppercase());
    }

    println!();
    if result.valid {
        println!("{}", "✅ Valid word ladder".green().bold());
    } else {
        println!("{}", "❌ Not a word ladder".red().bold());
    }
}
