//! Interactive play mode
//!
//! Text-based loop where the program guesses a number the user is holding
//! and the user scores each guess.

use crate::core::Feedback;
use crate::solver::{CandidatePool, Picker};
use std::io::{self, Write};

/// Run the interactive play mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no
/// candidate can be proposed.
pub fn run_play<P: Picker>(low: u32, high: u32, picker: &mut P) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Bulls and Cows - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a 4-digit number in [{low}, {high}] with no repeated digit.");
    println!("I'll guess it; after each guess, score me:\n");
    println!("  - bulls: digits in the right place");
    println!("  - cows:  digits we share, counting the correctly placed ones too");
    println!("    (so a full match is '4 4')\n");
    println!("Enter the two counts like '1 2', or type 'win' if I got it.");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut pool = CandidatePool::generate(low, high);
    let mut turn = 1;

    loop {
        if pool.is_empty() {
            println!("\n❌ No candidates remain! Some feedback must have been off.");

            match get_user_input("Type 'new' to restart or 'quit' to exit")?
                .to_lowercase()
                .as_str()
            {
                "new" | "n" => {
                    pool = CandidatePool::generate(low, high);
                    turn = 1;
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let guess = *picker.pick(pool.codes()).ok_or("No candidate available")?;

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {} candidates remaining", pool.len());
        println!("────────────────────────────────────────────────────────────");
        println!("\n🎲 My guess: {guess}\n");

        // Show the field once it narrows down
        if pool.len() <= 10 {
            println!("Remaining candidates:");
            for candidate in pool.codes().iter().take(10) {
                println!("  • {candidate}");
            }
            println!();
        }

        let feedback = loop {
            let input =
                get_user_input("Enter feedback (bulls cows, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => break None,
                "win" | "correct" | "yes" | "solved" => break Some(Feedback::EXACT),
                _ => {
                    if let Some(feedback) = Feedback::from_str(&input) {
                        break Some(feedback);
                    }
                    println!("❌ Invalid feedback! Enter bulls then cows, like '1 2'.\n");
                }
            }
        };

        match feedback {
            None => {
                pool = CandidatePool::generate(low, high);
                turn = 1;
                println!("\n🔄 New game started!\n");
            }
            Some(feedback) if feedback.is_exact() => {
                println!("\n🎉 Got it: {guess} in {turn} {}!\n", guess_noun(turn));

                match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => {
                        pool = CandidatePool::generate(low, high);
                        turn = 1;
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
            Some(feedback) => {
                pool.retain_consistent(guess, feedback);
                turn += 1;
            }
        }
    }
}

const fn guess_noun(turn: usize) -> &'static str {
    if turn == 1 { "guess" } else { "guesses" }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
