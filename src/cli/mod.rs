mod commands;
pub use commands::*;

use crate::errors::{AppError, Result};
use colored::Colorize;
use std::io::{self, Write};

pub struct CLI;

impl CLI {
    pub fn print_header() {
        println!("{}", "=".repeat(50).bright_blue());
        println!("{}", "    🛂 Visa Console - Administrative CLI    ".bright_yellow().bold());
        println!("{}", "=".repeat(50).bright_blue());
        println!();
    }

    pub fn print_success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    pub fn print_error(message: &str) {
        println!("{} {}", "❌".red(), message.red());
    }

    pub fn print_info(message: &str) {
        println!("{} {}", "ℹ️".blue(), message.blue());
    }

    pub fn get_input(prompt: &str) -> Result<String> {
        print!("{} ", prompt.cyan());
        io::stdout()
            .flush()
            .map_err(|e| AppError::InternalError(format!("IO error: {}", e)))?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| AppError::InternalError(format!("Failed to read input: {}", e)))?;

        Ok(input.trim().to_string())
    }

    pub fn get_password(prompt: &str) -> Result<String> {
        print!("{} ", prompt.cyan());
        io::stdout()
            .flush()
            .map_err(|e| AppError::InternalError(format!("IO error: {}", e)))?;

        rpassword::read_password()
            .map_err(|e| AppError::InternalError(format!("Failed to read input: {}", e)))
    }

    pub fn confirm_action(prompt: &str) -> Result<bool> {
        loop {
            let input = Self::get_input(&format!("{} (y/n):", prompt))?;
            match input.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => Self::print_error("Please enter 'y' for yes or 'n' for no"),
            }
        }
    }

    /// Numbered pick from a fixed option set. Empty input keeps the
    /// current value when there is one.
    pub fn select_option(label: &str, options: &[&str], current: &str) -> Result<String> {
        println!("{}", format!("{}:", label).cyan());
        for (index, option) in options.iter().enumerate() {
            if *option == current {
                println!("  {}. {} {}", index + 1, option, "(current)".yellow());
            } else {
                println!("  {}. {}", index + 1, option);
            }
        }
        loop {
            let input = Self::get_input("Select an option:")?;
            if input.is_empty() && !current.is_empty() {
                return Ok(current.to_string());
            }
            if let Ok(choice) = input.parse::<usize>() {
                if choice >= 1 && choice <= options.len() {
                    return Ok(options[choice - 1].to_string());
                }
            }
            Self::print_error("Please enter one of the listed numbers");
        }
    }

    pub fn print_help() {
        println!("\n{}", "Available Commands:".cyan().bold());
        println!("  list");
        println!("    Show all visa records");
        println!();
        println!("  show <id>");
        println!("    Show a single visa record");
        println!();
        println!("  add");
        println!("    Add a new visa interactively");
        println!();
        println!("  edit <id>");
        println!("    Edit a visa interactively");
        println!();
        println!("  delete <id>");
        println!("    Delete a visa record");
        println!();
        println!("  login / logout");
        println!("    Store or clear the access token");
        println!();
        println!("  help");
        println!("    Show this help message");
        println!();
    }
}
