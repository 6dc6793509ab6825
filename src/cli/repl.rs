// Interactive chat loop

use anyhow::Result;
use crossterm::{
    cursor,
    style::Stylize,
    terminal::{self, Clear, ClearType},
    ExecutableCommand,
};
use std::io::{self, IsTerminal, Write};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::session::{GenerationParameters, TurnProcessor};

use super::commands::{handle_command, Command};

/// Get current terminal width, or default to 80 if not a TTY
fn terminal_width() -> usize {
    terminal::size().map(|(w, _)| w as usize).unwrap_or(80)
}

pub struct Repl {
    config: Config,
    processor: TurnProcessor,
    is_interactive: bool,
}

impl Repl {
    pub fn new(config: Config, processor: TurnProcessor) -> Self {
        // Detect if we're in interactive mode (stdout is a TTY)
        let is_interactive = io::stdout().is_terminal();

        Self {
            config,
            processor,
            is_interactive,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        if self.is_interactive {
            println!("gemchat v{} - Gemini chat with prompt-engineering controls", env!("CARGO_PKG_VERSION"));
            println!("Model: {} ✓", self.config.model);
            println!();
            println!("Ready. Type /help for commands.");
            self.print_status_line();
        } else {
            eprintln!("# gemchat v{} - non-interactive mode", env!("CARGO_PKG_VERSION"));
        }

        loop {
            if self.is_interactive {
                println!();
                self.print_separator();
                print!("> ");
            }
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break; // EOF
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            if self.is_interactive {
                self.print_separator();
                println!();
            }

            // Check for slash commands
            if let Some(command) = Command::parse(input) {
                match command {
                    Command::Quit => {
                        if self.is_interactive {
                            println!("Goodbye!");
                        }
                        break;
                    }
                    _ => {
                        let output =
                            handle_command(command, &mut self.config, self.processor.log())?;
                        println!("{}", output);
                        continue;
                    }
                }
            }

            // Process the submission
            match self.process_submission(input).await {
                Ok(response) => {
                    println!("{}", response);
                    if self.is_interactive {
                        println!();
                        self.print_status_line();
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    if self.is_interactive {
                        println!();
                        self.print_status_line();
                    }
                }
            }
        }

        Ok(())
    }

    /// Build fresh parameters from the active settings, run one turn, and
    /// apply the optional presentational pause before rendering.
    async fn process_submission(&mut self, prompt: &str) -> Result<String> {
        let params = self.parameters_for_turn();
        params.validate()?;

        let start_time = Instant::now();

        if self.is_interactive {
            print!("{}", "Thinking...".dark_grey());
            io::stdout().flush()?;
        }

        let result = self
            .processor
            .process(prompt, &params, &self.config.api_key)
            .await;

        if self.is_interactive {
            io::stdout()
                .execute(cursor::MoveToColumn(0))?
                .execute(Clear(ClearType::CurrentLine))?;
        }

        match result {
            Ok(response) => {
                if self.config.response_delay_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(self.config.response_delay_ms)).await;
                }
                if self.is_interactive {
                    println!("✓ Received response ({}ms)", start_time.elapsed().as_millis());
                }
                Ok(response)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Parameters are recreated from the active settings on every turn
    fn parameters_for_turn(&self) -> GenerationParameters {
        GenerationParameters {
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            max_tokens: self.config.max_tokens,
            strategy: self.config.strategy,
            example_text: self
                .config
                .strategy
                .uses_examples()
                .then(|| self.config.example_text.clone()),
        }
    }

    /// Print separator line that adapts to terminal width
    fn print_separator(&self) {
        let width = terminal_width();
        println!("{}", "─".repeat(width));
    }

    /// Print the active parameters below the prompt (interactive mode only)
    fn print_status_line(&self) {
        if !self.is_interactive {
            return;
        }

        let status = format!(
            "Model: {} | Temp: {:.2} | Top-p: {:.2} | Max tokens: {} | Strategy: {} | Turns: {}",
            self.config.model,
            self.config.temperature,
            self.config.top_p,
            self.config.max_tokens,
            self.config.strategy.as_str(),
            self.processor.log().turn_count()
        );

        // Truncate to terminal width if needed
        let width = terminal_width();
        let truncated = if status.len() > width {
            format!("{}...", &status[..width.saturating_sub(3)])
        } else {
            status
        };

        println!("{}", truncated.dark_grey());
    }
}
