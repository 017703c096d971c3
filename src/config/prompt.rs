use crate::utils::error::{RestaurantError, Result};
use std::io::{BufRead, Write};

/// Line-oriented prompts for values missing from the command line and config file.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn ask(&mut self, field: &str, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // 輸入已結束（例如管線輸入不足）
            return Err(RestaurantError::MissingConfigError {
                field: field.to_string(),
            });
        }
        Ok(line.trim().to_string())
    }

    pub fn ask_f64(&mut self, field: &str, question: &str) -> Result<f64> {
        let answer = self.ask(field, question)?;
        answer
            .parse::<f64>()
            .map_err(|e| RestaurantError::InvalidConfigValueError {
                field: field.to_string(),
                value: answer.clone(),
                reason: format!("Not a number: {}", e),
            })
    }
}

pub fn stdin_prompter() -> Prompter<std::io::StdinLock<'static>, std::io::Stdout> {
    Prompter::new(std::io::stdin().lock(), std::io::stdout())
}
