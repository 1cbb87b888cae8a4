//! # Interactive User Prompt
//!
//! Collects the customer's name and age before the store opens.
//!
//! The prompt is generic over any [`AsyncBufRead`] / [`AsyncWrite`] pair, so the binary drives
//! it with stdin/stdout and tests drive it with byte slices.
//!
//! ```rust
//! use movie_store::prompt::UserPrompt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let input: &[u8] = b"Ann\nabc\n41\n";
//! let mut prompt = UserPrompt::new(input, Vec::new());
//!
//! let user = prompt.collect_user_info().await.unwrap();
//! assert_eq!((user.name.as_str(), user.age), ("Ann", 41));
//! # }
//! ```

use crate::model::UserCreate;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

pub const NAME_PROMPT: &str = "Enter your name: ";
pub const AGE_PROMPT: &str = "Enter your age: ";
pub const INVALID_AGE: &str = "Invalid age. Please enter a valid number.";

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Input closed before the question was answered")]
    InputClosed,
    #[error("Gave up after {attempts} invalid age entries")]
    TooManyAttempts { attempts: u32 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct UserPrompt<R, W> {
    reader: R,
    writer: W,
    max_age_attempts: Option<u32>,
}

impl<R, W> UserPrompt<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// A prompt that re-asks for the age until it gets a valid one.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            max_age_attempts: None,
        }
    }

    pub fn with_max_age_attempts(mut self, max_age_attempts: Option<u32>) -> Self {
        self.max_age_attempts = max_age_attempts;
        self
    }

    /// Asks for the name, then for the age until it parses as a non-negative integer.
    ///
    /// Every rejected age prints [`INVALID_AGE`] once and asks again.
    pub async fn collect_user_info(&mut self) -> Result<UserCreate, PromptError> {
        let name = self.ask(NAME_PROMPT).await?.trim().to_string();

        let mut invalid = 0;
        let age = loop {
            let answer = self.ask(AGE_PROMPT).await?;
            match answer.trim().parse::<u32>() {
                Ok(age) => break age,
                Err(e) => {
                    debug!(answer = answer.trim(), error = %e, "Rejected age");
                    invalid += 1;
                    self.writer
                        .write_all(format!("{INVALID_AGE}\n").as_bytes())
                        .await?;
                    if self.max_age_attempts.is_some_and(|max| invalid >= max) {
                        self.writer.flush().await?;
                        return Err(PromptError::TooManyAttempts { attempts: invalid });
                    }
                }
            }
        };

        Ok(UserCreate { name, age })
    }

    /// Gives the writer back, e.g. to inspect what a test prompt printed.
    pub fn into_writer(self) -> W {
        self.writer
    }

    async fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        self.writer.write_all(question.as_bytes()).await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line)
    }
}
