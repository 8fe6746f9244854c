//! Interactive menu session.
//!
//! The session owns one trie for its whole lifetime and drives it from a
//! line-oriented input stream. Persistence failures are shown to the user and
//! reported, and the session keeps going; only the exit choice or the end of
//! input ends it.

mod menu;

pub use menu::{InvalidChoice, MenuChoice, MENU};

use crate::data_structures::WordTrie;
use crate::error::{
    ErrorContext, ErrorReporter, StorageError, TracingErrorReporter, WordTrieResult,
};
use crate::storage::WordStore;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{debug, info};

/// A menu-driven session over a trie and a word store.
#[derive(Debug)]
pub struct Session<R, W> {
    trie: WordTrie,
    store: WordStore,
    input: R,
    output: W,
    reporter: Arc<dyn ErrorReporter>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty trie that reports errors through tracing.
    pub fn new(store: WordStore, input: R, output: W) -> Self {
        Self::with_trie(WordTrie::new(), store, input, output)
    }

    /// Creates a session that starts from an existing trie.
    pub fn with_trie(trie: WordTrie, store: WordStore, input: R, output: W) -> Self {
        Self {
            trie,
            store,
            input,
            output,
            reporter: Arc::new(TracingErrorReporter),
        }
    }

    /// Replaces the error reporter.
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Returns the trie the session operates on.
    pub fn trie(&self) -> &WordTrie {
        &self.trie
    }

    /// Consumes the session, returning the trie and the output sink.
    pub fn into_parts(self) -> (WordTrie, W) {
        (self.trie, self.output)
    }

    /// Runs the menu loop until the user exits or input runs out.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - When the session ended normally.
    /// * `Err(WordTrieError::Io)` - If the terminal streams failed.
    pub fn run(&mut self) -> WordTrieResult<()> {
        info!("Session started");
        loop {
            write!(self.output, "{MENU}\nEnter your choice: \n")?;
            self.output.flush()?;

            let Some(token) = self.next_token()? else {
                break;
            };

            let choice = match token.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };
            debug!(%choice, "Menu choice");

            let keep_going = match choice {
                MenuChoice::Insert => self.insert()?,
                MenuChoice::Search => self.search()?,
                MenuChoice::Delete => self.delete()?,
                MenuChoice::Display => self.display()?,
                MenuChoice::Save => self.save()?,
                MenuChoice::Load => self.load()?,
                MenuChoice::Exit => false,
            };
            if !keep_going {
                break;
            }
        }
        info!(words = self.trie.len(), "Session ended");
        Ok(())
    }

    fn insert(&mut self) -> WordTrieResult<bool> {
        let Some(word) = self.prompt("Enter the word to insert: ")? else {
            return Ok(false);
        };
        self.trie.insert(&word);
        writeln!(self.output, "{word} is inserted into trie.")?;
        Ok(true)
    }

    fn search(&mut self) -> WordTrieResult<bool> {
        let Some(word) = self.prompt("Enter the word to search: ")? else {
            return Ok(false);
        };
        if self.trie.search(&word) {
            writeln!(self.output, "{word} is found in the Trie.")?;
        } else {
            writeln!(self.output, "{word} is not found in the Trie.")?;
        }
        Ok(true)
    }

    fn delete(&mut self) -> WordTrieResult<bool> {
        let Some(word) = self.prompt("Enter the word to delete: ")? else {
            return Ok(false);
        };
        if self.trie.search(&word) {
            self.trie.delete(&word);
            writeln!(self.output, "{word} is deleted from the Trie.")?;
        } else {
            writeln!(self.output, "{word} is not found in the Trie.")?;
        }
        Ok(true)
    }

    fn display(&mut self) -> WordTrieResult<bool> {
        if self.trie.len() == 0 {
            writeln!(self.output, "Trie is empty.")?;
            return Ok(true);
        }
        for word in self.trie.words() {
            writeln!(self.output, "{word}")?;
        }
        Ok(true)
    }

    fn save(&mut self) -> WordTrieResult<bool> {
        let Some(stem) = self.prompt("Enter the filename(e.g. file): ")? else {
            return Ok(false);
        };
        match self.store.save(&self.trie, &stem) {
            Ok(count) => {
                writeln!(self.output, "Data has been written to file ({count} words).")?
            }
            Err(e) => self.show_failure(e, "save", &stem)?,
        }
        Ok(true)
    }

    fn load(&mut self) -> WordTrieResult<bool> {
        let Some(stem) = self.prompt("Enter the filename(e.g. file): ")? else {
            return Ok(false);
        };
        match self.store.load(&mut self.trie, &stem) {
            Ok(added) => writeln!(self.output, "File has loaded ({added} new words)...")?,
            Err(e) => self.show_failure(e, "load", &stem)?,
        }
        Ok(true)
    }

    fn show_failure(
        &mut self,
        error: StorageError,
        action: &str,
        stem: &str,
    ) -> WordTrieResult<()> {
        writeln!(self.output, "{error}")?;
        let context =
            ErrorContext::new(error, "session").with_details(format!("{action} '{stem}'"));
        self.reporter.report(&context);
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> WordTrieResult<Option<String>> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        self.next_token()
    }

    /// Reads the next whitespace-delimited token, skipping blank lines.
    /// Anything after the token on the same line is discarded.
    fn next_token(&mut self) -> WordTrieResult<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
    }
}
