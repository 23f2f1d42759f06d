//! Character driven parsing.
//!
//! A [`StringParser`] is a state machine, the provided [`StringParser::parse`]
//! feeds it one character at a time and attaches position, source text and state
//! to the first failure.
use std::fmt;

use crate::{
    common::{span, verbose},
    error::ConversionError,
};

/// State of a [`StringParser`], reported on failure.
pub trait ParsingState: fmt::Debug {
    /// What the parser builds, used in error messages.
    const SUBJECT: &'static str;
}

/// A state machine over the characters of a string.
pub trait StringParser {
    /// Grammar position and partially built value.
    type State: ParsingState;

    /// Parsed value.
    type Output;

    /// Error with parse context.
    type Error;

    /// State before the first character.
    fn initial_state(&self) -> Self::State;

    /// Consume one character.
    fn continue_parsing(&self, ch: char, state: &Self::State) -> Result<Self::State, ConversionError>;

    /// Produce the value at end of input.
    fn finish_parsing(&self, state: &Self::State) -> Result<Self::Output, ConversionError>;

    /// Attach context to an error, `state` is the state before the failing step.
    fn wrap_error(
        &self,
        error: ConversionError,
        at: usize,
        text: &str,
        state: Self::State,
    ) -> Self::Error;

    /// Run the machine over `text`.
    ///
    /// The first failing step stops the parse, nothing is backtracked.
    fn parse(&self, text: &str) -> Result<Self::Output, Self::Error> {
        span!("parse", subject = <Self::State as ParsingState>::SUBJECT, text);

        let mut state = self.initial_state();

        for (i, ch) in text.char_indices() {
            match self.continue_parsing(ch, &state) {
                Ok(next) => {
                    verbose!(?ch, state = ?next);
                    state = next;
                }
                Err(err) => return Err(self.wrap_error(err, i, text, state)),
            }
        }

        match self.finish_parsing(&state) {
            Ok(output) => Ok(output),
            Err(err) => Err(self.wrap_error(err, text.len(), text, state)),
        }
    }
}

