//! Interface controller.
//!
//! Holds the form state (input field and results pane text) and runs one
//! analysis per submission. Front ends own the event loop and call
//! [`Controller::submit`]; the controller never knows how it is displayed.

use tracing::{debug, warn};

use crate::analyzer::{AnalysisError, AnalysisResult, Analyzer};
use crate::report;
use crate::toolkit::{LexiconToolkit, Toolkit};

/// Shown when the input field is blank.
pub const EMPTY_INPUT_PROMPT: &str = "Please enter a headline to analyze.";

/// Shown when the analyzer fails.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Could not analyze this input.";

/// Presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Nothing submitted yet.
    Idle,
    /// Showing a result, the prompt, or the failure message.
    Displaying,
}

/// What a submission produced.
#[derive(Debug)]
pub enum Submission {
    /// Blank input; the prompt is displayed and nothing was analyzed.
    Prompted,
    Analyzed(AnalysisResult),
    Failed(AnalysisError),
}

pub struct Controller<T = LexiconToolkit> {
    analyzer: Analyzer<T>,
    input: String,
    display: String,
    state: State,
}

impl<T: Toolkit> Controller<T> {
    pub fn new(analyzer: Analyzer<T>) -> Self {
        Self {
            analyzer,
            input: String::new(),
            display: String::new(),
            state: State::Idle,
        }
    }

    pub fn analyzer(&self) -> &Analyzer<T> {
        &self.analyzer
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Current results pane text.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Analyze the current input and replace the results pane.
    ///
    /// Blank input shows [`EMPTY_INPUT_PROMPT`] without calling the analyzer.
    /// Otherwise the untrimmed input is analyzed. A failed analysis shows
    /// [`ANALYSIS_FAILED_MESSAGE`].
    pub fn submit(&mut self) -> Submission {
        self.state = State::Displaying;

        if self.input.trim().is_empty() {
            debug!("blank headline submitted");
            self.display = EMPTY_INPUT_PROMPT.to_string();
            return Submission::Prompted;
        }

        match self.analyzer.analyze(&self.input) {
            Ok(result) => {
                self.display = report::render_plain(&result);
                Submission::Analyzed(result)
            }
            Err(e) => {
                warn!(error = %e, "headline analysis failed");
                self.display = ANALYSIS_FAILED_MESSAGE.to_string();
                Submission::Failed(e)
            }
        }
    }
}
