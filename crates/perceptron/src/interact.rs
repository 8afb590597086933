//! Interactive query loop.
//!
//! Reads one feature vector per round from a line-based reader, classifies
//! it with a trained model, and writes the verdict. Termination is explicit:
//! end of input, or a `quit`/`exit` entry at any prompt. A non-numeric entry
//! is complained about and the same feature is asked again.

use std::io::{BufRead, Write};

use crate::error::PerceptronError;
use crate::types::{Label, PerceptronModel};

/// Prompt strings and class names for a query session.
#[derive(Debug, Clone)]
pub struct QueryPrompts {
    /// Line printed at the top of every round.
    pub banner: String,
    /// One feature name per model dimension, asked in order.
    pub features: Vec<String>,
    /// Display name for [`Label::Positive`].
    pub positive: String,
    /// Display name for [`Label::Negative`].
    pub negative: String,
}

impl QueryPrompts {
    /// Display name for a label.
    pub fn class_name(&self, label: Label) -> &str {
        match label {
            Label::Positive => &self.positive,
            Label::Negative => &self.negative,
        }
    }
}

/// Run query rounds until the reader is exhausted or the user quits.
///
/// Every round prints a separator and the banner, asks for one value per
/// feature, echoes the collected vector, and answers with the mapped class
/// name. All output goes through `output`, so the loop can be driven from
/// tests as well as from a terminal.
pub fn run_query_loop(
    model: &PerceptronModel,
    prompts: &QueryPrompts,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<(), PerceptronError> {
    if prompts.features.len() != model.dimension() {
        return Err(PerceptronError::InvalidParameter(format!(
            "{} feature prompts for a {}-dimensional model",
            prompts.features.len(),
            model.dimension()
        )));
    }

    loop {
        writeln!(output, "=============================")?;
        writeln!(output, "{}", prompts.banner)?;

        let mut query = Vec::with_capacity(model.dimension());
        for name in &prompts.features {
            writeln!(output, "tell me {}:", name)?;
            let value = loop {
                write!(output, ">>>  ")?;
                output.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    return Ok(());
                }
                let entry = line.trim();
                if entry.eq_ignore_ascii_case("quit") || entry.eq_ignore_ascii_case("exit") {
                    return Ok(());
                }
                match entry.parse::<f64>() {
                    Ok(value) => break value,
                    Err(_) => writeln!(output, "not a number: {}", entry)?,
                }
            };
            query.push(value);
        }

        for (name, value) in prompts.features.iter().zip(&query) {
            writeln!(output, "{}: {}", name, value)?;
        }

        let label = crate::classify::classify(&model.weights, &query)?;
        writeln!(output, "It is \"{}\", no doubt!", prompts.class_name(label))?;
    }
}
