use std::io::{BufRead, Write};

use crate::catalog::{self, DEFAULT_RATING, MAX_RATING, MIN_RATING};
use crate::input::InputError;
use crate::model::rating::Rating;
use crate::pipeline::stage1_validate::RawRatings;

enum Answer {
    Value(Rating),
    Eof,
}

/// Walk the user through every domain and ask for an explicit submit.
///
/// Returns `Ok(None)` unless the user explicitly submits. Empty answers keep
/// the default rating; end of input before the submit answer is never a submit.
pub fn run_questionnaire<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<Option<RawRatings>, InputError> {
    writeln!(writer, "Gross National Happiness Index")?;
    writeln!(
        writer,
        "This test is inspired by Bhutan's model for measuring holistic well-being."
    )?;
    writeln!(writer)?;
    writeln!(writer, "Rate each domain from {MIN_RATING} to {MAX_RATING}")?;
    writeln!(writer, "1 = very dissatisfied | 5 = very satisfied")?;

    let domains = catalog::domains();
    let mut raw = Vec::with_capacity(domains.len());
    let mut eof = false;

    for (i, domain) in domains.iter().enumerate() {
        let rating = if eof {
            Rating::DEFAULT
        } else {
            writeln!(writer)?;
            writeln!(writer, "[{}/{}] {}", i + 1, domains.len(), domain.name)?;
            match ask_rating(reader, writer, domain.prompt)? {
                Answer::Value(r) => r,
                Answer::Eof => {
                    eof = true;
                    Rating::DEFAULT
                }
            }
        };
        raw.push((domain.id.to_string(), rating.get() as i64));
    }

    writeln!(writer)?;
    if !eof && ask_submit(reader, writer)? {
        Ok(Some(raw))
    } else {
        Ok(None)
    }
}

fn ask_rating<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<Answer, InputError> {
    let mut line = String::new();
    loop {
        write!(writer, "  {prompt} [{DEFAULT_RATING}]: ")?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            writeln!(writer)?;
            return Ok(Answer::Eof);
        }
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(Answer::Value(Rating::DEFAULT));
        }
        match answer.parse::<i64>().ok().and_then(Rating::new) {
            Some(r) => return Ok(Answer::Value(r)),
            None => writeln!(
                writer,
                "  please enter a whole number from {MIN_RATING} to {MAX_RATING}"
            )?,
        }
    }
}

fn ask_submit<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<bool, InputError> {
    let mut line = String::new();
    loop {
        write!(writer, "Calculate my happiness index? [Y/n]: ")?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            writeln!(writer)?;
            return Ok(false);
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(writer, "  please answer y or n")?,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/session.rs"]
mod tests;
