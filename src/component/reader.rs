//! Read iCalendar text back into content lines.
//!
//! Only used for the bundled `VTIMEZONE` definitions, so the reader unfolds
//! and splits lines without checking property semantics.

use std::iter::{Enumerate, Peekable};
use std::str::Lines;

use crate::component::{ContentLine, ContentLineParams};
use crate::{
    PARAM_DELIMITER, PARAM_NAME_DELIMITER, PARAM_QUOTE, PARAM_VALUE_DELIMITER, VALUE_DELIMITER,
};

/// Error arising when trying to parse a content line
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContentLineError {
    #[error("line {0}: missing property name")]
    MissingName(usize),
    #[error("line {0}: missing a closing quote")]
    MissingClosingQuote(usize),
    #[error("line {0}: missing a {1:?} delimiter")]
    MissingDelimiter(usize, char),
    #[error("line {0}: missing a parameter key")]
    MissingParamKey(usize),
    #[error("line {0}: missing value")]
    MissingValue(usize),
}

/// Iterator over the unfolded content lines of a text.
pub struct ContentLineParser<'a> {
    lines: Peekable<Enumerate<Lines<'a>>>,
}

impl<'a> ContentLineParser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate().peekable(),
        }
    }

    fn parse(line: &str, number: usize) -> Result<ContentLine, ContentLineError> {
        let Some(name_end) = line.find([PARAM_DELIMITER, VALUE_DELIMITER]) else {
            return Err(ContentLineError::MissingName(number));
        };
        let (name, mut to_parse) = line.split_at(name_end);
        if name.is_empty() {
            return Err(ContentLineError::MissingName(number));
        }

        let mut params = vec![];
        while let Some(remainder) = to_parse.strip_prefix(PARAM_DELIMITER) {
            let Some((key, remainder)) = remainder.split_once(PARAM_NAME_DELIMITER) else {
                return Err(ContentLineError::MissingDelimiter(number, PARAM_NAME_DELIMITER));
            };
            if key.is_empty() {
                return Err(ContentLineError::MissingParamKey(number));
            }
            to_parse = remainder;

            let mut values = Vec::with_capacity(1);
            loop {
                if let Some(quoted) = to_parse.strip_prefix(PARAM_QUOTE) {
                    let Some((value, remainder)) = quoted.split_once(PARAM_QUOTE) else {
                        return Err(ContentLineError::MissingClosingQuote(number));
                    };
                    values.push(value.to_owned());
                    to_parse = remainder;
                } else {
                    let Some(end) =
                        to_parse.find([PARAM_DELIMITER, VALUE_DELIMITER, PARAM_VALUE_DELIMITER])
                    else {
                        return Err(ContentLineError::MissingDelimiter(number, VALUE_DELIMITER));
                    };
                    let (value, remainder) = to_parse.split_at(end);
                    values.push(value.to_owned());
                    to_parse = remainder;
                }

                match to_parse.strip_prefix(PARAM_VALUE_DELIMITER) {
                    Some(remainder) => to_parse = remainder,
                    None => break,
                }
            }
            params.push((key.to_uppercase(), values));
        }

        let Some(value) = to_parse.strip_prefix(VALUE_DELIMITER) else {
            return Err(ContentLineError::MissingValue(number));
        };
        Ok(ContentLine {
            name: name.to_uppercase(),
            params: ContentLineParams::from(params),
            value: (!value.is_empty()).then(|| value.to_owned()),
        })
    }
}

impl Iterator for ContentLineParser<'_> {
    type Item = Result<ContentLine, ContentLineError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, first) = self.lines.find(|(_, line)| !line.trim().is_empty())?;
        let mut line = first.to_owned();
        // Continuation lines begin with a single space or tab
        while let Some((_, folded)) = self
            .lines
            .next_if(|(_, next)| next.starts_with([' ', '\t']))
        {
            line.push_str(&folded[1..]);
        }
        Some(Self::parse(&line, index + 1))
    }
}
