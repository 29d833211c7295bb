//! Serialisation of components into iCalendar text (RFC 5545).

mod ical;

use crate::component::ContentLine;

const LINE_END: &str = "\r\n";
const FOLD_LIMIT: usize = 75;

pub trait Emitter {
    fn generate(&self) -> String;
}

impl Emitter for ContentLine {
    fn generate(&self) -> String {
        let mut line = self.name.clone();
        for (key, values) in self.params.iter() {
            line.push(crate::PARAM_DELIMITER);
            line.push_str(key);
            line.push(crate::PARAM_NAME_DELIMITER);
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    line.push(crate::PARAM_VALUE_DELIMITER);
                }
                line.push_str(&quote_param(value));
            }
        }
        line.push(crate::VALUE_DELIMITER);
        if let Some(value) = &self.value {
            line.push_str(value);
        }
        fold_line(&line)
    }
}

impl<T: Emitter> Emitter for Vec<T> {
    fn generate(&self) -> String {
        self.iter().map(Emitter::generate).collect()
    }
}

/// Escape a TEXT value.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {
                if chars.peek() != Some(&'\n') {
                    out.push_str("\\n");
                }
            }
            _ => out.push(ch),
        }
    }
    out
}

fn quote_param(value: &str) -> String {
    if value.contains([
        crate::PARAM_DELIMITER,
        crate::VALUE_DELIMITER,
        crate::PARAM_VALUE_DELIMITER,
    ]) {
        format!("{q}{value}{q}", q = crate::PARAM_QUOTE)
    } else {
        value.to_owned()
    }
}

/// Terminate a line with CRLF, folding it so no physical line exceeds 75 octets.
///
/// Folds never split a multi-byte character.
fn fold_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + (line.len() / FOLD_LIMIT + 1) * 3);
    let mut width = 0;
    for ch in line.chars() {
        let len = ch.len_utf8();
        if width + len > FOLD_LIMIT {
            out.push_str(LINE_END);
            // The leading space counts towards the limit
            out.push(' ');
            width = 1;
        }
        out.push(ch);
        width += len;
    }
    out.push_str(LINE_END);
    out
}
