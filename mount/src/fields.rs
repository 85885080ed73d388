//! Splits a mount specification into its comma-separated fields.
//!
//! The input is read as exactly one CSV record: fields are separated by `,`,
//! a field starting with `"` is quoted and may contain commas, and `""`
//! inside a quoted field stands for a literal quote.

use crate::error::MountOptError;

pub fn split_record(input: &str) -> Result<Vec<String>, MountOptError> {
    if input.is_empty() {
        return Err(malformed(input, "empty specification".to_string()));
    }

    let mut fields = Vec::new();
    let mut chars = input.chars().enumerate().peekable();

    loop {
        let mut field = String::new();

        if let Some(&(open, '"')) = chars.peek() {
            chars.next();
            loop {
                match chars.next() {
                    None => {
                        return Err(malformed(
                            input,
                            format!("unterminated quoted field starting at column {}", open + 1),
                        ));
                    }
                    Some((_, '"')) => match chars.peek() {
                        Some(&(_, '"')) => {
                            chars.next();
                            field.push('"');
                        }
                        Some(&(_, ',')) | None => break,
                        Some(&(col, _)) => {
                            return Err(malformed(
                                input,
                                format!("extraneous character after closing quote at column {}", col + 1),
                            ));
                        }
                    },
                    Some((_, c)) => field.push(c),
                }
            }
        } else {
            while let Some(&(col, c)) = chars.peek() {
                match c {
                    ',' => break,
                    '"' => {
                        return Err(malformed(
                            input,
                            format!("bare quote in unquoted field at column {}", col + 1),
                        ));
                    }
                    '\n' | '\r' => {
                        return Err(malformed(
                            input,
                            format!("unexpected line break at column {}", col + 1),
                        ));
                    }
                    _ => {
                        field.push(c);
                        chars.next();
                    }
                }
            }
        }

        fields.push(field);

        match chars.next() {
            Some((_, ',')) => continue,
            _ => break,
        }
    }

    Ok(fields)
}

fn malformed(input: &str, reason: String) -> MountOptError {
    MountOptError::MalformedInput {
        input: input.to_string(),
        reason,
    }
}
