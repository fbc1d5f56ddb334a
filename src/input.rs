// Input collection: flags, interactive prompts, numeric parsing
use crate::diagnostic::Diagnostic;
use std::fmt;
use std::io::{self, BufRead, Write};

#[derive(Clone, Debug, PartialEq)]
pub enum InputError {
    InvalidSeed { value: String },
    InvalidId { field: &'static str, value: String },
    InvalidFrameCount { value: String },
    UnexpectedEof { field: &'static str },
    Io { field: &'static str, kind: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidSeed { value } => {
                write!(f, "Invalid seed '{}': expected decimal or 0x hex", value)
            }
            InputError::InvalidId { field, value } => {
                write!(f, "Invalid {} '{}': expected a non-negative integer", field, value)
            }
            InputError::InvalidFrameCount { value } => {
                write!(f, "Invalid frame count '{}': expected a positive integer", value)
            }
            InputError::UnexpectedEof { field } => {
                write!(f, "Unexpected end of input while reading '{}'", field)
            }
            InputError::Io { field, kind } => {
                write!(f, "I/O error while reading '{}': {}", field, kind)
            }
        }
    }
}

impl InputError {
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            InputError::InvalidSeed { value } => {
                Diagnostic::new("E_SEED_INVALID", "Invalid initial seed".to_string())
                    .with_field("value".to_string(), value.clone())
                    .with_hint(
                        "Seeds are decimal or 0x-prefixed hexadecimal; values wider than 32 bits are reduced modulo 2^32.".to_string(),
                    )
            }
            InputError::InvalidId { field, value } => {
                Diagnostic::new("E_ID_INVALID", "Invalid trainer identity value".to_string())
                    .with_field("field".to_string(), field.to_string())
                    .with_field("value".to_string(), value.clone())
                    .with_hint(format!("'{}' must be a non-negative integer (canonically 0-65535).", field))
            }
            InputError::InvalidFrameCount { value } => {
                Diagnostic::new("E_FRAME_COUNT_INVALID", "Invalid frame count".to_string())
                    .with_field("value".to_string(), value.clone())
                    .with_hint("The frame count must be a positive integer.".to_string())
            }
            InputError::UnexpectedEof { field } => {
                Diagnostic::new("E_INPUT_EOF", "Unexpected end of input".to_string())
                    .with_field("field".to_string(), field.to_string())
                    .with_hint(format!("Supply '{}' as a flag or answer the prompt.", field))
            }
            InputError::Io { field, kind } => {
                Diagnostic::new("E_INPUT_IO", "Input read failure".to_string())
                    .with_field("field".to_string(), field.to_string())
                    .with_field("io_error_kind".to_string(), kind.clone())
            }
        }
    }
}

/// Parses a seed written in decimal or 0x-prefixed hexadecimal, reducing
/// oversized values modulo 2^32. The core engine takes the seed as `u32`, so
/// the mask here is the only place widening can occur.
pub fn parse_seed(text: &str) -> Result<u32, InputError> {
    let trimmed = text.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    match parsed {
        Ok(value) => Ok((value & 0xFFFF_FFFF) as u32),
        Err(_) => Err(InputError::InvalidSeed {
            value: trimmed.to_string(),
        }),
    }
}

/// Parses a trainer or secret ID. Values above 65535 are accepted; the core
/// feeds them to the shiny xor as raw bit patterns.
pub fn parse_id(field: &'static str, text: &str) -> Result<u32, InputError> {
    let trimmed = text.trim();
    trimmed.parse::<u32>().map_err(|_| InputError::InvalidId {
        field,
        value: trimmed.to_string(),
    })
}

pub fn parse_frame_count(text: &str) -> Result<u32, InputError> {
    let trimmed = text.trim();
    match trimmed.parse::<u32>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(InputError::InvalidFrameCount {
            value: trimmed.to_string(),
        }),
    }
}

/// Prompts on stdout and reads one line from stdin.
pub fn prompt_line(label: &str, field: &'static str) -> Result<String, InputError> {
    print!("{}: ", label);
    io::stdout().flush().map_err(|e| InputError::Io {
        field,
        kind: e.kind().to_string(),
    })?;

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => Err(InputError::UnexpectedEof { field }),
        Ok(_) => Ok(line.trim().to_string()),
        Err(e) => Err(InputError::Io {
            field,
            kind: e.kind().to_string(),
        }),
    }
}
