//! Program Loader.
//!
//! This module reads LS-8 program images. It performs:
//! 1. **Parsing:** One instruction byte per line as an 8-digit base-2 literal.
//! 2. **Cleanup:** Strips `#` comments, surrounding whitespace, and blank lines.
//! 3. **Validation:** Rejects malformed literals, empty programs, and oversized images.
//! 4. **Loading:** Copies the image into CPU memory at address 0.
//!
//! The whole file is parsed before anything is written, so a bad line never
//! leaves a partially loaded program behind.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::debug;

use crate::common::LoadError;
use crate::common::constants::MEMORY_SIZE;
use crate::core::Cpu;

/// Marker that starts a comment running to the end of the line.
pub const COMMENT_MARKER: char = '#';

/// Number of binary digits in one instruction byte.
const LITERAL_DIGITS: usize = 8;

/// Parses program source text into an image.
///
/// # Arguments
///
/// * `source` - Program text, one byte literal per line.
///
/// # Returns
///
/// The image bytes in file order.
///
/// # Examples
///
/// ```
/// use ls8_core::sim::loader::parse_program;
///
/// let src = "# print 8\n10000010 # LDI R0,8\n00000000\n00001000\n\n00000001\n";
/// assert_eq!(parse_program(src).unwrap(), vec![0b1000_0010, 0, 8, 1]);
/// ```
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let code = line
            .split_once(COMMENT_MARKER)
            .map_or(line, |(code, _)| code);
        let Some(token) = code.split_whitespace().next() else {
            continue;
        };
        image.push(parse_literal(token).ok_or_else(|| LoadError::InvalidLiteral {
            line: idx + 1,
            token: token.to_string(),
        })?);
    }

    if image.is_empty() {
        return Err(LoadError::EmptyProgram);
    }
    if image.len() > MEMORY_SIZE {
        return Err(LoadError::ProgramTooLarge {
            len: image.len(),
            max: MEMORY_SIZE,
        });
    }
    Ok(image)
}

/// Parses one 8-digit base-2 literal.
fn parse_literal(token: &str) -> Option<u8> {
    let well_formed =
        token.len() == LITERAL_DIGITS && token.bytes().all(|c| c == b'0' || c == b'1');
    if well_formed {
        u8::from_str_radix(token, 2).ok()
    } else {
        None
    }
}

/// Reads and parses a program file.
///
/// # Arguments
///
/// * `path` - Path to the program source.
///
/// # Returns
///
/// The image bytes, or `FileNotFound` if the path does not exist.
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            LoadError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let image = parse_program(&source)?;
    debug!(path = %path.display(), bytes = image.len(), "program parsed");
    Ok(image)
}

/// Reads a program file and copies it into `cpu` memory at address 0.
///
/// # Returns
///
/// The number of bytes written.
pub fn load<W: Write>(cpu: &mut Cpu<W>, path: impl AsRef<Path>) -> Result<usize, LoadError> {
    let image = load_program(path)?;
    cpu.load_program(&image)
}
