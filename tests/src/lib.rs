//! Cross-crate integration tests: raw text through the parsing boundary
//! into the exercise library, plus the fixed example table every
//! exercise is specified against.

mod boundary;
mod workbook;
