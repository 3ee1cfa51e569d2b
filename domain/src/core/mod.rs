//! Core helpers shared across the domain.
//!
//! - [`string::truncate_utf16`] - prefix extraction measured in UTF-16 code units
//! - [`string::utf16_len`] - length in UTF-16 code units

pub mod string;
