// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), no_std)]

mod cursor;

mod number;

mod parse_error;
pub use parse_error::ParseError;

mod parser;
pub use parser::{parse, parse_from_slice};

mod value;
pub use value::{Value, ValueKind};
