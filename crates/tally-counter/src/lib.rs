//! Counter styles and list marker layout for Tally.
//!
//! # Scope
//!
//! This crate implements:
//! - **Roman numerals** ([§ 6.1 upper-roman](https://www.w3.org/TR/css-counter-styles-3/#upper-roman))
//!   - Greedy additive encoding over `1..=3999`
//!   - Canonical decoding, the exact inverse of encoding
//!
//! - **List style types** ([§ 3.1 'list-style-type'](https://www.w3.org/TR/css-lists-3/#list-style-type))
//!   - Bullets: disc, circle, square
//!   - Counters: decimal, lower/upper-alpha, lower/upper-roman
//!   - Fallback to decimal outside a style's range
//!
//! - **List layout**
//!   - Counter values from a start value
//!   - Left- or right-aligned marker columns
//!
//! # Not Yet Implemented
//!
//! - `@counter-style` rules and custom symbol lists
//! - Negative-value handling (`negative` descriptor) beyond decimal
//! - `list-style-position: inside`

/// List layout with aligned markers.
pub mod list;
/// Roman numeral conversion per [§ 6.1](https://www.w3.org/TR/css-counter-styles-3/#upper-roman).
pub mod roman;
/// List style types per [§ 3.1](https://www.w3.org/TR/css-lists-3/#list-style-type).
pub mod style;

pub use list::{ListBlock, MarkerAlignment, RenderedItem};
pub use roman::{Case, Roman, RomanError, convert, parse_roman, to_roman, to_roman_with_case};
pub use style::ListStyleType;
