//! Names derived from an example identifier.

use convert_case::{Boundary, Case, Casing};

const SEPARATORS: [Boundary; 3] = [Boundary::Underscore, Boundary::Hyphen, Boundary::Space];

/// Display title: separators become spaces, every word title-cased
///
/// `"hello_world"` becomes `"Hello World"`.
pub fn display_title(name: &str) -> String {
    name.with_boundaries(&SEPARATORS).to_case(Case::Title)
}

/// Type identifier: separated segments capitalized and joined
///
/// `"hello_world"` becomes `"HelloWorld"`.
pub fn type_identifier(name: &str) -> String {
    name.with_boundaries(&SEPARATORS).to_case(Case::Pascal)
}
