// src/images/extract.rs
//! Finds image targets in Markdown text.

use crate::types::ImageReference;
use regex::Regex;
use std::ops::Range;

lazy_static::lazy_static! {
    /// `![alt](target)`; both parts are lazy and stay on one line.
    static ref IMAGE_SYNTAX: Regex = Regex::new(r"!\[.*?\]\((.*?)\)")
        .expect("Failed to compile image syntax regex - this is a bug in the code");
}

/// An image target together with where it sits in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedReference {
    pub reference: ImageReference,
    /// Byte range of the target inside the Markdown, excluding the parentheses.
    pub span: Range<usize>,
}

/// Every image target in order of appearance, repeats included.
pub fn extract_references(markdown: &str) -> Vec<ImageReference> {
    locate_references(markdown)
        .into_iter()
        .map(|located| located.reference)
        .collect()
}

/// Like [`extract_references`], keeping the byte span of each target.
pub fn locate_references(markdown: &str) -> Vec<LocatedReference> {
    IMAGE_SYNTAX
        .captures_iter(markdown)
        .filter_map(|captures| captures.get(1))
        .map(|target| LocatedReference {
            reference: ImageReference::new(target.as_str()),
            span: target.range(),
        })
        .collect()
}
