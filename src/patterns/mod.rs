//! Pattern normalization and grouping of element locators.

mod grouper;
mod normalizer;

#[cfg(test)]
mod tests;

pub use grouper::{
    count_unique_patterns, group_by_pattern, pattern_groups, pattern_stats, MAX_PATTERN_EXAMPLES,
};
pub use normalizer::{normalize_selector, normalize_xpath};
