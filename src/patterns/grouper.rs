//! Grouping of element locators by normalized template.
//!
//! Buckets preserve insertion order: two locators sharing a template land in
//! the same bucket, and bucket enumeration order matches first-seen order.
//! Elements missing the selected locator field are skipped, not an error.

use std::collections::HashMap;

use crate::types::{ElementLocator, PatternGroup, PatternStats};

use super::normalizer::{normalize_selector, normalize_xpath};

/// Maximum number of example elements retained per pattern group.
pub const MAX_PATTERN_EXAMPLES: usize = 3;

/// Group locators by normalized template, preserving first-seen bucket order.
pub fn group_by_pattern(
    elements: &[ElementLocator],
    use_xpath: bool,
) -> Vec<(String, Vec<ElementLocator>)> {
    let mut buckets: Vec<(String, Vec<ElementLocator>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for element in elements {
        let Some(raw) = element.locator(use_xpath) else {
            continue;
        };
        let template = if use_xpath {
            normalize_xpath(raw)
        } else {
            normalize_selector(raw)
        };

        match index.get(&template) {
            Some(&slot) => buckets[slot].1.push(element.clone()),
            None => {
                index.insert(template.clone(), buckets.len());
                buckets.push((template, vec![element.clone()]));
            }
        }
    }

    buckets
}

/// Number of distinct selector templates; 0 for empty input.
pub fn count_unique_patterns(elements: &[ElementLocator]) -> usize {
    group_by_pattern(elements, false).len()
}

/// One record per template, sorted descending by occurrence count.
///
/// Ties keep first-seen order (stable sort). Examples are the first
/// [`MAX_PATTERN_EXAMPLES`] elements of the bucket, in insertion order.
pub fn pattern_groups(elements: &[ElementLocator]) -> Vec<PatternGroup> {
    let mut groups: Vec<PatternGroup> = group_by_pattern(elements, false)
        .into_iter()
        .map(|(pattern, bucket)| {
            let occurrences = bucket.len();
            let examples = bucket.into_iter().take(MAX_PATTERN_EXAMPLES).collect();
            PatternGroup {
                pattern,
                occurrences,
                examples,
            }
        })
        .collect();

    groups.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
    groups
}

/// Aggregate statistics over a grouped element collection.
///
/// `template_ratio` is the fraction of occurrences belonging to templates
/// with more than one occurrence: `(total - singleton templates) / total`,
/// defined as 0.0 when the input is empty.
pub fn pattern_stats(elements: &[ElementLocator]) -> PatternStats {
    let total_occurrences = elements.len();
    let groups = group_by_pattern(elements, false);
    let unique_patterns = groups.len();

    let template_ratio = if total_occurrences == 0 {
        0.0
    } else {
        let singletons = groups.iter().filter(|(_, bucket)| bucket.len() == 1).count();
        (total_occurrences - singletons) as f64 / total_occurrences as f64
    };

    PatternStats {
        total_occurrences,
        unique_patterns,
        template_ratio,
    }
}
