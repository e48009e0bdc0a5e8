//! The FilterPipeline composes multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! filters together using the builder pattern, and builds one from a Query.

use crate::filters::{
    CategoryFilter, FlagFilter, MaximumValueFilter, MinimumValueFilter, TextSearchFilter,
};
use crate::query::Query;
use crate::traits::Filter;
use catalog::Item;

/// Chains multiple filters together as a logical AND.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TextSearchFilter::new("pad", vec![]))
///     .add_filter(CategoryFilter::new("category", Some("paddles".into())))
///     .add_filter(FlagFilter::required("isNew"));
///
/// let filtered = pipeline.apply(catalog.items());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a Query.
    ///
    /// Only active criteria become filters, cheapest checks first: flags,
    /// category, numeric bounds, then the text search which lowercases
    /// field values. A category selection of `all` or `""` is not active,
    /// whether it came from the builder or from deserialized JSON.
    pub fn from_query(query: &Query) -> Self {
        let mut pipeline = Self::new();

        for flag in &query.required_flags {
            pipeline = pipeline.add_filter(FlagFilter::required(flag.as_str()));
        }
        if let Some(selection) = query.category.as_ref().filter(|s| s.is_active()) {
            let selected = Some(selection.value.clone());
            pipeline = pipeline.add_filter(CategoryFilter::new(selection.field.as_str(), selected));
        }
        if let Some(bound) = &query.minimum {
            let filter = MinimumValueFilter::new(bound.field.as_str(), bound.value);
            pipeline = pipeline.add_filter(filter);
        }
        if let Some(bound) = &query.maximum {
            let filter = MaximumValueFilter::new(bound.field.as_str(), bound.value);
            pipeline = pipeline.add_filter(filter);
        }
        if !query.search.trim().is_empty() {
            let filter = TextSearchFilter::new(&query.search, query.search_fields.clone());
            pipeline = pipeline.add_filter(filter);
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns `true` if every filter keeps the item.
    ///
    /// Stops at the first filter that rejects it.
    pub fn matches(&self, item: &Item) -> bool {
        self.filters.iter().all(|filter| filter.matches(item))
    }

    /// Apply all filters to the items.
    ///
    /// ## Algorithm
    /// 1. Log the active filters and input count
    /// 2. Keep each item that passes every filter, in input order
    /// 3. Log the output count
    ///
    /// # Returns
    /// References to the kept items. Never fails; no match gives an empty Vec.
    pub fn apply<'a, I>(&self, items: I) -> Vec<&'a Item>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let items = items.into_iter();
        let names: Vec<&str> = self.filters.iter().map(|filter| filter.name()).collect();
        let (input_count, _) = items.size_hint();
        tracing::debug!(
            "Applying filters: [{}] (input count: {})",
            names.join(", "),
            input_count
        );

        let filtered: Vec<&Item> = items.filter(|item| self.matches(item)).collect();

        tracing::debug!("Filters applied (output count: {})", filtered.len());
        filtered
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
