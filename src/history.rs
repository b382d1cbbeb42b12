//! Pagination through a user's distinct beers, joined with brewery metadata.

use crate::api::{BeerApi, BreweryMetadata};
use crate::error::Result;
use indicatif::ProgressBar;
use std::collections::HashMap;

/// Number of entries upstream returns per page; the offset advances by this.
pub const PAGE_SIZE: u32 = 25;

/// A beer joined with the country and social handle of its brewery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedItem {
    pub beer_id: String,
    pub beer_name: String,
    pub country: String,
    pub social_handle: Option<String>,
}

/// Walks the distinct-beer listing page by page and enriches every entry.
///
/// Brewery lookups are memoized for the lifetime of the aggregator, so a
/// brewery appearing many times costs a single request.
pub struct HistoryAggregator<'a, A: BeerApi + ?Sized> {
    api: &'a A,
    breweries: HashMap<String, BreweryMetadata>,
    progress: ProgressBar,
}

impl<'a, A: BeerApi + ?Sized> HistoryAggregator<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            breweries: HashMap::new(),
            progress: ProgressBar::hidden(),
        }
    }

    /// Report page and brewery fetches on `progress`.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Number of distinct breweries fetched so far.
    pub fn breweries_fetched(&self) -> usize {
        self.breweries.len()
    }

    /// Fetch every page of `username`'s history, in upstream order.
    ///
    /// Entries without a brewery are skipped. The first upstream error
    /// aborts the whole run and nothing collected so far is returned.
    pub fn aggregate(&mut self, username: &str) -> Result<Vec<EnrichedItem>> {
        // The spinner goes away whether or not the run succeeded.
        let result = self.fetch_all(username);
        self.progress.finish_and_clear();
        let items = result?;

        tracing::info!(
            username,
            beers = items.len(),
            breweries = self.breweries.len(),
            "history aggregated"
        );
        Ok(items)
    }

    fn fetch_all(&mut self, username: &str) -> Result<Vec<EnrichedItem>> {
        let mut items = Vec::new();
        let mut offset = 0;

        loop {
            self.progress
                .set_message(format!("Fetching beers {}-{}", offset + 1, offset + PAGE_SIZE));
            let page = self.api.user_distinct(username, offset)?;
            tracing::debug!(offset, entries = page.results.len(), next = page.has_next_page, "page received");

            for record in page.results {
                let Some(brewery_id) = record.brewery_id else {
                    tracing::debug!(beer_id = %record.beer_id, "skipping beer without brewery");
                    continue;
                };
                let brewery = self.brewery(&brewery_id)?;
                items.push(EnrichedItem {
                    beer_id: record.beer_id,
                    beer_name: record.beer_name,
                    country: brewery.country.clone(),
                    social_handle: brewery.social_handle.clone(),
                });
            }

            if !page.has_next_page {
                break;
            }
            offset += PAGE_SIZE;
        }

        Ok(items)
    }

    fn brewery(&mut self, brewery_id: &str) -> Result<&BreweryMetadata> {
        if !self.breweries.contains_key(brewery_id) {
            self.progress.set_message(format!("Fetching brewery {}", brewery_id));
            let meta = self.api.brewery_info(brewery_id)?;
            self.breweries.insert(brewery_id.to_string(), meta);
        }
        Ok(&self.breweries[brewery_id])
    }
}

/// Sort items by country name, keeping arrival order within a country.
///
/// The renderer relies on every country forming one contiguous block.
pub fn grouped_sort(mut items: Vec<EnrichedItem>) -> Vec<EnrichedItem> {
    // `sort_by` is stable
    items.sort_by(|a, b| a.country.cmp(&b.country));
    items
}
