//! In-memory stand-in for the upstream API.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use xbeers::api::{BeerApi, BreweryMetadata, ConsumptionRecord, DistinctPage};
use xbeers::history::EnrichedItem;
use xbeers::{Error, Result};

/// Serves pre-built pages keyed by offset and records every call.
#[derive(Default)]
pub struct FakeApi {
    pub pages: HashMap<u32, DistinctPage>,
    pub breweries: HashMap<String, BreweryMetadata>,
    pub failing_brewery: Option<String>,
    pub offsets: RefCell<Vec<u32>>,
    pub brewery_calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn page(mut self, offset: u32, results: Vec<ConsumptionRecord>, has_next_page: bool) -> Self {
        self.pages.insert(
            offset,
            DistinctPage {
                results,
                has_next_page,
            },
        );
        self
    }

    pub fn brewery(mut self, id: &str, country: &str, handle: Option<&str>) -> Self {
        self.breweries.insert(
            id.to_string(),
            BreweryMetadata {
                country: country.to_string(),
                social_handle: handle.map(str::to_string),
            },
        );
        self
    }
}

impl BeerApi for FakeApi {
    fn user_distinct(&self, _username: &str, offset: u32) -> Result<DistinctPage> {
        self.offsets.borrow_mut().push(offset);
        self.pages
            .get(&offset)
            .cloned()
            .ok_or_else(|| Error::Config(format!("unexpected offset {}", offset)))
    }

    fn brewery_info(&self, brewery_id: &str) -> Result<BreweryMetadata> {
        self.brewery_calls.borrow_mut().push(brewery_id.to_string());
        if self.failing_brewery.as_deref() == Some(brewery_id) {
            return Err(Error::Config(format!("brewery {} unavailable", brewery_id)));
        }
        Ok(self.breweries.get(brewery_id).cloned().unwrap_or_default())
    }
}

pub fn record(beer_id: &str, brewery_id: Option<&str>) -> ConsumptionRecord {
    ConsumptionRecord {
        beer_id: beer_id.to_string(),
        beer_name: format!("Beer {}", beer_id),
        brewery_id: brewery_id.map(str::to_string),
    }
}

pub fn item(beer_id: &str, country: &str) -> EnrichedItem {
    EnrichedItem {
        beer_id: beer_id.to_string(),
        beer_name: format!("Beer {}", beer_id),
        country: country.to_string(),
        social_handle: None,
    }
}
