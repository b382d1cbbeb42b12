// Library root
// -----------
// The binary (`main.rs`) wires these modules together: fetch a user's
// distinct beers, join them with brewery countries, sort, render.
//
// Module responsibilities:
// - `api`: HTTP interactions with the upstream service and the `BeerApi`
//   seam the rest of the crate is written against.
// - `history`: pagination, brewery join and country ordering.
// - `report`: the static HTML page.
// - `country`: country name to flag code lookup.
// - `ui`: password prompt and progress spinner.
pub mod api;
pub mod cli;
pub mod config;
pub mod country;
pub mod error;
pub mod history;
pub mod report;
pub mod ui;

pub use error::{Error, Result};
