//! Service layer for the scout application.
//!
//! This module contains the business logic for:
//! - Remote search API access (`SearchApi`, `SmugMugClient`)
//! - Profile enumeration and content search (`ProfileCrawler`)

mod api;
mod profiles;

pub use api::{SearchApi, SmugMugClient};
pub use profiles::{CrawlRequest, PROBE_CHARACTERS, ProfileCrawler};
