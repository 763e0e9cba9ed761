//! Endpoint methods grouped by API resource.
//!
//! Every method performs exactly one round trip: build a path, attach
//! parameters, execute, decode. No retries, no caching, no pagination
//! chaining.

mod account;
mod certifications;
mod collections;
mod configuration;
mod discover;
mod episodes;
mod find;
mod genres;
mod lists;
mod movies;
mod people;
mod search;
mod seasons;
mod shows;
mod trending;
mod watch_providers;
