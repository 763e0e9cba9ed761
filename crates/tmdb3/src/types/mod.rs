//! Response models and shared capability traits.
//!
//! One serde record per JSON shape the API returns. External keys are the
//! API's snake_case names; fields diverging from them carry an explicit
//! `#[serde(rename)]`. All models are passive `Debug + Clone` data
//! carriers, immutable once decoded.

/// Account details and favorite/watchlist mutation bodies.
pub mod account;
/// Certification lists per country.
pub mod certification;
/// Collection summaries and details.
pub mod collection;
/// Production companies, countries, and spoken languages.
pub mod company;
/// API configuration (image base URLs, size tokens, change keys).
pub mod configuration;
/// Cast and crew credits, including aggregate credits for shows.
pub mod credits;
/// Serde adapters for TMDB calendar-date fields.
pub mod date;
/// Typed discover filters.
pub mod discover;
/// Episode models.
pub mod episode;
/// External ids and the find-by-external-id result.
pub mod external_ids;
/// Genre references.
pub mod genre;
/// Images and the derived image URL helper.
pub mod image;
/// User-created lists.
pub mod list;
/// The media union, list items, and shared capability traits.
pub mod media;
/// Movie details and release dates.
pub mod movie;
/// The paged result envelope.
pub mod page;
/// People and person credits.
pub mod person;
/// Typed search parameters.
pub mod search;
/// Season models.
pub mod season;
/// TV show details, networks, and content ratings.
pub mod show;
/// Localized translations.
pub mod translations;
/// Videos (trailers, clips).
pub mod video;
/// Watch provider availability.
pub mod watch_providers;

pub use account::{Account, Avatar, MarkFavorite, MarkWatchlist, StatusResponse};
pub use certification::{Certification, Certifications};
pub use collection::{BelongsToCollection, CollectionDetails, CollectionItem};
pub use company::{ProductionCompany, ProductionCountry, SpokenLanguage};
pub use configuration::{Configuration, Country, ImagesConfiguration, Language};
pub use credits::{AggregateCast, AggregateCredits, AggregateCrew, Cast, Credits, Crew};
pub use discover::{DiscoverMovieParams, DiscoverTvParams, SortBy};
pub use episode::{Episode, EpisodeDetails};
pub use external_ids::{ExternalIds, ExternalSource, FindResult};
pub use genre::{Genre, GenreList};
pub use image::{Image, ImageSize, Images, image_url};
pub use list::{CreateList, CreateListResponse, ListDetails};
pub use media::{
    AnyMedia, BackdropMedia, MediaListItem, MediaType, Movie, PosterMedia, ProfileMedia,
    RatedMedia, StillMedia, TvShow,
};
pub use movie::{DatedMoviePage, DateRange, MovieDetails, ReleaseDatesResult};
pub use page::PageResult;
pub use person::{
    Person, PersonDetails, PersonImages, PersonMovieCredits, PersonTvCredits,
};
pub use search::{SearchMovieParams, SearchMultiParams, SearchPersonParams, SearchTvParams};
pub use season::SeasonDetails;
pub use show::{ContentRating, ContentRatings, Network, SeasonSummary, TvShowDetails};
pub use translations::{Translation, TranslationData, Translations};
pub use video::{Video, Videos};
pub use watch_providers::{
    CountryWatchProviders, WatchProvider, WatchProviderList, WatchProviderRegions,
    WatchProviderResult,
};
