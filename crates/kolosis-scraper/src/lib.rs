pub mod assemble;
pub mod auth;
pub mod client;
pub mod detail;
pub mod error;
pub mod fetcher;
mod html;
pub mod listing;
pub mod normalize;
pub mod pagination;
mod retry;

pub use assemble::assemble;
pub use auth::{authenticate, AuthenticatedSession};
pub use client::{HtmlForm, Page, PageEncoding, PortalClient};
pub use detail::{DetailStrategy, DetailSupplement, Layout};
pub use error::{AuthStage, DetailError, ScraperError};
pub use fetcher::{CatalogFetcher, FetchSummary};
pub use listing::{ListingRow, ParsedListing};
pub use pagination::{PaginationState, PAGE_SIZE};
