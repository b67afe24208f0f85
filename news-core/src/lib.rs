pub mod article;
pub mod client;
pub mod config;
pub mod error;
pub mod merge;
pub mod persistence;
pub mod service;
pub mod session;
pub mod trigger;

pub use article::{article_id, Article, ArticleSource, SearchPage};
pub use client::{ArticleRepository, NewsApiClient};
pub use config::SearchConfig;
pub use error::SearchError;
pub use merge::{has_more, merge_page};
pub use persistence::{FileSelectionStore, MemorySelectionStore, SelectionStore};
pub use service::SearchService;
pub use session::{FetchTicket, SearchFilters, SearchSession, SearchStatus};
pub use trigger::ScrollTrigger;
