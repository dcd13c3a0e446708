//! litmon — literature monitor
//!
//! Periodically fetches research-paper metadata from one of several sources
//! (arXiv export API, a local ACL Anthology XML corpus, the OpenReview API),
//! narrows the set to papers matching a free-text interest, and announces
//! the survivors to a chat channel.
//!
//! # Example
//!
//! ```no_run
//! use litmon::config::Config;
//! use litmon::filter::{FilterMode, PaperFilter};
//! use litmon::llm::LlmClient;
//! use litmon::models::QueryParams;
//! use litmon::pipeline::Pipeline;
//! use litmon::sources::ArxivSource;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let source = Box::new(ArxivSource::new(&config)?);
//!     let filter = PaperFilter::new(LlmClient::new(&config)?);
//!
//!     let params = QueryParams::arxiv("cs.CL", "20240101", "20240102", 100)?;
//!     let mut pipeline = Pipeline::new(source, filter);
//!     let papers = pipeline.run(&params, "LVLM", FilterMode::Matching).await?;
//!
//!     println!("{} papers kept", papers.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod llm;
pub mod models;
pub mod notify;
pub mod pipeline;
pub mod prompts;
pub mod sources;

pub use config::Config;
pub use error::{FilterError, LlmError, NotifyError, PipelineError, SourceError};
pub use models::{Paper, QueryParams};
pub use pipeline::Pipeline;
