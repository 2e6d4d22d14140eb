//! HTTP clients for the story writing and storyboard rendering services.
//!
//! Both clients share a [`ServiceClient`] that handles authentication, client-side
//! rate limiting and retries of transient failures.
//!
//! # Example
//!
//! ```no_run
//! use storyreel_core::StoryreelConfig;
//! use storyreel_models::{HttpStoryWriter, HttpStoryboardRenderer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoryreelConfig::load()?;
//! let writer = HttpStoryWriter::new(&config.services)?;
//! let renderer = HttpStoryboardRenderer::new(&config.services)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod dto;
mod renderer;
mod writer;

pub use client::{ServiceClient, join_url, status_error, transport_error};
pub use dto::{PromptsResponse, StoryResponse, StoryboardResponse};
pub use renderer::HttpStoryboardRenderer;
pub use writer::HttpStoryWriter;
