//! Story extension and storyboard completion for Storyreel.
//!
//! This crate stitches generator output back into a [`Project`] timeline:
//!
//! - **Story extension**: ask a [`StoryWriter`] for more shots and lay them
//!   out as video, storyboard, caption, dialogue and camera segments, then
//!   score the new span with sound and music segments
//! - **Storyboard completion**: make sure every shot has a storyboard
//!   segment with a prompt and a rendered image
//! - **Completion sessions**: return either the whole project or only the
//!   segments that changed
//!
//! # Example
//!
//! ```rust,ignore
//! use storyreel_story::{CompletionSession, ExtendOptions, StoryExtender};
//!
//! let mut session = CompletionSession::new(project, CompletionMode::Partial);
//! let extender = StoryExtender::new(writer, config.story.clone());
//! let report = extender.extend(&mut session, &ExtendOptions::default()).await?;
//! println!("added {} shots", report.shots());
//! let additions = session.into_output();
//! ```
//!
//! [`Project`]: storyreel_core::Project
//! [`StoryWriter`]: storyreel_interface::StoryWriter

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extend;
mod prompts;
mod session;
mod storyboards;

pub use extend::{ExtendOptions, ExtendReport, StoryExtender};
pub use prompts::{CaptionCheck, check_captions, positive_prompt, truncate_chars, video_prompt};
pub use session::CompletionSession;
pub use storyboards::{ShotReport, StoryboardCompleter, StoryboardReport};
