//! Feed pagination.
//!
//! The feed shows one article at a time and grows as the reader approaches
//! the end of what has been loaded:
//!
//! - **Category reset**: clears the session and issues an initial two-batch load
//! - **Prefetch**: advancing to within [`PREFETCH_THRESHOLD`] articles of the
//!   end starts one background load
//! - **Stale results**: every load carries the session generation at issue
//!   time and is discarded on arrival if the category has changed since
//!
//! # Example
//!
//! ```ignore
//! use wikiswipe::feed::{load_initial, Pager};
//!
//! let request = pager.select_category(&mut state, category);
//! let load = load_initial(&client, &request).await;
//! pager.finish_initial(&mut state, request.generation, load);
//! ```

mod pager;

pub use pager::{
    load_initial, load_more, Advance, InitialLoad, InitialRequest, MoreLoad, MoreRequest, Pager,
    DEFAULT_BATCH_SIZE, MAX_BATCH_SIZE, PREFETCH_THRESHOLD,
};
