//! Resume scoring and analysis engine
//!
//! Everything in here is synchronous, stateless and infallible: any
//! well-typed record, however incomplete, produces an [`Analysis`].

pub mod aggregator;
pub mod classifier;
pub mod engine;
pub mod keywords;
pub mod metrics;
pub mod profiles;
pub mod progress;
pub mod recommendations;
pub mod record;
pub mod scorers;

pub use engine::{analyze, analyze_at, Analysis};
pub use profiles::{Industry, Section, WeightProfile};
pub use progress::progress;
pub use record::ResumeRecord;
