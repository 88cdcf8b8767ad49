//! Types and traits for recording what happens during a rollout.
//!
//! The driver loop writes one [`Record`] per environment step to a [`Recorder`],
//! merged with whatever the environment reports in its own record, followed by a
//! summary record at the end of the episode.
//!
//! ```rust
//! use rollout_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("step", RecordValue::Scalar(1.0));
//! record.insert("reward", RecordValue::Scalar(-1.0));
//! record.insert("act", RecordValue::String("South".to_string()));
//! assert_eq!(record.get_scalar("reward").unwrap(), -1.0);
//! ```
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
