//! Collaborators the forms hand work to: the clock and the submission sink

mod clock;
mod submission;
mod traits;

pub use clock::SystemClock;
pub use submission::{Submission, TracingSink};
pub use traits::{Clock, SubmissionSink};

#[cfg(test)]
pub use traits::{MockClock, MockSubmissionSink};
