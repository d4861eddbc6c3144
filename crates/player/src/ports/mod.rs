//! Player port definitions.
//!
//! Everything the repositories and stores need from the outside world is
//! expressed as a trait here and implemented in `infrastructure`.

pub mod outbound;
