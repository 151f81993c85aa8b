// Preference Matcher: ranks a job catalog against a user's free-text preferences.
// Pure and synchronous; callers own all I/O.

pub mod handlers;
pub mod preference;
pub mod ranker;
