//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The wallet connection is the only piece of mutable view state. It lives
//! in a context-provided signal so the header button and any page can read
//! the connected account.

pub mod wallet;
