//! Platform-neutral core of PinyImage.
//!
//! Everything that decides *what* the application does lives here: the wire
//! model, the request context used for every API call, and the `deck` state
//! machine. The browser shell in `frontend` only executes the effects this
//! crate asks for and renders the resulting state.

pub mod api;
pub mod deck;
pub mod model;
pub mod requests;
