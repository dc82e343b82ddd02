//! Model to entity mappers
//!
//! Rows come back as `TryFrom` conversions because stored discriminators are
//! parsed, not trusted; a row with an unknown kind is an internal error.

mod item;
