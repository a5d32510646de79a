// Field mutation layer and its HTTP surface.
// All document changes are expressed as typed edits applied by `mutations`.

pub mod fields;
pub mod handlers;
pub mod mutations;
pub mod paths;
pub mod photo;
