//! Request matching utilities.

mod component;
mod exact;

pub use component::{component_matches, contains_component, path_components, ROOT_COMPONENT};
pub use exact::url_equals;
