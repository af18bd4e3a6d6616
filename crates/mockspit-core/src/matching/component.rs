//! URL path component matching.

use url::Url;

/// Component reported for the leading `/` of an absolute path.
pub const ROOT_COMPONENT: &str = "/";

/// Split the URL path into its components.
///
/// An absolute path yields `"/"` first, followed by every non-empty segment,
/// percent-decoded. Query and fragment are ignored.
pub fn path_components(url: &Url) -> Vec<String> {
    let path = url.path();
    let mut components = Vec::new();

    if path.starts_with('/') {
        components.push(ROOT_COMPONENT.to_owned());
    }

    components.extend(
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                urlencoding::decode(segment)
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| segment.to_owned())
            }),
    );

    components
}

/// Check whether `component` is one of the path components of `url`.
pub fn contains_component(url: &Url, component: &str) -> bool {
    path_components(url).iter().any(|c| c == component)
}

/// Check a response's optional component requirement against `url`.
///
/// A missing requirement matches every URL.
pub fn component_matches(required: Option<&str>, url: &Url) -> bool {
    match required {
        Some(component) => contains_component(url, component),
        None => true,
    }
}
