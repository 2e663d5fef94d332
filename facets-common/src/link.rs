use tracing::debug;

use crate::query::LinkQuery;

/// Route suffixes appended by the catalog to search, department and brand links.
const ROUTE_SUFFIXES: [&str; 3] = ["/s", "/d", "/b"];

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> &'a str {
    if s.len() >= suffix.len()
        && s.is_char_boundary(s.len() - suffix.len())
        && s[s.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
    {
        &s[..s.len() - suffix.len()]
    } else {
        s
    }
}

/// Remove one leading `/` and then, in order, one trailing `/s`, `/d` and `/b`.
pub fn strip_path(path: &str) -> &str {
    let mut stripped = path.strip_prefix('/').unwrap_or(path);
    for suffix in ROUTE_SUFFIXES {
        stripped = strip_suffix_ignore_case(stripped, suffix);
    }
    stripped
}

/// Last non-empty path segment of `link`, ignoring its query component.
///
/// E.g. `smartphones/Android 7?map=c,specificationFilter_30` => `Android 7`
pub fn slug_from_link(link: &str) -> String {
    let path = link.split_once('?').map_or(link, |(path, _)| path);
    strip_path(path)
        .split('/')
        .rfind(|segment| !segment.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Find the specification-filter symbol a link adds to the current `map`.
///
/// The link's `map` holds the current map plus one extra symbol. Symbols of
/// the current map are matched against it from the front and consumed; the
/// first unmatched link symbol is returned.
pub fn specification_filter_from_link<S: AsRef<str>>(link: &str, map: &[S]) -> Option<String> {
    let query = match LinkQuery::parse(link) {
        Ok(query) => query,
        Err(e) => {
            debug!("No specification filter in link: {e}");
            return None;
        }
    };
    let mut link_map = match query.map(link) {
        Ok(values) => values.to_vec(),
        Err(e) => {
            debug!("No specification filter in link: {e}");
            return None;
        }
    };

    let mut current = map.iter();
    let mut head = current.next();
    let mut index = 0;

    while let Some(symbol) = head {
        if index >= link_map.len() {
            break;
        }
        if link_map[index] == symbol.as_ref() {
            link_map.remove(index);
            head = current.next();
        } else {
            index += 1;
        }
    }

    link_map.into_iter().next()
}
