//! Delimiter encoding of location names.
//!
//! Group paths use `.` between components, and location paths use `/`. A
//! location name that contains either character is stored as a group child
//! name with `.` replaced by a tab and `/` replaced by a newline. Neither
//! replacement character can appear in a location name.

const PATH_DELIMITER: char = '.';
const LOCATION_DELIMITER: char = '/';
const ENCODED_PATH_DELIMITER: char = '\t';
const ENCODED_LOCATION_DELIMITER: char = '\n';

/// Encodes a location name so it can be used as one dotted-path component.
///
/// # Examples
/// ```
/// use scene_attr::delimiter_encode;
/// assert_eq!(delimiter_encode("geo.v2"), "geo\tv2");
/// assert_eq!(delimiter_encode("cubeMaker"), "cubeMaker");
/// ```
pub fn delimiter_encode(name: &str) -> String {
    name.chars()
        .map(|ch| match ch {
            PATH_DELIMITER => ENCODED_PATH_DELIMITER,
            LOCATION_DELIMITER => ENCODED_LOCATION_DELIMITER,
            other => other,
        })
        .collect()
}

/// Recovers the literal location name from an encoded path component.
///
/// # Examples
/// ```
/// use scene_attr::delimiter_decode;
/// assert_eq!(delimiter_decode("geo\tv2"), "geo.v2");
/// ```
pub fn delimiter_decode(name: &str) -> String {
    name.chars()
        .map(|ch| match ch {
            ENCODED_PATH_DELIMITER => PATH_DELIMITER,
            ENCODED_LOCATION_DELIMITER => LOCATION_DELIMITER,
            other => other,
        })
        .collect()
}
