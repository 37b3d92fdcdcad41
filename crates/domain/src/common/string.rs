//! Conversions between optional values and the empty strings the platform
//! stores for "no value".

/// Converts an empty `String` to `None`, otherwise returns `Some(value)`.
///
/// Platform documents store absent optional attributes (an image id, a
/// bio) as `""`.
///
/// # Examples
///
/// ```
/// use quillpost_domain::common::some_if_not_empty;
///
/// assert_eq!(some_if_not_empty("img1".to_string()), Some("img1".to_string()));
/// assert_eq!(some_if_not_empty(String::new()), None);
/// ```
pub fn some_if_not_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Inverse of [`some_if_not_empty`]: `None` becomes `""`.
///
/// # Examples
///
/// ```
/// use quillpost_domain::common::empty_if_none;
///
/// assert_eq!(empty_if_none(Some("img1")), "img1");
/// assert_eq!(empty_if_none(None::<&str>), "");
/// ```
pub fn empty_if_none<S: AsRef<str>>(value: Option<S>) -> String {
    value.map(|v| v.as_ref().to_string()).unwrap_or_default()
}

/// Extension trait for strings providing `into_option` as a method.
pub trait StringExt {
    /// Converts this string to `None` if empty, otherwise `Some(self)`.
    fn into_option(self) -> Option<String>;
}

impl StringExt for String {
    fn into_option(self) -> Option<String> {
        some_if_not_empty(self)
    }
}
