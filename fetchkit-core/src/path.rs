use std::fmt;

/// Turns path-like values into ordered URL path segments.
///
/// Segments are plain strings at this point; percent-escaping happens
/// when the request builder joins them onto the base URL.
pub trait PathComponents {
    /// Ordered, non-empty path segments. Blank and whitespace-only
    /// segments are dropped.
    fn path_components(&self) -> Vec<String>;
}

impl PathComponents for str {
    fn path_components(&self) -> Vec<String> {
        self.split('/')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl PathComponents for String {
    fn path_components(&self) -> Vec<String> {
        self.as_str().path_components()
    }
}

impl<T: fmt::Display> PathComponents for [T] {
    fn path_components(&self) -> Vec<String> {
        self.iter()
            .map(|component| component.to_string())
            .map(|segment| segment.trim().to_string())
            .filter(|segment| !segment.is_empty())
            .collect()
    }
}

impl<T: fmt::Display> PathComponents for Vec<T> {
    fn path_components(&self) -> Vec<String> {
        self.as_slice().path_components()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_slash_delimited_strings() {
        assert_eq!("services/rest".path_components(), vec!["services", "rest"]);
        assert_eq!("/services/rest/".path_components(), vec!["services", "rest"]);
    }

    #[test]
    fn drops_blank_segments() {
        assert_eq!("//services//  //rest".path_components(), vec!["services", "rest"]);
        assert_eq!("".path_components(), Vec::<String>::new());
        assert_eq!("   ".path_components(), Vec::<String>::new());
    }

    #[test]
    fn maps_sequences_through_display() {
        assert_eq!(vec!["users", "42"].path_components(), vec!["users", "42"]);
        assert_eq!([7u32, 12].path_components(), vec!["7", "12"]);
        assert_eq!(vec!["", "photos", " "].path_components(), vec!["photos"]);
    }
}
