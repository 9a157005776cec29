//! Display types rendered by the view components
//!
//! Plain data shapes. The web crate maps its wire structs into these, so
//! response parsing never leaks into the views.

/// One entry in a search response representing a downloadable track, album,
/// playlist or artist.
///
/// Identity is positional: the row index in the response array is what the
/// download action reports back. Nothing here is persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResult {
    pub name: String,
    pub artists: Vec<String>,
    pub explicit: bool,
    /// Pre-formatted duration text from the server, treated as opaque.
    pub duration: Option<String>,
    pub year: Option<String>,
    pub additional: Vec<String>,
}

impl SearchResult {
    /// Artist names joined for the title line; empty when unknown.
    pub fn artist_line(&self) -> String {
        self.artists.join(", ")
    }

    /// Bracketed detail tags in fixed order: explicit flag, duration, year,
    /// then each additional tag. Only fields that are present appear.
    pub fn detail_suffix(&self) -> String {
        let mut details: Vec<String> = Vec::new();
        if self.explicit {
            details.push("[E]".to_string());
        }
        if let Some(duration) = &self.duration {
            details.push(format!("[{duration}]"));
        }
        if let Some(year) = &self.year {
            details.push(format!("[{year}]"));
        }
        details.extend(self.additional.iter().map(|tag| format!("[{tag}]")));
        details.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_suffix_lists_fields_in_fixed_order() {
        let item = SearchResult {
            name: "Song".to_string(),
            artists: vec!["A".to_string()],
            explicit: true,
            duration: Some("3:45".to_string()),
            year: Some("2019".to_string()),
            additional: vec!["Remaster".to_string(), "Hi-Res".to_string()],
        };
        assert_eq!(item.detail_suffix(), "[E] [3:45] [2019] [Remaster] [Hi-Res]");
    }

    #[test]
    fn detail_suffix_skips_absent_fields() {
        let item = SearchResult {
            name: "Song".to_string(),
            year: Some("2019".to_string()),
            additional: vec!["Live".to_string()],
            ..Default::default()
        };
        assert_eq!(item.detail_suffix(), "[2019] [Live]");
    }

    #[test]
    fn detail_suffix_empty_when_nothing_present() {
        let item = SearchResult {
            name: "Song".to_string(),
            ..Default::default()
        };
        assert_eq!(item.detail_suffix(), "");
    }

    #[test]
    fn artist_line_joins_with_comma_space() {
        let item = SearchResult {
            artists: vec!["First".to_string(), "Second".to_string()],
            ..Default::default()
        };
        assert_eq!(item.artist_line(), "First, Second");
    }
}
