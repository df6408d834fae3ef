use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileImage {
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

impl ProfileImage {
    /// Blank URLs are treated as "no avatar".
    pub fn into_url(self) -> Option<String> {
        self.profile_image_url.filter(|url| !url.trim().is_empty())
    }
}

/// Initials rendered in place of a missing avatar.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Ada Obi", "AO")]
    #[test_case("acme", "A")]
    #[test_case("  ", "?")]
    #[test_case("Mary Jane Watson", "MJ")]
    fn builds_initials(name: &str, expected: &str) {
        assert_eq!(initials(name), expected);
    }

    #[test]
    fn blank_url_means_no_avatar() {
        let image: ProfileImage = serde_json::from_str(r#"{"profileImageUrl":""}"#).unwrap();
        assert_eq!(image.into_url(), None);
    }
}
