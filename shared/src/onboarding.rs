//! Social-link onboarding: which platforms are linked, how the return from an
//! external authorization redirect is recognised, and where "continue" leads.

use crate::models::socials::{LinkedSocials, Platform};
use crate::models::user::UserType;
use log::debug;

/// Query parameter the backend appends when it sends the browser back.
pub const CONNECTED_PARAM: &str = "connected";

/// Platforms offered during onboarding, in display order.
pub const ONBOARDING_PLATFORMS: [Platform; 4] = [
    Platform::Instagram,
    Platform::Facebook,
    Platform::Twitter,
    Platform::Youtube,
];

/// Where "continue" goes when the user type could not be determined.
pub const FALLBACK_DESTINATION: &str = "/settings";

/// One-shot signal read from the URL at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectHandshake {
    Pending,
    Completed(Platform),
}

impl ConnectHandshake {
    /// Parses a query string (`?a=b&connected=instagram`, leading `?` optional).
    ///
    /// Only Instagram has a backend authorization flow, so a marker naming any
    /// other platform is treated as no handshake at all.
    pub fn from_query(query: &str) -> Self {
        query_pairs(query)
            .find(|(key, _)| key == CONNECTED_PARAM)
            .and_then(|(_, value)| Platform::from_str_opt(&value))
            .filter(|platform| *platform == Platform::Instagram)
            .map(ConnectHandshake::Completed)
            .unwrap_or(ConnectHandshake::Pending)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, ConnectHandshake::Completed(_))
    }
}

/// Whether the query carries the completion marker, whatever its value.
pub fn has_connect_marker(query: &str) -> bool {
    query_pairs(query).any(|(key, _)| key == CONNECTED_PARAM)
}

fn query_pairs(query: &str) -> impl Iterator<Item = (String, String)> + '_ {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

/// Removes the completion marker from `path?query#hash`, keeping everything else.
pub fn strip_connected_marker(url: &str) -> String {
    let (before_hash, hash) = match url.split_once('#') {
        Some((head, tail)) => (head, Some(tail)),
        None => (url, None),
    };
    let (path, query) = before_hash.split_once('?').unwrap_or((before_hash, ""));

    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split_once('=').map(|(k, _)| k).unwrap_or(pair);
            decode(key) != CONNECTED_PARAM
        })
        .collect();

    let mut cleaned = path.to_string();
    if !kept.is_empty() {
        cleaned.push('?');
        cleaned.push_str(&kept.join("&"));
    }
    if let Some(hash) = hash {
        cleaned.push('#');
        cleaned.push_str(hash);
    }
    cleaned
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformLink {
    pub platform: Platform,
    pub linked: bool,
    pub handle: Option<String>,
}

/// What pressing "Connect" on a platform does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectAction {
    /// Full-page navigation to the backend's authorization entry point.
    Redirect(String),
    /// Linking is not available yet for this platform.
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingState {
    links: Vec<PlatformLink>,
    handshake: ConnectHandshake,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingState {
    /// Every onboarding platform starts unlinked.
    pub fn new() -> Self {
        Self {
            links: ONBOARDING_PLATFORMS
                .iter()
                .map(|platform| PlatformLink {
                    platform: *platform,
                    linked: false,
                    handle: None,
                })
                .collect(),
            handshake: ConnectHandshake::Pending,
        }
    }

    /// Overlays the backend's status. Only Instagram can be linked server-side,
    /// so the other platforms keep reporting unlinked.
    pub fn apply_live_status(&mut self, socials: &LinkedSocials) {
        let handshake_done = self.handshake == ConnectHandshake::Completed(Platform::Instagram);
        if let Some(link) = self.link_mut(Platform::Instagram) {
            // A stale fetch must not undo the optimistic mark from the redirect.
            link.linked = socials.instagram_linked || handshake_done;
            link.handle = socials.handle(Platform::Instagram).map(str::to_string);
        }
    }

    /// Applies the post-redirect signal. Returns whether Instagram was marked
    /// linked by it.
    pub fn apply_handshake(&mut self, handshake: ConnectHandshake) -> bool {
        match handshake {
            ConnectHandshake::Completed(Platform::Instagram) => {
                debug!("Instagram authorization completed, marking linked");
                self.handshake = handshake;
                if let Some(link) = self.link_mut(Platform::Instagram) {
                    link.linked = true;
                }
                true
            }
            ConnectHandshake::Completed(other) => {
                debug!("Ignoring completion marker for {}", other);
                false
            }
            ConnectHandshake::Pending => false,
        }
    }

    pub fn connect_action(&self, platform: Platform, login_url: &str) -> ConnectAction {
        match platform {
            Platform::Instagram => ConnectAction::Redirect(login_url.to_string()),
            other => ConnectAction::Placeholder(format!(
                "{} linking is coming soon",
                other.label()
            )),
        }
    }

    pub fn links(&self) -> &[PlatformLink] {
        &self.links
    }

    pub fn handshake(&self) -> ConnectHandshake {
        self.handshake
    }

    pub fn is_linked(&self, platform: Platform) -> bool {
        self.links
            .iter()
            .any(|link| link.platform == platform && link.linked)
    }

    /// Gate for the "continue" action.
    pub fn has_linked_accounts(&self) -> bool {
        self.links.iter().any(|link| link.linked)
    }

    fn link_mut(&mut self, platform: Platform) -> Option<&mut PlatformLink> {
        self.links.iter_mut().find(|link| link.platform == platform)
    }
}

/// Destination of the "continue" action for a given account type.
pub fn continue_destination(user_type: Option<UserType>) -> &'static str {
    match user_type {
        Some(UserType::Influencer) => "/influencer/profile",
        Some(UserType::Business) => "/business/profile",
        None => FALLBACK_DESTINATION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("?connected=instagram", ConnectHandshake::Completed(Platform::Instagram))]
    #[case("connected=instagram", ConnectHandshake::Completed(Platform::Instagram))]
    #[case("?ref=mail&connected=Instagram", ConnectHandshake::Completed(Platform::Instagram))]
    #[case("?connected=myspace", ConnectHandshake::Pending)]
    #[case("?connected=facebook", ConnectHandshake::Pending)]
    #[case("?connected=twitter", ConnectHandshake::Pending)]
    #[case("?connected=youtube", ConnectHandshake::Pending)]
    #[case("?connected", ConnectHandshake::Pending)]
    #[case("", ConnectHandshake::Pending)]
    #[case("?ref=mail", ConnectHandshake::Pending)]
    fn parses_handshake(#[case] query: &str, #[case] expected: ConnectHandshake) {
        assert_eq!(ConnectHandshake::from_query(query), expected);
    }

    #[rstest]
    #[case("/onboarding/socials?connected=instagram", "/onboarding/socials")]
    #[case("/onboarding/socials?ref=mail&connected=instagram", "/onboarding/socials?ref=mail")]
    #[case("/onboarding/socials?connected=instagram&ref=mail#top", "/onboarding/socials?ref=mail#top")]
    #[case("/onboarding/socials", "/onboarding/socials")]
    fn strips_only_the_marker(#[case] url: &str, #[case] expected: &str) {
        let cleaned = strip_connected_marker(url);
        assert_eq!(cleaned, expected);
        assert!(!cleaned.contains(CONNECTED_PARAM));
    }

    #[test]
    fn seeds_four_unlinked_platforms() {
        let state = OnboardingState::new();
        let platforms: Vec<Platform> = state.links().iter().map(|l| l.platform).collect();
        assert_eq!(platforms, ONBOARDING_PLATFORMS.to_vec());
        assert!(!state.has_linked_accounts());
    }

    #[test]
    fn redirect_return_marks_instagram_linked() {
        let mut state = OnboardingState::new();
        let needs_cleanup =
            state.apply_handshake(ConnectHandshake::from_query("?connected=instagram"));
        assert!(needs_cleanup);
        assert!(state.is_linked(Platform::Instagram));
        assert!(state.has_linked_accounts());
        assert!(state.handshake().is_completed());
    }

    #[rstest]
    #[case("?connected=facebook")]
    #[case("?connected=twitter")]
    #[case("?connected=youtube")]
    fn marker_for_other_platforms_links_nothing(#[case] query: &str) {
        let mut state = OnboardingState::new();
        assert!(has_connect_marker(query));
        assert!(!state.apply_handshake(ConnectHandshake::from_query(query)));
        state.apply_live_status(&LinkedSocials::default());
        assert!(!state.has_linked_accounts());
    }

    #[rstest]
    #[case(Platform::Facebook)]
    #[case(Platform::Twitter)]
    #[case(Platform::Youtube)]
    fn completed_handshake_for_other_platform_is_ignored(#[case] platform: Platform) {
        let mut state = OnboardingState::new();
        assert!(!state.apply_handshake(ConnectHandshake::Completed(platform)));
        state.apply_live_status(&LinkedSocials::default());
        assert!(!state.is_linked(platform));
        assert!(!state.has_linked_accounts());
        assert_eq!(state, OnboardingState::new());
    }

    #[rstest]
    #[case("?connected=instagram", true)]
    #[case("?ref=mail&connected=youtube", true)]
    #[case("?connected", true)]
    #[case("?ref=mail", false)]
    #[case("", false)]
    fn detects_marker_regardless_of_value(#[case] query: &str, #[case] expected: bool) {
        assert_eq!(has_connect_marker(query), expected);
    }

    #[test]
    fn pending_handshake_changes_nothing() {
        let mut state = OnboardingState::new();
        assert!(!state.apply_handshake(ConnectHandshake::Pending));
        assert_eq!(state, OnboardingState::new());
    }

    #[test]
    fn live_status_overlays_instagram_only() {
        let mut state = OnboardingState::new();
        state.apply_live_status(&LinkedSocials {
            instagram_linked: true,
            instagram_username: Some("acme".into()),
            facebook: true,
            twitter: true,
            youtube: true,
            ..Default::default()
        });
        assert!(state.is_linked(Platform::Instagram));
        assert_eq!(state.links()[0].handle.as_deref(), Some("acme"));
        assert!(!state.is_linked(Platform::Facebook));
        assert!(!state.is_linked(Platform::Twitter));
        assert!(!state.is_linked(Platform::Youtube));
    }

    #[test]
    fn stale_status_does_not_undo_completed_handshake() {
        let mut state = OnboardingState::new();
        state.apply_handshake(ConnectHandshake::Completed(Platform::Instagram));
        state.apply_live_status(&LinkedSocials::default());
        assert!(state.is_linked(Platform::Instagram));
    }

    #[test]
    fn continue_gate_follows_links() {
        let mut state = OnboardingState::new();
        assert!(!state.has_linked_accounts());
        state.apply_live_status(&LinkedSocials {
            instagram_linked: true,
            ..Default::default()
        });
        assert!(state.has_linked_accounts());
    }

    #[test]
    fn connect_redirects_for_instagram_only() {
        let state = OnboardingState::new();
        assert_eq!(
            state.connect_action(Platform::Instagram, "http://api/login"),
            ConnectAction::Redirect("http://api/login".to_string())
        );
        assert_eq!(
            state.connect_action(Platform::Youtube, "http://api/login"),
            ConnectAction::Placeholder("YouTube linking is coming soon".to_string())
        );
    }

    #[rstest]
    #[case(Some(UserType::Influencer), "/influencer/profile")]
    #[case(Some(UserType::Business), "/business/profile")]
    #[case(None, FALLBACK_DESTINATION)]
    fn continue_routes_by_user_type(#[case] user_type: Option<UserType>, #[case] expected: &str) {
        assert_eq!(continue_destination(user_type), expected);
    }
}
