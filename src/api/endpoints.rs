// PUBG Tracker endpoint definitions and URL builders

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://pubgtracker.com/api";
pub const API_KEY_HEADER: &str = "TRN-Api-Key";
pub const USER_AGENT: &str = concat!("pubg_tracker/", env!("CARGO_PKG_VERSION"));

// Only the PC platform is served by the profile endpoint.
const PROFILE_PLATFORM: &str = "pc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Profile { nickname: &'a str },
    SearchBySteamId { steam_id: &'a str },
}

impl<'a> Endpoint<'a> {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Profile { nickname } => format!(
                "/profile/{}/{}",
                PROFILE_PLATFORM,
                urlencoding::encode(nickname)
            ),
            Endpoint::SearchBySteamId { .. } => "/search".to_string(),
        }
    }

    /// Rejects nicknames that cannot stand as a single path segment.
    pub fn validate(&self) -> Result<(), AppError> {
        match self {
            Endpoint::Profile { nickname } if matches!(*nickname, "" | "." | "..") => {
                Err(AppError::InvalidNickname(nickname.to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Query parameter to append, left unencoded; the transport encodes it.
    pub fn query(&self) -> Option<(&'static str, &'a str)> {
        match self {
            Endpoint::Profile { .. } => None,
            Endpoint::SearchBySteamId { steam_id } => Some(("steamId", *steam_id)),
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_url_uses_pc_platform() {
        let endpoint = Endpoint::Profile { nickname: "lazyjustin" };
        assert_eq!(
            endpoint.url(DEFAULT_BASE_URL),
            "https://pubgtracker.com/api/profile/pc/lazyjustin"
        );
        assert_eq!(endpoint.query(), None);
    }

    #[test]
    fn nickname_is_a_single_escaped_segment() {
        let endpoint = Endpoint::Profile { nickname: "../../search?x=1#y" };
        assert_eq!(endpoint.path(), "/profile/pc/..%2F..%2Fsearch%3Fx%3D1%23y");
        assert!(endpoint.validate().is_ok());
    }

    #[test]
    fn dot_and_empty_nicknames_are_rejected() {
        for nickname in ["", ".", ".."] {
            assert!(matches!(
                Endpoint::Profile { nickname }.validate(),
                Err(AppError::InvalidNickname(_))
            ));
        }
    }

    #[test]
    fn search_carries_steam_id_as_query() {
        let endpoint = Endpoint::SearchBySteamId { steam_id: "76561198000000000" };
        assert_eq!(endpoint.url(DEFAULT_BASE_URL), "https://pubgtracker.com/api/search");
        assert_eq!(endpoint.query(), Some(("steamId", "76561198000000000")));
    }
}
