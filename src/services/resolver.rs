//! Stream URL resolution
//!
//! Pure functions turning catalog records plus credentials into playable
//! URLs. No I/O; the same inputs always give the same string.

use crate::models::{CatalogItem, Credentials, Episode, DEFAULT_EXTENSION};

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn token_suffix(access_token: Option<&str>) -> String {
    non_empty(access_token)
        .map(|t| format!("?token={}", t))
        .unwrap_or_default()
}

/// Build playback URL for live streams
pub fn live_url(creds: &Credentials, stream_id: i64) -> String {
    format!(
        "{}/live/{}/{}/{}.ts",
        creds.base(),
        creds.username,
        creds.password,
        stream_id
    )
}

/// Build playback URL for a movie
///
/// A provider-supplied `direct_source` wins over everything else.
pub fn movie_url(item: &CatalogItem, creds: &Credentials) -> String {
    if let Some(direct) = non_empty(item.direct_source.as_deref()) {
        return direct.to_string();
    }

    format!(
        "{}/movie/{}/{}/{}.{}{}",
        creds.base(),
        creds.username,
        creds.password,
        item.stream_id,
        non_empty(item.container_extension.as_deref()).unwrap_or(DEFAULT_EXTENSION),
        token_suffix(item.access_token.as_deref())
    )
}

/// Build playback URL for series episodes
pub fn episode_url(episode: &Episode, creds: &Credentials) -> String {
    format!(
        "{}/series/{}/{}/{}.{}{}",
        creds.base(),
        creds.username,
        creds.password,
        episode.id,
        non_empty(Some(episode.container_extension.as_str())).unwrap_or(DEFAULT_EXTENSION),
        token_suffix(episode.access_token.as_deref())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials {
            server: "http://h:80".to_string(),
            username: "u".to_string(),
            password: "p".to_string(),
        }
    }

    fn movie() -> CatalogItem {
        CatalogItem {
            name: "Heat".to_string(),
            logo: String::new(),
            year: "N/A".to_string(),
            category: "5".to_string(),
            stream_id: 42,
            container_extension: Some("mkv".to_string()),
            direct_source: Some(String::new()),
            access_token: None,
        }
    }

    #[test]
    fn test_movie_url_without_token() {
        assert_eq!(movie_url(&movie(), &creds()), "http://h:80/movie/u/p/42.mkv");
    }

    #[test]
    fn test_movie_url_with_token() {
        let item = CatalogItem {
            access_token: Some("abc".to_string()),
            ..movie()
        };
        assert_eq!(
            movie_url(&item, &creds()),
            "http://h:80/movie/u/p/42.mkv?token=abc"
        );
    }

    #[test]
    fn test_movie_url_empty_token_is_ignored() {
        let item = CatalogItem {
            access_token: Some(String::new()),
            ..movie()
        };
        assert_eq!(movie_url(&item, &creds()), "http://h:80/movie/u/p/42.mkv");
    }

    #[test]
    fn test_movie_direct_source_verbatim() {
        let item = CatalogItem {
            direct_source: Some("http://cdn/x.mp4".to_string()),
            access_token: Some("abc".to_string()),
            ..movie()
        };
        assert_eq!(movie_url(&item, &creds()), "http://cdn/x.mp4");
    }

    #[test]
    fn test_movie_default_extension() {
        let item = CatalogItem {
            container_extension: None,
            ..movie()
        };
        assert_eq!(movie_url(&item, &creds()), "http://h:80/movie/u/p/42.mp4");
    }

    #[test]
    fn test_episode_url() {
        let episode = Episode {
            id: 1001,
            title: "Pilot".to_string(),
            container_extension: "mkv".to_string(),
            access_token: Some("tok".to_string()),
        };
        assert_eq!(
            episode_url(&episode, &creds()),
            "http://h:80/series/u/p/1001.mkv?token=tok"
        );

        let bare = Episode {
            container_extension: String::new(),
            access_token: None,
            ..episode
        };
        assert_eq!(episode_url(&bare, &creds()), "http://h:80/series/u/p/1001.mp4");
    }

    #[test]
    fn test_live_url_and_trailing_slash() {
        let mut c = creds();
        c.server.push('/');
        assert_eq!(live_url(&c, 7), "http://h:80/live/u/p/7.ts");
        assert_eq!(movie_url(&movie(), &c), "http://h:80/movie/u/p/42.mkv");
    }
}
