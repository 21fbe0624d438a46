//! Output document types for the website data contract.
//!
//! Struct field order is JSON key order, and the serde renames carry the exact
//! key names the site frontend reads. Treat both as a compatibility contract:
//! renaming a field here breaks the consuming build.

use serde::Serialize;

/// Singleton document for `site.json`.
#[derive(Debug, Clone, Serialize)]
pub struct SiteDoc {
    pub title: String,
    pub tagline: String,
    pub theme: String,
    pub season: String,
    pub nav: Vec<NavEntry>,
}

/// One entry of the fixed site navigation.
#[derive(Debug, Clone, Serialize)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
}

impl NavEntry {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// Flat `{ "items": [...] }` document (Artists, Novels, News, Stamps).
#[derive(Debug, Clone, Serialize)]
pub struct ItemsDoc<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub role: String,
    pub cover: String,
    pub bio: String,
    #[serde(rename = "artistPageUrl", skip_serializing_if = "Option::is_none")]
    pub artist_page_url: Option<String>,
    #[serde(rename = "spotifyArtistUrl", skip_serializing_if = "Option::is_none")]
    pub spotify_artist_url: Option<String>,
    /// Omitted entirely when no streaming playlist is set. The frontend keys
    /// the "listen on" block off the presence of this object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlists: Option<Playlists>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Playlists {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotify: Option<String>,
    #[serde(rename = "youtubeMusic", skip_serializing_if = "Option::is_none")]
    pub youtube_music: Option<String>,
    #[serde(rename = "amazonMusic", skip_serializing_if = "Option::is_none")]
    pub amazon_music: Option<String>,
}

impl Playlists {
    pub fn is_empty(&self) -> bool {
        self.spotify.is_none() && self.youtube_music.is_none() && self.amazon_music.is_none()
    }
}

/// `music.json` document: songs grouped into titled sections.
#[derive(Debug, Clone, Serialize)]
pub struct MusicDoc {
    pub sections: Vec<MusicSection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MusicSection {
    pub title: String,
    pub items: Vec<Song>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    #[serde(rename = "artistId")]
    pub artist_id: String,
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    pub status: String,
    pub cover: String,
    #[serde(rename = "lyricsPreview")]
    pub lyrics_preview: String,
    pub lyrics: String,
    pub note: String,
    pub tags: Vec<String>,
    /// Always serialized, even when empty. Unlike [`Artist::playlists`] the
    /// frontend expects this key on every song.
    pub links: SongLinks,
    #[serde(rename = "spotifyEmbed")]
    pub spotify_embed: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SongLinks {
    #[serde(rename = "YouTube", skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(rename = "Spotify", skip_serializing_if = "Option::is_none")]
    pub spotify: Option<String>,
    #[serde(rename = "Apple Music", skip_serializing_if = "Option::is_none")]
    pub apple_music: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Novel {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Always serialized, possibly `{}`.
    pub links: NovelLinks,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NovelLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narou: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kindle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsItem {
    pub date: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stamp {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cover: String,
    #[serde(rename = "listUrl")]
    pub list_url: String,
    #[serde(rename = "detailUrl")]
    pub detail_url: String,
    pub tags: Vec<String>,
}
