//! Sheet-to-Record Transformer.
//!
//! One pure function per recognized sheet, `&impl Sheet -> Document`. Looped
//! sheets scan rows through [`data_rows`]: data starts at row 3 (rows 1-2 are
//! headers/titles) and scanning stops at the first row whose identifying cell
//! is blank. Rows after that sentinel are ignored even when populated.

use crate::types::{
    Artist, ItemsDoc, MusicDoc, MusicSection, NavEntry, NewsItem, Novel, NovelLinks, Playlists,
    SiteDoc, Song, SongLinks, Stamp,
};
use crate::workbook::Sheet;

/// First data row on every looped sheet.
pub const DATA_START_ROW: u32 = 3;

const DEFAULT_SITE_TITLE: &str = "SenYouAI Studio / 愛玩王姫 Official";
const DEFAULT_SITE_TAGLINE: &str = "AIとあなたで育てるバーチャルプロジェクト";
const DEFAULT_SITE_THEME: &str = "dark";
const DEFAULT_SITE_SEASON: &str = "default";
const DEFAULT_SONG_STATUS: &str = "released";
const DEFAULT_NEWS_ICON: &str = "📢";

/// Row numbers of the contiguous data block of a sheet, in increasing order.
///
/// Yields lazily and terminates at the first blank cell in `id_col`. A sheet
/// whose row 3 identifying cell is blank yields nothing.
pub fn data_rows<S: Sheet + ?Sized>(sheet: &S, id_col: char) -> DataRows<'_, S> {
    DataRows {
        sheet,
        id_col,
        row: DATA_START_ROW,
    }
}

pub struct DataRows<'a, S: ?Sized> {
    sheet: &'a S,
    id_col: char,
    row: u32,
}

impl<S: Sheet + ?Sized> Iterator for DataRows<'_, S> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let row = self.row;
        self.sheet.cell(self.id_col, row)?;
        self.row += 1;
        Some(row)
    }
}

/// Split a comma-separated cell into trimmed tokens. No dedup, order kept.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|t| t.trim().to_string()).collect()
}

/// Site sheet: singleton read from B2..B5, with literal fallbacks and the
/// fixed navigation list.
pub fn site(sheet: &impl Sheet) -> SiteDoc {
    SiteDoc {
        title: sheet.text_or('B', 2, DEFAULT_SITE_TITLE),
        tagline: sheet.text_or('B', 3, DEFAULT_SITE_TAGLINE),
        theme: sheet.text_or('B', 4, DEFAULT_SITE_THEME),
        season: sheet.text_or('B', 5, DEFAULT_SITE_SEASON),
        nav: vec![
            NavEntry::new("home", "Home"),
            NavEntry::new("music", "Music"),
            NavEntry::new("novels", "Novel"),
            NavEntry::new("stamps", "LINE"),
            NavEntry::new("about", "About"),
        ],
    }
}

pub fn artists(sheet: &impl Sheet) -> ItemsDoc<Artist> {
    let items = data_rows(sheet, 'A')
        .map(|row| {
            let playlists = Playlists {
                spotify: sheet.cell('F', row),
                youtube_music: sheet.cell('G', row),
                amazon_music: sheet.cell('H', row),
            };
            Artist {
                id: sheet.text('A', row),
                name: sheet.text('B', row),
                role: sheet.text('C', row),
                cover: sheet.text('D', row),
                bio: sheet.text('E', row),
                artist_page_url: sheet.cell('I', row),
                spotify_artist_url: sheet.cell('J', row),
                playlists: (!playlists.is_empty()).then_some(playlists),
            }
        })
        .collect();
    ItemsDoc { items }
}

/// Music sheet: all songs land in a single "Singles" section.
pub fn music(sheet: &impl Sheet) -> MusicDoc {
    let items = data_rows(sheet, 'A')
        .map(|row| Song {
            id: sheet.text('A', row),
            title: sheet.text('B', row),
            artist_id: sheet.text('C', row),
            release_date: sheet.text('D', row),
            status: sheet.text_or('E', row, DEFAULT_SONG_STATUS),
            cover: sheet.text('F', row),
            lyrics_preview: sheet.text('G', row),
            lyrics: sheet.text('H', row),
            note: sheet.text('I', row),
            tags: sheet
                .cell('J', row)
                .map(|raw| split_tags(&raw))
                .unwrap_or_default(),
            links: SongLinks {
                youtube: sheet.cell('K', row),
                spotify: sheet.cell('L', row),
                apple_music: sheet.cell('M', row),
            },
            spotify_embed: sheet.text('N', row),
        })
        .collect();

    MusicDoc {
        sections: vec![MusicSection {
            title: "Singles".to_string(),
            items,
        }],
    }
}

pub fn novels(sheet: &impl Sheet) -> ItemsDoc<Novel> {
    let items = data_rows(sheet, 'A')
        .map(|row| Novel {
            id: sheet.text('A', row),
            title: sheet.text('B', row),
            subtitle: sheet.text('C', row),
            description: sheet.text('D', row),
            links: NovelLinks {
                narou: sheet.cell('E', row),
                kindle: sheet.cell('F', row),
                other: sheet.cell('G', row),
            },
        })
        .collect();
    ItemsDoc { items }
}

/// News sheet: the date column doubles as the identifying column.
pub fn news(sheet: &impl Sheet) -> ItemsDoc<NewsItem> {
    let items = data_rows(sheet, 'A')
        .map(|row| NewsItem {
            date: sheet.text('A', row),
            title: sheet.text('B', row),
            description: sheet.text('C', row),
            link: sheet.text('D', row),
            icon: sheet.text_or('E', row, DEFAULT_NEWS_ICON),
        })
        .collect();
    ItemsDoc { items }
}

pub fn stamps(sheet: &impl Sheet) -> ItemsDoc<Stamp> {
    let items = data_rows(sheet, 'A')
        .map(|row| Stamp {
            id: sheet.text('A', row),
            title: sheet.text('B', row),
            description: sheet.text('C', row),
            cover: sheet.text('D', row),
            list_url: sheet.text('E', row),
            detail_url: sheet.text('F', row),
            tags: sheet
                .cell('G', row)
                .map(|raw| split_tags(&raw))
                .unwrap_or_default(),
        })
        .collect();
    ItemsDoc { items }
}
