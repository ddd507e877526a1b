//! Built-in sample catalog and the ranking used by the catalog provider

use super::song::{Release, Song, SongScore};

/// Maximum number of songs a ranking returns
pub const MAX_RECOMMENDATIONS: usize = 5;

/// One entry of the built-in catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub artist: &'static str,
    pub album: &'static str,
    pub year: u16,
    pub genre: &'static str,
    pub lyrics: &'static str,
    pub popularity: u8,
}

impl CatalogEntry {
    fn matches(&self, needle_lower: &str) -> bool {
        [self.title, self.artist, self.lyrics, self.genre]
            .iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
    }

    pub fn to_song(&self) -> Song {
        Song {
            title: self.title.to_string(),
            artist: self.artist.to_string(),
            genre: self.genre.to_string(),
            album: Some(self.album.to_string()),
            release: Some(Release::Year(self.year)),
            lyrics_excerpt: self.lyrics.to_string(),
            score: SongScore::Popularity(self.popularity),
        }
    }
}

pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        title: "Bohemian Rhapsody",
        artist: "Queen",
        album: "A Night at the Opera",
        year: 1975,
        genre: "Rock",
        lyrics: "Is this the real life? Is this just fantasy?",
        popularity: 95,
    },
    CatalogEntry {
        title: "Imagine",
        artist: "John Lennon",
        album: "Imagine",
        year: 1971,
        genre: "Soft Rock",
        lyrics: "Imagine there's no heaven, it's easy if you try",
        popularity: 92,
    },
    CatalogEntry {
        title: "Hotel California",
        artist: "Eagles",
        album: "Hotel California",
        year: 1976,
        genre: "Rock",
        lyrics: "On a dark desert highway, cool wind in my hair",
        popularity: 90,
    },
    CatalogEntry {
        title: "Stairway to Heaven",
        artist: "Led Zeppelin",
        album: "Led Zeppelin IV",
        year: 1971,
        genre: "Rock",
        lyrics: "There's a lady who's sure all that glitters is gold",
        popularity: 88,
    },
    CatalogEntry {
        title: "Sweet Child O' Mine",
        artist: "Guns N' Roses",
        album: "Appetite for Destruction",
        year: 1987,
        genre: "Hard Rock",
        lyrics: "She's got a smile that it seems to me",
        popularity: 87,
    },
    CatalogEntry {
        title: "Billie Jean",
        artist: "Michael Jackson",
        album: "Thriller",
        year: 1982,
        genre: "Pop",
        lyrics: "She was more like a beauty queen from a movie scene",
        popularity: 94,
    },
    CatalogEntry {
        title: "Like a Rolling Stone",
        artist: "Bob Dylan",
        album: "Highway 61 Revisited",
        year: 1965,
        genre: "Folk Rock",
        lyrics: "How does it feel to be on your own",
        popularity: 89,
    },
    CatalogEntry {
        title: "Smells Like Teen Spirit",
        artist: "Nirvana",
        album: "Nevermind",
        year: 1991,
        genre: "Grunge",
        lyrics: "Load up on guns, bring your friends",
        popularity: 91,
    },
    CatalogEntry {
        title: "Yesterday",
        artist: "The Beatles",
        album: "Help!",
        year: 1965,
        genre: "Pop Rock",
        lyrics: "Yesterday, all my troubles seemed so far away",
        popularity: 93,
    },
    CatalogEntry {
        title: "Purple Rain",
        artist: "Prince",
        album: "Purple Rain",
        year: 1984,
        genre: "Pop Rock",
        lyrics: "I never meant to cause you any sorrow",
        popularity: 86,
    },
];

/// Rank `catalog` against `query`.
///
/// Entries whose title, artist, lyrics or genre contain the query
/// (case-insensitive) are sorted by popularity, highest first, and the top
/// [`MAX_RECOMMENDATIONS`] are returned. When nothing matches, the most
/// popular entries of the whole catalog are returned instead. Sorting is
/// stable, so ties keep catalog order.
pub fn rank(query: &str, catalog: &[CatalogEntry]) -> Vec<Song> {
    let needle = query.to_lowercase();

    let mut matches: Vec<&CatalogEntry> = catalog.iter().filter(|e| e.matches(&needle)).collect();
    if matches.is_empty() {
        matches = catalog.iter().collect();
    }

    matches.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    matches
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(CatalogEntry::to_song)
        .collect()
}
