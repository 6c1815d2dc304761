// Video feeds - fixed catalog of provider-hosted space streams
//
// The dashboard only picks which feed is shown; playback happens in the user's
// browser via the embed URL.

use std::fmt;

/// Whether a feed is streaming now or a recording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Live,
    Recorded,
}

impl fmt::Display for FeedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedStatus::Live => f.write_str("LIVE"),
            FeedStatus::Recorded => f.write_str("RECORDED"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFeed {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub status: FeedStatus,
}

pub const FEEDS: [VideoFeed; 4] = [
    VideoFeed {
        id: "iss_live",
        title: "International Space Station - Live Feed",
        description: "Real-time view from the International Space Station",
        url: "https://www.youtube.com/embed/XBPjVzSoepo?autoplay=0&mute=1",
        status: FeedStatus::Live,
    },
    VideoFeed {
        id: "earth_from_space",
        title: "Earth from Space - NASA",
        description: "Beautiful views of Earth captured from orbit",
        url: "https://www.youtube.com/embed/RtU_mdL2vBM?autoplay=0&mute=1",
        status: FeedStatus::Live,
    },
    VideoFeed {
        id: "spacex_starship",
        title: "SpaceX Starship Development",
        description: "Latest updates on Starship development and testing",
        url: "https://www.youtube.com/embed/L1PqHl_SrCU?autoplay=0&mute=1",
        status: FeedStatus::Recorded,
    },
    VideoFeed {
        id: "nasa_live",
        title: "NASA Live - Official Stream",
        description: "Official NASA live programming and mission coverage",
        url: "https://www.youtube.com/embed/21X5lGlDOfg?autoplay=0&mute=1",
        status: FeedStatus::Live,
    },
];

/// The catalog plus which feed is on screen
#[derive(Debug, Clone)]
pub struct VideoCatalog {
    feeds: &'static [VideoFeed],
    selected: usize,
}

impl Default for VideoCatalog {
    fn default() -> Self {
        Self {
            feeds: &FEEDS,
            selected: 0,
        }
    }
}

impl VideoCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feeds(&self) -> &[VideoFeed] {
        self.feeds
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn current(&self) -> &VideoFeed {
        &self.feeds[self.selected]
    }

    /// Select by id; unknown ids fall back to the first feed
    pub fn select(&mut self, id: &str) {
        self.selected = self.feeds.iter().position(|f| f.id == id).unwrap_or(0);
        tracing::debug!("Selected video feed {}", self.current().id);
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.feeds.len();
    }

    pub fn prev(&mut self) {
        self.selected = (self.selected + self.feeds.len() - 1) % self.feeds.len();
    }

    pub fn live_count(&self) -> usize {
        self.feeds
            .iter()
            .filter(|f| f.status == FeedStatus::Live)
            .count()
    }
}
