use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    YouTube,
    Facebook,
    Instagram,
    Twitter,
    TikTok,
    Vimeo,
    Dailymotion,
    Pinterest,
    LinkedIn,
    Unknown,
}

/// Content-source category a platform belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformKind {
    VideoSharing,
    SocialVideo,
    ImageVideo,
    MicroblogVideo,
    ShortFormVideo,
    VideoSharingAlt,
    #[serde(rename = "video-sharing-alt2")]
    VideoSharingAlt2,
    ImagePin,
    ProfessionalNetwork,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    CaseSensitive,
    IgnoreAsciiCase,
}

/// Classifier output. `Empty` tells the caller to reset its display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "platform")]
pub enum Detection {
    Empty,
    Platform(Platform),
}

impl Detection {
    pub fn platform(&self) -> Option<Platform> {
        match self {
            Detection::Empty => None,
            Detection::Platform(p) => Some(*p),
        }
    }
}

pub struct PlatformEntry {
    pub platform: Platform,
    pub markers: &'static [&'static str],
}

// Order is priority: the first entry with a matching marker wins.
pub const PLATFORM_TABLE: [PlatformEntry; 9] = [
    PlatformEntry {
        platform: Platform::YouTube,
        markers: &["youtube.com", "youtu.be"],
    },
    PlatformEntry {
        platform: Platform::Facebook,
        markers: &["facebook.com", "fb.com", "fb.watch"],
    },
    PlatformEntry {
        platform: Platform::Instagram,
        markers: &["instagram.com"],
    },
    PlatformEntry {
        platform: Platform::Twitter,
        markers: &["twitter.com", "x.com"],
    },
    PlatformEntry {
        platform: Platform::TikTok,
        markers: &["tiktok.com"],
    },
    PlatformEntry {
        platform: Platform::Vimeo,
        markers: &["vimeo.com"],
    },
    PlatformEntry {
        platform: Platform::Dailymotion,
        markers: &["dailymotion.com", "dai.ly"],
    },
    PlatformEntry {
        platform: Platform::Pinterest,
        markers: &["pinterest.com", "pin.it"],
    },
    PlatformEntry {
        platform: Platform::LinkedIn,
        markers: &["linkedin.com"],
    },
];

impl Platform {
    pub fn kind(&self) -> PlatformKind {
        match self {
            Platform::YouTube => PlatformKind::VideoSharing,
            Platform::Facebook => PlatformKind::SocialVideo,
            Platform::Instagram => PlatformKind::ImageVideo,
            Platform::Twitter => PlatformKind::MicroblogVideo,
            Platform::TikTok => PlatformKind::ShortFormVideo,
            Platform::Vimeo => PlatformKind::VideoSharingAlt,
            Platform::Dailymotion => PlatformKind::VideoSharingAlt2,
            Platform::Pinterest => PlatformKind::ImagePin,
            Platform::LinkedIn => PlatformKind::ProfessionalNetwork,
            Platform::Unknown => PlatformKind::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter / X",
            Platform::TikTok => "TikTok",
            Platform::Vimeo => "Vimeo",
            Platform::Dailymotion => "Dailymotion",
            Platform::Pinterest => "Pinterest",
            Platform::LinkedIn => "LinkedIn",
            Platform::Unknown => "Unknown",
        }
    }

    pub fn icon_hint(&self) -> &'static str {
        match self {
            Platform::YouTube => "fa-youtube",
            Platform::Facebook => "fa-facebook",
            Platform::Instagram => "fa-instagram",
            Platform::Twitter => "fa-twitter",
            Platform::TikTok => "fa-tiktok",
            Platform::Vimeo => "fa-vimeo-v",
            Platform::Dailymotion => "fa-play-circle",
            Platform::Pinterest => "fa-pinterest",
            Platform::LinkedIn => "fa-linkedin",
            Platform::Unknown => "fa-question-circle",
        }
    }

    pub fn markers(&self) -> &'static [&'static str] {
        PLATFORM_TABLE
            .iter()
            .find(|e| e.platform == *self)
            .map(|e| e.markers)
            .unwrap_or(&[])
    }

    /// Only video-sharing sources get a per-URL quality lookup.
    pub fn supports_quality_selection(&self) -> bool {
        self.kind() == PlatformKind::VideoSharing
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::YouTube => "youtube",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::TikTok => "tiktok",
            Platform::Vimeo => "vimeo",
            Platform::Dailymotion => "dailymotion",
            Platform::Pinterest => "pinterest",
            Platform::LinkedIn => "linkedin",
            Platform::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

impl PlatformKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKind::VideoSharing => "video-sharing",
            PlatformKind::SocialVideo => "social-video",
            PlatformKind::ImageVideo => "image-video",
            PlatformKind::MicroblogVideo => "microblog-video",
            PlatformKind::ShortFormVideo => "short-form-video",
            PlatformKind::VideoSharingAlt => "video-sharing-alt",
            PlatformKind::VideoSharingAlt2 => "video-sharing-alt2",
            PlatformKind::ImagePin => "image-pin",
            PlatformKind::ProfessionalNetwork => "professional-network",
            PlatformKind::Unknown => "unknown",
        }
    }
}

pub fn classify(input: &str) -> Detection {
    classify_with(input, MatchMode::CaseSensitive)
}

/// Substring match against `PLATFORM_TABLE`. No URL validation is done, so any
/// text containing a marker is accepted.
pub fn classify_with(input: &str, mode: MatchMode) -> Detection {
    let input = input.trim();
    if input.is_empty() {
        return Detection::Empty;
    }

    let haystack: Cow<'_, str> = match mode {
        MatchMode::CaseSensitive => Cow::Borrowed(input),
        MatchMode::IgnoreAsciiCase => Cow::Owned(input.to_ascii_lowercase()),
    };

    let platform = PLATFORM_TABLE
        .iter()
        .find(|entry| entry.markers.iter().any(|m| haystack.contains(m)))
        .map(|entry| entry.platform)
        .unwrap_or(Platform::Unknown);

    Detection::Platform(platform)
}
