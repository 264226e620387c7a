//! Media uploads
//!
//! Checks applied to files before they are handed to object storage, and
//! the buckets they go into.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rand::Rng;
use thiserror::Error;

const MIB: u64 = 1024 * 1024;

/// Accepted image content types.
pub const IMAGE_ALLOWED_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
];

/// Accepted video content types.
pub const VIDEO_ALLOWED_TYPES: &[&str] = &[
    "video/mp4",
    "video/webm",
    "video/quicktime",
    "video/x-msvideo",
];

/// Largest accepted image, in bytes.
pub const MAX_IMAGE_BYTES: u64 = 10 * MIB;

/// Largest accepted video, in bytes.
pub const MAX_VIDEO_BYTES: u64 = 100 * MIB;

/// Kind of media a bucket holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn allowed_types(self) -> &'static [&'static str] {
        match self {
            Self::Image => IMAGE_ALLOWED_TYPES,
            Self::Video => VIDEO_ALLOWED_TYPES,
        }
    }

    pub fn max_bytes(self) -> u64 {
        match self {
            Self::Image => MAX_IMAGE_BYTES,
            Self::Video => MAX_VIDEO_BYTES,
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Image => "image",
            Self::Video => "video",
        })
    }
}

/// Object storage buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Photos,
    Live2dImages,
    Live2dVideos,
    Games,
}

impl Bucket {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Photos => "photos",
            Self::Live2dImages => "live2d-images",
            Self::Live2dVideos => "live2d-videos",
            Self::Games => "games",
        }
    }

    /// Kind of media the bucket accepts.
    pub const fn kind(self) -> MediaKind {
        match self {
            Self::Live2dVideos => MediaKind::Video,
            Self::Photos | Self::Live2dImages | Self::Games => MediaKind::Image,
        }
    }
}

impl Display for Bucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown bucket name.
#[derive(Debug, Error, PartialEq)]
#[error("unknown bucket `{0}`")]
pub struct UnknownBucket(String);

impl FromStr for Bucket {
    type Err = UnknownBucket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Photos,
            Self::Live2dImages,
            Self::Live2dVideos,
            Self::Games,
        ]
        .into_iter()
        .find(|bucket| bucket.as_str() == s.trim())
        .ok_or_else(|| UnknownBucket(s.to_string()))
    }
}

/// A file picked for upload.
#[derive(Clone, PartialEq)]
pub struct MediaFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for MediaFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MediaFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.size())
            .finish()
    }
}

impl MediaFile {
    pub fn size(&self) -> u64 {
        u64::try_from(self.bytes.len()).unwrap_or(u64::MAX)
    }

    /// Extension of the original file name, if it has one.
    pub fn extension(&self) -> Option<&str> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, extension)| extension)
            .filter(|extension| !extension.is_empty())
    }
}

/// Reasons a file is refused before upload.
#[derive(Debug, Error, PartialEq)]
pub enum MediaError {
    #[error("invalid file type `{content_type}`; expected {kind} ({})", .kind.allowed_types().join(", "))]
    UnsupportedType {
        content_type: String,
        kind: MediaKind,
    },

    #[error("file too large: {size} bytes, maximum is {} MB", .limit / MIB)]
    TooLarge { size: u64, limit: u64 },
}

/// Check a file's content type and size against what `bucket` accepts.
///
/// # Errors
///
/// - [`MediaError::UnsupportedType`]: the content type is not on the allow-list.
/// - [`MediaError::TooLarge`]: the file exceeds the size ceiling.
pub fn validate(bucket: Bucket, file: &MediaFile) -> Result<(), MediaError> {
    let kind = bucket.kind();

    if !kind.allowed_types().contains(&file.content_type.as_str()) {
        return Err(MediaError::UnsupportedType {
            content_type: file.content_type.clone(),
            kind,
        });
    }

    let limit = kind.max_bytes();

    if file.size() > limit {
        return Err(MediaError::TooLarge {
            size: file.size(),
            limit,
        });
    }

    Ok(())
}

/// Storage object name: upload time in Unix milliseconds, a random token and
/// the original extension.
pub fn object_name(file: &MediaFile, unix_millis: i64, token: &str) -> String {
    match file.extension() {
        Some(extension) => format!("{unix_millis}-{token}.{extension}"),
        None => format!("{unix_millis}-{token}"),
    }
}

/// Random lowercase base-36 token of `len` characters, used in object names.
pub fn random_token<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .filter_map(|_| char::from_digit(rng.gen_range(0..36), 36))
        .collect()
}

/// Best-effort content type for a file extension, for files read from disk.
pub fn content_type_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "mp4" => Some("video/mp4"),
        "webm" => Some("video/webm"),
        "mov" => Some("video/quicktime"),
        "avi" => Some("video/x-msvideo"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use testresult::TestResult;

    use super::*;

    fn file(name: &str, content_type: &str, size: usize) -> MediaFile {
        MediaFile {
            file_name: name.to_string(),
            content_type: content_type.to_string(),
            bytes: vec![0; size],
        }
    }

    #[test]
    fn image_bucket_accepts_allowed_image() {
        assert_eq!(validate(Bucket::Photos, &file("a.png", "image/png", 10)), Ok(()));
    }

    #[test]
    fn image_bucket_rejects_video() {
        let result = validate(Bucket::Games, &file("clip.mp4", "video/mp4", 10));

        assert_eq!(
            result,
            Err(MediaError::UnsupportedType {
                content_type: "video/mp4".to_string(),
                kind: MediaKind::Image,
            })
        );
    }

    #[test]
    fn video_bucket_rejects_oversized_file() {
        let oversized = usize::try_from(MAX_VIDEO_BYTES).unwrap_or(usize::MAX) + 1;

        let result = validate(
            Bucket::Live2dVideos,
            &file("rig.webm", "video/webm", oversized),
        );

        assert!(
            matches!(result, Err(MediaError::TooLarge { limit, .. }) if limit == MAX_VIDEO_BYTES),
            "expected TooLarge, got {result:?}"
        );
    }

    #[test]
    fn image_at_exact_limit_is_accepted() {
        let exact = usize::try_from(MAX_IMAGE_BYTES).unwrap_or(usize::MAX);

        assert_eq!(
            validate(Bucket::Live2dImages, &file("big.jpg", "image/jpeg", exact)),
            Ok(())
        );
    }

    #[test]
    fn object_name_keeps_extension() {
        assert_eq!(
            object_name(&file("Sunset.Final.JPG", "image/jpeg", 1), 1_700_000_000_000, "ab12cd3"),
            "1700000000000-ab12cd3.JPG"
        );
        assert_eq!(
            object_name(&file("noext", "image/jpeg", 1), 5, "tok"),
            "5-tok"
        );
    }

    #[test]
    fn bucket_parses_from_its_name() -> TestResult {
        assert_eq!("live2d-videos".parse::<Bucket>()?, Bucket::Live2dVideos);
        assert!("avatars".parse::<Bucket>().is_err());

        Ok(())
    }

    #[test]
    fn random_token_is_lowercase_base36() {
        let token = random_token(&mut StdRng::seed_from_u64(3), 7);

        assert_eq!(token.len(), 7);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(content_type_for_extension("MOV"), Some("video/quicktime"));
        assert_eq!(content_type_for_extension("tiff"), None);
    }
}
