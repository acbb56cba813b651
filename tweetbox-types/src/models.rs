use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Custom serde module for DateTime to ensure RFC3339 string format
mod datetime_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date.to_rfc3339();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<DateTime<Utc>>().map_err(serde::de::Error::custom)
    }
}

/// A persisted post as returned by the feed endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdAt", with = "datetime_format")]
    pub created_at: DateTime<Utc>,
    pub text: String,
    pub username: String,
    #[serde(rename = "profileImg")]
    pub profile_img: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Moderated tweets stay in the dataset but are not shown
    #[serde(rename = "blockTweet", default)]
    pub block_tweet: bool,
}

impl Tweet {
    /// Attached image, treating an empty string the same as no image
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.is_empty())
    }
}

/// Body of the persist call (`POST /api/addTweet`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetBody {
    pub text: String,
    pub username: String,
    #[serde(rename = "profileImg")]
    pub profile_img: String,
    pub image: String,
}

/// Envelope returned by the refresh call (`GET /api/getTweets`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TweetList {
    pub tweets: Vec<Tweet>,
}
