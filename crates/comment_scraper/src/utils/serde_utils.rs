use serde::{de, Deserialize, Deserializer};

/// YouTube encodes 64-bit counters as JSON strings (`"viewCount": "1024"`).
pub fn deserialize_optional_u64_from_str<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    s.filter(|s| !s.is_empty())
        .map(|s| s.parse::<u64>().map_err(de::Error::custom))
        .transpose()
}
