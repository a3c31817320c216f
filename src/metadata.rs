//! The backup metadata record embedded in every archive.

use std::io::Read;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Description of a single backup: identity, checksum, timing and provenance.
///
/// Field names on the wire are the PascalCase keys written by the backup
/// process (`ID`, `Checksum`, `ChecksumFormat`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Metadata {
    #[serde(rename = "ID")]
    pub id: String,
    pub checksum: String,
    pub checksum_format: String,
    pub size: u64,
    /// When the archive was stored remotely, `None` if it has not been yet.
    #[serde(default, with = "stored_time")]
    pub stored: Option<DateTime<Utc>>,
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
    pub environment: String,
    pub machine: String,
    pub hostname: String,
    pub version: String,
}

impl Metadata {
    pub fn from_json<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_slice(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_stored(&self) -> bool {
        self.stored.is_some()
    }
}

/// `Stored` uses the zero timestamp `0001-01-01T00:00:00Z` for "not stored".
mod stored_time {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    const ZERO: &str = "0001-01-01T00:00:00Z";
    const ZERO_UNIX_SECS: i64 = -62_135_596_800;

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) => t.serialize(serializer),
            None => serializer.serialize_str(ZERO),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let t = DateTime::<Utc>::deserialize(deserializer)?;
        if t.timestamp() == ZERO_UNIX_SECS && t.timestamp_subsec_nanos() == 0 {
            Ok(None)
        } else {
            Ok(Some(t))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::TimeZone;

    const FULL: &str = r#"{"ID":"20140909-115934.asdf-zxcv-qwe","Checksum":"123af2cef","ChecksumFormat":"SHA-1, base64 encoded","Size":10,"Stored":"0001-01-01T00:00:00Z","Started":"2014-09-09T11:59:34Z","Finished":"2014-09-09T12:00:34Z","Notes":"","Environment":"asdf-zxcv-qwe","Machine":"0","Hostname":"myhost","Version":"1.21-alpha3"}
"#;

    #[test]
    fn parses_full_record() {
        let meta = Metadata::from_json(FULL.as_bytes()).unwrap();

        assert_eq!(meta.id, "20140909-115934.asdf-zxcv-qwe");
        assert_eq!(meta.checksum, "123af2cef");
        assert_eq!(meta.checksum_format, "SHA-1, base64 encoded");
        assert_eq!(meta.size, 10);
        assert_eq!(meta.stored, None);
        assert!(!meta.is_stored());
        assert_eq!(
            meta.started,
            Utc.with_ymd_and_hms(2014, 9, 9, 11, 59, 34).unwrap()
        );
        assert_eq!(
            meta.finished,
            Utc.with_ymd_and_hms(2014, 9, 9, 12, 0, 34).unwrap()
        );
        assert_eq!(meta.environment, "asdf-zxcv-qwe");
        assert_eq!(meta.machine, "0");
        assert_eq!(meta.hostname, "myhost");
        assert_eq!(meta.version, "1.21-alpha3");
    }

    #[test]
    fn stored_and_notes_are_optional() {
        let json = r#"{"ID":"abc","Checksum":"deadbeef","ChecksumFormat":"SHA-1","Size":1,"Started":"2014-09-09T11:59:34Z","Finished":"2014-09-09T12:00:34Z","Environment":"env1","Machine":"0","Hostname":"h","Version":"1.0"}"#;
        let meta = Metadata::from_slice(json.as_bytes()).unwrap();

        assert_eq!(meta.stored, None);
        assert_eq!(meta.notes, "");
    }

    #[test]
    fn keeps_real_stored_time() {
        let json = FULL.replace("0001-01-01T00:00:00Z", "2014-09-10T08:00:00Z");
        let meta = Metadata::from_slice(json.as_bytes()).unwrap();

        assert!(meta.is_stored());
        assert_eq!(
            meta.stored,
            Some(Utc.with_ymd_and_hms(2014, 9, 10, 8, 0, 0).unwrap())
        );
    }

    #[test]
    fn writes_zero_stored_time() {
        let meta = Metadata::from_json(FULL.as_bytes()).unwrap();
        let json = meta.to_json().unwrap();

        assert!(json.contains(r#""Stored": "0001-01-01T00:00:00Z""#));
        assert!(json.contains(r#""ID": "20140909-115934.asdf-zxcv-qwe""#));
    }

    #[test]
    fn missing_required_field_is_parse_error() {
        let json = FULL.replace(r#""Hostname":"myhost","#, "");
        let err = Metadata::from_slice(json.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn wrong_value_shape_is_parse_error() {
        let json = FULL.replace(r#""Size":10"#, r#""Size":"ten""#);
        let err = Metadata::from_slice(json.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));

        let err = Metadata::from_slice(b"not json").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
