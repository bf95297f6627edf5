//! Encoding a flat record into header fields.
//!
//! Run with: cargo run --example simple

use chrono::{DateTime, TimeZone, Utc};
use header_fields::{encode, record_value, Fields, Record};
use std::error::Error;

struct PutObject {
    content_type: String,
    content_length: u64,
    checksum: Option<String>,
    expires: DateTime<Utc>,
    overwrite: bool,
    secret: String,
}

impl Record for PutObject {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields
            .tagged("ContentType", "content-type", &self.content_type)
            .tagged("ContentLength", "content-length", &self.content_length)
            .tagged("Checksum", "x-checksum,omitempty", &self.checksum)
            .tagged("Expires", "expires,unix", &self.expires)
            .tagged("Overwrite", "x-overwrite,int", &self.overwrite)
            .private("secret", &self.secret);
    }
}

record_value!(PutObject);

fn main() -> Result<(), Box<dyn Error>> {
    let request = PutObject {
        content_type: "text/plain".to_string(),
        content_length: 12,
        checksum: None,
        expires: Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap(),
        overwrite: false,
        secret: "never sent".to_string(),
    };

    let headers = encode(&request)?;
    for (key, values) in &headers {
        println!("{}: {}", key, values.join(", "));
    }

    assert!(!headers.contains_key("X-Checksum"));
    assert_eq!(headers.get("X-Overwrite"), Some("0"));
    println!("✓ {} headers encoded", headers.len());

    Ok(())
}
