//! Customizing encoding with EncodeOptions.
//!
//! Run with: cargo run --example custom_options

use header_fields::{encode, encode_with_options, record_value, EncodeOptions, Encoder, Fields, Record};
use std::error::Error;

struct Metadata {
    owner: Option<String>,
    tier: Option<String>,
}

impl Record for Metadata {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields
            .tagged("Owner", "x-amz-meta-owner", &self.owner)
            .tagged("Tier", "x-amz-meta-tier", &self.tier);
    }
}

record_value!(Metadata);

fn main() -> Result<(), Box<dyn Error>> {
    let metadata = Metadata {
        owner: Some("alice".to_string()),
        tier: None,
    };

    // Default: canonical keys, nil references as empty strings
    let headers = encode(&metadata)?;
    println!("default:   {:?}", headers);
    assert_eq!(headers.get("X-Amz-Meta-Tier"), Some(""));

    // Keys exactly as written in the annotations
    let options = EncodeOptions::new().with_canonical_keys(false);
    let headers = encode_with_options(&metadata, options)?;
    println!("raw keys:  {:?}", headers);
    assert_eq!(headers.get("x-amz-meta-owner"), Some("alice"));

    // A reusable encoder with a placeholder for nil references
    let encoder = Encoder::new(EncodeOptions::new().with_nil_value("unset"));
    let mut headers = header_fields::headers! { "Host" => "bucket.example.com" };
    encoder.encode_into(&mut headers, &metadata)?;
    println!("merged:    {:?}", headers);
    assert_eq!(headers.get("X-Amz-Meta-Tier"), Some("unset"));
    assert_eq!(headers.len(), 3);

    Ok(())
}
