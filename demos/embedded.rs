//! Promoting fields from embedded records.
//!
//! Run with: cargo run --example embedded

use header_fields::{encode, record_value, Fields, Record};
use std::error::Error;

/// Headers shared by every request.
struct Common {
    user_agent: String,
    request_id: String,
}

/// Optional tracing context.
struct Trace {
    trace_id: String,
    request_id: String,
}

struct GetObject {
    common: Common,
    trace: Option<Trace>,
    range: String,
    request_id: String,
}

impl Record for Common {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields
            .tagged("UserAgent", "user-agent", &self.user_agent)
            .tagged("RequestId", "x-request-id", &self.request_id);
    }
}

impl Record for Trace {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields
            .tagged("TraceId", "x-trace-id", &self.trace_id)
            .tagged("RequestId", "x-request-id", &self.request_id);
    }
}

impl Record for GetObject {
    fn fields<'a>(&'a self, fields: &mut Fields<'a>) {
        fields
            .embed("Common", &self.common)
            .embed("Trace", &self.trace)
            .tagged("Range", "range,omitempty", &self.range)
            .tagged("RequestId", "x-request-id,omitempty", &self.request_id);
    }
}

record_value!(Common, Trace, GetObject);

fn main() -> Result<(), Box<dyn Error>> {
    let mut request = GetObject {
        common: Common {
            user_agent: "demo/1.0".to_string(),
            request_id: "from-common".to_string(),
        },
        trace: Some(Trace {
            trace_id: "4bf92f35".to_string(),
            request_id: "from-trace".to_string(),
        }),
        range: "bytes=0-99".to_string(),
        request_id: String::new(),
    };

    // The top-level X-Request-Id is omitted but still hides both embedded ones.
    let headers = encode(&request)?;
    println!("{:?}", headers);
    assert!(!headers.contains_key("X-Request-Id"));
    assert_eq!(headers.get("User-Agent"), Some("demo/1.0"));
    assert_eq!(headers.get("X-Trace-Id"), Some("4bf92f35"));

    // Common and Trace collide at the same depth, so only a top-level value
    // can ever appear under this key.
    request.request_id = "top".to_string();
    let headers = encode(&request)?;
    assert_eq!(headers.get("X-Request-Id"), Some("top"));

    // A nil embedded reference contributes nothing.
    request.trace = None;
    let headers = encode(&request)?;
    assert!(!headers.contains_key("X-Trace-Id"));
    println!("{:?}", headers);

    println!("✓ Promotion rules hold");
    Ok(())
}
