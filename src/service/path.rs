pub const JOBS_PATH: &str = "/api/v1/jobs";

/// Request path for the job listing endpoint.
///
/// An empty backend is treated the same as none.
pub fn jobs_path(backend: Option<&str>) -> String {
    match backend.filter(|b| !b.is_empty()) {
        Some(backend) => format!("{JOBS_PATH}?backend={}", encode_query_value(backend)),
        None => JOBS_PATH.to_string(),
    }
}

/// application/x-www-form-urlencoded value encoding (space becomes `+`)
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for &b in value.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push_str(&format!("{:02X}", b));
            }
        }
    }
    out
}
