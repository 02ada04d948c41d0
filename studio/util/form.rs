use std::collections::HashMap;
use std::io::Read;

use tiny_http::Request;

/// Decodes a percent-encoded string (`%XX`) and converts `+` to space.
pub fn url_decode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hi = (bytes[i + 1] as char).to_digit(16);
                let lo = (bytes[i + 2] as char).to_digit(16);
                match (hi, lo) {
                    (Some(h), Some(l)) => {
                        out.push((((h << 4) | l) as u8) as char);
                        i += 3;
                    }
                    _ => {
                        out.push('%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b as char);
                i += 1;
            }
        }
    }
    out
}

/// Parses `key=value&key2=value2` into a map. Later duplicates win, which is
/// fine for the studio's one-value-per-field forms.
pub fn parse_form(body: &str) -> HashMap<String, String> {
    body.split('&')
        .filter_map(|pair| {
            let mut it = pair.splitn(2, '=');
            let k = it.next()?;
            let v = it.next().unwrap_or("");
            Some((url_decode(k), url_decode(v)))
        })
        .collect()
}

/// Reads a request body and parses it as a urlencoded form.
pub fn read_form(request: &mut Request) -> HashMap<String, String> {
    let mut body = String::new();
    let _ = request.as_reader().read_to_string(&mut body);
    parse_form(&body)
}

/// Convenience: a form field parsed as f64.
pub fn form_f64(form: &HashMap<String, String>, key: &str) -> Option<f64> {
    form.get(key)?.trim().parse().ok()
}

/// Convenience: a form field parsed as usize.
pub fn form_usize(form: &HashMap<String, String>, key: &str) -> Option<usize> {
    form.get(key)?.trim().parse().ok()
}
