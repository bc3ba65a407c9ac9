// src/source/api.rs
//! Single-shot record fetch from an HTTP endpoint.

use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use super::FileRecord;

/// `GET url` with `Accept: application/json`, expecting a 200 with a JSON
/// array of records. Any other status, a transport failure or a malformed
/// body is an error; the caller decides what an empty list looks like.
pub fn fetch_records(url: &str) -> Result<Vec<FileRecord>> {
    let response = Client::new()
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .with_context(|| format!("GET {url}"))?;

    let status = response.status();
    if !status.is_success() {
        bail!("GET {url} returned {status}");
    }

    response
        .json::<Vec<FileRecord>>()
        .with_context(|| format!("malformed record body from {url}"))
}

/// Answer one request with a canned status line, then hang up.
#[cfg(test)]
pub(crate) fn serve_once(status_line: &'static str) -> String {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let response =
                format!("{status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}/api")
}
