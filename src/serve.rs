//! HTTP server for the chart viewer
//!
//! `housecount serve` → starts server, serves the embedded viewer page
//! and the aggregate API it draws from.

use serde::Serialize;
use tiny_http::{Header, Method, Request, Response, Server};

use crate::aggregate::group_count;
use crate::data::Character;
use crate::patronus::{assign_patronus, EMPTY_PROMPT};
use crate::select::{drill_down, Region};

#[derive(Serialize)]
struct ApiResponse<T> {
    ok: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Serialize)]
struct PatronusReply {
    name: String,
    patronus: Option<String>,
    prompt: Option<String>,
}

#[derive(serde::Deserialize, Default)]
struct PatronusQuery {
    #[serde(default)]
    name: String,
}

// Embedded chart viewer page
const CHART_VIEWER_HTML: &str = include_str!("viewer.html");

/// Start the chart viewer server. Blocks serving requests until killed.
pub fn start(port: u16, records: Vec<Character>, labels: Vec<String>) -> std::io::Result<()> {
    let addr = format!("127.0.0.1:{}", port);
    let server = Server::http(&addr)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let url = format!("http://localhost:{}", port);

    eprintln!("\n\x1b[1;33m⚡ housecount\x1b[0m");
    eprintln!("   Chart viewer: {}", url);
    eprintln!("   {} characters loaded", records.len());
    eprintln!("   Press Ctrl+C to stop\n");

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &records, &labels) {
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}

fn handle_request(
    request: Request,
    records: &[Character],
    labels: &[String],
) -> std::io::Result<()> {
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or("/");
    let query = url.split('?').nth(1).unwrap_or("");
    let method = request.method().clone();

    match (&method, path) {
        // Serve chart viewer UI
        (&Method::Get, "/") | (&Method::Get, "/charts") => {
            let response = Response::from_string(CHART_VIEWER_HTML)
                .with_header(Header::from_bytes(&b"Content-Type"[..], &b"text/html"[..]).unwrap());
            request.respond(response)
        }

        // API: house buckets
        (&Method::Get, "/api/houses") => {
            let buckets = group_count(records, |c| c.house.clone());
            respond_json(request, 200, &ApiResponse::success(buckets))
        }

        // API: species buckets
        (&Method::Get, "/api/species") => {
            let buckets = group_count(records, |c| c.species.clone());
            respond_json(request, 200, &ApiResponse::success(buckets))
        }

        // API: blood status buckets
        (&Method::Get, "/api/blood") => {
            let buckets = group_count(records, |c| c.blood_status_clean.clone());
            respond_json(request, 200, &ApiResponse::success(buckets))
        }

        // API: house drill-down
        (&Method::Get, _) if path.starts_with("/api/houses/") => {
            let house = path.trim_start_matches("/api/houses/");
            let house = percent_decode(house);
            if records.iter().any(|c| c.house == house) {
                let detail = drill_down(records, Region::Houses, &house);
                respond_json(request, 200, &ApiResponse::success(detail))
            } else {
                respond_json(
                    request,
                    404,
                    &ApiResponse::<()>::failure(format!("Unknown house: {}", house)),
                )
            }
        }

        // API: patronus assignment
        (&Method::Get, "/api/patronus") => {
            let parsed: PatronusQuery = serde_urlencoded::from_str(query).unwrap_or_default();
            let patronus = assign_patronus(&parsed.name, labels);
            let reply = PatronusReply {
                name: parsed.name.trim().to_string(),
                patronus: patronus.map(|p| p.to_string()),
                prompt: if patronus.is_none() {
                    Some(EMPTY_PROMPT.to_string())
                } else {
                    None
                },
            };
            respond_json(request, 200, &ApiResponse::success(reply))
        }

        // 404
        _ => {
            let response = Response::from_string("Not found").with_status_code(404);
            request.respond(response)
        }
    }
}

fn respond_json<T: Serialize>(
    request: Request,
    status: u16,
    body: &ApiResponse<T>,
) -> std::io::Result<()> {
    let json = serde_json::to_string(body)?;
    let response = Response::from_string(json)
        .with_status_code(status)
        .with_header(
            Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
        );
    request.respond(response)
}

/// Minimal percent decoding for house names in paths (%20 and '+')
fn percent_decode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut bytes = input.bytes();
    while let Some(b) = bytes.next() {
        match b {
            b'+' => out.push(' '),
            b'%' => {
                let hi = bytes.next();
                let lo = bytes.next();
                match (hi, lo) {
                    (Some(h), Some(l)) => {
                        let hex = [h, l];
                        let decoded = std::str::from_utf8(&hex)
                            .ok()
                            .and_then(|s| u8::from_str_radix(s, 16).ok());
                        match decoded {
                            Some(v) => out.push(v as char),
                            None => {
                                out.push('%');
                                out.push(h as char);
                                out.push(l as char);
                            }
                        }
                    }
                    (Some(h), None) => {
                        out.push('%');
                        out.push(h as char);
                    }
                    _ => out.push('%'),
                }
            }
            other => out.push(other as char),
        }
    }
    out
}
