//! A one-connection-per-response HTTP stub for exercising the client.

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Canned {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Canned {
    pub fn json(status: u16, body: &str) -> Canned {
        Canned {
            status,
            content_type: "application/geo+json",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn image(body: &[u8]) -> Canned {
        Canned {
            status: 200,
            content_type: "image/gif",
            body: body.to_vec(),
        }
    }

    pub fn html(status: u16, body: &str) -> Canned {
        Canned {
            status,
            content_type: "text/html",
            body: body.as_bytes().to_vec(),
        }
    }
}

pub struct Stub {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl Stub {
    /// Serves `responses` in order, one per connection, then stops accepting.
    pub fn serve(responses: Vec<Canned>) -> Stub {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        thread::spawn(move || {
            for canned in responses {
                let (mut stream, _) = match listener.accept() {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut request_line = String::new();
                reader.read_line(&mut request_line).unwrap();
                let mut headers = Vec::new();
                loop {
                    let mut line = String::new();
                    if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                        break;
                    }
                    headers.push(line.trim_end().to_ascii_lowercase());
                }
                let path = request_line.split_whitespace().nth(1).unwrap_or("").to_string();
                let ua = headers
                    .iter()
                    .find_map(|h| h.strip_prefix("user-agent: "))
                    .unwrap_or("")
                    .to_string();
                seen.lock().unwrap().push(format!("{} ua={}", path, ua));

                let head = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    canned.status,
                    canned.content_type,
                    canned.body.len()
                );
                let _ = stream.write_all(head.as_bytes());
                let _ = stream.write_all(&canned.body);
                let _ = stream.flush();
            }
        });
        Stub { addr, requests }
    }

    pub fn base(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Request paths seen so far, each followed by ` ua=<user agent>`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|r| r.split(" ua=").next().unwrap_or("").to_string())
            .collect()
    }
}

pub const EMPTY_ALERTS: &str = r#"{"type": "FeatureCollection", "features": []}"#;

pub const WARM_ONLY: &str = r#"{
    "properties": {
        "timestamp": null,
        "textDescription": null,
        "icon": null,
        "temperature": {"unitCode": "wmoUnit:degC", "value": 20.0},
        "dewpoint": {"unitCode": "wmoUnit:degC", "value": null},
        "windDirection": {"unitCode": "wmoUnit:degree_(angle)", "value": null},
        "windSpeed": {"unitCode": "wmoUnit:km_h-1", "value": null},
        "windGust": {"unitCode": "wmoUnit:km_h-1", "value": null},
        "relativeHumidity": {"unitCode": "wmoUnit:percent", "value": null},
        "windChill": {"unitCode": "wmoUnit:degC", "value": null},
        "heatIndex": {"unitCode": "wmoUnit:degC", "value": null},
        "precipitationLast6Hours": {"unitCode": "wmoUnit:mm", "value": null}
    }
}"#;
