use crate::image_classifier::impl_remote::RemoteClassifier;
use crate::library::logger::impl_console::LoggerConsole;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// A request the loopback server received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// One-shot HTTP server on 127.0.0.1 that answers a single request.
pub struct Fixture {
    pub base_url: String,
    pub requests: Receiver<RecordedRequest>,
    handle: Option<JoinHandle<()>>,
}

impl Fixture {
    pub fn respond(status: u16, body: &str) -> Self {
        Self::respond_after(status, body, Duration::ZERO)
    }

    pub fn respond_after(status: u16, body: &str, delay: Duration) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (sender, requests) = channel();
        let body = body.to_string();

        let handle = std::thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let request = read_request(&mut stream);
            let _ = sender.send(request);

            std::thread::sleep(delay);

            let response = format!(
                "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        });

        Self {
            base_url,
            requests,
            handle: Some(handle),
        }
    }

    pub fn classifier(&self, timeout: Duration) -> RemoteClassifier {
        let logger = Arc::new(LoggerConsole::new(
            crate::config::Config::default().logger_timezone,
        ));
        RemoteClassifier::new(&self.base_url, timeout, logger).unwrap()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        // a delayed responder may still be sleeping; do not block the test on it
        if let Some(handle) = self.handle.take() {
            if handle.is_finished() {
                let _ = handle.join();
            }
        }
    }
}

fn read_request(stream: &mut std::net::TcpStream) -> RecordedRequest {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    let _ = reader.read_line(&mut request_line);

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    let content_length = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok());
    let chunked = headers.iter().any(|(key, value)| {
        key.eq_ignore_ascii_case("transfer-encoding") && value.eq_ignore_ascii_case("chunked")
    });

    let mut body = Vec::new();
    if let Some(length) = content_length {
        body.resize(length, 0);
        let _ = reader.read_exact(&mut body);
    } else if chunked {
        loop {
            let mut size_line = String::new();
            if reader.read_line(&mut size_line).unwrap_or(0) == 0 {
                break;
            }
            let size = usize::from_str_radix(size_line.trim(), 16).unwrap_or(0);
            let mut chunk = vec![0; size + 2];
            let _ = reader.read_exact(&mut chunk);
            if size == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..size]);
        }
    }

    RecordedRequest {
        request_line: request_line.trim_end().to_string(),
        headers,
        body,
    }
}
