//! Minimal HTTP/1.1 server standing in for the dictionary site in integration tests.
//!
//! Maps request targets (path + query) to canned replies; routes can be added
//! after start since some bodies embed the server's own base URL. Unknown
//! targets get 404. Every request target is recorded.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: &'static str,
    pub body: Vec<u8>,
    /// Advertised Content-Length; when larger than `body`, the connection is
    /// closed early to simulate a mid-stream failure.
    pub declared_len: Option<usize>,
}

impl Reply {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: "200 OK",
            body: body.into(),
            declared_len: None,
        }
    }

    pub fn status(status: &'static str) -> Self {
        Self {
            status,
            body: Vec::new(),
            declared_len: None,
        }
    }

    pub fn truncated(body: impl Into<Vec<u8>>, declared_len: usize) -> Self {
        Self {
            status: "200 OK",
            body: body.into(),
            declared_len: Some(declared_len),
        }
    }
}

type Routes = Arc<Mutex<HashMap<String, Reply>>>;

pub struct DicoServer {
    pub base: String,
    routes: Routes,
    requests: Arc<Mutex<Vec<String>>>,
}

impl DicoServer {
    pub fn route(&self, target: impl Into<String>, reply: Reply) {
        self.routes.lock().unwrap().insert(target.into(), reply);
    }

    /// Absolute URL for `target` (must start with `/`).
    pub fn url(&self, target: &str) -> String {
        format!("{}{}", self.base, target)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts an empty server in a background thread. Runs until the process exits.
pub fn start() -> DicoServer {
    let routes: Routes = Arc::new(Mutex::new(HashMap::new()));
    let requests = Arc::new(Mutex::new(Vec::new()));

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let log = Arc::clone(&requests);
    let served = Arc::clone(&routes);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&served);
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, &routes, &log));
        }
    });
    DicoServer {
        base: format!("http://127.0.0.1:{}", port),
        routes,
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &Mutex<HashMap<String, Reply>>,
    log: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let target = request
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("")
        .to_string();
    log.lock().unwrap().push(target.clone());

    let reply = routes
        .lock()
        .unwrap()
        .get(&target)
        .cloned()
        .unwrap_or_else(|| Reply::status("404 Not Found"));
    let len = reply.declared_len.unwrap_or(reply.body.len());
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        reply.status, len
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&reply.body);
    let _ = stream.flush();
}
