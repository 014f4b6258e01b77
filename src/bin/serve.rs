//! Tiny static file server for previewing rendered diagrams in a browser.
//!
//! Serves files relative to a root directory (first argument, defaults to
//! the current directory) on `PORT` (defaults to 4000). Only `GET` and
//! `HEAD` are handled.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};

fn main() -> Result<(), miette::Report> {
    let root = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(4000);

    let listener = TcpListener::bind(("127.0.0.1", port))
        .map_err(|e| miette::miette!("failed to bind port {port}: {e}"))?;
    eprintln!("serving {root} on http://127.0.0.1:{port}/");

    for stream in listener.incoming() {
        let stream = stream.map_err(|e| miette::miette!("failed to accept connection: {e}"))?;
        if let Err(err) = handle(stream, Path::new(&root)) {
            eprintln!("request failed: {err}");
        }
    }
    Ok(())
}

fn handle(mut stream: TcpStream, root: &Path) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;

    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("/");

    if method != "GET" && method != "HEAD" {
        let response = "HTTP/1.1 405 Method Not Allowed\r\nAllow: GET, HEAD\r\n\
                        Content-Length: 0\r\n\r\n";
        return stream.write_all(response.as_bytes());
    }

    let path = resolve(root, target);
    match path.as_deref().map(fs::read) {
        Some(Ok(body)) => {
            let content_type = match path.as_deref().and_then(Path::extension) {
                Some(ext) if ext == "js" => "application/javascript",
                _ => "text/html",
            };
            write!(
                stream,
                "HTTP/1.1 200 OK\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\n\r\n",
                body.len()
            )?;
            if method == "GET" {
                stream.write_all(&body)?;
            }
        }
        _ => {
            let body = "not found";
            write!(
                stream,
                "HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\r\n",
                body.len()
            )?;
            if method == "GET" {
                stream.write_all(body.as_bytes())?;
            }
        }
    }
    Ok(())
}

/// Map a request target onto a file under `root`, rejecting traversal and
/// rewriting directories to their `index.html`.
fn resolve(root: &Path, target: &str) -> Option<PathBuf> {
    let raw = target.split(['?', '#']).next().unwrap_or("/");
    let relative = raw.trim_start_matches('/');
    let candidate = Path::new(relative);
    if candidate
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }

    let mut path = root.join(candidate);
    if path.is_dir() {
        path.push("index.html");
    }
    Some(path)
}
