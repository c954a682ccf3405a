#![allow(dead_code)]

use assert_cmd::Command;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

pub const SAMPLE_WEATHER: &str = include_str!("../fixtures/wttr_j1.json");

pub fn daily_note_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daily-note").unwrap();
    cmd.env_remove("DAILY_NOTE_WEATHER_URL");
    cmd.env_remove("DAILY_NOTE_OPENER");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Opener that exits successfully without showing anything
pub fn opener_command_for_test() -> &'static str {
    if cfg!(windows) {
        "cmd /c exit 0"
    } else {
        "sh -c true"
    }
}

/// Serve a single HTTP response on a random local port.
/// Returns the URL to point DAILY_NOTE_WEATHER_URL at.
pub fn serve_once(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            // Drain the request headers before answering
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{}/?format=j1", addr)
}

/// Accept one connection and never answer it.
/// Returns the URL to point DAILY_NOTE_WEATHER_URL at.
pub fn serve_silently() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            // Hold the connection open until the test process exits
            thread::sleep(Duration::from_secs(60));
            drop(stream);
        }
    });

    format!("http://{}/?format=j1", addr)
}

/// URL of a port nothing is listening on
pub fn unreachable_url() -> String {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    format!("http://127.0.0.1:{}/?format=j1", port)
}

pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
