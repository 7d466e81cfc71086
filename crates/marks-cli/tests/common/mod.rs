#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use assert_cmd::Command;
use std::net::TcpListener;
use std::path::Path;
use std::time::Duration;
use wiremock::MockServer;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(30);

/// Create a configured `marks` command whose data and config live in `dir`.
#[allow(dead_code)]
pub fn marks_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("marks"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("MARKS_DATA_DIR", dir);
    cmd.env("MARKS_CONFIG_DIR", dir);
    cmd.env_remove("MARKS_CONFIG");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Mock server on a four-digit port so `127.0.0.1:<port>` is an accepted url.
#[allow(dead_code)]
pub async fn start_server() -> MockServer {
    for port in 8000..=9999u16 {
        if let Ok(listener) = TcpListener::bind(("127.0.0.1", port)) {
            return MockServer::builder().listener(listener).start().await;
        }
    }
    panic!("no free four-digit port for the mock server");
}

/// `host:port` of the server, usable as the url part of a bookmark.
#[allow(dead_code)]
pub fn host(server: &MockServer) -> String {
    server.address().to_string()
}

/// Write a config that sends relay attempts to `server` and keeps timeouts short.
#[allow(dead_code)]
pub fn write_relay_config(dir: &Path, server: &MockServer) {
    let config = format!(
        "[verify]\ntimeout_secs = 5\nrelay_prefix = \"{}/relay/\"\n",
        server.uri()
    );
    std::fs::write(dir.join("config.toml"), config).expect("write config");
}

/// Run `marks <args> --json` and parse stdout.
#[allow(dead_code)]
pub fn json_output(dir: &Path, args: &[&str]) -> serde_json::Value {
    let out = marks_cmd(dir)
        .args(args)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid JSON on stdout")
}
