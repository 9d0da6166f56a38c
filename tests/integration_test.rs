use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process::{Child, Command, Stdio};
use std::thread::sleep;
use std::time::Duration;
use anyhow::{anyhow, Result};

struct RunningServer {
    child: Child,
    address: String
}

impl Drop for RunningServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn start_server() -> Result<RunningServer> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-manager");

    //NOTE: Grab a free port from the OS and hand it over to the server
    let address = TcpListener::bind("127.0.0.1:0")?.local_addr()?.to_string();

    let child = Command::new(binary_path)
        .arg(&address)
        .arg("error")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    let server = RunningServer { child, address };

    for _ in 0..100 {
        if TcpStream::connect(&server.address).is_ok() {
            return Ok(server);
        }

        sleep(Duration::from_millis(50));
    }

    Err(anyhow!("Server did not start listening on {}", server.address))
}

fn request(address: &str, method: &str, path: &str, body: Option<&str>) -> Result<String> {
    let mut stream = TcpStream::connect(address)?;
    stream.set_read_timeout(Some(Duration::from_secs(5)))?;

    let body = body.unwrap_or("");

    write!(
        stream,
        "{method} {path} HTTP/1.1\r\nHost: {address}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )?;

    let mut response = String::new();
    stream.read_to_string(&mut response)?;

    Ok(response)
}

#[test]
fn test_cli_rejects_invalid_bind_address() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-manager");

    let output = Command::new(binary_path)
        .arg("not-an-address")
        .output()?;

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("Invalid bind address 'not-an-address'"));
    assert!(stderr.contains("Usage: transaction-manager"));

    Ok(())
}

#[test]
fn test_server_serves_transactions_over_http() -> Result<()> {
    let server = start_server()?;

    let created = request(&server.address, "POST", "/api/transactions", Some(r#"{"type":"Deposit","amount":100.0}"#))?;

    assert!(created.starts_with("HTTP/1.1 200"));
    assert!(created.contains(r#""success":true"#));
    assert!(created.contains(r#""id":1"#));

    let listed = request(&server.address, "GET", "/api/transactions?page=0&size=10", None)?;

    assert!(listed.starts_with("HTTP/1.1 200"));
    assert!(listed.contains(r#""type":"Deposit""#));

    let missing = request(&server.address, "GET", "/api/transactions/999", None)?;

    assert!(missing.starts_with("HTTP/1.1 404"));
    assert!(missing.contains("Transaction not found with ID: 999"));

    let deleted = request(&server.address, "DELETE", "/api/transactions/1", None)?;

    assert!(deleted.starts_with("HTTP/1.1 200"));

    Ok(())
}
