// Boots one in-memory review server per test binary and offers account helpers.
use std::net::{SocketAddr, TcpStream};
use std::sync::{mpsc, OnceLock};
use std::time::Duration;

use review_server::{Settings, StorageBackend};
use serde_json::{json, Value};

static BASE_URL: OnceLock<String> = OnceLock::new();

const PASSWORD: &str = "correct-horse";

fn test_settings() -> Settings {
    Settings {
        storage_backend: StorageBackend::Memory,
        // Cheapest cost bcrypt accepts.
        password_hash_cost: 4,
        ..Settings::default()
    }
}

// Base URL of the shared server, starting it on first use.
pub fn ensure_server() -> &'static str {
    BASE_URL.get_or_init(start_review_server).as_str()
}

// The server gets its own thread and runtime so it outlives each
// `#[tokio::test]` runtime.
fn start_review_server() -> String {
    let (addr_tx, addr_rx) = mpsc::channel::<SocketAddr>();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("test runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind ephemeral test port");
            let addr = listener.local_addr().expect("get local addr");
            addr_tx.send(addr).expect("publish server address");
            review_server::run(listener, test_settings())
                .await
                .expect("review server failed");
        });
    });

    let addr = addr_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("review server did not report its address");
    wait_until_accepting(addr);
    format!("http://{addr}")
}

fn wait_until_accepting(addr: SocketAddr) {
    for _ in 0..100 {
        if TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    panic!("review server at {addr} never accepted connections");
}

// Registered account with a live bearer token.
pub struct Reviewer {
    pub first_name: String,
    pub email: String,
    pub token: String,
}

impl Reviewer {
    // Signs up a fresh account under a unique email and logs it in.
    pub async fn register(client: &reqwest::Client, base_url: &str, first_name: &str) -> Self {
        let email = format!(
            "{}-{}@example.com",
            first_name.to_lowercase(),
            uuid::Uuid::new_v4()
        );

        let res = client
            .post(format!("{base_url}/signup"))
            .json(&json!({
                "first_name": first_name,
                "last_name": "Tester",
                "email": email,
                "password": PASSWORD,
            }))
            .send()
            .await
            .expect("signup request should succeed");
        assert_eq!(res.status(), reqwest::StatusCode::CREATED);

        let token = login(client, base_url, &email, PASSWORD)
            .await
            .expect("fresh account should log in");

        Self {
            first_name: first_name.to_string(),
            email,
            token,
        }
    }
}

// Returns the issued token, or the status when login is refused.
pub async fn login(
    client: &reqwest::Client,
    base_url: &str,
    email: &str,
    password: &str,
) -> Result<String, reqwest::StatusCode> {
    let res = client
        .post(format!("{base_url}/login"))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("login request should succeed");
    if res.status() != reqwest::StatusCode::OK {
        return Err(res.status());
    }

    let body: Value = res.json().await.expect("login body should be json");
    Ok(body["token"]
        .as_str()
        .expect("login should return a token")
        .to_string())
}
