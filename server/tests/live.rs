//! End-to-end scenarios against a real listener.
//!
//! # Design
//! Starts the server on a random port in a background thread, then drives it
//! over real HTTP using ureq. Status codes are returned as data rather than
//! errors so 404s can be asserted directly.

use docket_core::{DocumentRenderer, TodoRecord, TodoStore};
use docket_server::AppState;

struct Reply {
    status: u16,
    body: String,
}

fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn reply(result: Result<ureq::http::Response<ureq::Body>, ureq::Error>) -> Reply {
    let mut response = result.expect("HTTP transport error");
    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();
    Reply { status, body }
}

/// Start a server on a random port and return its base URL.
fn spawn_server(state: AppState) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            docket_server::run(listener, state).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn seeded_toggle_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(
        TodoStore::seeded(),
        DocumentRenderer::new(dir.path().join("hello.pdf")),
    );
    let base = spawn_server(state);
    let agent = agent();

    // Step 1: the seed record is served verbatim.
    let got = reply(agent.get(&format!("{base}/todos/1")).call());
    assert_eq!(got.status, 200);
    let todo: TodoRecord = serde_json::from_str(&got.body).unwrap();
    assert_eq!(todo, TodoRecord::new("1", "2022-01-01", "Clean Room", false));

    // Step 2: first PATCH marks it completed.
    let got = reply(agent.patch(&format!("{base}/todos/1")).send_empty());
    assert_eq!(got.status, 200);
    let todo: TodoRecord = serde_json::from_str(&got.body).unwrap();
    assert!(todo.completed);

    // Step 3: second PATCH flips it back.
    let got = reply(agent.patch(&format!("{base}/todos/1")).send_empty());
    let todo: TodoRecord = serde_json::from_str(&got.body).unwrap();
    assert!(!todo.completed);

    // Step 4: unknown ids are 404 with the fixed message.
    let got = reply(agent.get(&format!("{base}/todos/99")).call());
    assert_eq!(got.status, 404);
    assert_eq!(got.body, r#"{"message":"Todo not found"}"#);

    // Step 5: a created record is listed last.
    let created = TodoRecord::new("4", "2024-05-01", "Water plants", false);
    let got = reply(
        agent
            .post(&format!("{base}/todos"))
            .content_type("application/json")
            .send(serde_json::to_string(&created).unwrap().as_bytes()),
    );
    assert_eq!(got.status, 201);
    let got = reply(agent.get(&format!("{base}/todos")).call());
    let todos: Vec<TodoRecord> = serde_json::from_str(&got.body).unwrap();
    assert_eq!(todos.len(), 4);
    assert_eq!(todos[3], created);
}

#[test]
fn concurrent_creates_over_http_are_all_stored() {
    const CLIENTS: usize = 8;
    const PER_CLIENT: usize = 10;

    let dir = tempfile::tempdir().unwrap();
    let store = TodoStore::new();
    let state = AppState::new(
        store.clone(),
        DocumentRenderer::new(dir.path().join("hello.pdf")),
    );
    let base = spawn_server(state);

    std::thread::scope(|scope| {
        for client in 0..CLIENTS {
            let base = base.as_str();
            scope.spawn(move || {
                let agent = agent();
                for n in 0..PER_CLIENT {
                    let todo = TodoRecord::new(&format!("{client}-{n}"), "", "load", false);
                    let got = reply(
                        agent
                            .post(&format!("{base}/todos"))
                            .content_type("application/json")
                            .send(serde_json::to_string(&todo).unwrap().as_bytes()),
                    );
                    assert_eq!(got.status, 201);
                }
            });
        }
    });

    assert_eq!(store.len(), CLIENTS * PER_CLIENT);
}

#[test]
fn upload_writes_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("hello.pdf");
    let state = AppState::new(TodoStore::new(), DocumentRenderer::new(&output));
    let base = spawn_server(state);

    let boundary = "docket-live-boundary";
    let fields = [
        ("Document.Id", "7"),
        ("Document.Type", "Invoice"),
        ("Document.Company.Name", "Acme"),
        ("Document.Company.Address1", "1 Main St"),
        ("Document.Company.Address2", "Springfield"),
        ("Document.Company.Phone", "555-0100"),
        ("Document.Company.Email", "billing@acme.test"),
        ("Document.Company.Website", "acme.test"),
    ];
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{boundary}--\r\n"));

    let got = reply(
        agent()
            .post(&format!("{base}/upload"))
            .content_type(format!("multipart/form-data; boundary={boundary}"))
            .send(body.as_bytes()),
    );

    assert_eq!(got.status, 200);
    assert!(got.body.starts_with("{Id:7 Type:Invoice "));
    assert!(std::fs::read(&output).unwrap().starts_with(b"%PDF-"));
}
