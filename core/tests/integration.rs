//! Full CRUD lifecycle test against the live todo server.
//!
//! Starts the server on a random port, then exercises every client
//! operation over real HTTP using ureq.

use todo_core::{ApiError, CreateTodo, HttpMethod, HttpRequest, HttpResponse, TodoClient, UpdateTodo};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Status codes are not treated as errors so 4xx/5xx responses reach the
/// client's own status handling.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse::new(status, body)
}

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn crud_lifecycle() {
    let addr = start_server();
    let client = TodoClient::new(&format!("http://{addr}/api/v1"));

    // list: empty
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // create
    let req = client
        .build_create_todo(&CreateTodo {
            content: "buy milk".to_string(),
        })
        .unwrap();
    let created = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(created.content, "buy milk");
    assert!(!created.done);
    assert!(!created.id.is_empty());
    let id = created.id.clone();

    // get
    let fetched = client.parse_get_todo(execute(client.build_get_todo(&id))).unwrap();
    assert_eq!(fetched, created);

    // list: one item
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(todos, vec![created.clone()]);

    // update
    let req = client
        .build_update_todo(
            &id,
            &UpdateTodo {
                content: "buy oat milk".to_string(),
                done: true,
            },
        )
        .unwrap();
    client.parse_update_todo(execute(req)).unwrap();

    let fetched = client.parse_get_todo(execute(client.build_get_todo(&id))).unwrap();
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.created_at, created.created_at);
    assert_eq!(fetched.content, "buy oat milk");
    assert!(fetched.done);

    // delete
    client.parse_delete_todo(execute(client.build_delete_todo(&id))).unwrap();

    // get after delete: NotFound
    let err = client.parse_get_todo(execute(client.build_get_todo(&id))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // delete again: NotFound
    let err = client.parse_delete_todo(execute(client.build_delete_todo(&id))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // update after delete: NotFound
    let req = client
        .build_update_todo(
            &id,
            &UpdateTodo {
                content: "gone".to_string(),
                done: false,
            },
        )
        .unwrap();
    let err = client.parse_update_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // list: empty again
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list after delete");
}

#[test]
fn malformed_body_surfaces_server_message() {
    let addr = start_server();
    let client = TodoClient::new(&format!("http://{addr}/api/v1"));

    let mut req = client
        .build_create_todo(&CreateTodo {
            content: "ignored".to_string(),
        })
        .unwrap();
    req.body = Some("{not json".to_string());

    let err = client.parse_create_todo(execute(req)).unwrap_err();
    match err {
        ApiError::Server { status, message } => {
            assert_eq!(status, 500);
            assert!(!message.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.is_empty());
}
