use std::path::PathBuf;
use std::time::Duration;

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use testboard_e2e::{check_greeting, E2eError, ServerConfig, ServerHandle};

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// The example application should be reachable and greet visitors.
#[tokio::test]
async fn example_app_greets_in_process() {
    let base_url = serve(testboard_example_app::router()).await;
    check_greeting(&base_url).await.unwrap();
}

#[tokio::test]
async fn wrong_greeting_is_reported() {
    let app = Router::new().route("/", get(|| async { Html("<p>Goodbye</p>") }));
    let base_url = serve(app).await;

    let err = check_greeting(&base_url).await.unwrap_err();
    assert!(matches!(err, E2eError::AssertionFailed(_)));
}

#[tokio::test]
async fn missing_page_is_reported() {
    let base_url = serve(Router::new()).await;
    let err = check_greeting(&base_url).await.unwrap_err();
    assert!(matches!(err, E2eError::AssertionFailed(_)));
}

/// Spawns the built binary. Marked ignored because it needs
/// `cargo build -p testboard-example-app` first.
#[tokio::test]
#[ignore]
async fn example_app_binary_greets() {
    let binary_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../target/debug/testboard-example-app");
    if !binary_path.exists() {
        eprintln!("Skipping: {} not built", binary_path.display());
        return;
    }

    let server = ServerHandle::spawn(ServerConfig {
        binary_path,
        startup_timeout: Duration::from_secs(10),
        ..Default::default()
    })
    .await
    .expect("spawn example app");

    check_greeting(server.base_url()).await.unwrap();
}
