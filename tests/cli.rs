use httpmock::Method::POST;
use httpmock::MockServer;
use job_extractor::cli::{self, Cli, Command};

#[tokio::test]
async fn extract_short_circuits_on_non_matching_url() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/jobs");
        then.status(201);
    });

    let cli = Cli {
        command: Command::Extract {
            url: "https://example.com/jobs/view/123".to_string(),
        },
        server_url: Some(format!("http://{}", server.address())),
        export_dir: None,
        timeout_secs: None,
    };

    let succeeded = cli::run(cli).await.expect("run should not error");

    // The warning path is terminal: no extraction, no network call
    assert!(!succeeded);
    assert_eq!(mock.hits(), 0);
}
