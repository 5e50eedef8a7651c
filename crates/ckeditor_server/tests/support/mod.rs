//! Shared integration-test server bootstrap helpers.

use axum_test::TestServer;
use ckeditor_core::EditorSettings;
use ckeditor_server::{create_app, AppState, Config};

pub(crate) fn test_config() -> Config {
    Config {
        port: 0,
        ..Config::default()
    }
}

pub(crate) fn test_server_for_settings(settings: EditorSettings) -> TestServer {
    let state = AppState::new(test_config(), settings);
    let app = create_app(state);
    TestServer::new(app).expect("server")
}

pub(crate) fn setup_test_server() -> TestServer {
    test_server_for_settings(EditorSettings::default())
}
