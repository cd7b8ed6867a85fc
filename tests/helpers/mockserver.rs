use std::{fs, path::Path};

use wiremock::{
    matchers::{any, method, path, query_param},
    Mock, MockServer, Request, ResponseTemplate,
};

use super::paths::get_integration_test_root;

pub const APP_IDS: [u64; 7] = [1000, 1001, 1002, 1003, 2000, 3000, 4000];

pub async fn create() -> MockServer {
    let server = MockServer::start().await;

    let responses_folder =
        get_integration_test_root().join("helpers/resources/mockserver_responses");

    register_appdetails_handlers(&server, &responses_folder).await;
    register_logging_handler(&server).await;

    server
}

pub async fn register_appdetails_handlers(server: &MockServer, responses_folder: &Path) {
    let api_responses = responses_folder.join("appdetails");

    for id in APP_IDS {
        let response = match fs::read_to_string(api_responses.join(format!("{id}.json"))) {
            Ok(resp) => resp,
            Err(err) => panic!("Could not load app details for id '{id}': {err}"),
        };
        Mock::given(method("GET"))
            .and(path("/api/appdetails"))
            .and(query_param("appids", id.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_string(response))
            .mount(server)
            .await;
    }
}

pub async fn register_logging_handler(server: &MockServer) {
    Mock::given(any())
        .respond_with(|req: &Request| {
            eprintln!("Failed request: \n{}\n", req);
            ResponseTemplate::new(404)
        })
        .mount(server)
        .await;
}
