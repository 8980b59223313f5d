//! Stub upstream server for client and store tests.

use std::collections::HashMap;

use axum::{
    http::{header, StatusCode},
    routing::get,
    Router,
};

use crate::api::Resource;

const ARTISTS_JSON: &str = r#"[
    {"id":1,"image":"https://example.test/queen.jpeg","name":"Queen","members":["Freddie Mercury","Brian May"],"creationDate":1970,"firstAlbum":"14-12-1973","locations":"https://example.test/locations/1"},
    {"id":2,"image":"https://example.test/soja.jpeg","name":"SOJA","members":["Jacob Hemphill","Bob Jefferson"],"creationDate":1997,"firstAlbum":"05-06-2002"}
]"#;

const LOCATIONS_JSON: &str = r#"{"index":[
    {"id":1,"locations":["north_carolina-usa","osaka-japan"]},
    {"id":2,"locations":["playa_del_carmen-mexico"]}
]}"#;

const DATES_JSON: &str = r#"{"index":[
    {"id":1,"dates":["*23-08-2019","22-08-2019","28-01-2020"]},
    {"id":2,"dates":["*05-12-2019"]}
]}"#;

const RELATIONS_JSON: &str = r#"{"index":[
    {"id":1,"datesLocations":{"north_carolina-usa":["23-08-2019","22-08-2019"],"osaka-japan":["28-01-2020"]}},
    {"id":2,"datesLocations":{"playa_del_carmen-mexico":["05-12-2019"]}}
]}"#;

/// Canned status and body per upstream resource
#[derive(Clone)]
pub(crate) struct UpstreamFixture {
    responses: HashMap<Resource, (u16, String)>,
}

impl Default for UpstreamFixture {
    fn default() -> Self {
        let responses = HashMap::from([
            (Resource::Artists, (200, ARTISTS_JSON.to_string())),
            (Resource::Locations, (200, LOCATIONS_JSON.to_string())),
            (Resource::Dates, (200, DATES_JSON.to_string())),
            (Resource::Relations, (200, RELATIONS_JSON.to_string())),
        ]);
        Self { responses }
    }
}

impl UpstreamFixture {
    pub(crate) fn failing(mut self, resource: Resource, status: u16) -> Self {
        self.responses
            .insert(resource, (status, "upstream unavailable".to_string()));
        self
    }

    pub(crate) fn malformed(self, resource: Resource) -> Self {
        self.raw(resource, "<html>not json</html>")
    }

    pub(crate) fn raw(mut self, resource: Resource, body: &str) -> Self {
        self.responses.insert(resource, (200, body.to_string()));
        self
    }
}

/// Serve the fixture on an ephemeral port and return its API base URL
pub(crate) async fn spawn_upstream(fixture: UpstreamFixture) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub upstream");
    let addr = listener.local_addr().expect("stub upstream address");

    let mut router = Router::new();
    for resource in Resource::ALL {
        let (status, body) = fixture.responses[&resource].clone();
        let status = StatusCode::from_u16(status).expect("valid status");
        router = router.route(
            &format!("/api/{}", resource.path()),
            get(move || {
                let body = body.clone();
                async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }
            }),
        );
    }

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub upstream");
    });

    format!("http://{}/api", addr)
}
