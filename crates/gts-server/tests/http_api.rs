//! HTTP contract tests against a server bound to an ephemeral port.

use gts_config::{Environment, ServerConfig};
use gts_db::service::RegistryService;
use gts_server::{AppState, build_router};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

struct TestApp {
    base: String,
    client: reqwest::Client,
}

impl TestApp {
    async fn spawn() -> Self {
        Self::spawn_with(ServerConfig::default()).await
    }

    async fn spawn_with(config: ServerConfig) -> Self {
        let service = RegistryService::new_local(":memory:")
            .await
            .expect("open database");
        let app = build_router(AppState::new(service, config));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
        Self {
            base: format!("http://{addr}/api"),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    async fn get(&self, path: &str) -> (u16, Value) {
        let resp = self.client.get(self.url(path)).send().await.expect("send");
        (resp.status().as_u16(), resp.json().await.expect("json body"))
    }

    async fn post(&self, path: &str, body: &Value) -> (u16, Value) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("send");
        (resp.status().as_u16(), resp.json().await.expect("json body"))
    }

    async fn put(&self, path: &str, body: &Value) -> (u16, Value) {
        let resp = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("send");
        (resp.status().as_u16(), resp.json().await.expect("json body"))
    }

    async fn delete(&self, path: &str) -> (u16, Value) {
        let resp = self.client.delete(self.url(path)).send().await.expect("send");
        (resp.status().as_u16(), resp.json().await.expect("json body"))
    }

    /// Create a record and return its id field.
    async fn create(&self, path: &str, body: Value, id_field: &str) -> i64 {
        let (status, body) = self.post(path, &body).await;
        assert_eq!(status, 201, "create {path}: {body}");
        body["data"][id_field].as_i64().expect("numeric id")
    }
}

struct Seed {
    university: i64,
    institute: i64,
    author: i64,
    supervisor: i64,
    topic: i64,
}

async fn seed(app: &TestApp) -> Seed {
    let university = app
        .create(
            "/universities",
            json!({"name": "Ankara University", "country": "Turkey", "city": "Ankara"}),
            "university_id",
        )
        .await;
    let institute = app
        .create(
            "/institutes",
            json!({"name": "Institute of Science", "university_id": university}),
            "institute_id",
        )
        .await;
    let author = app
        .create(
            "/people",
            json!({"first_name": "Deniz", "last_name": "Öztürk", "email": "deniz@example.org"}),
            "person_id",
        )
        .await;
    let supervisor = app
        .create(
            "/people",
            json!({"first_name": "Cem", "last_name": "Arslan", "email": "cem@example.org",
                   "affiliation": "Ankara University"}),
            "person_id",
        )
        .await;
    let topic = app
        .create("/subject-topics", json!({"topic_name": "Robotics"}), "topic_id")
        .await;
    Seed {
        university,
        institute,
        author,
        supervisor,
        topic,
    }
}

fn thesis_body(seed: &Seed, title: &str, year: i32) -> Value {
    json!({
        "title": title,
        "abstract": "An abstract.",
        "author_id": seed.author,
        "year": year,
        "type": "Master",
        "university_id": seed.university,
        "institute_id": seed.institute,
        "num_pages": 120,
        "language": "Turkish",
        "submission_date": format!("{year}-05-20"),
        "supervisor_ids": [seed.supervisor],
        "subject_topic_ids": [seed.topic],
        "keywords": ["robot", "control"]
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::spawn().await;
    let (status, body) = app.get("/health").await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({"status": "ok", "message": "GTS Backend API is running"})
    );
}

#[tokio::test]
async fn university_crud_roundtrip() {
    let app = TestApp::spawn().await;

    let (status, created) = app
        .post(
            "/universities",
            &json!({"name": "Hacettepe University", "country": "Turkey", "city": "Ankara"}),
        )
        .await;
    assert_eq!(status, 201);
    assert_eq!(created["success"], true);
    let id = created["data"]["university_id"].as_i64().unwrap();

    let (status, listed) = app.get("/universities").await;
    assert_eq!(status, 200);
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);

    let (status, updated) = app
        .put(&format!("/universities/{id}"), &json!({"city": "Beytepe"}))
        .await;
    assert_eq!(status, 200);
    assert_eq!(updated["data"]["city"], "Beytepe");
    assert_eq!(updated["data"]["name"], "Hacettepe University");

    let (status, deleted) = app.delete(&format!("/universities/{id}")).await;
    assert_eq!(status, 200);
    assert_eq!(
        deleted,
        json!({"success": true, "message": "University deleted successfully"})
    );

    let (status, missing) = app.get(&format!("/universities/{id}")).await;
    assert_eq!(status, 404);
    assert_eq!(
        missing,
        json!({"success": false, "error": "University not found"})
    );
}

#[tokio::test]
async fn missing_ids_are_404_for_every_verb() {
    let app = TestApp::spawn().await;
    let (status, _) = app.get("/people/99").await;
    assert_eq!(status, 404);
    let (status, body) = app
        .put("/subject-topics/99", &json!({"topic_name": "Renamed"}))
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Subject topic not found");
    let (status, body) = app.delete("/theses/99").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Thesis not found");
}

#[tokio::test]
async fn validation_failure_lists_field_issues() {
    let app = TestApp::spawn().await;
    let (status, body) = app
        .post("/universities", &json!({"name": "", "city": "Izmir"}))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Validation failed");

    let paths: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["path"].as_str().unwrap())
        .collect();
    assert!(paths.contains(&"name"), "{paths:?}");
    assert!(paths.contains(&"country"), "{paths:?}");
}

#[tokio::test]
async fn malformed_json_and_bad_ids_are_400() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/universities"))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);

    let (status, body) = app.get("/institutes/abc").await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn thesis_aggregate_over_http() {
    let app = TestApp::spawn().await;
    let seed = seed(&app).await;

    let id = app
        .create("/theses", thesis_body(&seed, "Legged locomotion", 2022), "thesis_id")
        .await;

    let (status, detail) = app.get(&format!("/theses/{id}")).await;
    assert_eq!(status, 200);
    let data = &detail["data"];
    assert_eq!(data["title"], "Legged locomotion");
    assert_eq!(data["type"], "Master");
    assert_eq!(data["submission_date"], "2022-05-20");
    assert_eq!(data["keywords"], json!(["control", "robot"]));
    assert_eq!(data["subjectTopics"][0]["topic_name"], "Robotics");
    assert!(data.get("subject_topics").is_none());
    assert_eq!(
        data["supervisors"],
        json!([{"thesis_id": id, "person_id": seed.supervisor, "role": "Supervisor"}])
    );

    let (status, updated) = app
        .put(
            &format!("/theses/{id}"),
            &json!({"type": "Doctorate", "keywords": ["robot"], "co_supervisor_id": seed.author}),
        )
        .await;
    assert_eq!(status, 200, "{updated}");
    assert_eq!(updated["data"]["type"], "Doctorate");

    let (_, detail) = app.get(&format!("/theses/{id}")).await;
    assert_eq!(detail["data"]["keywords"], json!(["robot"]));
    assert_eq!(detail["data"]["supervisors"].as_array().unwrap().len(), 2);

    let (status, body) = app.delete(&format!("/theses/{id}")).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Thesis deleted successfully");
}

#[tokio::test]
async fn thesis_payload_rules() {
    let app = TestApp::spawn().await;
    let seed = seed(&app).await;

    let mut body = thesis_body(&seed, "Twice supervised", 2021);
    body["supervisor_ids"] = json!([seed.supervisor, seed.supervisor]);
    let (status, resp) = app.post("/theses", &body).await;
    assert_eq!(status, 400);
    assert_eq!(resp["details"][0]["path"], "supervisor_ids");

    let mut body = thesis_body(&seed, "No supervisors", 2021);
    body["supervisor_ids"] = json!([]);
    let (status, _) = app.post("/theses", &body).await;
    assert_eq!(status, 400);

    let mut body = thesis_body(&seed, "Bad type", 2021);
    body["type"] = json!("Bachelor");
    let (status, _) = app.post("/theses", &body).await;
    assert_eq!(status, 400);

    let mut body = thesis_body(&seed, "Ghost supervisor", 2021);
    body["supervisor_ids"] = json!([9999]);
    let (status, resp) = app.post("/theses", &body).await;
    assert_eq!(status, 400);
    assert_eq!(
        resp["error"],
        "Cannot create or update this record because the referenced item does not exist."
    );

    let (_, stats) = app.get("/dashboard/stats").await;
    assert_eq!(stats["data"]["totalTheses"], 0);
}

#[tokio::test]
async fn search_filters_and_validates() {
    let app = TestApp::spawn().await;
    let seed = seed(&app).await;
    for (title, year) in [("A", 2019), ("B", 2020), ("C", 2021), ("D", 2022)] {
        app.create("/theses", thesis_body(&seed, title, year), "thesis_id")
            .await;
    }

    let (status, body) = app.get("/theses/search?year_from=2020&year_to=2021").await;
    assert_eq!(status, 200);
    let titles: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["C", "B"]);

    let (_, all) = app.get("/theses/search").await;
    let (_, listed) = app.get("/theses").await;
    assert_eq!(all, listed);

    let (status, body) = app.get("/theses/search?year_from=1800").await;
    assert_eq!(status, 400);
    assert_eq!(body["details"][0]["path"], "year_from");

    let (status, body) = app.get("/theses/search?type=Bachelor").await;
    assert_eq!(status, 400);
    assert_eq!(body["details"][0]["path"], "type");
}

#[tokio::test]
async fn referential_errors_use_entity_messages() {
    let app = TestApp::spawn().await;
    let seed = seed(&app).await;
    app.create("/theses", thesis_body(&seed, "Blocking", 2020), "thesis_id")
        .await;

    let (status, body) = app.delete(&format!("/universities/{}", seed.university)).await;
    assert_eq!(status, 400);
    assert_eq!(
        body["error"],
        "Cannot delete this university because it has associated institutes. Please delete or reassign the institutes first."
    );

    let (status, body) = app.delete(&format!("/people/{}", seed.supervisor)).await;
    assert_eq!(status, 400);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("as author or supervisor")
    );

    let (status, body) = app
        .delete(&format!("/subject-topics/{}", seed.topic))
        .await;
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("associated with theses"));

    let (status, body) = app
        .post("/institutes", &json!({"name": "Orphan", "university_id": 404}))
        .await;
    assert_eq!(status, 400);
    assert_eq!(
        body["error"],
        "Cannot create or update this record because the referenced item does not exist."
    );
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let app = TestApp::spawn().await;
    let body = json!({"first_name": "A", "last_name": "B", "email": "same@example.org"});
    app.create("/people", body.clone(), "person_id").await;
    let (status, resp) = app.post("/people", &body).await;
    assert_eq!(status, 409);
    assert_eq!(resp["error"], "Person already exists");
}

#[tokio::test]
async fn institutes_by_university() {
    let app = TestApp::spawn().await;
    let seed = seed(&app).await;
    let (status, body) = app
        .get(&format!("/institutes/university/{}", seed.university))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"][0]["institute_id"], seed.institute);

    let (_, body) = app.get("/institutes/university/777").await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn dashboard_counts() {
    let app = TestApp::spawn().await;
    seed(&app).await;
    let (status, body) = app.get("/dashboard/stats").await;
    assert_eq!(status, 200);
    assert_eq!(
        body["data"],
        json!({"totalTheses": 0, "totalUniversities": 1, "totalPeople": 2, "totalInstitutes": 1})
    );
}

#[tokio::test]
async fn cors_preflight_for_allowed_origin() {
    let app = TestApp::spawn_with(ServerConfig {
        environment: Environment::Development,
        ..ServerConfig::default()
    })
    .await;

    let resp = app
        .client
        .request(reqwest::Method::OPTIONS, app.url("/theses"))
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 204);
    assert_eq!(
        resp.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
    assert_eq!(resp.headers()["access-control-allow-credentials"], "true");

    let resp = app
        .client
        .get(app.url("/health"))
        .header("origin", "http://evil.example")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn unknown_route_is_enveloped_404() {
    let app = TestApp::spawn().await;
    let (status, body) = app.get("/nope").await;
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
}
