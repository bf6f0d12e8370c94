#![allow(dead_code)]

use std::path::PathBuf;

use axum::{body::Body, http::Request, response::Response, Router};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use tcc_portal::{
    config::Config,
    crypto::password::hash_password,
    models::{
        organization::Organization,
        session::SessionPayload,
        tcc::{Tcc, TccStatus},
        user::User,
    },
    repositories::directory::{Directory, Seed},
    routes,
    state::AppState,
};

pub const SECRET: &[u8] = b"integration-test-secret";
pub const PASSWORD: &str = "SecurePass123!";

/// Shared test context: a router over a seeded directory.
pub struct TestContext {
    pub state: AppState,
    pub app: Router,
    pub course: Uuid,
    pub other_course: Uuid,
    pub draft: Uuid,
    pub submitted: Uuid,
    pub foreign: Uuid,
    pub files_dir: PathBuf,
}

fn user(id: &str, first_name: &str, organization_id: Option<Uuid>) -> User {
    User {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: "Silva".to_string(),
        email: format!("{}@example.com", id),
        password_hash: String::new(),
        is_admin: false,
        is_system_manager: false,
        is_course_coordinator: false,
        is_academic_register: false,
        organization_id,
    }
}

fn tcc(title: &str, owner: &str, organization_id: Uuid, status: TccStatus, file: Option<&str>) -> Tcc {
    Tcc {
        id: Uuid::new_v4(),
        title: title.to_string(),
        owner_id: owner.to_string(),
        organization_id,
        status,
        file_name: file.map(str::to_string),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

impl TestContext {
    pub async fn new() -> Self {
        let course = Uuid::new_v4();
        let other_course = Uuid::new_v4();

        let mut student = user("student", "Ana", Some(course));
        student.password_hash = hash_password(PASSWORD).unwrap();
        let classmate = user("classmate", "Caio", Some(course));
        let outsider = user("outsider", "Davi", Some(other_course));
        let mut coordinator = user("coordinator", "Eva", Some(course));
        coordinator.is_course_coordinator = true;
        let mut admin = user("admin", "Flora", None);
        admin.is_admin = true;

        let draft = tcc("Rascunho", "student", course, TccStatus::Draft, Some("draft.pdf"));
        let submitted = tcc("Entregue", "classmate", course, TccStatus::Submitted, Some("submitted.pdf"));
        let foreign = tcc("Outro curso", "outsider", other_course, TccStatus::Submitted, None);

        let files_dir = std::env::temp_dir().join(format!("tcc-portal-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&files_dir).unwrap();
        std::fs::write(files_dir.join("draft.pdf"), b"%PDF-1.4\n% draft\n").unwrap();
        std::fs::write(files_dir.join("submitted.pdf"), b"%PDF-1.7\n% submitted\n").unwrap();

        let seed = Seed {
            users: vec![student, classmate, outsider, coordinator, admin],
            organizations: vec![
                Organization {
                    id: course,
                    name: "Ciência da Computação".to_string(),
                    parent_id: None,
                },
                Organization {
                    id: other_course,
                    name: "Engenharia Civil".to_string(),
                    parent_id: None,
                },
            ],
            tccs: vec![draft.clone(), submitted.clone(), foreign.clone()],
        };

        let mut config = Config::with_secret(SECRET);
        config.files_dir = files_dir.clone();

        let state = AppState::with_directory(&config, Directory::from_seed(seed));
        let app = routes::router(state.clone());

        Self {
            state,
            app,
            course,
            other_course,
            draft: draft.id,
            submitted: submitted.id,
            foreign: foreign.id,
            files_dir,
        }
    }

    /// A valid `Cookie` header value for the given user.
    pub fn cookie_for(&self, user_id: &str) -> String {
        let token = self
            .state
            .codec
            .encode(&SessionPayload::new(user_id, "api-token"))
            .unwrap();
        format!("session={}", token)
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.app.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, path: &str, user_id: Option<&str>) -> Response {
        let mut builder = Request::builder().uri(path);
        if let Some(user_id) = user_id {
            builder = builder.header("cookie", self.cookie_for(user_id));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn send_json(&self, method: &str, path: &str, user_id: Option<&str>, body: Value) -> Response {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json");
        if let Some(user_id) = user_id {
            builder = builder.header("cookie", self.cookie_for(user_id));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap()).await
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.files_dir);
    }
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
}

pub fn set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("session="))
        .map(str::to_string)
}
