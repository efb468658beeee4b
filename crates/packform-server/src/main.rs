//! PackForm API Server
//!
//! In-memory REST backend for the editor's surrounding services: template
//! catalog, design persistence and ordering, comments, share links and team
//! management. State lives in `DashMap`s and is seeded with a small
//! template catalog on startup; swap the store for a database behind the
//! same handlers when persistence matters.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use chrono::Utc;
use dashmap::DashMap;
use packform_services::{
    Comment, CustomizeRequest, CustomizeResponse, DesignRecord, InviteRequest, Material,
    NewComment, SaveDesignRequest, ServiceError, ShareLink, ShareRequest, TeamMember, TeamRole,
    TemplateCategory, TemplateDescriptor, TemplateImages, TemplatePrice, TemplateSize,
    UpdateComment, UpdateRoleRequest,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use uuid::Uuid;

/// Shared application state.
struct AppState {
    templates: DashMap<String, TemplateDescriptor>,
    designs: DashMap<String, DesignRecord>,
    favorites: DashMap<String, ()>,
    comments: DashMap<String, Comment>,
    orders: DashMap<String, CustomizeRequest>,
    shares: DashMap<String, ShareLink>,
    members: DashMap<String, TeamMember>,
}

impl AppState {
    fn new() -> Self {
        let state = Self {
            templates: DashMap::new(),
            designs: DashMap::new(),
            favorites: DashMap::new(),
            comments: DashMap::new(),
            orders: DashMap::new(),
            shares: DashMap::new(),
            members: DashMap::new(),
        };
        for template in seed_templates() {
            state.templates.insert(template.id.clone(), template);
        }
        let owner = TeamMember {
            id: Uuid::new_v4().to_string(),
            name: "Workspace Owner".into(),
            email: "owner@packform.app".into(),
            role: TeamRole::Owner,
        };
        state.members.insert(owner.id.clone(), owner);
        state
    }
}

/// The built-in template catalog.
fn seed_templates() -> Vec<TemplateDescriptor> {
    vec![
        TemplateDescriptor {
            id: "tpl-box-mailer".into(),
            name: "Mailer Box".into(),
            category: TemplateCategory::Box,
            images: TemplateImages {
                flat: "/assets/templates/box-mailer/flat.png".into(),
                dieline: "/assets/templates/box-mailer/dieline.svg".into(),
                three_d: Some("/assets/templates/box-mailer/preview.glb".into()),
            },
            sizes: vec![
                TemplateSize {
                    id: "s".into(),
                    label: "Small (150×100 mm)".into(),
                    width_mm: 150.0,
                    height_mm: 100.0,
                    depth_mm: Some(50.0),
                },
                TemplateSize {
                    id: "m".into(),
                    label: "Medium (250×180 mm)".into(),
                    width_mm: 250.0,
                    height_mm: 180.0,
                    depth_mm: Some(80.0),
                },
            ],
            materials: vec![
                Material {
                    id: "kraft".into(),
                    label: "Kraft".into(),
                    price_multiplier: 1.0,
                },
                Material {
                    id: "white-corrugated".into(),
                    label: "White corrugated".into(),
                    price_multiplier: 1.2,
                },
            ],
            price: TemplatePrice { base: 1.8 },
        },
        TemplateDescriptor {
            id: "tpl-bag-coffee".into(),
            name: "Coffee Bag".into(),
            category: TemplateCategory::Bag,
            images: TemplateImages {
                flat: "/assets/templates/bag-coffee/flat.png".into(),
                dieline: "/assets/templates/bag-coffee/dieline.svg".into(),
                three_d: None,
            },
            sizes: vec![TemplateSize {
                id: "250g".into(),
                label: "250 g (120×200 mm)".into(),
                width_mm: 120.0,
                height_mm: 200.0,
                depth_mm: Some(70.0),
            }],
            materials: vec![
                Material {
                    id: "matte".into(),
                    label: "Matte laminate".into(),
                    price_multiplier: 1.3,
                },
                Material {
                    id: "foil".into(),
                    label: "Foil lined".into(),
                    price_multiplier: 1.6,
                },
            ],
            price: TemplatePrice { base: 0.9 },
        },
        TemplateDescriptor {
            id: "tpl-label-jar".into(),
            name: "Jar Label".into(),
            category: TemplateCategory::Label,
            images: TemplateImages {
                flat: "/assets/templates/label-jar/flat.png".into(),
                dieline: "/assets/templates/label-jar/dieline.svg".into(),
                three_d: None,
            },
            sizes: vec![TemplateSize {
                id: "wrap".into(),
                label: "Wrap (200×60 mm)".into(),
                width_mm: 200.0,
                height_mm: 60.0,
                depth_mm: None,
            }],
            materials: vec![Material {
                id: "paper".into(),
                label: "Uncoated paper".into(),
                price_multiplier: 1.0,
            }],
            price: TemplatePrice { base: 0.25 },
        },
    ]
}

/// Error response in the conventional `{"error": ...}` shape.
struct ApiError(StatusCode, String);

impl ApiError {
    fn not_found(what: impl Into<String>) -> Self {
        Self(StatusCode::NOT_FOUND, what.into())
    }

    fn bad_request(message: impl Into<String>) -> Self {
        Self(StatusCode::BAD_REQUEST, message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(serde_json::json!({ "error": self.1 }))).into_response()
    }
}

// ----- templates ------------------------------------------------------------

async fn list_templates(State(state): State<Arc<AppState>>) -> Json<Vec<TemplateDescriptor>> {
    let mut templates: Vec<TemplateDescriptor> =
        state.templates.iter().map(|e| e.value().clone()).collect();
    templates.sort_by(|a, b| a.name.cmp(&b.name));
    Json(templates)
}

async fn get_template(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TemplateDescriptor>, ApiError> {
    state
        .templates
        .get(&id)
        .map(|e| Json(e.value().clone()))
        .ok_or_else(|| ApiError::not_found(format!("template not found: {id}")))
}

// ----- designs --------------------------------------------------------------

async fn list_designs(State(state): State<Arc<AppState>>) -> Json<Vec<DesignRecord>> {
    let mut designs: Vec<DesignRecord> =
        state.designs.iter().map(|e| e.value().clone()).collect();
    designs.sort_by(|a, b| a.name.cmp(&b.name));
    Json(designs)
}

async fn get_design(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DesignRecord>, ApiError> {
    state
        .designs
        .get(&id)
        .map(|e| Json(e.value().clone()))
        .ok_or_else(|| ApiError::not_found(format!("design not found: {id}")))
}

async fn put_design(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<SaveDesignRequest>,
) -> Json<DesignRecord> {
    let record = DesignRecord {
        id: id.clone(),
        name: request.name,
        template_id: request.template_id,
        canvas: request.canvas,
        updated_at: Some(Utc::now().to_rfc3339()),
    };
    state.designs.insert(id, record.clone());
    Json(record)
}

async fn customize_design(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<CustomizeRequest>,
) -> Result<Json<CustomizeResponse>, ApiError> {
    if let Err(err) = request.validate() {
        let message = match err {
            ServiceError::Validation(message) => message,
            other => other.to_string(),
        };
        return Err(ApiError::bad_request(message));
    }
    let template = state
        .templates
        .get(&request.template_id)
        .ok_or_else(|| ApiError::not_found(format!("template not found: {}", request.template_id)))?;
    if template.size(&request.size).is_none() {
        return Err(ApiError::bad_request(format!("unknown size: {}", request.size)));
    }
    if template.material(&request.material).is_none() {
        return Err(ApiError::bad_request(format!(
            "unknown material: {}",
            request.material
        )));
    }

    let order_id = Uuid::new_v4().to_string();
    info!(design = %id, order = %order_id, "design customized into an order");
    state.orders.insert(order_id.clone(), request);
    Ok(Json(CustomizeResponse { id: order_id }))
}

async fn favorite_design(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !state.designs.contains_key(&id) {
        return Err(ApiError::not_found(format!("design not found: {id}")));
    }
    state.favorites.insert(id, ());
    Ok(StatusCode::OK)
}

// ----- comments -------------------------------------------------------------

async fn list_comments(
    State(state): State<Arc<AppState>>,
    Path(design_id): Path<String>,
) -> Json<Vec<Comment>> {
    let mut comments: Vec<Comment> = state
        .comments
        .iter()
        .filter(|e| e.value().design_id == design_id)
        .map(|e| e.value().clone())
        .collect();
    comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    Json(comments)
}

async fn create_comment(
    State(state): State<Arc<AppState>>,
    Path(design_id): Path<String>,
    Json(new_comment): Json<NewComment>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    if !state.designs.contains_key(&design_id) {
        return Err(ApiError::not_found(format!("design not found: {design_id}")));
    }
    if new_comment.body.trim().is_empty() {
        return Err(ApiError::bad_request("comment body is required"));
    }
    let comment = Comment {
        id: Uuid::new_v4().to_string(),
        design_id,
        author: new_comment.author,
        body: new_comment.body,
        created_at: Utc::now().to_rfc3339(),
    };
    state.comments.insert(comment.id.clone(), comment.clone());
    Ok((StatusCode::CREATED, Json(comment)))
}

async fn update_comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<UpdateComment>,
) -> Result<Json<Comment>, ApiError> {
    let mut entry = state
        .comments
        .get_mut(&id)
        .ok_or_else(|| ApiError::not_found(format!("comment not found: {id}")))?;
    entry.body = update.body;
    Ok(Json(entry.clone()))
}

async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .comments
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| ApiError::not_found(format!("comment not found: {id}")))
}

// ----- sharing --------------------------------------------------------------

async fn create_share_link(
    State(state): State<Arc<AppState>>,
    Path(design_id): Path<String>,
    Json(request): Json<ShareRequest>,
) -> Result<(StatusCode, Json<ShareLink>), ApiError> {
    if !state.designs.contains_key(&design_id) {
        return Err(ApiError::not_found(format!("design not found: {design_id}")));
    }
    let token = Uuid::new_v4().to_string();
    let link = ShareLink {
        url: format!("https://packform.app/s/{token}"),
        token: token.clone(),
        design_id,
        role: request.role,
    };
    state.shares.insert(token, link.clone());
    Ok((StatusCode::CREATED, Json(link)))
}

async fn revoke_share_link(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .shares
        .remove(&token)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| ApiError::not_found(format!("share not found: {token}")))
}

// ----- team -----------------------------------------------------------------

async fn list_members(State(state): State<Arc<AppState>>) -> Json<Vec<TeamMember>> {
    let mut members: Vec<TeamMember> = state.members.iter().map(|e| e.value().clone()).collect();
    members.sort_by(|a, b| a.email.cmp(&b.email));
    Json(members)
}

async fn invite_member(
    State(state): State<Arc<AppState>>,
    Json(invite): Json<InviteRequest>,
) -> Result<(StatusCode, Json<TeamMember>), ApiError> {
    if !invite.email.contains('@') {
        return Err(ApiError::bad_request(format!("invalid email: {}", invite.email)));
    }
    if state.members.iter().any(|e| e.value().email == invite.email) {
        return Err(ApiError::bad_request(format!(
            "already a member: {}",
            invite.email
        )));
    }
    let name = invite
        .email
        .split('@')
        .next()
        .unwrap_or(&invite.email)
        .to_string();
    let member = TeamMember {
        id: Uuid::new_v4().to_string(),
        name,
        email: invite.email,
        role: invite.role,
    };
    state.members.insert(member.id.clone(), member.clone());
    Ok((StatusCode::CREATED, Json(member)))
}

async fn update_member_role(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<UpdateRoleRequest>,
) -> Result<Json<TeamMember>, ApiError> {
    let mut entry = state
        .members
        .get_mut(&id)
        .ok_or_else(|| ApiError::not_found(format!("member not found: {id}")))?;
    if entry.role == TeamRole::Owner && update.role != TeamRole::Owner {
        return Err(ApiError::bad_request("the workspace owner cannot be demoted"));
    }
    entry.role = update.role;
    Ok(Json(entry.clone()))
}

async fn remove_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let is_owner = state
        .members
        .get(&id)
        .map(|e| e.value().role == TeamRole::Owner);
    match is_owner {
        None => Err(ApiError::not_found(format!("member not found: {id}"))),
        Some(true) => Err(ApiError::bad_request("the workspace owner cannot be removed")),
        Some(false) => {
            state.members.remove(&id);
            Ok(StatusCode::NO_CONTENT)
        }
    }
}

// ----- wiring ---------------------------------------------------------------

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/templates", get(list_templates))
        .route("/api/templates/{id}", get(get_template))
        .route("/api/designs", get(list_designs))
        .route("/api/designs/{id}", get(get_design).put(put_design))
        .route("/api/designs/{id}/customize", post(customize_design))
        .route("/api/designs/{id}/favorite", post(favorite_design))
        .route(
            "/api/designs/{id}/comments",
            get(list_comments).post(create_comment),
        )
        .route(
            "/api/comments/{id}",
            put(update_comment).delete(delete_comment),
        )
        .route("/api/designs/{id}/share", post(create_share_link))
        .route("/api/shares/{token}", delete(revoke_share_link))
        .route("/api/team/members", get(list_members).post(invite_member))
        .route(
            "/api/team/members/{id}",
            put(update_member_role).delete(remove_member),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "packform_server=info,tower_http=info".into()),
        )
        .init();

    let state = Arc::new(AppState::new());
    let app = router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(4100);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("PackForm API listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind server address");
    axum::serve(listener, app)
        .await
        .expect("server terminated unexpectedly");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(AppState::new()))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn save_design(app: &Router, id: &str) {
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/designs/{id}"),
                serde_json::json!({
                    "name": "Granola box",
                    "templateId": "tpl-box-mailer",
                    "canvas": {"objects": {}, "zOrder": []},
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn templates_are_seeded() {
        let response = app().oneshot(get_request("/api/templates")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let templates = json.as_array().unwrap();
        assert_eq!(templates.len(), 3);
        assert!(templates.iter().any(|t| t["category"] == "bag"));
    }

    #[tokio::test]
    async fn template_descriptor_carries_images_sizes_materials_price() {
        let response = app()
            .oneshot(get_request("/api/templates/tpl-box-mailer"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json["images"]["flat"].is_string());
        assert!(json["images"]["dieline"].is_string());
        assert!(json["sizes"].as_array().unwrap().len() >= 2);
        assert!(json["materials"][0]["priceMultiplier"].is_number());
        assert!(json["price"]["base"].is_number());
    }

    #[tokio::test]
    async fn unknown_template_is_404_with_error_body() {
        let response = app()
            .oneshot(get_request("/api/templates/tpl-ghost"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("tpl-ghost"));
    }

    #[tokio::test]
    async fn design_save_then_load_round_trips() {
        let app = app();
        save_design(&app, "d-100").await;

        let response = app.oneshot(get_request("/api/designs/d-100")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["name"], "Granola box");
        assert_eq!(json["templateId"], "tpl-box-mailer");
        assert!(json["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn customize_rejects_invalid_selections_before_creating_an_order() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/api/designs/d-1/customize",
                serde_json::json!({
                    "design": {},
                    "templateId": "tpl-box-mailer",
                    "size": "s",
                    "material": "kraft",
                    "quantity": 0,
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("quantity"));
    }

    #[tokio::test]
    async fn customize_returns_an_order_id() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/api/designs/d-1/customize",
                serde_json::json!({
                    "design": {"objects": {}},
                    "templateId": "tpl-box-mailer",
                    "size": "m",
                    "material": "kraft",
                    "quantity": 250,
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["id"].is_string());
    }

    #[tokio::test]
    async fn customize_rejects_unknown_size() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/api/designs/d-1/customize",
                serde_json::json!({
                    "design": {},
                    "templateId": "tpl-box-mailer",
                    "size": "xxl",
                    "material": "kraft",
                    "quantity": 10,
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn favorite_requires_an_existing_design() {
        let app = app();
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/designs/ghost/favorite",
                serde_json::json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        save_design(&app, "d-7").await;
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/designs/d-7/favorite",
                serde_json::json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn comment_crud_flow() {
        let app = app();
        save_design(&app, "d-9").await;

        // Create.
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/designs/d-9/comments",
                serde_json::json!({"author": "Maya", "body": "Logo up 5mm"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let comment = body_json(response).await;
        let comment_id = comment["id"].as_str().unwrap().to_string();

        // List.
        let response = app
            .clone()
            .oneshot(get_request("/api/designs/d-9/comments"))
            .await
            .unwrap();
        let listed = body_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        // Update.
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/comments/{comment_id}"),
                serde_json::json!({"body": "Logo up 8mm"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["body"], "Logo up 8mm");

        // Delete.
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/comments/{comment_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(get_request("/api/designs/d-9/comments"))
            .await
            .unwrap();
        assert!(body_json(response).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_comment_body_is_rejected() {
        let app = app();
        save_design(&app, "d-10").await;
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/designs/d-10/comments",
                serde_json::json!({"author": "Maya", "body": "   "}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn share_link_create_and_revoke() {
        let app = app();
        save_design(&app, "d-11").await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/designs/d-11/share",
                serde_json::json!({"role": "viewer"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let link = body_json(response).await;
        let token = link["token"].as_str().unwrap().to_string();
        assert!(link["url"].as_str().unwrap().contains(&token));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/shares/{token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // Revoking twice is a 404.
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/shares/{token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn team_invite_and_role_update() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/team/members",
                serde_json::json!({"email": "maya@roastery.coffee", "role": "editor"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let member = body_json(response).await;
        assert_eq!(member["name"], "maya");
        let member_id = member["id"].as_str().unwrap().to_string();

        // Duplicate invite rejected.
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/team/members",
                serde_json::json!({"email": "maya@roastery.coffee", "role": "viewer"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/team/members/{member_id}"),
                serde_json::json!({"role": "viewer"}),
            ))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["role"], "viewer");
    }

    #[tokio::test]
    async fn workspace_owner_cannot_be_removed() {
        let app = app();
        let response = app
            .clone()
            .oneshot(get_request("/api/team/members"))
            .await
            .unwrap();
        let members = body_json(response).await;
        let owner_id = members
            .as_array()
            .unwrap()
            .iter()
            .find(|m| m["role"] == "owner")
            .unwrap()["id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/team/members/{owner_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
