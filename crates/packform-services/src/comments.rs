//! Design comments: conventional REST CRUD.

use crate::error::ServiceResult;
use serde::{Deserialize, Serialize};

/// A comment on a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub design_id: String,
    pub author: String,
    pub body: String,
    pub created_at: String,
}

/// `POST /api/designs/{id}/comments` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewComment {
    pub author: String,
    pub body: String,
}

/// `PUT /api/comments/{id}` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateComment {
    pub body: String,
}

#[cfg(feature = "client")]
impl crate::ApiClient {
    /// `GET /api/designs/{id}/comments`
    pub async fn list_comments(&self, design_id: &str) -> ServiceResult<Vec<Comment>> {
        self.get_json(&format!("/api/designs/{design_id}/comments"))
            .await
    }

    /// `POST /api/designs/{id}/comments`
    pub async fn add_comment(
        &self,
        design_id: &str,
        comment: &NewComment,
    ) -> ServiceResult<Comment> {
        self.send_json(
            reqwest::Method::POST,
            &format!("/api/designs/{design_id}/comments"),
            comment,
        )
        .await
    }

    /// `PUT /api/comments/{id}`
    pub async fn update_comment(
        &self,
        comment_id: &str,
        update: &UpdateComment,
    ) -> ServiceResult<Comment> {
        self.send_json(
            reqwest::Method::PUT,
            &format!("/api/comments/{comment_id}"),
            update,
        )
        .await
    }

    /// `DELETE /api/comments/{id}`
    pub async fn delete_comment(&self, comment_id: &str) -> ServiceResult<()> {
        self.send_no_content(reqwest::Method::DELETE, &format!("/api/comments/{comment_id}"))
            .await
    }
}
