//! Design share links.

use crate::error::ServiceResult;
use serde::{Deserialize, Serialize};

/// What a share link allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareRole {
    Viewer,
    Editor,
}

/// `POST /api/designs/{id}/share` body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShareRequest {
    pub role: ShareRole,
}

/// An issued share link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
    pub token: String,
    pub url: String,
    pub design_id: String,
    pub role: ShareRole,
}

#[cfg(feature = "client")]
impl crate::ApiClient {
    /// `POST /api/designs/{id}/share`
    pub async fn create_share_link(
        &self,
        design_id: &str,
        request: &ShareRequest,
    ) -> ServiceResult<ShareLink> {
        self.send_json(
            reqwest::Method::POST,
            &format!("/api/designs/{design_id}/share"),
            request,
        )
        .await
    }

    /// `DELETE /api/shares/{token}`
    pub async fn revoke_share_link(&self, token: &str) -> ServiceResult<()> {
        self.send_no_content(reqwest::Method::DELETE, &format!("/api/shares/{token}"))
            .await
    }
}
