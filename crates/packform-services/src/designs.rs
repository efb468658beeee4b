//! Design persistence and ordering endpoints.

use crate::error::{ServiceError, ServiceResult};
use serde::{Deserialize, Serialize};

/// A stored design: serialized canvas plus its template reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// The canvas document JSON, treated as opaque by the service.
    pub canvas: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// `PUT /api/designs/{id}` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDesignRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    pub canvas: serde_json::Value,
}

/// `POST /api/designs/{id}/customize` body: the order handoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizeRequest {
    /// The canvas document JSON.
    pub design: serde_json::Value,
    pub template_id: String,
    pub size: String,
    pub material: String,
    pub quantity: u32,
}

impl CustomizeRequest {
    /// Check the order selections before anything goes on the wire.
    ///
    /// Missing size, missing material or a zero quantity fail here with a
    /// `Validation` error and no request is made.
    pub fn validate(&self) -> ServiceResult<()> {
        if self.template_id.trim().is_empty() {
            return Err(ServiceError::Validation("template is required".into()));
        }
        if self.size.trim().is_empty() {
            return Err(ServiceError::Validation("size is required".into()));
        }
        if self.material.trim().is_empty() {
            return Err(ServiceError::Validation("material is required".into()));
        }
        if self.quantity == 0 {
            return Err(ServiceError::Validation(
                "quantity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// `POST /api/designs/{id}/customize` response: the created order ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizeResponse {
    pub id: String,
}

#[cfg(feature = "client")]
impl crate::ApiClient {
    /// `GET /api/designs`
    pub async fn list_designs(&self) -> ServiceResult<Vec<DesignRecord>> {
        self.get_json("/api/designs").await
    }

    /// `GET /api/designs/{id}`
    pub async fn load_design(&self, id: &str) -> ServiceResult<DesignRecord> {
        self.get_json(&format!("/api/designs/{id}")).await
    }

    /// `PUT /api/designs/{id}`
    pub async fn save_design(
        &self,
        id: &str,
        request: &SaveDesignRequest,
    ) -> ServiceResult<DesignRecord> {
        self.send_json(reqwest::Method::PUT, &format!("/api/designs/{id}"), request)
            .await
    }

    /// `POST /api/designs/{id}/customize`
    ///
    /// Validates the selections locally first; a validation failure never
    /// reaches the network.
    pub async fn customize_design(
        &self,
        id: &str,
        request: &CustomizeRequest,
    ) -> ServiceResult<CustomizeResponse> {
        request.validate()?;
        self.send_json(
            reqwest::Method::POST,
            &format!("/api/designs/{id}/customize"),
            request,
        )
        .await
    }

    /// `POST /api/designs/{id}/favorite`
    pub async fn favorite_design(&self, id: &str) -> ServiceResult<()> {
        self.send_no_content(reqwest::Method::POST, &format!("/api/designs/{id}/favorite"))
            .await
    }
}
