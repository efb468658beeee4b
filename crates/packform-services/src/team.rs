//! Team membership management.

use crate::error::ServiceResult;
use serde::{Deserialize, Serialize};

/// Role of a member within the team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Owner,
    Editor,
    Viewer,
}

/// A member of the workspace team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: TeamRole,
}

/// `POST /api/team/members` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteRequest {
    pub email: String,
    pub role: TeamRole,
}

/// `PUT /api/team/members/{id}` body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: TeamRole,
}

#[cfg(feature = "client")]
impl crate::ApiClient {
    /// `GET /api/team/members`
    pub async fn team_members(&self) -> ServiceResult<Vec<TeamMember>> {
        self.get_json("/api/team/members").await
    }

    /// `POST /api/team/members`
    pub async fn invite_member(&self, invite: &InviteRequest) -> ServiceResult<TeamMember> {
        self.send_json(reqwest::Method::POST, "/api/team/members", invite)
            .await
    }

    /// `PUT /api/team/members/{id}`
    pub async fn update_member_role(
        &self,
        member_id: &str,
        update: &UpdateRoleRequest,
    ) -> ServiceResult<TeamMember> {
        self.send_json(
            reqwest::Method::PUT,
            &format!("/api/team/members/{member_id}"),
            update,
        )
        .await
    }

    /// `DELETE /api/team/members/{id}`
    pub async fn remove_member(&self, member_id: &str) -> ServiceResult<()> {
        self.send_no_content(
            reqwest::Method::DELETE,
            &format!("/api/team/members/{member_id}"),
        )
        .await
    }
}
