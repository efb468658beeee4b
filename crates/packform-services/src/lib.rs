//! PackForm service clients.
//!
//! Wire types and thin REST clients for the services surrounding the
//! editor: template catalog, design persistence and ordering, comments,
//! share links and team management, plus client-side price quoting. The
//! editor core treats all of these as opaque collaborators over HTTP.
//!
//! With the default `client` feature the crate carries an HTTP client
//! ([`ApiClient`]); without it only the wire types remain, which is how the
//! server consumes this crate.

#[cfg(feature = "client")]
mod client;
mod error;

pub mod comments;
pub mod designs;
pub mod pricing;
pub mod share;
pub mod team;
pub mod templates;

#[cfg(feature = "client")]
pub use client::ApiClient;
pub use comments::{Comment, NewComment, UpdateComment};
pub use designs::{CustomizeRequest, CustomizeResponse, DesignRecord, SaveDesignRequest};
pub use error::{ServiceError, ServiceResult};
pub use pricing::{Quote, quote, tier_discount};
pub use share::{ShareLink, ShareRequest, ShareRole};
pub use team::{InviteRequest, TeamMember, TeamRole, UpdateRoleRequest};
pub use templates::{
    Material, TemplateCategory, TemplateDescriptor, TemplateImages, TemplatePrice, TemplateSize,
};
