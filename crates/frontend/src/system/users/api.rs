//! User → role join (`{path}/{id}/roles`)

use contracts::shared::crud::CrudEntity;
use contracts::system::{User, UserRoles};

use crate::shared::api_utils::api_url;
use crate::shared::crud::service::{fetch_json, put_json};
use crate::shared::crud::ApiError;

pub fn roles_url(user_id: &str) -> String {
    format!(
        "{}/{}/roles",
        api_url(User::descriptor().service_path),
        urlencoding::encode(user_id)
    )
}

pub async fn fetch_user_roles(user_id: &str) -> Result<UserRoles, ApiError> {
    let mut roles: UserRoles = fetch_json(&roles_url(user_id)).await?;
    if roles.user_id.is_empty() {
        roles.user_id = user_id.to_string();
    }
    Ok(roles)
}

pub async fn save_user_roles(roles: &UserRoles) -> Result<(), ApiError> {
    log::debug!("saving {} roles of user {}", roles.role_ids.len(), roles.user_id);
    put_json(&roles_url(&roles.user_id), roles).await
}
