use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RegisterDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    pub message: String,
    pub is_admin: bool,
}

/// Identity of the signed-in user as carried by the session token.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateUsernameDto {
    #[serde(default)]
    pub username: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiCallsDto {
    pub api_calls: i32,
}

/// One row of the admin user table.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AdminUserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub api_calls: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminDataDto {
    pub is_admin: bool,
    pub users: Vec<AdminUserDto>,
}
