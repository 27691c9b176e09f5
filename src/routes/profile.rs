use axum::Json;
use serde::Serialize;

use crate::auth::AuthUser;
use crate::identity::derive_email;

const JOINED: &str = "2024-01-15";
const BIO: &str = "This is a mock user profile for testing purposes.";
const POSTS: u32 = 42;
const FOLLOWERS: u32 = 128;
const FOLLOWING: u32 = 64;

#[derive(Serialize)]
pub struct ProfileResponse {
    success: bool,
    profile: Profile,
}

#[derive(Serialize)]
pub struct Profile {
    username: String,
    email: String,
    joined: &'static str,
    bio: &'static str,
    posts: u32,
    followers: u32,
    following: u32,
}

/// GET /profile - Mock profile of the token holder
pub async fn page(AuthUser { username }: AuthUser) -> Json<ProfileResponse> {
    let email = derive_email(&username);

    Json(ProfileResponse {
        success: true,
        profile: Profile {
            username,
            email,
            joined: JOINED,
            bio: BIO,
            posts: POSTS,
            followers: FOLLOWERS,
            following: FOLLOWING,
        },
    })
}
