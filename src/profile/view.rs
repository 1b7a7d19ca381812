//! Server-side model of the profile page.
//!
//! The page has two states. Loading it shows the current user's fields
//! (`ProfileData::load`); submitting its form sends the browser to the
//! edit-profile page (`edit_profile_location`). It never validates or saves
//! anything itself.

use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::user::model::User;

pub const DEFAULT_PROFILE_IMAGE: &str = "/assets/image.jpg";
const CREATED_AT_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub user_name: String,
    pub email: String,
    pub profile_image: String,
    pub created_at: String,
}

impl Default for ProfileData {
    fn default() -> Self {
        ProfileData {
            user_name: String::new(),
            email: String::new(),
            profile_image: DEFAULT_PROFILE_IMAGE.to_string(),
            created_at: String::new(),
        }
    }
}

impl From<&User> for ProfileData {
    fn from(user: &User) -> Self {
        ProfileData {
            user_name: user.name.clone(),
            email: user.email.clone(),
            profile_image: user
                .profile_image
                .clone()
                .filter(|image| !image.is_empty())
                .unwrap_or_else(|| DEFAULT_PROFILE_IMAGE.to_string()),
            created_at: user.created_at.format(CREATED_AT_FORMAT).to_string(),
        }
    }
}

impl ProfileData {
    /// A missing user renders blank fields rather than failing.
    pub fn load(user: Option<&User>) -> Self {
        user.map(ProfileData::from).unwrap_or_default()
    }
}

/// Where a submitted profile form sends the browser.
pub fn edit_profile_location(user_id: &ObjectId) -> String {
    format!("/edit-profile/{}", user_id.to_hex())
}
