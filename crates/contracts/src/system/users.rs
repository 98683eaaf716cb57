use serde::{Deserialize, Serialize};

use crate::domain::common::{DeleteGuard, EntityRecord};
use crate::shared::list_filter::{SearchField, Searchable};
use crate::shared::validation::{is_plausible_email, require_text, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Staff,
    #[default]
    Learner,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Staff, UserRole::Learner];

    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Staff => "staff",
            UserRole::Learner => "learner",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Staff => "Staff",
            UserRole::Learner => "Learner",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Suspended,
}

impl UserStatus {
    pub const ALL: [UserStatus; 2] = [UserStatus::Active, UserStatus::Suspended];

    pub fn code(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Suspended => "suspended",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Suspended => "Suspended",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
    #[serde(default, alias = "last_login_at")]
    pub last_login_at: Option<String>,
}

impl EntityRecord for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "users"
    }

    fn envelope_key() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![SearchField::Text(&self.name), SearchField::Text(&self.email)]
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "role" => Some(self.role.code().to_string()),
            "status" => Some(self.status.code().to_string()),
            _ => None,
        }
    }
}

impl DeleteGuard for User {}

/// Create and update share one form; `password` is only required on create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
}

impl UserDto {
    pub fn is_new(&self) -> bool {
        self.password.is_some()
    }
}

impl From<&User> for UserDto {
    fn from(u: &User) -> Self {
        Self {
            name: u.name.clone(),
            email: u.email.clone(),
            password: None,
            role: u.role,
            status: u.status,
        }
    }
}

impl Validate for UserDto {
    fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "Name")?;
        require_text(&self.email, "Email")?;
        if !is_plausible_email(&self.email) {
            return Err("Email is not a valid email address".into());
        }
        if let Some(password) = &self.password {
            if password.chars().count() < 8 {
                return Err("Password must be at least 8 characters".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_filter::{filter_items, FilterState};
    use serde_json::json;

    fn users() -> Vec<User> {
        serde_json::from_value(json!([
            {"id": "1", "name": "Mona Adel", "email": "mona@institute.org", "role": "admin"},
            {"id": "2", "name": "Yousef Ali", "email": "yousef@mail.com", "role": "learner", "status": "suspended"},
            {"id": "3", "name": "Adel Amin", "email": "adel@institute.org", "role": "staff"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_role_and_status_filters() {
        let all = users();
        let admins = filter_items(&all, &FilterState::default().with_facet("role", "admin"), "en");
        assert_eq!(admins.len(), 1);
        let suspended = filter_items(&all, &FilterState::default().with_facet("status", "suspended"), "en");
        assert_eq!(suspended[0].id, "2");
    }

    #[test]
    fn test_search_name_or_email() {
        let all = users();
        let found = filter_items(&all, &FilterState::with_search("adel"), "en");
        let ids: Vec<&str> = found.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        let found = filter_items(&all, &FilterState::with_search("institute.org").with_facet("role", "staff"), "en");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_password_rules_apply_to_new_users_only() {
        let mut dto = UserDto {
            name: "Nour".into(),
            email: "nour@institute.org".into(),
            password: Some("short".into()),
            ..Default::default()
        };
        assert!(dto.is_new());
        assert!(dto.validate().is_err());
        dto.password = Some("long-enough".into());
        assert!(dto.validate().is_ok());
        dto.password = None;
        assert!(dto.validate().is_ok());
        assert!(serde_json::to_value(&dto).unwrap().get("password").is_none());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let dto = UserDto {
            name: "Nour".into(),
            email: "nour".into(),
            ..Default::default()
        };
        assert_eq!(dto.validate().unwrap_err(), "Email is not a valid email address");
    }
}
