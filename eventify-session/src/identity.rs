use serde::{Deserialize, Serialize};

/// Role of the authenticated principal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// The authenticated principal of the current session. Created on
/// login/signup, destroyed on logout; at most one is active at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: String,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let identity = Identity {
            id: 1,
            name: "John Doe".to_string(),
            email: "admin@eventify.com".to_string(),
            role: Role::Admin,
            avatar: String::new(),
        };
        let json = serde_json::to_string(&identity).unwrap();
        assert!(json.contains(r#""role":"admin""#));

        let parsed: Identity = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_admin());
    }
}
