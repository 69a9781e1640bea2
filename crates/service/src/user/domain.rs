use serde::{Deserialize, Serialize};

/// Registered user (business view).
///
/// `id` is `None` until the user has been persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { id: None, name: name.into(), email: email.into(), password: password.into() }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

impl From<models::user::Model> for User {
    fn from(m: models::user::Model) -> Self {
        Self { id: Some(m.id), name: m.name, email: m.email, password: m.password }
    }
}
