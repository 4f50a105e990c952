use serde::{Deserialize, Serialize};

/// Registration form data shared by every wizard step.
///
/// Serialized as-is to the registration endpoint, so the field names
/// follow the service wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub username: String,
    pub password: String,
    pub re_password: String,
    pub email: String,
    pub role: String,
    pub bio: String,
    pub github: String,
    pub instagram: String,
    pub linkedin: String,
    pub twitter: String,
}

/// Partial update applied as the user types; absent fields stay untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationUpdate {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub re_password: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub github: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

impl RegistrationUpdate {
    pub fn apply(self, form: &mut RegistrationForm) {
        merge(&mut form.full_name, self.full_name);
        merge(&mut form.username, self.username);
        merge(&mut form.password, self.password);
        merge(&mut form.re_password, self.re_password);
        merge(&mut form.email, self.email);
        merge(&mut form.role, self.role);
        merge(&mut form.bio, self.bio);
        merge(&mut form.github, self.github);
        merge(&mut form.instagram, self.instagram);
        merge(&mut form.linkedin, self.linkedin);
        merge(&mut form.twitter, self.twitter);
    }
}

fn merge(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *target = value;
    }
}

#[cfg(test)]
mod tests {
    use super::{RegistrationForm, RegistrationUpdate};

    #[test]
    fn update_touches_only_present_fields() {
        let mut form = RegistrationForm {
            username: "alice".into(),
            email: "alice@example.com".into(),
            ..Default::default()
        };
        let update = RegistrationUpdate {
            bio: Some("hello".into()),
            ..Default::default()
        };
        update.apply(&mut form);
        assert_eq!(form.bio, "hello");
        assert_eq!(form.username, "alice");
        assert_eq!(form.email, "alice@example.com");
    }
}
