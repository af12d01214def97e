//! The `Login` record: one saved credential from a Firefox export.
//!
//! All fields are plain text exactly as Firefox wrote them.  The JSON
//! field names are fixed because they are part of the encrypted payload
//! of every existing store.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{FfPwdError, Result};

/// Number of columns in a Firefox `logins.csv` row.
pub const LOGIN_ROW_LEN: usize = 9;

/// A single stored login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "PascalCase")]
pub struct Login {
    #[serde(rename = "URL")]
    pub url: String,
    pub username: String,
    pub password: String,
    pub http_realm: String,
    pub form_action_origin: String,
    #[serde(rename = "GUID")]
    pub guid: String,
    pub time_created: String,
    pub time_last_used: String,
    pub time_password_changed: String,
}

impl Login {
    /// Build a login from one CSV row, in Firefox column order.
    ///
    /// `line` is only used for the error message.
    pub fn from_row<'a, I>(row: I, line: u64) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let fields: Vec<&str> = row.into_iter().collect();
        let [
            url,
            username,
            password,
            http_realm,
            form_action_origin,
            guid,
            time_created,
            time_last_used,
            time_password_changed,
        ] = fields[..]
        else {
            return Err(FfPwdError::InvalidLoginRow {
                line,
                found: fields.len(),
            });
        };

        Ok(Self {
            url: url.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            http_realm: http_realm.to_string(),
            form_action_origin: form_action_origin.to_string(),
            guid: guid.to_string(),
            time_created: time_created.to_string(),
            time_last_used: time_last_used.to_string(),
            time_password_changed: time_password_changed.to_string(),
        })
    }

    /// Multi-line preview shown while picking a login.  Never contains
    /// the password itself.
    pub fn summary(&self) -> String {
        let username = if self.username.is_empty() {
            "(none)"
        } else {
            &self.username
        };
        let password = if self.password.is_empty() {
            "(none)"
        } else {
            "[secret]"
        };

        format!(
            "URL: {}\nUsername: {username}\nPassword: {password}\n",
            self.url
        )
    }
}

impl std::fmt::Debug for Login {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Login")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("guid", &self.guid)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Vec<&'static str> {
        vec![
            "https://a.com",
            "u",
            "p",
            "",
            "https://a.com",
            "{guid}",
            "1600000000000",
            "1600000001000",
            "1600000002000",
        ]
    }

    #[test]
    fn from_row_maps_columns_in_order() {
        let login = Login::from_row(row(), 2).unwrap();
        assert_eq!(login.url, "https://a.com");
        assert_eq!(login.username, "u");
        assert_eq!(login.password, "p");
        assert_eq!(login.http_realm, "");
        assert_eq!(login.guid, "{guid}");
        assert_eq!(login.time_password_changed, "1600000002000");
    }

    #[test]
    fn from_row_rejects_eight_columns() {
        let mut short = row();
        short.pop();
        let err = Login::from_row(short, 3).unwrap_err();
        assert!(matches!(
            err,
            FfPwdError::InvalidLoginRow { line: 3, found: 8 }
        ));
    }

    #[test]
    fn from_row_rejects_ten_columns() {
        let mut long = row();
        long.push("extra");
        let err = Login::from_row(long, 4).unwrap_err();
        assert!(matches!(
            err,
            FfPwdError::InvalidLoginRow { line: 4, found: 10 }
        ));
    }

    #[test]
    fn summary_masks_password() {
        let login = Login::from_row(row(), 1).unwrap();
        let summary = login.summary();
        assert!(summary.contains("Username: u"));
        assert!(summary.contains("Password: [secret]"));
        assert!(!summary.contains("Password: p"));
    }

    #[test]
    fn summary_marks_empty_fields() {
        let mut fields = row();
        fields[1] = "";
        fields[2] = "";
        let login = Login::from_row(fields, 1).unwrap();
        assert!(login.summary().contains("Username: (none)"));
        assert!(login.summary().contains("Password: (none)"));
    }

    #[test]
    fn json_uses_legacy_field_names() {
        let login = Login::from_row(row(), 1).unwrap();
        let json = serde_json::to_string(&login).unwrap();
        assert!(json.contains("\"URL\":\"https://a.com\""));
        assert!(json.contains("\"GUID\":\"{guid}\""));
        assert!(json.contains("\"HttpRealm\""));
        assert!(json.contains("\"FormActionOrigin\""));
        assert!(json.contains("\"TimePasswordChanged\""));
    }

    #[test]
    fn debug_hides_password() {
        let mut fields = row();
        fields[2] = "hunter2";
        let login = Login::from_row(fields, 1).unwrap();
        assert!(!format!("{login:?}").contains("hunter2"));
    }
}
