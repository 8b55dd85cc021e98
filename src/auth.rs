//! Offline authentication: credential validation and an in-memory account book.

use log::{info, warn};
use std::collections::HashMap;

use crate::error::AuthError;
use crate::model::User;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Rules the password does not meet, as messages for the tooltip. Empty means acceptable.
pub fn password_issues(password: &str) -> Vec<&'static str> {
    let mut issues = Vec::new();
    if password.chars().count() < MIN_PASSWORD_LEN {
        issues.push("Mínimo de 8 caracteres.");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        issues.push("Pelo menos uma letra minúscula.");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        issues.push("Pelo menos uma letra maiúscula.");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        issues.push("Pelo menos um número.");
    }
    if !password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace()) {
        issues.push("Pelo menos um símbolo.");
    }
    issues
}

pub fn is_email(input: &str) -> bool {
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !input.chars().any(char::is_whitespace)
}

pub fn validate_sign_up(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), AuthError> {
    if password != confirm_password {
        return Err(AuthError::PasswordMismatch);
    }
    let issues = password_issues(password);
    if !issues.is_empty() {
        return Err(AuthError::WeakPassword(issues));
    }
    if username.trim().is_empty() {
        return Err(AuthError::EmptyUsername);
    }
    if !is_email(email) {
        return Err(AuthError::InvalidEmail);
    }
    Ok(())
}

struct Account {
    user: User,
    password: String,
}

/// Stand-in for the hosted auth backend while the lab runs offline.
pub struct OfflineAuth {
    accounts: HashMap<String, Account>,
}

impl OfflineAuth {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    /// The account the offline build boots straight into.
    pub fn mock_user() -> User {
        User {
            id: "mock-user-id-12345".into(),
            email: "offline@slimes.lab".into(),
            username: Some("DrCROK_Offline".into()),
        }
    }

    pub fn with_mock_account(password: &str) -> Self {
        let mut auth = Self::new();
        let user = Self::mock_user();
        auth.accounts.insert(
            user.email.clone(),
            Account {
                user,
                password: password.to_string(),
            },
        );
        auth
    }

    pub fn sign_up(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<User, AuthError> {
        validate_sign_up(username, email, password, confirm_password)?;
        let username = username.trim();
        let email = email.trim().to_lowercase();
        if self.accounts.contains_key(&email) || self.resolve_username(username).is_some() {
            return Err(AuthError::AccountExists);
        }
        let user = User {
            id: format!("offline-user-{}", self.accounts.len() + 1),
            email: email.clone(),
            username: Some(username.to_string()),
        };
        self.accounts.insert(
            email,
            Account {
                user: user.clone(),
                password: password.to_string(),
            },
        );
        info!("offline account created for {username}");
        Ok(user)
    }

    /// Signs in with an email or a username.
    pub fn sign_in(&self, login: &str, password: &str) -> Result<User, AuthError> {
        let login = login.trim();
        if login.is_empty() {
            return Err(AuthError::EmptyLogin);
        }
        let email = if is_email(login) {
            Some(login.to_lowercase())
        } else {
            self.resolve_username(login)
        };
        match email.and_then(|e| self.accounts.get(&e)) {
            Some(acc) if acc.password == password => Ok(acc.user.clone()),
            _ => {
                warn!("sign-in rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Drops the local flask snapshot along with the session.
    pub fn sign_out(&self) {
        crate::storage::clear_local_slimes();
        info!("signed out");
    }

    fn resolve_username(&self, username: &str) -> Option<String> {
        self.accounts
            .values()
            .find(|a| {
                a.user
                    .username
                    .as_deref()
                    .is_some_and(|u| u.eq_ignore_ascii_case(username))
            })
            .map(|a| a.user.email.clone())
    }
}

impl Default for OfflineAuth {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "Gosma#2024";

    #[test]
    fn strong_password_has_no_issues() {
        assert!(password_issues(GOOD).is_empty());
    }

    #[test]
    fn weak_password_lists_each_rule() {
        let issues = password_issues("abc");
        assert_eq!(issues.len(), 4);
        assert!(issues.contains(&"Mínimo de 8 caracteres."));
        assert!(!issues.contains(&"Pelo menos uma letra minúscula."));
    }

    #[test]
    fn email_shape() {
        assert!(is_email("offline@slimes.lab"));
        assert!(!is_email("DrCROK_Offline"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a b@c.d"));
        assert!(!is_email("@c.d"));
    }

    #[test]
    fn sign_up_checks_mismatch_first() {
        assert_eq!(
            validate_sign_up("x", "x@y.z", GOOD, "other"),
            Err(AuthError::PasswordMismatch)
        );
        assert!(matches!(
            validate_sign_up("x", "x@y.z", "weak", "weak"),
            Err(AuthError::WeakPassword(_))
        ));
        assert_eq!(validate_sign_up(" ", "x@y.z", GOOD, GOOD), Err(AuthError::EmptyUsername));
        assert_eq!(validate_sign_up("x", "nope", GOOD, GOOD), Err(AuthError::InvalidEmail));
        assert_eq!(validate_sign_up("x", "x@y.z", GOOD, GOOD), Ok(()));
    }

    #[test]
    fn sign_in_by_email_or_username() {
        let auth = OfflineAuth::with_mock_account(GOOD);
        let by_email = auth.sign_in("offline@slimes.lab", GOOD).unwrap();
        let by_name = auth.sign_in("drcrok_offline", GOOD).unwrap();
        assert_eq!(by_email, by_name);
        assert_eq!(by_email.id, "mock-user-id-12345");
    }

    #[test]
    fn failures_share_one_message() {
        let auth = OfflineAuth::with_mock_account(GOOD);
        let wrong_pw = auth.sign_in("offline@slimes.lab", "Nope#1234").unwrap_err();
        let unknown = auth.sign_in("ninguem@slimes.lab", GOOD).unwrap_err();
        let unknown_name = auth.sign_in("ninguem", GOOD).unwrap_err();
        assert_eq!(wrong_pw, AuthError::InvalidCredentials);
        assert_eq!(unknown, wrong_pw);
        assert_eq!(unknown_name, wrong_pw);
        assert_eq!(wrong_pw.to_string(), "Email ou Senha inválidos.");
        assert_eq!(auth.sign_in("  ", GOOD), Err(AuthError::EmptyLogin));
    }

    #[test]
    fn sign_up_then_sign_in() {
        let mut auth = OfflineAuth::new();
        let user = auth.sign_up("Gosminha", "Gosma@Lab.io", GOOD, GOOD).unwrap();
        assert_eq!(user.email, "gosma@lab.io");
        assert_eq!(auth.sign_in("gosminha", GOOD).unwrap(), user);
        assert_eq!(
            auth.sign_up("gosminha", "outra@lab.io", GOOD, GOOD),
            Err(AuthError::AccountExists)
        );
    }
}
