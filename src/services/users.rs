//! Authentication and staff user management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    error::{AppError, AppResult},
    models::enums::{AccessLevel, UserRole},
    models::user::{CreateUser, NewUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Authenticate a staff user by email and password.
    ///
    /// The failure message is the same for an unknown email and a wrong
    /// password, so callers cannot probe which emails exist.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .repository
            .users
            .find_by_email(&self.repository.pool, email)
            .await?
            .ok_or_else(|| AppError::Authentication("invalid email or password".to_string()))?;

        if !user.active || user.deleted {
            return Err(AppError::Authentication("account is disabled".to_string()));
        }

        if !verify_password(&user.password_hash, password)? {
            return Err(AppError::Authentication("invalid email or password".to_string()));
        }

        Ok(user)
    }

    /// Create a staff user.
    ///
    /// All defaulting happens in one normalize step before persisting:
    /// fields are trimmed, a missing role or access level gets its default,
    /// and the password is hashed.
    pub async fn create(&self, user: CreateUser) -> AppResult<User> {
        let record = normalize(user)?;
        let id = self
            .repository
            .users
            .save(&self.repository.pool, &record)
            .await?;
        let created = self
            .repository
            .users
            .find_by_id(&self.repository.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user with id {} not found", id)))?;

        tracing::info!(user_id = created.id, "staff user created");
        Ok(created)
    }
}

/// Normalize-before-persist: the single place new-user defaults are applied.
fn normalize(user: CreateUser) -> AppResult<NewUser> {
    let name = user.name.trim().to_string();
    let email = user.email.trim().to_lowercase();

    if name.is_empty() {
        return Err(AppError::Validation("user name must not be empty".to_string()));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation("user email is not valid".to_string()));
    }
    if user.password.is_empty() {
        return Err(AppError::Validation("user password must not be empty".to_string()));
    }

    Ok(NewUser {
        name,
        email,
        password_hash: hash_password(&user.password)?,
        phone: user.phone.unwrap_or_default(),
        role: user.role.unwrap_or(UserRole::User),
        access_level: user.access_level.unwrap_or(AccessLevel::ReadOnly),
    })
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("failed to hash password: {}", e)))
}

fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("stored password hash is invalid: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateUser {
        CreateUser {
            name: "  Maria Lopez  ".to_string(),
            email: " Maria@Novabook.Local ".to_string(),
            password: "S3cret!pass".to_string(),
            phone: None,
            role: None,
            access_level: None,
        }
    }

    #[test]
    fn normalize_trims_and_defaults() {
        let record = normalize(request()).expect("normalize should succeed");
        assert_eq!(record.name, "Maria Lopez");
        assert_eq!(record.email, "maria@novabook.local");
        assert_eq!(record.phone, "");
        assert_eq!(record.role, UserRole::User);
        assert_eq!(record.access_level, AccessLevel::ReadOnly);
        assert_ne!(record.password_hash, "S3cret!pass");
    }

    #[test]
    fn normalize_rejects_blank_name_and_bad_email() {
        let mut bad_name = request();
        bad_name.name = "   ".to_string();
        assert!(matches!(normalize(bad_name), Err(AppError::Validation(_))));

        let mut bad_email = request();
        bad_email.email = "not-an-email".to_string();
        assert!(matches!(normalize(bad_email), Err(AppError::Validation(_))));

        let mut bad_password = request();
        bad_password.password = String::new();
        assert!(matches!(normalize(bad_password), Err(AppError::Validation(_))));
    }

    #[test]
    fn password_hash_verifies_and_rejects() {
        let hash = hash_password("correct horse").expect("hash should succeed");
        assert!(verify_password(&hash, "correct horse").unwrap());
        assert!(!verify_password(&hash, "wrong horse").unwrap());
    }

    #[test]
    fn explicit_role_survives_normalization() {
        let mut req = request();
        req.role = Some(UserRole::Admin);
        req.access_level = Some(AccessLevel::Manage);
        let record = normalize(req).expect("normalize should succeed");
        assert_eq!(record.role, UserRole::Admin);
        assert_eq!(record.access_level, AccessLevel::Manage);
    }
}
