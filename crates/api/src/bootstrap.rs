//! First-start creation of the admin account.

use gohte_db::models::user::CreateUser;
use gohte_db::repositories::UserRepo;
use gohte_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::config::AdminBootstrap;
use crate::error::{AppError, AppResult};

/// Create the admin account when the `users` table is empty.
///
/// Returns `true` if an account was created. Existing accounts are never
/// touched, so the bootstrap credentials only matter on the first start.
pub async fn ensure_admin(pool: &DbPool, bootstrap: Option<&AdminBootstrap>) -> AppResult<bool> {
    if UserRepo::count(pool).await? > 0 {
        return Ok(false);
    }

    let Some(admin) = bootstrap else {
        tracing::warn!("No admin account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one");
        return Ok(false);
    };

    validate_password_strength(&admin.password, MIN_PASSWORD_LENGTH)
        .map_err(AppError::BadRequest)?;
    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: admin.email.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, email = %user.email, "Admin account created");
    Ok(true)
}
