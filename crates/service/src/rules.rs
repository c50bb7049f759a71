//! Validation and business rules guarding storage writes.

use employee_registry_core::is_valid_email;
use employee_registry_storage::EmployeeStore;

use crate::error::ServiceError;

/// Fails when `email` is empty or does not match the address pattern.
pub fn validate_email(email: &str) -> Result<(), ServiceError> {
    if email.is_empty() || !is_valid_email(email) {
        return Err(ServiceError::InvalidEmail { email: email.to_owned() });
    }
    Ok(())
}

/// Fails when any stored employee already uses `email`.
///
/// Call only after [`validate_email`] succeeded.
pub async fn ensure_email_unique<S>(email: &str, storage: &S) -> Result<(), ServiceError>
where
    S: EmployeeStore + ?Sized,
{
    if storage.exists_by_email(email).await? {
        return Err(ServiceError::DuplicateEmail { email: email.to_owned() });
    }
    Ok(())
}

/// Like [`ensure_email_unique`], but the employee `id` may keep its own email.
pub async fn ensure_email_unique_except<S>(
    email: &str,
    id: i64,
    storage: &S,
) -> Result<(), ServiceError>
where
    S: EmployeeStore + ?Sized,
{
    match storage.find_by_email(email).await? {
        Some(existing) if existing.id != id => {
            Err(ServiceError::DuplicateEmail { email: email.to_owned() })
        },
        _ => Ok(()),
    }
}

pub async fn ensure_exists<S>(id: i64, storage: &S) -> Result<(), ServiceError>
where
    S: EmployeeStore + ?Sized,
{
    if storage.exists_by_id(id).await? {
        Ok(())
    } else {
        Err(ServiceError::not_found_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    #[test]
    fn test_validate_email_accepts_valid() {
        assert!(validate_email("ana.li@example.com").is_ok());
        assert!(validate_email("first+tag@sub.example.org").is_ok());
    }

    #[test]
    fn test_validate_email_rejects_invalid() {
        for email in ["", "plain", "a@b", "a@b.c", "a b@example.com", "a@example.toolongtld"] {
            let err = validate_email(email).unwrap_err();
            assert_eq!(err.kind(), FailureKind::InvalidEmail, "{email}");
        }
    }
}
