use crate::entities::player;
use crate::error::{ServiceError, ServiceResult};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Longest display name the `player.name` column accepts
const MAX_NAME_LENGTH: usize = 100;

pub struct PlayerService;

impl PlayerService {
    /// Register a new player and return its id.
    ///
    /// Names are not required to be unique.
    pub async fn register_player(db: &DatabaseConnection, name: &str) -> ServiceResult<i32> {
        let name = Self::validate_name(name)?;

        let player = player::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        let result = player.insert(db).await?;
        tracing::info!(player_id = result.id, name = %result.name, "Player registered");

        Ok(result.id)
    }

    /// Validate and normalize a display name
    fn validate_name(name: &str) -> ServiceResult<&str> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(ServiceError::Validation(
                "Player name cannot be empty".to_string(),
            ));
        }

        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(ServiceError::Validation(format!(
                "Player name must be at most {MAX_NAME_LENGTH} characters"
            )));
        }

        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_trims() {
        assert!(matches!(PlayerService::validate_name("  Alice "), Ok("Alice")));
    }

    #[test]
    fn test_validate_name_rejects_blank() {
        assert!(matches!(
            PlayerService::validate_name("   "),
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            PlayerService::validate_name(""),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_name_length_limit() {
        let at_limit = "a".repeat(MAX_NAME_LENGTH);
        assert!(PlayerService::validate_name(&at_limit).is_ok());

        let too_long = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(matches!(
            PlayerService::validate_name(&too_long),
            Err(ServiceError::Validation(_))
        ));
    }
}
