//! Mock directory implementation
//!
//! One ID is unregistered, every other ID resolves to the same phone number.

use async_trait::async_trait;
use tracing::debug;

use idv_core::domain::value_objects::{MobilePhone, NationalId, PhoneResolution};
use idv_core::errors::CapabilityError;
use idv_core::services::verification::DirectoryLookup;
use idv_shared::config::MockBackendConfig;

use crate::InfrastructureError;

/// Deterministic lookup rule: `unregistered_id` has no phone, anything else
/// maps to `phone`
pub fn resolve_phone_for_id(
    id: &NationalId,
    unregistered_id: &NationalId,
    phone: &MobilePhone,
) -> PhoneResolution {
    if id == unregistered_id {
        PhoneResolution::NotFound
    } else {
        PhoneResolution::Found(phone.clone())
    }
}

/// Mock directory service for development and testing
#[derive(Debug, Clone)]
pub struct MockDirectory {
    unregistered_id: NationalId,
    phone: MobilePhone,
    simulate_failure: bool,
}

impl MockDirectory {
    pub fn from_config(config: &MockBackendConfig) -> Result<Self, InfrastructureError> {
        let phone = MobilePhone::parse(&config.directory_phone).map_err(|_| {
            InfrastructureError::Config(format!(
                "MOCK_DIRECTORY_PHONE is not a valid mobile number: {}",
                config.directory_phone
            ))
        })?;

        let unregistered_id = NationalId::parse(&config.unregistered_id).map_err(|_| {
            InfrastructureError::Config(format!(
                "MOCK_UNREGISTERED_ID is not a valid national ID: {}",
                config.unregistered_id
            ))
        })?;

        Ok(Self {
            unregistered_id,
            phone,
            simulate_failure: false,
        })
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

#[async_trait]
impl DirectoryLookup for MockDirectory {
    async fn resolve_phone(&self, id: &NationalId) -> Result<PhoneResolution, CapabilityError> {
        if self.simulate_failure {
            return Err(CapabilityError::new("directory", "simulated directory outage"));
        }

        let resolution = resolve_phone_for_id(id, &self.unregistered_id, &self.phone);
        debug!(
            target: "directory",
            provider = "mock",
            found = matches!(resolution, PhoneResolution::Found(_)),
            "Directory lookup"
        );
        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> MockDirectory {
        MockDirectory::from_config(&MockBackendConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_unregistered_id_not_found() {
        let directory = directory();
        let id = NationalId::parse("12345678").unwrap();

        let result = directory.resolve_phone(&id).await.unwrap();
        assert_eq!(result, PhoneResolution::NotFound);
    }

    #[tokio::test]
    async fn test_other_ids_resolve_to_directory_phone() {
        let directory = directory();

        for raw in ["87654321", "11111111", "12345679"] {
            let id = NationalId::parse(raw).unwrap();
            let phone = directory.resolve_phone(&id).await.unwrap().into_phone().unwrap();
            assert_eq!(phone.formatted(), "098 765 432");
        }
    }

    #[tokio::test]
    async fn test_simulate_failure() {
        let mut directory = directory();
        directory.set_simulate_failure(true);

        let id = NationalId::parse("87654321").unwrap();
        assert!(directory.resolve_phone(&id).await.is_err());
    }

    #[test]
    fn test_from_config_rejects_invalid_phone() {
        let config = MockBackendConfig {
            directory_phone: "123".to_string(),
            ..MockBackendConfig::default()
        };
        assert!(matches!(
            MockDirectory::from_config(&config),
            Err(InfrastructureError::Config(_))
        ));
    }

    #[test]
    fn test_from_config_rejects_invalid_unregistered_id() {
        let config = MockBackendConfig {
            unregistered_id: "1234567".to_string(),
            ..MockBackendConfig::default()
        };
        assert!(matches!(
            MockDirectory::from_config(&config),
            Err(InfrastructureError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_unregistered_id_with_separators_is_canonicalized() {
        let config = MockBackendConfig {
            unregistered_id: "1234-5678".to_string(),
            ..MockBackendConfig::default()
        };
        let directory = MockDirectory::from_config(&config).unwrap();
        let id = NationalId::parse("12345678").unwrap();

        let result = directory.resolve_phone(&id).await.unwrap();
        assert_eq!(result, PhoneResolution::NotFound);
    }

    #[test]
    fn test_from_config_custom_rule() {
        let config = MockBackendConfig {
            unregistered_id: "99999999".to_string(),
            directory_phone: "091234567".to_string(),
            ..MockBackendConfig::default()
        };
        let directory = MockDirectory::from_config(&config).unwrap();
        let phone = MobilePhone::parse("091234567").unwrap();

        let id = NationalId::parse("12345678").unwrap();
        assert_eq!(
            resolve_phone_for_id(&id, &directory.unregistered_id, &directory.phone),
            PhoneResolution::Found(phone)
        );
    }
}
