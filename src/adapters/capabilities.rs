use crate::core::{Dictation, Geolocation, Result};
use crate::domain::model::Coordinates;
use crate::utils::error::CareBridgeError;
use async_trait::async_trait;

/// Stand-in for platforms without speech recognition.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDictation;

#[async_trait]
impl Dictation for NoDictation {
    fn is_supported(&self) -> bool {
        false
    }

    async fn recognize(&self) -> Result<Option<String>> {
        Err(CareBridgeError::UnsupportedCapability {
            capability: "Voice input".to_string(),
        })
    }
}

/// Position supplied up front (e.g. from command-line flags).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation {
    position: Option<Coordinates>,
}

impl FixedLocation {
    pub fn new(position: Option<Coordinates>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl Geolocation for FixedLocation {
    fn is_available(&self) -> bool {
        self.position.is_some()
    }

    async fn current_position(&self) -> Result<Coordinates> {
        self.position
            .ok_or_else(|| CareBridgeError::UnsupportedCapability {
                capability: "Geolocation".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_dictation_is_unsupported() {
        assert!(!NoDictation.is_supported());
        let result = tokio_test::block_on(NoDictation.recognize());
        assert!(matches!(
            result,
            Err(CareBridgeError::UnsupportedCapability { .. })
        ));
    }

    #[test]
    fn test_fixed_location() {
        assert!(!FixedLocation::default().is_available());

        let here = Coordinates {
            latitude: 1.5,
            longitude: -2.25,
        };
        let location = FixedLocation::new(Some(here));
        assert!(location.is_available());
        assert_eq!(tokio_test::block_on(location.current_position()).unwrap(), here);
    }
}
