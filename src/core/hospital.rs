use crate::core::{Geolocation, View};
use crate::domain::model::Coordinates;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=hospital+near+";

pub fn nearby_search_url(position: Coordinates) -> String {
    format!(
        "{}{},{}",
        MAPS_SEARCH_URL, position.latitude, position.longitude
    )
}

/// Opens a maps search for hospitals around the current position.
pub struct HospitalLocator<G: Geolocation> {
    geolocation: G,
}

impl<G: Geolocation> HospitalLocator<G> {
    pub fn new(geolocation: G) -> Self {
        Self { geolocation }
    }

    pub async fn locate<V: View + ?Sized>(&self, view: &mut V) -> Option<String> {
        if !self.geolocation.is_available() {
            tracing::debug!("Geolocation unavailable, keeping service map link");
            return None;
        }

        match self.geolocation.current_position().await {
            Ok(position) => {
                let url = nearby_search_url(position);
                view.open_url(&url);
                Some(url)
            }
            Err(e) => {
                tracing::warn!("Could not determine position: {}", e);
                None
            }
        }
    }
}
