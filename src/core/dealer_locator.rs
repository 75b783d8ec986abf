use crate::domain::model::DealerLocatorOutcome;
use crate::domain::ports::DealerLookup;
use crate::utils::error::Result;
use serde::Deserialize;

pub const DEALER_LOCATOR_PATH: &str = "/dealer-locator";
pub const NO_DEALER_MESSAGE: &str = "No Dealer Present For Selected Location";
pub const BLANK_LOCATION_MESSAGE: &str = "Please Select A Location";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DealerLocatorForm {
    #[serde(rename = "dealerLocation", default)]
    pub dealer_location: String,
}

/// Either nothing has been submitted yet, or a submission has resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum DealerLocatorState {
    Pending,
    Resolved(DealerLocatorOutcome),
}

impl DealerLocatorState {
    pub fn outcome(&self) -> Option<&DealerLocatorOutcome> {
        match self {
            DealerLocatorState::Pending => None,
            DealerLocatorState::Resolved(outcome) => Some(outcome),
        }
    }
}

pub struct DealerLocator<'a> {
    lookup: &'a dyn DealerLookup,
}

impl<'a> DealerLocator<'a> {
    pub fn new(lookup: &'a dyn DealerLookup) -> Self {
        Self { lookup }
    }

    /// Runs one form submission. Backend transport errors propagate; an
    /// unknown city resolves to a user-visible message instead.
    pub async fn submit(&self, form: &DealerLocatorForm) -> Result<DealerLocatorState> {
        let city = form.dealer_location.trim();

        if city.is_empty() {
            tracing::debug!("Dealer locator submitted without a location");
            return Ok(DealerLocatorState::Resolved(DealerLocatorOutcome {
                dealer_list: None,
                error: BLANK_LOCATION_MESSAGE.to_string(),
                path: DEALER_LOCATOR_PATH.to_string(),
            }));
        }

        let outcome = match self.lookup.get_dealer_for_city(city).await? {
            Some(dealers) if !dealers.is_empty() => {
                tracing::info!(city, count = dealers.len(), "Dealers found");
                DealerLocatorOutcome {
                    dealer_list: Some(dealers),
                    error: String::new(),
                    path: DEALER_LOCATOR_PATH.to_string(),
                }
            }
            _ => {
                tracing::info!(city, "No dealer registered for location");
                DealerLocatorOutcome {
                    dealer_list: None,
                    error: NO_DEALER_MESSAGE.to_string(),
                    path: DEALER_LOCATOR_PATH.to_string(),
                }
            }
        };

        Ok(DealerLocatorState::Resolved(outcome))
    }
}
