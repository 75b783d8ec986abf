use crate::domain::model::Dealer;
use crate::domain::ports::DealerLookup;
use crate::utils::error::Result;
use async_trait::async_trait;

/// In-memory dealer directory, filled from the `[[dealers.static]]` config table.
#[derive(Debug, Clone, Default)]
pub struct StaticDealerDirectory {
    dealers: Vec<Dealer>,
}

impl StaticDealerDirectory {
    pub fn new(dealers: Vec<Dealer>) -> Self {
        Self { dealers }
    }

    pub fn len(&self) -> usize {
        self.dealers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dealers.is_empty()
    }
}

#[async_trait]
impl DealerLookup for StaticDealerDirectory {
    async fn get_dealer_for_city(&self, city: &str) -> Result<Option<Vec<Dealer>>> {
        let wanted = city.trim().to_lowercase();
        let matches: Vec<Dealer> = self
            .dealers
            .iter()
            .filter(|d| d.city.to_lowercase() == wanted)
            .cloned()
            .collect();

        Ok((!matches.is_empty()).then_some(matches))
    }
}
