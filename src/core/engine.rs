use crate::domain::model::PopulateSummary;
use crate::domain::ports::Populator;
use crate::utils::error::Result;

pub struct PopulateEngine<P: Populator> {
    populator: P,
}

impl<P: Populator> PopulateEngine<P> {
    pub fn new(populator: P) -> Self {
        Self { populator }
    }

    pub async fn run(&self) -> Result<PopulateSummary> {
        println!("Fetching data files...");
        let data = self.populator.fetch().await;
        println!(
            "Data loaded: promotions={} reviews={} catalog={} gas_prices={}",
            data.promotions.is_some(),
            data.reviews.is_some(),
            data.catalog.is_some(),
            data.gas_prices.is_some()
        );

        println!("Populating pages...");
        let summary = self.populator.populate(&data).await?;
        println!(
            "Wrote {} pages with {} fragments",
            summary.pages_written, summary.fragments_appended
        );

        Ok(summary)
    }
}
