use crate::{
    Endpoint, Result,
    executor::Executor,
    models::{HeadlineCollection, Office, OfficeCollection},
};

#[derive(Debug, Clone, Copy)]
pub struct OfficesService<'a> {
    executor: &'a Executor,
}

impl<'a> OfficesService<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    pub async fn all(&self) -> Result<OfficeCollection> {
        self.executor.execute(&Endpoint::Offices, None).await
    }

    /// Office by its three-letter identifier, e.g. "TOP".
    pub async fn office(&self, office_id: &str) -> Result<Office> {
        self.executor
            .execute(&Endpoint::Office(office_id.to_string()), None)
            .await
    }

    pub async fn headlines(&self, office_id: &str) -> Result<HeadlineCollection> {
        self.executor
            .execute(&Endpoint::OfficeHeadlines(office_id.to_string()), None)
            .await
    }
}
