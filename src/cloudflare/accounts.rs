use crate::{
    cloudflare::CloudflareClient,
    error::ClientResult,
    types::{Account, Envelope, Page},
};

impl CloudflareClient {
    /// Lists the accounts the token can see, one page only.
    pub async fn list_accounts(&self, page: Page) -> ClientResult<Envelope<Vec<Account>>> {
        self.get("/accounts", Some(&page.query())).await
    }
}
