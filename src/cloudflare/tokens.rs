use crate::{
    cloudflare::CloudflareClient,
    error::ClientResult,
    types::{Envelope, TokenStatus},
};

impl CloudflareClient {
    /// Verifies the client's token.
    ///
    /// The call is pinned to the configured verification account id, not to
    /// the account selected in the session.
    pub async fn verify_token(&self) -> ClientResult<Envelope<TokenStatus>> {
        let path = format!("/accounts/{}/tokens/verify", self.verify_account_id);
        self.get(&path, None).await
    }
}
