use crate::{
    cloudflare::CloudflareClient,
    error::ClientResult,
    types::{Envelope, Member, Page, UserGroup},
};

impl CloudflareClient {
    /// Lists members of `account_id`.
    pub async fn list_members(
        &self,
        account_id: &str,
        page: Page,
    ) -> ClientResult<Envelope<Vec<Member>>> {
        let path = format!("/accounts/{}/members", account_id);
        self.get(&path, Some(&page.query())).await
    }

    /// Lists IAM user groups of `account_id`.
    pub async fn list_user_groups(
        &self,
        account_id: &str,
        page: Page,
    ) -> ClientResult<Envelope<Vec<UserGroup>>> {
        let path = format!("/accounts/{}/iam/user_groups", account_id);
        self.get(&path, Some(&page.query())).await
    }
}
