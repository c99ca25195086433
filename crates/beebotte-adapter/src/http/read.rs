/*
[INPUT]:  Channel and resource names plus read query parameters
[OUTPUT]: Records of the account's own resources
[POS]:    HTTP layer - authenticated read endpoint (signed GET)
[UPDATE]: When changing query parameters or the read response format
*/

use crate::http::{BeebotteClient, Result, resource_path};
use crate::types::{ReadQuery, ReadRecord};

impl BeebotteClient {
    /// Read records from a resource
    ///
    /// GET /v1/data/read/{channel}/{resource}?limit=&source=&time-range=
    /// Signed over the path including its query string.
    pub async fn read(
        &self,
        channel: &str,
        resource: &str,
        query: &ReadQuery,
    ) -> Result<Vec<ReadRecord>> {
        let path = resource_path(&self.endpoints().read, &[channel, resource])?;
        let uri = format!("{path}?{}", query.to_query_string()?);
        let builder = self.get_request(&uri, true)?;
        self.send_json(builder).await
    }
}
