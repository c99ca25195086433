/*
[INPUT]:  Channel/resource names, JSON-serializable values and bulk records
[OUTPUT]: Server acknowledgments for persistent writes and transient publishes
[POS]:    HTTP layer - data endpoints (signed POST with Content-MD5)
[UPDATE]: When adding new data endpoints or changing body format
*/

use serde::Serialize;
use serde_json::Value;

use crate::http::{BeebotteClient, BeebotteError, Result, resource_path};
use crate::types::{BulkRequest, Record, WriteRequest};

impl BeebotteClient {
    /// Write (persist) a value to a resource
    ///
    /// POST /v1/data/write/{channel}/{resource}
    /// Body: {"data": <value>, "ts"?: <ms since epoch>}
    pub async fn write<T: Serialize + ?Sized>(
        &self,
        channel: &str,
        resource: &str,
        data: &T,
        ts: Option<i64>,
    ) -> Result<Value> {
        let uri = resource_path(&self.endpoints().write, &[channel, resource])?;
        self.post_value(&uri, data, ts).await
    }

    /// Write many records to resources of one channel in a single call
    ///
    /// POST /v1/data/write/{channel}
    /// Body: {"records": [{"resource", "data", "ts"?}]}
    pub async fn write_bulk(&self, channel: &str, records: &[Record]) -> Result<Value> {
        let uri = resource_path(&self.endpoints().bulk_write, &[channel])?;
        self.post_records(&uri, records).await
    }

    /// Publish a transient value to a resource
    ///
    /// POST /v1/data/publish/{channel}/{resource}
    /// The value is delivered to connected subscribers only and never persisted.
    pub async fn publish<T: Serialize + ?Sized>(
        &self,
        channel: &str,
        resource: &str,
        data: &T,
        ts: Option<i64>,
    ) -> Result<Value> {
        let uri = resource_path(&self.endpoints().publish, &[channel, resource])?;
        self.post_value(&uri, data, ts).await
    }

    /// Publish many transient records in a single call
    ///
    /// POST /v1/data/publish/{channel}
    pub async fn publish_bulk(&self, channel: &str, records: &[Record]) -> Result<Value> {
        let uri = resource_path(&self.endpoints().bulk_publish, &[channel])?;
        self.post_records(&uri, records).await
    }

    async fn post_value<T: Serialize + ?Sized>(
        &self,
        uri: &str,
        data: &T,
        ts: Option<i64>,
    ) -> Result<Value> {
        let body = WriteRequest {
            data: serde_json::to_value(data)?,
            ts,
        };
        let builder = self.post_request(uri, serde_json::to_vec(&body)?)?;
        self.send_json(builder).await
    }

    async fn post_records(&self, uri: &str, records: &[Record]) -> Result<Value> {
        if records.is_empty() {
            return Err(BeebotteError::InvalidArgument(
                "bulk request needs at least one record".to_string(),
            ));
        }
        for record in records {
            if record.resource.is_empty() {
                return Err(BeebotteError::InvalidArgument(
                    "record resource must not be empty".to_string(),
                ));
            }
        }
        let builder = self.post_request(uri, serde_json::to_vec(&BulkRequest { records })?)?;
        self.send_json(builder).await
    }
}
