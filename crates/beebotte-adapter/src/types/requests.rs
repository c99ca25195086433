/*
[INPUT]:  Beebotte API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::form_urlencoded;

use super::enums::{ReadSource, TimeRange};
use crate::http::{BeebotteError, Result};

/// Optional paging and filtering for reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ReadSource>,
    #[serde(rename = "time-range")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
}

impl ReadQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn source(mut self, source: ReadSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn time_range(mut self, time_range: TimeRange) -> Self {
        self.time_range = Some(time_range);
        self
    }

    /// Form-encoded query string, without the leading `?`
    pub fn to_query_string(&self) -> Result<String> {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(limit) = self.limit {
            if limit == 0 {
                return Err(BeebotteError::InvalidArgument(
                    "limit must be a positive integer".to_string(),
                ));
            }
            serializer.append_pair("limit", &limit.to_string());
        }
        if let Some(source) = self.source {
            serializer.append_pair("source", source.as_str());
        }
        if let Some(time_range) = self.time_range {
            serializer.append_pair("time-range", &time_range.to_string());
        }
        Ok(serializer.finish())
    }
}

/// Body of a single write or publish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteRequest {
    pub data: Value,
    /// Milliseconds since epoch; the server stamps the record when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
}

/// One record of a bulk write or publish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub resource: String,
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
}

impl Record {
    pub fn new(resource: impl Into<String>, data: impl Into<Value>) -> Self {
        Self {
            resource: resource.into(),
            data: data.into(),
            ts: None,
        }
    }

    pub fn with_timestamp(mut self, ts: i64) -> Self {
        self.ts = Some(ts);
        self
    }
}

/// Body of a bulk write or publish
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkRequest<'a> {
    pub records: &'a [Record],
}

/// Subscription metadata signed for a real-time client session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    /// Session id of the subscribing client
    pub sid: String,
    /// Channel name; `presence:` and `private:` prefixes select those channel types
    pub channel: String,
    pub resource: String,
    /// Validity in seconds
    pub ttl: u64,
    pub read: bool,
    pub write: bool,
}

impl SubscriptionRequest {
    /// Subscription to every resource of `channel`, no access flags, ttl 0
    pub fn new(sid: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            sid: sid.into(),
            channel: channel.into(),
            resource: "*".to_string(),
            ttl: 0,
            read: false,
            write: false,
        }
    }

    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    pub fn ttl(mut self, ttl: u64) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    pub fn write(mut self, write: bool) -> Self {
        self.write = write;
        self
    }
}
