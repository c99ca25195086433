/*
[INPUT]:  A borrowed BeebotteClient and a channel/resource pair
[OUTPUT]: Reads, writes and publishes scoped to that resource
[POS]:    Facade layer - resource-bound view over the client
[UPDATE]: When client operations change signature
*/

use serde::Serialize;
use serde_json::Value;

use crate::http::{BeebotteClient, BeebotteError, Result};
use crate::types::{ReadQuery, ReadRecord};

/// Read options for a [`Resource`]
///
/// With an owner set the read is a public (unsigned) read of that owner's
/// resource; without one it is a signed read of the account's own resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    pub owner: Option<String>,
    pub query: ReadQuery,
}

impl ReadOptions {
    pub fn public(owner: impl Into<String>) -> Self {
        Self {
            owner: Some(owner.into()),
            query: ReadQuery::default(),
        }
    }

    pub fn with_query(mut self, query: ReadQuery) -> Self {
        self.query = query;
        self
    }
}

/// A channel resource bound to a client
#[derive(Debug, Clone, Copy)]
pub struct Resource<'a> {
    client: &'a BeebotteClient,
    channel: &'a str,
    resource: &'a str,
}

impl<'a> Resource<'a> {
    pub fn new(client: &'a BeebotteClient, channel: &'a str, resource: &'a str) -> Self {
        Self {
            client,
            channel,
            resource,
        }
    }

    pub fn channel(&self) -> &str {
        self.channel
    }

    pub fn name(&self) -> &str {
        self.resource
    }

    /// Persist a value to this resource
    pub async fn write<T: Serialize + ?Sized>(&self, data: &T, ts: Option<i64>) -> Result<Value> {
        self.client.write(self.channel, self.resource, data, ts).await
    }

    /// Publish a transient value to this resource
    pub async fn publish<T: Serialize + ?Sized>(&self, data: &T, ts: Option<i64>) -> Result<Value> {
        self.client.publish(self.channel, self.resource, data, ts).await
    }

    pub async fn read(&self, options: &ReadOptions) -> Result<Vec<ReadRecord>> {
        match &options.owner {
            Some(owner) => {
                self.client
                    .public_read(owner, self.channel, self.resource, &options.query)
                    .await
            }
            None => {
                self.client
                    .read(self.channel, self.resource, &options.query)
                    .await
            }
        }
    }

    /// Most recent record of this resource
    pub async fn recent_value(&self) -> Result<ReadRecord> {
        let records = self
            .client
            .read(self.channel, self.resource, &ReadQuery::default())
            .await?;
        records.into_iter().next().ok_or_else(|| BeebotteError::NoRecords {
            channel: self.channel.to_string(),
            resource: self.resource.to_string(),
        })
    }
}

impl BeebotteClient {
    /// Bind this client to one channel resource
    pub fn resource<'a>(&'a self, channel: &'a str, resource: &'a str) -> Resource<'a> {
        Resource::new(self, channel, resource)
    }
}
