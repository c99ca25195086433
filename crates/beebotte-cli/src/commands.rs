/*
[INPUT]:  Parsed CLI subcommands and a configured BeebotteClient
[OUTPUT]: JSON results of API calls or computed tokens
[POS]:    Command layer - maps subcommands to client operations
[UPDATE]: When adding subcommands or client operations
*/

use anyhow::{Context, Result};
use beebotte_adapter::{
    BeebotteClient, ReadQuery, ReadSource, SubscriptionRequest, TimeRange,
};
use clap::{Args, Subcommand};
use serde_json::Value;
use tracing::info;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Read records from one of your resources (signed)
    Read {
        channel: String,
        resource: String,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Read records from another user's public resource (unsigned)
    PublicRead {
        owner: String,
        channel: String,
        resource: String,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Persist a value; VALUE is parsed as JSON, or sent as a string
    Write {
        channel: String,
        resource: String,
        value: String,
        #[arg(long)]
        ts: Option<i64>,
    },
    /// Publish a transient value to live subscribers
    Publish {
        channel: String,
        resource: String,
        value: String,
        #[arg(long)]
        ts: Option<i64>,
    },
    /// Compute a subscription token for a real-time session (no network)
    Token {
        #[arg(long)]
        sid: String,
        #[arg(long)]
        channel: String,
        #[arg(long, default_value = "*")]
        resource: String,
        #[arg(long, default_value_t = 0)]
        ttl: u64,
        #[arg(long)]
        read: bool,
        #[arg(long)]
        write: bool,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct QueryArgs {
    #[arg(long)]
    pub limit: Option<u32>,
    /// live, hour-stats or day-stats
    #[arg(long)]
    pub source: Option<String>,
    /// e.g. 3hour, 1week, today, ytd
    #[arg(long = "time-range")]
    pub time_range: Option<String>,
}

impl QueryArgs {
    pub fn to_query(&self) -> Result<ReadQuery> {
        let mut query = ReadQuery::new();
        query.limit = self.limit;
        if let Some(source) = &self.source {
            query.source = Some(source.parse::<ReadSource>().context("--source")?);
        }
        if let Some(time_range) = &self.time_range {
            query.time_range = Some(time_range.parse::<TimeRange>().context("--time-range")?);
        }
        Ok(query)
    }
}

/// Parse a command-line value as JSON, falling back to a plain string
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Execute a command and return its JSON output
pub async fn run(client: &BeebotteClient, command: &Command) -> Result<Value> {
    match command {
        Command::Read { channel, resource, query } => {
            info!(%channel, %resource, "reading");
            let records = client
                .read(channel, resource, &query.to_query()?)
                .await
                .context("read")?;
            Ok(serde_json::to_value(records)?)
        }
        Command::PublicRead { owner, channel, resource, query } => {
            info!(%owner, %channel, %resource, "reading public resource");
            let records = client
                .public_read(owner, channel, resource, &query.to_query()?)
                .await
                .context("public read")?;
            Ok(serde_json::to_value(records)?)
        }
        Command::Write { channel, resource, value, ts } => {
            info!(%channel, %resource, "writing");
            client
                .write(channel, resource, &parse_value(value), *ts)
                .await
                .context("write")
        }
        Command::Publish { channel, resource, value, ts } => {
            info!(%channel, %resource, "publishing");
            client
                .publish(channel, resource, &parse_value(value), *ts)
                .await
                .context("publish")
        }
        Command::Token { sid, channel, resource, ttl, read, write } => {
            let request = SubscriptionRequest::new(sid.clone(), channel.clone())
                .resource(resource.clone())
                .ttl(*ttl)
                .read(*read)
                .write(*write);
            Ok(serde_json::to_value(client.subscription_auth(&request))?)
        }
    }
}
