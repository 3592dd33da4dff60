use crate::core::batch::{Batch, Block};
use crate::core::errors::Result;
use chrono::{DateTime, Utc};
use ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
use log::info;
use serde::Deserialize;

/*-------------------------------------------------------------------------------------------------
  Amazon AWS
-------------------------------------------------------------------------------------------------*/

pub const AWS_NAME: &str = "Amazon AWS";
pub const AWS_URL: &str = "http://www.amazon.com/aws/";

/// Only prefixes used by this service are recorded.
pub const AWS_SERVICE: &str = "EC2";

/// Build the AWS [Batch] from the contents of an `ip-ranges.json` file.
pub fn batch(json: &str) -> Result<Batch> {
    let ip_ranges = parse(json)?;
    info!(
        "AWS IP Ranges: sync token {}, created {}",
        ip_ranges.sync_token, ip_ranges.create_date
    );

    let mut batch = Batch::new(AWS_NAME, AWS_URL);
    batch.extend(
        ip_ranges
            .prefixes
            .iter()
            .filter(|prefix| prefix.service == AWS_SERVICE)
            .map(|prefix| IpNetwork::V4(prefix.ip_prefix))
            .chain(
                ip_ranges
                    .ipv6_prefixes
                    .iter()
                    .filter(|prefix| prefix.service == AWS_SERVICE)
                    .map(|prefix| IpNetwork::V6(prefix.ipv6_prefix)),
            )
            .map(Block::Network),
    );

    Ok(batch)
}

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

pub fn parse(json: &str) -> Result<JsonIpRanges<'_>> {
    Ok(serde_json::from_str(json)?)
}

/*--------------------------------------------------------------------------------------
  JSON IP Ranges
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct JsonIpRanges<'j> {
    #[serde(rename = "syncToken")]
    pub sync_token: &'j str,

    #[serde(rename = "createDate", deserialize_with = "deserialize_create_date")]
    pub create_date: DateTime<Utc>,

    pub prefixes: Vec<JsonIpPrefix<'j>>,

    #[serde(default)]
    pub ipv6_prefixes: Vec<JsonIpv6Prefix<'j>>,
}

/*--------------------------------------------------------------------------------------
  JSON IP (IPv4) Prefix
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct JsonIpPrefix<'j> {
    pub ip_prefix: Ipv4Network,
    pub region: &'j str,
    pub service: &'j str,
}

/*--------------------------------------------------------------------------------------
  JSON IPv6 Prefix
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct JsonIpv6Prefix<'j> {
    pub ipv6_prefix: Ipv6Network,
    pub region: &'j str,
    pub service: &'j str,
}

/*--------------------------------------------------------------------------------------
  Create Date Format
--------------------------------------------------------------------------------------*/

const CREATE_DATE_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

fn deserialize_create_date<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let text = <&str>::deserialize(deserializer)?;
    chrono::NaiveDateTime::parse_from_str(text, CREATE_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
