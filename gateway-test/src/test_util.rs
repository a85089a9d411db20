use std::path::Path;

use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde_json::{json, Value};

use gateway_ingestor::RawRecord;
use gateway_item::Item;

const DESCRIPTION_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SEQUENCE_PREFIX: &str = "49545115243490985018280067714973144582180062593244";

/// Kinesis style sequence number for the record at `position`
pub fn sequence_number(position: usize) -> String {
    format!("{SEQUENCE_PREFIX}{position:06}")
}

pub fn partition_key(position: usize) -> String {
    format!("partitionKey-{:02}", position % 4)
}

pub fn raw_record(position: usize, payload: impl Into<Vec<u8>>) -> RawRecord {
    RawRecord::new(
        sequence_number(position),
        partition_key(position),
        Utc::now(),
        payload,
    )
}

/// One record per item, positions follow slice order
pub fn records(items: &[Item]) -> Result<Vec<RawRecord>> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| Ok(raw_record(position, item.encode()?)))
        .collect()
}

/// Items with sequential ids, random descriptions, and `count = id + 25`
pub fn random_items<R: Rng>(rng: &mut R, count: usize, description_len: usize) -> Vec<Item> {
    (0..count)
        .map(|i| {
            let id = i32::try_from(i).unwrap_or(i32::MAX);
            let description: String = (0..description_len)
                .map(|_| DESCRIPTION_CHARSET[rng.gen_range(0..DESCRIPTION_CHARSET.len())] as char)
                .collect();
            Item::new(id, description, id.saturating_add(25))
        })
        .collect()
}

/// A kinesis event document as the lambda runtime would deliver it
pub fn kinesis_event(items: &[Item], arrival: DateTime<Utc>) -> Result<Value> {
    let records = items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            let sequence_number = sequence_number(position);
            Ok(json!({
                "kinesis": {
                    "kinesisSchemaVersion": "1.0",
                    "partitionKey": partition_key(position),
                    "sequenceNumber": sequence_number,
                    "data": STANDARD.encode(item.encode()?),
                    "approximateArrivalTimestamp": arrival.timestamp(),
                },
                "eventSource": "aws:kinesis",
                "eventVersion": "1.0",
                "eventID": format!("shardId-000000000000:{sequence_number}"),
                "eventName": "aws:kinesis:record",
                "invokeIdentityArn": "arn:aws:iam::EXAMPLE",
                "awsRegion": "us-east-1",
                "eventSourceARN": "arn:aws:kinesis:EXAMPLE",
            }))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(json!({ "Records": records }))
}

pub fn write_kinesis_event<P: AsRef<Path>>(path: P, event: &Value) -> Result<()> {
    std::fs::write(path, serde_json::to_vec_pretty(event)?)?;
    Ok(())
}
