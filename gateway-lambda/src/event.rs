use aws_lambda_events::event::kinesis::{KinesisEvent, KinesisEventRecord};
use gateway_ingestor::RawRecord;

/// Flatten a kinesis event into the batch the ingestor consumes, order preserved.
pub fn raw_records(event: KinesisEvent) -> Vec<RawRecord> {
    event.records.into_iter().map(raw_record).collect()
}

fn raw_record(record: KinesisEventRecord) -> RawRecord {
    let kinesis = record.kinesis;
    RawRecord {
        sequence_number: kinesis.sequence_number.unwrap_or_default(),
        partition_key: kinesis.partition_key.unwrap_or_default(),
        arrival: kinesis.approximate_arrival_timestamp.0,
        payload: kinesis.data.0,
    }
}
