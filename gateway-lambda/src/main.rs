//! AWS Lambda function draining a Kinesis stream into a Cassandra table.
//!
//! Configuration comes from the environment: `CASSANDRA_HOST`,
//! `CASSANDRA_PORT` and optionally `LOG_LEVEL`.

mod event;

use aws_lambda_events::event::kinesis::KinesisEvent;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

use gateway_ingestor::{wiring, Config, ItemIngestor, ItemStore};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = configure()?;

    // Cold start only, warm invocations reuse the session.
    let ingestor = wiring::connect(&config).await?;
    let ingestor = &ingestor;
    tracing::info!("ready for kinesis events");

    run(service_fn(move |event: LambdaEvent<KinesisEvent>| async move {
        let LambdaEvent { payload, context } = event;
        handle(ingestor, &context.request_id, payload).await
    }))
    .await
}

/// Read the environment and install logging at the configured level.
/// A bad environment is still logged, at the default level.
fn configure() -> Result<Config, Error> {
    match Config::from_env() {
        Ok(config) => {
            tracing_subscriber::fmt()
                .with_max_level(config.log_level)
                .init();
            Ok(config)
        }
        Err(err) => {
            tracing_subscriber::fmt().init();
            tracing::error!("invalid configuration: {err}");
            Err(err.into())
        }
    }
}

/// Handle one invocation. Any error fails the whole invocation.
async fn handle<S: ItemStore>(
    ingestor: &ItemIngestor<S>,
    request_id: &str,
    event: KinesisEvent,
) -> Result<(), Error> {
    let batch = event::raw_records(event);
    tracing::info!(request_id, "received {} kinesis records", batch.len());

    ingestor.ingest(&batch).await?;
    Ok(())
}
