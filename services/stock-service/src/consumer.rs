//! Kafka consumer applying stock messages from the configured topic. Offsets
//! are committed manually so a failed message is never acknowledged as
//! processed.

use rdkafka::consumer::{CommitMode, Consumer, StreamConsumer};
use rdkafka::Message;
use shared::config::BrokerSettings;
use shared::dto::{NewStock, StockMessage};
use shared::error::{AppError, Result};
use tracing::{error, info};

use crate::service::StockService;

/// Build the consumer and subscribe to the configured topic. A failure here
/// is fatal for the process.
pub fn subscribe(settings: &BrokerSettings) -> Result<StreamConsumer> {
    let consumer: StreamConsumer = shared::kafka::client_config(settings)
        .set("group.id", &settings.consumer_group)
        .set("enable.auto.commit", "false")
        .create()
        .map_err(|e| AppError::Broker(e.to_string()))?;
    consumer
        .subscribe(&[settings.stock_topic.as_str()])
        .map_err(|e| AppError::Broker(e.to_string()))?;
    Ok(consumer)
}

/// Apply one queue payload through the service: create when the message has
/// no id, update when it carries one. Exactly one store mutation per valid
/// payload, zero for a malformed one.
pub async fn handle_payload(service: &StockService, payload: &[u8]) -> Result<()> {
    let msg: StockMessage = serde_json::from_slice(payload)
        .map_err(|e| AppError::Broker(format!("malformed stock message: {e}")))?;
    let new = NewStock {
        symbol: msg.symbol,
        quantity: msg.quantity,
        price: msg.price,
    };
    match msg.id {
        Some(id) => {
            let stock = service.update(&id, new).await?;
            info!(id = %stock.id, symbol = %stock.symbol, "stock updated from queue");
        }
        None => {
            let stock = service.create(new).await?;
            info!(id = %stock.id, symbol = %stock.symbol, "stock created from queue");
        }
    }
    Ok(())
}

/// Consume messages one at a time. The offset is committed only after the
/// service call succeeds; failures are logged and the loop moves on (no retry
/// and no dead-letter queue).
pub async fn run(consumer: StreamConsumer, service: StockService) {
    info!("kafka consumer running");
    loop {
        match consumer.recv().await {
            Err(e) => error!(%e, "kafka error"),
            Ok(m) => {
                let payload = m.payload().unwrap_or_default();
                match handle_payload(&service, payload).await {
                    Ok(()) => {
                        if let Err(e) = consumer.commit_message(&m, CommitMode::Async) {
                            error!(%e, "failed to commit offset");
                        }
                    }
                    Err(e) => error!(%e, "failed to process stock message"),
                }
            }
        }
    }
}
