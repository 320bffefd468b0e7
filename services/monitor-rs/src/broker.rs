use futures::StreamExt;
use lapin::{
    options::{BasicConsumeOptions, QueueDeclareOptions},
    types::FieldTable,
    Channel, Connection, ConnectionProperties,
};
use tracing::{error, info};

use crate::{
    config::Config,
    error::{MonitorError, Result},
    handler::on_message,
    retry::retry_with_fixed_delay,
};

/// Blocks until the broker accepts a connection. Never gives up with the
/// default policy.
pub async fn connect(config: &Config) -> Result<Connection> {
    let amqp_uri = config.amqp_uri();
    info!(" [*] Connecting to RabbitMQ at {}:{} ...", config.amqp_host, config.amqp_port);

    let uri = amqp_uri.as_str();
    let connection = retry_with_fixed_delay(config.retry_policy(), move || {
        Connection::connect(uri, ConnectionProperties::default())
    })
    .await?;

    info!("Connected to RabbitMQ");
    Ok(connection)
}

/// Declares the queue non-durable so it matches whatever the publisher declared.
pub async fn open_channel(connection: &Connection, queue: &str) -> Result<Channel> {
    let channel = connection.create_channel().await?;
    channel
        .queue_declare(
            queue,
            QueueDeclareOptions {
                durable: false,
                ..QueueDeclareOptions::default()
            },
            FieldTable::default(),
        )
        .await?;
    Ok(channel)
}

/// Auto-ack consume loop, one message at a time. Returns only when the
/// delivery stream ends.
pub async fn consume(channel: &Channel, queue: &str) -> Result<()> {
    let mut consumer = channel
        .basic_consume(
            queue,
            "sales-monitor",
            BasicConsumeOptions {
                no_ack: true,
                ..BasicConsumeOptions::default()
            },
            FieldTable::default(),
        )
        .await?;

    info!(" [*] AI Engine is waiting for sales data on '{}'. To exit press CTRL+C", queue);

    while let Some(delivery) = consumer.next().await {
        match delivery {
            Ok(delivery) => {
                on_message(&delivery.data);
            }
            Err(e) => error!("delivery error: {}", e),
        }
    }

    Err(MonitorError::StreamClosed(queue.to_string()))
}
