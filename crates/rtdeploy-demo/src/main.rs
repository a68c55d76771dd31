use std::{env, sync::Arc};

use anyhow::Context;
use prometheus::{Encoder, TextEncoder};
use tracing::{info, warn};

use rtdeploy_core::{DeployConfig, DeployError, DeployService};
use rtdeploy_model::Runtime;
use rtdeploy_observe::{LoggerConfig, LoggerFormat, LoggerLevel, init_logger};
use rtdeploy_prometheus::PrometheusMetrics;
use rtdeploy_swarm::InMemorySwarm;

const NETWORK_ENV: &str = "RTDEPLOY_NETWORK";
const LOG_LEVEL_ENV: &str = "RTDEPLOY_LOG_LEVEL";
const LOG_FORMAT_ENV: &str = "RTDEPLOY_LOG_FORMAT";

fn logger_config() -> anyhow::Result<LoggerConfig> {
    let mut cfg = LoggerConfig::default();
    if let Ok(level) = env::var(LOG_LEVEL_ENV) {
        cfg.level = LoggerLevel::new(level).context(LOG_LEVEL_ENV)?;
    }
    if let Ok(format) = env::var(LOG_FORMAT_ENV) {
        cfg.format = format.parse::<LoggerFormat>().context(LOG_FORMAT_ENV)?;
    }
    Ok(cfg)
}

const DEMO_NETWORK: &str = "serving";

fn deploy_config() -> DeployConfig {
    DeployConfig::with_network(env::var(NETWORK_ENV).unwrap_or_else(|_| DEMO_NETWORK.into()))
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) logger
    init_logger(&logger_config()?)?;
    info!("logger initialized");

    // 2) backend + metrics
    let metrics = PrometheusMetrics::new()?;
    let swarm = Arc::new(InMemorySwarm::new());
    let service =
        DeployService::new(swarm, deploy_config()).with_metrics(Arc::new(metrics.clone()));
    info!(
        network = service.config().instance_network(),
        "deploy service ready"
    );

    // 3) deploy
    let mnist = Runtime::new("mnist", "hydrosphere/serving-runtime-tensorflow:1.7.0")
        .with_model("tensorflow", "mnist", "3")
        .with_ports(9090, 9091)
        .with_scale(2)
        .with_env("LOG_LEVEL", "debug");
    let mnist_id = service.deploy(&mnist).await?;

    let iris = Runtime::new("iris", "hydrosphere/serving-runtime-python:3.6")
        .with_model("python", "iris", "1")
        .with_ports(9090, 9091)
        .with_env("ENVOY_HTTP_PORT", "8080");
    service.deploy(&iris).await?;

    // 4) inspect
    match service.get_runtime("mnist").await? {
        Some(rt) => info!(runtime = %serde_json::to_string(&rt)?, "read back"),
        None => warn!("mnist not found after deploy"),
    }
    for rt in service.runtime_list().await? {
        info!(name = %rt.name, scale = ?rt.scale, state = ?rt.state, "runtime");
    }
    for inst in service.runtime_instances().await? {
        info!(
            runtime = %inst.runtime_id,
            host = %inst.host,
            port = ?inst.http_port,
            status = %inst.status,
            "instance"
        );
    }

    // 5) scale is not applied
    match service.scale("mnist", 3).await {
        Err(DeployError::Unsupported(op)) => info!(op, "scale is not supported"),
        other => warn!(?other, "unexpected scale result"),
    }

    // 6) cleanup
    service.delete_runtime(&mnist_id).await?;
    info!(left = service.runtime_list().await?.len(), "mnist deleted");

    let mut buf = Vec::new();
    TextEncoder::new().encode(&metrics.gather(), &mut buf)?;
    println!("{}", String::from_utf8(buf)?);
    Ok(())
}
