use anyhow::Context;
use clap::Parser;
use ua_compose::config::Command;
use ua_compose::utils::logger;
use ua_compose::{CliConfig, ProductList, UaError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let result = match config.command.clone().unwrap_or(Command::Compose) {
        Command::Compose => compose(&config),
        Command::Parse { text } => parse(&text),
    };

    if let Err(e) = result {
        match e.downcast_ref::<UaError>() {
            Some(ua_error) => {
                tracing::error!("❌ {}", ua_error);
                tracing::error!("💡 Suggestion: {}", ua_error.recovery_suggestion());
                eprintln!("❌ {}", ua_error.user_friendly_message());
                std::process::exit(1);
            }
            None => return Err(e),
        }
    }

    Ok(())
}

fn compose(config: &CliConfig) -> anyhow::Result<()> {
    // 驗證並合併配置
    let settings = config.resolve()?;
    tracing::debug!(
        "Base User-Agent: '{}', override variable: {} (enabled: {})",
        settings.base,
        settings.override_var,
        settings.override_enabled
    );

    let user_agent = settings.into_user_agent();
    let products = user_agent.products()?;
    // 確認可以作為 HTTP 標頭使用
    products.to_header_value()?;

    print_products(&products, config.json)
}

fn parse(text: &str) -> anyhow::Result<()> {
    let products = text.parse::<ProductList>().map_err(UaError::from)?;
    tracing::info!("✅ Parsed {} product(s)", products.len());
    print_products(&products, true)
}

fn print_products(products: &ProductList, json: bool) -> anyhow::Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(products).context("failed to render products as JSON")?;
        println!("{}", rendered);
    } else {
        println!("{}", products);
    }
    Ok(())
}
