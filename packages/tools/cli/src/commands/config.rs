//! Config 명령어

use crate::config::CliConfig;

pub fn set(config: &CliConfig, backend: Option<String>) -> anyhow::Result<()> {
    let mut config = config.clone();
    if let Some(backend) = backend {
        config.backend_url = Some(backend);
    }
    config.save()?;
    println!("Config saved");
    Ok(())
}

pub fn show(config: &CliConfig) -> anyhow::Result<()> {
    println!("backend_url: {}", config.backend_url());
    Ok(())
}
