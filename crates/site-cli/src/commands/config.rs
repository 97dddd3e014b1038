use std::path::Path;

use anyhow::Result;
use site_effects::SiteConfig;

pub fn execute(config: &Path) -> Result<()> {
    let config = SiteConfig::load(config)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
