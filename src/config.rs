use std::convert::TryFrom;
use std::fs;
use std::io;
use std::net::Ipv4Addr;

use log::LevelFilter;

use crate::system::Result;

const CONFIG_FILE: &str = "stubdns.toml";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    pub bind_address: String,
    pub answer_address: Ipv4Addr,
    pub answer_ttl: u32,
    pub log_level: LevelFilter,
}

impl Config {
    fn new() -> Self {
        Config {
            bind_address: "127.0.0.1:2053".to_string(),
            answer_address: Ipv4Addr::new(8, 8, 8, 8),
            answer_ttl: 60,
            log_level: LevelFilter::Info,
        }
    }

    fn apply_toml(&mut self, text: &str) -> Result<()> {
        let value: toml::Value = text.parse()?;
        if let Some(address) = value.get("bind_address") {
            self.bind_address = address
                .as_str()
                .ok_or("bind_address must be a string")?
                .to_string();
        }
        if let Some(address) = value.get("answer_address") {
            self.answer_address = address
                .as_str()
                .ok_or("answer_address must be a string")?
                .parse()?;
        }
        if let Some(ttl) = value.get("answer_ttl") {
            let secs = ttl.as_integer().ok_or("answer_ttl must be an integer")?;
            self.answer_ttl = u32::try_from(secs)?;
        }
        if let Some(level) = value.get("log_level") {
            self.log_level = level
                .as_str()
                .ok_or("log_level must be a string")?
                .parse()?;
        }
        Ok(())
    }

    // a missing file means defaults, any other read error is fatal
    fn apply_file(&mut self, read: io::Result<String>) -> Result<()> {
        match read {
            Ok(text) => self.apply_toml(&text),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

//defaults, then stubdns.toml when present, then the command line address
pub fn load(mut args: impl Iterator<Item = String>) -> Result<Config> {
    let mut config = Config::new();
    config.apply_file(fs::read_to_string(CONFIG_FILE))?;
    if let Some(address) = args.nth(1) {
        config.bind_address = address;
    }
    Ok(config)
}
