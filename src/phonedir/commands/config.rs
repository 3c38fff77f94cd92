use crate::commands::{CmdMessage, CmdResult};
use crate::config::{ConfigKey, DirectoryConfig};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(ConfigKey),
    Set(ConfigKey, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = DirectoryConfig::load(config_dir)?;

    match action {
        ConfigAction::ShowAll => {
            let entries = ConfigKey::ALL
                .into_iter()
                .map(|key| (key, config.get(key)))
                .collect();
            Ok(CmdResult::default().with_config_entries(entries))
        }
        ConfigAction::ShowKey(key) => {
            let value = config.get(key);
            Ok(CmdResult::default().with_config_entries(vec![(key, value)]))
        }
        ConfigAction::Set(key, value) => {
            config.set(key, &value)?;
            config.save(config_dir)?;
            let message = format!("{} set to {}", key, config.get(key));
            Ok(CmdResult::default().with_message(CmdMessage::success(message)))
        }
    }
}
