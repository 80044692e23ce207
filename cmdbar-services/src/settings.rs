// SPDX-License-Identifier: LGPL-3.0-only
use anyhow::Result;
use cmdbar_core::config::{HidePolicy, PlacementConfig, PopupOffset};
use cmdbar_core::error::ConfigError;
use serde::Deserialize;
use smol::fs;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

const MENU_CONFIG_FILE: &str = "menu.toml";

/// Menu settings as read from `menu.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuConfig {
    /// Popup placement settings
    #[serde(default)]
    pub placement: PlacementSettings,
    /// Open/hide timing settings
    #[serde(default)]
    pub behavior: BehaviorSettings,
    /// Any other sections are captured here
    #[serde(flatten)]
    pub other: HashMap<String, toml::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlacementSettings {
    pub menu_popup_offset: Option<PopupOffset>,
    pub submenu_popup_offset: Option<PopupOffset>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BehaviorSettings {
    pub hide_policy: Option<String>,
    pub open_delay_ms: Option<u64>,
    pub hide_grace_ms: Option<u64>,
}

/// Registry for menu settings.
pub struct SettingsRegistry {
    config: MenuConfig,
}

impl SettingsRegistry {
    /// Create a new SettingsRegistry and load configuration from standard locations.
    pub async fn new() -> Result<Self> {
        let mut registry = Self::with_defaults();
        registry.load().await?;
        Ok(registry)
    }

    /// Create a registry holding only the built-in defaults, without touching the filesystem.
    pub fn with_defaults() -> Self {
        Self {
            config: MenuConfig::default(),
        }
    }

    /// Load configuration from standard locations in precedence order.
    ///
    /// Order (later overrides earlier):
    /// 1. System Data: /usr/share/cmdbar-0/menu.toml (and XDG_DATA_DIRS)
    /// 2. System Config: /etc/xdg/cmdbar-0/menu.toml (and XDG_CONFIG_DIRS)
    /// 3. User Config: ~/.config/cmdbar-0/menu.toml (XDG_CONFIG_HOME)
    pub async fn load(&mut self) -> Result<()> {
        let xdg_dirs = BaseDirectories::with_prefix("cmdbar-0")?;

        // 1. Load from system data directories
        for path in xdg_dirs.find_data_files(MENU_CONFIG_FILE).rev() {
            self.load_file(&path).await;
        }

        // 2. Load from system config directories
        for path in xdg_dirs.find_config_files(MENU_CONFIG_FILE).rev() {
            self.load_file(&path).await;
        }

        // 3. Load from user config directory
        let user_config_path = xdg_dirs.get_config_home().join(MENU_CONFIG_FILE);
        if user_config_path.exists() {
            self.load_file(&user_config_path).await;
        }

        Ok(())
    }

    async fn load_file(&mut self, path: &Path) {
        log::info!("Loading menu config from: {:?}", path);
        match fs::read_to_string(path).await {
            Ok(content) => match toml::from_str::<MenuConfig>(&content) {
                Ok(loaded_config) => {
                    self.merge(loaded_config);
                },
                Err(e) => {
                    log::error!("Failed to parse menu config {:?}: {}", path, e);
                },
            },
            Err(e) => {
                log::warn!("Failed to read menu config {:?}: {}", path, e);
            },
        }
    }

    /// Merge a loaded config into the current config.
    fn merge(&mut self, other: MenuConfig) {
        // Placement
        if let Some(offset) = other.placement.menu_popup_offset {
            self.config.placement.menu_popup_offset = Some(offset);
        }
        if let Some(offset) = other.placement.submenu_popup_offset {
            self.config.placement.submenu_popup_offset = Some(offset);
        }

        // Behavior
        if other.behavior.hide_policy.is_some() {
            self.config.behavior.hide_policy = other.behavior.hide_policy;
        }
        if let Some(delay) = other.behavior.open_delay_ms {
            self.config.behavior.open_delay_ms = Some(delay);
        }
        if let Some(grace) = other.behavior.hide_grace_ms {
            self.config.behavior.hide_grace_ms = Some(grace);
        }

        // Other
        self.config.other.extend(other.other);
    }

    /// Get the current configuration.
    pub fn get(&self) -> &MenuConfig {
        &self.config
    }

    /// Resolve the merged settings into a [PlacementConfig], using defaults for unset fields.
    pub fn placement_config(&self) -> Result<PlacementConfig, ConfigError> {
        let mut config = PlacementConfig::default();
        let placement = &self.config.placement;
        let behavior = &self.config.behavior;

        if let Some(offset) = placement.menu_popup_offset {
            config.menu_popup_offset = offset;
        }
        if let Some(offset) = placement.submenu_popup_offset {
            config.submenu_popup_offset = offset;
        }
        if let Some(policy) = &behavior.hide_policy {
            config.hide_policy = HidePolicy::from_str(policy)?;
        }
        if let Some(delay) = behavior.open_delay_ms {
            config.open_delay_ms = delay;
        }
        if let Some(grace) = behavior.hide_grace_ms {
            config.hide_grace_ms = grace;
        }

        Ok(config)
    }

    /// Load configuration from multiple custom paths asynchronously.
    pub async fn load_from_paths_async(&mut self, paths: Vec<PathBuf>) -> Vec<anyhow::Result<()>> {
        let mut results = Vec::new();

        for path in paths {
            let result = async {
                let content = fs::read_to_string(&path)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to read menu config {:?}: {}", path, e))?;

                let loaded_config: MenuConfig = toml::from_str(&content)
                    .map_err(|e| anyhow::anyhow!("Failed to parse menu config {:?}: {}", path, e))?;

                self.merge(loaded_config);
                Ok(())
            }
            .await;

            results.push(result);
        }

        results
    }

    /// Reload configuration asynchronously (re-runs the full load process).
    pub async fn reload_async(&mut self) -> anyhow::Result<()> {
        *self = Self::with_defaults();
        self.load().await
    }
}
