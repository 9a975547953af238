use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    /// Returns the cached config, loading it on first use. A missing file yields the default
    /// config, which is not cached so a later `set_config` still writes the file.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;

        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }

    pub fn update_config(&self, update: impl FnOnce(&mut TConfig)) -> Result<TConfig, String> {
        let mut config = self.get_config()?;
        update(&mut config);
        self.set_config(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryContentProvider {
        content: Mutex<Option<String>>,
    }

    impl ConfigContentProvider for &MemoryContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.lock().unwrap().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.lock().unwrap() = Some(content.to_string());
            Ok(())
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        grid_size: u32,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self { grid_size: 25 }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.grid_size < 5 {
                return Err("grid_size must be at least 5".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_missing_content_returns_default() {
        let provider = MemoryContentProvider::default();
        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_set_config_writes_content_and_caches() {
        let provider = MemoryContentProvider::default();
        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());

        manager.set_config(&TestConfig { grid_size: 30 }).unwrap();

        assert!(provider.content.lock().unwrap().as_deref().unwrap().contains("grid_size: 30"));
        assert_eq!(manager.get_config().unwrap().grid_size, 30);
    }

    #[test]
    fn test_invalid_config_is_rejected_on_set() {
        let provider = MemoryContentProvider::default();
        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());

        let result = manager.set_config(&TestConfig { grid_size: 2 });
        assert!(result.is_err());
        assert!(provider.content.lock().unwrap().is_none());
    }

    #[test]
    fn test_invalid_config_is_rejected_on_load() {
        let provider = MemoryContentProvider::default();
        *provider.content.lock().unwrap() = Some("grid_size: 1\n".to_string());
        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());

        let err = manager.get_config().unwrap_err();
        assert!(err.contains("grid_size must be at least 5"));
    }

    #[test]
    fn test_update_config_applies_change() {
        let provider = MemoryContentProvider::default();
        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());

        let updated = manager.update_config(|c| c.grid_size = 40).unwrap();
        assert_eq!(updated.grid_size, 40);
        assert_eq!(manager.get_config().unwrap().grid_size, 40);
    }
}
