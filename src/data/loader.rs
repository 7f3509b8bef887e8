use bevy::asset::{io::Reader, ron, AssetLoader, LoadContext};
use bevy::prelude::*;
use std::future::Future;
use thiserror::Error;

use super::schema::{ItemList, Tuning};

#[derive(Default)]
pub struct RonItemLoader;

#[derive(Debug, Error)]
pub enum RonItemLoaderError {
    #[error("Could not load asset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Could not interpret bytes as UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl AssetLoader for RonItemLoader {
    type Asset = ItemList;
    type Settings = ();
    type Error = RonItemLoaderError;

    fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext,
    ) -> impl Future<Output = Result<Self::Asset, Self::Error>> + Send {
        async move {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;

            let s = std::str::from_utf8(&bytes)?;
            let list: ItemList = ron::de::from_str(s)?;

            Ok(list)
        }
    }

    fn extensions(&self) -> &[&str] {
        &["ron"]
    }
}

/// 手感常量用 TOML，结构同 RonItemLoader
#[derive(Default)]
pub struct TomlTuningLoader;

#[derive(Debug, Error)]
pub enum TomlTuningLoaderError {
    #[error("Could not load asset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Could not interpret bytes as UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl AssetLoader for TomlTuningLoader {
    type Asset = Tuning;
    type Settings = ();
    type Error = TomlTuningLoaderError;

    fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext,
    ) -> impl Future<Output = Result<Self::Asset, Self::Error>> + Send {
        async move {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;

            let s = std::str::from_utf8(&bytes)?;
            let tuning: Tuning = toml::from_str(s)?;

            Ok(tuning)
        }
    }

    fn extensions(&self) -> &[&str] {
        &["toml"]
    }
}
