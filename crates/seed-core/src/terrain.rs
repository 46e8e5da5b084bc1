//! Terrain Resources
//!
//! Each location's terrain is a binary blob named after its number:
//! `<package>.Resources.Terrain<number + 1>.att`.

use serde::{Deserialize, Serialize};
#[cfg(test)]
use std::collections::HashMap;
use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use world_model::LocationNumber;

use crate::error::SeedError;

/// What to do when a location has no terrain resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingTerrainPolicy {
    /// Log a warning and leave the terrain empty
    #[default]
    Warn,
    /// Abort the seed run
    Fail,
}

/// Name of a location's terrain resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TerrainResourceName {
    package: String,
    index: u16,
}

impl TerrainResourceName {
    pub fn new(package: impl Into<String>, location: LocationNumber) -> Self {
        Self {
            package: package.into(),
            index: u16::from(location) + 1,
        }
    }

    /// File name without the package prefix, e.g. `Terrain1.att`.
    pub fn file_name(&self) -> String {
        format!("Terrain{}.att", self.index)
    }
}

impl fmt::Display for TerrainResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.Resources.{}", self.package, self.file_name())
    }
}

/// Source of terrain blobs.
pub trait TerrainSource {
    /// Fetches a terrain blob. `Ok(None)` means the resource does not exist.
    fn fetch(&self, name: &TerrainResourceName) -> Result<Option<Vec<u8>>, SeedError>;
}

/// Reads `Terrain<n>.att` files from a directory.
#[derive(Debug, Clone)]
pub struct DirectoryTerrainSource {
    root: PathBuf,
}

impl DirectoryTerrainSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TerrainSource for DirectoryTerrainSource {
    fn fetch(&self, name: &TerrainResourceName) -> Result<Option<Vec<u8>>, SeedError> {
        let path = self.root.join(name.file_name());
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SeedError::TerrainRead {
                resource: name.to_string(),
                source,
            }),
        }
    }
}

/// In-memory terrain blobs keyed by full resource name.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryTerrainSource {
    blobs: HashMap<String, Vec<u8>>,
}

#[cfg(test)]
impl MemoryTerrainSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &TerrainResourceName, bytes: Vec<u8>) {
        self.blobs.insert(name.to_string(), bytes);
    }
}

#[cfg(test)]
impl TerrainSource for MemoryTerrainSource {
    fn fetch(&self, name: &TerrainResourceName) -> Result<Option<Vec<u8>>, SeedError> {
        Ok(self.blobs.get(&name.to_string()).cloned())
    }
}

/// A source with no terrain at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTerrain;

impl TerrainSource for NoTerrain {
    fn fetch(&self, _name: &TerrainResourceName) -> Result<Option<Vec<u8>>, SeedError> {
        Ok(None)
    }
}
