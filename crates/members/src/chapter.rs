//! Chapters and the names that key them.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use chapterflow_core::Entity;

/// Chapter name (unique key, doubles as the city the chapter covers).
///
/// Names are opaque at this layer; geographic resolution happens through the
/// owning [`Chapter`] record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterName(Cow<'static, str>);

impl ChapterName {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ChapterName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Country name, used to resolve regional scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryName(Cow<'static, str>);

impl CountryName {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CountryName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A local chapter.
///
/// Only the fields the engines need: the unique name and the country it
/// belongs to. Map coordinates, social handles and the like stay in the
/// application layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub name: ChapterName,
    pub country: CountryName,
}

impl Chapter {
    pub fn new(name: impl Into<Cow<'static, str>>, country: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: ChapterName::new(name),
            country: CountryName::new(country),
        }
    }
}

impl Entity for Chapter {
    type Id = ChapterName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
