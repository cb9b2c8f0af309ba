//! `package.json` for generated projects.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ExportResult;
use crate::export::theme::ThemeDescriptor;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

pub const NEXT_VERSION: &str = "14.1.3";
pub const REACT_VERSION: &str = "^18.2.0";

/// Lower-case `name` and collapse each whitespace run into one `-`.
///
/// Runs at either end become a leading or trailing `-`; nothing else is
/// removed or substituted.
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

pub fn package_name(name: &str, descriptor: &ThemeDescriptor) -> String {
    format!("{}-{}", slugify(name), descriptor.package_suffix())
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Scripts {
    pub dev: String,
    pub build: String,
    pub start: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub private: bool,
    pub version: String,
    pub scripts: Scripts,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    pub fn new(name: &str, descriptor: &ThemeDescriptor) -> Self {
        let dependencies = [
            ("next", NEXT_VERSION),
            ("react", REACT_VERSION),
            ("react-dom", REACT_VERSION),
        ];
        let dev_dependencies = [
            ("@types/node", "^20.11.0"),
            ("@types/react", "^18.2.0"),
            ("@types/react-dom", "^18.2.0"),
            ("autoprefixer", "^10.4.17"),
            ("postcss", "^8.4.35"),
            ("tailwindcss", "^3.4.1"),
            ("typescript", "^5.3.3"),
        ];

        Self {
            name: package_name(name, descriptor),
            private: true,
            version: "0.1.0".to_string(),
            scripts: Scripts {
                dev: "next dev".to_string(),
                build: "next build".to_string(),
                start: "next start".to_string(),
            },
            dependencies: to_map(&dependencies),
            dev_dependencies: to_map(&dev_dependencies),
        }
    }

    pub fn to_json(&self) -> ExportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn to_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
