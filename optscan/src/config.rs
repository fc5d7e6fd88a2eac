//! Option specifications and the validated registry built from them.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// How an option is recognized on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Matched against raw argv before parsing; short-circuits everything.
    Early,
    /// Introduced by its own prefix occurrence, e.g. `--verbose`.
    Standalone,
    /// Single character, bundlable after one prefix, e.g. `-vxz`.
    Groupable,
}

impl Category {
    fn bit(self) -> u8 {
        match self {
            Category::Early => 1,
            Category::Standalone => 1 << 1,
            Category::Groupable => 1 << 2,
        }
    }
}

/// Set of categories bound to one prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySet(u8);

impl CategorySet {
    pub fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn insert(&mut self, category: Category) {
        self.0 |= category.bit();
    }
}

/// Whether an option takes an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgPolicy {
    None,
    Required,
    Optional,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: String,
    pub prefix: String,
    pub category: Category,
    pub policy: ArgPolicy,
    /// Used by `Optional` options given without a value.
    pub default_value: String,
}

impl OptionSpec {
    pub fn new(prefix: &str, name: &str, category: Category) -> Self {
        OptionSpec {
            name: name.to_string(),
            prefix: prefix.to_string(),
            category,
            policy: ArgPolicy::None,
            default_value: String::new(),
        }
    }

    pub fn early(prefix: &str, name: &str) -> Self {
        Self::new(prefix, name, Category::Early)
    }

    pub fn standalone(prefix: &str, name: &str) -> Self {
        Self::new(prefix, name, Category::Standalone)
    }

    pub fn groupable(prefix: &str, name: char) -> Self {
        Self::new(prefix, name.encode_utf8(&mut [0; 4]), Category::Groupable)
    }

    pub fn required(mut self) -> Self {
        self.policy = ArgPolicy::Required;
        self
    }

    /// Accept an optional argument, falling back to `default` when absent.
    pub fn optional(mut self, default: &str) -> Self {
        self.policy = ArgPolicy::Optional;
        self.default_value = default.to_string();
        self
    }

    /// `prefix + name`, the form an early option must take to match.
    pub fn literal(&self) -> String {
        format!("{}{}", self.prefix, self.name)
    }
}

/// Validated lookup tables for one parse call.
#[derive(Debug, Clone)]
pub struct Config {
    options: HashMap<String, OptionSpec>,
    prefixes: HashMap<String, CategorySet>,
}

impl Config {
    /// Validate `specs` and build the registry.
    ///
    /// With no specs at all, falls back to the GNU layout: `-` groupable and
    /// `--` standalone, with every option unknown.
    pub fn new(specs: &[OptionSpec]) -> Result<Config> {
        if specs.is_empty() {
            let mut prefixes = HashMap::new();
            prefixes.insert("-".to_string(), single(Category::Groupable));
            prefixes.insert("--".to_string(), single(Category::Standalone));
            return Ok(Config {
                options: HashMap::new(),
                prefixes,
            });
        }

        let mut options: HashMap<String, OptionSpec> = HashMap::new();
        let mut prefixes: HashMap<String, CategorySet> = HashMap::new();

        for spec in specs {
            if spec.category == Category::Groupable && spec.name.chars().count() > 1 {
                return Err(Error::GroupableNameTooLong {
                    prefix: spec.prefix.clone(),
                    name: spec.name.clone(),
                });
            }
            if options.contains_key(&spec.name) {
                return Err(Error::DuplicateOption {
                    name: spec.name.clone(),
                });
            }
            if spec.name.is_empty() {
                return Err(Error::EmptyOptionName {
                    prefix: spec.prefix.clone(),
                });
            }
            if spec.prefix.is_empty() {
                return Err(Error::EmptyPrefix {
                    name: spec.name.clone(),
                });
            }

            let set = prefixes.entry(spec.prefix.clone()).or_default();
            set.insert(spec.category);
            if set.contains(Category::Standalone) && set.contains(Category::Groupable) {
                return Err(Error::AmbiguousPrefix {
                    prefix: spec.prefix.clone(),
                });
            }

            options.insert(spec.name.clone(), spec.clone());
        }

        Ok(Config { options, prefixes })
    }

    /// Every configured prefix, in no particular order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefixes.keys().map(String::as_str)
    }

    pub fn categories(&self, prefix: &str) -> CategorySet {
        self.prefixes.get(prefix).copied().unwrap_or_default()
    }

    pub fn find(&self, prefix: &str, name: &str, category: Category) -> Option<&OptionSpec> {
        self.options
            .get(name)
            .filter(|spec| spec.prefix == prefix && spec.category == category)
    }
}

fn single(category: Category) -> CategorySet {
    let mut set = CategorySet::default();
    set.insert(category);
    set
}
