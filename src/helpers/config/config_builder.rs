use super::*;

pub type ConfigEntrySetterFn<'a, T> = Box<dyn FnMut(T, String) -> Result<(), Box<dyn Error>> + 'a>;

pub enum ConfigEntrySetter<'a> {
    Bool(ConfigEntrySetterFn<'a, bool>),
    String(ConfigEntrySetterFn<'a, String>),
    Int(ConfigEntrySetterFn<'a, i64>),
    Float(ConfigEntrySetterFn<'a, f64>),
}

impl<'a> fmt::Display for ConfigEntrySetter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Bool(_) => "bool",
                Self::String(_) => "string",
                Self::Int(_) => "int",
                Self::Float(_) => "float",
            }
        )
    }
}

impl<'a> ConfigEntrySetter<'a> {
    /// Sets the entry from a TOML value. Integers are accepted where floats are expected.
    pub fn set_toml(&mut self, value: toml::Value, source: String) -> Result<(), Box<dyn Error>> {
        match (self, value) {
            (Self::Bool(set), toml::Value::Boolean(v)) => set(v, source),
            (Self::String(set), toml::Value::String(v)) => set(v, source),
            (Self::Int(set), toml::Value::Integer(v)) => set(v, source),
            (Self::Float(set), toml::Value::Float(v)) => set(v, source),
            (Self::Float(set), toml::Value::Integer(v)) => set(v as f64, source),
            (setter, value) => {
                Err(format!("{} is not valid for {} (expected: {})", value, source, setter).into())
            }
        }
    }

    /// Sets the entry from command line text. A bool with no value means true.
    pub fn set_text(&mut self, text: Option<&str>, source: String) -> Result<(), Box<dyn Error>> {
        let text = match (text, &mut *self) {
            (Some(text), _) => text,
            (None, Self::Bool(set)) => return set(true, source),
            (None, setter) => return Err(format!("{} needs a {} value", source, setter).into()),
        };
        let result = match self {
            Self::Bool(set) => text.parse::<bool>().ok().map(|v| set(v, source.clone())),
            Self::String(set) => Some(set(text.to_string(), source.clone())),
            Self::Int(set) => text.parse::<i64>().ok().map(|v| set(v, source.clone())),
            Self::Float(set) => text.parse::<f64>().ok().map(|v| set(v, source.clone())),
        };
        match result {
            Some(result) => result,
            None => Err(format!("{} is not valid for {} (expected: {})", text, source, self).into()),
        }
    }
}

pub trait ConfigEntry {
    fn name(&self) -> &str;
    fn help(&self) -> &str;
    fn setter(&mut self) -> ConfigEntrySetter;
    fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>>;
}

impl dyn ConfigEntry {
    pub fn new_bool<F>(name: &str, help: &str, default_value: bool, apply: F) -> Box<Self>
    where
        F: Fn(&mut MasterConfig, bool, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
    {
        ConfigEntryImpl::new(name, help, default_value, apply, |target| {
            ConfigEntrySetter::Bool(Box::new(move |value, source| {
                target.value = value;
                target.source = Some(source);
                Ok(())
            }))
        })
    }

    pub fn new_string<
        F: Fn(&mut MasterConfig, String, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
    >(
        name: &str,
        help: &str,
        default_value: &str,
        apply: F,
    ) -> Box<Self> {
        ConfigEntryImpl::new(name, help, default_value.to_string(), apply, |target| {
            ConfigEntrySetter::String(Box::new(move |value, source| {
                target.value = value;
                target.source = Some(source);
                Ok(())
            }))
        })
    }

    pub fn new_int<F>(name: &str, help: &str, default_value: i64, apply: F) -> Box<Self>
    where
        F: Fn(&mut MasterConfig, i64, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
    {
        ConfigEntryImpl::new(name, help, default_value, apply, |target| {
            ConfigEntrySetter::Int(Box::new(move |value, source| {
                target.value = value;
                target.source = Some(source);
                Ok(())
            }))
        })
    }

    pub fn new_float<
        F: Fn(&mut MasterConfig, f64, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
    >(
        name: &str,
        help: &str,
        default_value: f64,
        apply: F,
    ) -> Box<Self> {
        ConfigEntryImpl::new(name, help, default_value, apply, |target| {
            ConfigEntrySetter::Float(Box::new(move |value, source| {
                target.value = value;
                target.source = Some(source);
                Ok(())
            }))
        })
    }

    pub fn new_enum(name: &str, help: &str, variants: Vec<ConfigEntryVariant>) -> Box<Self> {
        assert!(!variants.is_empty());
        let mut help = help.to_string();
        for variant in &variants {
            help.push_str(&format!("\n  {}: {}", variant.name, variant.help))
        }
        ConfigEntryImpl::new(
            name,
            &help,
            variants[0].name.clone(),
            move |conf, value, source| {
                for variant in &variants {
                    if variant.name == value {
                        (variant.apply_fn)(conf, source);
                        return Ok(());
                    }
                }
                Err(format!(
                    "{} has invalid value {}, valid options are {}",
                    source.unwrap_or("default"),
                    value,
                    variants
                        .iter()
                        .map(|v| v.name.clone())
                        .collect::<Vec<String>>()
                        .join(", "),
                )
                .into())
            },
            |target| {
                ConfigEntrySetter::String(Box::new(move |value, source| {
                    target.value = value;
                    target.source = Some(source);
                    Ok(())
                }))
            },
        )
    }

    pub fn new_enum_variant<F: Fn(&mut MasterConfig, Option<&str>) + 'static>(
        name: &str,
        help: &str,
        apply: F,
    ) -> ConfigEntryVariant {
        ConfigEntryVariant {
            name: name.to_string(),
            help: help.to_string(),
            apply_fn: Box::new(apply),
        }
    }
}

pub struct ConfigEntryVariant {
    pub name: String,
    pub help: String,
    pub apply_fn: Box<dyn Fn(&mut MasterConfig, Option<&str>)>,
}

struct SetterTarget<T> {
    pub value: T,
    /// Some if the value is not default, describes how it was set
    pub source: Option<String>,
}

struct ConfigEntryImpl<T> {
    name: String,
    help: String,
    target: SetterTarget<T>,
    apply_fn: Box<dyn Fn(&mut MasterConfig, T, Option<&str>) -> Result<(), Box<dyn Error>>>,
    setter_builder: Box<dyn Fn(&mut SetterTarget<T>) -> ConfigEntrySetter>,
}

impl<T> ConfigEntryImpl<T> {
    pub fn new<APPLY, SETTER>(
        name: &str,
        help: &str,
        default_value: T,
        apply_fn: APPLY,
        setter_builder: SETTER,
    ) -> Box<Self>
    where
        APPLY: Fn(&mut MasterConfig, T, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
        SETTER: Fn(&mut SetterTarget<T>) -> ConfigEntrySetter + 'static,
    {
        Box::new(ConfigEntryImpl {
            name: name.to_string(),
            help: help.to_string(),
            target: SetterTarget {
                value: default_value,
                source: None,
            },
            apply_fn: Box::new(apply_fn),
            setter_builder: Box::new(setter_builder),
        })
    }
}

impl<T: Clone + 'static> ConfigEntry for ConfigEntryImpl<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn help(&self) -> &str {
        &self.help
    }

    fn setter(&mut self) -> ConfigEntrySetter {
        (self.setter_builder)(&mut self.target)
    }

    fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>> {
        (self.apply_fn)(
            target,
            self.target.value.clone(),
            self.target.source.as_deref(),
        )
    }
}

pub struct ConfigBuilder {
    entries: Vec<Box<dyn ConfigEntry>>,
}

impl ConfigBuilder {
    /// Entry names have to be unique
    pub fn new(entries: Vec<Box<dyn ConfigEntry>>) -> Result<Self, Box<dyn Error>> {
        let mut names = HashSet::new();
        if let Some(duplicate) = entries.iter().find(|entry| !names.insert(entry.name())) {
            return Err(format!("configuration entry {} is defined twice", duplicate.name()).into());
        }
        Ok(Self { entries })
    }

    pub fn entry(&mut self, name: &str) -> Option<ConfigEntrySetter> {
        self.entries
            .iter_mut()
            .find(|entry| entry.name() == name)
            .map(|entry| entry.setter())
    }

    pub fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>> {
        for entry in &self.entries {
            entry
                .apply_to(target)
                .map_err(|e| format!("{} configuration option: {}", entry.name(), e))?;
        }
        Ok(())
    }
}
