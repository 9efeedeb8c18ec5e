use super::*;

/// Which Extension implementation new entities get
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtensionStrategy {
    /// SafeExtension, never shares storage
    Exclusive,
    /// SharingExtension, aliases per-type storage until written
    Sharing,
}

impl Default for ExtensionStrategy {
    fn default() -> Self {
        Self::Sharing
    }
}

impl ExtensionStrategy {
    /// A zero-valued extension. set_type() should be called before it is used.
    pub fn create(self) -> Box<dyn Extension> {
        match self {
            Self::Exclusive => Box::new(SafeExtension::default()),
            Self::Sharing => Box::new(SharingExtension::default()),
        }
    }
}

impl fmt::Display for ExtensionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Exclusive => "exclusive",
                Self::Sharing => "sharing",
            }
        )
    }
}
