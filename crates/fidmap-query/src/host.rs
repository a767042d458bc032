//! Local host identity

/// Supplies the node name used when a query does not name one
pub trait CurrentHostProvider {
    fn current_host(&self) -> String;
}

impl<T: CurrentHostProvider + ?Sized> CurrentHostProvider for Box<T> {
    fn current_host(&self) -> String {
        (**self).current_host()
    }
}

/// Reads the machine's hostname
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl CurrentHostProvider for SystemHost {
    fn current_host(&self) -> String {
        gethostname::gethostname().to_string_lossy().into_owned()
    }
}

/// Always reports the same name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHost(pub String);

impl FixedHost {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl CurrentHostProvider for FixedHost {
    fn current_host(&self) -> String {
        self.0.clone()
    }
}
