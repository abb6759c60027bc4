//! Known upload providers.

use std::fmt;

/// An external storage or pinning service files can be forwarded to.
///
/// The declaration order is the registry order: multi-provider uploads always
/// visit providers in this order, whatever order the caller listed them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Provider {
    /// Dolpin document gateway.
    Dolpin,
    /// Cloudinary media upload API.
    Cloudinary,
    /// Pinata IPFS pinning.
    Pinata,
    /// Starton IPFS storage.
    Starton,
}

impl Provider {
    /// All providers, in registry order.
    pub const ALL: [Self; 4] = [Self::Dolpin, Self::Cloudinary, Self::Pinata, Self::Starton];

    /// Name used by callers in the selection list.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dolpin => "Dolpin",
            Self::Cloudinary => "Cloudinary",
            Self::Pinata => "Pinata",
            Self::Starton => "Starton",
        }
    }

    /// Looks up a provider by its selection name. Matching is case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
