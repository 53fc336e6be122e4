//! Enumerations shared by the component model and the compose core

use std::fmt;
use std::str::FromStr;

/// Kind of bundle a unit represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BundleKind {
    #[default]
    Unknown,
    Package,
    Limba,
    Flatpak,
    Appimage,
    Snap,
    Tarball,
    Cabinet,
    Linglong,
    Sysupdate,
}

impl BundleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BundleKind::Unknown => "unknown",
            BundleKind::Package => "package",
            BundleKind::Limba => "limba",
            BundleKind::Flatpak => "flatpak",
            BundleKind::Appimage => "appimage",
            BundleKind::Snap => "snap",
            BundleKind::Tarball => "tarball",
            BundleKind::Cabinet => "cabinet",
            BundleKind::Linglong => "linglong",
            BundleKind::Sysupdate => "sysupdate",
        }
    }

    /// True for every known kind except `package`
    pub fn is_non_package_bundle(self) -> bool {
        !matches!(self, BundleKind::Unknown | BundleKind::Package)
    }
}

impl fmt::Display for BundleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BundleKind {
    type Err = std::convert::Infallible;

    /// Unrecognized names map to [`BundleKind::Unknown`]
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "package" => BundleKind::Package,
            "limba" => BundleKind::Limba,
            "flatpak" => BundleKind::Flatpak,
            "appimage" => BundleKind::Appimage,
            "snap" => BundleKind::Snap,
            "tarball" => BundleKind::Tarball,
            "cabinet" => BundleKind::Cabinet,
            "linglong" => BundleKind::Linglong,
            "sysupdate" => BundleKind::Sysupdate,
            _ => BundleKind::Unknown,
        })
    }
}

/// Type of a software component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComponentKind {
    #[default]
    Unknown,
    Generic,
    DesktopApp,
    ConsoleApp,
    WebApp,
    Service,
    Addon,
    Runtime,
    Font,
    Codec,
    InputMethod,
    OperatingSystem,
    Firmware,
    Driver,
    Localization,
    Repository,
    IconTheme,
}

impl ComponentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Unknown => "unknown",
            ComponentKind::Generic => "generic",
            ComponentKind::DesktopApp => "desktop-application",
            ComponentKind::ConsoleApp => "console-application",
            ComponentKind::WebApp => "web-application",
            ComponentKind::Service => "service",
            ComponentKind::Addon => "addon",
            ComponentKind::Runtime => "runtime",
            ComponentKind::Font => "font",
            ComponentKind::Codec => "codec",
            ComponentKind::InputMethod => "inputmethod",
            ComponentKind::OperatingSystem => "operating-system",
            ComponentKind::Firmware => "firmware",
            ComponentKind::Driver => "driver",
            ComponentKind::Localization => "localization",
            ComponentKind::Repository => "repository",
            ComponentKind::IconTheme => "icon-theme",
        }
    }
}

impl FromStr for ComponentKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "generic" => ComponentKind::Generic,
            "desktop-application" | "desktop" => ComponentKind::DesktopApp,
            "console-application" => ComponentKind::ConsoleApp,
            "web-application" => ComponentKind::WebApp,
            "service" => ComponentKind::Service,
            "addon" => ComponentKind::Addon,
            "runtime" => ComponentKind::Runtime,
            "font" => ComponentKind::Font,
            "codec" => ComponentKind::Codec,
            "inputmethod" => ComponentKind::InputMethod,
            "operating-system" => ComponentKind::OperatingSystem,
            "firmware" => ComponentKind::Firmware,
            "driver" => ComponentKind::Driver,
            "localization" => ComponentKind::Localization,
            "repository" => ComponentKind::Repository,
            "icon-theme" => ComponentKind::IconTheme,
            _ => ComponentKind::Unknown,
        })
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a component merges with data from other sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeKind {
    #[default]
    None,
    Replace,
    Append,
    RemoveComponent,
}

/// Where release information for a component lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleasesKind {
    #[default]
    Embedded,
    External,
}
