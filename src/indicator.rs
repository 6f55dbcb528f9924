use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Configuration for a technical indicator.
///
/// Every configurable indicator has a corresponding config type that holds
/// its parameters (window lengths, EMA spans). Configs are value types:
/// cheap to clone, compare, and hash.
///
/// Parameter accessors are inherent on each config type rather than part of
/// this trait — indicators do not share a parameter shape ([`BbConfig`] has
/// one window, [`MacdConfig`] three spans).
///
/// [`BbConfig`]: crate::BbConfig
/// [`MacdConfig`]: crate::MacdConfig
pub trait IndicatorConfig: Sized + PartialEq + Eq + Hash + Display + Debug {
    /// Builder type for constructing this config.
    type Builder: IndicatorConfigBuilder<Self>;

    /// Returns a new builder with default values.
    fn builder() -> Self::Builder;
}

/// Builder for an [`IndicatorConfig`].
pub trait IndicatorConfigBuilder<Config>
where
    Config: IndicatorConfig,
{
    /// Builds the config. Panics if required fields are missing.
    #[must_use]
    fn build(self) -> Config;
}
