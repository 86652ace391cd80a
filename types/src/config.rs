use std::sync::LazyLock;

use config::{File, FileFormat};
use eyre::WrapErr;
use serde::Deserialize;
use url::Url;

use crate::{Result, Role, Rupiah, SettlementPolicy};

const EMBEDDED: &str = include_str!("../dashboard.toml");

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::embedded().expect("embedded dashboard.toml is valid"));

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub brand: String,
    pub default_role: Role,
    pub payout: PayoutConfig,
    pub charts: ScriptBundle,
    pub scene: SceneConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayoutConfig {
    pub policy_days: u8,
    pub minimum: Rupiah,
    pub reseller_balance: Rupiah,
    pub platform_balance: Rupiah,
}

impl PayoutConfig {
    pub fn policy(&self) -> SettlementPolicy {
        SettlementPolicy::Delayed {
            days: self.policy_days,
        }
    }
}

/// Scripts injected in order, followed by polling `ready` until it is truthy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScriptBundle {
    pub scripts: Vec<Script>,
    /// A JS expression that evaluates truthy once the library is usable.
    pub ready: String,
    pub poll_interval_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Script {
    pub src: Url,
    #[serde(default)]
    pub module: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SceneConfig {
    pub url: Url,
    pub viewer: ScriptBundle,
}

impl Config {
    /// The configuration compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::layered(&[])
    }

    /// The embedded configuration with TOML overrides applied in order.
    pub fn layered(overrides: &[&str]) -> Result<Self> {
        let builder = overrides.iter().fold(
            config::Config::builder().add_source(File::from_str(EMBEDDED, FileFormat::Toml)),
            |builder, toml| builder.add_source(File::from_str(toml, FileFormat::Toml)),
        );

        let config = builder
            .build()
            .wrap_err("failed to read dashboard config")?
            .try_deserialize()
            .wrap_err("failed to parse dashboard config")?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = Config::embedded().unwrap();
        assert_eq!(config.brand, "DigitalPay");
        assert_eq!(config.default_role, Role::Reseller);
        assert_eq!(config.payout.policy(), SettlementPolicy::T_PLUS_5);
        assert_eq!(config.payout.minimum, Rupiah(50_000));
        assert_eq!(config.charts.scripts.len(), 1);
        assert!(!config.charts.scripts[0].module);
        assert_eq!(config.charts.ready, "window.ApexCharts");
        assert!(config.scene.viewer.scripts[0].module);
    }

    #[test]
    fn static_matches_embedded() {
        assert_eq!(*CONFIG, Config::embedded().unwrap());
    }

    #[test]
    fn overrides_win() {
        let config = Config::layered(&[
            "brand = \"ResellerPay\"\ndefault_role = \"High Admin\"",
            "[payout]\npolicy_days = 2",
        ])
        .unwrap();
        assert_eq!(config.brand, "ResellerPay");
        assert_eq!(config.default_role, Role::HighAdmin);
        assert_eq!(config.payout.policy_days, 2);
        assert_eq!(config.payout.reseller_balance, Rupiah(1_250_000));
    }

    #[test]
    fn bad_values_are_reported() {
        let e = Config::layered(&["default_role = \"Janitor\""]).unwrap_err();
        assert!(e.message.contains("failed to parse dashboard config"), "{e}");

        let e = Config::layered(&["[charts]\nscripts = [{ src = \"not a url\" }]"]).unwrap_err();
        assert!(e.message.contains("failed to parse dashboard config"), "{e}");
    }
}
