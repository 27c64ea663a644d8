use recall_srs::SchedulerConfig;
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

#[derive(Deserialize)]
struct EnvVars {
    #[serde(default)]
    app_env: Environment,
}

#[derive(Clone, Debug)]
pub struct SimConfig {
    pub env: Environment,
    pub scheduler: SchedulerConfig,
}

impl SimConfig {
    /// Read `APP_ENV` and the `SRS_`-prefixed scheduler settings.
    pub fn from_env() -> anyhow::Result<Self> {
        let vars: EnvVars = envy::from_env()?;
        Ok(Self {
            env: vars.app_env,
            scheduler: SchedulerConfig::from_env()?,
        })
    }
}
