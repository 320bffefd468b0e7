use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// OCR executable, looked up on PATH unless absolute.
    pub tesseract_bin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tesseract_bin: "tesseract".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("SLIP_"))
            .extract()
    }
}
