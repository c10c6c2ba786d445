use std::cell::{
    Ref,
    RefCell
};
use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;

use crate::math::integration::quadratureerror::QuadratureError;
use crate::math::integration::semiinfinite::{
    SemiInfiniteIntegrator,
    SemiInfiniteSettings
};


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    semi_infinite: SemiInfiniteSettings
}

pub struct Configuration {
    semi_infinite_settings_cell: RefCell<SemiInfiniteSettings>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            semi_infinite_settings_cell: RefCell::new(SemiInfiniteSettings::default())
        }
    }

    pub fn semi_infinite_settings(&self) -> Ref<'_, SemiInfiniteSettings> {
        self.semi_infinite_settings_cell.borrow()
    }

    pub fn semi_infinite_integrator(&self) -> SemiInfiniteIntegrator {
        SemiInfiniteIntegrator::new(*self.semi_infinite_settings())
    }

    pub fn from_reader(&self, file_path: String) -> Result<(), QuadratureError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.apply(json_prop)
    }

    pub fn from_json_str(&self, json: &str) -> Result<(), QuadratureError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.apply(json_prop)
    }

    fn apply(&self, json_prop: ConfigurationJsonProp) -> Result<(), QuadratureError> {
        json_prop.semi_infinite.validate()?;
        *self.semi_infinite_settings_cell.borrow_mut() = json_prop.semi_infinite;
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_without_input() {
        let config = Configuration::new();
        assert_eq!(*config.semi_infinite_settings(), SemiInfiniteSettings::default());
    }

    #[test]
    fn test_from_json_str() {
        let config = Configuration::new();
        config
            .from_json_str(r#"{"semi_infinite": {"lower_bound": 1.5, "subdivisions": 20}}"#)
            .unwrap();
        assert_eq!(*config.semi_infinite_settings(), SemiInfiniteSettings::new(1.5, 20));
        assert_eq!(config.semi_infinite_integrator().evaluations(), 300);
    }

    #[test]
    fn test_missing_section_keeps_defaults() {
        let config = Configuration::new();
        config.from_json_str("{}").unwrap();
        assert_eq!(*config.semi_infinite_settings(), SemiInfiniteSettings::default());
    }

    #[test]
    fn test_rejects_zero_subdivisions() {
        let config = Configuration::new();
        let result = config.from_json_str(r#"{"semi_infinite": {"subdivisions": 0}}"#);
        assert!(matches!(result, Err(QuadratureError::InvalidSubdivisions(0))));
        assert_eq!(*config.semi_infinite_settings(), SemiInfiniteSettings::default());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let config = Configuration::new();
        let result = config.from_json_str(r#"{"semi_infinite": {"subdivisions": -3}}"#);
        assert!(matches!(result, Err(QuadratureError::JsonParseError(_))));
    }

    #[test]
    fn test_from_reader() {
        let path = std::env::temp_dir().join(format!("compquad-config-{}.json", std::process::id()));
        {
            let mut file = File::create(&path).unwrap();
            write!(file, r#"{{"semi_infinite": {{"lower_bound": -2.0}}}}"#).unwrap();
        }
        let config = Configuration::new();
        config.from_reader(path.to_string_lossy().into_owned()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(*config.semi_infinite_settings(), SemiInfiniteSettings::new(-2.0, 5));
    }

    #[test]
    fn test_from_reader_missing_file() {
        let config = Configuration::new();
        let result = config.from_reader("/nonexistent/compquad/config.json".to_owned());
        assert!(matches!(result, Err(QuadratureError::IOError(_))));
    }
}
