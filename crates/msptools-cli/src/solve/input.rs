use anyhow::{Context, Result};
use clap::ArgMatches;
use msptools::Method;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::util::{validate_input_file, validate_output_file};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SolveConfig {
    pub matrix_file: String,
    pub rhs_file: String,
    pub solution_file: String,
    pub method: String,
    pub print_arrays: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        SolveConfig {
            matrix_file: String::new(),
            rhs_file: String::new(),
            solution_file: String::from("x.txt"),
            method: String::from("gesv"),
            print_arrays: false,
        }
    }
}

impl SolveConfig {
    /// Load `config_path` (if any) field by field, then apply command-line
    /// overrides.
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => SolveConfig::from_file(path)?,
            None => SolveConfig::default(),
        };

        if let Some(matrix_file) = matches.get_one::<String>("A") {
            config.matrix_file = matrix_file.clone();
        }
        if let Some(rhs_file) = matches.get_one::<String>("b") {
            config.rhs_file = rhs_file.clone();
        }
        if let Some(solution_file) = matches.get_one::<String>("x") {
            config.solution_file = solution_file.clone();
        }
        if let Some(method) = matches.get_one::<String>("method") {
            config.method = method.clone();
        }
        if matches.get_flag("print") {
            config.print_arrays = true;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(config_path: &PathBuf) -> Result<Self> {
        let config_json = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let partial: serde_json::Value = serde_json::from_str(&config_json)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
        let mut config = SolveConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    if let Ok(parsed) = serde_json::from_value(val.clone()) {
                        config.$field = parsed;
                    } else {
                        log::warn!(
                            "Config Invalid value for '{}', using default: {:?}",
                            stringify!($field), config.$field
                        );
                    }
                } else {
                    log::warn!(
                        "Config Missing field '{}', using default: {:?}",
                        stringify!($field), config.$field
                    );
                }
            };
        }

        load_or_default!(matrix_file);
        load_or_default!(rhs_file);
        load_or_default!(solution_file);
        load_or_default!(method);
        load_or_default!(print_arrays);

        Ok(config)
    }

    pub fn method(&self) -> Result<Method> {
        self.method.parse::<Method>().map_err(anyhow::Error::msg)
    }

    fn validate(&self) -> Result<()> {
        self.method()?;
        validate_input_file(&self.matrix_file).context("Matrix file A")?;
        validate_input_file(&self.rhs_file).context("Right-hand side file b")?;
        validate_output_file(&self.solution_file).context("Solution file x")?;
        Ok(())
    }
}
