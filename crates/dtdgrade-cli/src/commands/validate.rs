//! The `dtdgrade validate` command.

use std::path::PathBuf;

use anyhow::Result;

use dtdgrade_core::traits::DtdValidator;
use dtdgrade_validator::Libxml2Validator;

pub fn execute(xml_file: PathBuf, dtd_file: PathBuf) -> Result<()> {
    let validator = Libxml2Validator::new();

    if validator.validate(&xml_file, &dtd_file)? {
        println!("Valid !");
    } else {
        println!("Not valid !");
    }

    Ok(())
}
