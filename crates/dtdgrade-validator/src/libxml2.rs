//! Safe wrapper around libxml2 DTD validation.
//!
//! The document is parsed through the crate's safe `Parser`; DTD parsing
//! and validation go through the raw bindings, with every handle freed
//! before returning.

use std::ffi::CString;
use std::path::Path;

use libxml::bindings;
use libxml::parser::Parser;

use dtdgrade_core::error::ValidateError;
use dtdgrade_core::traits::DtdValidator;

/// Validates XML documents against external DTD schemas using libxml2.
pub struct Libxml2Validator {
    parser: Parser,
}

impl Libxml2Validator {
    pub fn new() -> Self {
        Self {
            parser: Parser::default(),
        }
    }
}

impl Default for Libxml2Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Owned libxml2 DTD handle, freed on drop.
struct Dtd(bindings::xmlDtdPtr);

impl Drop for Dtd {
    fn drop(&mut self) {
        unsafe { bindings::xmlFreeDtd(self.0) }
    }
}

fn parse_dtd(path: &Path) -> Result<Dtd, ValidateError> {
    let c_path = CString::new(path.to_string_lossy().as_bytes()).map_err(|_| {
        ValidateError::Internal(format!("schema path contains a NUL byte: {}", path.display()))
    })?;

    let dtd = unsafe {
        bindings::xmlParseDTD(
            std::ptr::null(),
            c_path.as_ptr() as *const bindings::xmlChar,
        )
    };

    if dtd.is_null() {
        Err(ValidateError::MalformedSchema {
            path: path.to_path_buf(),
            reason: "libxml2 could not parse the DTD".into(),
        })
    } else {
        Ok(Dtd(dtd))
    }
}

impl DtdValidator for Libxml2Validator {
    fn name(&self) -> &str {
        "libxml2"
    }

    fn validate(&self, document: &Path, schema: &Path) -> Result<bool, ValidateError> {
        let doc = self
            .parser
            .parse_file(&document.to_string_lossy())
            .map_err(|e| ValidateError::MalformedDocument {
                path: document.to_path_buf(),
                reason: format!("{e:?}"),
            })?;

        let dtd = parse_dtd(schema)?;

        let valid = unsafe {
            let ctxt = bindings::xmlNewValidCtxt();
            if ctxt.is_null() {
                return Err(ValidateError::Internal(
                    "could not allocate a libxml2 validation context".into(),
                ));
            }
            let rc = bindings::xmlValidateDtd(ctxt, doc.doc_ptr(), dtd.0);
            bindings::xmlFreeValidCtxt(ctxt);
            rc == 1
        };

        Ok(valid)
    }
}
