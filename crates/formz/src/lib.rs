//! # formz
//!
//! Client-side validation support for server-rendered forms.
//!
//! Two pieces of output are generated from a form definition:
//!
//! - **Data attributes** placed on the `<form>` element, reflecting field
//!   values (`formz-value-*`), valid fields (`formz-valid-*`) and errors
//!   (`formz-error-*`) of the current request.
//! - **An activation script** registering, for each validator gated by an
//!   activation condition, a callback telling the client runtime whether the
//!   validator should run.
//!
//! ```rust,ignore
//! use formz::{FormConfiguration, FormzContext, ValidationResult};
//!
//! let form = FormConfiguration::load("forms/contact.toml")?;
//! let context = FormzContext::default();
//!
//! let attributes = context.build_data_attributes(&submitted, &ValidationResult::new(), &form);
//! let script = context.build_activation_script(&form)?;
//! ```

pub mod attributes;
pub mod condition;
pub mod config;
pub mod context;
pub mod error;
pub mod form;
pub mod js;
pub mod naming;
pub mod result;
pub mod script;
pub mod values;

pub use attributes::{build_data_attributes, DataAttributeMapper, DataAttributes};
pub use condition::{ConditionItem, ConditionProcessor, JavaScriptProcessor};
pub use config::FormzSettings;
pub use context::{cache_identifier, FormzContext};
pub use error::{FormzError, Result};
pub use form::{Activation, Field, FormConfiguration, Validator};
pub use naming::clean_name;
pub use result::{FieldError, FieldResult, ValidationResult};
pub use script::{build_activation_script, DEFAULT_RULE_SET};
pub use values::{FieldValue, FormValues};
