//! rn-helper - Gerador de componentes React Native
//!
//! Emits the source of a minimal React Native component for a given name.
//!
//! # Uso
//! ```
//! use rn_helper::{ComponentParams, generate_component};
//!
//! let generated = generate_component(&ComponentParams::new().with_name("Greeting"));
//! assert!(generated.component.starts_with("import React from 'react';\n"));
//! assert!(generated.component.ends_with("export default Greeting;\n"));
//! ```

pub mod core;

pub use crate::core::params::{ComponentParams, FallbackPolicy};
pub use crate::core::template::{GeneratedComponent, generate_component, render};
