//! Configuration module - Generator constants

/// Default values
pub mod defaults {
    /// Component name used when none is given
    pub const COMPONENT_NAME: &str = "MyComponent";
}

/// Recognized keys
pub mod keys {
    /// Input key holding the component name
    pub const COMPONENT_NAME: &str = "component_name";

    /// Output key holding the generated source
    pub const COMPONENT: &str = "component";
}
